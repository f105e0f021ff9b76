use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::Package;
use crate::stores::ResultMessage;
use crate::utils::format_price;

#[derive(Properties, PartialEq)]
pub struct OrderFormProps {
    pub player_id: String,
    pub server_id: String,
    pub email: String,
    pub selected: Option<Package>,
    pub can_checkout: bool,
    #[prop_or(false)]
    pub submitting: bool,
    pub message: Option<ResultMessage>,
    pub on_player_id: Callback<String>,
    pub on_server_id: Callback<String>,
    pub on_email: Callback<String>,
    pub on_submit: Callback<()>,
}

fn input_value(cb: &Callback<String>) -> Callback<InputEvent> {
    cb.reform(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        input.value()
    })
}

/// Panel "Top-up Details"
#[function_component(OrderForm)]
pub fn order_form(props: &OrderFormProps) -> Html {
    let on_submit = {
        let cb = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            cb.emit(());
        })
    };

    let input_class = "w-full rounded-lg border-gray-300 focus:ring-blue-500 focus:border-blue-500";

    let button_class = classes!(
        "w-full", "rounded-lg", "py-2", "font-semibold", "text-white", "transition-colors",
        if props.can_checkout {
            classes!("bg-blue-600", "hover:bg-blue-700")
        } else {
            classes!("bg-gray-300", "cursor-not-allowed")
        },
    );

    html! {
        <form onsubmit={on_submit} class="bg-white rounded-xl border border-gray-200 p-4 shadow-sm space-y-4">
            <div>
                <label class="block text-sm text-gray-700 mb-1">{"Player ID"}</label>
                <input
                    value={props.player_id.clone()}
                    oninput={input_value(&props.on_player_id)}
                    class={input_class}
                    placeholder="e.g. 123456789"
                />
            </div>
            <div>
                <label class="block text-sm text-gray-700 mb-1">{"Server ID"}</label>
                <input
                    value={props.server_id.clone()}
                    oninput={input_value(&props.on_server_id)}
                    class={input_class}
                    placeholder="e.g. 1234"
                />
            </div>
            <div>
                <label class="block text-sm text-gray-700 mb-1">{"Email (optional)"}</label>
                <input
                    type="email"
                    value={props.email.clone()}
                    oninput={input_value(&props.on_email)}
                    class={input_class}
                    placeholder="you@example.com"
                />
            </div>
            <div>
                <label class="block text-sm text-gray-700 mb-1">{"Selected Package"}</label>
                <div class="p-3 rounded-lg border bg-gray-50 text-sm text-gray-700 min-h-[48px]">
                    {
                        match &props.selected {
                            Some(package) => html! {
                                <div class="flex items-center justify-between">
                                    <span>{ format!("{} • {} diamonds", package.name, package.diamonds) }</span>
                                    <span class="font-semibold text-blue-600">{ format_price(package.price) }</span>
                                </div>
                            },
                            None => html! { <span class="text-gray-400">{"No package selected"}</span> },
                        }
                    }
                </div>
            </div>
            <button type="submit" disabled={!props.can_checkout} class={button_class}>
                { if props.submitting { "Placing Order..." } else { "Place Order" } }
            </button>
            if let Some(message) = &props.message {
                <p class={classes!("text-sm", if message.is_error() { "text-red-600" } else { "text-green-600" })}>
                    { message.text().to_string() }
                </p>
            }
            <p class="text-xs text-gray-500">
                {"Delivery: 1-10 minutes after payment. Ensure your Player ID and Server ID are correct."}
            </p>
        </form>
    }
}
