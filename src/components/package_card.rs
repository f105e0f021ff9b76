use yew::prelude::*;

use crate::models::package::Package;
use crate::utils::{format_diamonds, format_price};

#[derive(Properties, PartialEq, Clone)]
pub struct PackageCardProps {
    pub package: Package,
    #[prop_or(false)]
    pub selected: bool,
    pub on_select: Callback<Package>,
}

/// Textos visibles del card
#[derive(Debug, PartialEq)]
pub struct CardLabels {
    pub name: String,
    pub diamonds: String,
    pub price: String,
    pub badge: Option<&'static str>,
    pub hint: &'static str,
}

impl CardLabels {
    pub fn new(package: &Package, selected: bool) -> Self {
        Self {
            name: package.name.clone(),
            diamonds: format_diamonds(package.diamonds, package.bonus),
            price: format_price(package.price),
            badge: package.is_popular().then_some("Popular"),
            hint: if selected { "Selected" } else { "Select" },
        }
    }
}

// Cualquier evento del card emite el paquete completo
fn select_handler<E: 'static>(package: &Package, on_select: &Callback<Package>) -> Callback<E> {
    let package = package.clone();
    on_select.reform(move |_: E| package.clone())
}

/// Card de paquete - sin estado propio, la selección viene del padre
#[function_component(PackageCard)]
pub fn package_card(props: &PackageCardProps) -> Html {
    let p = &props.package;
    let labels = CardLabels::new(p, props.selected);

    let card_classes = classes!(
        "group", "relative", "w-full", "text-left", "rounded-xl", "border", "p-4",
        "transition-all", "bg-white", "shadow-sm", "hover:shadow-md",
        if props.selected {
            classes!("border-blue-600", "ring-4", "ring-blue-100")
        } else {
            classes!("border-gray-200", "hover:border-blue-300")
        },
    );

    let on_click: Callback<MouseEvent> = select_handler(p, &props.on_select);

    html! {
        <button type="button" class={card_classes} onclick={on_click} data-package-id={p.id.clone()}>
            <div class="flex items-start justify-between">
                <div>
                    <p class="text-lg font-semibold text-gray-800">{ labels.name }</p>
                    <p class="text-sm text-gray-500">{ labels.diamonds }</p>
                </div>
                if let Some(badge) = labels.badge {
                    <span class="inline-flex items-center rounded-full bg-yellow-100 px-2 py-1 text-xs font-medium text-yellow-800">
                        { badge }
                    </span>
                }
            </div>
            <div class="mt-3 flex items-end justify-between">
                <p class="text-xl font-bold text-blue-600">{ labels.price }</p>
                <span class={classes!("text-xs", if props.selected { "text-blue-600" } else { "text-gray-400" })}>
                    { labels.hint }
                </span>
            </div>
        </button>
    }
}
