// ============================================================================
// APP - Vista principal de la tienda
// ============================================================================

use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::AppConfig;
use crate::hooks::use_storefront;
use super::{OrderForm, PackageCard};

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: AppConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let storefront = use_storefront(props.config.backend_url());
    let store = &*storefront.store;

    // Ocultar el logo si la imagen no carga
    let on_logo_error = Callback::from(|e: Event| {
        let img: HtmlElement = e.target_unchecked_into();
        let _ = img.style().set_property("display", "none");
    });

    let catalog = if store.is_loading() {
        html! { <p class="text-gray-500">{"Loading packages..."}</p> }
    } else {
        html! {
            <div class="grid sm:grid-cols-2 gap-4">
                { for store.packages.iter().map(|pkg| html! {
                    <PackageCard
                        key={pkg.id.clone()}
                        package={pkg.clone()}
                        selected={store.draft.is_selected(pkg)}
                        on_select={storefront.select_package.clone()}
                    />
                }) }
            </div>
        }
    };

    html! {
        <div class="min-h-screen bg-gradient-to-br from-indigo-50 via-blue-50 to-sky-50">
            <header class="sticky top-0 z-10 backdrop-blur bg-white/70 border-b">
                <div class="max-w-5xl mx-auto px-4 py-4 flex items-center justify-between">
                    <div class="flex items-center gap-2">
                        <img src="/mlbb.png" alt="MLBB" class="w-8 h-8" onerror={on_logo_error} />
                        <h1 class="text-xl font-bold text-gray-800">{"MLBB Diamonds Store"}</h1>
                    </div>
                    <a href="/test" class="text-sm text-gray-600 hover:text-blue-600">{"System Check"}</a>
                </div>
            </header>

            <main class="max-w-5xl mx-auto px-4 py-8">
                <section class="grid md:grid-cols-3 gap-6">
                    <div class="md:col-span-2">
                        <h2 class="text-2xl font-semibold text-gray-800 mb-4">{"Choose Package"}</h2>
                        { catalog }
                    </div>

                    <div class="md:col-span-1">
                        <h2 class="text-2xl font-semibold text-gray-800 mb-4">{"Top-up Details"}</h2>
                        <OrderForm
                            player_id={store.draft.player_id.clone()}
                            server_id={store.draft.server_id.clone()}
                            email={store.draft.email.clone()}
                            selected={store.draft.selected.clone()}
                            can_checkout={store.can_checkout()}
                            submitting={store.is_submitting()}
                            message={store.message.clone()}
                            on_player_id={storefront.set_player_id.clone()}
                            on_server_id={storefront.set_server_id.clone()}
                            on_email={storefront.set_email.clone()}
                            on_submit={storefront.place_order.clone()}
                        />
                    </div>
                </section>
            </main>

            <footer class="border-t py-6 text-center text-sm text-gray-500">
                {"Secure payments coming soon. This is a demo store."}
            </footer>
        </div>
    }
}
