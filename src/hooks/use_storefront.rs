// ============================================================================
// USE STOREFRONT HOOK - Conecta StorefrontStore con StoreApiClient
// ============================================================================

use yew::prelude::*;

use crate::models::Package;
use crate::services::StoreApiClient;
use crate::stores::{StoreAction, StorefrontStore};

#[derive(Clone)]
pub struct UseStorefrontHandle {
    pub store: UseReducerHandle<StorefrontStore>,
    pub select_package: Callback<Package>,
    pub set_player_id: Callback<String>,
    pub set_server_id: Callback<String>,
    pub set_email: Callback<String>,
    pub place_order: Callback<()>,
}

#[hook]
pub fn use_storefront(backend_url: &str) -> UseStorefrontHandle {
    let store = use_reducer(StorefrontStore::default);
    let api = use_memo(backend_url.to_string(), |url| StoreApiClient::new(url));

    // Cargar catálogo al montar (una sola vez)
    {
        let store = store.clone();
        let api = api.clone();
        use_effect_with((), move |_| {
            store.dispatch(StoreAction::CatalogLoadStarted);
            wasm_bindgen_futures::spawn_local(async move {
                let result = api.fetch_catalog().await;
                store.dispatch(StoreAction::CatalogLoaded(result));
            });
            || ()
        });
    }

    let select_package = {
        let store = store.clone();
        Callback::from(move |package: Package| {
            log::info!("💎 [STORE] Paquete seleccionado: {}", package.id);
            store.dispatch(StoreAction::PackageSelected(package));
        })
    };

    let set_player_id = {
        let store = store.clone();
        Callback::from(move |value: String| store.dispatch(StoreAction::PlayerIdChanged(value)))
    };

    let set_server_id = {
        let store = store.clone();
        Callback::from(move |value: String| store.dispatch(StoreAction::ServerIdChanged(value)))
    };

    let set_email = {
        let store = store.clone();
        Callback::from(move |value: String| store.dispatch(StoreAction::EmailChanged(value)))
    };

    let place_order = {
        let store = store.clone();
        let api = api.clone();
        Callback::from(move |_| {
            let Some(request) = store.order_request() else {
                log::warn!("⚠️ [ORDER] Formulario incompleto, no se envía");
                return;
            };

            store.dispatch(StoreAction::OrderSubmitted);

            let store = store.clone();
            let api = api.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = api.place_order(&request).await;
                store.dispatch(StoreAction::OrderFinished(result));
            });
        })
    };

    UseStorefrontHandle {
        store,
        select_package,
        set_player_id,
        set_server_id,
        set_email,
        place_order,
    }
}
