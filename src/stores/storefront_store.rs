// ============================================================================
// STOREFRONT STORE - Estado de la tienda (use_reducer)
// ============================================================================
// Las respuestas async se aplican como acciones sobre el estado actual,
// nunca sobre una copia tomada antes del await
// ============================================================================

use std::rc::Rc;

use yew::functional::Reducible;

use crate::models::{OrderDraft, OrderRequest, OrderResponse, Package};
use crate::utils::constants::CATALOG_LOAD_ERROR;

/// Fase de la carga del catálogo
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatalogPhase {
    Loading,
    Loaded,
}

/// Fase del envío del pedido
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Submitting,
}

/// Mensaje único de resultado (éxito o error, nunca ambos)
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResultMessage {
    Success(String),
    Error(String),
}

impl ResultMessage {
    pub fn text(&self) -> &str {
        match self {
            ResultMessage::Success(text) | ResultMessage::Error(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ResultMessage::Error(_))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum StoreAction {
    CatalogLoadStarted,
    CatalogLoaded(Result<Vec<Package>, String>),
    PackageSelected(Package),
    PlayerIdChanged(String),
    ServerIdChanged(String),
    EmailChanged(String),
    OrderSubmitted,
    OrderFinished(Result<OrderResponse, String>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct StorefrontStore {
    pub catalog: CatalogPhase,
    pub packages: Vec<Package>,
    pub draft: OrderDraft,
    pub submit: SubmitPhase,
    pub message: Option<ResultMessage>,
}

impl Default for StorefrontStore {
    fn default() -> Self {
        // La carga arranca al montar, así que se empieza en Loading
        Self {
            catalog: CatalogPhase::Loading,
            packages: Vec::new(),
            draft: OrderDraft::default(),
            submit: SubmitPhase::Idle,
            message: None,
        }
    }
}

impl StorefrontStore {
    pub fn is_loading(&self) -> bool {
        self.catalog == CatalogPhase::Loading
    }

    pub fn is_submitting(&self) -> bool {
        self.submit == SubmitPhase::Submitting
    }

    pub fn can_checkout(&self) -> bool {
        self.draft.can_checkout()
    }

    /// Pedido a enviar, o None si el formulario no está listo
    pub fn order_request(&self) -> Option<OrderRequest> {
        self.draft.to_request()
    }

    pub fn apply(&mut self, action: StoreAction) {
        match action {
            StoreAction::CatalogLoadStarted => {
                self.catalog = CatalogPhase::Loading;
                self.message = None;
            }
            StoreAction::CatalogLoaded(result) => {
                match result {
                    Ok(packages) => self.packages = packages,
                    Err(e) => {
                        log::error!("❌ [STORE] Error cargando catálogo: {}", e);
                        self.message = Some(ResultMessage::Error(CATALOG_LOAD_ERROR.to_string()));
                    }
                }
                self.catalog = CatalogPhase::Loaded;
            }
            StoreAction::PackageSelected(package) => {
                self.draft.selected = Some(package);
            }
            StoreAction::PlayerIdChanged(value) => self.draft.player_id = value,
            StoreAction::ServerIdChanged(value) => self.draft.server_id = value,
            StoreAction::EmailChanged(value) => self.draft.email = value,
            StoreAction::OrderSubmitted => {
                self.submit = SubmitPhase::Submitting;
                self.message = None;
            }
            StoreAction::OrderFinished(result) => {
                match result {
                    Ok(response) => {
                        self.message = Some(ResultMessage::Success(response.confirmation()));
                        self.draft = OrderDraft::default();
                    }
                    Err(e) => self.message = Some(ResultMessage::Error(e)),
                }
                self.submit = SubmitPhase::Idle;
            }
        }
    }
}

impl Reducible for StorefrontStore {
    type Action = StoreAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn package(id: &str) -> Package {
        Package {
            id: id.to_string(),
            name: format!("Pack {}", id),
            diamonds: 100,
            bonus: None,
            price: Some(1.0),
            popular: None,
        }
    }

    fn ready_store() -> StorefrontStore {
        let mut store = StorefrontStore::default();
        store.apply(StoreAction::CatalogLoaded(Ok(vec![package("p1"), package("p2")])));
        store.apply(StoreAction::PackageSelected(package("p1")));
        store.apply(StoreAction::PlayerIdChanged("123".to_string()));
        store.apply(StoreAction::ServerIdChanged("45".to_string()));
        store.apply(StoreAction::EmailChanged("me@example.com".to_string()));
        store
    }

    #[test]
    fn test_starts_loading_without_message() {
        let store = StorefrontStore::default();
        assert!(store.is_loading());
        assert!(store.message.is_none());
        assert!(!store.can_checkout());
    }

    #[test]
    fn test_catalog_load_clears_previous_message() {
        let mut store = StorefrontStore::default();
        store.message = Some(ResultMessage::Error("old".to_string()));
        store.apply(StoreAction::CatalogLoadStarted);
        assert!(store.is_loading());
        assert_eq!(store.message, None);
    }

    #[test]
    fn test_catalog_loaded_stops_loading() {
        let store = ready_store();
        assert!(!store.is_loading());
        assert_eq!(store.packages.len(), 2);
    }

    #[test]
    fn test_catalog_failure_shows_fixed_message_and_stops_loading() {
        let mut store = StorefrontStore::default();
        store.apply(StoreAction::CatalogLoaded(Err("Parse error: eof".to_string())));
        assert!(!store.is_loading());
        assert!(store.packages.is_empty());
        assert_eq!(
            store.message,
            Some(ResultMessage::Error("Unable to load packages. Please try again later.".to_string()))
        );
    }

    #[test]
    fn test_selection_is_single_and_does_not_toggle() {
        let mut store = ready_store();
        store.apply(StoreAction::PackageSelected(package("p2")));
        assert!(store.draft.is_selected(&package("p2")));
        assert!(!store.draft.is_selected(&package("p1")));

        store.apply(StoreAction::PackageSelected(package("p2")));
        assert!(store.draft.is_selected(&package("p2")));
    }

    #[test]
    fn test_readiness_follows_fields() {
        let mut store = ready_store();
        assert!(store.can_checkout());

        store.apply(StoreAction::ServerIdChanged(String::new()));
        assert!(!store.can_checkout());
        assert!(store.order_request().is_none());

        store.apply(StoreAction::ServerIdChanged("  ".to_string()));
        assert!(store.can_checkout());
    }

    #[test]
    fn test_submit_clears_message() {
        let mut store = ready_store();
        store.message = Some(ResultMessage::Error("previous".to_string()));
        store.apply(StoreAction::OrderSubmitted);
        assert!(store.is_submitting());
        assert_eq!(store.message, None);
    }

    #[test]
    fn test_successful_order_resets_draft() {
        let mut store = ready_store();
        store.apply(StoreAction::OrderSubmitted);
        store.apply(StoreAction::OrderFinished(Ok(OrderResponse {
            order_id: "O1".to_string(),
            status: "pending".to_string(),
        })));

        assert_eq!(
            store.message,
            Some(ResultMessage::Success("Order created! ID: O1. Status: pending".to_string()))
        );
        assert_eq!(store.draft, OrderDraft::default());
        assert!(!store.is_submitting());
        assert_eq!(store.packages.len(), 2);
    }

    #[test]
    fn test_failed_order_keeps_draft() {
        let mut store = ready_store();
        store.apply(StoreAction::OrderSubmitted);
        store.apply(StoreAction::OrderFinished(Err("X".to_string())));

        assert_eq!(store.message, Some(ResultMessage::Error("X".to_string())));
        assert!(store.message.as_ref().unwrap().is_error());
        assert_eq!(store.draft.player_id, "123");
        assert!(store.can_checkout());
    }

    #[test]
    fn test_reducer_applies_to_current_state() {
        let store = Rc::new(StorefrontStore::default());
        let store = store.reduce(StoreAction::PlayerIdChanged("1".to_string()));
        let store = store.reduce(StoreAction::ServerIdChanged("2".to_string()));
        assert_eq!(store.draft.player_id, "1");
        assert_eq!(store.draft.server_id, "2");
    }

    // Flujo completo contra el transport guionizado
    mod with_api {
        use super::*;
        use crate::services::transport::testing::ScriptedTransport;
        use crate::services::transport::HttpReply;
        use crate::services::StoreApiClient;
        use futures::executor::block_on;

        #[test]
        fn test_seeded_catalog_ends_up_in_store() {
            let api = StoreApiClient::with_transport(
                "http://api.test",
                ScriptedTransport::new(vec![
                    Ok(HttpReply::new(404, "{}")),
                    Ok(HttpReply::new(200, "{}")),
                    Ok(HttpReply::new(200, r#"{"packages":[{"_id":"p9","name":"Twilight Pass","diamonds":300,"price":9.99}]}"#)),
                ]),
            );

            let mut store = StorefrontStore::default();
            store.apply(StoreAction::CatalogLoadStarted);
            store.apply(StoreAction::CatalogLoaded(block_on(api.fetch_catalog())));

            assert!(!store.is_loading());
            assert_eq!(store.message, None);
            assert_eq!(store.packages.len(), 1);
            assert_eq!(store.packages[0].id, "p9");
        }

        #[test]
        fn test_order_detail_error_shown_verbatim() {
            let api = StoreApiClient::with_transport(
                "http://api.test",
                ScriptedTransport::new(vec![Ok(HttpReply::new(422, r#"{"detail":"Invalid server"}"#))]),
            );

            let mut store = ready_store();
            let request = store.order_request().unwrap();
            store.apply(StoreAction::OrderSubmitted);
            store.apply(StoreAction::OrderFinished(block_on(api.place_order(&request))));

            assert_eq!(store.message, Some(ResultMessage::Error("Invalid server".to_string())));
            assert!(store.draft.selected.is_some());
        }

        #[test]
        fn test_order_success_clears_draft() {
            let api = StoreApiClient::with_transport(
                "http://api.test",
                ScriptedTransport::new(vec![Ok(HttpReply::new(201, r#"{"order_id":"O1","status":"pending"}"#))]),
            );

            let mut store = ready_store();
            let request = store.order_request().unwrap();
            assert_eq!(request.contact_email.as_deref(), Some("me@example.com"));
            store.apply(StoreAction::OrderSubmitted);
            store.apply(StoreAction::OrderFinished(block_on(api.place_order(&request))));

            assert_eq!(
                store.message.as_ref().map(ResultMessage::text),
                Some("Order created! ID: O1. Status: pending")
            );
            assert_eq!(store.draft.selected, None);
            assert!(store.draft.player_id.is_empty());
            assert!(store.draft.server_id.is_empty());
            assert!(store.draft.email.is_empty());
            assert!(!store.can_checkout());
        }
    }
}
