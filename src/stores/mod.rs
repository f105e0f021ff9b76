pub mod storefront_store;

pub use storefront_store::{ResultMessage, StoreAction, StorefrontStore};
