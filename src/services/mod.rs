pub mod api_client;
pub mod transport;

pub use api_client::StoreApiClient;
