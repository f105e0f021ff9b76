pub mod package;
pub mod order;

pub use package::{Package, PackagesResponse};
pub use order::{ApiErrorBody, OrderDraft, OrderRequest, OrderResponse};
