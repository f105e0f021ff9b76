pub mod app;
pub mod package_card;
pub mod order_form;

pub use app::{App, AppProps};
pub use package_card::PackageCard;
pub use order_form::OrderForm;
