pub mod use_storefront;

pub use use_storefront::use_storefront;
