/// URL base del backend cuando BACKEND_URL no está definida
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

// Endpoints del backend
pub const PACKAGES_PATH: &str = "/api/mlbb/packages";
pub const SEED_PATH: &str = "/seed/mlbb";
pub const ORDER_PATH: &str = "/api/mlbb/order";

// Textos visibles
pub const CATALOG_LOAD_ERROR: &str = "Unable to load packages. Please try again later.";
pub const ORDER_FAILED_FALLBACK: &str = "Order failed";
