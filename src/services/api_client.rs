// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Catálogo (con seed de un solo intento) y creación de pedidos
// ============================================================================

use crate::models::{ApiErrorBody, OrderRequest, OrderResponse, Package, PackagesResponse};
use crate::utils::constants::{ORDER_FAILED_FALLBACK, ORDER_PATH, PACKAGES_PATH, SEED_PATH};

use super::transport::{GlooTransport, HttpReply, HttpTransport};

/// Cliente del backend de la tienda
pub struct StoreApiClient<T: HttpTransport = GlooTransport> {
    base_url: String,
    transport: T,
}

impl StoreApiClient<GlooTransport> {
    pub fn new(base_url: &str) -> Self {
        Self::with_transport(base_url, GlooTransport)
    }
}

impl<T: HttpTransport> StoreApiClient<T> {
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    #[cfg(test)]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[cfg(test)]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Carga el catálogo. Un 404 dispara el seed una única vez y se vuelve a pedir la lista.
    pub async fn fetch_catalog(&self) -> Result<Vec<Package>, String> {
        log::info!("📦 [CATALOG] Obteniendo paquetes de {}", self.base_url);

        let reply = self.transport.get(&self.url(PACKAGES_PATH)).await?;

        let reply = if reply.is_not_found() {
            log::info!("🌱 [CATALOG] Catálogo no encontrado, lanzando seed...");
            self.seed_catalog().await?;
            self.transport.get(&self.url(PACKAGES_PATH)).await?
        } else {
            reply
        };

        // El status no se comprueba: solo importa que el body sea JSON
        let packages = reply.json::<PackagesResponse>()?.into_packages();
        log::info!("✅ [CATALOG] {} paquetes cargados", packages.len());
        Ok(packages)
    }

    /// POST del seed; el status de la respuesta se ignora
    pub async fn seed_catalog(&self) -> Result<(), String> {
        let reply = self.transport.post(&self.url(SEED_PATH), None).await?;
        if !reply.ok() {
            log::warn!("⚠️ [CATALOG] Seed respondió HTTP {}", reply.status);
        }
        Ok(())
    }

    /// Crea un pedido. Errores: `detail` del backend, "Order failed", o el error de red tal cual.
    pub async fn place_order(&self, request: &OrderRequest) -> Result<OrderResponse, String> {
        log::info!(
            "🛒 [ORDER] Creando pedido: package={} player={} server={}",
            request.package_id,
            request.player_id,
            request.server_id
        );

        let body = serde_json::to_value(request)
            .map_err(|e| format!("Serialization error: {}", e))?;
        let reply = self.transport.post(&self.url(ORDER_PATH), Some(&body)).await?;

        if !reply.ok() {
            let message = order_error_message(&reply);
            log::error!("❌ [ORDER] HTTP {}: {}", reply.status, message);
            return Err(message);
        }

        let response = reply.json::<OrderResponse>()?;
        log::info!("✅ [ORDER] Pedido {} creado ({})", response.order_id, response.status);
        Ok(response)
    }
}

fn order_error_message(reply: &HttpReply) -> String {
    reply
        .json::<ApiErrorBody>()
        .ok()
        .and_then(|body| body.detail_text())
        .unwrap_or_else(|| ORDER_FAILED_FALLBACK.to_string())
}
