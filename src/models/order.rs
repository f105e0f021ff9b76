use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::package::Package;

/// Borrador de pedido (solo cliente, se descarta al crear el pedido)
#[derive(Clone, PartialEq, Debug, Default)]
pub struct OrderDraft {
    pub selected: Option<Package>,
    pub player_id: String,
    pub server_id: String,
    pub email: String,
}

impl OrderDraft {
    /// Listo para enviar: usa los valores sin recortar
    pub fn can_checkout(&self) -> bool {
        self.selected.is_some() && !self.player_id.is_empty() && !self.server_id.is_empty()
    }

    pub fn is_selected(&self, package: &Package) -> bool {
        self.selected
            .as_ref()
            .map(|selected| selected.id == package.id)
            .unwrap_or(false)
    }

    /// Construye el body del POST, o None si el borrador no está listo
    pub fn to_request(&self) -> Option<OrderRequest> {
        if !self.can_checkout() {
            return None;
        }
        let package = self.selected.as_ref()?;

        Some(OrderRequest {
            player_id: self.player_id.trim().to_string(),
            server_id: self.server_id.trim().to_string(),
            package_id: package.id.clone(),
            contact_email: (!self.email.is_empty()).then(|| self.email.clone()),
        })
    }
}

/// Body de POST /api/mlbb/order
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct OrderRequest {
    pub player_id: String,
    pub server_id: String,
    pub package_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
}

/// Respuesta 2xx de POST /api/mlbb/order
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct OrderResponse {
    #[serde(default, deserialize_with = "value_as_text")]
    pub order_id: String,
    #[serde(default, deserialize_with = "value_as_text")]
    pub status: String,
}

impl OrderResponse {
    pub fn confirmation(&self) -> String {
        format!("Order created! ID: {}. Status: {}", self.order_id, self.status)
    }
}

/// Body de error (non-2xx) del backend
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ApiErrorBody {
    /// Texto del campo `detail`, si trae algo utilizable
    pub fn detail_text(&self) -> Option<String> {
        match self.detail.as_ref()? {
            Value::Null => None,
            Value::String(text) if text.is_empty() => None,
            Value::String(text) => Some(text.clone()),
            // Errores de validación: [{"loc": [...], "msg": "...", ...}]
            Value::Array(items) => {
                let messages: Vec<&str> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(Value::as_str))
                    .collect();
                if messages.is_empty() {
                    Some(Value::Array(items.clone()).to_string())
                } else {
                    Some(messages.join("; "))
                }
            }
            other => Some(other.to_string()),
        }
    }
}

// order_id / status pueden llegar como string o como número
fn value_as_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}
