use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Paquete de diamantes tal como lo devuelve el backend
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Package {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "count")]
    pub diamonds: u64,
    #[serde(default, deserialize_with = "optional_count", skip_serializing_if = "Option::is_none")]
    pub bonus: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popular: Option<bool>,
}

impl Package {
    pub fn is_popular(&self) -> bool {
        self.popular.unwrap_or(false)
    }
}

/// Respuesta de GET /api/mlbb/packages
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct PackagesResponse {
    // Ausente o null = catálogo vacío
    #[serde(default)]
    pub packages: Option<Vec<Package>>,
}

impl PackagesResponse {
    pub fn into_packages(self) -> Vec<Package> {
        self.packages.unwrap_or_default()
    }
}

// Cantidades: enteros, floats enteros (86.0) o strings numéricos.
// Un valor raro en un paquete no debe tumbar el catálogo entero
fn value_as_count(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64().or_else(|| n.as_f64().and_then(float_as_count)),
        Value::String(text) => text.trim().parse::<f64>().ok().and_then(float_as_count),
        _ => None,
    }
}

fn float_as_count(value: f64) -> Option<u64> {
    (value.is_finite() && value >= 0.0).then(|| value.round() as u64)
}

fn count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_as_count(&Value::deserialize(deserializer)?).unwrap_or(0))
}

fn optional_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_as_count(&Value::deserialize(deserializer)?))
}
