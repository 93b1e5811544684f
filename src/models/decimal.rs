// ============================================================================
// DECIMAL - Deserialización tolerante de campos decimales
// ============================================================================
// Los DecimalField del backend llegan como string ("12500.00"); otros campos
// numéricos llegan como número. Se aceptan ambos.
// ============================================================================

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    Text(String),
}

impl NumberOrString {
    fn into_f64<E: serde::de::Error>(self) -> Result<f64, E> {
        match self {
            NumberOrString::Number(n) => Ok(n),
            NumberOrString::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| E::custom(format!("valor decimal inválido: {:?}", s))),
        }
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    NumberOrString::deserialize(deserializer)?.into_f64()
}

/// Variante para campos opcionales o null (`distance_from_earth_km || 0`)
pub fn deserialize_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrString>::deserialize(deserializer)? {
        Some(value) => value.into_f64(),
        None => Ok(0.0),
    }
}
