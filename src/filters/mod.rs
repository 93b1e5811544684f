// ============================================================================
// FILTERS - Filtrado/búsqueda en cliente sobre listas ya descargadas
// ============================================================================
// Funciones puras y síncronas; se re-evalúan en cada edición de un campo.
// ============================================================================

pub mod flight_filter;
pub mod planet_filter;

pub use flight_filter::*;
pub use planet_filter::*;

/// Parsea un límite numérico editado por el usuario: signo opcional y los
/// dígitos iniciales (`"4.5"` → 4, `"12abc"` → 12). Sin dígitos al inicio, o
/// fuera de rango, se usa el límite por defecto del campo. `"0"` es válido.
pub fn parse_bound(raw: &str, default: i64) -> i64 {
    let trimmed = raw.trim();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits = rest
        .find(|c: char| !c.is_ascii_digit())
        .map_or(rest, |end| &rest[..end]);
    if digits.is_empty() {
        return default;
    }
    format!("{}{}", sign, digits).parse().unwrap_or(default)
}

/// Rango `[min, max]`. Un extremo que vale su valor por defecto no restringe,
/// así los criterios por defecto dejan pasar la lista completa.
pub(crate) fn within_bounds(value: f64, min: i64, max: i64, default_min: i64, default_max: i64) -> bool {
    let above_min = min == default_min || value >= min as f64;
    let below_max = max == default_max || value <= max as f64;
    above_min && below_max
}
