// ============================================================================
// FORMAT - Helpers de presentación (fechas, créditos, distancias)
// ============================================================================

use chrono::{DateTime, Utc};

/// "Jan 5, 10:30 AM", o "N/A" si el vuelo no tiene fecha
pub fn format_departure(datetime: Option<DateTime<Utc>>) -> String {
    match datetime {
        Some(dt) => dt.format("%b %-d, %I:%M %p").to_string(),
        None => "N/A".to_string(),
    }
}

/// "Jan 5, 2026, 10:30 AM" (dashboard)
pub fn format_booking_date(datetime: Option<DateTime<Utc>>) -> String {
    match datetime {
        Some(dt) => dt.format("%b %-d, %Y, %I:%M %p").to_string(),
        None => "N/A".to_string(),
    }
}

/// Entero con separador de miles: 12500 → "12,500"
fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Créditos redondeados: 12500.0 → "12,500 credits"
pub fn format_credits(amount: f64) -> String {
    format!("{} credits", group_thousands(amount.round() as i64))
}

/// Las distancias del catálogo vienen en millones de km: 225 → "225M km"
pub fn format_distance(million_km: f64) -> String {
    format!("{}M km", group_thousands(million_km.round() as i64))
}

pub fn format_travel_time(days: f64) -> String {
    match days.round() as i64 {
        1 => "1 day".to_string(),
        n => format!("{} days", group_thousands(n)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn departure_formatting() {
        let dt = Utc.with_ymd_and_hms(2026, 1, 5, 10, 30, 0).unwrap();
        assert_eq!(format_departure(Some(dt)), "Jan 5, 10:30 AM");
        assert_eq!(format_departure(None), "N/A");
        assert_eq!(format_booking_date(Some(dt)), "Jan 5, 2026, 10:30 AM");
    }

    #[test]
    fn credits_are_grouped() {
        assert_eq!(format_credits(0.0), "0 credits");
        assert_eq!(format_credits(999.0), "999 credits");
        assert_eq!(format_credits(12_500.0), "12,500 credits");
        assert_eq!(format_credits(1_234_567.4), "1,234,567 credits");
        assert_eq!(format_credits(-5_000.0), "-5,000 credits");
    }

    #[test]
    fn distance_and_travel_time() {
        assert_eq!(format_distance(225.0), "225M km");
        assert_eq!(format_distance(4_300.4), "4,300M km");
        assert_eq!(format_travel_time(1.0), "1 day");
        assert_eq!(format_travel_time(210.0), "210 days");
    }
}
