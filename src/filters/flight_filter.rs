use crate::filters::{parse_bound, within_bounds};
use crate::models::Flight;
use crate::utils::constants::{DEFAULT_PRICE_MAX, DEFAULT_PRICE_MIN};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceBound {
    Min,
    Max,
}

impl PriceBound {
    pub fn default_value(self) -> i64 {
        match self {
            PriceBound::Min => DEFAULT_PRICE_MIN,
            PriceBound::Max => DEFAULT_PRICE_MAX,
        }
    }
}

/// Criterios del listado de vuelos. `None` en origen/destino = cualquiera.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightCriteria {
    pub origin: Option<i64>,
    pub destination: Option<i64>,
    pub price_min: i64,
    pub price_max: i64,
}

impl Default for FlightCriteria {
    fn default() -> Self {
        Self {
            origin: None,
            destination: None,
            price_min: DEFAULT_PRICE_MIN,
            price_max: DEFAULT_PRICE_MAX,
        }
    }
}

/// Valor de un `<select>` de planeta: "" (o no numérico) → cualquiera
fn parse_planet_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

impl FlightCriteria {
    pub fn set_origin(&mut self, raw: &str) {
        self.origin = parse_planet_id(raw);
    }

    pub fn set_destination(&mut self, raw: &str) {
        self.destination = parse_planet_id(raw);
    }

    pub fn set_price(&mut self, bound: PriceBound, raw: &str) {
        let value = parse_bound(raw, bound.default_value());
        match bound {
            PriceBound::Min => self.price_min = value,
            PriceBound::Max => self.price_max = value,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, flight: &Flight) -> bool {
        let origin_match = self.origin.map_or(true, |id| flight.origin_id() == Some(id));
        let destination_match = self
            .destination
            .map_or(true, |id| flight.destination_id() == Some(id));

        origin_match
            && destination_match
            && within_bounds(
                flight.price_credits,
                self.price_min,
                self.price_max,
                DEFAULT_PRICE_MIN,
                DEFAULT_PRICE_MAX,
            )
    }
}

pub fn filter_flights(flights: &[Flight], criteria: &FlightCriteria) -> Vec<Flight> {
    flights
        .iter()
        .filter(|flight| criteria.matches(flight))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::flight::flight_fixture;
    use crate::models::planet::planet_fixture;

    fn flights() -> Vec<Flight> {
        let earth = planet_fixture(1, "Earth", 0.0, 0.0);
        let mars = planet_fixture(2, "Mars", 225.0, 210.0);
        let europa = planet_fixture(3, "Europa", 628.0, 600.0);
        vec![
            flight_fixture(10, &earth, &mars, 24_000.0),
            flight_fixture(11, &earth, &europa, 61_000.0),
            flight_fixture(12, &mars, &europa, 9_500.0),
        ]
    }

    fn ids(flights: &[Flight]) -> Vec<i64> {
        flights.iter().map(|f| f.id).collect()
    }

    #[test]
    fn blank_selects_and_default_prices_return_everything() {
        let all = flights();
        let mut criteria = FlightCriteria::default();
        criteria.set_origin("");
        criteria.set_destination("");
        criteria.set_price(PriceBound::Min, "0");
        criteria.set_price(PriceBound::Max, "50000");
        assert_eq!(filter_flights(&all, &criteria), all);
    }

    #[test]
    fn origin_and_destination_match_by_planet_id() {
        let all = flights();
        let mut criteria = FlightCriteria::default();

        criteria.set_origin("1");
        assert_eq!(ids(&filter_flights(&all, &criteria)), vec![10, 11]);

        criteria.set_destination("3");
        assert_eq!(ids(&filter_flights(&all, &criteria)), vec![11]);

        criteria.set_origin("");
        assert_eq!(ids(&filter_flights(&all, &criteria)), vec![11, 12]);
    }

    #[test]
    fn flights_without_planets_never_match_a_selected_origin() {
        let mut orphan = flights().remove(0);
        orphan.origin_planet = None;
        let mut criteria = FlightCriteria::default();
        assert!(criteria.matches(&orphan));
        criteria.set_origin("1");
        assert!(!criteria.matches(&orphan));
    }

    #[test]
    fn price_range_filters_and_invalid_input_restores_default() {
        let all = flights();
        let mut criteria = FlightCriteria::default();
        criteria.set_price(PriceBound::Min, "10000");
        criteria.set_price(PriceBound::Max, "30000");
        assert_eq!(ids(&filter_flights(&all, &criteria)), vec![10]);

        criteria.set_price(PriceBound::Max, "lots");
        assert_eq!(criteria.price_max, 50_000);
        assert_eq!(ids(&filter_flights(&all, &criteria)), vec![10, 11]);

        criteria.reset();
        assert!(criteria.is_default());
    }
}
