use crate::filters::{parse_bound, within_bounds};
use crate::models::Planet;
use crate::utils::constants::{
    DEFAULT_DISTANCE_MAX, DEFAULT_DISTANCE_MIN, DEFAULT_TRAVEL_TIME_MAX, DEFAULT_TRAVEL_TIME_MIN,
};

/// Campos numéricos editables del filtro de planetas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanetBound {
    DistanceMin,
    DistanceMax,
    TravelTimeMin,
    TravelTimeMax,
}

impl PlanetBound {
    pub fn default_value(self) -> i64 {
        match self {
            PlanetBound::DistanceMin => DEFAULT_DISTANCE_MIN,
            PlanetBound::DistanceMax => DEFAULT_DISTANCE_MAX,
            PlanetBound::TravelTimeMin => DEFAULT_TRAVEL_TIME_MIN,
            PlanetBound::TravelTimeMax => DEFAULT_TRAVEL_TIME_MAX,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanetCriteria {
    pub search: String,
    pub distance_min: i64,
    pub distance_max: i64,
    pub travel_time_min: i64,
    pub travel_time_max: i64,
}

impl Default for PlanetCriteria {
    fn default() -> Self {
        Self {
            search: String::new(),
            distance_min: DEFAULT_DISTANCE_MIN,
            distance_max: DEFAULT_DISTANCE_MAX,
            travel_time_min: DEFAULT_TRAVEL_TIME_MIN,
            travel_time_max: DEFAULT_TRAVEL_TIME_MAX,
        }
    }
}

impl PlanetCriteria {
    pub fn set_search(&mut self, text: &str) {
        self.search = text.to_string();
    }

    /// Aplica la edición cruda de un campo numérico (fallback al valor por defecto)
    pub fn set_bound(&mut self, bound: PlanetBound, raw: &str) {
        let value = parse_bound(raw, bound.default_value());
        *self.bound_mut(bound) = value;
    }

    pub fn bound(&self, bound: PlanetBound) -> i64 {
        match bound {
            PlanetBound::DistanceMin => self.distance_min,
            PlanetBound::DistanceMax => self.distance_max,
            PlanetBound::TravelTimeMin => self.travel_time_min,
            PlanetBound::TravelTimeMax => self.travel_time_max,
        }
    }

    fn bound_mut(&mut self, bound: PlanetBound) -> &mut i64 {
        match bound {
            PlanetBound::DistanceMin => &mut self.distance_min,
            PlanetBound::DistanceMax => &mut self.distance_max,
            PlanetBound::TravelTimeMin => &mut self.travel_time_min,
            PlanetBound::TravelTimeMax => &mut self.travel_time_max,
        }
    }

    /// "Clear filters": vuelve exactamente a los valores documentados
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, planet: &Planet) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = needle.is_empty()
            || planet.name.to_lowercase().contains(&needle)
            || planet.description.to_lowercase().contains(&needle);

        matches_search
            && within_bounds(
                planet.distance_from_earth_km,
                self.distance_min,
                self.distance_max,
                DEFAULT_DISTANCE_MIN,
                DEFAULT_DISTANCE_MAX,
            )
            && within_bounds(
                planet.travel_time_days,
                self.travel_time_min,
                self.travel_time_max,
                DEFAULT_TRAVEL_TIME_MIN,
                DEFAULT_TRAVEL_TIME_MAX,
            )
    }
}

/// Subconjunto visible, en el mismo orden que la lista de entrada
pub fn filter_planets(planets: &[Planet], criteria: &PlanetCriteria) -> Vec<Planet> {
    planets
        .iter()
        .filter(|planet| criteria.matches(planet))
        .cloned()
        .collect()
}
