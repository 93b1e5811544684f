// ============================================================================
// CATALOG STATE - Caché del último listado de planetas
// ============================================================================
// Sin TTL ni invalidación: la lista queda hasta que una página vuelve a pedirla.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::Planet;

#[derive(Clone, Default)]
pub struct CatalogState {
    planets: Rc<RefCell<Vec<Planet>>>,
    selected_planet: Rc<RefCell<Option<Planet>>>,
    loading: Rc<RefCell<bool>>,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reemplaza la lista completa
    pub fn set_planets(&self, planets: Vec<Planet>) {
        *self.planets.borrow_mut() = planets;
    }

    pub fn get_planets(&self) -> Vec<Planet> {
        self.planets.borrow().clone()
    }

    pub fn planet_count(&self) -> usize {
        self.planets.borrow().len()
    }

    pub fn set_selected_planet(&self, planet: Option<Planet>) {
        *self.selected_planet.borrow_mut() = planet;
    }

    pub fn get_selected_planet(&self) -> Option<Planet> {
        self.selected_planet.borrow().clone()
    }

    pub fn set_loading(&self, loading: bool) {
        *self.loading.borrow_mut() = loading;
    }

    pub fn get_loading(&self) -> bool {
        *self.loading.borrow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::planet::planet_fixture;

    #[test]
    fn set_planets_replaces_wholesale() {
        let catalog = CatalogState::new();
        catalog.set_planets(vec![planet_fixture(1, "Mars", 225.0, 210.0)]);
        catalog.set_planets(vec![
            planet_fixture(2, "Europa", 628.0, 600.0),
            planet_fixture(3, "Titan", 1200.0, 900.0),
        ]);

        let names: Vec<_> = catalog.get_planets().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Europa", "Titan"]);
        assert_eq!(catalog.planet_count(), 2);
    }

    #[test]
    fn selection_and_loading_flag() {
        let catalog = CatalogState::new();
        assert!(!catalog.get_loading());
        catalog.set_loading(true);
        assert!(catalog.get_loading());

        let mars = planet_fixture(1, "Mars", 225.0, 210.0);
        catalog.set_selected_planet(Some(mars.clone()));
        // La selección es una copia: refrescar la lista no la altera
        catalog.set_planets(Vec::new());
        assert_eq!(catalog.get_selected_planet(), Some(mars));
    }
}
