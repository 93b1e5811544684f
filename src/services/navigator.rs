// ============================================================================
// NAVIGATOR - Cambio de ruta de la SPA
// ============================================================================

use std::cell::RefCell;

/// Navegación de la aplicación
pub trait Navigator {
    /// Navegación interna (history.pushState + evento de cambio de ruta)
    fn navigate(&self, route: &str);

    /// Redirección dura: recarga la página en la ruta indicada
    fn redirect(&self, route: &str);

    fn current_route(&self) -> String;
}

/// Navegador en memoria: guarda la ruta actual y el historial
#[derive(Debug)]
pub struct MemoryNavigator {
    current: RefCell<String>,
    history: RefCell<Vec<String>>,
    redirects: RefCell<usize>,
}

impl MemoryNavigator {
    pub fn new(initial_route: &str) -> Self {
        Self {
            current: RefCell::new(initial_route.to_string()),
            history: RefCell::new(vec![initial_route.to_string()]),
            redirects: RefCell::new(0),
        }
    }

    pub fn history(&self) -> Vec<String> {
        self.history.borrow().clone()
    }

    pub fn redirect_count(&self) -> usize {
        *self.redirects.borrow()
    }
}

impl Default for MemoryNavigator {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Navigator for MemoryNavigator {
    fn navigate(&self, route: &str) {
        *self.current.borrow_mut() = route.to_string();
        self.history.borrow_mut().push(route.to_string());
    }

    fn redirect(&self, route: &str) {
        *self.redirects.borrow_mut() += 1;
        self.navigate(route);
    }

    fn current_route(&self) -> String {
        self.current.borrow().clone()
    }
}

/// Navegador del browser (window.history / window.location)
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserNavigator;

#[cfg(target_arch = "wasm32")]
impl Navigator for BrowserNavigator {
    fn navigate(&self, route: &str) {
        use wasm_bindgen::JsValue;

        let Some(window) = web_sys::window() else {
            return;
        };
        let pushed = window
            .history()
            .and_then(|history| history.push_state_with_url(&JsValue::NULL, "", Some(route)));
        if let Err(e) = pushed {
            log::error!("❌ Error en pushState hacia {}: {:?}", route, e);
            self.redirect(route);
            return;
        }

        // La App escucha este evento para desmontar la página actual y montar la nueva
        match web_sys::Event::new(crate::utils::constants::ROUTE_CHANGE_EVENT) {
            Ok(event) => {
                let _ = window.dispatch_event(&event);
            }
            Err(e) => log::error!("❌ Error creando evento de ruta: {:?}", e),
        }
    }

    fn redirect(&self, route: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(route) {
                log::error!("❌ Error redirigiendo a {}: {:?}", route, e);
            }
        }
    }

    fn current_route(&self) -> String {
        web_sys::window()
            .and_then(|window| window.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_navigator_tracks_history_and_redirects() {
        let navigator = MemoryNavigator::default();
        navigator.navigate("/planets");
        navigator.redirect("/login");

        assert_eq!(navigator.current_route(), "/login");
        assert_eq!(navigator.history(), vec!["/", "/planets", "/login"]);
        assert_eq!(navigator.redirect_count(), 1);
    }
}
