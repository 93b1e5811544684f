// ============================================================================
// CELESTIAL ESCAPES - Cliente web (Rust puro + MVVM)
// ============================================================================
// - Models: estructuras compartidas con la API REST
// - Services: cliente HTTP, persistencia de sesión, navegación
// - State: stores de sesión, carrito y catálogo (Rc<RefCell>)
// - Filters: filtrado en cliente de planetas y vuelos
// - ViewModels: orquestación de carga por página + lógica de UI
// - Views/DOM/App: solo en el navegador (wasm32)
// ============================================================================

pub mod config;
pub mod filters;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod views;

#[cfg(target_arch = "wasm32")]
pub use browser::*;

#[cfg(target_arch = "wasm32")]
mod browser {
    use std::cell::RefCell;

    use gloo_timers::callback::Timeout;
    use wasm_bindgen::prelude::*;

    use crate::app::App;
    use crate::config::CONFIG;
    use crate::dom::on_window_event;
    use crate::utils::constants::ROUTE_CHANGE_EVENT;

    // Instancia única de la App
    thread_local! {
        static APP: RefCell<Option<App>> = RefCell::new(None);
    }

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();

        if CONFIG.is_logging_enabled() {
            wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
        }
        log::info!("🚀 Celestial Escapes ({})", CONFIG.environment);

        let mut app = App::new(&CONFIG)?;
        app.start()?;
        APP.with(|cell| {
            *cell.borrow_mut() = Some(app);
        });

        // Listeners globales: se registran una sola vez aquí
        on_window_event(ROUTE_CHANGE_EVENT, |_| {
            Timeout::new(0, handle_route_change).forget();
        })?;
        on_window_event("popstate", |_| {
            Timeout::new(0, handle_route_change).forget();
        })?;

        Ok(())
    }

    fn handle_route_change() {
        APP.with(|cell| match cell.try_borrow_mut() {
            Ok(mut app) => {
                if let Some(app) = app.as_mut() {
                    if let Err(e) = app.change_route() {
                        log::error!("❌ Error montando la ruta: {:?}", e);
                    }
                }
            }
            Err(_) => {
                Timeout::new(0, handle_route_change).forget();
            }
        });
    }

    /// Re-render completo de la página montada
    pub fn rerender_app() {
        APP.with(|cell| match cell.try_borrow() {
            Ok(app) => {
                if let Some(app) = app.as_ref() {
                    if let Err(e) = app.render() {
                        log::error!("❌ Error re-renderizando: {:?}", e);
                    }
                }
            }
            // Render en curso: se reintenta en el próximo tick
            Err(_) => {
                Timeout::new(0, rerender_app).forget();
            }
        });
    }

    /// Re-render llamable desde JavaScript
    #[wasm_bindgen]
    pub fn rerender_app_wasm() {
        rerender_app();
    }
}
