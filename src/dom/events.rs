// ============================================================================
// EVENT HANDLING - Listeners de elementos y de window
// ============================================================================
// Listeners de elementos: closure.forget() es seguro, el navegador los limpia
// cuando el elemento sale del DOM (cada render vacía el contenedor).
// Listeners de window: se registran UNA sola vez al arrancar la App.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent};

use crate::dom::{control_value, window};

pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Click sin navegación del navegador (links internos, botones de formulario)
pub fn on_click_prevent<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    on_click(element, move |event: MouseEvent| {
        event.prevent_default();
        handler();
    })
}

/// Cada edición de un `<input>`/`<select>`, con su valor crudo
pub fn on_value_change<F>(element: &Element, event_type: &str, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(String) + 'static,
{
    let closure = Closure::wrap(Box::new(move |event: Event| {
        let value = event
            .target()
            .and_then(|target| control_value(target.as_ref()))
            .unwrap_or_default();
        handler(value);
    }) as Box<dyn FnMut(Event)>);
    element.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub fn on_input<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(String) + 'static,
{
    on_value_change(element, "input", handler)
}

pub fn on_change<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(String) + 'static,
{
    on_value_change(element, "change", handler)
}

/// Listener global en window (popstate, routechange)
pub fn on_window_event<F>(event_type: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let win = window().ok_or_else(|| JsValue::from_str("No window"))?;
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    win.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
