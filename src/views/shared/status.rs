// ============================================================================
// STATUS BLOCKS - Cargando / error con reintento / vacío
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{get_element_by_id, on_click_prevent, text_element, ElementBuilder};
use crate::views::ViewContext;

pub fn render_loading() -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("page-status loading")
        .child(ElementBuilder::new("div")?.class("spinner").build())?
        .build())
}

/// Mensaje genérico + botón de reintento (el reintento siempre es manual)
pub fn render_error<F>(message: &str, on_retry: F) -> Result<Element, JsValue>
where
    F: FnMut() + 'static,
{
    let retry = text_element("button", "btn-primary", "Try Again")?;
    on_click_prevent(&retry, on_retry)?;

    Ok(ElementBuilder::new("div")?
        .class("page-status error")
        .child(text_element("p", "error-text", message)?)?
        .child(retry)?
        .build())
}

/// Resultado vacío: no es un error, lleva una acción sugerida
pub fn render_empty<F>(message: &str, action_label: &str, on_action: F) -> Result<Element, JsValue>
where
    F: FnMut() + 'static,
{
    let action = text_element("button", "btn-primary", action_label)?;
    on_click_prevent(&action, on_action)?;

    Ok(ElementBuilder::new("div")?
        .class("page-status empty")
        .child(text_element("p", "empty-text", message)?)?
        .child(action)?
        .build())
}

pub fn render_empty_with_link(
    ctx: &ViewContext,
    message: &str,
    action_label: &str,
    path: &'static str,
) -> Result<Element, JsValue> {
    let ctx = ctx.clone();
    render_empty(message, action_label, move || ctx.go(path))
}

/// Mensaje de formulario en un `<p id=...>` ya pintado (sin repintar la página)
pub fn show_form_message(element_id: &str, message: &str) {
    if let Some(element) = get_element_by_id(element_id) {
        element.set_text_content(Some(message));
    }
}
