mod login_view;
mod register_view;

pub use login_view::*;
pub use register_view::*;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{on_input, text_element, ElementBuilder};

/// `<label>` + `<input>` que escribe cada edición en `on_value`
pub(crate) fn form_field<F>(label: &str, input_type: &str, value: &str, on_value: F) -> Result<Element, JsValue>
where
    F: FnMut(String) + 'static,
{
    let input = ElementBuilder::new("input")?
        .class("input-field")
        .attr("type", input_type)?
        .attr("value", value)?
        .build();
    on_input(&input, on_value)?;

    Ok(ElementBuilder::new("label")?
        .class("form-field")
        .child(text_element("span", "form-label", label)?)?
        .child(input)?
        .build())
}

pub(crate) const AUTH_ERROR_ID: &str = "auth-error";
