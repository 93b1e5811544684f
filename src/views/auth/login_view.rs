// ============================================================================
// LOGIN VIEW
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{on_click_prevent, text_element, ElementBuilder};
use crate::models::LoginRequest;
use crate::utils::constants::REGISTER_ROUTE;
use crate::views::auth::{form_field, AUTH_ERROR_ID};
use crate::views::shared::{link, show_form_message};
use crate::views::ViewContext;

/// Estado del formulario: sobrevive a los repintados de la página
pub type LoginForm = Rc<RefCell<LoginRequest>>;

pub fn new_login_form() -> LoginForm {
    Rc::new(RefCell::new(LoginRequest {
        username: String::new(),
        password: String::new(),
    }))
}

pub fn render_login(ctx: &ViewContext, form: &LoginForm) -> Result<Element, JsValue> {
    let username = {
        let form = form.clone();
        let current = form.borrow().username.clone();
        form_field("Username", "text", &current, move |value| form.borrow_mut().username = value)?
    };
    // La contraseña nunca se vuelve a escribir en el DOM
    let password = {
        let form = form.clone();
        form_field("Password", "password", "", move |value| form.borrow_mut().password = value)?
    };

    let submit = text_element("button", "btn-cosmic", "Login")?;
    {
        let ctx = ctx.clone();
        let form = form.clone();
        on_click_prevent(&submit, move || {
            let session = ctx.session.clone();
            let request = form.borrow().clone();
            wasm_bindgen_futures::spawn_local(async move {
                show_form_message(AUTH_ERROR_ID, "");
                if let Err(e) = session.login(&request.username, &request.password).await {
                    show_form_message(AUTH_ERROR_ID, &e.to_string());
                }
            });
        })?;
    }

    let footer = ElementBuilder::new("p")?
        .class("auth-footer")
        .text("Don't have an account? ")
        .child(link(ctx, REGISTER_ROUTE, "Sign up", "auth-link")?)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("auth-page")
        .child(
            ElementBuilder::new("div")?
                .class("auth-card")
                .child(text_element("h1", "page-title", "Welcome Back")?)?
                .child(ElementBuilder::new("p")?.id(AUTH_ERROR_ID)?.class("form-error").build())?
                .child(username)?
                .child(password)?
                .child(submit)?
                .child(footer)?
                .build(),
        )?
        .build())
}
