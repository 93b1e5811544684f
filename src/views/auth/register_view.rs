// ============================================================================
// REGISTER VIEW
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{on_click_prevent, text_element, ElementBuilder};
use crate::models::RegisterRequest;
use crate::utils::constants::LOGIN_ROUTE;
use crate::views::auth::{form_field, AUTH_ERROR_ID};
use crate::views::shared::{link, show_form_message};
use crate::views::ViewContext;

pub type RegisterForm = Rc<RefCell<RegisterRequest>>;

pub fn new_register_form() -> RegisterForm {
    Rc::new(RefCell::new(RegisterRequest::default()))
}

#[derive(Clone, Copy)]
enum RegisterField {
    Email,
    Username,
    FirstName,
    LastName,
    Password,
    Password2,
}

impl RegisterField {
    fn label(self) -> &'static str {
        match self {
            RegisterField::Email => "Email",
            RegisterField::Username => "Username",
            RegisterField::FirstName => "First Name",
            RegisterField::LastName => "Last Name",
            RegisterField::Password => "Password",
            RegisterField::Password2 => "Confirm Password",
        }
    }

    fn input_type(self) -> &'static str {
        match self {
            RegisterField::Email => "email",
            RegisterField::Password | RegisterField::Password2 => "password",
            _ => "text",
        }
    }

    fn slot(self, form: &mut RegisterRequest) -> &mut String {
        match self {
            RegisterField::Email => &mut form.email,
            RegisterField::Username => &mut form.username,
            RegisterField::FirstName => &mut form.first_name,
            RegisterField::LastName => &mut form.last_name,
            RegisterField::Password => &mut form.password,
            RegisterField::Password2 => &mut form.password2,
        }
    }
}

pub fn render_register(ctx: &ViewContext, form: &RegisterForm) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?
        .class("auth-card")
        .child(text_element("h1", "page-title", "Create Your Account")?)?
        .child(ElementBuilder::new("p")?.id(AUTH_ERROR_ID)?.class("form-error").build())?
        .build();

    for field in [
        RegisterField::FirstName,
        RegisterField::LastName,
        RegisterField::Email,
        RegisterField::Username,
        RegisterField::Password,
        RegisterField::Password2,
    ] {
        let current = match field.input_type() {
            "password" => String::new(),
            _ => field.slot(&mut form.borrow_mut()).clone(),
        };
        let form = form.clone();
        card.append_child(&form_field(field.label(), field.input_type(), &current, move |value| {
            *field.slot(&mut form.borrow_mut()) = value;
        })?)?;
    }

    let submit = text_element("button", "btn-cosmic", "Create Account")?;
    {
        let ctx = ctx.clone();
        let form = form.clone();
        on_click_prevent(&submit, move || {
            let session = ctx.session.clone();
            let request = form.borrow().clone();
            wasm_bindgen_futures::spawn_local(async move {
                show_form_message(AUTH_ERROR_ID, "");
                if let Err(e) = session.register(&request).await {
                    show_form_message(AUTH_ERROR_ID, &e.to_string());
                }
            });
        })?;
    }
    card.append_child(&submit)?;
    card.append_child(
        &ElementBuilder::new("p")?
            .class("auth-footer")
            .text("Already have an account? ")
            .child(link(ctx, LOGIN_ROUTE, "Log in", "auth-link")?)?
            .build(),
    )?;

    Ok(ElementBuilder::new("div")?.class("auth-page").child(card)?.build())
}
