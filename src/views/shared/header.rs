// ============================================================================
// HEADER / LAYOUT - Navegación común a todas las páginas
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{on_click_prevent, text_element, ElementBuilder};
use crate::routes::Route;
use crate::utils::constants::{
    DASHBOARD_ROUTE, FLIGHTS_ROUTE, HOME_ROUTE, LOGIN_ROUTE, PLANETS_ROUTE, REGISTER_ROUTE,
};
use crate::views::ViewContext;

/// `<a>` interno: navega sin recargar
pub fn link(ctx: &ViewContext, path: &str, label: &str, class: &str) -> Result<Element, JsValue> {
    let anchor = ElementBuilder::new("a")?
        .class(class)
        .attr("href", path)?
        .text(label)
        .build();
    let navigator = ctx.navigator.clone();
    let target = path.to_string();
    on_click_prevent(&anchor, move || navigator.navigate(&target))?;
    Ok(anchor)
}

fn nav_link(ctx: &ViewContext, current: &Route, path: &str, label: &str) -> Result<Element, JsValue> {
    let active = Route::parse(path) == *current;
    link(ctx, path, label, if active { "nav-link active" } else { "nav-link" })
}

pub fn render_header(ctx: &ViewContext, current: &Route) -> Result<Element, JsValue> {
    let brand = link(ctx, HOME_ROUTE, "🚀 Celestial Escapes", "brand")?;

    let nav = ElementBuilder::new("nav")?
        .class("main-nav")
        .child(nav_link(ctx, current, HOME_ROUTE, "Home")?)?
        .child(nav_link(ctx, current, PLANETS_ROUTE, "Destinations")?)?
        .child(nav_link(ctx, current, FLIGHTS_ROUTE, "Flights")?)?
        .build();

    let account = ElementBuilder::new("div")?.class("account-nav").build();
    if ctx.state.session.is_authenticated() {
        let greeting = match ctx.state.session.get_user() {
            Some(user) => format!("Hi, {}", user.display_name()),
            None => "Hi, Traveler".to_string(),
        };
        account.append_child(&text_element("span", "greeting", &greeting)?)?;
        account.append_child(&nav_link(ctx, current, DASHBOARD_ROUTE, "Dashboard")?)?;

        let logout = text_element("button", "btn-secondary", "Logout")?;
        let logout_ctx = ctx.clone();
        on_click_prevent(&logout, move || {
            logout_ctx.session.logout();
            logout_ctx.go(HOME_ROUTE);
        })?;
        account.append_child(&logout)?;
    } else {
        account.append_child(&nav_link(ctx, current, LOGIN_ROUTE, "Login")?)?;
        account.append_child(&link(ctx, REGISTER_ROUTE, "Sign Up", "btn-primary")?)?;
    }

    Ok(ElementBuilder::new("header")?
        .class("app-header")
        .child(brand)?
        .child(nav)?
        .child(account)?
        .build())
}

pub fn render_layout(ctx: &ViewContext, current: &Route, content: Element) -> Result<Element, JsValue> {
    let main = ElementBuilder::new("main")?
        .class("page-content")
        .child(content)?
        .build();
    let footer = text_element("footer", "app-footer", "© Celestial Escapes · Interplanetary travel")?;

    Ok(ElementBuilder::new("div")?
        .class("app-shell")
        .child(render_header(ctx, current)?)?
        .child(main)?
        .child(footer)?
        .build())
}
