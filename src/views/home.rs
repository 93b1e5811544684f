// ============================================================================
// HOME VIEW - Portada con destinos destacados
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{text_element, ElementBuilder};
use crate::models::Planet;
use crate::utils::constants::{FLIGHTS_ROUTE, PLANETS_ROUTE};
use crate::utils::format::format_distance;
use crate::viewmodels::HomeViewModel;
use crate::views::shared::{link, render_loading};
use crate::views::ViewContext;

pub fn render_home(ctx: &ViewContext, vm: &HomeViewModel) -> Result<Element, JsValue> {
    let hero = ElementBuilder::new("section")?
        .class("hero")
        .child(text_element("h1", "hero-title", "Your Journey to the Stars Begins Here")?)?
        .child(text_element(
            "p",
            "hero-subtitle",
            "Book interplanetary flights to the most breathtaking destinations in the solar system.",
        )?)?
        .child(
            ElementBuilder::new("div")?
                .class("hero-actions")
                .child(link(ctx, PLANETS_ROUTE, "Explore Destinations", "btn-cosmic")?)?
                .child(link(ctx, FLIGHTS_ROUTE, "Book a Flight", "btn-secondary")?)?
                .build(),
        )?
        .build();

    let featured = if vm.is_loading() {
        render_loading()?
    } else {
        let grid = ElementBuilder::new("div")?.class("planet-grid").build();
        for planet in vm.featured_planets() {
            grid.append_child(&render_featured_card(ctx, &planet)?)?;
        }
        grid
    };

    let section = ElementBuilder::new("section")?
        .class("featured-destinations")
        .child(text_element("h2", "section-title", "Featured Destinations")?)?
        .child(featured)?
        .child(link(ctx, PLANETS_ROUTE, "View All Destinations", "btn-cosmic")?)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("home-page")
        .child(hero)?
        .child(section)?
        .build())
}

fn render_featured_card(ctx: &ViewContext, planet: &Planet) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("planet-card featured")
        .child(text_element("div", "planet-emoji", &planet.emoji)?)?
        .child(text_element("h3", "planet-name", &planet.name)?)?
        .child(text_element(
            "p",
            "planet-distance",
            &format_distance(planet.distance_from_earth_km),
        )?)?
        .child(link(ctx, &planet.detail_route(), "Learn More", "card-link")?)?
        .build())
}
