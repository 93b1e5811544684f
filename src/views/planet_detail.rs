// ============================================================================
// PLANET DETAIL VIEW
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{text_element, ElementBuilder};
use crate::utils::constants::{FLIGHTS_ROUTE, PLANETS_ROUTE};
use crate::utils::format::{format_credits, format_departure, format_distance, format_travel_time};
use crate::viewmodels::{PageView, PlanetDetailData, PlanetDetailViewModel};
use crate::views::shared::{link, render_error, render_loading};
use crate::views::{spawn_load, ViewContext};

pub fn render_planet_detail(ctx: &ViewContext, vm: &PlanetDetailViewModel) -> Result<Element, JsValue> {
    let body = match vm.view() {
        PageView::Idle | PageView::Loading => render_loading()?,
        PageView::Error(message) => {
            let vm = vm.clone();
            render_error(&message, move || spawn_load({
                let vm = vm.clone();
                async move { vm.load().await }
            }))?
        }
        PageView::Empty => render_loading()?,
        PageView::Populated(data) => render_detail(ctx, &data)?,
    };

    Ok(ElementBuilder::new("div")?
        .class("planet-detail-page")
        .child(link(ctx, PLANETS_ROUTE, "← All destinations", "back-link")?)?
        .child(body)?
        .build())
}

fn render_detail(ctx: &ViewContext, data: &PlanetDetailData) -> Result<Element, JsValue> {
    let planet = &data.planet;
    let hero = ElementBuilder::new("section")?
        .class("planet-hero")
        .child(text_element("div", "planet-emoji large", &planet.emoji)?)?
        .child(text_element("h1", "page-title", &planet.name)?)?
        .child(text_element("p", "planet-description", &planet.description)?)?
        .child(
            ElementBuilder::new("div")?
                .class("planet-stats")
                .child(text_element("span", "stat", &format_distance(planet.distance_from_earth_km))?)?
                .child(text_element("span", "stat", &format_travel_time(planet.travel_time_days))?)?
                .build(),
        )?
        .build();

    let flights = ElementBuilder::new("section")?
        .class("planet-flights")
        .child(text_element("h2", "section-title", &format!("Flights to {}", planet.name))?)?
        .build();
    if data.flights.is_empty() {
        flights.append_child(&text_element("p", "empty-text", "No flights scheduled to this destination yet.")?)?;
    }
    for flight in &data.flights {
        let row = ElementBuilder::new("div")?
            .class("flight-row")
            .child(text_element("span", "flight-number", &flight.flight_number)?)?
            .child(text_element("span", "flight-route", &flight.route_label())?)?
            .child(text_element("span", "flight-departure", &format_departure(flight.departure_datetime))?)?
            .child(text_element("span", "flight-price", &format_credits(flight.price_credits))?)?
            .build();
        flights.append_child(&row)?;
    }
    flights.append_child(&link(ctx, FLIGHTS_ROUTE, "Book a Flight", "btn-cosmic")?)?;

    Ok(ElementBuilder::new("div")?
        .class("planet-detail")
        .child(hero)?
        .child(flights)?
        .build())
}
