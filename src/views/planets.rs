// ============================================================================
// PLANETS VIEW - Búsqueda, filtros y tarjetas de destinos
// ============================================================================
// Los filtros repintan solo #planet-results para no perder el foco del input.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{get_element_by_id, on_click_prevent, on_input, replace_children, text_element, ElementBuilder};
use crate::filters::PlanetBound;
use crate::models::Planet;
use crate::utils::format::{format_distance, format_travel_time};
use crate::viewmodels::{PageView, PlanetsViewModel};
use crate::views::shared::{link, render_empty, render_error, render_loading};
use crate::views::{spawn_load, ViewContext};

const RESULTS_ID: &str = "planet-results";

pub fn render_planets(ctx: &ViewContext, vm: &PlanetsViewModel) -> Result<Element, JsValue> {
    let header = ElementBuilder::new("div")?
        .class("page-header")
        .child(text_element("h1", "page-title", "Explore Our Destinations")?)?
        .child(text_element(
            "p",
            "page-subtitle",
            "Discover amazing planets and moons waiting for your exploration.",
        )?)?
        .build();

    let body = match vm.view() {
        PageView::Idle | PageView::Loading => render_loading()?,
        PageView::Error(message) => {
            let vm = vm.clone();
            render_error(&message, move || spawn_load({
                let vm = vm.clone();
                async move { vm.load().await }
            }))?
        }
        PageView::Empty => text_element("p", "empty-text", "No destinations are available yet.")?,
        PageView::Populated(_) => render_results(ctx, vm)?,
    };
    let results = ElementBuilder::new("div")?
        .id(RESULTS_ID)?
        .class("results")
        .child(body)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("planets-page")
        .child(header)?
        .child(render_filters(ctx, vm)?)?
        .child(results)?
        .build())
}

fn render_filters(ctx: &ViewContext, vm: &PlanetsViewModel) -> Result<Element, JsValue> {
    let criteria = vm.criteria();

    let search = ElementBuilder::new("input")?
        .class("input-field search")
        .attr("type", "text")?
        .attr("placeholder", "Search planets by name or description...")?
        .attr("value", &criteria.search)?
        .build();
    {
        let ctx = ctx.clone();
        let vm = vm.clone();
        on_input(&search, move |value| {
            vm.set_search(&value);
            refresh_results(&ctx, &vm);
        })?;
    }

    let bounds = ElementBuilder::new("div")?.class("filter-grid").build();
    for (bound, label) in [
        (PlanetBound::DistanceMin, "Min Distance (km)"),
        (PlanetBound::DistanceMax, "Max Distance (km)"),
        (PlanetBound::TravelTimeMin, "Min Travel Time (days)"),
        (PlanetBound::TravelTimeMax, "Max Travel Time (days)"),
    ] {
        let input = ElementBuilder::new("input")?
            .class("input-field")
            .attr("type", "number")?
            .attr("value", &criteria.bound(bound).to_string())?
            .build();
        let ctx = ctx.clone();
        let vm = vm.clone();
        on_input(&input, move |value| {
            vm.set_bound(bound, &value);
            refresh_results(&ctx, &vm);
        })?;
        bounds.append_child(
            &ElementBuilder::new("label")?
                .class("filter-field")
                .child(text_element("span", "filter-label", label)?)?
                .child(input)?
                .build(),
        )?;
    }

    Ok(ElementBuilder::new("div")?
        .class("filters-panel")
        .child(search)?
        .child(bounds)?
        .build())
}

fn render_results(ctx: &ViewContext, vm: &PlanetsViewModel) -> Result<Element, JsValue> {
    let planets = vm.visible_planets();
    if planets.is_empty() {
        let vm = vm.clone();
        return render_empty("No planets found matching your criteria.", "Clear Filters", move || {
            vm.clear_filters();
            crate::rerender_app();
        });
    }

    let grid = ElementBuilder::new("div")?.class("planet-grid").build();
    for planet in &planets {
        grid.append_child(&render_planet_card(ctx, vm, planet)?)?;
    }
    Ok(grid)
}

fn refresh_results(ctx: &ViewContext, vm: &PlanetsViewModel) {
    let Some(container) = get_element_by_id(RESULTS_ID) else {
        return;
    };
    match render_results(ctx, vm) {
        Ok(results) => {
            if let Err(e) = replace_children(&container, &results) {
                log::error!("❌ Error repintando planetas: {:?}", e);
            }
        }
        Err(e) => log::error!("❌ Error construyendo resultados: {:?}", e),
    }
}

fn render_planet_card(ctx: &ViewContext, vm: &PlanetsViewModel, planet: &Planet) -> Result<Element, JsValue> {
    let details = link(ctx, &planet.detail_route(), "View Details", "btn-primary")?;
    {
        let vm = vm.clone();
        let planet = planet.clone();
        on_click_prevent(&details, move || vm.select_planet(&planet))?;
    }

    Ok(ElementBuilder::new("article")?
        .class("planet-card")
        .child(text_element("div", "planet-emoji", &planet.emoji)?)?
        .child(text_element("h3", "planet-name", &planet.name)?)?
        .child(text_element("p", "planet-description", &planet.description)?)?
        .child(
            ElementBuilder::new("div")?
                .class("planet-stats")
                .child(text_element("span", "stat", &format_distance(planet.distance_from_earth_km))?)?
                .child(text_element("span", "stat", &format_travel_time(planet.travel_time_days))?)?
                .build(),
        )?
        .child(details)?
        .build())
}
