// ============================================================================
// FLIGHTS VIEW - Filtros, listado de vuelos, cápsulas y carrito
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{
    get_element_by_id, on_change, on_click_prevent, on_input, replace_children, text_element,
    ElementBuilder,
};
use crate::filters::PriceBound;
use crate::models::{Flight, Pod};
use crate::utils::constants::DASHBOARD_ROUTE;
use crate::utils::format::{format_credits, format_departure};
use crate::viewmodels::{BookingViewModel, FlightsViewModel, PageView};
use crate::views::shared::{
    render_empty, render_empty_with_link, render_error, render_loading, show_form_message,
};
use crate::views::{spawn_load, ViewContext};

const RESULTS_ID: &str = "flight-results";
const BOOKING_MESSAGE_ID: &str = "booking-message";

pub fn render_flights(
    ctx: &ViewContext,
    vm: &FlightsViewModel,
    booking: &BookingViewModel,
) -> Result<Element, JsValue> {
    let header = ElementBuilder::new("div")?
        .class("page-header")
        .child(text_element("h1", "page-title", "Available Flights")?)?
        .child(text_element(
            "p",
            "page-subtitle",
            "Find the perfect flight to your dream destination.",
        )?)?
        .build();

    let page = ElementBuilder::new("div")?.class("flights-page").child(header)?.build();

    match vm.view() {
        PageView::Idle | PageView::Loading => {
            page.append_child(&render_loading()?)?;
        }
        PageView::Error(message) => {
            let vm = vm.clone();
            page.append_child(&render_error(&message, move || spawn_load({
                let vm = vm.clone();
                async move { vm.load().await }
            }))?)?;
        }
        PageView::Empty => {
            page.append_child(&render_empty_with_link(
                ctx,
                "No flights are scheduled right now.",
                "Explore Destinations",
                crate::utils::constants::PLANETS_ROUTE,
            )?)?;
        }
        PageView::Populated(_) => {
            page.append_child(&render_filters(ctx, vm)?)?;
            let results = ElementBuilder::new("div")?
                .id(RESULTS_ID)?
                .class("results")
                .child(render_results(ctx, vm)?)?
                .build();
            let layout = ElementBuilder::new("div")?
                .class("flights-layout")
                .child(results)?
                .child(render_cart(ctx, vm, booking)?)?
                .build();
            page.append_child(&layout)?;
        }
    }

    Ok(page)
}

fn render_filters(ctx: &ViewContext, vm: &FlightsViewModel) -> Result<Element, JsValue> {
    let criteria = vm.criteria();
    let planets = vm.planet_options();

    let planet_select = |label: &str, selected: Option<i64>| -> Result<Element, JsValue> {
        let select = ElementBuilder::new("select")?.class("input-field").build();
        select.append_child(
            &ElementBuilder::new("option")?
                .attr("value", "")?
                .text(label)
                .build(),
        )?;
        for planet in &planets {
            let option = ElementBuilder::new("option")?
                .attr("value", &planet.id.to_string())?
                .flag("selected", selected == Some(planet.id))?
                .text(&format!("{} {}", planet.emoji, planet.name))
                .build();
            select.append_child(&option)?;
        }
        Ok(select)
    };

    let origin = planet_select("Any origin", criteria.origin)?;
    {
        let ctx = ctx.clone();
        let vm = vm.clone();
        on_change(&origin, move |value| {
            vm.set_origin(&value);
            refresh_results(&ctx, &vm);
        })?;
    }
    let destination = planet_select("Any destination", criteria.destination)?;
    {
        let ctx = ctx.clone();
        let vm = vm.clone();
        on_change(&destination, move |value| {
            vm.set_destination(&value);
            refresh_results(&ctx, &vm);
        })?;
    }

    let filters = ElementBuilder::new("div")?
        .class("filters-panel filter-grid")
        .child(origin)?
        .child(destination)?
        .build();

    for (bound, label, value) in [
        (PriceBound::Min, "Min Price (credits)", criteria.price_min),
        (PriceBound::Max, "Max Price (credits)", criteria.price_max),
    ] {
        let input = ElementBuilder::new("input")?
            .class("input-field")
            .attr("type", "number")?
            .attr("value", &value.to_string())?
            .build();
        let ctx = ctx.clone();
        let vm = vm.clone();
        on_input(&input, move |raw| {
            vm.set_price(bound, &raw);
            refresh_results(&ctx, &vm);
        })?;
        filters.append_child(
            &ElementBuilder::new("label")?
                .class("filter-field")
                .child(text_element("span", "filter-label", label)?)?
                .child(input)?
                .build(),
        )?;
    }

    Ok(filters)
}

fn render_results(ctx: &ViewContext, vm: &FlightsViewModel) -> Result<Element, JsValue> {
    let flights = vm.visible_flights();
    if flights.is_empty() {
        let vm = vm.clone();
        return render_empty("No flights found matching your criteria.", "Clear Filters", move || {
            vm.clear_filters();
            crate::rerender_app();
        });
    }

    let selected = ctx.state.cart.get_cart().flight.map(|f| f.id);
    let list = ElementBuilder::new("div")?.class("flight-list").build();
    for flight in &flights {
        list.append_child(&render_flight_card(vm, flight, selected == Some(flight.id))?)?;
    }
    Ok(list)
}

fn refresh_results(ctx: &ViewContext, vm: &FlightsViewModel) {
    let Some(container) = get_element_by_id(RESULTS_ID) else {
        return;
    };
    match render_results(ctx, vm) {
        Ok(results) => {
            if let Err(e) = replace_children(&container, &results) {
                log::error!("❌ Error repintando vuelos: {:?}", e);
            }
        }
        Err(e) => log::error!("❌ Error construyendo vuelos: {:?}", e),
    }
}

fn render_flight_card(vm: &FlightsViewModel, flight: &Flight, selected: bool) -> Result<Element, JsValue> {
    let seats = if flight.is_sold_out() {
        "Sold out".to_string()
    } else {
        format!("{} / {} seats", flight.seats_available, flight.seats_total)
    };

    let select = ElementBuilder::new("button")?
        .class(if selected { "btn-primary selected" } else { "btn-primary" })
        .flag("disabled", flight.is_sold_out())?
        .text(if selected { "Selected" } else { "Select Flight" })
        .build();
    {
        let vm = vm.clone();
        let flight = flight.clone();
        on_click_prevent(&select, move || {
            let vm = vm.clone();
            let flight = flight.clone();
            spawn_load(async move { vm.select_flight(&flight).await });
        })?;
    }

    Ok(ElementBuilder::new("article")?
        .class(if selected { "flight-card selected" } else { "flight-card" })
        .child(text_element("span", "flight-number", &flight.flight_number)?)?
        .child(text_element("h3", "flight-route", &flight.route_label())?)?
        .child(text_element("span", "flight-departure", &format_departure(flight.departure_datetime))?)?
        .child(text_element("span", "flight-seats", &seats)?)?
        .child(text_element("span", "flight-price", &format_credits(flight.price_credits))?)?
        .child(select)?
        .build())
}

fn render_pods(vm: &FlightsViewModel, selected_pod: Option<i64>) -> Result<Element, JsValue> {
    match vm.pods_view() {
        PageView::Idle => text_element("p", "hint", "Select a flight to see its pods."),
        PageView::Loading => render_loading(),
        PageView::Error(message) => text_element("p", "error-text", &message),
        PageView::Empty => text_element("p", "empty-text", "No pods available for this flight."),
        PageView::Populated(_) => {
            let list = ElementBuilder::new("div")?.class("pod-list").build();
            for pod in vm.available_pods() {
                list.append_child(&render_pod(vm, &pod, selected_pod == Some(pod.id))?)?;
            }
            Ok(list)
        }
    }
}

fn render_pod(vm: &FlightsViewModel, pod: &Pod, selected: bool) -> Result<Element, JsValue> {
    let button = ElementBuilder::new("button")?
        .class(if selected { "pod-option selected" } else { "pod-option" })
        .text(&format!(
            "{} · {} · +{}",
            pod.pod_number,
            pod.pod_type,
            format_credits(pod.price_credits)
        ))
        .build();
    let vm = vm.clone();
    let pod = pod.clone();
    on_click_prevent(&button, move || vm.select_pod(&pod))?;
    Ok(button)
}

fn render_cart(
    ctx: &ViewContext,
    vm: &FlightsViewModel,
    booking: &BookingViewModel,
) -> Result<Element, JsValue> {
    let cart = ctx.state.cart.get_cart();
    let panel = ElementBuilder::new("aside")?
        .class("cart-panel")
        .child(text_element("h2", "section-title", "Your Booking")?)?
        .build();

    let flight_label = cart
        .flight
        .as_ref()
        .map(|f| f.flight_number.clone())
        .unwrap_or_else(|| "No flight selected".to_string());
    panel.append_child(&text_element("p", "cart-flight", &flight_label)?)?;
    panel.append_child(&render_pods(vm, cart.pod.as_ref().map(|p| p.id))?)?;

    let passengers = ElementBuilder::new("input")?
        .class("input-field")
        .attr("type", "number")?
        .attr("min", "1")?
        .attr("value", &cart.passengers.to_string())?
        .build();
    {
        let vm = vm.clone();
        on_change(&passengers, move |raw| vm.set_passengers(&raw))?;
    }
    panel.append_child(
        &ElementBuilder::new("label")?
            .class("filter-field")
            .child(text_element("span", "filter-label", "Passengers")?)?
            .child(passengers)?
            .build(),
    )?;

    panel.append_child(&text_element(
        "p",
        "cart-total",
        &format!("Estimated total: {}", format_credits(cart.estimated_total())),
    )?)?;

    let submit = ElementBuilder::new("button")?
        .class("btn-cosmic")
        .flag("disabled", cart.flight.is_none() || cart.pod.is_none())?
        .text("Book Now")
        .build();
    {
        let ctx = ctx.clone();
        let booking = booking.clone();
        on_click_prevent(&submit, move || {
            let ctx = ctx.clone();
            let booking = booking.clone();
            wasm_bindgen_futures::spawn_local(async move {
                show_form_message(BOOKING_MESSAGE_ID, "");
                match booking.submit_cart().await {
                    Ok(_) => ctx.go(DASHBOARD_ROUTE),
                    Err(e) => show_form_message(BOOKING_MESSAGE_ID, &e.to_string()),
                }
            });
        })?;
    }
    panel.append_child(&submit)?;
    panel.append_child(&ElementBuilder::new("p")?.id(BOOKING_MESSAGE_ID)?.class("form-error").build())?;

    Ok(panel)
}
