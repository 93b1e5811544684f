// ============================================================================
// DASHBOARD VIEW - Perfil y reservas del usuario
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{on_click_prevent, on_input, text_element, ElementBuilder};
use crate::models::{Booking, Profile, ProfileUpdate};
use crate::utils::format::{format_booking_date, format_credits};
use crate::viewmodels::{DashboardData, DashboardViewModel, PageView};
use crate::views::shared::{render_empty, render_error, render_loading, show_form_message};
use crate::views::{spawn_load, ViewContext};

const PROFILE_MESSAGE_ID: &str = "profile-message";
const BOOKINGS_MESSAGE_ID: &str = "bookings-message";

pub fn render_dashboard(ctx: &ViewContext, vm: &DashboardViewModel) -> Result<Element, JsValue> {
    let name = vm
        .user()
        .map(|user| user.display_name().to_string())
        .unwrap_or_else(|| "Traveler".to_string());

    let logout = text_element("button", "btn-secondary", "Logout")?;
    {
        let vm = vm.clone();
        on_click_prevent(&logout, move || vm.logout())?;
    }
    let header = ElementBuilder::new("div")?
        .class("page-header dashboard-header")
        .child(text_element("h1", "page-title", &format!("Welcome back, {}!", name))?)?
        .child(logout)?
        .build();

    let body = match vm.view() {
        PageView::Idle | PageView::Loading | PageView::Empty => render_loading()?,
        PageView::Error(message) => {
            let vm = vm.clone();
            render_error(&message, move || spawn_load({
                let vm = vm.clone();
                async move { vm.load().await }
            }))?
        }
        PageView::Populated(data) => render_content(ctx, vm, &data)?,
    };

    Ok(ElementBuilder::new("div")?
        .class("dashboard-page")
        .child(header)?
        .child(body)?
        .build())
}

fn render_content(ctx: &ViewContext, vm: &DashboardViewModel, data: &DashboardData) -> Result<Element, JsValue> {
    let bookings = ElementBuilder::new("section")?
        .class("bookings")
        .child(text_element("h2", "section-title", "My Bookings")?)?
        .child(ElementBuilder::new("p")?.id(BOOKINGS_MESSAGE_ID)?.class("form-error").build())?
        .build();

    if vm.has_bookings() {
        for booking in &data.bookings {
            bookings.append_child(&render_booking(vm, booking)?)?;
        }
    } else {
        let vm = vm.clone();
        bookings.append_child(&render_empty(
            "You haven't booked any trips yet.",
            "Browse Flights",
            move || vm.browse_flights(),
        )?)?;
    }

    Ok(ElementBuilder::new("div")?
        .class("dashboard-grid")
        .child(render_profile(ctx, vm, &data.profile)?)?
        .child(bookings)?
        .build())
}

fn render_profile(ctx: &ViewContext, vm: &DashboardViewModel, profile: &Profile) -> Result<Element, JsValue> {
    let email = ctx
        .state
        .session
        .get_user()
        .map(|user| user.email)
        .unwrap_or_default();

    let card = ElementBuilder::new("section")?
        .class("profile-card")
        .child(text_element("h2", "section-title", "My Profile")?)?
        .child(text_element("p", "profile-email", &email)?)?
        .child(text_element(
            "p",
            "profile-credits",
            &format!("Balance: {}", format_credits(profile.credits_balance)),
        )?)?
        .build();

    // Formulario de edición: los inputs escriben en el borrador, Save lo envía
    let draft = Rc::new(RefCell::new(ProfileUpdate::from(profile)));
    for (label, value, field) in [
        ("Bio", profile.bio.clone(), ProfileField::Bio),
        ("Passport ID", profile.passport_id.clone(), ProfileField::Passport),
        ("Phone", profile.phone.clone(), ProfileField::Phone),
    ] {
        let input = ElementBuilder::new("input")?
            .class("input-field")
            .attr("type", "text")?
            .attr("value", &value)?
            .build();
        let draft = draft.clone();
        on_input(&input, move |value| field.apply(&mut draft.borrow_mut(), value))?;
        card.append_child(
            &ElementBuilder::new("label")?
                .class("form-field")
                .child(text_element("span", "form-label", label)?)?
                .child(input)?
                .build(),
        )?;
    }

    let save = text_element("button", "btn-primary", "Save Profile")?;
    {
        let vm = vm.clone();
        on_click_prevent(&save, move || {
            let vm = vm.clone();
            let update = draft.borrow().clone();
            wasm_bindgen_futures::spawn_local(async move {
                match vm.save_profile(&update).await {
                    Ok(_) => show_form_message(PROFILE_MESSAGE_ID, "Profile updated."),
                    Err(e) => show_form_message(PROFILE_MESSAGE_ID, &e.to_string()),
                }
            });
        })?;
    }
    card.append_child(&save)?;
    card.append_child(&ElementBuilder::new("p")?.id(PROFILE_MESSAGE_ID)?.class("form-message").build())?;

    Ok(card)
}

#[derive(Clone, Copy)]
enum ProfileField {
    Bio,
    Passport,
    Phone,
}

impl ProfileField {
    fn apply(self, update: &mut ProfileUpdate, value: String) {
        match self {
            ProfileField::Bio => update.bio = value,
            ProfileField::Passport => update.passport_id = value,
            ProfileField::Phone => update.phone = value,
        }
    }
}

fn render_booking(vm: &DashboardViewModel, booking: &Booking) -> Result<Element, JsValue> {
    let route = booking
        .flight
        .as_ref()
        .map(|flight| format!("{} · {}", flight.flight_number, flight.route_label()))
        .unwrap_or_else(|| format!("Booking #{}", booking.id));
    let pod = booking
        .pod
        .as_ref()
        .map(|pod| format!("Pod {} ({})", pod.pod_number, pod.pod_type))
        .unwrap_or_default();

    let actions = ElementBuilder::new("div")?.class("booking-actions").build();
    if booking.can_confirm() {
        actions.append_child(&booking_action(vm, booking.id, "Confirm", BookingAction::Confirm)?)?;
    }
    if booking.can_cancel() {
        actions.append_child(&booking_action(vm, booking.id, "Cancel", BookingAction::Cancel)?)?;
    }

    Ok(ElementBuilder::new("article")?
        .class("booking-card")
        .child(text_element("h3", "booking-route", &route)?)?
        .child(text_element("span", "booking-pod", &pod)?)?
        .child(text_element(
            "span",
            &format!("booking-status {}", booking.status.label().to_lowercase()),
            booking.status.label(),
        )?)?
        .child(text_element("span", "booking-date", &format_booking_date(booking.booked_at))?)?
        .child(text_element("span", "booking-total", &format_credits(booking.total_price))?)?
        .child(actions)?
        .build())
}

#[derive(Clone, Copy)]
enum BookingAction {
    Confirm,
    Cancel,
}

fn booking_action(
    vm: &DashboardViewModel,
    booking_id: i64,
    label: &str,
    action: BookingAction,
) -> Result<Element, JsValue> {
    let button = text_element("button", "btn-secondary", label)?;
    let vm = vm.clone();
    on_click_prevent(&button, move || {
        let vm = vm.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = match action {
                BookingAction::Confirm => vm.confirm_booking(booking_id).await,
                BookingAction::Cancel => vm.cancel_booking(booking_id).await,
            };
            match result {
                Ok(_) => crate::rerender_app(),
                Err(e) => show_form_message(BOOKINGS_MESSAGE_ID, &e.to_string()),
            }
        });
    })?;
    Ok(button)
}
