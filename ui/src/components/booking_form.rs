use dioxus::prelude::*;

use drivecheck_common::booking::{self, BookingDraft, FieldErrors, ResetPolicy, SubmitDecision};
use drivecheck_common::calendar;
use drivecheck_common::pricing::{format_usd, STANDARD_INSPECTION};

use super::app::Route;
use super::auth::use_auth_session;
use super::notifications::{use_notifier, NoticeRequest};
use super::order_api;

/// Booking confirmation form. Every form field is owned by the caller and
/// passed in as a signal; the form keeps only its validation messages and
/// the in-flight flag. The appointment context (slot + displayed month)
/// is read-only here, except that `ResetPolicy::Everything` clears the
/// slot after a confirmed booking.
#[component]
pub fn BookingForm(
    location: Signal<String>,
    vin: Signal<String>,
    vehicle_info: Signal<String>,
    selected_date: Signal<Option<u32>>,
    selected_time: Signal<Option<String>>,
    display_month: Signal<u32>,
    display_year: Signal<i32>,
    #[props(default)] reset_policy: ResetPolicy,
) -> Element {
    let auth = use_auth_session();
    let notifier = use_notifier();
    let nav = use_navigator();

    let mut field_errors = use_signal(FieldErrors::default);
    let mut submitting = use_signal(|| false);

    let current_draft = move || BookingDraft {
        location: location.read().clone(),
        vin: vin.read().clone(),
        vehicle_info: vehicle_info.read().clone(),
    };

    let can_submit = use_memo(move || {
        booking::can_submit(
            auth.read().is_logged_in(),
            &current_draft(),
            *selected_date.read(),
            selected_time.read().as_deref(),
            *submitting.read(),
        )
    });

    let submit = move |_| {
        let draft = current_draft();
        let decision = booking::decide_submission(
            auth.read().is_logged_in(),
            &draft,
            *selected_date.read(),
            selected_time.read().as_deref(),
            *display_month.read(),
            *display_year.read(),
        );

        match decision {
            SubmitDecision::NotLoggedIn => {
                notifier.send(NoticeRequest::Error {
                    body: "Please login to book an inspection".to_string(),
                });
                nav.push(Route::Login {});
            }
            SubmitDecision::InvalidFields(errors) => {
                field_errors.set(errors);
            }
            SubmitDecision::SlotMissing => {
                field_errors.set(FieldErrors::default());
                notifier.send(NoticeRequest::Error {
                    body: "Please select date and time".to_string(),
                });
            }
            SubmitDecision::Submit(request) => {
                field_errors.set(FieldErrors::default());
                submitting.set(true);

                let confirmed_date = format!(
                    "{} {}, {}",
                    calendar::month_name(*display_month.read()),
                    (*selected_date.read()).unwrap_or_default(),
                    *display_year.read(),
                );

                // The task is scoped to this component, so an unmount
                // mid-request drops it instead of touching dead state.
                spawn(async move {
                    match order_api::wasm::create_order(&request).await {
                        Ok(()) => {
                            notifier.send(NoticeRequest::Success {
                                title: "Booking Confirmed!".to_string(),
                                lines: vec![
                                    format!("Date: {confirmed_date}"),
                                    format!("Time: {}", request.inspection_time),
                                    format!("Location: {}", request.vin_location),
                                ],
                            });
                            location.set(String::new());
                            vin.set(String::new());
                            vehicle_info.set(String::new());
                            if reset_policy == ResetPolicy::Everything {
                                selected_date.set(None);
                                selected_time.set(None);
                            }
                        }
                        Err(message) => {
                            notifier.send(NoticeRequest::Error { body: message });
                        }
                    }
                    submitting.set(false);
                });
            }
        }
    };

    let logged_in = auth.read().is_logged_in();
    let errors = field_errors.read().clone();
    let slot_summary = match (*selected_date.read(), selected_time.read().clone()) {
        (Some(day), Some(time)) => {
            let date = format!(
                "{} {}, {}",
                calendar::month_name(*display_month.read()),
                day,
                *display_year.read(),
            );
            Some((date, time))
        }
        _ => None,
    };

    rsx! {
        div { class: "booking-form",
            h2 { "Inspection Details" }

            if !logged_in {
                div { class: "login-warning",
                    span { "Please " }
                    Link { to: Route::Login {}, "login" }
                    span { " to book an inspection" }
                }
            }

            div { class: "form-group",
                label { "Vehicle Location" }
                input {
                    r#type: "text",
                    placeholder: "Enter address or dealership name",
                    value: "{location}",
                    oninput: move |evt| location.set(evt.value()),
                }
                if let Some(err) = errors.location.as_ref() {
                    span { class: "field-error", "{err}" }
                }
            }

            div { class: "form-group",
                label { "Vehicle Information" }
                input {
                    r#type: "text",
                    placeholder: "VIN (Optional)",
                    value: "{vin}",
                    oninput: move |evt| vin.set(evt.value()),
                }
                input {
                    r#type: "text",
                    placeholder: "Make/Model/Year",
                    value: "{vehicle_info}",
                    oninput: move |evt| vehicle_info.set(evt.value()),
                }
                if let Some(err) = errors.vehicle_info.as_ref() {
                    span { class: "field-error", "{err}" }
                }
            }

            div { class: "service-summary",
                h3 { "Service Selected" }
                div { class: "service-card",
                    div { class: "service-row",
                        span { "{STANDARD_INSPECTION.name}" }
                        span { "{format_usd(STANDARD_INSPECTION.price_cents)}" }
                    }
                    p { class: "service-note", "{STANDARD_INSPECTION.note}" }
                }
            }

            div { class: "appointment-summary",
                h3 { "Selected Appointment" }
                div { class: "appointment-card",
                    if let Some((date, time)) = slot_summary.as_ref() {
                        div { class: "appointment-row",
                            span { "Date:" }
                            span { "{date}" }
                        }
                        div { class: "appointment-row",
                            span { "Time:" }
                            span { "{time}" }
                        }
                    } else {
                        span { class: "empty-state", "Please select a date and time" }
                    }
                }
            }

            button {
                class: "btn-confirm",
                disabled: !can_submit(),
                onclick: submit,
                if *submitting.read() {
                    "Processing..."
                } else {
                    "Confirm Booking"
                }
            }
        }
    }
}
