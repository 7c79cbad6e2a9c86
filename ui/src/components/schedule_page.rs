use chrono::Datelike;
use dioxus::prelude::*;

use drivecheck_common::calendar;
use drivecheck_common::timeslot;

use super::booking_form::BookingForm;

/// First month shown in the calendar: the current one.
fn initial_month() -> (i32, u32) {
    let today = chrono::Local::now().date_naive();
    (today.year(), today.month0())
}

/// Book-an-inspection page. Owns the whole booking draft: the text
/// fields, the displayed month, and the chosen slot. BookingForm gets
/// that state as signals and keeps no copy of its own.
#[component]
pub fn SchedulePage() -> Element {
    let location = use_signal(String::new);
    let vin = use_signal(String::new);
    let vehicle_info = use_signal(String::new);

    let mut display_year = use_signal(|| initial_month().0);
    let mut display_month = use_signal(|| initial_month().1);
    let mut selected_date = use_signal(|| None::<u32>);
    let mut selected_time = use_signal(|| None::<String>);

    let year = *display_year.read();
    let month0 = *display_month.read();
    let day_count = calendar::days_in_month(year, month0).unwrap_or(0);
    let lead_blanks = calendar::first_weekday_index(year, month0).unwrap_or(0);
    let chosen_day = *selected_date.read();
    let chosen_time = selected_time.read().clone();

    let prev_month = move |_| {
        let m = *display_month.read();
        if m == 0 {
            display_month.set(11);
            let y = *display_year.read();
            display_year.set(y - 1);
        } else {
            display_month.set(m - 1);
        }
        // The chosen day may not exist in the new month; force a fresh pick.
        selected_date.set(None);
    };
    let next_month = move |_| {
        let m = *display_month.read();
        if m == 11 {
            display_month.set(0);
            let y = *display_year.read();
            display_year.set(y + 1);
        } else {
            display_month.set(m + 1);
        }
        selected_date.set(None);
    };

    rsx! {
        div { class: "schedule-page",
            h2 { "Book an Inspection" }

            div { class: "calendar",
                div { class: "calendar-header",
                    button { class: "calendar-nav", onclick: prev_month, "<" }
                    span { class: "calendar-title", "{calendar::month_name(month0)} {year}" }
                    button { class: "calendar-nav", onclick: next_month, ">" }
                }
                div { class: "calendar-grid",
                    for name in calendar::DAY_NAMES_SHORT {
                        span { class: "calendar-dow", key: "{name}", "{name}" }
                    }
                    for blank in 0..lead_blanks {
                        span { class: "calendar-blank", key: "blank-{blank}" }
                    }
                    for day in 1..=day_count {
                        {
                            let class_name = if chosen_day == Some(day) {
                                "calendar-day selected"
                            } else {
                                "calendar-day"
                            };
                            rsx! {
                                button {
                                    key: "{day}",
                                    class: "{class_name}",
                                    onclick: move |_| selected_date.set(Some(day)),
                                    "{day}"
                                }
                            }
                        }
                    }
                }
            }

            div { class: "timeslot-strip",
                h3 { "Available Times" }
                div { class: "timeslot-grid",
                    {timeslot::booking_slots().into_iter().map(|label| {
                        let value = label.clone();
                        let class_name = if chosen_time.as_deref() == Some(label.as_str()) {
                            "timeslot selected"
                        } else {
                            "timeslot"
                        };
                        rsx! {
                            button {
                                key: "{label}",
                                class: "{class_name}",
                                onclick: move |_| selected_time.set(Some(value.clone())),
                                "{label}"
                            }
                        }
                    })}
                }
            }

            BookingForm {
                location,
                vin,
                vehicle_info,
                selected_date,
                selected_time,
                display_month,
                display_year,
            }
        }
    }
}
