use serde::{Deserialize, Serialize};

use crate::calendar;

/// The in-progress, not-yet-submitted form fields for an inspection
/// appointment. Owned by the page that hosts the form; the form itself
/// only reads and writes it through the owner's signals.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingDraft {
    pub location: String,
    /// Optional; inspectors can look the vehicle up on site without it.
    pub vin: String,
    pub vehicle_info: String,
}

impl BookingDraft {
    pub fn clear(&mut self) {
        self.location.clear();
        self.vin.clear();
        self.vehicle_info.clear();
    }
}

pub const LOCATION_REQUIRED: &str = "Location is required";
pub const VEHICLE_INFO_REQUIRED: &str = "Vehicle information is required";

/// Per-field validation messages, recomputed on every submit attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub location: Option<String>,
    pub vehicle_info: Option<String>,
}

impl FieldErrors {
    pub fn is_clean(&self) -> bool {
        self.location.is_none() && self.vehicle_info.is_none()
    }
}

/// Required-field check on the draft.
pub fn validate(draft: &BookingDraft) -> FieldErrors {
    FieldErrors {
        location: draft
            .location
            .trim()
            .is_empty()
            .then(|| LOCATION_REQUIRED.to_string()),
        vehicle_info: draft
            .vehicle_info
            .trim()
            .is_empty()
            .then(|| VEHICLE_INFO_REQUIRED.to_string()),
    }
}

/// Wire body for the order service's create-booking endpoint. The field
/// names are the backend's schema, mapped directly from the form fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub vin_location: String,
    pub vin_number: String,
    pub year_of_manufacture: String,
    pub inspection_date: String,
    pub inspection_time: String,
}

/// Outcome of the guarded submit sequence. Checks run in declaration
/// order: session first, then required fields, then the appointment slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitDecision {
    /// No session; the form redirects to login without validating.
    NotLoggedIn,
    /// Required fields missing; shown inline, no notification.
    InvalidFields(FieldErrors),
    /// Fields fine but no usable date/time selected.
    SlotMissing,
    /// All guards passed; the request is ready to send.
    Submit(OrderRequest),
}

/// Run the submit guards and, if they all pass, build the order request.
///
/// `day` is a day-of-month within the displayed `display_month` (zero
/// based) / `display_year`. A day that does not exist in that month is
/// treated the same as no selection.
pub fn decide_submission(
    logged_in: bool,
    draft: &BookingDraft,
    day: Option<u32>,
    time: Option<&str>,
    display_month: u32,
    display_year: i32,
) -> SubmitDecision {
    if !logged_in {
        return SubmitDecision::NotLoggedIn;
    }

    let errors = validate(draft);
    if !errors.is_clean() {
        return SubmitDecision::InvalidFields(errors);
    }

    let (Some(day), Some(time)) = (day, time.filter(|t| !t.is_empty())) else {
        return SubmitDecision::SlotMissing;
    };
    let Some(inspection_date) = calendar::iso_date(display_year, display_month, day) else {
        return SubmitDecision::SlotMissing;
    };

    SubmitDecision::Submit(OrderRequest {
        vin_location: draft.location.clone(),
        vin_number: draft.vin.clone(),
        year_of_manufacture: draft.vehicle_info.clone(),
        inspection_date,
        inspection_time: time.to_string(),
    })
}

/// Whether the submit button should be enabled.
pub fn can_submit(
    logged_in: bool,
    draft: &BookingDraft,
    day: Option<u32>,
    time: Option<&str>,
    submitting: bool,
) -> bool {
    logged_in
        && !submitting
        && day.is_some()
        && time.is_some_and(|t| !t.is_empty())
        && validate(draft).is_clean()
}

/// What gets cleared after a successful booking.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResetPolicy {
    /// Clear the text fields but keep the chosen slot, so the same
    /// appointment can be rebooked for another vehicle.
    #[default]
    FieldsOnly,
    /// Clear the text fields and the selected date/time.
    Everything,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> BookingDraft {
        BookingDraft {
            location: "123 Main St".to_string(),
            vin: "".to_string(),
            vehicle_info: "Toyota Camry 2020".to_string(),
        }
    }

    #[test]
    fn test_validate_empty_draft() {
        let errors = validate(&BookingDraft::default());
        assert_eq!(errors.location.as_deref(), Some(LOCATION_REQUIRED));
        assert_eq!(errors.vehicle_info.as_deref(), Some(VEHICLE_INFO_REQUIRED));
        assert!(!errors.is_clean());
    }

    #[test]
    fn test_validate_whitespace_is_empty() {
        let draft = BookingDraft {
            location: "   ".to_string(),
            ..filled_draft()
        };
        let errors = validate(&draft);
        assert_eq!(errors.location.as_deref(), Some(LOCATION_REQUIRED));
        assert!(errors.vehicle_info.is_none());
    }

    #[test]
    fn test_validate_filled_draft() {
        assert!(validate(&filled_draft()).is_clean());
    }

    #[test]
    fn test_logged_out_blocks_before_validation() {
        // Even a completely empty draft: no field errors are produced and
        // no request is built when there is no session.
        let decision =
            decide_submission(false, &BookingDraft::default(), Some(15), Some("10:00 AM"), 2, 2024);
        assert_eq!(decision, SubmitDecision::NotLoggedIn);
    }

    #[test]
    fn test_missing_fields_block_submission() {
        let draft = BookingDraft {
            location: String::new(),
            ..filled_draft()
        };
        match decide_submission(true, &draft, Some(15), Some("10:00 AM"), 2, 2024) {
            SubmitDecision::InvalidFields(errors) => {
                assert_eq!(errors.location.as_deref(), Some(LOCATION_REQUIRED));
                assert!(errors.vehicle_info.is_none());
            }
            other => panic!("expected InvalidFields, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_slot_blocks_submission() {
        let draft = filled_draft();
        assert_eq!(
            decide_submission(true, &draft, None, Some("10:00 AM"), 2, 2024),
            SubmitDecision::SlotMissing
        );
        assert_eq!(
            decide_submission(true, &draft, Some(15), None, 2, 2024),
            SubmitDecision::SlotMissing
        );
        assert_eq!(
            decide_submission(true, &draft, Some(15), Some(""), 2, 2024),
            SubmitDecision::SlotMissing
        );
    }

    #[test]
    fn test_nonexistent_day_blocks_submission() {
        // Day 31 survives a switch from March to a 30-day month.
        assert_eq!(
            decide_submission(true, &filled_draft(), Some(31), Some("10:00 AM"), 3, 2024),
            SubmitDecision::SlotMissing
        );
    }

    #[test]
    fn test_submit_builds_order_request() {
        let decision =
            decide_submission(true, &filled_draft(), Some(15), Some("10:00 AM"), 2, 2024);
        match decision {
            SubmitDecision::Submit(request) => {
                assert_eq!(request.vin_location, "123 Main St");
                assert_eq!(request.vin_number, "");
                assert_eq!(request.year_of_manufacture, "Toyota Camry 2020");
                assert_eq!(request.inspection_date, "2024-03-15");
                assert_eq!(request.inspection_time, "10:00 AM");
            }
            other => panic!("expected Submit, got {other:?}"),
        }
    }

    #[test]
    fn test_order_request_wire_names() {
        let request = OrderRequest {
            vin_location: "123 Main St".to_string(),
            vin_number: "1HGBH41JXMN109186".to_string(),
            year_of_manufacture: "Toyota Camry 2020".to_string(),
            inspection_date: "2024-03-15".to_string(),
            inspection_time: "10:00 AM".to_string(),
        };
        let value = serde_json::to_value(&request).expect("serializes");
        assert_eq!(value["vinLocation"], "123 Main St");
        assert_eq!(value["vinNumber"], "1HGBH41JXMN109186");
        assert_eq!(value["yearOfManufacture"], "Toyota Camry 2020");
        assert_eq!(value["inspectionDate"], "2024-03-15");
        assert_eq!(value["inspectionTime"], "10:00 AM");
    }

    #[test]
    fn test_can_submit_requires_everything() {
        let draft = filled_draft();
        assert!(can_submit(true, &draft, Some(15), Some("10:00 AM"), false));

        assert!(!can_submit(false, &draft, Some(15), Some("10:00 AM"), false));
        assert!(!can_submit(true, &draft, None, Some("10:00 AM"), false));
        assert!(!can_submit(true, &draft, Some(15), None, false));
        assert!(!can_submit(true, &draft, Some(15), Some(""), false));
        assert!(!can_submit(true, &draft, Some(15), Some("10:00 AM"), true));

        let empty_location = BookingDraft {
            location: String::new(),
            ..draft.clone()
        };
        assert!(!can_submit(true, &empty_location, Some(15), Some("10:00 AM"), false));

        let empty_vehicle = BookingDraft {
            vehicle_info: String::new(),
            ..draft
        };
        assert!(!can_submit(true, &empty_vehicle, Some(15), Some("10:00 AM"), false));
    }

    #[test]
    fn test_vin_stays_optional() {
        let mut draft = filled_draft();
        draft.vin = String::new();
        assert!(validate(&draft).is_clean());
        assert!(can_submit(true, &draft, Some(15), Some("10:00 AM"), false));
    }

    #[test]
    fn test_clear() {
        let mut draft = filled_draft();
        draft.vin = "1HGBH41JXMN109186".to_string();
        draft.clear();
        assert_eq!(draft, BookingDraft::default());
    }
}
