/// Appointment slots are half-hour indices since midnight, matching the
/// granularity inspectors are dispatched at.
///
/// Bookable window: 9:00 AM through 4:30 PM.
pub const FIRST_SLOT: u8 = 18;
pub const LAST_SLOT: u8 = 33;

/// Convert a slot index to (hour, minute).
pub fn slot_to_time(slot: u8) -> (u8, u8) {
    let hour = slot / 2;
    let minute = (slot % 2) * 30;
    (hour, minute)
}

/// Format a slot as "H:MM AM/PM".
pub fn format_slot_12h(slot: u8) -> String {
    let (h, m) = slot_to_time(slot);
    let (h12, ampm) = if h == 0 {
        (12, "AM")
    } else if h < 12 {
        (h, "AM")
    } else if h == 12 {
        (12, "PM")
    } else {
        (h - 12, "PM")
    };
    format!("{h12}:{m:02} {ampm}")
}

/// Labels for every bookable appointment time, in order.
pub fn booking_slots() -> Vec<String> {
    (FIRST_SLOT..=LAST_SLOT).map(format_slot_12h).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_to_time() {
        assert_eq!(slot_to_time(0), (0, 0));
        assert_eq!(slot_to_time(18), (9, 0));
        assert_eq!(slot_to_time(33), (16, 30));
    }

    #[test]
    fn test_format_slot_12h() {
        assert_eq!(format_slot_12h(0), "12:00 AM");
        assert_eq!(format_slot_12h(18), "9:00 AM");
        assert_eq!(format_slot_12h(20), "10:00 AM");
        assert_eq!(format_slot_12h(24), "12:00 PM");
        assert_eq!(format_slot_12h(33), "4:30 PM");
    }

    #[test]
    fn test_booking_slots_window() {
        let slots = booking_slots();
        assert_eq!(slots.len(), 16);
        assert_eq!(slots.first().map(String::as_str), Some("9:00 AM"));
        assert_eq!(slots.last().map(String::as_str), Some("4:30 PM"));
    }
}
