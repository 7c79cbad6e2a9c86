/// An inspection service offered at booking time. Prices are stored in
/// cents; payment itself is handled by the order backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InspectionService {
    pub name: &'static str,
    pub price_cents: u64,
    pub note: &'static str,
}

/// The single service currently bookable through the form.
pub const STANDARD_INSPECTION: InspectionService = InspectionService {
    name: "Standard 150-Point Inspection",
    price_cents: 19_900,
    note: "Includes digital report with photos",
};

/// Format an amount in cents as "$D.CC".
pub fn format_usd(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(19_900), "$199.00");
        assert_eq!(format_usd(5), "$0.05");
        assert_eq!(format_usd(100_050), "$1000.50");
        assert_eq!(format_usd(0), "$0.00");
    }

    #[test]
    fn test_standard_inspection() {
        assert_eq!(format_usd(STANDARD_INSPECTION.price_cents), "$199.00");
    }
}
