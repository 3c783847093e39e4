//! Pure input validators shared by the intake form and the signup wizard.
//! No DOM, no network; everything here is host-testable.

use crate::locations::KENYA_BOUNDS;

/// Minimal address check: something before and after a single `@`, and a
/// dot somewhere in the domain part
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && !domain.is_empty()
                && !local.contains(char::is_whitespace)
                && !domain.contains(char::is_whitespace)
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        _ => false,
    }
}

/// Accepts the three Kenyan number shapes after stripping every non-digit:
/// `254[17]XXXXXXXX`, `07XXXXXXXX`, `01XXXXXXXX`
pub fn is_valid_kenyan_phone(phone: &str) -> bool {
    let digits: Vec<u8> = phone
        .chars()
        .filter(|c| c.is_ascii_digit())
        .map(|c| c as u8 - b'0')
        .collect();

    match digits.len() {
        12 => {
            digits[0] == 2
                && digits[1] == 5
                && digits[2] == 4
                && matches!(digits[3], 1 | 7)
        }
        10 => digits[0] == 0 && matches!(digits[1], 1 | 7),
        _ => false,
    }
}

/// When both bounds are given, min must be strictly below max
pub fn is_valid_rate_range(min_rate: Option<u32>, max_rate: Option<u32>) -> bool {
    match (min_rate, max_rate) {
        (Some(min), Some(max)) => min < max,
        _ => true,
    }
}

/// Coordinates inside Kenya's bounding box
pub fn within_kenya(lat: f64, lng: f64) -> bool {
    KENYA_BOUNDS.contains(lat, lng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("0712345678")]
    #[case("0112345678")]
    #[case("254712345678")]
    #[case("254112345678")]
    #[case("+254 712 345 678")]
    #[case("07-12-34-56-78")]
    fn accepts_valid_kenyan_phones(#[case] phone: &str) {
        assert!(is_valid_kenyan_phone(phone), "{phone} should be valid");
    }

    #[rstest]
    #[case("0712345")] // too short
    #[case("+1-555-1234")] // not Kenyan
    #[case("0812345678")] // bad prefix
    #[case("254812345678")] // bad prefix after country code
    #[case("25471234567")] // eleven digits
    #[case("")]
    fn rejects_invalid_kenyan_phones(#[case] phone: &str) {
        assert!(!is_valid_kenyan_phone(phone), "{phone} should be invalid");
    }

    #[rstest]
    #[case("jane@example.com", true)]
    #[case("jane.doe+tag@mail.co.ke", true)]
    #[case("jane@com", false)]
    #[case("@example.com", false)]
    #[case("jane@", false)]
    #[case("jane example@x.com", false)]
    #[case("two@@example.com", false)]
    fn email_shapes(#[case] email: &str, #[case] expected: bool) {
        assert_eq!(is_valid_email(email), expected, "{email}");
    }

    #[test]
    fn rate_range_only_checked_when_both_present() {
        assert!(is_valid_rate_range(None, None));
        assert!(is_valid_rate_range(Some(500), None));
        assert!(is_valid_rate_range(None, Some(500)));
        assert!(is_valid_rate_range(Some(500), Some(1500)));
        assert!(!is_valid_rate_range(Some(1500), Some(1500)));
        assert!(!is_valid_rate_range(Some(1500), Some(500)));
    }

    #[test]
    fn kenya_bounds() {
        assert!(within_kenya(-1.2921, 36.8219)); // Nairobi
        assert!(within_kenya(-4.0435, 39.6682)); // Mombasa
        assert!(!within_kenya(51.5074, -0.1278)); // London
        assert!(!within_kenya(-6.7924, 39.2083)); // Dar es Salaam
    }
}
