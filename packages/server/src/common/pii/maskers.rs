use lazy_static::lazy_static;
use regex::Regex;

/// Placeholder for emails that don't have a `local@domain` shape
pub const EMAIL_PLACEHOLDER: &str = "***@***.***";

/// Placeholder for phone numbers with too few digits to be real
pub const PHONE_PLACEHOLDER: &str = "***-****";

/// Placeholder for addresses and names whose value can't be inspected
pub const OPAQUE_PLACEHOLDER: &str = "***";

lazy_static! {
    // House number at the start of a street address, e.g. "123 " or "12-34 "
    static ref LEADING_STREET_NUMBER: Regex = Regex::new(r"^\d+[-\d]*\s*").unwrap();
}

/// Mask email: john.smith@example.com -> j***@example.com
///
/// A one-character local part is hidden completely (a@b.com -> ***@b.com).
/// Anything that isn't exactly `local@domain` becomes [`EMAIL_PLACEHOLDER`].
pub fn mask_email(email: Option<&str>) -> Option<String> {
    let email = present(email)?;

    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) if !local.is_empty() && !domain.is_empty() => {
            (local, domain)
        }
        _ => return Some(EMAIL_PLACEHOLDER.to_string()),
    };

    let mut chars = local.chars();
    let masked = match (chars.next(), chars.next()) {
        (Some(first), Some(_)) => format!("{}***@{}", first, domain),
        _ => format!("***@{}", domain),
    };

    Some(masked)
}

/// Mask phone: (707) 555-1234 -> 707-***-**34
///
/// Only the area code and the last two digits survive. A leading US country
/// code on an 11-digit number is dropped before formatting.
pub fn mask_phone(phone: Option<&str>) -> Option<String> {
    let phone = present(phone)?;

    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() < 7 {
        return Some(PHONE_PLACEHOLDER.to_string());
    }

    let last_two = &digits[digits.len() - 2..];
    let masked = match digits.len() {
        10 => format!("{}-***-**{}", &digits[..3], last_two),
        11 if digits.starts_with('1') => format!("{}-***-**{}", &digits[1..4], last_two),
        _ => format!("***-***-**{}", last_two),
    };

    Some(masked)
}

/// Mask address: 123 Main St, Santa Rosa -> *** Main St, Santa Rosa
///
/// Addresses without a leading house number are returned as-is.
pub fn mask_address(address: Option<&str>) -> Option<String> {
    let address = present(address)?;

    Some(
        LEADING_STREET_NUMBER
            .replacen(address, 1, "*** ")
            .into_owned(),
    )
}

/// Mask name to initials: John Smith -> J. S.
pub fn mask_name(name: Option<&str>) -> Option<String> {
    let name = present(name)?;

    let initials: Vec<String> = name
        .split_whitespace()
        .filter_map(|token| token.chars().next())
        .map(|first| format!("{}.", first.to_uppercase()))
        .collect();

    Some(initials.join(" "))
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
