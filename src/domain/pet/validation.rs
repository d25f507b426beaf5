use std::fmt;

use base64::Engine;
use chrono::{Local, NaiveDate};
use serde::Serialize;

use crate::domain::pet::model::CreatePetRequest;

pub const MIN_APPROXIMATE_AGE: f64 = 0.1;

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViolationReason {
    Required,
    Blank,
    InvalidEncoding,
    MissingAgeInformation,
    NotPast,
    MalformedDate,
    TooSmall,
}

impl fmt::Display for ViolationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            ViolationReason::Required => "must be present",
            ViolationReason::Blank => "must not be blank",
            ViolationReason::InvalidEncoding => "must be base64 encoded",
            ViolationReason::MissingAgeInformation => {
                "birth_date or approximate_age must be informed"
            }
            ViolationReason::NotPast => "must be a past date",
            ViolationReason::MalformedDate => "must be an ISO-8601 date (yyyy-MM-dd)",
            ViolationReason::TooSmall => "must be greater than or equal to 0.1",
        };
        f.write_str(message)
    }
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Violation {
    pub field: String,
    pub reason: ViolationReason,
}

impl Violation {
    fn new(field: impl Into<String>, reason: ViolationReason) -> Self {
        Violation {
            field: field.into(),
            reason,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.reason)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ValidationResult {
    Accepted,
    /// Never empty.
    Rejected(Vec<Violation>),
}

impl ValidationResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationResult::Accepted)
    }

    pub fn violations(&self) -> &[Violation] {
        match self {
            ValidationResult::Accepted => &[],
            ValidationResult::Rejected(violations) => violations,
        }
    }
}

/// Validates a create-pet request against the local calendar date.
pub fn validate(request: &CreatePetRequest) -> ValidationResult {
    validate_at(request, Local::now().date_naive())
}

/// Validates a create-pet request, treating `today` as the current date.
///
/// Every rule runs regardless of earlier failures so the caller gets the full
/// list of violations.
pub fn validate_at(request: &CreatePetRequest, today: NaiveDate) -> ValidationResult {
    let mut violations = Vec::new();

    check_required_text(&mut violations, "name", request.name.as_deref());

    let profile_photo = request.profile_photo.as_deref();
    if check_required_text(&mut violations, "profile_photo", profile_photo)
        && !profile_photo.is_some_and(is_base64)
    {
        violations.push(Violation::new("profile_photo", ViolationReason::InvalidEncoding));
    }

    for (index, photo) in request.photos.iter().enumerate() {
        let field = format!("photos[{index}]");
        if is_blank(photo) {
            violations.push(Violation::new(field, ViolationReason::Blank));
        } else if !is_base64(photo) {
            violations.push(Violation::new(field, ViolationReason::InvalidEncoding));
        }
    }

    for (index, care) in request.special_cares.iter().enumerate() {
        if is_blank(care) {
            let field = format!("special_cares[{index}]");
            violations.push(Violation::new(field, ViolationReason::Blank));
        }
    }

    check_present(&mut violations, "specie", request.specie.is_some());
    check_present(&mut violations, "gender", request.gender.is_some());
    check_present(&mut violations, "castrated", request.castrated.is_some());

    check_age_information(&mut violations, request, today);

    if violations.is_empty() {
        ValidationResult::Accepted
    } else {
        ValidationResult::Rejected(violations)
    }
}

/// Parses the wire form of a birth date. Only `yyyy-MM-dd` is accepted:
/// four-digit year, two-digit month and day, no sign and no surrounding
/// whitespace.
pub fn parse_birth_date(raw: &str) -> Option<NaiveDate> {
    if !is_iso_date_shape(raw) {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

fn is_iso_date_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(index, byte)| match index {
            4 | 7 => *byte == b'-',
            _ => byte.is_ascii_digit(),
        })
}

// Returns true when the value is present and not blank.
fn check_required_text(
    violations: &mut Vec<Violation>,
    field: &str,
    value: Option<&str>,
) -> bool {
    match value {
        None => {
            violations.push(Violation::new(field, ViolationReason::Required));
            false
        }
        Some(text) if is_blank(text) => {
            violations.push(Violation::new(field, ViolationReason::Blank));
            false
        }
        Some(_) => true,
    }
}

fn check_present(violations: &mut Vec<Violation>, field: &str, present: bool) {
    if !present {
        violations.push(Violation::new(field, ViolationReason::Required));
    }
}

fn check_age_information(
    violations: &mut Vec<Violation>,
    request: &CreatePetRequest,
    today: NaiveDate,
) {
    match (request.birth_date.as_deref(), request.approximate_age) {
        (None, None) => {
            violations.push(Violation::new("birth_date", ViolationReason::MissingAgeInformation));
        }
        (birth_date, approximate_age) => {
            if let Some(raw) = birth_date {
                let reason = match parse_birth_date(raw) {
                    None => Some(ViolationReason::MalformedDate),
                    Some(date) if date >= today => Some(ViolationReason::NotPast),
                    Some(_) => None,
                };
                if let Some(reason) = reason {
                    violations.push(Violation::new("birth_date", reason));
                }
            }

            // NaN fails this comparison too
            if let Some(age) = approximate_age {
                if !(age.is_finite() && age >= MIN_APPROXIMATE_AGE) {
                    violations.push(Violation::new("approximate_age", ViolationReason::TooSmall));
                }
            }
        }
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn is_base64(value: &str) -> bool {
    base64::engine::general_purpose::STANDARD.decode(value).is_ok()
}
