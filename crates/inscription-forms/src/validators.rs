//! Per-field validation rules
//!
//! Every rule is a pure function of the field definition, its current value
//! and a [`FieldContext`] carrying the sibling values some rules depend on
//! (selected dialing code, password) plus the reference date used for
//! date-of-birth checks.

use crate::field::{FieldDef, FieldError, FieldResult, FieldValue, ValidatorKind};
use crate::phone::PhoneRegion;
use chrono::{Datelike, Local, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

pub const MIN_AGE: i32 = 16;
pub const MAX_AGE: i32 = 100;

pub const INVALID_EMAIL: &str = "Enter a valid email address";
pub const USERNAME_LENGTH: &str = "Username must be between 3 and 20 characters";
pub const USERNAME_CHARACTERS: &str = "Only letters, digits, hyphens and underscores are allowed";
pub const PASSWORD_LENGTH: &str = "Password must be at least 8 characters long";
pub const PASSWORD_COMPOSITION: &str =
	"Password must contain at least one lowercase letter, one uppercase letter and one digit";
pub const PASSWORD_MISMATCH: &str = "Passwords do not match";
pub const INVALID_PHONE: &str = "Enter a valid phone number for the selected country";
pub const INVALID_DATE: &str = "Enter a valid date";
pub const FUTURE_DATE: &str = "Date of birth cannot be in the future";
pub const AGE_RANGE: &str = "You must be between 16 and 100 years old";
pub const STUDENT_ID_LENGTH: &str = "Student ID must be between 5 and 15 characters";
pub const NAME_LENGTH: &str = "Name must be between 2 and 50 characters";
pub const NAME_CHARACTERS: &str = "Name may only contain letters, spaces, apostrophes and hyphens";
pub const PROGRAM_LENGTH: &str = "Program must be between 2 and 100 characters";
pub const ADDRESS_LENGTH: &str = "Enter a complete address (at least 10 characters)";
pub const CONSENT_REQUIRED: &str = "You must accept the terms of use";
pub const INVALID_VALUE: &str = "Enter a text value";

// Accepted date-of-birth input formats, ISO first.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d/%m/%Y"];

// local@domain.tld with no whitespace and a single @.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_REGEX: invalid regex pattern")
});

static USERNAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[a-zA-Z0-9_-]+$").expect("USERNAME_REGEX: invalid regex pattern")
});

// Latin letters with the accented forms used across European names.
static NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(
		r"^[a-zA-ZàáâäãåąčćęèéêëėįìíîïłńòóôöõøùúûüųūÿýżźñçšžÀÁÂÄÃÅĄĆČĖĘÈÉÊËÌÍÎÏĮŁŃÒÓÔÖÕØÙÚÛÜŲŪŸÝŻŹÑßÇŒÆŠŽ∂ð\s'-]+$",
	)
	.expect("NAME_REGEX: invalid regex pattern")
});

/// Result of validating one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationVerdict {
	pub valid: bool,
	pub message: String,
}

impl ValidationVerdict {
	pub fn valid() -> Self {
		Self {
			valid: true,
			message: String::new(),
		}
	}

	pub fn invalid(message: impl Into<String>) -> Self {
		Self {
			valid: false,
			message: message.into(),
		}
	}

	pub fn is_valid(&self) -> bool {
		self.valid
	}
}

impl From<FieldResult<()>> for ValidationVerdict {
	fn from(result: FieldResult<()>) -> Self {
		match result {
			Ok(()) => ValidationVerdict::valid(),
			Err(e) => ValidationVerdict::invalid(e.to_string()),
		}
	}
}

/// Cross-field values read at validation time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldContext<'a> {
	pub country_code: Option<&'a str>,
	pub password: Option<&'a str>,
	pub today: NaiveDate,
}

impl<'a> FieldContext<'a> {
	/// Context with no sibling values
	///
	/// # Examples
	///
	/// ```
	/// use inscription_forms::FieldContext;
	/// use chrono::NaiveDate;
	///
	/// let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
	/// let ctx = FieldContext::new(today).with_country_code("+44");
	/// assert_eq!(ctx.country_code, Some("+44"));
	/// assert_eq!(ctx.password, None);
	/// ```
	pub fn new(today: NaiveDate) -> Self {
		Self {
			country_code: None,
			password: None,
			today,
		}
	}

	/// Context dated with the local calendar day
	pub fn for_today() -> Self {
		Self::new(Local::now().date_naive())
	}

	pub fn with_country_code(mut self, country_code: &'a str) -> Self {
		self.country_code = Some(country_code);
		self
	}

	pub fn with_password(mut self, password: &'a str) -> Self {
		self.password = Some(password);
		self
	}

	pub fn phone_region(&self) -> PhoneRegion {
		PhoneRegion::from_code(self.country_code)
	}
}

/// Validate a field value.
///
/// A blank value fails only when the field is required; otherwise the rule
/// selected by [`FieldDef::validator`] runs on the trimmed text.
///
/// # Examples
///
/// ```
/// use inscription_forms::{validators, FieldContext, FieldId, FieldValue};
/// use inscription_forms::steps::field_def;
///
/// let ctx = FieldContext::for_today();
/// let verdict = validators::validate(field_def(FieldId::Username), &FieldValue::from("ab"), &ctx);
/// assert!(!verdict.valid);
///
/// let verdict = validators::validate(field_def(FieldId::Username), &FieldValue::from("abc"), &ctx);
/// assert!(verdict.valid);
/// ```
pub fn validate(field: &FieldDef, value: &FieldValue, ctx: &FieldContext<'_>) -> ValidationVerdict {
	if value.is_blank() {
		return if field.required {
			ValidationVerdict::invalid(FieldError::Required.to_string())
		} else {
			ValidationVerdict::valid()
		};
	}

	let Some(text) = value.as_text() else {
		return if field.is_checkbox() {
			ValidationVerdict::valid()
		} else {
			ValidationVerdict::invalid(INVALID_VALUE)
		};
	};

	validate_text(field.validator, text.trim(), ctx).into()
}

/// Run a rule against already-trimmed, non-empty text
pub fn validate_text(kind: ValidatorKind, value: &str, ctx: &FieldContext<'_>) -> FieldResult<()> {
	match kind {
		ValidatorKind::Email => validate_email(value),
		ValidatorKind::Username => validate_username(value),
		ValidatorKind::Password => validate_password(value),
		ValidatorKind::ConfirmPassword => validate_confirmation(value, ctx.password.unwrap_or("")),
		ValidatorKind::Phone => validate_phone(value, ctx.phone_region()),
		ValidatorKind::DateOfBirth => validate_date_of_birth(value, ctx.today),
		ValidatorKind::StudentId => check_length(value, 5, Some(15), STUDENT_ID_LENGTH),
		ValidatorKind::PersonName => validate_person_name(value),
		ValidatorKind::Program => check_length(value, 2, Some(100), PROGRAM_LENGTH),
		ValidatorKind::Address => check_length(value, 10, None, ADDRESS_LENGTH),
		ValidatorKind::Plain => Ok(()),
	}
}

fn invalid(message: &str) -> FieldError {
	FieldError::Validation(message.to_string())
}

fn check_length(value: &str, min: usize, max: Option<usize>, message: &str) -> FieldResult<()> {
	let len = value.chars().count();
	if len < min || max.is_some_and(|max| len > max) {
		return Err(invalid(message));
	}
	Ok(())
}

pub fn validate_email(value: &str) -> FieldResult<()> {
	if EMAIL_REGEX.is_match(value) {
		Ok(())
	} else {
		Err(invalid(INVALID_EMAIL))
	}
}

/// Length is checked before the character set
///
/// # Examples
///
/// ```
/// use inscription_forms::validators::{validate_username, USERNAME_LENGTH};
/// use inscription_forms::FieldError;
///
/// assert!(validate_username("jean_dupont-2").is_ok());
/// assert_eq!(
///     validate_username("ab"),
///     Err(FieldError::Validation(USERNAME_LENGTH.to_string()))
/// );
/// ```
pub fn validate_username(value: &str) -> FieldResult<()> {
	check_length(value, 3, Some(20), USERNAME_LENGTH)?;
	if !USERNAME_REGEX.is_match(value) {
		return Err(invalid(USERNAME_CHARACTERS));
	}
	Ok(())
}

pub fn validate_password(value: &str) -> FieldResult<()> {
	check_length(value, 8, None, PASSWORD_LENGTH)?;

	let has_lower = value.chars().any(|c| c.is_ascii_lowercase());
	let has_upper = value.chars().any(|c| c.is_ascii_uppercase());
	let has_digit = value.chars().any(|c| c.is_ascii_digit());
	if !(has_lower && has_upper && has_digit) {
		return Err(invalid(PASSWORD_COMPOSITION));
	}
	Ok(())
}

pub fn validate_confirmation(value: &str, password: &str) -> FieldResult<()> {
	if value != password {
		return Err(invalid(PASSWORD_MISMATCH));
	}
	Ok(())
}

pub fn validate_phone(value: &str, region: PhoneRegion) -> FieldResult<()> {
	if !region.is_valid_number(value) {
		return Err(invalid(INVALID_PHONE));
	}
	Ok(())
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
	DATE_FORMATS
		.iter()
		.find_map(|format| NaiveDate::parse_from_str(value, format).ok())
}

/// Birth dates on or after `today` are rejected; the age is a plain
/// difference of calendar years.
///
/// # Examples
///
/// ```
/// use inscription_forms::validators::validate_date_of_birth;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
/// assert!(validate_date_of_birth("2009-03-10", today).is_ok());
/// assert!(validate_date_of_birth("2025-03-10", today).is_err());
/// // December birthday still counts as 16 in March
/// assert!(validate_date_of_birth("2009-12-31", today).is_ok());
/// ```
pub fn validate_date_of_birth(value: &str, today: NaiveDate) -> FieldResult<()> {
	let birth = parse_date(value).ok_or_else(|| invalid(INVALID_DATE))?;
	if birth >= today {
		return Err(invalid(FUTURE_DATE));
	}

	let age = today.year() - birth.year();
	if !(MIN_AGE..=MAX_AGE).contains(&age) {
		return Err(invalid(AGE_RANGE));
	}
	Ok(())
}

pub fn validate_person_name(value: &str) -> FieldResult<()> {
	check_length(value, 2, Some(50), NAME_LENGTH)?;
	if !NAME_REGEX.is_match(value) {
		return Err(invalid(NAME_CHARACTERS));
	}
	Ok(())
}

/// Extra rule of the review step: the terms checkbox must be ticked
pub fn validate_consent(value: &FieldValue) -> ValidationVerdict {
	if value.is_checked() {
		ValidationVerdict::valid()
	} else {
		ValidationVerdict::invalid(CONSENT_REQUIRED)
	}
}
