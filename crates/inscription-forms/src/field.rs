//! Field identifiers, values and static field definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
	#[error("This field is required")]
	Required,
	#[error("{0}")]
	Validation(String),
	#[error("Unknown field: {0}")]
	UnknownField(String),
}

pub type FieldResult<T> = Result<T, FieldError>;

/// Identifier of every input collected by the registration wizard.
///
/// The string form (see [`FieldId::as_str`]) is the key used in the
/// submitted [`Record`](crate::Record).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
	Email,
	Username,
	Password,
	ConfirmPassword,
	FirstName,
	LastName,
	CountryCode,
	Phone,
	DateOfBirth,
	Address,
	StudentId,
	University,
	Program,
	YearOfStudy,
	TermsAccepted,
}

impl FieldId {
	/// Every field, in registry order.
	pub const ALL: [FieldId; 15] = [
		FieldId::Email,
		FieldId::Username,
		FieldId::Password,
		FieldId::ConfirmPassword,
		FieldId::FirstName,
		FieldId::LastName,
		FieldId::CountryCode,
		FieldId::Phone,
		FieldId::DateOfBirth,
		FieldId::Address,
		FieldId::StudentId,
		FieldId::University,
		FieldId::Program,
		FieldId::YearOfStudy,
		FieldId::TermsAccepted,
	];

	/// Record key for this field
	///
	/// # Examples
	///
	/// ```
	/// use inscription_forms::FieldId;
	///
	/// assert_eq!(FieldId::ConfirmPassword.as_str(), "confirmPassword");
	/// assert_eq!(FieldId::YearOfStudy.as_str(), "yearOfStudy");
	/// ```
	pub fn as_str(&self) -> &'static str {
		match self {
			FieldId::Email => "email",
			FieldId::Username => "username",
			FieldId::Password => "password",
			FieldId::ConfirmPassword => "confirmPassword",
			FieldId::FirstName => "firstName",
			FieldId::LastName => "lastName",
			FieldId::CountryCode => "countryCode",
			FieldId::Phone => "phone",
			FieldId::DateOfBirth => "dateOfBirth",
			FieldId::Address => "address",
			FieldId::StudentId => "studentId",
			FieldId::University => "university",
			FieldId::Program => "program",
			FieldId::YearOfStudy => "yearOfStudy",
			FieldId::TermsAccepted => "termsAccepted",
		}
	}

	pub(crate) fn index(self) -> usize {
		self as usize
	}
}

impl fmt::Display for FieldId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for FieldId {
	type Err = FieldError;

	/// Parse a record key back into a field identifier
	///
	/// # Examples
	///
	/// ```
	/// use inscription_forms::FieldId;
	///
	/// assert_eq!("studentId".parse::<FieldId>().unwrap(), FieldId::StudentId);
	/// assert!("fullPhone".parse::<FieldId>().is_err());
	/// ```
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		FieldId::ALL
			.iter()
			.copied()
			.find(|id| id.as_str() == s)
			.ok_or_else(|| FieldError::UnknownField(s.to_string()))
	}
}

/// Rule selected by a field definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidatorKind {
	Email,
	Username,
	Password,
	ConfirmPassword,
	Phone,
	DateOfBirth,
	StudentId,
	PersonName,
	Program,
	Address,
	/// Only the required check applies
	Plain,
}

/// How the presentation layer collects the value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
	Text,
	Choice,
	Checkbox,
}

/// Static description of a single input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
	pub id: FieldId,
	pub label: &'static str,
	pub required: bool,
	pub validator: ValidatorKind,
	pub input: InputKind,
}

impl FieldDef {
	pub const fn new(id: FieldId, label: &'static str, validator: ValidatorKind) -> Self {
		Self {
			id,
			label,
			required: true,
			validator,
			input: InputKind::Text,
		}
	}

	pub const fn optional(mut self) -> Self {
		self.required = false;
		self
	}

	pub const fn with_input(mut self, input: InputKind) -> Self {
		self.input = input;
		self
	}

	pub fn is_checkbox(&self) -> bool {
		self.input == InputKind::Checkbox
	}
}

/// Current value of a field: free text or checkbox state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
	Text(String),
	Checked(bool),
}

impl FieldValue {
	/// Text content; checkboxes have none
	///
	/// # Examples
	///
	/// ```
	/// use inscription_forms::FieldValue;
	///
	/// assert_eq!(FieldValue::from("abc").as_text(), Some("abc"));
	/// assert_eq!(FieldValue::Checked(true).as_text(), None);
	/// ```
	pub fn as_text(&self) -> Option<&str> {
		match self {
			FieldValue::Text(s) => Some(s),
			FieldValue::Checked(_) => None,
		}
	}

	pub fn is_checked(&self) -> bool {
		matches!(self, FieldValue::Checked(true))
	}

	/// Whitespace-only text and unchecked boxes count as blank
	pub fn is_blank(&self) -> bool {
		match self {
			FieldValue::Text(s) => s.trim().is_empty(),
			FieldValue::Checked(checked) => !checked,
		}
	}

	/// Canonical form stored in the record
	pub fn canonical(&self) -> FieldValue {
		match self {
			FieldValue::Text(s) => FieldValue::Text(s.trim().to_string()),
			FieldValue::Checked(checked) => FieldValue::Checked(*checked),
		}
	}
}

impl Default for FieldValue {
	fn default() -> Self {
		FieldValue::Text(String::new())
	}
}

impl fmt::Display for FieldValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			FieldValue::Text(s) => f.write_str(s),
			FieldValue::Checked(checked) => write!(f, "{}", checked),
		}
	}
}

impl From<&str> for FieldValue {
	fn from(value: &str) -> Self {
		FieldValue::Text(value.to_string())
	}
}

impl From<String> for FieldValue {
	fn from(value: String) -> Self {
		FieldValue::Text(value)
	}
}

impl From<bool> for FieldValue {
	fn from(value: bool) -> Self {
		FieldValue::Checked(value)
	}
}
