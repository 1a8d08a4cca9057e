//! Static step registry and choice catalogs

use crate::field::{FieldDef, FieldId, InputKind, ValidatorKind};

pub const TOTAL_STEPS: usize = 4;

/// Dialing code selected when the wizard starts
pub const DEFAULT_COUNTRY_CODE: &str = "+33";

/// One page of the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepDef {
	/// 1-based position
	pub number: usize,
	pub name: &'static str,
	pub title: &'static str,
	pub fields: &'static [FieldId],
	/// The terms checkbox must be ticked before leaving this step
	pub requires_consent: bool,
}

impl StepDef {
	pub fn field_defs(&self) -> impl Iterator<Item = &'static FieldDef> + '_ {
		self.fields.iter().map(|&id| field_def(id))
	}

	pub fn owns(&self, field: FieldId) -> bool {
		self.fields.contains(&field)
	}

	pub fn is_last(&self) -> bool {
		self.number == TOTAL_STEPS
	}
}

pub static STEPS: [StepDef; TOTAL_STEPS] = [
	StepDef {
		number: 1,
		name: "account",
		title: "Account",
		fields: &[
			FieldId::Email,
			FieldId::Username,
			FieldId::Password,
			FieldId::ConfirmPassword,
		],
		requires_consent: false,
	},
	StepDef {
		number: 2,
		name: "contact",
		title: "Contact",
		fields: &[
			FieldId::FirstName,
			FieldId::LastName,
			FieldId::CountryCode,
			FieldId::Phone,
			FieldId::DateOfBirth,
			FieldId::Address,
		],
		requires_consent: false,
	},
	StepDef {
		number: 3,
		name: "academic",
		title: "Academic",
		fields: &[
			FieldId::StudentId,
			FieldId::University,
			FieldId::Program,
			FieldId::YearOfStudy,
		],
		requires_consent: false,
	},
	StepDef {
		number: 4,
		name: "review",
		title: "Review",
		fields: &[FieldId::TermsAccepted],
		requires_consent: true,
	},
];

// Indexed by `FieldId as usize`; order must follow `FieldId::ALL`.
static FIELDS: [FieldDef; 15] = [
	FieldDef::new(FieldId::Email, "Email", ValidatorKind::Email),
	FieldDef::new(FieldId::Username, "Username", ValidatorKind::Username),
	FieldDef::new(FieldId::Password, "Password", ValidatorKind::Password),
	FieldDef::new(
		FieldId::ConfirmPassword,
		"Confirm password",
		ValidatorKind::ConfirmPassword,
	),
	FieldDef::new(FieldId::FirstName, "First name", ValidatorKind::PersonName),
	FieldDef::new(FieldId::LastName, "Last name", ValidatorKind::PersonName),
	FieldDef::new(FieldId::CountryCode, "Country code", ValidatorKind::Plain)
		.with_input(InputKind::Choice),
	FieldDef::new(FieldId::Phone, "Phone", ValidatorKind::Phone),
	FieldDef::new(
		FieldId::DateOfBirth,
		"Date of birth",
		ValidatorKind::DateOfBirth,
	),
	FieldDef::new(FieldId::Address, "Address", ValidatorKind::Address),
	FieldDef::new(FieldId::StudentId, "Student ID", ValidatorKind::StudentId),
	FieldDef::new(FieldId::University, "University", ValidatorKind::Plain)
		.with_input(InputKind::Choice),
	FieldDef::new(FieldId::Program, "Program", ValidatorKind::Program),
	FieldDef::new(FieldId::YearOfStudy, "Year of study", ValidatorKind::Plain)
		.with_input(InputKind::Choice),
	// Checked through the review step's consent rule
	FieldDef::new(FieldId::TermsAccepted, "Terms accepted", ValidatorKind::Plain)
		.optional()
		.with_input(InputKind::Checkbox),
];

/// Definition of a field
///
/// # Examples
///
/// ```
/// use inscription_forms::FieldId;
/// use inscription_forms::steps::field_def;
///
/// let def = field_def(FieldId::Phone);
/// assert_eq!(def.id, FieldId::Phone);
/// assert!(def.required);
/// ```
pub fn field_def(id: FieldId) -> &'static FieldDef {
	&FIELDS[id.index()]
}

/// Step at a 1-based position
///
/// # Examples
///
/// ```
/// use inscription_forms::steps;
///
/// assert_eq!(steps::step(1).map(|s| s.name), Some("account"));
/// assert!(steps::step(0).is_none());
/// assert!(steps::step(5).is_none());
/// ```
pub fn step(number: usize) -> Option<&'static StepDef> {
	number.checked_sub(1).and_then(|i| STEPS.get(i))
}

/// Step that owns a field
pub fn step_of(field: FieldId) -> Option<&'static StepDef> {
	STEPS.iter().find(|s| s.owns(field))
}

/// Code/label pair of an enumerated choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
	pub code: &'static str,
	pub label: &'static str,
}

const fn choice(code: &'static str, label: &'static str) -> Choice {
	Choice { code, label }
}

pub static UNIVERSITIES: &[Choice] = &[
	choice("sorbonne", "Université de la Sorbonne"),
	choice("sciences-po", "Sciences Po"),
	choice("polytechnique", "École Polytechnique"),
	choice("hec", "HEC Paris"),
	choice("autre", "Autre"),
];

pub static YEARS_OF_STUDY: &[Choice] = &[
	choice("1", "1ère année"),
	choice("2", "2ème année"),
	choice("3", "3ème année"),
	choice("4", "4ème année"),
	choice("5", "5ème année"),
	choice("master1", "Master 1"),
	choice("master2", "Master 2"),
	choice("doctorat", "Doctorat"),
];

pub static COUNTRY_CODES: &[Choice] = &[
	choice("+33", "France"),
	choice("+1", "United States / Canada"),
	choice("+44", "United Kingdom"),
	choice("+32", "Belgium"),
	choice("+41", "Switzerland"),
	choice("+49", "Germany"),
];

/// Choices offered for a field, if it is a select
pub fn choices_for(field: FieldId) -> Option<&'static [Choice]> {
	match field {
		FieldId::University => Some(UNIVERSITIES),
		FieldId::YearOfStudy => Some(YEARS_OF_STUDY),
		FieldId::CountryCode => Some(COUNTRY_CODES),
		_ => None,
	}
}

/// Display label for a code; unknown codes are shown as-is
///
/// # Examples
///
/// ```
/// use inscription_forms::steps::{choice_label, UNIVERSITIES};
///
/// assert_eq!(choice_label(UNIVERSITIES, "hec"), "HEC Paris");
/// assert_eq!(choice_label(UNIVERSITIES, "mit"), "mit");
/// ```
pub fn choice_label<'a>(choices: &'static [Choice], code: &'a str) -> &'a str {
	choices
		.iter()
		.find(|c| c.code == code)
		.map_or(code, |c| c.label)
}

pub fn university_label(code: &str) -> &str {
	choice_label(UNIVERSITIES, code)
}

pub fn year_of_study_label(code: &str) -> &str {
	choice_label(YEARS_OF_STUDY, code)
}
