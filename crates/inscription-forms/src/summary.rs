//! Read-only review of the collected record shown on the last step

use crate::field::FieldId;
use crate::record::{FULL_PHONE_KEY, Record};
use crate::steps::{university_label, year_of_study_label};
use crate::validators::parse_date;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryItem {
	pub label: &'static str,
	pub value: String,
}

/// Ordered label/value pairs projected from a [`Record`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Summary {
	items: Vec<SummaryItem>,
}

impl Summary {
	/// Build the summary; the record is not modified.
	///
	/// Missing values render as empty strings.
	///
	/// # Examples
	///
	/// ```
	/// use inscription_forms::{FieldId, FieldValue, Record, Summary};
	///
	/// let mut record = Record::new();
	/// record.insert_field(FieldId::University, FieldValue::from("sorbonne"));
	/// record.insert_field(FieldId::DateOfBirth, FieldValue::from("2001-04-09"));
	///
	/// let summary = Summary::from_record(&record);
	/// assert_eq!(summary.value("University"), Some("Université de la Sorbonne"));
	/// assert_eq!(summary.value("Date of birth"), Some("09/04/2001"));
	/// assert_eq!(summary.value("Email"), Some(""));
	/// ```
	pub fn from_record(record: &Record) -> Self {
		let text = |field: FieldId| record.text(field.as_str()).unwrap_or("").to_string();

		let phone = match record.text(FULL_PHONE_KEY) {
			Some(full) if !full.is_empty() => full.to_string(),
			_ => format!("{} {}", text(FieldId::CountryCode), text(FieldId::Phone))
				.trim()
				.to_string(),
		};

		let items = vec![
			item("Email", text(FieldId::Email)),
			item("Username", text(FieldId::Username)),
			item("First name", text(FieldId::FirstName)),
			item("Last name", text(FieldId::LastName)),
			item("Date of birth", format_date(&text(FieldId::DateOfBirth))),
			item("Phone", phone),
			item("Address", text(FieldId::Address)),
			item("Student ID", text(FieldId::StudentId)),
			item(
				"University",
				university_label(&text(FieldId::University)).to_string(),
			),
			item("Program", text(FieldId::Program)),
			item(
				"Year of study",
				year_of_study_label(&text(FieldId::YearOfStudy)).to_string(),
			),
		];

		Self { items }
	}

	pub fn items(&self) -> &[SummaryItem] {
		&self.items
	}

	pub fn value(&self, label: &str) -> Option<&str> {
		self.items
			.iter()
			.find(|i| i.label == label)
			.map(|i| i.value.as_str())
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}
}

fn item(label: &'static str, value: String) -> SummaryItem {
	SummaryItem { label, value }
}

/// Day-first display date; unparseable input is shown unchanged
fn format_date(value: &str) -> String {
	if value.is_empty() {
		return String::new();
	}
	parse_date(value)
		.map(|d| d.format("%d/%m/%Y").to_string())
		.unwrap_or_else(|| value.to_string())
}
