//! Accumulated registration data handed to the submission gateway

use crate::field::{FieldId, FieldValue};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Combined `"<country code> <phone>"` value stored when the contact step is passed
pub const FULL_PHONE_KEY: &str = "fullPhone";

/// Canonical values keyed by field name.
///
/// Keys are only ever inserted or overwritten; nothing removes them while the
/// wizard is running.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
	values: HashMap<String, FieldValue>,
}

impl Record {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, key: impl Into<String>, value: FieldValue) {
		self.values.insert(key.into(), value);
	}

	pub fn insert_field(&mut self, field: FieldId, value: FieldValue) {
		self.insert(field.as_str(), value);
	}

	pub fn get(&self, key: &str) -> Option<&FieldValue> {
		self.values.get(key)
	}

	pub fn field(&self, field: FieldId) -> Option<&FieldValue> {
		self.get(field.as_str())
	}

	/// Text value of a key; checkbox values yield `None`
	///
	/// # Examples
	///
	/// ```
	/// use inscription_forms::{FieldId, FieldValue, Record};
	///
	/// let mut record = Record::new();
	/// record.insert_field(FieldId::Email, FieldValue::from("a@b.co"));
	/// record.insert_field(FieldId::TermsAccepted, FieldValue::Checked(true));
	///
	/// assert_eq!(record.text("email"), Some("a@b.co"));
	/// assert_eq!(record.text("termsAccepted"), None);
	/// assert_eq!(record.text("phone"), None);
	/// ```
	pub fn text(&self, key: &str) -> Option<&str> {
		self.get(key).and_then(FieldValue::as_text)
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.values.contains_key(key)
	}

	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.values.keys().map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// JSON payload sent to the gateway
	///
	/// # Examples
	///
	/// ```
	/// use inscription_forms::{FieldId, FieldValue, Record};
	/// use serde_json::json;
	///
	/// let mut record = Record::new();
	/// record.insert_field(FieldId::Username, FieldValue::from("jdupont"));
	/// record.insert_field(FieldId::TermsAccepted, FieldValue::Checked(true));
	///
	/// assert_eq!(
	///     record.to_json().unwrap(),
	///     json!({ "username": "jdupont", "termsAccepted": true })
	/// );
	/// ```
	pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
		serde_json::to_value(self)
	}
}
