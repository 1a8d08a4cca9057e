//! Input normalization applied while the user types or leaves a field

use crate::field::FieldId;
use crate::validators::FieldContext;

/// Format a keystroke.
///
/// Phone numbers are regrouped for the selected country and student
/// identifiers are uppercased; every other field passes through.
///
/// # Examples
///
/// ```
/// use inscription_forms::{formatters, FieldContext, FieldId};
///
/// let ctx = FieldContext::for_today().with_country_code("+1");
/// assert_eq!(formatters::format_input(FieldId::Phone, "5551234567", &ctx), "(555) 123-4567");
/// assert_eq!(formatters::format_input(FieldId::StudentId, "ab12c", &ctx), "AB12C");
/// assert_eq!(formatters::format_input(FieldId::FirstName, "jean", &ctx), "jean");
/// ```
pub fn format_input(field: FieldId, raw: &str, ctx: &FieldContext<'_>) -> String {
	match field {
		FieldId::Phone => ctx.phone_region().format(raw),
		FieldId::StudentId => raw.to_uppercase(),
		_ => raw.to_string(),
	}
}

/// Format a value when focus leaves the field.
///
/// Only person names change here.
pub fn format_on_blur(field: FieldId, raw: &str) -> String {
	match field {
		FieldId::FirstName | FieldId::LastName => capitalize_words(raw),
		_ => raw.to_string(),
	}
}

/// Uppercase the first letter of each whitespace-delimited word and
/// lowercase the rest. Whitespace is preserved as typed.
///
/// # Examples
///
/// ```
/// use inscription_forms::formatters::capitalize_words;
///
/// assert_eq!(capitalize_words("jEAN-pierre  DUPONT"), "Jean-pierre  Dupont");
/// assert_eq!(capitalize_words("éloïse"), "Éloïse");
/// ```
pub fn capitalize_words(value: &str) -> String {
	let mut out = String::with_capacity(value.len());
	let mut word_start = true;
	for c in value.chars() {
		if c.is_whitespace() {
			word_start = true;
			out.push(c);
		} else if word_start {
			out.extend(c.to_uppercase());
			word_start = false;
		} else {
			out.extend(c.to_lowercase());
		}
	}
	out
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::NaiveDate;
	use proptest::prelude::*;
	use rstest::rstest;

	fn ctx(code: &str) -> FieldContext<'_> {
		FieldContext::new(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()).with_country_code(code)
	}

	#[rstest]
	#[case("+33", "612345678", "6 12 34 56 78")]
	#[case("+33", "6123", "6123")]
	#[case("+1", "(555) 123-45", "55512345")]
	#[case("+44", "7911123456", "7911 123 456")]
	#[case("+49", "15123456", "15 12 34 56")]
	#[case("", "15123456", "15 12 34 56")]
	fn test_phone_formatting_follows_country(
		#[case] code: &str,
		#[case] raw: &str,
		#[case] expected: &str,
	) {
		// Arrange
		let ctx = ctx(code);

		// Act
		let formatted = format_input(FieldId::Phone, raw, &ctx);

		// Assert
		assert_eq!(formatted, expected);
	}

	#[rstest]
	fn test_names_are_not_touched_on_keystroke() {
		assert_eq!(
			format_input(FieldId::LastName, "dUPONT", &ctx("+33")),
			"dUPONT"
		);
	}

	#[rstest]
	#[case(FieldId::FirstName, "marie claire", "Marie Claire")]
	#[case(FieldId::LastName, "DE LA FONTAINE", "De La Fontaine")]
	#[case(FieldId::LastName, "o'neil", "O'neil")]
	#[case(FieldId::StudentId, "abc123", "abc123")]
	fn test_blur_formatting(#[case] field: FieldId, #[case] raw: &str, #[case] expected: &str) {
		assert_eq!(format_on_blur(field, raw), expected);
	}

	#[rstest]
	fn test_capitalize_keeps_surrounding_whitespace() {
		assert_eq!(capitalize_words("  anne\tmarie "), "  Anne\tMarie ");
	}

	proptest! {
		#[test]
		fn prop_capitalize_is_idempotent(value in "[a-zA-Zéèà' -]{0,30}") {
			let once = capitalize_words(&value);
			prop_assert_eq!(capitalize_words(&once), once.clone());
		}

		#[test]
		fn prop_student_id_is_uppercase(value in "[a-z0-9]{0,15}") {
			let formatted = format_input(FieldId::StudentId, &value, &ctx("+33"));
			prop_assert_eq!(formatted, value.to_uppercase());
		}
	}
}
