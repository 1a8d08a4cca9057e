//! Country-specific phone number rules
//!
//! The selected dialing code decides both how many digits a number must have
//! and how it is grouped while typing.
//!
//! | Code  | Region           | Valid digits          | Display          |
//! |-------|------------------|-----------------------|------------------|
//! | `+33` | France           | 9, first digit 1-9    | `6 12 34 56 78`  |
//! | `+1`  | US / Canada      | 10                    | `(555) 123-4567` |
//! | `+44` | United Kingdom   | 10 or 11              | `7911 123 456`   |
//! | other | anything else    | 8 to 15               | `12 34 56 78`    |

/// Phone numbering rules keyed by dialing code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneRegion {
	France,
	NorthAmerica,
	UnitedKingdom,
	Other,
}

impl PhoneRegion {
	/// Resolve the region for a dialing code.
	///
	/// Missing or unrecognized codes fall back to [`PhoneRegion::Other`].
	///
	/// # Examples
	///
	/// ```
	/// use inscription_forms::PhoneRegion;
	///
	/// assert_eq!(PhoneRegion::from_code(Some("+33")), PhoneRegion::France);
	/// assert_eq!(PhoneRegion::from_code(Some("+1")), PhoneRegion::NorthAmerica);
	/// assert_eq!(PhoneRegion::from_code(Some("+49")), PhoneRegion::Other);
	/// assert_eq!(PhoneRegion::from_code(None), PhoneRegion::Other);
	/// ```
	pub fn from_code(code: Option<&str>) -> Self {
		match code.map(str::trim) {
			Some("+33") => PhoneRegion::France,
			Some("+1") => PhoneRegion::NorthAmerica,
			Some("+44") => PhoneRegion::UnitedKingdom,
			_ => PhoneRegion::Other,
		}
	}

	/// Digit groups of the display pattern
	fn groups(&self) -> &'static [usize] {
		match self {
			PhoneRegion::France => &[1, 2, 2, 2, 2],
			PhoneRegion::NorthAmerica => &[3, 3, 4],
			PhoneRegion::UnitedKingdom => &[4, 3, 3],
			PhoneRegion::Other => &[2, 2, 2, 2],
		}
	}

	/// Number of digits needed before separators are inserted
	pub fn format_threshold(&self) -> usize {
		self.groups().iter().sum()
	}

	/// Check a number once spaces, hyphens and parentheses are removed
	///
	/// # Examples
	///
	/// ```
	/// use inscription_forms::PhoneRegion;
	///
	/// assert!(PhoneRegion::NorthAmerica.is_valid_number("(555) 123-4567"));
	/// assert!(!PhoneRegion::France.is_valid_number("012345678"));
	/// ```
	pub fn is_valid_number(&self, value: &str) -> bool {
		let cleaned = clean_number(value);
		if cleaned.is_empty() || !cleaned.bytes().all(|b| b.is_ascii_digit()) {
			return false;
		}

		let len = cleaned.len();
		match self {
			PhoneRegion::France => len == 9 && !cleaned.starts_with('0'),
			PhoneRegion::NorthAmerica => len == 10,
			PhoneRegion::UnitedKingdom => (10..=11).contains(&len),
			PhoneRegion::Other => (8..=15).contains(&len),
		}
	}

	/// Reformat raw keystroke input.
	///
	/// Non-digits are dropped. Below [`format_threshold`](Self::format_threshold)
	/// the bare digits are returned; from there on the pattern is applied and
	/// any extra digits are appended unchanged.
	///
	/// # Examples
	///
	/// ```
	/// use inscription_forms::PhoneRegion;
	///
	/// assert_eq!(PhoneRegion::NorthAmerica.format("5551234567"), "(555) 123-4567");
	/// assert_eq!(PhoneRegion::France.format("612345678"), "6 12 34 56 78");
	/// assert_eq!(PhoneRegion::UnitedKingdom.format("791112"), "791112");
	/// ```
	pub fn format(&self, raw: &str) -> String {
		let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
		let threshold = self.format_threshold();
		if digits.len() < threshold {
			return digits;
		}

		// ASCII digits only, so byte offsets are char boundaries
		let (head, tail) = digits.split_at(threshold);
		let mut parts = Vec::with_capacity(self.groups().len());
		let mut offset = 0;
		for size in self.groups() {
			parts.push(&head[offset..offset + size]);
			offset += size;
		}

		let grouped = match self {
			PhoneRegion::NorthAmerica => format!("({}) {}-{}", parts[0], parts[1], parts[2]),
			_ => parts.join(" "),
		};
		format!("{}{}", grouped, tail)
	}
}

/// Strip whitespace, hyphens and parentheses
pub fn clean_number(value: &str) -> String {
	value
		.chars()
		.filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
		.collect()
}
