use crate::field::{FieldId, FieldValue};
use crate::formatters;
use crate::gateway::{GatewayResult, SubmissionGateway};
use crate::record::{FULL_PHONE_KEY, Record};
use crate::settings::WizardSettings;
use crate::steps::{self, STEPS, StepDef, TOTAL_STEPS, field_def};
use crate::summary::Summary;
use crate::validators::{self, FieldContext, ValidationVerdict};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Notice shown on the review step after a failed submission
pub const SUBMISSION_FAILED_NOTICE: &str = "An error occurred. Please try again.";

/// Where the last submission attempt stands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmissionStatus {
	Idle,
	Submitting,
	Succeeded,
	Failed { notice: String },
}

/// Result of a navigation intent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
	Moved { from: usize, to: usize },
	/// Nothing to move to; for `advance` the step was still validated and merged
	Stayed { step: usize },
	/// Validation failed on the listed fields
	Blocked { invalid: Vec<FieldId> },
	/// Not accepted in the current status
	Ignored,
}

/// First half of a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionStart {
	/// The record to hand to the gateway; the wizard is now `Submitting`
	Ready(Record),
	Blocked { invalid: Vec<FieldId> },
	Ignored,
}

/// Final result of a submit intent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
	Succeeded,
	Failed { notice: String },
	Blocked { invalid: Vec<FieldId> },
	Ignored,
}

/// RegistrationWizard drives the four registration steps
///
/// It keeps the live field values, the verdict last shown for each field and
/// the [`Record`] merged from every step passed so far.
pub struct RegistrationWizard {
	current_step: usize,
	values: HashMap<FieldId, FieldValue>,
	verdicts: HashMap<FieldId, ValidationVerdict>,
	record: Record,
	summary: Option<Summary>,
	status: SubmissionStatus,
	gateway: Arc<dyn SubmissionGateway>,
	today: Option<NaiveDate>,
}

impl RegistrationWizard {
	/// Create a wizard on step 1 with default settings
	///
	/// # Examples
	///
	/// ```
	/// use inscription_forms::{GatewayResult, Record, RegistrationWizard, SubmissionGateway};
	/// use async_trait::async_trait;
	/// use std::sync::Arc;
	///
	/// struct Accept;
	///
	/// #[async_trait]
	/// impl SubmissionGateway for Accept {
	///     async fn submit(&self, _record: &Record) -> GatewayResult<()> {
	///         Ok(())
	///     }
	/// }
	///
	/// let wizard = RegistrationWizard::new(Arc::new(Accept));
	/// assert_eq!(wizard.current_step(), 1);
	/// assert!(wizard.record().is_empty());
	/// ```
	pub fn new(gateway: Arc<dyn SubmissionGateway>) -> Self {
		Self::with_settings(gateway, &WizardSettings::default())
	}

	pub fn with_settings(gateway: Arc<dyn SubmissionGateway>, settings: &WizardSettings) -> Self {
		let values = STEPS
			.iter()
			.flat_map(StepDef::field_defs)
			.map(|def| {
				let initial = match def.id {
					FieldId::CountryCode => FieldValue::from(settings.default_country_code.as_str()),
					_ if def.is_checkbox() => FieldValue::Checked(false),
					_ => FieldValue::default(),
				};
				(def.id, initial)
			})
			.collect();

		Self {
			current_step: 1,
			values,
			verdicts: HashMap::new(),
			record: Record::new(),
			summary: None,
			status: SubmissionStatus::Idle,
			gateway,
			today: None,
		}
	}

	/// Pin the reference date used for date-of-birth checks
	pub fn with_today(mut self, today: NaiveDate) -> Self {
		self.today = Some(today);
		self
	}

	pub fn current_step(&self) -> usize {
		self.current_step
	}

	pub fn current_step_def(&self) -> &'static StepDef {
		&STEPS[self.current_step - 1]
	}

	pub fn total_steps(&self) -> usize {
		TOTAL_STEPS
	}

	pub fn is_first_step(&self) -> bool {
		self.current_step == 1
	}

	pub fn is_last_step(&self) -> bool {
		self.current_step == TOTAL_STEPS
	}

	pub fn progress_percentage(&self) -> f32 {
		(self.current_step as f32 / TOTAL_STEPS as f32) * 100.0
	}

	pub fn value(&self, field: FieldId) -> &FieldValue {
		// Every registered field is seeded in `with_settings`
		&self.values[&field]
	}

	pub fn verdict(&self, field: FieldId) -> Option<&ValidationVerdict> {
		self.verdicts.get(&field)
	}

	pub fn verdicts(&self) -> &HashMap<FieldId, ValidationVerdict> {
		&self.verdicts
	}

	pub fn record(&self) -> &Record {
		&self.record
	}

	pub fn summary(&self) -> Option<&Summary> {
		self.summary.as_ref()
	}

	pub fn status(&self) -> &SubmissionStatus {
		&self.status
	}

	/// True once the gateway accepted the record
	pub fn is_completed(&self) -> bool {
		self.status == SubmissionStatus::Succeeded
	}

	fn is_locked(&self) -> bool {
		matches!(
			self.status,
			SubmissionStatus::Submitting | SubmissionStatus::Succeeded
		)
	}

	fn today(&self) -> NaiveDate {
		self.today.unwrap_or_else(|| Local::now().date_naive())
	}

	/// Sibling values read fresh from the live inputs
	fn context(&self) -> FieldContext<'_> {
		let mut ctx = FieldContext::new(self.today());
		if let Some(code) = self.value(FieldId::CountryCode).as_text() {
			ctx = ctx.with_country_code(code);
		}
		if let Some(password) = self.value(FieldId::Password).as_text() {
			ctx = ctx.with_password(password);
		}
		ctx
	}

	/// Store a keystroke and drop the verdict previously shown for the field.
	///
	/// Text is passed through the input formatter first; the stored value is
	/// returned so the presentation layer can echo it back. Checkboxes given
	/// as text are checked by `"on"` or `"true"`. Booleans given to text
	/// fields are kept as-is and never pass validation.
	pub fn edit_field(&mut self, field: FieldId, raw: impl Into<FieldValue>) -> &FieldValue {
		let value = match raw.into() {
			FieldValue::Text(text) if field_def(field).is_checkbox() => {
				FieldValue::Checked(matches!(text.trim(), "on" | "true"))
			}
			FieldValue::Text(text) => {
				FieldValue::Text(formatters::format_input(field, &text, &self.context()))
			}
			checked => checked,
		};
		tracing::debug!(field = %field, "Field edited");
		self.verdicts.remove(&field);
		self.values.insert(field, value);
		self.value(field)
	}

	/// Apply blur formatting, validate the field and remember the verdict
	pub fn blur_field(&mut self, field: FieldId) -> ValidationVerdict {
		if let FieldValue::Text(text) = self.value(field) {
			let formatted = formatters::format_on_blur(field, text);
			self.values.insert(field, FieldValue::Text(formatted));
		}

		let verdict = validators::validate(field_def(field), self.value(field), &self.context());
		tracing::debug!(field = %field, valid = verdict.valid, "Field validated");
		self.verdicts.insert(field, verdict.clone());
		verdict
	}

	/// Validate every field of a step, plus the consent rule of the review
	/// step, recording a verdict for each.
	pub fn validate_step(&mut self, step: usize) -> bool {
		let Some(def) = steps::step(step) else {
			return false;
		};

		let mut results: Vec<(FieldId, ValidationVerdict)> = {
			let ctx = self.context();
			def.field_defs()
				.map(|field| (field.id, validators::validate(field, self.value(field.id), &ctx)))
				.collect()
		};
		if def.requires_consent {
			let consent = validators::validate_consent(self.value(FieldId::TermsAccepted));
			results.retain(|(id, _)| *id != FieldId::TermsAccepted);
			results.push((FieldId::TermsAccepted, consent));
		}

		let all_valid = results.iter().all(|(_, verdict)| verdict.valid);
		self.verdicts.extend(results);
		all_valid
	}

	fn invalid_fields(&self, def: &StepDef) -> Vec<FieldId> {
		def.fields
			.iter()
			.copied()
			.filter(|id| self.verdicts.get(id).is_some_and(|v| !v.valid))
			.collect()
	}

	/// Merge the canonical values of a step into the record
	fn merge_step(&mut self, def: &StepDef) {
		for &id in def.fields {
			let value = self.value(id).canonical();
			self.record.insert_field(id, value);
		}

		if def.owns(FieldId::Phone) {
			let code = self.value(FieldId::CountryCode).to_string();
			let phone = self.value(FieldId::Phone).to_string();
			self.record.insert(
				FULL_PHONE_KEY,
				FieldValue::Text(format!("{} {}", code.trim(), phone.trim())),
			);
		}
	}

	/// Validate the current step and move forward if it passes.
	///
	/// On the last step a passing validation merges the data but stays put.
	pub fn advance(&mut self) -> Transition {
		if self.is_locked() {
			return Transition::Ignored;
		}

		let def = self.current_step_def();
		if !self.validate_step(def.number) {
			let invalid = self.invalid_fields(def);
			tracing::debug!(step = def.number, ?invalid, "Step blocked");
			return Transition::Blocked { invalid };
		}

		self.merge_step(def);

		if self.is_last_step() {
			return Transition::Stayed {
				step: self.current_step,
			};
		}

		let from = self.current_step;
		self.current_step += 1;
		tracing::info!(from, to = self.current_step, "Advanced to next step");

		if self.is_last_step() {
			self.summary = Some(Summary::from_record(&self.record));
		}

		Transition::Moved {
			from,
			to: self.current_step,
		}
	}

	/// Go back one step without validating or touching the record.
	///
	/// Leaving the review step drops a failure notice from an earlier attempt.
	pub fn retreat(&mut self) -> Transition {
		if self.is_locked() {
			return Transition::Ignored;
		}
		if self.is_first_step() {
			return Transition::Stayed { step: 1 };
		}

		let from = self.current_step;
		self.current_step -= 1;
		if matches!(self.status, SubmissionStatus::Failed { .. }) {
			self.status = SubmissionStatus::Idle;
		}
		tracing::info!(from, to = self.current_step, "Returned to previous step");
		Transition::Moved {
			from,
			to: self.current_step,
		}
	}

	/// Validate and merge the review step, then hand out the record.
	///
	/// Ignored away from the last step, while a submission is in flight and
	/// after success, so a repeated submit never reaches the gateway twice.
	pub fn begin_submission(&mut self) -> SubmissionStart {
		if !self.is_last_step() || self.is_locked() {
			return SubmissionStart::Ignored;
		}

		let def = self.current_step_def();
		if !self.validate_step(def.number) {
			return SubmissionStart::Blocked {
				invalid: self.invalid_fields(def),
			};
		}

		self.merge_step(def);
		self.status = SubmissionStatus::Submitting;
		tracing::info!(fields = self.record.len(), "Submitting registration");
		SubmissionStart::Ready(self.record.clone())
	}

	/// Record the gateway's answer for the pending submission
	pub fn finish_submission(&mut self, result: GatewayResult<()>) -> SubmitOutcome {
		if self.status != SubmissionStatus::Submitting {
			return SubmitOutcome::Ignored;
		}

		match result {
			Ok(()) => {
				tracing::info!("Registration submitted");
				self.status = SubmissionStatus::Succeeded;
				SubmitOutcome::Succeeded
			}
			Err(e) => {
				tracing::warn!(error = %e, "Registration submission failed");
				let notice = SUBMISSION_FAILED_NOTICE.to_string();
				self.status = SubmissionStatus::Failed {
					notice: notice.clone(),
				};
				SubmitOutcome::Failed { notice }
			}
		}
	}

	/// Submit the record through the gateway and wait for the answer
	pub async fn submit(&mut self) -> SubmitOutcome {
		match self.begin_submission() {
			SubmissionStart::Ready(record) => {
				let gateway = Arc::clone(&self.gateway);
				let result = gateway.submit(&record).await;
				self.finish_submission(result)
			}
			SubmissionStart::Blocked { invalid } => SubmitOutcome::Blocked { invalid },
			SubmissionStart::Ignored => SubmitOutcome::Ignored,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::gateway::GatewayError;
	use crate::validators::{CONSENT_REQUIRED, INVALID_VALUE, USERNAME_LENGTH};
	use async_trait::async_trait;
	use rstest::{fixture, rstest};
	use std::sync::Mutex;

	#[derive(Default)]
	struct RecordingGateway {
		calls: Mutex<Vec<Record>>,
		fail: bool,
	}

	#[async_trait]
	impl SubmissionGateway for RecordingGateway {
		async fn submit(&self, record: &Record) -> GatewayResult<()> {
			self.calls.lock().unwrap().push(record.clone());
			if self.fail {
				Err(GatewayError::Unavailable("offline".to_string()))
			} else {
				Ok(())
			}
		}
	}

	fn today() -> NaiveDate {
		NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
	}

	fn wizard_with(gateway: Arc<RecordingGateway>) -> RegistrationWizard {
		RegistrationWizard::new(gateway).with_today(today())
	}

	#[fixture]
	fn wizard() -> RegistrationWizard {
		wizard_with(Arc::new(RecordingGateway::default()))
	}

	fn fill(wizard: &mut RegistrationWizard, pairs: &[(FieldId, &str)]) {
		for (id, value) in pairs {
			wizard.edit_field(*id, *value);
		}
	}

	fn fill_account(wizard: &mut RegistrationWizard) {
		fill(
			wizard,
			&[
				(FieldId::Email, "a@b.co"),
				(FieldId::Username, "abc"),
				(FieldId::Password, "Secret12"),
				(FieldId::ConfirmPassword, "Secret12"),
			],
		);
	}

	fn fill_contact(wizard: &mut RegistrationWizard) {
		fill(
			wizard,
			&[
				(FieldId::FirstName, "Marie"),
				(FieldId::LastName, "Curie"),
				(FieldId::CountryCode, "+1"),
				(FieldId::Phone, "5551234567"),
				(FieldId::DateOfBirth, "2000-01-01"),
				(FieldId::Address, "12 rue des Écoles, Paris"),
			],
		);
	}

	fn fill_academic(wizard: &mut RegistrationWizard) {
		fill(
			wizard,
			&[
				(FieldId::StudentId, "ab12345"),
				(FieldId::University, "sorbonne"),
				(FieldId::Program, "Physique"),
				(FieldId::YearOfStudy, "master1"),
			],
		);
	}

	fn reach_review(wizard: &mut RegistrationWizard) {
		fill_account(wizard);
		wizard.advance();
		fill_contact(wizard);
		wizard.advance();
		fill_academic(wizard);
		wizard.advance();
		assert_eq!(wizard.current_step(), 4);
	}

	#[rstest]
	fn test_initial_state(wizard: RegistrationWizard) {
		assert_eq!(wizard.current_step(), 1);
		assert!(wizard.is_first_step());
		assert_eq!(wizard.progress_percentage(), 25.0);
		assert_eq!(wizard.value(FieldId::CountryCode), &FieldValue::from("+33"));
		assert_eq!(wizard.value(FieldId::TermsAccepted), &FieldValue::Checked(false));
		assert_eq!(wizard.status(), &SubmissionStatus::Idle);
		assert!(wizard.summary().is_none());
	}

	#[rstest]
	fn test_settings_choose_initial_country_code() {
		let settings = WizardSettings {
			default_country_code: "+44".to_string(),
			..WizardSettings::default()
		};

		let wizard =
			RegistrationWizard::with_settings(Arc::new(RecordingGateway::default()), &settings);

		assert_eq!(wizard.value(FieldId::CountryCode), &FieldValue::from("+44"));
	}

	#[rstest]
	fn test_short_username_blocks_advance(mut wizard: RegistrationWizard) {
		// Arrange
		fill_account(&mut wizard);
		wizard.edit_field(FieldId::Username, "ab");

		// Act
		let transition = wizard.advance();

		// Assert
		assert_eq!(
			transition,
			Transition::Blocked {
				invalid: vec![FieldId::Username]
			}
		);
		assert_eq!(wizard.current_step(), 1);
		assert_eq!(
			wizard.verdict(FieldId::Username),
			Some(&ValidationVerdict::invalid(USERNAME_LENGTH))
		);
		assert!(wizard.record().is_empty());
	}

	#[rstest]
	fn test_valid_account_advances(mut wizard: RegistrationWizard) {
		fill_account(&mut wizard);

		let transition = wizard.advance();

		assert_eq!(transition, Transition::Moved { from: 1, to: 2 });
		assert_eq!(wizard.record().text("username"), Some("abc"));
		assert!(wizard.verdicts().values().all(|v| v.valid));
	}

	#[rstest]
	fn test_edit_clears_previous_verdict(mut wizard: RegistrationWizard) {
		wizard.edit_field(FieldId::Email, "nope");
		assert!(!wizard.blur_field(FieldId::Email).valid);

		wizard.edit_field(FieldId::Email, "nope@x.fr");

		assert!(wizard.verdict(FieldId::Email).is_none());
	}

	#[rstest]
	fn test_edit_formats_phone_with_current_country(mut wizard: RegistrationWizard) {
		wizard.edit_field(FieldId::CountryCode, "+1");

		let value = wizard.edit_field(FieldId::Phone, "5551234567").clone();

		assert_eq!(value, FieldValue::from("(555) 123-4567"));
	}

	#[rstest]
	fn test_blur_capitalizes_names(mut wizard: RegistrationWizard) {
		wizard.edit_field(FieldId::FirstName, "jean pierre");
		assert_eq!(wizard.value(FieldId::FirstName), &FieldValue::from("jean pierre"));

		let verdict = wizard.blur_field(FieldId::FirstName);

		assert!(verdict.valid);
		assert_eq!(wizard.value(FieldId::FirstName), &FieldValue::from("Jean Pierre"));
	}

	#[rstest]
	fn test_confirmation_follows_password_edits(mut wizard: RegistrationWizard) {
		fill_account(&mut wizard);
		assert!(wizard.blur_field(FieldId::ConfirmPassword).valid);

		wizard.edit_field(FieldId::Password, "Secret13");

		assert!(!wizard.blur_field(FieldId::ConfirmPassword).valid);
	}

	#[rstest]
	fn test_contact_step_derives_full_phone(mut wizard: RegistrationWizard) {
		fill_account(&mut wizard);
		wizard.advance();
		fill_contact(&mut wizard);

		let transition = wizard.advance();

		assert_eq!(transition, Transition::Moved { from: 2, to: 3 });
		assert_eq!(wizard.record().text("fullPhone"), Some("+1 (555) 123-4567"));
		assert_eq!(wizard.record().text("countryCode"), Some("+1"));
	}

	#[rstest]
	fn test_retreat_keeps_record(mut wizard: RegistrationWizard) {
		// Arrange
		fill_account(&mut wizard);
		wizard.advance();
		let before = wizard.record().clone();

		// Act
		let transition = wizard.retreat();

		// Assert
		assert_eq!(transition, Transition::Moved { from: 2, to: 1 });
		assert_eq!(wizard.record(), &before);
	}

	#[rstest]
	fn test_retreat_at_first_step_stays(mut wizard: RegistrationWizard) {
		assert_eq!(wizard.retreat(), Transition::Stayed { step: 1 });
		assert_eq!(wizard.current_step(), 1);
	}

	#[rstest]
	fn test_revisit_overwrites_merged_values(mut wizard: RegistrationWizard) {
		fill_account(&mut wizard);
		wizard.advance();
		wizard.retreat();

		wizard.edit_field(FieldId::Username, "marie_c");
		wizard.advance();

		assert_eq!(wizard.record().text("username"), Some("marie_c"));
	}

	#[rstest]
	fn test_summary_built_on_reaching_review(mut wizard: RegistrationWizard) {
		reach_review(&mut wizard);

		let summary = wizard.summary().unwrap();

		assert_eq!(summary.value("University"), Some("Université de la Sorbonne"));
		assert_eq!(summary.value("Year of study"), Some("Master 1"));
		assert_eq!(summary.value("Student ID"), Some("AB12345"));
		assert_eq!(summary.value("Date of birth"), Some("01/01/2000"));
	}

	#[rstest]
	fn test_advance_on_review_stays_and_merges(mut wizard: RegistrationWizard) {
		reach_review(&mut wizard);
		wizard.edit_field(FieldId::TermsAccepted, true);

		let transition = wizard.advance();

		assert_eq!(transition, Transition::Stayed { step: 4 });
		assert_eq!(
			wizard.record().field(FieldId::TermsAccepted),
			Some(&FieldValue::Checked(true))
		);
	}

	#[rstest]
	#[tokio::test]
	async fn test_submit_requires_consent() {
		// Arrange
		let gateway = Arc::new(RecordingGateway::default());
		let mut wizard = wizard_with(Arc::clone(&gateway));
		reach_review(&mut wizard);

		// Act
		let outcome = wizard.submit().await;

		// Assert
		assert_eq!(
			outcome,
			SubmitOutcome::Blocked {
				invalid: vec![FieldId::TermsAccepted]
			}
		);
		assert_eq!(
			wizard.verdict(FieldId::TermsAccepted),
			Some(&ValidationVerdict::invalid(CONSENT_REQUIRED))
		);
		assert!(gateway.calls.lock().unwrap().is_empty());
		assert_eq!(wizard.status(), &SubmissionStatus::Idle);
	}

	#[rstest]
	#[tokio::test]
	async fn test_submit_before_review_is_ignored() {
		let gateway = Arc::new(RecordingGateway::default());
		let mut wizard = wizard_with(Arc::clone(&gateway));

		assert_eq!(wizard.submit().await, SubmitOutcome::Ignored);
		assert!(gateway.calls.lock().unwrap().is_empty());
	}

	#[rstest]
	#[tokio::test]
	async fn test_submit_success_completes_wizard() {
		let gateway = Arc::new(RecordingGateway::default());
		let mut wizard = wizard_with(Arc::clone(&gateway));
		reach_review(&mut wizard);
		wizard.edit_field(FieldId::TermsAccepted, true);

		let outcome = wizard.submit().await;

		assert_eq!(outcome, SubmitOutcome::Succeeded);
		assert!(wizard.is_completed());
		let calls = gateway.calls.lock().unwrap();
		assert_eq!(calls.len(), 1);
		assert_eq!(calls[0].field(FieldId::TermsAccepted), Some(&FieldValue::Checked(true)));
		assert_eq!(calls[0].text("email"), Some("a@b.co"));
		drop(calls);

		assert_eq!(wizard.submit().await, SubmitOutcome::Ignored);
		assert_eq!(wizard.retreat(), Transition::Ignored);
	}

	#[rstest]
	#[tokio::test]
	async fn test_failed_submission_allows_retry() {
		let gateway = Arc::new(RecordingGateway {
			fail: true,
			..RecordingGateway::default()
		});
		let mut wizard = wizard_with(Arc::clone(&gateway));
		reach_review(&mut wizard);
		wizard.edit_field(FieldId::TermsAccepted, true);

		let first = wizard.submit().await;
		let second = wizard.submit().await;

		let failed = SubmitOutcome::Failed {
			notice: SUBMISSION_FAILED_NOTICE.to_string(),
		};
		assert_eq!(first, failed);
		assert_eq!(second, failed);
		assert_eq!(wizard.current_step(), 4);
		assert_eq!(gateway.calls.lock().unwrap().len(), 2);
	}

	#[rstest]
	fn test_repeated_begin_while_pending_is_ignored(mut wizard: RegistrationWizard) {
		reach_review(&mut wizard);
		wizard.edit_field(FieldId::TermsAccepted, true);

		let first = wizard.begin_submission();
		let second = wizard.begin_submission();

		assert!(matches!(first, SubmissionStart::Ready(_)));
		assert_eq!(second, SubmissionStart::Ignored);
		assert_eq!(wizard.status(), &SubmissionStatus::Submitting);
		assert_eq!(wizard.advance(), Transition::Ignored);

		assert_eq!(wizard.finish_submission(Ok(())), SubmitOutcome::Succeeded);
		assert_eq!(wizard.finish_submission(Ok(())), SubmitOutcome::Ignored);
	}

	#[rstest]
	#[case(FieldId::Email)]
	#[case(FieldId::Username)]
	#[case(FieldId::Password)]
	#[case(FieldId::ConfirmPassword)]
	fn test_boolean_in_text_field_blocks_advance(
		mut wizard: RegistrationWizard,
		#[case] field: FieldId,
	) {
		// Arrange
		fill_account(&mut wizard);

		// Act
		wizard.edit_field(field, true);
		let transition = wizard.advance();

		// Assert
		assert!(
			matches!(transition, Transition::Blocked { ref invalid } if invalid.contains(&field))
		);
		assert_eq!(
			wizard.verdict(field),
			Some(&ValidationVerdict::invalid(INVALID_VALUE))
		);
		assert_eq!(wizard.current_step(), 1);
		assert!(wizard.record().is_empty());
	}

	#[rstest]
	#[tokio::test]
	async fn test_boolean_json_intents_never_merge() {
		let mut wizard = wizard_with(Arc::new(RecordingGateway::default()));
		for field in ["email", "username", "password", "confirmPassword"] {
			let intent: crate::adapter::Intent = serde_json::from_str(&format!(
				r#"{{"intent":"edit_field","field":"{field}","value":true}}"#
			))
			.unwrap();
			wizard.dispatch(intent).await;
		}

		let transition = wizard.advance();

		assert!(matches!(transition, Transition::Blocked { .. }));
		assert_eq!(wizard.current_step(), 1);
		assert_eq!(wizard.record().field(FieldId::Email), None);
	}

	#[rstest]
	#[tokio::test]
	async fn test_retreat_clears_failure_notice() {
		// Arrange
		let gateway = Arc::new(RecordingGateway {
			fail: true,
			..RecordingGateway::default()
		});
		let mut wizard = wizard_with(gateway);
		reach_review(&mut wizard);
		wizard.edit_field(FieldId::TermsAccepted, true);
		wizard.submit().await;
		assert!(matches!(wizard.status(), SubmissionStatus::Failed { .. }));

		// Act
		let transition = wizard.retreat();

		// Assert
		assert_eq!(transition, Transition::Moved { from: 4, to: 3 });
		assert_eq!(wizard.status(), &SubmissionStatus::Idle);
	}

	#[rstest]
	fn test_validate_step_out_of_range(mut wizard: RegistrationWizard) {
		assert!(!wizard.validate_step(0));
		assert!(!wizard.validate_step(5));
	}
}
