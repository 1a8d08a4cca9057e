//! Presentation boundary
//!
//! A UI forwards user intents through [`RegistrationWizard::dispatch`] and
//! renders the serializable [`WizardView`] it gets back from
//! [`RegistrationWizard::view`]. Nothing in here knows how the view is drawn.

use crate::field::{FieldId, FieldValue, InputKind};
use crate::steps::{Choice, choices_for};
use crate::summary::Summary;
use crate::validators::ValidationVerdict;
use crate::wizard::{RegistrationWizard, SubmissionStatus, SubmitOutcome, Transition};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// User intent forwarded by the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum Intent {
	EditField { field: FieldId, value: FieldValue },
	BlurField { field: FieldId },
	Advance,
	Retreat,
	Submit,
}

/// What a dispatched intent produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
	Edited(FieldValue),
	Validated(ValidationVerdict),
	Navigated(Transition),
	Submitted(SubmitOutcome),
	/// The wizard is completed and no longer accepts input
	Ignored,
}

/// Which navigation buttons are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Navigation {
	pub show_previous: bool,
	pub show_next: bool,
	pub show_submit: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoiceView {
	pub code: &'static str,
	pub label: &'static str,
}

impl From<&Choice> for ChoiceView {
	fn from(choice: &Choice) -> Self {
		Self {
			code: choice.code,
			label: choice.label,
		}
	}
}

/// Rendering metadata for one input of the current step
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldView {
	pub id: FieldId,
	pub label: &'static str,
	pub required: bool,
	pub widget: &'static str,
	pub value: FieldValue,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub choices: Vec<ChoiceView>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub verdict: Option<ValidationVerdict>,
}

/// Snapshot of everything the presentation layer draws
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WizardView {
	pub current_step: usize,
	pub total_steps: usize,
	pub step_title: &'static str,
	pub progress: f32,
	pub navigation: Navigation,
	pub fields: Vec<FieldView>,
	/// Every verdict currently displayed, including other steps'
	pub verdicts: BTreeMap<FieldId, ValidationVerdict>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub summary: Option<Summary>,
	pub status: SubmissionStatus,
	pub completed: bool,
}

fn widget_name(input: InputKind) -> &'static str {
	match input {
		InputKind::Text => "text",
		InputKind::Choice => "select",
		InputKind::Checkbox => "checkbox",
	}
}

impl RegistrationWizard {
	/// Route an intent to the matching operation
	///
	/// # Examples
	///
	/// ```
	/// use inscription_forms::{
	///     DispatchOutcome, FieldId, GatewayResult, Intent, Record, RegistrationWizard,
	///     SubmissionGateway, Transition,
	/// };
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
	/// #[tokio::main(flavor = "current_thread")]
	/// async fn main() {
	///     let mut wizard = RegistrationWizard::new(Arc::new(Accept));
	///
	///     let outcome = wizard.dispatch(Intent::Advance).await;
	///     assert!(matches!(
	///         outcome,
	///         DispatchOutcome::Navigated(Transition::Blocked { .. })
	///     ));
	/// }
	/// ```
	pub async fn dispatch(&mut self, intent: Intent) -> DispatchOutcome {
		if self.is_completed() {
			return DispatchOutcome::Ignored;
		}

		match intent {
			Intent::EditField { field, value } => {
				DispatchOutcome::Edited(self.edit_field(field, value).clone())
			}
			Intent::BlurField { field } => DispatchOutcome::Validated(self.blur_field(field)),
			Intent::Advance => DispatchOutcome::Navigated(self.advance()),
			Intent::Retreat => DispatchOutcome::Navigated(self.retreat()),
			Intent::Submit => DispatchOutcome::Submitted(self.submit().await),
		}
	}

	pub fn navigation(&self) -> Navigation {
		Navigation {
			show_previous: !self.is_first_step(),
			show_next: !self.is_last_step(),
			show_submit: self.is_last_step(),
		}
	}

	/// Intent bound to the Enter key: next on steps 1-3, submit on the last
	///
	/// # Examples
	///
	/// ```
	/// use inscription_forms::{GatewayResult, Intent, Record, RegistrationWizard, SubmissionGateway};
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
	/// assert_eq!(wizard.primary_action(), Some(Intent::Advance));
	/// ```
	pub fn primary_action(&self) -> Option<Intent> {
		let nav = self.navigation();
		if self.is_completed() {
			None
		} else if nav.show_next {
			Some(Intent::Advance)
		} else if nav.show_submit {
			Some(Intent::Submit)
		} else {
			None
		}
	}

	pub fn view(&self) -> WizardView {
		let step = self.current_step_def();
		let fields = step
			.field_defs()
			.map(|def| FieldView {
				id: def.id,
				label: def.label,
				required: def.required,
				widget: widget_name(def.input),
				value: self.value(def.id).clone(),
				choices: choices_for(def.id)
					.map(|choices| choices.iter().map(ChoiceView::from).collect())
					.unwrap_or_default(),
				verdict: self.verdict(def.id).cloned(),
			})
			.collect();

		WizardView {
			current_step: self.current_step(),
			total_steps: self.total_steps(),
			step_title: step.title,
			progress: self.progress_percentage(),
			navigation: self.navigation(),
			fields,
			verdicts: self
				.verdicts()
				.iter()
				.map(|(id, verdict)| (*id, verdict.clone()))
				.collect(),
			summary: if step.is_last() {
				self.summary().cloned()
			} else {
				None
			},
			status: self.status().clone(),
			completed: self.is_completed(),
		}
	}
}
