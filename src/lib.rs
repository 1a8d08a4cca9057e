//! # Inscription
//!
//! A multi-step student registration wizard: field validation, input
//! formatting, a four-step state machine and an async submission boundary.
//!
//! ## Feature Flags
//!
//! - `backends` (default) - [`MemoryGateway`](backends::MemoryGateway) and
//!   [`SimulatedGateway`](backends::SimulatedGateway)
//!
//! ## Quick Example
//!
//! ```
//! use inscription::prelude::*;
//! use std::sync::Arc;
//!
//! let gateway = Arc::new(MemoryGateway::new());
//! let mut wizard = RegistrationWizard::new(gateway);
//!
//! wizard.edit_field(FieldId::Username, "ab");
//! let verdict = wizard.blur_field(FieldId::Username);
//! assert!(!verdict.valid);
//!
//! // An empty first step cannot be left
//! assert!(matches!(wizard.advance(), Transition::Blocked { .. }));
//! assert_eq!(wizard.current_step(), 1);
//! ```

pub use inscription_forms as forms;

#[cfg(feature = "backends")]
pub use inscription_backends as backends;

pub use inscription_forms::{
	DispatchOutcome, FieldDef, FieldError, FieldId, FieldResult, FieldValue, GatewayError,
	GatewayResult, Intent, Record, RegistrationWizard, SubmissionGateway, SubmissionStatus,
	SubmitOutcome, Summary, Transition, ValidationVerdict, WizardSettings, WizardView,
};

/// Re-exports for the common wizard flow
pub mod prelude {
	pub use inscription_forms::{
		DispatchOutcome, FieldId, FieldValue, GatewayError, GatewayResult, Intent, Record,
		RegistrationWizard, SubmissionGateway, SubmissionStatus, SubmitOutcome, Transition,
		ValidationVerdict, WizardSettings,
	};

	#[cfg(feature = "backends")]
	pub use inscription_backends::{MemoryGateway, SimulatedGateway};
}
