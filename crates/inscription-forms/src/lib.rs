//! Registration wizard core for Inscription
//!
//! This crate provides the pieces of the four-step student registration form:
//! - Per-field validation rules with country-aware phone checks
//! - Keystroke and blur formatting of phone numbers, student IDs and names
//! - A static registry of steps, fields and choice catalogs
//! - The wizard state machine that merges each passed step into a [`Record`]
//! - An async [`SubmissionGateway`] boundary and a presentation adapter

pub mod adapter;
pub mod field;
pub mod formatters;
pub mod gateway;
pub mod phone;
pub mod record;
pub mod settings;
pub mod steps;
pub mod summary;
pub mod validators;
pub mod wizard;

pub use adapter::{DispatchOutcome, FieldView, Intent, Navigation, WizardView};
pub use field::{FieldDef, FieldError, FieldId, FieldResult, FieldValue, InputKind, ValidatorKind};
pub use gateway::{GatewayError, GatewayResult, SubmissionGateway};
pub use phone::PhoneRegion;
pub use record::{FULL_PHONE_KEY, Record};
pub use settings::{GatewaySettings, SettingsError, WizardSettings};
pub use steps::{StepDef, TOTAL_STEPS};
pub use summary::{Summary, SummaryItem};
pub use validators::{FieldContext, ValidationVerdict};
pub use wizard::{
	RegistrationWizard, SUBMISSION_FAILED_NOTICE, SubmissionStart, SubmissionStatus,
	SubmitOutcome, Transition,
};
