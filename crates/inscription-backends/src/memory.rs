//! In-memory submission gateway for testing
//!
//! This gateway keeps every submitted record in memory instead of sending it
//! anywhere. It can be told to fail a number of upcoming attempts to exercise
//! the wizard's retry path.
//!
//! # Examples
//!
//! ```
//! use inscription_backends::MemoryGateway;
//! use inscription_forms::{FieldId, FieldValue, Record, SubmissionGateway};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let gateway = MemoryGateway::new();
//!
//!     let mut record = Record::new();
//!     record.insert_field(FieldId::Email, FieldValue::from("a@b.co"));
//!
//!     gateway.submit(&record).await.unwrap();
//!
//!     let submitted = gateway.submissions();
//!     assert_eq!(submitted.len(), 1);
//!     assert_eq!(submitted[0].text("email"), Some("a@b.co"));
//! }
//! ```

use async_trait::async_trait;
use inscription_forms::{GatewayError, GatewayResult, Record, SubmissionGateway};
use parking_lot::RwLock;
use std::sync::Arc;

#[derive(Default)]
struct State {
	submissions: Vec<Record>,
	attempts: usize,
	failures_left: usize,
}

/// In-memory submission gateway
///
/// Clones share the same storage.
#[derive(Clone, Default)]
pub struct MemoryGateway {
	state: Arc<RwLock<State>>,
}

impl MemoryGateway {
	/// Create an empty gateway that accepts every submission
	///
	/// # Examples
	///
	/// ```
	/// use inscription_backends::MemoryGateway;
	///
	/// let gateway = MemoryGateway::new();
	/// assert_eq!(gateway.count(), 0);
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	/// Reject the next `count` submissions
	///
	/// # Examples
	///
	/// ```
	/// use inscription_backends::MemoryGateway;
	/// use inscription_forms::{Record, SubmissionGateway};
	///
	/// #[tokio::main(flavor = "current_thread")]
	/// async fn main() {
	///     let gateway = MemoryGateway::new();
	///     gateway.fail_next(1);
	///
	///     assert!(gateway.submit(&Record::new()).await.is_err());
	///     assert!(gateway.submit(&Record::new()).await.is_ok());
	///     assert_eq!(gateway.attempts(), 2);
	///     assert_eq!(gateway.count(), 1);
	/// }
	/// ```
	pub fn fail_next(&self, count: usize) {
		self.state.write().failures_left = count;
	}

	/// Records accepted so far
	pub fn submissions(&self) -> Vec<Record> {
		self.state.read().submissions.clone()
	}

	pub fn last_submission(&self) -> Option<Record> {
		self.state.read().submissions.last().cloned()
	}

	/// Number of accepted records
	pub fn count(&self) -> usize {
		self.state.read().submissions.len()
	}

	/// Number of calls, accepted or not
	pub fn attempts(&self) -> usize {
		self.state.read().attempts
	}

	/// Forget every submission, attempt and pending scripted failure
	pub fn clear(&self) {
		let mut state = self.state.write();
		state.submissions.clear();
		state.attempts = 0;
		state.failures_left = 0;
	}
}

#[async_trait]
impl SubmissionGateway for MemoryGateway {
	async fn submit(&self, record: &Record) -> GatewayResult<()> {
		let mut state = self.state.write();
		state.attempts += 1;

		if state.failures_left > 0 {
			state.failures_left -= 1;
			tracing::debug!(attempt = state.attempts, "Memory gateway rejecting submission");
			return Err(GatewayError::Unavailable(
				"scripted failure".to_string(),
			));
		}

		state.submissions.push(record.clone());
		Ok(())
	}
}
