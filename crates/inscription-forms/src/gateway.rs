//! Boundary to whatever persists a finished registration

use crate::record::Record;
use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
	#[error("Submission rejected: {0}")]
	Rejected(String),
	#[error("Gateway unavailable: {0}")]
	Unavailable(String),
}

pub type GatewayResult<T> = Result<T, GatewayError>;

/// Accepts a completed [`Record`].
///
/// The wizard treats every error the same way: the attempt failed and the
/// user may submit again.
#[async_trait]
pub trait SubmissionGateway: Send + Sync {
	async fn submit(&self, record: &Record) -> GatewayResult<()>;
}
