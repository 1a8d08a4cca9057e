//! Simulated remote submission gateway
//!
//! Stands in for a real registration service: every call waits for a fixed
//! delay and then succeeds with a configurable probability.

use async_trait::async_trait;
use inscription_forms::{GatewayError, GatewayResult, GatewaySettings, Record, SubmissionGateway};
use rand::Rng;
use std::time::Duration;

/// Default latency of a simulated submission
pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000);

/// Default probability that a simulated submission succeeds
pub const DEFAULT_SUCCESS_RATE: f64 = 0.95;

/// Gateway that sleeps and then flips a biased coin
///
/// # Examples
///
/// ```
/// use inscription_backends::SimulatedGateway;
/// use inscription_forms::{Record, SubmissionGateway};
/// use std::time::Duration;
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let gateway = SimulatedGateway::new(Duration::from_millis(1), 1.0);
///     assert!(gateway.submit(&Record::new()).await.is_ok());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SimulatedGateway {
	delay: Duration,
	success_rate: f64,
}

impl SimulatedGateway {
	/// Create a gateway; `success_rate` is clamped into `[0, 1]`
	pub fn new(delay: Duration, success_rate: f64) -> Self {
		let success_rate = if success_rate.is_nan() {
			0.0
		} else {
			success_rate.clamp(0.0, 1.0)
		};
		Self {
			delay,
			success_rate,
		}
	}

	/// Build a gateway from the `[gateway]` settings table
	///
	/// # Examples
	///
	/// ```
	/// use inscription_backends::SimulatedGateway;
	/// use inscription_forms::GatewaySettings;
	/// use std::time::Duration;
	///
	/// let settings = GatewaySettings { delay_ms: 10, success_rate: 0.5 };
	/// let gateway = SimulatedGateway::from_settings(&settings);
	/// assert_eq!(gateway.delay(), Duration::from_millis(10));
	/// assert_eq!(gateway.success_rate(), 0.5);
	/// ```
	pub fn from_settings(settings: &GatewaySettings) -> Self {
		Self::new(Duration::from_millis(settings.delay_ms), settings.success_rate)
	}

	pub fn delay(&self) -> Duration {
		self.delay
	}

	pub fn success_rate(&self) -> f64 {
		self.success_rate
	}
}

impl Default for SimulatedGateway {
	fn default() -> Self {
		Self::new(DEFAULT_DELAY, DEFAULT_SUCCESS_RATE)
	}
}

#[async_trait]
impl SubmissionGateway for SimulatedGateway {
	async fn submit(&self, record: &Record) -> GatewayResult<()> {
		tracing::debug!(
			delay_ms = self.delay.as_millis() as u64,
			fields = record.len(),
			"Simulating registration submission"
		);
		tokio::time::sleep(self.delay).await;

		let accepted = rand::thread_rng().gen_bool(self.success_rate);
		if accepted {
			tracing::info!("Simulated submission accepted");
			Ok(())
		} else {
			tracing::warn!("Simulated submission failed");
			Err(GatewayError::Unavailable(
				"simulated service failure".to_string(),
			))
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(1.5, 1.0)]
	#[case(-0.2, 0.0)]
	#[case(f64::NAN, 0.0)]
	#[case(0.3, 0.3)]
	fn test_success_rate_is_clamped(#[case] input: f64, #[case] expected: f64) {
		let gateway = SimulatedGateway::new(Duration::ZERO, input);

		assert_eq!(gateway.success_rate(), expected);
	}

	#[rstest]
	fn test_default_matches_settings_default() {
		let from_settings = SimulatedGateway::from_settings(&GatewaySettings::default());
		let default = SimulatedGateway::default();

		assert_eq!(from_settings.delay(), default.delay());
		assert_eq!(from_settings.success_rate(), default.success_rate());
	}

	#[tokio::test(start_paused = true)]
	async fn test_always_succeeds_at_full_rate() {
		let gateway = SimulatedGateway::new(DEFAULT_DELAY, 1.0);

		for _ in 0..10 {
			assert!(gateway.submit(&Record::new()).await.is_ok());
		}
	}

	#[tokio::test(start_paused = true)]
	async fn test_always_fails_at_zero_rate() {
		let gateway = SimulatedGateway::new(DEFAULT_DELAY, 0.0);

		let result = gateway.submit(&Record::new()).await;

		assert!(matches!(result, Err(GatewayError::Unavailable(_))));
	}

	#[tokio::test(start_paused = true)]
	async fn test_waits_for_the_configured_delay() {
		let gateway = SimulatedGateway::new(Duration::from_secs(2), 1.0);
		let start = tokio::time::Instant::now();

		gateway.submit(&Record::new()).await.unwrap();

		assert!(start.elapsed() >= Duration::from_secs(2));
	}
}
