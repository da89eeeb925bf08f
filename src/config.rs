//! Configuration for the streaming filter device.
//!
//! All values are build-time constants in spirit: there is no config file and
//! no runtime reconfiguration. The structs exist so the session loop, the
//! serial link, and the filter are constructed from one explicit place and
//! so tests can substitute their own values (e.g. a zero handshake retry
//! delay).

use std::time::Duration;

use crate::constants::{DEFAULT_BAUD_RATE, DEFAULT_SAMPLING_FREQUENCY_HZ, SYNC_RETRY_DELAY};
use crate::dsp::DigitalFilter;
use crate::error::Result;

/// System-wide device configuration
///
/// Use `DeviceConfig::default()` for the values the stock firmware ships
/// with: 115200 baud, 1 kHz sample rate, and a second-order notch filter.
#[derive(Debug, Clone, Default)]
pub struct DeviceConfig {
    /// Serial link configuration
    pub serial: SerialConfig,
    /// Streaming session configuration
    pub session: SessionConfig,
    /// Filter coefficient configuration
    pub filter: FilterConfig,
}

/// Serial link configuration
#[derive(Debug, Clone)]
pub struct SerialConfig {
    /// Line rate in baud; the host must match it
    pub baud_rate: u32,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            baud_rate: DEFAULT_BAUD_RATE,
        }
    }
}

/// Streaming session configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Sampling frequency announced to the host after a successful handshake
    pub sampling_frequency_hz: u32,
    /// Pause between handshake polls while no SYNC word has arrived
    pub sync_retry_delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            sampling_frequency_hz: DEFAULT_SAMPLING_FREQUENCY_HZ,
            sync_retry_delay: SYNC_RETRY_DELAY,
        }
    }
}

/// Filter coefficient configuration
///
/// Numerator ("B", feed-forward) and denominator ("A", feedback) coefficient
/// lists of the rational transfer function, highest delay last. Both lists
/// must be non-empty and each leading coefficient non-zero; violations are
/// reported by [`FilterConfig::build`].
#[derive(Debug, Clone)]
pub struct FilterConfig {
    /// Feed-forward ("B") coefficients
    pub numerator: Vec<f32>,
    /// Feedback ("A") coefficients
    pub denominator: Vec<f32>,
}

impl FilterConfig {
    /// Construct the filter engine from the configured coefficient lists.
    pub fn build(&self) -> Result<DigitalFilter<f32>> {
        DigitalFilter::new(&self.numerator, &self.denominator)
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        // Second-order band-pass centered at 250 Hz for the 1 kHz sample rate.
        Self {
            numerator: vec![0.292_893_22, 0.0, -0.292_893_22],
            denominator: vec![1.0, -0.585_786_44, 0.414_213_56],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_config_builds() {
        let filter = FilterConfig::default().build();
        assert!(filter.is_ok());
        assert!(filter.unwrap().is_iir());
    }

    #[test]
    fn test_default_session_config() {
        let config = SessionConfig::default();
        assert_eq!(config.sampling_frequency_hz, 1_000);
        assert_eq!(config.sync_retry_delay, Duration::from_millis(150));
    }
}
