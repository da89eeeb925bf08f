//! Build-time constants for the serial streaming protocol
//!
//! These values are fixed at build time and shared (by convention) with the
//! host: the host must open its end of the link at the same baud rate and
//! speak the same wire format.

use std::time::Duration;

/// Serial line rate for the link to the host.
pub const DEFAULT_BAUD_RATE: u32 = 115_200;

/// Sampling frequency announced to the host once per session, immediately
/// after a successful handshake.
pub const DEFAULT_SAMPLING_FREQUENCY_HZ: u32 = 1_000;

/// Pause between handshake polls while no SYNC word has arrived.
/// A deliberate low-rate polling loop; handshake latency is not
/// performance-critical.
pub const SYNC_RETRY_DELAY: Duration = Duration::from_millis(150);

/// Read timeout used by the serial link. Timed-out reads are retried, so the
/// protocol still sees indefinitely-blocking reads; the timeout only bounds
/// how long a single OS read call can sit in the driver.
pub const SERIAL_READ_TIMEOUT: Duration = Duration::from_millis(500);
