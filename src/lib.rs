pub mod config;
pub mod constants;
pub mod dsp;
pub mod error;
pub mod protocol;
pub mod transport;

pub use config::DeviceConfig;
pub use dsp::{DigitalFilter, Filter};
pub use error::{FilterError, Result};
pub use protocol::{Session, SessionState};
pub use transport::SerialLink;
