pub mod coefficients;
pub mod digital_filter;
pub mod filter;

pub use coefficients::ScaledCoefficients;
pub use digital_filter::DigitalFilter;
pub use filter::Filter;
