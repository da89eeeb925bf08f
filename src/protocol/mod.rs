pub mod session;
pub mod wire;

pub use session::{Session, SessionState};
pub use wire::{EOT_MARKER, SYNC_WORD};
