//! Streaming session state machine.
//!
//! One session runs from a successful SYNC handshake to receipt of the
//! end-of-transmission sentinel. The machine is fully synchronous: every
//! read blocks until the link delivers 4 bytes, and the only exit from
//! streaming is the exact sentinel bit pattern. A missing or malformed
//! sample therefore stalls the session loop; the device has no other
//! concurrent duties, so this is a property of the design, not an error
//! path.

use std::io::{Read, Write};
use std::thread;

use crate::config::SessionConfig;
use crate::dsp::DigitalFilter;
use crate::error::Result;
use crate::protocol::wire::{self, EOT_MARKER, SYNC_WORD};

/// Protocol phase of a streaming session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Polling for the 4-byte SYNC handshake word
    AwaitingSync,
    /// Handshake done, sample rate announced; filtering one sample per word
    Streaming,
    /// Sentinel received, filter reset and sentinel echoed back
    Terminated,
}

/// One streaming session over a byte link.
///
/// Owns the single filter engine for its lifetime; the engine is constructed
/// once and reset between sessions rather than rebuilt, so the same
/// `Session` can serve connection after connection.
pub struct Session {
    filter: DigitalFilter<f32>,
    config: SessionConfig,
    state: SessionState,
    sessions_completed: u64,
}

impl Session {
    pub fn new(filter: DigitalFilter<f32>, config: SessionConfig) -> Self {
        Self {
            filter,
            config,
            state: SessionState::AwaitingSync,
            sessions_completed: 0,
        }
    }

    /// Current protocol phase.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Number of sessions that have run to termination.
    pub fn sessions_completed(&self) -> u64 {
        self.sessions_completed
    }

    /// Drive one full session: block for the handshake, stream until the
    /// sentinel arrives, acknowledge, and return. On return the filter state
    /// is cleared and the machine is back at [`SessionState::AwaitingSync`],
    /// ready for the next connection.
    pub fn run<L: Read + Write>(&mut self, link: &mut L) -> Result<()> {
        self.state = SessionState::AwaitingSync;
        while self.advance(link)? != SessionState::Terminated {}
        self.state = SessionState::AwaitingSync;
        Ok(())
    }

    /// Perform exactly one protocol step and return the state after it.
    ///
    /// Exposed so tests can drive each state transition independently of the
    /// blocking outer loop.
    pub fn advance<L: Read + Write>(&mut self, link: &mut L) -> Result<SessionState> {
        match self.state {
            SessionState::AwaitingSync => self.await_sync(link)?,
            SessionState::Streaming => self.stream_one(link)?,
            SessionState::Terminated => {}
        }
        Ok(self.state)
    }

    /// Read one handshake word. Anything other than SYNC is dropped and the
    /// poll repeats after a short delay; byte alignment is preserved because
    /// the word width is fixed.
    fn await_sync<L: Read + Write>(&mut self, link: &mut L) -> Result<()> {
        let word = wire::read_word(link)?;
        if word != SYNC_WORD {
            log::debug!("Ignoring non-SYNC handshake word {word:#010x}");
            thread::sleep(self.config.sync_retry_delay);
            return Ok(());
        }

        wire::write_word(link, self.config.sampling_frequency_hz)?;
        link.flush()?;

        log::info!(
            "Handshake complete, announced {} Hz sample rate",
            self.config.sampling_frequency_hz
        );
        self.state = SessionState::Streaming;
        Ok(())
    }

    /// Filter one sample, or terminate on the sentinel bit pattern.
    fn stream_one<L: Read + Write>(&mut self, link: &mut L) -> Result<()> {
        let word = wire::read_word(link)?;

        if word == EOT_MARKER {
            self.filter.reset();
            wire::write_word(link, EOT_MARKER)?;
            link.flush()?;

            self.sessions_completed += 1;
            log::info!("Session {} terminated", self.sessions_completed);
            self.state = SessionState::Terminated;
            return Ok(());
        }

        let filtered = self.filter.filter(f32::from_bits(word));
        wire::write_sample(link, filtered)?;
        Ok(())
    }
}
