//! Wire format for the streaming session protocol.
//!
//! Every payload on the link is a single 4-byte word transmitted as a raw
//! native-endian bit pattern; both ends must agree on endianness. There is
//! no framing beyond the fixed width: the SYNC handshake word and the
//! end-of-transmission sentinel are distinguished purely by their bit
//! patterns, which keeps the format trivially decodable on constrained
//! hardware.

use std::io::{Read, Write};

use byteorder::{NativeEndian, ReadBytesExt, WriteBytesExt};

use crate::error::Result;

/// Handshake request word: the ASCII bytes `SYNC` packed into one 32-bit
/// word in transmission order.
pub const SYNC_WORD: u32 = u32::from_ne_bytes(*b"SYNC");

/// End-of-transmission sentinel, a quiet-NaN encoding. Ordinary finite
/// samples can never carry this exact bit pattern.
pub const EOT_MARKER: u32 = 0x7FC0_0000;

/// Read one 4-byte word from the link.
///
/// Samples are read through this as raw bits too, so the sentinel comparison
/// happens on the bit pattern rather than on a NaN-contaminated float.
pub fn read_word<R: Read>(link: &mut R) -> Result<u32> {
    Ok(link.read_u32::<NativeEndian>()?)
}

/// Write one 4-byte word to the link.
pub fn write_word<W: Write>(link: &mut W, word: u32) -> Result<()> {
    Ok(link.write_u32::<NativeEndian>(word)?)
}

/// Write one float32 sample as its raw bit pattern.
pub fn write_sample<W: Write>(link: &mut W, sample: f32) -> Result<()> {
    Ok(link.write_f32::<NativeEndian>(sample)?)
}
