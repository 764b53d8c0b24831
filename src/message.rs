//! Caesar message PDU packaging and verification.
//!
//! A packaged Caesar message consists of the encrypted payload prepended
//! with `{TIMESTAMP}{CHECKSUM}` where the timestamp is `YYYYMMDDTHHMMSS`
//! (15 characters) and the checksum is the XXH64 digest over the whole
//! payload, rendered as hex. The hash seed is an explicit constructor
//! parameter so packing and verification are deterministic and testable
//! without global state.

use std::fmt;

use chrono::Local;
use xxhash_rust::xxh64::{Xxh64, xxh64};

use crate::error::CaesarError;

/// Default seed for the payload checksum.
pub const DEFAULT_HASH_SEED: u64 = 0xDEAD_BEA7;

/// Length of the `YYYYMMDDTHHMMSS` timestamp prefix.
pub const TIMESTAMP_LEN: usize = 15;

/// XXH64 digest length in bytes; the embedded checksum is twice this in hex.
const DIGEST_LEN: usize = 8;

/// A ciphered Caesar message packaged with date/time and a seeded checksum.
///
/// The checksum accumulates incrementally as payload fragments are added,
/// so a message can be assembled over multiple [`Self::add_message`] calls
/// before packaging.
pub struct CaesarMessage {
    hasher: Xxh64,
    payload: String,
}

impl CaesarMessage {
    /// A new, empty Caesar message using the given checksum seed.
    pub fn new(seed: u64) -> Self {
        CaesarMessage {
            hasher: Xxh64::new(seed),
            payload: String::new(),
        }
    }

    /// Appends ciphered data to the payload, feeding the running checksum.
    pub fn add_message(&mut self, ciphered: &str) {
        self.hasher.update(ciphered.as_bytes());
        self.payload.push_str(ciphered);
    }

    /// The accumulated payload.
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// The running checksum as fixed-width hex.
    pub fn checksum_hex(&self) -> String {
        format!("{:0width$x}", self.hasher.digest(), width = DIGEST_LEN * 2)
    }

    /// Packages the message as `{TIMESTAMP}{CHECKSUM}{PAYLOAD}` using the
    /// current local time.
    pub fn pack(&self) -> String {
        let stamp = Local::now().format("%Y%m%dT%H%M%S");
        format!("{}{}{}", stamp, self.checksum_hex(), self.payload)
    }
}

impl fmt::Display for CaesarMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pack())
    }
}

/// Verifies that a packaged Caesar message has not been corrupted and
/// extracts its payload.
///
/// The embedded checksum is compared case-insensitively against a fresh
/// digest over the payload, computed with the same `seed` used to pack.
///
/// # Errors
/// - [`CaesarError::EmptyPacket`] when the packet is empty.
/// - [`CaesarError::CorruptPacket`] when it is too short to hold timestamp
///   and checksum.
/// - [`CaesarError::EmptyPayload`] when nothing follows the checksum.
/// - [`CaesarError::ChecksumMismatch`] when the digests differ.
pub fn verify_message(seed: u64, packet: &str) -> Result<String, CaesarError> {
    if packet.is_empty() {
        return Err(CaesarError::EmptyPacket);
    }

    let checksum_len = DIGEST_LEN * 2;
    let header_len = TIMESTAMP_LEN + checksum_len;
    if packet.len() < header_len {
        return Err(CaesarError::CorruptPacket);
    }
    if packet.len() == header_len {
        return Err(CaesarError::EmptyPayload);
    }

    // timestamp and checksum are ASCII in a well-formed packet; a multi-byte
    // character straddling the header boundary means corruption
    let embedded = packet
        .get(TIMESTAMP_LEN..header_len)
        .ok_or(CaesarError::CorruptPacket)?;
    let payload = packet.get(header_len..).ok_or(CaesarError::CorruptPacket)?;

    let computed = format!(
        "{:0width$x}",
        xxh64(payload.as_bytes(), seed),
        width = checksum_len
    );
    if !embedded.eq_ignore_ascii_case(&computed) {
        return Err(CaesarError::ChecksumMismatch {
            expected: embedded.to_string(),
            actual: computed,
        });
    }

    Ok(payload.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_layout() {
        let mut msg = CaesarMessage::new(DEFAULT_HASH_SEED);
        msg.add_message("PMTTW");
        let pdu = msg.pack();
        assert_eq!(pdu.len(), TIMESTAMP_LEN + 16 + 5);
        // YYYYMMDDTHHMMSS with the literal T at index 8
        assert_eq!(&pdu[8..9], "T");
        assert!(pdu.ends_with("PMTTW"));
    }

    #[test]
    fn test_pack_verify_roundtrip() {
        let mut msg = CaesarMessage::new(DEFAULT_HASH_SEED);
        msg.add_message("XYZZY");
        let pdu = msg.pack();
        assert_eq!(verify_message(DEFAULT_HASH_SEED, &pdu).unwrap(), "XYZZY");
    }

    #[test]
    fn test_incremental_accumulation() {
        let mut split = CaesarMessage::new(7);
        split.add_message("AB");
        split.add_message("CD");

        let mut whole = CaesarMessage::new(7);
        whole.add_message("ABCD");

        assert_eq!(split.checksum_hex(), whole.checksum_hex());
        assert_eq!(split.payload(), "ABCD");
    }

    #[test]
    fn test_verify_empty_packet() {
        assert_eq!(verify_message(0, ""), Err(CaesarError::EmptyPacket));
    }

    #[test]
    fn test_verify_undersized_packet() {
        assert_eq!(
            verify_message(0, "20250825T101500"),
            Err(CaesarError::CorruptPacket)
        );
    }

    #[test]
    fn test_verify_packet_without_payload() {
        let msg = CaesarMessage::new(0);
        let pdu = msg.pack();
        assert_eq!(verify_message(0, &pdu), Err(CaesarError::EmptyPayload));
    }

    #[test]
    fn test_verify_flipped_payload_character() {
        let mut msg = CaesarMessage::new(DEFAULT_HASH_SEED);
        msg.add_message("PMTTW");
        let pdu = msg.pack();
        let tampered = pdu.replace("PMTTW", "PMTTX");
        assert!(matches!(
            verify_message(DEFAULT_HASH_SEED, &tampered),
            Err(CaesarError::ChecksumMismatch { .. })
        ));
    }

    #[test]
    fn test_verify_wrong_seed_fails() {
        let mut msg = CaesarMessage::new(1);
        msg.add_message("HELLO");
        let pdu = msg.pack();
        assert!(matches!(
            verify_message(2, &pdu),
            Err(CaesarError::ChecksumMismatch { .. })
        ));
    }

    #[test]
    fn test_verify_is_checksum_case_insensitive() {
        let mut msg = CaesarMessage::new(3);
        msg.add_message("CASEFOLD");
        let pdu = msg.pack();
        let upper = format!(
            "{}{}{}",
            &pdu[..TIMESTAMP_LEN],
            pdu[TIMESTAMP_LEN..TIMESTAMP_LEN + 16].to_uppercase(),
            &pdu[TIMESTAMP_LEN + 16..]
        );
        assert_eq!(verify_message(3, &upper).unwrap(), "CASEFOLD");
    }
}
