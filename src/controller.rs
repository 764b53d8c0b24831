//! Public controller for Caesar-class substitution cipher encryption and
//! decryption. Supports plain Caesar, Didimus, Fibonacci and Primus.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::alphabet::Alphabet;
use crate::error::CaesarError;
use crate::message::{CaesarMessage, DEFAULT_HASH_SEED, verify_message};
use crate::params::CaesarParameters;
use crate::schedule::{KeySchedule, KeyScheduleItem};
use crate::sequencer::{
    CaesarSequencer, DidimusSequencer, FibonacciSequencer, KeySequencer, PrimusSequencer,
};
use crate::transcoder::{Caesar, rotate_left};

/// The Caesar-family cipher modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CipherMode {
    /// Plain Caesar: one constant key.
    Caesar,
    /// Didimus: alternates between the main and an offset-derived key.
    Didimus,
    /// Fibonacci: adds successive Fibonacci terms to the main key.
    Fibonacci,
    /// Primus: adds successive prime terms to the main key.
    Primus,
}

impl CipherMode {
    /// Whether this mode needs the Offset parameter.
    pub fn requires_offset(&self) -> bool {
        matches!(self, CipherMode::Didimus | CipherMode::Primus)
    }

    /// The mode name as displayed and parsed.
    pub fn name(&self) -> &'static str {
        match self {
            CipherMode::Caesar => "Caesar",
            CipherMode::Didimus => "Didimus",
            CipherMode::Fibonacci => "Fibonacci",
            CipherMode::Primus => "Primus",
        }
    }
}

impl fmt::Display for CipherMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CipherMode {
    type Err = CaesarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Caesar" => Ok(CipherMode::Caesar),
            "Didimus" => Ok(CipherMode::Didimus),
            "Fibonacci" => Ok(CipherMode::Fibonacci),
            "Primus" => Ok(CipherMode::Primus),
            other => Err(CaesarError::InvalidMode(other.to_string())),
        }
    }
}

/// Creates the key sequencer for the given mode over the given parameters.
/// The parameters must already carry the key and, for offset-requiring
/// modes, the offset.
pub fn create_sequencer(mode: CipherMode, params: CaesarParameters) -> Box<dyn KeySequencer> {
    match mode {
        CipherMode::Caesar => Box::new(CaesarSequencer::new(params)),
        CipherMode::Didimus => Box::new(DidimusSequencer::new(params)),
        CipherMode::Fibonacci => Box::new(FibonacciSequencer::new(params)),
        CipherMode::Primus => Box::new(PrimusSequencer::new(params)),
    }
}

/// Holds a reference alphabet and performs repeated, independent
/// encryption/decryption operations on it with different parameter values.
///
/// Every operation constructs a fresh parameter/sequencer pair, so a single
/// controller can serve unrelated messages back to back; no state is shared
/// between operations.
#[derive(Debug, Clone)]
pub struct CipherController {
    alpha: Alphabet,
    hash_seed: u64,
}

impl CipherController {
    /// A new controller over the given alphabet with the default PDU
    /// checksum seed.
    pub fn new(alpha: Alphabet) -> Self {
        Self::with_hash_seed(alpha, DEFAULT_HASH_SEED)
    }

    /// A new controller with an explicit PDU checksum seed. Both sides of a
    /// packaged exchange must agree on the seed.
    pub fn with_hash_seed(alpha: Alphabet, hash_seed: u64) -> Self {
        CipherController { alpha, hash_seed }
    }

    /// A copy of this controller, optionally over a different alphabet.
    pub fn clone_with(&self, new_alpha: Option<Alphabet>) -> Self {
        CipherController {
            alpha: new_alpha.unwrap_or_else(|| self.alpha.clone()),
            hash_seed: self.hash_seed,
        }
    }

    /// The controller's reference alphabet.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alpha
    }

    /// Encrypts a plain string using the selected Caesar-class cipher mode.
    ///
    /// # Errors
    /// [`CaesarError::MissingOffset`] when `mode` requires an offset and
    /// none is supplied. Out-of-range keys are corrected, not rejected.
    pub fn encrypt(
        &self,
        mode: CipherMode,
        plain: &str,
        key_shift: i32,
        offset: Option<i32>,
    ) -> Result<String, CaesarError> {
        let mut sequencer = self.build_sequencer(mode, key_shift, offset)?;
        sequencer.validate()?;
        debug!(%sequencer, "encrypt sequencer validated");
        Ok(Caesar::from_sequencer(sequencer).encode(plain))
    }

    /// Decrypts a Caesar-class string using the selected cipher mode.
    ///
    /// # Errors
    /// Same conditions as [`Self::encrypt`].
    pub fn decrypt(
        &self,
        mode: CipherMode,
        ciphered: &str,
        key_shift: i32,
        offset: Option<i32>,
    ) -> Result<String, CaesarError> {
        let mut sequencer = self.build_sequencer(mode, key_shift, offset)?;
        sequencer.validate()?;
        debug!(%sequencer, "decrypt sequencer validated");
        Ok(Caesar::from_sequencer(sequencer).decode(ciphered))
    }

    /// Packages an already encrypted string in a PDU that can be sent over
    /// a communications channel.
    pub fn pack_message(&self, cipher_payload: &str) -> String {
        let mut pdu = CaesarMessage::new(self.hash_seed);
        pdu.add_message(cipher_payload);
        pdu.pack()
    }

    /// Unpacks a PDU from a communications channel: verifies the checksum
    /// and, if intact, decrypts and returns the payload.
    pub fn unpack_message(
        &self,
        pdu: &str,
        mode: CipherMode,
        key_shift: i32,
        offset: Option<i32>,
    ) -> Result<String, CaesarError> {
        let payload = verify_message(self.hash_seed, pdu)?;
        self.decrypt(mode, &payload, key_shift, offset)
    }

    /// The programmed key schedule for the given mode and parameters,
    /// enriched with key characters and rotated tabula strings for display.
    pub fn schedule(
        &self,
        mode: CipherMode,
        key_shift: i32,
        offset: Option<i32>,
    ) -> Result<KeySchedule, CaesarError> {
        let mut sequencer = self.build_sequencer(mode, key_shift, offset)?;
        sequencer.validate()?;

        let tokens = self.alpha.chars();
        sequencer
            .raw_schedule()
            .into_iter()
            .map(|raw| {
                let key_char = self.alpha.character(raw.key_shift as usize)?;
                let tabula: String = rotate_left(tokens, raw.key_shift).into_iter().collect();
                Ok(KeyScheduleItem {
                    key_shift: raw.key_shift,
                    key_char,
                    comment: raw.comment,
                    tabula,
                })
            })
            .collect()
    }

    fn build_sequencer(
        &self,
        mode: CipherMode,
        key_shift: i32,
        offset: Option<i32>,
    ) -> Result<Box<dyn KeySequencer>, CaesarError> {
        let mut params = CaesarParameters::new(self.alpha.clone());
        params.set_key(key_shift);

        match mode {
            CipherMode::Didimus => {
                let ofs = offset.ok_or(CaesarError::MissingOffset(mode.name()))?;
                params.set_alt_key_offset(ofs);
            }
            CipherMode::Primus => {
                let ofs = offset.ok_or(CaesarError::MissingOffset(mode.name()))?;
                params.offset = ofs;
            }
            CipherMode::Caesar | CipherMode::Fibonacci => {}
        }

        Ok(create_sequencer(mode, params))
    }
}
