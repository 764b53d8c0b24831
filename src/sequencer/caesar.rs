//! Key sequencer for the plain Caesar cipher, in which only ONE key is used.
//!
//! Class: Caesar (substitution cipher), monoalphabetic (1 table).

use std::fmt;

use crate::error::CaesarError;
use crate::params::CaesarParameters;

use super::{KeySequencer, RawScheduleItem, validate_main_key};

/// Sequences the single key of the plain Caesar cipher through a message.
/// Only one substitution table is ever needed.
#[derive(Debug, Clone)]
pub struct CaesarSequencer {
    params: CaesarParameters,
    is_valid: bool,
}

impl CaesarSequencer {
    /// A new plain Caesar key sequencer. The same key is used throughout
    /// the message.
    pub fn new(params: CaesarParameters) -> Self {
        CaesarSequencer {
            params,
            is_valid: false,
        }
    }
}

impl fmt::Display for CaesarSequencer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (key_char, shift) = self.params.key();
        write!(f, "Caesar({}|{})", key_char, shift)
    }
}

impl KeySequencer for CaesarSequencer {
    /// Corrects the key into range. Out-of-range and zero keys are warnings;
    /// validation itself never fails for plain Caesar.
    fn validate(&mut self) -> Result<(), CaesarError> {
        validate_main_key(&mut self.params);
        self.is_valid = true;
        Ok(())
    }

    fn key_range(&self) -> (i32, i32) {
        (0, self.params.alphabet.len() as i32 - 1)
    }

    fn params(&self) -> &CaesarParameters {
        &self.params
    }

    /// For plain Caesar the same key is used throughout the message.
    fn next_key(&mut self) -> i32 {
        self.params.key_value
    }

    fn is_polyalphabetic(&self) -> bool {
        false
    }

    fn is_offset_required(&self) -> bool {
        false
    }

    fn is_valid(&self) -> bool {
        self.is_valid
    }

    fn raw_schedule(&self) -> Vec<RawScheduleItem> {
        vec![RawScheduleItem {
            key_shift: self.params.key_value,
            comment: String::new(),
        }]
    }
}
