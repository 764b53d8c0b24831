//! Key sequencer for Didimus mode: the main Caesar key for even-positioned
//! encodable characters and an alternate key (main + offset) for the odd
//! ones. Even/odd is counted over *encodable* characters only, after
//! skipping everything not in the alphabet.
//!
//! Class: Caesar (substitution cipher), bi-alphabetic (2 tables).

use std::fmt;

use tracing::warn;

use crate::correction::correct_alternate_key;
use crate::error::CaesarError;
use crate::params::CaesarParameters;

use super::{KeySequencer, RawScheduleItem, validate_main_key};

/// Alternates between the main key and the offset-derived alternate key.
#[derive(Debug, Clone)]
pub struct DidimusSequencer {
    params: CaesarParameters,
    is_valid: bool,
    is_even_position: bool,
}

impl DidimusSequencer {
    /// A new Didimus key sequencer. The normal Caesar key is used for even
    /// characters that are part of the encoding alphabet, the alternate key
    /// (main + offset) for the odd ones.
    pub fn new(params: CaesarParameters) -> Self {
        DidimusSequencer {
            params,
            is_valid: false,
            is_even_position: false,
        }
    }
}

impl fmt::Display for DidimusSequencer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (main_char, main) = self.params.key();
        let (alt_char, alt) = self.params.alt_key();
        write!(f, "Didimus({}|{},{}|{})", main_char, main, alt_char, alt)
    }
}

impl KeySequencer for DidimusSequencer {
    /// Runs the plain Caesar validation, then requires a positive non-zero
    /// offset and derives the alternate key with the zero-bounce rule.
    ///
    /// # Errors
    /// [`CaesarError::InvalidOffset`] when the offset is not positive: the
    /// two keys would coincide or invert.
    fn validate(&mut self) -> Result<(), CaesarError> {
        validate_main_key(&mut self.params);
        self.is_valid = false;

        if self.params.offset <= 0 {
            return Err(CaesarError::InvalidOffset(self.params.offset));
        }

        let alt = correct_alternate_key(
            self.params.key_value,
            self.params.offset,
            self.params.alphabet.len(),
        );
        if alt.corrected {
            warn!(alt_key = alt.alt_key, "offset beyond alphabet length rewound");
        }
        self.params.set_alt_key(alt.alt_key);
        self.is_valid = true;
        Ok(())
    }

    fn key_range(&self) -> (i32, i32) {
        (0, self.params.alphabet.len() as i32 - 1)
    }

    fn params(&self) -> &CaesarParameters {
        &self.params
    }

    /// Toggles the even/odd flag *before* reading, so the very first call
    /// is the even case and returns the main key.
    fn next_key(&mut self) -> i32 {
        self.is_even_position = !self.is_even_position;
        if self.is_even_position {
            self.params.key_value
        } else {
            self.params.alt_key_shift()
        }
    }

    fn is_polyalphabetic(&self) -> bool {
        true
    }

    /// Didimus uses the Offset to derive an alternate key by adding it to
    /// the main key's shift.
    fn is_offset_required(&self) -> bool {
        true
    }

    fn is_valid(&self) -> bool {
        self.is_valid
    }

    fn raw_schedule(&self) -> Vec<RawScheduleItem> {
        let mut replay = DidimusSequencer::new(self.params.clone());
        vec![
            RawScheduleItem {
                key_shift: replay.next_key(),
                comment: "even".to_string(),
            },
            RawScheduleItem {
                key_shift: replay.next_key(),
                comment: "odd".to_string(),
            },
        ]
    }
}
