//! Cipher parameters shared by every key sequencer.

use std::fmt;

use crate::alphabet::Alphabet;
use crate::correction::{correct_alternate_key, correct_main_key};

/// Parameters for one encode/decode operation of a Caesar-family cipher.
///
/// Built from raw, possibly out-of-range user input; setters run the
/// correctors so that `key_value` always lies in `[0, N)` for the current
/// alphabet. The alternate key is derived from key + offset and is never set
/// directly.
#[derive(Debug, Clone)]
pub struct CaesarParameters {
    /// The encoding alphabet.
    pub alphabet: Alphabet,
    /// The main key shift, corrected into `[0, N)` by [`Self::set_key`].
    pub key_value: i32,
    /// Mode-dependent secondary parameter: unused for plain Caesar and
    /// Fibonacci, additive alternate-key delta for Didimus, prime term-count
    /// selector for Primus.
    pub offset: i32,
    alt_key: i32,
}

impl CaesarParameters {
    /// Creates parameters for the chosen alphabet with no key selected yet.
    pub fn new(alphabet: Alphabet) -> Self {
        CaesarParameters {
            alphabet,
            key_value: 0,
            offset: -1,
            alt_key: 0,
        }
    }

    /// The main key as a `(character, shift)` pair.
    pub fn key(&self) -> (char, i32) {
        let c = self
            .alphabet
            .character(self.key_value as usize)
            .unwrap_or_else(|_| self.alphabet.first_char());
        (c, self.key_value)
    }

    /// The derived alternate key as a `(character, shift)` pair.
    pub fn alt_key(&self) -> (char, i32) {
        let c = self
            .alphabet
            .character(self.alt_key as usize)
            .unwrap_or_else(|_| self.alphabet.first_char());
        (c, self.alt_key)
    }

    /// The alternate key shift only.
    pub fn alt_key_shift(&self) -> i32 {
        self.alt_key
    }

    /// Sets the main key shift, correcting it for the alphabet length.
    /// Positive and negative raw values produce different effective keys.
    ///
    /// # Returns
    /// The effective (corrected) key shift.
    pub fn set_key(&mut self, shift: i32) -> i32 {
        self.key_value = correct_main_key(shift, self.alphabet.len()).shift;
        self.key_value
    }

    /// Stores the offset and recomputes the alternate key from the current
    /// main key. Positive and negative offsets produce different results.
    ///
    /// # Returns
    /// The computed alternate key shift.
    pub fn set_alt_key_offset(&mut self, offset: i32) -> i32 {
        self.offset = offset;
        self.alt_key = correct_alternate_key(self.key_value, offset, self.alphabet.len()).alt_key;
        self.alt_key
    }

    /// Replaces the encoding alphabet. When the new alphabet is shorter than
    /// the previous one, a previously valid key may fall out of range and is
    /// re-clamped, and the alternate key is recomputed.
    ///
    /// # Returns
    /// The (possibly re-clamped) main key shift and alternate key shift.
    pub fn set_alphabet(&mut self, alphabet: Alphabet) -> (i32, i32) {
        let old_n = self.alphabet.len();
        let new_n = alphabet.len();
        self.alphabet = alphabet;

        if old_n > new_n {
            if self.key_value >= new_n as i32 {
                self.key_value = correct_main_key(self.key_value, new_n).shift;
            }
            self.alt_key = correct_alternate_key(self.key_value, self.offset, new_n).alt_key;
        }

        (self.key_value, self.alt_key)
    }

    /// Overrides the derived alternate key. Used by sequencer validation,
    /// which applies the zero-bounce rule.
    pub(crate) fn set_alt_key(&mut self, alt_key: i32) {
        self.alt_key = alt_key;
    }
}

impl fmt::Display for CaesarParameters {
    /// Renders the current key as `(NN|C)` followed by the alphabet letters.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (key_char, shift) = self.key();
        write!(f, "({:02}|{}) {}", shift, key_char, self.alphabet)
    }
}
