//! Key sequencer for Primus mode: each encodable character uses a key made
//! of the main Caesar key plus the current term of a fixed prime-number
//! table. After the last selected prime the schedule rewinds and starts
//! over. The Offset selects how many prime terms participate.
//!
//! Class: Caesar (substitution cipher), polyalphabetic (up to 12 tables).

use std::fmt;

use crate::error::CaesarError;
use crate::params::CaesarParameters;

use super::{KeySequencer, RawScheduleItem, validate_main_key};

/// The prime-term table. Although 0 is not a prime, the leading 0 guarantees
/// the first emitted key is always the unmodified main Caesar key.
const PRIMES: [i32; 12] = [0, 2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31];

/// The maximum number of prime terms available in the algorithm.
pub fn primus_maximus() -> usize {
    PRIMES.len()
}

/// Adds successive prime terms to the main key, rewinding after the
/// selected number of terms.
#[derive(Debug, Clone)]
pub struct PrimusSequencer {
    params: CaesarParameters,
    is_valid: bool,
    /// Current prime term index, `0..12`.
    term_index: usize,
    /// Maximum prime term index before rewind, derived from the Offset at
    /// construction. Zero Offset selects the full table; this asymmetry
    /// (zero meaning "maximum" rather than "none") is deliberate.
    max_primes: i32,
}

impl PrimusSequencer {
    /// A new Primus key sequencer. The Offset is folded modulo the prime
    /// table length; an Offset of zero (or a multiple of twelve) selects all
    /// 12 terms. An Offset of one is equivalent to Didimus with offset 2
    /// (the first prime).
    pub fn new(params: CaesarParameters) -> Self {
        let max_primes = match params.offset % PRIMES.len() as i32 {
            0 if params.offset >= 0 => PRIMES.len() as i32,
            folded => folded,
        };

        PrimusSequencer {
            params,
            is_valid: false,
            term_index: 0,
            max_primes,
        }
    }
}

impl fmt::Display for PrimusSequencer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (key_char, shift) = self.params.key();
        write!(f, "Primus({}|{},P({}))", key_char, shift, self.max_primes)
    }
}

impl KeySequencer for PrimusSequencer {
    /// Identical to plain Caesar validation; the Offset was already folded
    /// into the term count at construction.
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

    fn next_key(&mut self) -> i32 {
        let (_, max) = self.key_range();
        let key_shift = (self.params.key_value + PRIMES[self.term_index]) % (max + 1);
        // rewind at the end of the table or at the selected term count
        let new_index = self.term_index + 1;
        self.term_index = if new_index >= PRIMES.len() || new_index as i32 > self.max_primes {
            0
        } else {
            new_index
        };
        key_shift
    }

    fn is_polyalphabetic(&self) -> bool {
        true
    }

    /// Primus uses the Offset to select how many prime terms (past the
    /// initial main key) participate in the schedule.
    fn is_offset_required(&self) -> bool {
        true
    }

    fn is_valid(&self) -> bool {
        self.is_valid
    }

    fn raw_schedule(&self) -> Vec<RawScheduleItem> {
        let mut replay = PrimusSequencer::new(self.params.clone());
        replay.max_primes = self.max_primes;
        (0..PRIMES.len())
            .map(|i| RawScheduleItem {
                key_shift: replay.next_key(),
                comment: format!("#{}", i),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::{ALPHA_EN, Alphabet};

    fn sequencer(key: i32, offset: i32) -> PrimusSequencer {
        let mut p = CaesarParameters::new(Alphabet::cased(ALPHA_EN));
        p.set_key(key);
        p.offset = offset;
        let mut seq = PrimusSequencer::new(p);
        seq.validate().unwrap();
        seq
    }

    #[test]
    fn test_first_key_is_main_key() {
        let mut seq = sequencer(9, 12);
        assert_eq!(seq.next_key(), 9);
    }

    #[test]
    fn test_full_term_progression() {
        let mut seq = sequencer(4, 12);
        let keys: Vec<i32> = (0..12).map(|_| seq.next_key()).collect();
        let expected: Vec<i32> = PRIMES.iter().map(|p| (4 + p) % 26).collect();
        assert_eq!(keys, expected);
    }

    #[test]
    fn test_zero_offset_selects_full_table() {
        let mut with_zero = sequencer(4, 0);
        let mut with_twelve = sequencer(4, 12);
        let a: Vec<i32> = (0..30).map(|_| with_zero.next_key()).collect();
        let b: Vec<i32> = (0..30).map(|_| with_twelve.next_key()).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_offset_emits_twelve_distinct_terms() {
        let mut seq = sequencer(0, 0);
        let keys: Vec<i32> = (0..12).map(|_| seq.next_key()).collect();
        let mut unique = keys.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), 12);
        // 13th call rewinds to the first term
        assert_eq!(seq.next_key(), keys[0]);
    }

    #[test]
    fn test_offset_limits_term_count() {
        // offset 2: terms 0, 2, 3 then rewind
        let mut seq = sequencer(0, 2);
        let keys: Vec<i32> = (0..6).map(|_| seq.next_key()).collect();
        assert_eq!(keys, vec![0, 2, 3, 0, 2, 3]);
    }

    #[test]
    fn test_offset_one_is_two_key_alternation() {
        let mut seq = sequencer(10, 1);
        let keys: Vec<i32> = (0..4).map(|_| seq.next_key()).collect();
        assert_eq!(keys, vec![10, 12, 10, 12]);
    }

    #[test]
    fn test_offset_folded_modulo_table() {
        let mut a = sequencer(5, 14);
        let mut b = sequencer(5, 2);
        let ka: Vec<i32> = (0..8).map(|_| a.next_key()).collect();
        let kb: Vec<i32> = (0..8).map(|_| b.next_key()).collect();
        assert_eq!(ka, kb);
    }

    #[test]
    fn test_classification() {
        let seq = sequencer(3, 4);
        assert!(seq.is_polyalphabetic());
        assert!(seq.is_offset_required());
    }

    #[test]
    fn test_display() {
        let seq = sequencer(3, 4);
        assert_eq!(seq.to_string(), "Primus(D|3,P(4))");
    }

    #[test]
    fn test_raw_schedule_replays_full_table() {
        let mut seq = sequencer(4, 12);
        seq.next_key();
        let schedule = seq.raw_schedule();
        assert_eq!(schedule.len(), 12);
        assert_eq!(schedule[0].key_shift, 4);
        assert_eq!(schedule[1].key_shift, 6);
        assert_eq!(schedule[11].comment, "#11");
    }
}
