//! Key sequencer for Fibonacci mode: each encodable character uses a key
//! made of the main Caesar key plus the current term of a fixed 10-term
//! Fibonacci series, wrapped to the alphabet.
//!
//! Class: Caesar (substitution cipher), polyalphabetic (up to 10 tables).

use std::fmt;

use crate::error::CaesarError;
use crate::params::CaesarParameters;

use super::{KeySequencer, RawScheduleItem, validate_main_key};

/// The 10-term Fibonacci series driving the key schedule.
const FIBONACCI: [i32; 10] = [0, 1, 1, 2, 3, 5, 8, 13, 21, 34];

/// Adds successive Fibonacci terms to the main key, cycling every 10 terms.
#[derive(Debug, Clone)]
pub struct FibonacciSequencer {
    params: CaesarParameters,
    is_valid: bool,
    term_index: usize,
}

impl FibonacciSequencer {
    /// A new Fibonacci key sequencer starting at term 0, so the first
    /// emitted key is the unmodified main key.
    pub fn new(params: CaesarParameters) -> Self {
        FibonacciSequencer {
            params,
            is_valid: false,
            term_index: 0,
        }
    }
}

impl fmt::Display for FibonacciSequencer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (key_char, shift) = self.params.key();
        write!(f, "Fibonacci({}|{},F({}))", key_char, shift, FIBONACCI.len())
    }
}

impl KeySequencer for FibonacciSequencer {
    /// Identical to plain Caesar validation; the Offset is unused.
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
        let key_shift = (self.params.key_value + FIBONACCI[self.term_index]) % (max + 1);
        self.term_index = (self.term_index + 1) % FIBONACCI.len();
        key_shift
    }

    fn is_polyalphabetic(&self) -> bool {
        true
    }

    /// Fibonacci does not use the Offset.
    fn is_offset_required(&self) -> bool {
        false
    }

    fn is_valid(&self) -> bool {
        self.is_valid
    }

    fn raw_schedule(&self) -> Vec<RawScheduleItem> {
        let mut replay = FibonacciSequencer::new(self.params.clone());
        (0..FIBONACCI.len())
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

    fn sequencer(key: i32) -> FibonacciSequencer {
        let mut p = CaesarParameters::new(Alphabet::cased(ALPHA_EN));
        p.set_key(key);
        let mut seq = FibonacciSequencer::new(p);
        seq.validate().unwrap();
        seq
    }

    #[test]
    fn test_first_key_is_main_key() {
        let mut seq = sequencer(7);
        assert_eq!(seq.next_key(), 7);
    }

    #[test]
    fn test_term_progression() {
        let mut seq = sequencer(3);
        let keys: Vec<i32> = (0..10).map(|_| seq.next_key()).collect();
        let expected: Vec<i32> = FIBONACCI.iter().map(|f| (3 + f) % 26).collect();
        assert_eq!(keys, expected);
    }

    #[test]
    fn test_wraps_after_ten_terms() {
        let mut seq = sequencer(3);
        let first: Vec<i32> = (0..10).map(|_| seq.next_key()).collect();
        let second: Vec<i32> = (0..10).map(|_| seq.next_key()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_key_wraps_to_alphabet() {
        // key 20 + fib 34 = 54, wraps to 54 % 26 = 2
        let mut seq = sequencer(20);
        let keys: Vec<i32> = (0..10).map(|_| seq.next_key()).collect();
        assert_eq!(keys[9], (20 + 34) % 26);
        assert!(keys.iter().all(|&k| (0..26).contains(&k)));
    }

    #[test]
    fn test_classification() {
        let seq = sequencer(3);
        assert!(seq.is_polyalphabetic());
        assert!(!seq.is_offset_required());
    }

    #[test]
    fn test_display() {
        let seq = sequencer(3);
        assert_eq!(seq.to_string(), "Fibonacci(D|3,F(10))");
    }

    #[test]
    fn test_raw_schedule_is_fresh() {
        let mut seq = sequencer(3);
        seq.next_key();
        seq.next_key();
        let schedule = seq.raw_schedule();
        assert_eq!(schedule.len(), 10);
        assert_eq!(schedule[0].key_shift, 3);
        assert_eq!(schedule[0].comment, "#0");
        // live state not consumed by the replay
        assert_eq!(seq.next_key(), (3 + FIBONACCI[2]) % 26);
    }
}
