//! Key sequencers for the Caesar cipher family.
//!
//! A key sequencer produces, one call at a time, the key shift to use for
//! the *next* encodable character of a message. Plain Caesar is
//! monoalphabetic and always emits the same key; Didimus, Fibonacci and
//! Primus are polyalphabetic and advance internal position state on every
//! call. Position state is message-relative, so a sequencer must be
//! constructed fresh for each encode/decode operation and is not safe to
//! share between concurrent operations.

use std::fmt;

use tracing::warn;

use crate::correction::correct_main_key;
use crate::error::CaesarError;
use crate::params::CaesarParameters;

mod caesar;
mod didimus;
mod fibonacci;
mod primus;

pub use caesar::CaesarSequencer;
pub use didimus::DidimusSequencer;
pub use fibonacci::FibonacciSequencer;
pub use primus::{PrimusSequencer, primus_maximus};

/// One entry of a raw (integer-only) key schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawScheduleItem {
    /// The key shift emitted at this position.
    pub key_shift: i32,
    /// Free-form annotation, such as the term number.
    pub comment: String,
}

/// Sequences per-character key shifts over a single message.
///
/// `next_key` must be called exactly once per encodable character, in
/// message order, and never for characters absent from the alphabet.
pub trait KeySequencer: fmt::Display {
    /// Validates and corrects the key parameters. Must be called after
    /// construction and before the first `next_key`. Corrections of
    /// out-of-range keys are warnings, not errors; only genuinely invalid
    /// parameters (such as a missing offset) fail.
    fn validate(&mut self) -> Result<(), CaesarError>;

    /// The valid `(min, max)` key range for the current alphabet.
    fn key_range(&self) -> (i32, i32);

    /// The cipher parameters this sequencer operates on.
    fn params(&self) -> &CaesarParameters;

    /// The key shift for the next encodable character. Stateful for
    /// polyalphabetic sequencers.
    fn next_key(&mut self) -> i32;

    /// Whether more than one substitution table is used over a message.
    fn is_polyalphabetic(&self) -> bool;

    /// Whether the Offset parameter participates in key sequencing.
    fn is_offset_required(&self) -> bool;

    /// Whether [`Self::validate`] has completed successfully.
    fn is_valid(&self) -> bool;

    /// The full deterministic key sequence this sequencer would emit,
    /// replayed from a fresh instance so the live position state is not
    /// consumed. For display and diagnostics only.
    fn raw_schedule(&self) -> Vec<RawScheduleItem>;
}

/// Shared main-key validation: corrects the key into `[0, N)` and flags the
/// degenerate zero shift.
pub(crate) fn validate_main_key(params: &mut CaesarParameters) {
    let c = correct_main_key(params.key_value, params.alphabet.len());
    params.key_value = c.shift;
    if params.key_value == 0 {
        warn!("a shift of zero does not transcode");
    }
}
