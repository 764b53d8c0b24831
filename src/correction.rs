//! Key and offset correction (normalization).
//!
//! Raw user-entered shifts may be negative or larger than the alphabet.
//! These pure functions fold any signed shift into the valid `[0, N)` key
//! domain and report whether a correction took place. A correction is a
//! warning-level signal, never an error: processing always continues with
//! the corrected value.

use tracing::warn;

/// Result of normalizing a main key shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyCorrection {
    /// The effective key shift, in `[0, N)`.
    pub shift: i32,
    /// Whether the input shift had to be corrected.
    pub corrected: bool,
}

/// Result of deriving and normalizing an alternate key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AltKeyCorrection {
    /// The offset folded into `[0, N)`.
    pub offset: i32,
    /// The alternate key `(main + offset) mod N` before the zero bounce.
    pub wrapped: i32,
    /// The effective alternate key, after the zero bounce.
    pub alt_key: i32,
    /// Whether the raw `main + offset` had to be corrected.
    pub corrected: bool,
}

/// Normalizes an arbitrary signed key shift into `[0, N)`.
///
/// Uses a double modulo so that negative shifts wrap to their positive
/// complement instead of keeping the sign of the truncating `%` operator.
/// For `N = 26`: `-5` becomes `21`, `-28` becomes `24`, `26` becomes `0`.
///
/// # Parameters
/// - `shift`: Raw signed key shift.
/// - `n`: Alphabet length, must be non-zero.
pub fn correct_main_key(shift: i32, n: usize) -> KeyCorrection {
    let n = n as i32;
    let corrected = ((shift % n) + n) % n;
    if corrected != shift {
        warn!(
            raw = shift,
            corrected,
            out_of_range = shift.abs() >= n,
            negative = shift < 0,
            "shift value corrected"
        );
    }
    KeyCorrection {
        shift: corrected,
        corrected: corrected != shift,
    }
}

/// Derives the alternate key `(main + offset) mod N` and normalizes it.
///
/// An alternate key that lands on `0` would coincide with the degenerate
/// no-rotation case and not transcode distinctly from a missing key, so it
/// bounces to `1`. The `corrected` flag is set whenever the effective
/// alternate key differs from the raw `main + offset` sum, including the
/// zero bounce.
///
/// # Parameters
/// - `main`: Main key shift, normally already in `[0, N)`.
/// - `offset`: Raw signed additive offset.
/// - `n`: Alphabet length, must be non-zero.
pub fn correct_alternate_key(main: i32, offset: i32, n: usize) -> AltKeyCorrection {
    let n = n as i32;
    let folded_offset = ((offset % n) + n) % n;
    let raw = main + offset;
    let wrapped = ((raw % n) + n) % n;
    let alt_key = if wrapped == 0 { 1 } else { wrapped };
    if alt_key != raw {
        warn!(
            main,
            offset,
            alt_key,
            zero_bounced = wrapped == 0,
            "alternate key corrected"
        );
    }
    AltKeyCorrection {
        offset: folded_offset,
        wrapped,
        alt_key,
        corrected: alt_key != raw,
    }
}
