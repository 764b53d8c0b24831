//! Substitution transcoder: encodes/decodes a message character by
//! character against a rotated alphabet (the "tabula") selected by a key
//! sequencer.

use crate::sequencer::KeySequencer;

/// Rotates a character sequence left by `shift` positions, wrapping the
/// shift into `[0, N)` first. `rotate_left(ABC, 1) == BCA`.
pub fn rotate_left(chars: &[char], shift: i32) -> Vec<char> {
    let n = chars.len();
    if n == 0 {
        return Vec::new();
    }
    let k = (((shift % n as i32) + n as i32) % n as i32) as usize;
    if k == 0 {
        return chars.to_vec();
    }
    let mut rotated = Vec::with_capacity(n);
    rotated.extend_from_slice(&chars[k..]);
    rotated.extend_from_slice(&chars[..k]);
    rotated
}

/// Encodes and decodes messages through a key sequencer.
///
/// The sequencer is consumed per message: its position state advances once
/// for every character found in the alphabet. Characters absent from the
/// alphabet pass through unchanged and do not consume a key. Letter case of
/// the input is restored on the output.
pub struct Caesar {
    sequencer: Box<dyn KeySequencer>,
}

impl Caesar {
    /// Wraps a (validated) key sequencer for one encode or decode pass.
    pub fn from_sequencer(sequencer: Box<dyn KeySequencer>) -> Self {
        Caesar { sequencer }
    }

    /// Encodes a plaintext: each alphabet character is substituted by the
    /// character at the same position in the rotated tabula.
    pub fn encode(&mut self, plain: &str) -> String {
        self.transcode(plain, true)
    }

    /// Decodes a ciphertext: the exact inverse of [`Self::encode`] for a
    /// fresh sequencer with the same parameters.
    pub fn decode(&mut self, ciphered: &str) -> String {
        self.transcode(ciphered, false)
    }

    fn transcode(&mut self, input: &str, encoding: bool) -> String {
        let alphabet = self.sequencer.params().alphabet.clone();
        let tokens = alphabet.chars().to_vec();
        let poly = self.sequencer.is_polyalphabetic();

        // One table suffices for monoalphabetic sequencers; polyalphabetic
        // ones re-rotate per encodable character below.
        let mut tabula = rotate_left(&tokens, self.sequencer.params().key_value);

        let mut result = String::with_capacity(input.len());
        for c in input.chars() {
            let probe = alphabet.fold(c);
            let reference = if encoding { &tokens } else { &tabula };
            let found = reference.iter().position(|&a| a == probe);

            // a rotation is only spent on characters present in the alphabet
            let at = match found {
                Some(at) => at,
                None => {
                    result.push(c);
                    continue;
                }
            };

            let at = if poly {
                tabula = rotate_left(&tokens, self.sequencer.next_key());
                if encoding {
                    at
                } else {
                    // the rotation changed under us, locate again
                    match tabula.iter().position(|&a| a == probe) {
                        Some(at) => at,
                        None => {
                            result.push(c);
                            continue;
                        }
                    }
                }
            } else {
                at
            };

            let substituted = if encoding { tabula[at] } else { tokens[at] };
            result.push(restore_case(c, substituted));
        }

        result
    }
}

/// Restores the case of the original input character on the substituted
/// output character.
fn restore_case(original: char, substituted: char) -> char {
    if original.is_lowercase() {
        crate::alphabet::fold_lower(substituted)
    } else if original.is_uppercase() {
        crate::alphabet::fold_upper(substituted)
    } else {
        substituted
    }
}
