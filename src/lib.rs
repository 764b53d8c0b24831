//! Caesar-family substitution cipher engine.
//!
//! caesardisk implements the cipher core behind a printable Caesar-disk
//! generator: four historical-style substitution cipher modes over
//! arbitrary Unicode alphabets, plus a self-verifying message packaging
//! format. No cryptographic security is provided or implied; Caesar-class
//! ciphers are trivially breakable and this is an educational toy.
//!
//! # Architecture
//!
//! ```text
//! Alphabet     (ordered character disk — lookup by index and character)
//!     ↓ consumed by
//! KeySequencer (per-message key schedule — Caesar | Didimus | Fibonacci | Primus)
//!     ↓ drives
//! Caesar       (transcoder — rotated-tabula substitution, case preserving)
//!     ↓ optionally wrapped by
//! CaesarMessage (PDU — timestamp + seeded XXH64 checksum + payload)
//! ```
//!
//! The [`CipherController`] facade ties these together for callers such as
//! a GUI or CLI front end.
//!
//! # Examples
//!
//! Encrypt and decrypt with the plain Caesar mode:
//!
//! ```
//! use caesardisk::{Alphabet, CipherController, CipherMode};
//!
//! let ctrl = CipherController::new(Alphabet::preset("English").unwrap());
//!
//! let ciphered = ctrl.encrypt(CipherMode::Caesar, "HELLO", 8, None).unwrap();
//! assert_eq!(ciphered, "PMTTW");
//!
//! let plain = ctrl.decrypt(CipherMode::Caesar, &ciphered, 8, None).unwrap();
//! assert_eq!(plain, "HELLO");
//! ```
//!
//! Package a ciphertext in a tamper-evident PDU and unpack it again:
//!
//! ```
//! use caesardisk::{Alphabet, CipherController, CipherMode};
//!
//! let ctrl = CipherController::new(Alphabet::preset("English").unwrap());
//!
//! let ciphered = ctrl.encrypt(CipherMode::Didimus, "Meet at dawn", 10, Some(5)).unwrap();
//! let pdu = ctrl.pack_message(&ciphered);
//!
//! let plain = ctrl.unpack_message(&pdu, CipherMode::Didimus, 10, Some(5)).unwrap();
//! assert_eq!(plain, "Meet at dawn");
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod controller;
pub mod correction;
pub mod error;
pub mod message;
pub mod params;
pub mod schedule;
pub mod sequencer;
pub mod transcoder;

pub use alphabet::{Alphabet, CaseMode, rune_string};
pub use controller::{CipherController, CipherMode, create_sequencer};
pub use correction::{
    AltKeyCorrection, KeyCorrection, correct_alternate_key, correct_main_key,
};
pub use error::CaesarError;
pub use message::{CaesarMessage, DEFAULT_HASH_SEED, TIMESTAMP_LEN, verify_message};
pub use params::CaesarParameters;
pub use schedule::{KeySchedule, KeyScheduleItem};
pub use sequencer::{
    CaesarSequencer, DidimusSequencer, FibonacciSequencer, KeySequencer, PrimusSequencer,
    RawScheduleItem, primus_maximus,
};
pub use transcoder::{Caesar, rotate_left};
