//! Key schedule display records.

use std::fmt;

use serde::Serialize;

/// A key schedule is the ordered list of keys a sequencer emits.
pub type KeySchedule = Vec<KeyScheduleItem>;

/// One substitution cipher key of a schedule, enriched for display: the key
/// shift, its alphabet character, the rotated tabula and an annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyScheduleItem {
    #[serde(rename = "keyShift")]
    pub key_shift: i32,
    #[serde(rename = "keyChar")]
    pub key_char: char,
    #[serde(rename = "comment", skip_serializing_if = "String::is_empty")]
    pub comment: String,
    #[serde(rename = "tabula", skip_serializing_if = "String::is_empty")]
    pub tabula: String,
}

impl fmt::Display for KeyScheduleItem {
    /// Displays the schedule item on a single line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02} {} {} ({})",
            self.key_shift, self.key_char, self.tabula, self.comment
        )
    }
}
