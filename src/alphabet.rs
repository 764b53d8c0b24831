//! Encoding alphabets for the Caesar cipher family.
//!
//! An [`Alphabet`] is an ordered, immutable sequence of characters indexed by
//! character position (never by byte offset), so non-ASCII scripts such as
//! Greek, Russian or Elder Futhark runes work the same as plain English.
//! Uniqueness and trimming of the character sequence are the caller's
//! responsibility and are not re-validated here.

use std::fmt;

use crate::error::CaesarError;

/// English reference alphabet (26 letters).
pub const ALPHA_EN: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Spanish alphabet with Ñ and accented vowels.
pub const ALPHA_ES: &str = "ABCDEFGHIJKLMNÑOPQRSTUVWXYZÁÉÍÓÚ";
/// Czech alphabet with háček and accented letters.
pub const ALPHA_CZ: &str = "ABCČDĎEFGHIJKLMNŇOPQRŘSŠTŤUVWXYÝZŽÁÉÍÓÚĚŮ";
/// German alphabet with umlauts and capital sharp S.
pub const ALPHA_DE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZÄÖÜẞ";
/// Italian alphabet (21 letters) with accented vowels.
pub const ALPHA_IT: &str = "ABCDEFGHILMNOPQRSTUVZÉÓÀÈÌÒÙ";
/// Portuguese alphabet with cedilla and accented vowels.
pub const ALPHA_PT: &str = "ABCÇDEFGHIJKLMNOPQRSTUVWXYZÁÉÍÓÚÀÂÊÔÃÕ";
/// Greek alphabet (24 letters).
pub const ALPHA_GR: &str = "ΑΒΓΔΕΖΗΘΙΚΛΜΝΞΟΠΡΣΤΥΦΧΨΩ";
/// Russian alphabet (33 letters).
pub const ALPHA_RU: &str = "АБВГДЕËЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯ";
/// Punctuation/digits symbol alphabet (not case-foldable).
pub const ALPHA_PU: &str = "!\"#$%&'()*+,-./ 0123456789:;<=>?";
/// Elder Futhark runes mapped from the 26 Latin letters.
pub const ALPHA_RUNES: &str = "ᚫᛒᚳᛞᛖᚠᚷᚻᛁᛃᛱᛚᛗᚾᚩᛈᛩᚱᛋᛏᚢᚡᚹᛪᛦᛎ";

/// Spanish letters trimmed to pair with a same-length symbol disk.
pub const ALPHA_ES_DUAL: &str = "ABCDEFGHIJKLMNÑOPQRSTUVWXYZ";
/// Symbol disk matching the length of [`ALPHA_ES_DUAL`].
pub const ALPHA_PU_DUAL_ES: &str = "!\"#$%&()*+,-./ 0123456789=?";
/// Symbol disk matching the length of [`ALPHA_EN`].
pub const ALPHA_PU_DUAL_EN: &str = "!\"#$%&()*+,-./ 0123456789?";

/// Case handling of an alphabet: forced-upper, forced-lower, or agnostic.
///
/// Lookups fold the probe character to the alphabet's case before matching;
/// agnostic alphabets match exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseMode {
    /// All alphabet characters are uppercase; lowercase probes are folded up.
    Upper,
    /// All alphabet characters are lowercase; uppercase probes are folded down.
    Lower,
    /// Mixed or unknown case; probes are matched exactly.
    Agnostic,
}

/// An ordered sequence of characters used as a substitution-cipher disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    name: String,
    chars: Vec<char>,
    case_mode: CaseMode,
    symbols_only: bool,
}

/// Single-character uppercase fold.
///
/// Multi-character expansions (such as `ß` -> `SS`) are suppressed so that
/// one input character always maps to one output character, matching the
/// positional substitution model.
pub(crate) fn fold_upper(c: char) -> char {
    let mut it = c.to_uppercase();
    match (it.next(), it.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Single-character lowercase fold. See [`fold_upper`].
pub(crate) fn fold_lower(c: char) -> char {
    let mut it = c.to_lowercase();
    match (it.next(), it.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

impl Alphabet {
    /// Creates a cased alphabet: the given string is folded to uppercase and
    /// lookups fold lowercase probes before matching.
    pub fn cased(alphabet: &str) -> Self {
        Alphabet {
            name: String::new(),
            chars: alphabet.chars().map(fold_upper).collect(),
            case_mode: CaseMode::Upper,
            symbols_only: false,
        }
    }

    /// Creates an alphabet without case conversion. Lookups are exact.
    pub fn uncased(alphabet: &str) -> Self {
        Alphabet {
            name: String::new(),
            chars: alphabet.chars().collect(),
            case_mode: CaseMode::Agnostic,
            symbols_only: false,
        }
    }

    /// Creates a symbols/punctuation-only alphabet without letters that can
    /// be upper/lowercased. Case folding is disabled for lookups.
    pub fn symbols(alphabet: &str) -> Self {
        Alphabet {
            name: String::new(),
            chars: alphabet.chars().collect(),
            case_mode: CaseMode::Lower,
            symbols_only: true,
        }
    }

    /// Looks up a named preset alphabet from the built-in catalog.
    ///
    /// Recognized names: `English`, `Spanish`, `Czech`, `German`, `Italian`,
    /// `Portuguese`, `Greek`, `Russian`, `Punctuation`, `Runes`,
    /// `SpanishDual`, `PunctuationDualEs`, `PunctuationDualEn`.
    pub fn preset(name: &str) -> Option<Self> {
        let alpha = match name {
            "English" => Self::cased(ALPHA_EN),
            "Spanish" => Self::cased(ALPHA_ES),
            "Czech" => Self::cased(ALPHA_CZ),
            "German" => Self::cased(ALPHA_DE),
            "Italian" => Self::cased(ALPHA_IT),
            "Portuguese" => Self::cased(ALPHA_PT),
            "Greek" => Self::cased(ALPHA_GR),
            "Russian" => Self::cased(ALPHA_RU),
            "Punctuation" => Self::symbols(ALPHA_PU),
            "Runes" => Self::uncased(ALPHA_RUNES),
            "SpanishDual" => Self::cased(ALPHA_ES_DUAL),
            "PunctuationDualEs" => Self::symbols(ALPHA_PU_DUAL_ES),
            "PunctuationDualEn" => Self::symbols(ALPHA_PU_DUAL_EN),
            _ => return None,
        };
        Some(Self {
            name: name.to_string(),
            ..alpha
        })
    }

    /// The preset name, or an empty string for ad-hoc alphabets.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The length of the alphabet in characters (not bytes).
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether the alphabet has no characters.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Whether the alphabet contains characters beyond single-byte ASCII.
    pub fn is_multibyte(&self) -> bool {
        self.chars.iter().any(|c| c.len_utf8() > 1)
    }

    /// Returns the character at the given zero-based index.
    ///
    /// # Errors
    /// [`CaesarError::IndexOutOfRange`] when `index >= len()`.
    pub fn character(&self, index: usize) -> Result<char, CaesarError> {
        self.chars
            .get(index)
            .copied()
            .ok_or(CaesarError::IndexOutOfRange {
                index,
                length: self.chars.len(),
            })
    }

    /// Finds the index of the exact character (case-sensitive).
    pub fn find_exact(&self, c: char) -> Option<usize> {
        self.chars.iter().position(|&a| a == c)
    }

    /// Finds the index of the character, folding the probe to the alphabet's
    /// case first. Symbols-only alphabets match exactly.
    pub fn find(&self, c: char) -> Option<usize> {
        self.find_exact(self.fold(c))
    }

    /// Folds a probe character to this alphabet's case.
    pub(crate) fn fold(&self, c: char) -> char {
        if self.symbols_only {
            return c;
        }
        match self.case_mode {
            CaseMode::Upper if c.is_lowercase() => fold_upper(c),
            CaseMode::Lower if c.is_uppercase() => fold_lower(c),
            _ => c,
        }
    }

    /// The character at index 0, used as a visual placeholder before a key
    /// has been chosen.
    pub fn first_char(&self) -> char {
        self.chars[0]
    }

    /// Whether this is a forced-uppercase alphabet.
    pub fn is_upper(&self) -> bool {
        self.case_mode == CaseMode::Upper
    }

    /// Whether this is a forced-lowercase (or symbols) alphabet.
    pub fn is_lower(&self) -> bool {
        self.case_mode == CaseMode::Lower
    }

    /// Whether case folding is disabled for lookups.
    pub fn is_symbols_only(&self) -> bool {
        self.symbols_only
    }

    /// The characters as a slice, in disk order.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// Transliterates a Latin string into Elder Futhark runes.
///
/// Letters A-Z map positionally onto the rune table; any other character is
/// kept as-is.
pub fn rune_string(latin: &str) -> String {
    const LOOKUP_STD: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    let runes: Vec<char> = ALPHA_RUNES.chars().collect();

    latin
        .chars()
        .map(fold_upper)
        .map(|c| match LOOKUP_STD.chars().position(|l| l == c) {
            Some(at) => runes[at],
            None => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_is_character_count() {
        let greek = Alphabet::cased(ALPHA_GR);
        assert_eq!(greek.len(), 24);
        assert!(greek.is_multibyte());

        let english = Alphabet::cased(ALPHA_EN);
        assert_eq!(english.len(), 26);
        assert!(!english.is_multibyte());
    }

    #[test]
    fn test_character_at_index() {
        let alpha = Alphabet::cased(ALPHA_EN);
        assert_eq!(alpha.character(0), Ok('A'));
        assert_eq!(alpha.character(25), Ok('Z'));
        assert_eq!(
            alpha.character(26),
            Err(CaesarError::IndexOutOfRange {
                index: 26,
                length: 26
            })
        );
    }

    #[test]
    fn test_cased_constructor_uppercases() {
        let alpha = Alphabet::cased("abc");
        assert_eq!(alpha.to_string(), "ABC");
        assert!(alpha.is_upper());
    }

    #[test]
    fn test_find_folds_case_for_cased_alphabet() {
        let alpha = Alphabet::cased(ALPHA_EN);
        assert_eq!(alpha.find('h'), Some(7));
        assert_eq!(alpha.find('H'), Some(7));
        assert_eq!(alpha.find_exact('h'), None);
    }

    #[test]
    fn test_find_exact_for_symbols_alphabet() {
        let punct = Alphabet::symbols(ALPHA_PU);
        assert_eq!(punct.find('!'), Some(0));
        assert_eq!(punct.find('?'), Some(punct.len() - 1));
        assert_eq!(punct.find('a'), None);
        assert!(punct.is_symbols_only());
    }

    #[test]
    fn test_find_multibyte() {
        let spanish = Alphabet::cased(ALPHA_ES);
        assert_eq!(spanish.find('ñ'), spanish.find('Ñ'));
        assert!(spanish.find('Ñ').is_some());
    }

    #[test]
    fn test_first_char() {
        assert_eq!(Alphabet::cased(ALPHA_EN).first_char(), 'A');
        assert_eq!(Alphabet::cased(ALPHA_GR).first_char(), 'Α');
    }

    #[test]
    fn test_preset_catalog() {
        let en = Alphabet::preset("English").unwrap();
        assert_eq!(en.name(), "English");
        assert_eq!(en.len(), 26);

        assert!(Alphabet::preset("Russian").is_some());
        assert!(Alphabet::preset("Klingon").is_none());
    }

    #[test]
    fn test_dual_disks_match_lengths() {
        let es = Alphabet::preset("SpanishDual").unwrap();
        let pu = Alphabet::preset("PunctuationDualEs").unwrap();
        assert_eq!(es.len(), pu.len());

        let en = Alphabet::preset("English").unwrap();
        let pu_en = Alphabet::preset("PunctuationDualEn").unwrap();
        assert_eq!(en.len(), pu_en.len());
    }

    #[test]
    fn test_rune_string_transliteration() {
        let runes = rune_string("AZ");
        let table: Vec<char> = ALPHA_RUNES.chars().collect();
        let got: Vec<char> = runes.chars().collect();
        assert_eq!(got, vec![table[0], table[25]]);
    }

    #[test]
    fn test_rune_string_passthrough() {
        assert_eq!(rune_string("1 2"), "1 2");
    }
}
