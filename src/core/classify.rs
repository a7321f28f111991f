//! Single-pass byte classification and counting
//!
//! Accepted bytes are the printable ASCII ranges `!`..=`/`, `:`..=`@` and
//! `[`..=`~`. Anything else aborts classification of the whole buffer.

use crate::core::error::{CharFreqError, Result};
use crate::core::model::{CharacterClass, FrequencyTable};

/// Bytes counted as symbols rather than punctuation
const SYMBOLS: &[u8] = b"$+<=>^`|~";

/// Whether `byte` lies in one of the accepted ranges
pub fn is_accepted(byte: u8) -> bool {
    matches!(byte, b'!'..=b'/' | b':'..=b'@' | b'['..=b'~')
}

/// Class of an accepted byte, or `None` when the byte is rejected
pub fn classify_byte(byte: u8) -> Option<CharacterClass> {
    if !is_accepted(byte) {
        return None;
    }

    if byte.is_ascii_lowercase() {
        Some(CharacterClass::Letter)
    } else if SYMBOLS.contains(&byte) {
        Some(CharacterClass::Symbol)
    } else {
        Some(CharacterClass::Punctuation)
    }
}

/// The three frequency tables built from one content buffer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharTables {
    pub letters: FrequencyTable,
    pub punctuation: FrequencyTable,
    pub symbols: FrequencyTable,
}

impl CharTables {
    pub fn get(&self, class: CharacterClass) -> &FrequencyTable {
        match class {
            CharacterClass::Letter => &self.letters,
            CharacterClass::Punctuation => &self.punctuation,
            CharacterClass::Symbol => &self.symbols,
        }
    }

    fn get_mut(&mut self, class: CharacterClass) -> &mut FrequencyTable {
        match class {
            CharacterClass::Letter => &mut self.letters,
            CharacterClass::Punctuation => &mut self.punctuation,
            CharacterClass::Symbol => &mut self.symbols,
        }
    }
}

/// Count every byte of `content` into its class table.
///
/// Fails on empty content, on the first rejected byte, and when any of the
/// three tables ends up empty.
pub fn classify(content: &[u8]) -> Result<CharTables> {
    if content.is_empty() {
        return Err(CharFreqError::Content("file is empty".to_string()));
    }

    let mut tables = CharTables::default();
    for (offset, &byte) in content.iter().enumerate() {
        let class = classify_byte(byte).ok_or_else(|| {
            CharFreqError::Content(format!(
                "unsupported byte 0x{:02x} at offset {}",
                byte, offset
            ))
        })?;
        tables.get_mut(class).record(byte);
    }

    if let Some(missing) = CharacterClass::ALL
        .into_iter()
        .find(|class| tables.get(*class).is_empty())
    {
        return Err(CharFreqError::Content(format!(
            "file contains no {} characters",
            missing
        )));
    }

    Ok(tables)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content_err(content: &[u8]) -> String {
        match classify(content) {
            Err(CharFreqError::Content(msg)) => msg,
            other => panic!("expected content error, got {:?}", other),
        }
    }

    #[test]
    fn test_accepted_ranges() {
        for byte in 0u8..=255 {
            let expected = (b'!'..=b'/').contains(&byte)
                || (b':'..=b'@').contains(&byte)
                || (b'['..=b'~').contains(&byte);
            assert_eq!(is_accepted(byte), expected, "byte 0x{:02x}", byte);
        }
    }

    #[test]
    fn test_classify_byte() {
        assert_eq!(classify_byte(b'a'), Some(CharacterClass::Letter));
        assert_eq!(classify_byte(b'z'), Some(CharacterClass::Letter));
        for &sym in SYMBOLS {
            assert_eq!(classify_byte(sym), Some(CharacterClass::Symbol));
        }
        for &punct in b"!\"#%&'()*,-./:;?@[\\]_{}" {
            assert_eq!(classify_byte(punct), Some(CharacterClass::Punctuation));
        }
        for &rejected in b"AZ09 \t\n\r\x7f" {
            assert_eq!(classify_byte(rejected), None);
        }
        assert_eq!(classify_byte(0xc3), None);
    }

    #[test]
    fn test_classify_counts_in_first_seen_order() {
        let tables = classify(b"ba!b<?!<<a").unwrap();
        assert_eq!(
            tables.letters.iter().collect::<Vec<_>>(),
            vec![(b'b', 2), (b'a', 2)]
        );
        assert_eq!(
            tables.punctuation.iter().collect::<Vec<_>>(),
            vec![(b'!', 2), (b'?', 1)]
        );
        assert_eq!(tables.symbols.iter().collect::<Vec<_>>(), vec![(b'<', 3)]);
    }

    #[test]
    fn test_tables_are_disjoint_with_positive_counts() {
        let tables = classify(b"hello,world!$$^~`|{}[]<>==+").unwrap();
        let all: Vec<_> = CharacterClass::ALL
            .into_iter()
            .flat_map(|class| tables.get(class).iter().collect::<Vec<_>>())
            .collect();
        for (byte, count) in &all {
            assert!(*count >= 1);
            assert_eq!(all.iter().filter(|(b, _)| b == byte).count(), 1);
        }
    }

    #[test]
    fn test_classify_is_idempotent() {
        let content = b"zz!?a$+%%b";
        assert_eq!(classify(content).unwrap(), classify(content).unwrap());
    }

    #[test]
    fn test_empty_content_is_rejected() {
        assert_eq!(content_err(b""), "file is empty");
    }

    #[test]
    fn test_rejected_byte_at_any_position() {
        let valid = b"a!$b?+";
        for position in 0..=valid.len() {
            for &bad in b" \n0A\x00\xff" {
                let mut content = valid.to_vec();
                content.insert(position, bad);
                let msg = content_err(&content);
                assert!(msg.contains(&format!("offset {}", position)), "{}", msg);
            }
        }
    }

    #[test]
    fn test_only_digits_and_whitespace_is_rejected() {
        assert!(content_err(b"0123 456\n").starts_with("unsupported byte"));
    }

    #[test]
    fn test_missing_class_is_rejected() {
        assert_eq!(content_err(b"abc$$"), "file contains no punctuation characters");
        assert_eq!(content_err(b"!!$$"), "file contains no letter characters");
        assert_eq!(content_err(b"ab!ba??"), "file contains no symbol characters");
    }

    #[test]
    fn test_trailing_newline_is_rejected() {
        assert!(classify(b"a!$\n").is_err());
    }
}
