//! Paragraph languages
//!
//! The line parser tracks which language a paragraph is written in and hands it to
//! the tokenizer with every word. A word starting with `@` switches the language for
//! the word that follows it.

use crate::translit::error::TranslitError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ParagraphLanguage {
    /// Akkadian
    Akk,
    /// Sumerian
    Sum,
    /// Luwian
    Luw,
    /// Palaic
    Pal,
    /// Hurrian
    Hur,
    /// Hattic
    Hat,
    /// Hittite
    #[default]
    Hit,
    /// Unidentified
    Ign,
}

impl ParagraphLanguage {
    pub const ALL: [ParagraphLanguage; 8] = [
        ParagraphLanguage::Akk,
        ParagraphLanguage::Sum,
        ParagraphLanguage::Luw,
        ParagraphLanguage::Pal,
        ParagraphLanguage::Hur,
        ParagraphLanguage::Hat,
        ParagraphLanguage::Hit,
        ParagraphLanguage::Ign,
    ];

    pub fn code(self) -> &'static str {
        match self {
            ParagraphLanguage::Akk => "Akk",
            ParagraphLanguage::Sum => "Sum",
            ParagraphLanguage::Luw => "Luw",
            ParagraphLanguage::Pal => "Pal",
            ParagraphLanguage::Hur => "Hur",
            ParagraphLanguage::Hat => "Hat",
            ParagraphLanguage::Hit => "Hit",
            ParagraphLanguage::Ign => "Ign",
        }
    }
}

impl fmt::Display for ParagraphLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for ParagraphLanguage {
    type Err = TranslitError;

    /// Codes are matched case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Self::ALL
            .into_iter()
            .find(|language| language.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| TranslitError::UnknownLanguage(code.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_hittite() {
        assert_eq!(ParagraphLanguage::default(), ParagraphLanguage::Hit);
    }

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!("Akk".parse::<ParagraphLanguage>().unwrap(), ParagraphLanguage::Akk);
        assert_eq!("sum".parse::<ParagraphLanguage>().unwrap(), ParagraphLanguage::Sum);
        assert_eq!("HUR".parse::<ParagraphLanguage>().unwrap(), ParagraphLanguage::Hur);
    }

    #[test]
    fn rejects_unknown_codes() {
        assert!("Xyz".parse::<ParagraphLanguage>().is_err());
        assert!("".parse::<ParagraphLanguage>().is_err());
    }

    #[test]
    fn display_round_trips() {
        for language in ParagraphLanguage::ALL {
            assert_eq!(language.to_string().parse::<ParagraphLanguage>().unwrap(), language);
        }
    }
}
