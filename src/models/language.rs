use serde::{Deserialize, Serialize};
use std::fmt;

/// Language of a piece of user text
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum LanguageTag {
    /// Bengali script only
    Bn,
    /// No Bengali script
    #[default]
    En,
    /// Bengali mixed with Latin (or other) letters
    Mixed,
}

impl LanguageTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageTag::Bn => "bn",
            LanguageTag::En => "en",
            LanguageTag::Mixed => "mixed",
        }
    }

    /// Picks the variant of a per-language text triple
    pub fn pick<'a>(&self, bn: &'a str, en: &'a str, mixed: &'a str) -> &'a str {
        match self {
            LanguageTag::Bn => bn,
            LanguageTag::En => en,
            LanguageTag::Mixed => mixed,
        }
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
