//! Intent matching
//!
//! One ordered rule list drives matching: exact phrases for the detected
//! language first, then keyword rules in list order, then `Unknown`.

use crate::models::{Intent, LanguageTag};

/// How a rule compares against normalized text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Whole-text match, only for the rule's language
    Exact(&'static str),
    /// Substring match, any language
    Keyword(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct IntentRule {
    pub language: LanguageTag,
    pub pattern: Pattern,
    pub intent: Intent,
}

const fn exact(language: LanguageTag, phrase: &'static str, intent: Intent) -> IntentRule {
    IntentRule {
        language,
        pattern: Pattern::Exact(phrase),
        intent,
    }
}

const fn keyword(language: LanguageTag, word: &'static str, intent: Intent) -> IntentRule {
    IntentRule {
        language,
        pattern: Pattern::Keyword(word),
        intent,
    }
}

use Intent::*;
use LanguageTag::{Bn, En, Mixed};

/// Canonical rule set, in priority order
pub const DEFAULT_RULES: &[IntentRule] = &[
    // English phrases
    exact(En, "help", Help),
    exact(En, "help me", Help),
    exact(En, "what can you do", Help),
    exact(En, "show health info", ShowHealthTip),
    exact(En, "show health tips", ShowHealthTip),
    exact(En, "health tips", ShowHealthTip),
    exact(En, "health tip", ShowHealthTip),
    exact(En, "give me a health tip", ShowHealthTip),
    exact(En, "find hospital", FindHospital),
    exact(En, "find a hospital", FindHospital),
    exact(En, "where is the hospital", FindHospital),
    exact(En, "nearest hospital", FindHospital),
    exact(En, "mood check", MoodCheck),
    exact(En, "check my mood", MoodCheck),
    exact(En, "mood tracker", MoodCheck),
    exact(En, "emergency", Emergency),
    exact(En, "i need a doctor", Emergency),
    exact(En, "call ambulance", Emergency),
    // Bengali phrases
    exact(Bn, "সাহায্য", Help),
    exact(Bn, "সাহায্য করো", Help),
    exact(Bn, "সাহায্য করুন", Help),
    exact(Bn, "আমাকে সাহায্য করো", Help),
    exact(Bn, "স্বাস্থ্য টিপস", ShowHealthTip),
    exact(Bn, "স্বাস্থ্য তথ্য দেখাও", ShowHealthTip),
    exact(Bn, "স্বাস্থ্য পরামর্শ", ShowHealthTip),
    exact(Bn, "হাসপাতাল কোথায়", FindHospital),
    exact(Bn, "হাসপাতাল খুঁজুন", FindHospital),
    exact(Bn, "কাছের হাসপাতাল", FindHospital),
    exact(Bn, "মন কেমন", MoodCheck),
    exact(Bn, "মুড চেক", MoodCheck),
    exact(Bn, "জরুরি", Emergency),
    exact(Bn, "জরুরি সাহায্য", Emergency),
    exact(Bn, "অ্যাম্বুলেন্স ডাকো", Emergency),
    // Mixed phrases
    exact(Mixed, "help করো", Help),
    exact(Mixed, "help করুন", Help),
    exact(Mixed, "আমাকে help করো", Help),
    exact(Mixed, "health tips দাও", ShowHealthTip),
    exact(Mixed, "health tips দেখাও", ShowHealthTip),
    exact(Mixed, "health info দেখাও", ShowHealthTip),
    exact(Mixed, "hospital কোথায়", FindHospital),
    exact(Mixed, "hospital খুঁজুন", FindHospital),
    exact(Mixed, "nearest hospital কোথায়", FindHospital),
    exact(Mixed, "mood check করো", MoodCheck),
    exact(Mixed, "mood কেমন", MoodCheck),
    exact(Mixed, "emergency সাহায্য", Emergency),
    exact(Mixed, "ambulance ডাকো", Emergency),
    // Keywords, most urgent first
    keyword(En, "emergency", Emergency),
    keyword(En, "ambulance", Emergency),
    keyword(Bn, "জরুরি", Emergency),
    keyword(Bn, "অ্যাম্বুলেন্স", Emergency),
    keyword(En, "hospital", FindHospital),
    keyword(En, "clinic", FindHospital),
    keyword(Bn, "হাসপাতাল", FindHospital),
    keyword(Bn, "ক্লিনিক", FindHospital),
    keyword(En, "health tip", ShowHealthTip),
    keyword(Bn, "টিপস", ShowHealthTip),
    keyword(En, "mood", MoodCheck),
    keyword(Bn, "মন খারাপ", MoodCheck),
];

/// Lower-case, trim, collapse whitespace, drop trailing sentence punctuation
pub fn normalize(text: &str) -> String {
    let collapsed = text
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    collapsed
        .trim_end_matches(['?', '!', '.', ',', '।'])
        .trim_end()
        .to_string()
}

/// Maps command text to an intent
#[derive(Debug, Clone)]
pub struct IntentMatcher {
    rules: Vec<IntentRule>,
}

impl Default for IntentMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_RULES.to_vec())
    }
}

impl IntentMatcher {
    pub fn new(rules: Vec<IntentRule>) -> Self {
        Self { rules }
    }

    pub fn match_intent(&self, text: &str, language: LanguageTag) -> Intent {
        let normalized = normalize(text);
        if normalized.is_empty() {
            return Intent::Unknown;
        }

        let exact_hit = self.rules.iter().find(|rule| {
            rule.language == language
                && matches!(rule.pattern, Pattern::Exact(phrase) if phrase == normalized)
        });
        if let Some(rule) = exact_hit {
            return rule.intent;
        }

        self.rules
            .iter()
            .find(|rule| matches!(rule.pattern, Pattern::Keyword(word) if normalized.contains(word)))
            .map(|rule| rule.intent)
            .unwrap_or(Intent::Unknown)
    }
}
