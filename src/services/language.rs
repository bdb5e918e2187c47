//! Language detection
//!
//! Classifies text by Unicode script membership. Pure and total: every
//! input, including the empty string, gets a tag.

use crate::models::LanguageTag;

/// Bengali Unicode block
pub fn is_bengali(c: char) -> bool {
    ('\u{0980}'..='\u{09FF}').contains(&c)
}

/// Bengali only ⇒ bn, Bengali plus other letters ⇒ mixed, otherwise en
pub fn detect_language(text: &str) -> LanguageTag {
    let mut has_bengali = false;
    let mut has_other_alpha = false;

    for c in text.chars() {
        if is_bengali(c) {
            has_bengali = true;
        } else if c.is_alphabetic() {
            has_other_alpha = true;
        }
        if has_bengali && has_other_alpha {
            return LanguageTag::Mixed;
        }
    }

    if has_bengali {
        LanguageTag::Bn
    } else {
        LanguageTag::En
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("হাসপাতাল কোথায়", LanguageTag::Bn)]
    #[case("আমার জ্বর ১০২ ডিগ্রি।", LanguageTag::Bn)]
    #[case("help me", LanguageTag::En)]
    #[case("Find Hospital", LanguageTag::En)]
    #[case("hospital কোথায়", LanguageTag::Mixed)]
    #[case("আমাকে help করো", LanguageTag::Mixed)]
    #[case("", LanguageTag::En)]
    #[case("123 !?", LanguageTag::En)]
    #[case("১২৩", LanguageTag::Bn)]
    fn test_detect_language(#[case] text: &str, #[case] expected: LanguageTag) {
        assert_eq!(detect_language(text), expected);
    }

    #[test]
    fn test_digits_do_not_make_text_mixed() {
        assert_eq!(detect_language("জ্বর 102"), LanguageTag::Bn);
    }

    #[test]
    fn test_block_bounds() {
        assert!(is_bengali('\u{0980}'));
        assert!(is_bengali('\u{09FF}'));
        assert!(!is_bengali('\u{0A00}'));
        assert!(!is_bengali('a'));
    }
}
