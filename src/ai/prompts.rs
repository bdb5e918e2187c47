//! Prompt and fallback text, per language

use crate::models::LanguageTag;
use crate::models::facility::HealthFacility;

/// Health assistant framing; unrelated topics are declined
pub fn system_prompt(language: LanguageTag) -> &'static str {
    match language {
        LanguageTag::Bn => {
            "তুমি একজন বাংলাভাষী স্বাস্থ্য সহায়ক। তুমি মন বন্ধু অ্যাপের জন্য কাজ করছ। \
ব্যবহারকারীদের বন্ধুত্বপূর্ণ, সহানুভূতিশীল এবং সহজ বাংলায় উত্তর দাও।\n\
গুরুত্বপূর্ণ:\n\
- খুব সংক্ষিপ্ত এবং সহজ বাংলায় উত্তর দাও\n\
- শুধুমাত্র স্বাস্থ্য সম্পর্কিত তথ্য দাও\n\
- যদি বিষয় স্বাস্থ্য সম্পর্কিত না হয়, ভদ্রভাবে বলো যে তুমি শুধু স্বাস্থ্য বিষয়ে সাহায্য করতে পারো\n\
- ব্যবহারকারীর অনুভূতি বোঝার চেষ্টা করো\n\
- সর্বদা উপকারী এবং নির্ভুল তথ্য দাও"
        }
        LanguageTag::En => {
            "You are a Bengali-speaking health assistant. You work for the Mon Bondhu app. \
Respond to users in friendly, empathetic, and simple English.\n\
Important:\n\
- Keep responses brief and simple\n\
- Provide only health-related information\n\
- If the topic is not health-related, politely say you can only help with health matters\n\
- Try to understand the user's feelings\n\
- Always provide helpful and accurate information"
        }
        LanguageTag::Mixed => {
            "You are a health assistant for Bengali users who mix languages. \
Respond in simple Banglish (Bangla + English) that's easy to understand.\n\
Use: simple Bengali words with some English mixed in naturally.\n\
Keep it: short, friendly, and helpful.\n\
Focus: only health-related topics."
        }
    }
}

/// Reply used when a general AI query fails
pub fn fallback_response(language: LanguageTag) -> &'static str {
    language.pick(
        "দুঃখিত, এখনই উত্তর দিতে পারছি না। অনুগ্রহ করে কিছুক্ষণ পর আবার চেষ্টা করুন।",
        "Sorry, I cannot respond right now. Please try again later.",
        "Sorry, ami ekhon answer dite parchi na. Please kichukkhon por abar try korun.",
    )
}

/// Reply used when emergency advice cannot be generated
pub fn emergency_fallback(language: LanguageTag) -> &'static str {
    language.pick(
        "অনুগ্রহ করে এখনই ডাক্তারের সাথে যোগাযোগ করুন। জরুরি প্রয়োজনে ৯৯৯ নম্বরে কল করুন।",
        "Please contact a doctor immediately. In an emergency, call 999.",
        "Please ekhoni doctor er sathe contact korun. Emergency hole 999 e call korun.",
    )
}

pub fn emergency_prompt(symptoms: &str, language: LanguageTag) -> String {
    format!(
        "User reports: \"{}\"\nLanguage: {}\n\n\
Provide brief emergency advice. If it's serious, recommend seeing a doctor immediately.\n\
Keep response under 100 words.",
        symptoms, language
    )
}

pub fn sentiment_prompt(text: &str, language: LanguageTag) -> String {
    format!(
        "Analyze the sentiment of this {} text and respond with ONLY one word: \
\"positive\", \"negative\", or \"neutral\".\n\nText: \"{}\"",
        language, text
    )
}

pub fn tip_rephrase_prompt(tip: &str, language: LanguageTag) -> String {
    let instruction = language.pick(
        "নিচের স্বাস্থ্য পরামর্শটি দুই-তিন বাক্যে সহজ ও উষ্ণ বাংলায় বলো:",
        "Share the following health tip warmly in two or three simple sentences:",
        "Niche deya health tip ta simple Banglish e dui-tin line e bolo:",
    );
    format!("{}\n\n{}", instruction, tip)
}

pub fn hospital_prompt(facility: &HealthFacility, language: LanguageTag) -> String {
    let instruction = language.pick(
        "ব্যবহারকারী নিকটতম হাসপাতাল খুঁজছেন। নিচের তথ্য দিয়ে সংক্ষেপে জানাও:",
        "The user is looking for a hospital. Briefly tell them about this one:",
        "User hospital khujchen. Ei info diye short e janao:",
    );
    format!(
        "{}\nName: {}\nAddress: {}\nUpazila: {}\nContact: {}\nHours: {}",
        instruction,
        facility.name,
        facility.address,
        facility.upazila,
        facility.contact,
        facility.hours
    )
}
