//! Fixed reply text, per language

use crate::models::{HealthFacility, LanguageTag, Sentiment};

pub fn help(language: LanguageTag) -> &'static str {
    language.pick(
        "আমি মন বন্ধু, আপনার স্বাস্থ্য সহায়ক। আপনি বলতে পারেন: \"স্বাস্থ্য টিপস\", \"হাসপাতাল কোথায়\", \"মন কেমন\" অথবা \"জরুরি সাহায্য\"। যেকোনো স্বাস্থ্য প্রশ্নও করতে পারেন।",
        "I'm Mon Bondhu, your health assistant. You can say \"health tips\", \"find hospital\", \"mood check\" or \"emergency\". You can also ask me any health question.",
        "Ami Mon Bondhu, apnar health assistant. Bolte paren: \"health tips দাও\", \"hospital কোথায়\", \"mood check করো\" ba \"emergency সাহায্য\". Je kono health question o korte paren.",
    )
}

pub fn mood_check(language: LanguageTag) -> &'static str {
    language.pick(
        "আজ আপনার মন কেমন আছে? কয়েকটি কথায় বলুন, অথবা মুড ট্র্যাকারে লিখে রাখুন।",
        "How are you feeling today? Tell me in a few words, or log it in the mood tracker.",
        "Aaj apnar mood kemon? Kichu kothay bolun, ba mood tracker e likhe rakhun.",
    )
}

pub fn generic_health_tip(language: LanguageTag) -> &'static str {
    language.pick(
        "প্রতিদিন অন্তত ৮ গ্লাস বিশুদ্ধ পানি পান করুন, খাবারের আগে সাবান দিয়ে হাত ধুয়ে নিন এবং রাতে ৭-৮ ঘণ্টা ঘুমান।",
        "Drink at least 8 glasses of clean water a day, wash your hands with soap before eating, and sleep 7-8 hours at night.",
        "Protidin 8 glass clean pani khan, khabar age soap diye haat dhuye nin, ar raate 7-8 ghonta ghumaan.",
    )
}

pub fn hospital_unavailable(language: LanguageTag) -> &'static str {
    language.pick(
        "দুঃখিত, এই মুহূর্তে কোনো হাসপাতালের তথ্য পাওয়া যায়নি। জরুরি প্রয়োজনে ৯৯৯ নম্বরে কল করুন।",
        "Sorry, no hospital information is available right now. In an emergency, call 999.",
        "Sorry, ekhon kono hospital er info available nei. Emergency hole 999 e call korun.",
    )
}

pub fn hospital_details(facility: &HealthFacility, language: LanguageTag) -> String {
    let mut text = match language {
        LanguageTag::Bn => format!("নিকটতম হাসপাতাল: {}, ঠিকানা: {}।", facility.name, facility.address),
        LanguageTag::En => format!("Nearest hospital: {}, {}.", facility.name, facility.address),
        LanguageTag::Mixed => format!("Nearest hospital: {}, thikana: {}.", facility.name, facility.address),
    };
    if !facility.contact.is_empty() {
        let label = language.pick("যোগাযোগ", "Contact", "Contact");
        text.push_str(&format!(" {}: {}", label, facility.contact));
    }
    text
}

pub fn sentiment_reply(sentiment: Sentiment, language: LanguageTag) -> &'static str {
    match sentiment {
        Sentiment::Positive => language.pick(
            "শুনে খুব ভালো লাগলো! যা আপনাকে ভালো রাখে তা চালিয়ে যান। 😊",
            "That's wonderful to hear! Keep doing what makes you feel good. 😊",
            "Shune khub bhalo laglo! Je jinish apnake bhalo rakhe, seta continue korun. 😊",
        ),
        Sentiment::Negative => language.pick(
            "আপনার এমন লাগছে শুনে দুঃখিত। আপনি একা নন। বিশ্বস্ত কারো সাথে কথা বলুন, অথবা যেকোনো সময় গোপনে সাহায্যের অনুরোধ পাঠাতে পারেন। 💙",
            "I'm sorry you're feeling this way. You're not alone. Talking to someone you trust can help, and you can send an anonymous help request anytime. 💙",
            "Apnar emon lagche shune kharap laglo. Apni eka non. Bissosto karo sathe kotha bolun, ba je kono somoy anonymous help request pathate paren. 💙",
        ),
        Sentiment::Neutral => language.pick(
            "জানানোর জন্য ধন্যবাদ। আজ নিজের জন্য একটু সময় রাখুন, একটু হাঁটুন বা কয়েকবার গভীর শ্বাস নিন। 🌿",
            "Thanks for sharing. Take a moment for yourself today, maybe a short walk or a few deep breaths. 🌿",
            "Share korar jonno thanks. Aaj nijer jonno ektu somoy rakhun, ektu hatun ba deep breath nin. 🌿",
        ),
    }
}

/// Text-to-speech friendly copy: pictographs and markdown marks removed
pub fn to_speech(message: &str) -> String {
    message
        .chars()
        .filter(|c| !is_pictograph(*c) && !matches!(c, '*' | '#' | '_' | '`'))
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_pictograph(c: char) -> bool {
    matches!(c,
        '\u{1F000}'..='\u{1FAFF}'
        | '\u{2600}'..='\u{27BF}'
        | '\u{2B00}'..='\u{2BFF}'
        | '\u{FE0F}')
}
