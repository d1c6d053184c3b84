use super::Highlight;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainFeature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub points: &'static [&'static str],
    pub badge: &'static str,
}

pub static MAIN_FEATURES: [MainFeature; 3] = [
    MainFeature {
        icon: "🧠",
        title: "Advanced Linguistic Analysis",
        description: "Get comprehensive analysis of your text including grammar breakdown, tense detection, and structural insights.",
        points: &[
            "Grammar structure analysis",
            "Tense and mood detection",
            "Sentence component breakdown",
            "Linguistic pattern recognition",
        ],
        badge: "AI-Powered",
    },
    MainFeature {
        icon: "💬",
        title: "Idiom & Phrase Detection",
        description: "Understand cultural context with automatic detection and explanation of idioms, phrases, and expressions.",
        points: &[
            "Idiom identification",
            "Cultural context explanations",
            "Alternative expressions",
            "Regional variations",
        ],
        badge: "Cultural",
    },
    MainFeature {
        icon: "📖",
        title: "Word-Level Insights",
        description: "Deep dive into individual words with synonyms, antonyms, pronunciation guides, and usage examples.",
        points: &[
            "Synonyms and antonyms",
            "Part of speech identification",
            "Pronunciation guides",
            "Usage examples",
        ],
        badge: "Learning",
    },
];

pub static ADDITIONAL_FEATURES: [Highlight; 9] = [
    Highlight {
        icon: "🌐",
        title: "100+ Languages",
        description: "Support for over 100 languages with native-quality translations.",
    },
    Highlight {
        icon: "⚡",
        title: "Real-time Translation",
        description: "Get instant translations as you type with live analysis.",
    },
    Highlight {
        icon: "</>",
        title: "Developer API",
        description: "Integrate translation capabilities into your applications.",
    },
    Highlight {
        icon: "🎤",
        title: "Voice Input",
        description: "Speak your text and get instant translations with audio.",
    },
    Highlight {
        icon: "📋",
        title: "One-Click Copy",
        description: "Copy translations and analysis with a single click.",
    },
    Highlight {
        icon: "🕘",
        title: "Translation History",
        description: "Access your previous translations and analysis anytime.",
    },
    Highlight {
        icon: "🛡",
        title: "Privacy First",
        description: "Your translations are processed securely and never stored.",
    },
    Highlight {
        icon: "📱",
        title: "Mobile Optimized",
        description: "Perfect experience across all devices and screen sizes.",
    },
    Highlight {
        icon: "🎧",
        title: "Audio Pronunciation",
        description: "Listen to correct pronunciation in multiple accents.",
    },
];
