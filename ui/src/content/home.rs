use super::{Highlight, Stat};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub content: &'static str,
    pub rating: u8,
    pub avatar: &'static str,
}

pub static FEATURES: [Highlight; 4] = [
    Highlight {
        icon: "🧠",
        title: "AI-Powered Analysis",
        description: "Advanced linguistic analysis with grammar breakdown, tense detection, and idiom recognition.",
    },
    Highlight {
        icon: "⚡",
        title: "Lightning Fast",
        description: "Get instant translations with comprehensive analysis in milliseconds.",
    },
    Highlight {
        icon: "🌐",
        title: "100+ Languages",
        description: "Support for over 100 languages with native speaker quality translations.",
    },
    Highlight {
        icon: "</>",
        title: "Developer API",
        description: "Integrate powerful translation capabilities into your applications with our RESTful API.",
    },
];

pub static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Sarah Chen",
        role: "Content Manager",
        company: "TechCorp",
        content: "TranslatePro has revolutionized our multilingual content strategy. The grammar analysis helps our team understand context better.",
        rating: 5,
        avatar: "SC",
    },
    Testimonial {
        name: "Marcus Rodriguez",
        role: "Developer",
        company: "StartupXYZ",
        content: "The API is incredibly easy to integrate. We built our entire translation feature in just a few hours.",
        rating: 5,
        avatar: "MR",
    },
    Testimonial {
        name: "Dr. Elena Vasquez",
        role: "Language Professor",
        company: "University of Languages",
        content: "The detailed linguistic analysis makes this perfect for language learning. My students love the synonym and antonym features.",
        rating: 5,
        avatar: "EV",
    },
];

pub static STATS: [Stat; 4] = [
    Stat { label: "Active Users", value: "50K+" },
    Stat { label: "Languages Supported", value: "100+" },
    Stat { label: "Translations Daily", value: "1M+" },
    Stat { label: "API Requests", value: "10M+" },
];

/// Static preview shown in the home page demo card.
pub const DEMO_SAMPLE_INPUT: &str = "Hello, how are you today?";
pub const DEMO_SAMPLE_OUTPUT: &str = "Hola, ¿cómo estás hoy?";
pub static DEMO_SAMPLE_TAGS: [&str; 2] = ["Detected: Greeting + Question", "Tense: Present Simple"];
