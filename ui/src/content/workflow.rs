#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub points: [&'static str; 4],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Integration {
    pub name: &'static str,
    pub description: &'static str,
}

pub static STEPS: [Step; 4] = [
    Step {
        icon: "⬆",
        title: "1. Input Your Text",
        description: "Simply paste or type the text you want to translate. Supports multiple file formats and bulk text processing.",
        points: ["Text input", "File upload", "Bulk processing", "Auto-detection"],
    },
    Step {
        icon: "⚡",
        title: "2. AI Analysis",
        description: "Our advanced AI analyzes grammar, context, idioms, and linguistic nuances for accurate translation.",
        points: [
            "Grammar analysis",
            "Context understanding",
            "Idiom detection",
            "Tone preservation",
        ],
    },
    Step {
        icon: "✔",
        title: "3. Smart Translation",
        description: "Get professional-quality translations with detailed analysis and suggestions for improvement.",
        points: [
            "Professional translation",
            "Multiple suggestions",
            "Confidence scores",
            "Cultural adaptation",
        ],
    },
    Step {
        icon: "⬇",
        title: "4. Export Results",
        description: "Download your translations in various formats or integrate directly into your workflow via API.",
        points: [
            "Multiple formats",
            "API integration",
            "Batch export",
            "Cloud storage",
        ],
    },
];

pub static INTEGRATIONS: [Integration; 4] = [
    Integration { name: "Websites", description: "Embed translation widget" },
    Integration { name: "Mobile Apps", description: "SDK for iOS & Android" },
    Integration { name: "Content Management", description: "WordPress, Drupal plugins" },
    Integration { name: "Business Tools", description: "Slack, Microsoft Teams" },
];
