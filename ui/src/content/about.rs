use super::Highlight;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub avatar: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestone {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static VALUES: [Highlight; 4] = [
    Highlight {
        icon: "🧠",
        title: "Innovation",
        description: "We leverage cutting-edge AI to provide the most accurate and insightful translations.",
    },
    Highlight {
        icon: "🌐",
        title: "Accessibility",
        description: "Breaking down language barriers to make communication accessible to everyone worldwide.",
    },
    Highlight {
        icon: "👥",
        title: "Community",
        description: "Building a global community of learners, professionals, and language enthusiasts.",
    },
    Highlight {
        icon: "♥",
        title: "Quality",
        description: "Committed to delivering the highest quality translations with comprehensive analysis.",
    },
];

pub static TEAM: [TeamMember; 4] = [
    TeamMember {
        name: "Dr. Sarah Chen",
        role: "CEO & Co-Founder",
        bio: "Former Google Translate engineer with a PhD in Computational Linguistics from Stanford.",
        avatar: "SC",
    },
    TeamMember {
        name: "Marcus Rodriguez",
        role: "CTO & Co-Founder",
        bio: "Ex-Microsoft Azure architect specializing in scalable AI systems and natural language processing.",
        avatar: "MR",
    },
    TeamMember {
        name: "Dr. Elena Vasquez",
        role: "Head of Linguistics",
        bio: "Polyglot linguist with 15+ years experience in morphological analysis and syntax parsing.",
        avatar: "EV",
    },
    TeamMember {
        name: "James Thompson",
        role: "VP of Product",
        bio: "Product strategist focused on user experience and language learning technologies.",
        avatar: "JT",
    },
];

pub static MILESTONES: [Milestone; 5] = [
    Milestone {
        year: "2020",
        title: "Founded",
        description: "TranslatePro was founded with a vision to revolutionize translation technology.",
    },
    Milestone {
        year: "2021",
        title: "AI Engine Launch",
        description: "Launched our proprietary AI engine with advanced linguistic analysis capabilities.",
    },
    Milestone {
        year: "2022",
        title: "100K Users",
        description: "Reached 100,000 active users and expanded to support 50+ languages.",
    },
    Milestone {
        year: "2023",
        title: "API Release",
        description: "Released developer API, enabling integration into hundreds of applications.",
    },
    Milestone {
        year: "2024",
        title: "Global Scale",
        description: "Serving 500K+ users with 100+ languages and advanced enterprise features.",
    },
];
