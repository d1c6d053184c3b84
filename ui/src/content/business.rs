#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UseCase {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub benefits: [&'static str; 4],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseStudy {
    pub company: &'static str,
    pub industry: &'static str,
    pub quote: &'static str,
    pub author: &'static str,
    pub rating: u8,
}

pub static USE_CASES: [UseCase; 4] = [
    UseCase {
        icon: "🏫",
        title: "E-Learning Platforms",
        description: "Translate courses, assignments, and learning materials to reach global audiences",
        benefits: [
            "Automated content translation",
            "Maintain educational context",
            "Support 100+ languages",
            "Bulk processing",
        ],
    },
    UseCase {
        icon: "👥",
        title: "Customer Support",
        description: "Provide multilingual customer service with real-time translation capabilities",
        benefits: [
            "Real-time chat translation",
            "Email automation",
            "Knowledge base translation",
            "Cultural adaptation",
        ],
    },
    UseCase {
        icon: "🌐",
        title: "Global Websites",
        description: "Localize your website content for international markets with precision",
        benefits: [
            "SEO-optimized translations",
            "Cultural localization",
            "Dynamic content updates",
            "Performance optimization",
        ],
    },
    UseCase {
        icon: "🛡",
        title: "Enterprise Security",
        description: "Secure, compliant translation solutions for sensitive business content",
        benefits: [
            "Data encryption",
            "GDPR compliance",
            "On-premise deployment",
            "Audit trails",
        ],
    },
];

pub static ENTERPRISE_FEATURES: [&str; 8] = [
    "White-label solutions",
    "Custom integrations",
    "Dedicated support",
    "SLA guarantees",
    "Volume discounts",
    "Advanced analytics",
    "Team management",
    "Priority processing",
];

pub static CASE_STUDIES: [CaseStudy; 3] = [
    CaseStudy {
        company: "TechCorp International",
        industry: "Technology",
        quote: "TranslatePro helped us localize our platform for 15 markets in just 3 months.",
        author: "Sarah Johnson, VP of Global Operations",
        rating: 5,
    },
    CaseStudy {
        company: "EduLearn Global",
        industry: "Education",
        quote: "The accuracy and context preservation is incredible. Our course completion rates increased by 40%.",
        author: "Dr. Michael Chen, Head of Content",
        rating: 5,
    },
    CaseStudy {
        company: "RetailPlus",
        industry: "E-commerce",
        quote: "API integration was seamless. We now serve customers in 50+ countries with real-time translations.",
        author: "Emma Rodriguez, CTO",
        rating: 5,
    },
];
