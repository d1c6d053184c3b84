#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterLink {
    pub name: &'static str,
    pub path: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterColumn {
    pub title: &'static str,
    pub links: [FooterLink; 4],
}

const fn link(name: &'static str, path: &'static str) -> FooterLink {
    FooterLink { name, path }
}

pub static COLUMNS: [FooterColumn; 4] = [
    FooterColumn {
        title: "Product",
        links: [
            link("Features", "/features"),
            link("Pricing", "/pricing"),
            link("API", "/api"),
            link("Translator", "/translator"),
        ],
    },
    FooterColumn {
        title: "Company",
        links: [
            link("About", "/about"),
            link("Blog", "/blog"),
            link("Careers", "/careers"),
            link("Contact", "/contact"),
        ],
    },
    FooterColumn {
        title: "Resources",
        links: [
            link("How It Works", "/workflow"),
            link("For Business", "/business"),
            link("Documentation", "/docs"),
            link("Support", "/support"),
        ],
    },
    FooterColumn {
        title: "Legal",
        links: [
            link("Privacy Policy", "/privacy"),
            link("Terms of Service", "/terms"),
            link("Cookie Policy", "/cookies"),
            link("GDPR", "/gdpr"),
        ],
    },
];

pub static SOCIAL_LINKS: [FooterLink; 4] = [
    link("Twitter", "https://twitter.com"),
    link("GitHub", "https://github.com"),
    link("LinkedIn", "https://linkedin.com"),
    link("Email", "mailto:hello@translatepro.com"),
];

pub const CONTACT_EMAIL: &str = "hello@translatepro.com";
pub const CONTACT_PHONE: &str = "+1 (555) 123-4567";
