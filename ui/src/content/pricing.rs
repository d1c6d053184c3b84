//! Subscription plans and the monthly/yearly price display.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanAction {
    Register,
    ContactSales,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub monthly_price: u32,
    pub yearly_price: u32,
    pub badge: Option<&'static str>,
    pub features: &'static [&'static str],
    pub limitations: &'static [&'static str],
    pub cta: &'static str,
    pub action: PlanAction,
    pub popular: bool,
}

impl Plan {
    pub fn is_free(&self) -> bool {
        self.monthly_price == 0
    }

    /// `"Free"`, or the per-month price in dollars for the chosen billing cycle.
    pub fn display_price(&self, yearly: bool) -> String {
        if self.is_free() {
            return "Free".to_string();
        }
        let price = if yearly {
            round_div(self.yearly_price, 12)
        } else {
            self.monthly_price
        };
        format!("${price}")
    }

    /// Whole-percent discount of yearly billing over twelve monthly payments.
    pub fn yearly_savings_percent(&self) -> u32 {
        if self.is_free() {
            return 0;
        }
        let full = self.monthly_price * 12;
        let saved = full.saturating_sub(self.yearly_price);
        round_div(saved * 100, full)
    }
}

/// Integer division rounding half up.
fn round_div(numerator: u32, denominator: u32) -> u32 {
    (numerator * 2 + denominator) / (denominator * 2)
}

pub static PLANS: [Plan; 3] = [
    Plan {
        name: "Free",
        icon: "⚡",
        description: "Perfect for personal use and trying out TranslatePro",
        monthly_price: 0,
        yearly_price: 0,
        badge: None,
        features: &[
            "50 translations per month",
            "Basic linguistic analysis",
            "10 languages supported",
            "Standard translation speed",
            "Email support",
            "Mobile app access",
        ],
        limitations: &["Limited daily usage", "No API access", "Basic analysis only"],
        cta: "Get Started Free",
        action: PlanAction::Register,
        popular: false,
    },
    Plan {
        name: "Pro",
        icon: "★",
        description: "For professionals and language learners who need more",
        monthly_price: 7,
        yearly_price: 70,
        badge: Some("Most Popular"),
        features: &[
            "Unlimited translations",
            "Advanced linguistic analysis",
            "100+ languages supported",
            "Priority translation speed",
            "Grammar breakdown & insights",
            "Idiom & phrase detection",
            "Pronunciation guides",
            "Translation history",
            "Export capabilities",
            "Priority email support",
            "Mobile & desktop apps",
        ],
        limitations: &[],
        cta: "Start Pro Trial",
        action: PlanAction::Register,
        popular: true,
    },
    Plan {
        name: "Enterprise",
        icon: "🏢",
        description: "For teams and businesses with advanced needs",
        monthly_price: 49,
        yearly_price: 488,
        badge: Some("Best Value"),
        features: &[
            "Everything in Pro",
            "Full API access",
            "Custom integrations",
            "Team collaboration tools",
            "Advanced analytics",
            "Custom language models",
            "SSO integration",
            "Dedicated account manager",
            "24/7 phone support",
            "SLA guarantee",
            "Custom contracts available",
        ],
        limitations: &[],
        cta: "Contact Sales",
        action: PlanAction::ContactSales,
        popular: false,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub static FAQS: [Faq; 5] = [
    Faq {
        question: "Can I change my plan anytime?",
        answer: "Yes, you can upgrade or downgrade your plan at any time. Changes take effect immediately and we'll prorate any billing differences.",
    },
    Faq {
        question: "What payment methods do you accept?",
        answer: "We accept all major credit cards (Visa, MasterCard, American Express) and PayPal. Enterprise customers can also pay by invoice.",
    },
    Faq {
        question: "Is there a free trial for paid plans?",
        answer: "Yes! All paid plans come with a 14-day free trial. No credit card required to start your trial.",
    },
    Faq {
        question: "Do you offer discounts for students or nonprofits?",
        answer: "Yes, we offer 50% discounts for students and qualified nonprofit organizations. Contact our support team for details.",
    },
    Faq {
        question: "What happens if I exceed my usage limits?",
        answer: "For Free users, translation will be temporarily limited. Pro and Enterprise users get unlimited usage, but API rate limits may apply.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(name: &str) -> &'static Plan {
        PLANS.iter().find(|p| p.name == name).expect("plan exists")
    }

    #[test]
    fn free_plan_is_always_free() {
        let free = plan("Free");
        assert_eq!(free.display_price(false), "Free");
        assert_eq!(free.display_price(true), "Free");
        assert_eq!(free.yearly_savings_percent(), 0);
    }

    #[test]
    fn yearly_price_is_rounded_monthly_equivalent() {
        assert_eq!(plan("Pro").display_price(false), "$7");
        // 70 / 12 = 5.83
        assert_eq!(plan("Pro").display_price(true), "$6");
        // 488 / 12 = 40.67
        assert_eq!(plan("Enterprise").display_price(true), "$41");
    }

    #[test]
    fn savings_percentages() {
        // (84 - 70) / 84 = 16.67%
        assert_eq!(plan("Pro").yearly_savings_percent(), 17);
        // (588 - 488) / 588 = 17.01%
        assert_eq!(plan("Enterprise").yearly_savings_percent(), 17);
    }

    #[test]
    fn exactly_one_popular_plan() {
        assert_eq!(PLANS.iter().filter(|p| p.popular).count(), 1);
    }
}
