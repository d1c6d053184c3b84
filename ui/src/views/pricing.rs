use dioxus::prelude::*;

use crate::components::app_navbar::{nav_link, NavTarget};
use crate::components::cards::{CheckList, PageHeader};
use crate::content::pricing::{Plan, PlanAction, FAQS, PLANS};
use crate::t;
use crate::views::use_lang_marker;

#[component]
pub fn Pricing() -> Element {
    let lang_marker = use_lang_marker();
    let mut yearly = use_signal(|| false);
    let is_yearly = yearly();

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-pricing",
            PageHeader { title: t!("pricing-title"), intro: t!("pricing-intro") }

            div { class: "billing-toggle", role: "group",
                button {
                    r#type: "button",
                    class: "billing-toggle__option",
                    class: if !is_yearly { "billing-toggle__option--active" },
                    aria_pressed: "{!is_yearly}",
                    onclick: move |_| yearly.set(false),
                    {t!("pricing-monthly")}
                }
                button {
                    r#type: "button",
                    class: "billing-toggle__option",
                    class: if is_yearly { "billing-toggle__option--active" },
                    aria_pressed: "{is_yearly}",
                    onclick: move |_| yearly.set(true),
                    {t!("pricing-yearly")}
                }
            }

            div { class: "card-grid card-grid--three",
                for plan in PLANS.iter() {
                    PlanCard { key: "{plan.name}", plan: *plan, yearly: is_yearly }
                }
            }

            section { class: "page__section faq",
                h2 { class: "page__section-title", {t!("pricing-faq-title")} }
                for faq in FAQS.iter() {
                    details { key: "{faq.question}", class: "faq__item",
                        summary { "{faq.question}" }
                        p { "{faq.answer}" }
                    }
                }
            }
        }
    }
}

#[component]
fn PlanCard(plan: Plan, yearly: bool) -> Element {
    let price = plan.display_price(yearly);
    let savings = plan.yearly_savings_percent();
    let target = match plan.action {
        PlanAction::Register => NavTarget::Register,
        PlanAction::ContactSales => NavTarget::Contact,
    };
    let cta_class = if plan.popular {
        "button button--primary button--block"
    } else {
        "button button--ghost button--block"
    };

    rsx! {
        article {
            class: "card plan",
            class: if plan.popular { "plan--popular" },
            if let Some(badge) = plan.badge {
                span { class: "plan__badge", "{badge}" }
            }
            div { class: "card__icon", "{plan.icon}" }
            h3 { class: "plan__name", "{plan.name}" }
            p { class: "plan__description", "{plan.description}" }
            div { class: "plan__price",
                strong { "{price}" }
                if !plan.is_free() {
                    span { class: "plan__period", {t!("pricing-per-month")} }
                }
            }
            if yearly && savings > 0 {
                p { class: "plan__savings", {t!("pricing-yearly-savings", percent = savings)} }
            }
            {nav_link(target, plan.cta, cta_class)}
            CheckList { items: plan.features }
            if !plan.limitations.is_empty() {
                ul { class: "plan__limitations",
                    for limit in plan.limitations.iter() {
                        li { key: "{limit}", "✕ {limit}" }
                    }
                }
            }
        }
    }
}
