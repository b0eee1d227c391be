use super::super::catalog::SiteCategory;

/// One row of the hand-authored scoring rubric: choosing `value` on
/// `question` awards the listed points to each category.
pub(crate) struct WeightRule {
    pub(crate) question: u8,
    pub(crate) value: &'static str,
    pub(crate) awards: &'static [(SiteCategory, u32)],
}

pub(crate) fn awards_for(question: u8, value: &str) -> &'static [(SiteCategory, u32)] {
    WEIGHT_TABLE
        .iter()
        .find(|rule| rule.question == question && rule.value == value)
        .map(|rule| rule.awards)
        .unwrap_or(&[])
}

/// The first two questions (area of activity, site objective) are the
/// strongest predictors and carry 3-4 points; later questions contribute
/// 1-3 points and sometimes split across two categories.
pub(crate) const WEIGHT_TABLE: &[WeightRule] = &[
    // Question 1: area of activity.
    WeightRule {
        question: 1,
        value: "professional",
        awards: &[(SiteCategory::Professional, 3)],
    },
    WeightRule {
        question: 1,
        value: "creative",
        awards: &[(SiteCategory::Portfolio, 3)],
    },
    WeightRule {
        question: 1,
        value: "business",
        awards: &[(SiteCategory::Business, 3)],
    },
    WeightRule {
        question: 1,
        value: "ecommerce",
        awards: &[(SiteCategory::Ecommerce, 3)],
    },
    WeightRule {
        question: 1,
        value: "startup",
        awards: &[(SiteCategory::Startup, 3)],
    },
    // Question 2: what visitors should do on the site.
    WeightRule {
        question: 2,
        value: "professional",
        awards: &[(SiteCategory::Professional, 4)],
    },
    WeightRule {
        question: 2,
        value: "portfolio",
        awards: &[(SiteCategory::Portfolio, 4)],
    },
    WeightRule {
        question: 2,
        value: "ecommerce",
        awards: &[(SiteCategory::Ecommerce, 4)],
    },
    WeightRule {
        question: 2,
        value: "business",
        awards: &[(SiteCategory::Business, 3)],
    },
    WeightRule {
        question: 2,
        value: "landing",
        awards: &[(SiteCategory::Landing, 4)],
    },
    // Question 3: top priority for the site.
    WeightRule {
        question: 3,
        value: "professional",
        awards: &[(SiteCategory::Professional, 2)],
    },
    WeightRule {
        question: 3,
        value: "gallery",
        awards: &[(SiteCategory::Portfolio, 3)],
    },
    WeightRule {
        question: 3,
        value: "ecommerce",
        awards: &[(SiteCategory::Ecommerce, 3)],
    },
    WeightRule {
        question: 3,
        value: "seo",
        awards: &[(SiteCategory::Business, 2), (SiteCategory::Professional, 1)],
    },
    WeightRule {
        question: 3,
        value: "basic",
        awards: &[(SiteCategory::Landing, 2)],
    },
    // Question 4: preferred communication channel.
    WeightRule {
        question: 4,
        value: "contact",
        awards: &[(SiteCategory::Professional, 2), (SiteCategory::Landing, 1)],
    },
    WeightRule {
        question: 4,
        value: "form",
        awards: &[(SiteCategory::Business, 1), (SiteCategory::Landing, 2)],
    },
    WeightRule {
        question: 4,
        value: "social",
        awards: &[(SiteCategory::Portfolio, 2)],
    },
    WeightRule {
        question: 4,
        value: "appointment",
        awards: &[(SiteCategory::Professional, 2)],
    },
    WeightRule {
        question: 4,
        value: "chat",
        awards: &[(SiteCategory::Ecommerce, 2)],
    },
    // Question 5: time available to maintain the site.
    WeightRule {
        question: 5,
        value: "lowmaintenance",
        awards: &[(SiteCategory::Landing, 2), (SiteCategory::Professional, 1)],
    },
    WeightRule {
        question: 5,
        value: "occasional",
        awards: &[(SiteCategory::Portfolio, 2)],
    },
    WeightRule {
        question: 5,
        value: "regular",
        awards: &[(SiteCategory::Business, 2), (SiteCategory::Ecommerce, 1)],
    },
    WeightRule {
        question: 5,
        value: "highinvolvement",
        awards: &[(SiteCategory::Startup, 2)],
    },
    WeightRule {
        question: 5,
        value: "outsource",
        awards: &[(SiteCategory::Professional, 1), (SiteCategory::Ecommerce, 1)],
    },
    // Question 6: how important the site is to the business.
    WeightRule {
        question: 6,
        value: "basic",
        awards: &[(SiteCategory::Landing, 2)],
    },
    WeightRule {
        question: 6,
        value: "marketing",
        awards: &[(SiteCategory::Professional, 2), (SiteCategory::Business, 1)],
    },
    WeightRule {
        question: 6,
        value: "primary",
        awards: &[(SiteCategory::Ecommerce, 3)],
    },
    WeightRule {
        question: 6,
        value: "branding",
        awards: &[(SiteCategory::Portfolio, 2), (SiteCategory::Professional, 1)],
    },
    WeightRule {
        question: 6,
        value: "growth",
        awards: &[(SiteCategory::Business, 2), (SiteCategory::Startup, 2)],
    },
];
