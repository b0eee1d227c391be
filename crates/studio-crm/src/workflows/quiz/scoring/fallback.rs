use super::super::catalog::{find_question, AnswerSet, SiteCategory};

/// Remaps raw answer values that don't directly name a category. Values
/// without an entry pass through literally and only win the fallback when
/// they happen to coincide with a real category label.
pub(crate) const VALUE_REMAP: &[(&str, SiteCategory)] = &[
    ("creative", SiteCategory::Portfolio),
    ("gallery", SiteCategory::Portfolio),
    ("shop", SiteCategory::Ecommerce),
    ("online", SiteCategory::Ecommerce),
    ("basic", SiteCategory::Landing),
    ("seo", SiteCategory::Business),
    ("marketing", SiteCategory::Business),
    ("growth", SiteCategory::Business),
];

fn remap(value: &'static str) -> &'static str {
    VALUE_REMAP
        .iter()
        .find(|(raw, _)| *raw == value)
        .map(|(_, category)| category.label())
        .unwrap_or(value)
}

/// Count-based secondary pass used when the weighted scores carry too
/// little signal. Tallies raw answer values in first-seen order (so ties
/// keep the earlier value), remaps them, and picks the most frequent.
/// Returns `None` when the winner doesn't name a real category, in which
/// case the caller keeps the weighted result.
pub(crate) fn most_frequent_category(answers: &AnswerSet) -> Option<SiteCategory> {
    let mut counts: Vec<(&'static str, u32)> = Vec::new();
    for (question_id, option_id) in answers {
        let Some(question) = find_question(*question_id) else {
            continue;
        };
        let Some(option) = question.option_by_id(option_id) else {
            continue;
        };
        match counts.iter_mut().find(|(value, _)| *value == option.value) {
            Some((_, count)) => *count += 1,
            None => counts.push((option.value, 1)),
        }
    }

    let mut max_count = 0;
    let mut winner = SiteCategory::Professional.label();
    for (value, count) in &counts {
        if *count > max_count {
            max_count = *count;
            winner = remap(value);
        }
    }

    SiteCategory::from_label(winner)
}
