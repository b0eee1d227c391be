mod fallback;
pub(crate) mod weights;

use serde::Serialize;

use super::catalog::{find_question, AnswerSet, SiteCategory};

/// Weighted scores below this are considered low-signal and trigger the
/// count-based fallback pass.
const LOW_CONFIDENCE_THRESHOLD: u32 = 3;

/// Points accumulated by one category during a scoring pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryTally {
    pub category: SiteCategory,
    pub points: u32,
}

/// Scoring output with the per-category trail kept for audits and demos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreOutcome {
    pub category: SiteCategory,
    pub top_score: u32,
    pub tallies: Vec<CategoryTally>,
    pub fallback_applied: bool,
}

/// Score a set of answers into a recommendation category.
///
/// Pure function over the static weight table. Answers referencing an
/// unknown question or option id are skipped rather than rejected; the
/// caller may be replaying a stored answer set from an older catalog.
/// Ties go to the first category in declaration order because only a
/// strictly greater score replaces the running leader.
pub fn score(answers: &AnswerSet) -> ScoreOutcome {
    let mut tallies: Vec<CategoryTally> = SiteCategory::ordered()
        .into_iter()
        .map(|category| CategoryTally {
            category,
            points: 0,
        })
        .collect();

    for (question_id, option_id) in answers {
        let Some(question) = find_question(*question_id) else {
            continue;
        };
        let Some(option) = question.option_by_id(option_id) else {
            continue;
        };
        for (category, points) in weights::awards_for(question.id, option.value) {
            if let Some(tally) = tallies
                .iter_mut()
                .find(|tally| tally.category == *category)
            {
                tally.points += points;
            }
        }
    }

    let mut category = SiteCategory::Professional;
    let mut top_score = 0;
    for tally in &tallies {
        if tally.points > top_score {
            top_score = tally.points;
            category = tally.category;
        }
    }

    let mut fallback_applied = false;
    if top_score < LOW_CONFIDENCE_THRESHOLD {
        if let Some(frequent) = fallback::most_frequent_category(answers) {
            category = frequent;
            fallback_applied = true;
        }
    }

    ScoreOutcome {
        category,
        top_score,
        tallies,
        fallback_applied,
    }
}
