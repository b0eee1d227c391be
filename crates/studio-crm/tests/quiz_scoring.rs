//! Integration checks for the scoring → recommendation pipeline exercised
//! through the public quiz API only.

use std::collections::BTreeMap;

use studio_crm::workflows::quiz::{
    ensure_catalog_integrity, question_catalog, recommendation_for, score, AnswerSet, SiteCategory,
};

fn answers(pairs: &[(u8, &str)]) -> AnswerSet {
    pairs
        .iter()
        .map(|(question, option)| (*question, option.to_string()))
        .collect::<BTreeMap<u8, String>>()
}

#[test]
fn catalog_integrity_holds() {
    ensure_catalog_integrity().expect("weight table covers the catalog");
}

#[test]
fn every_single_answer_scores_to_a_recommendation() {
    // Totality: whatever the visitor picks, the pipeline ends on a
    // recommendation record.
    for question in question_catalog() {
        for option in question.options {
            let outcome = score(&answers(&[(question.id, option.id)]));
            let recommendation = recommendation_for(outcome.category);
            assert!(
                !recommendation.title.is_empty(),
                "question {} option {} produced an empty recommendation",
                question.id,
                option.id
            );
        }
    }
}

#[test]
fn full_quiz_sweeps_stay_total() {
    // Same-letter sweeps exercise every row of the weight table in
    // combination.
    for letter in ["a", "b", "c", "d", "e"] {
        let set: Vec<(u8, String)> = question_catalog()
            .iter()
            .map(|question| (question.id, format!("{}{}", question.id, letter)))
            .collect();
        let set: AnswerSet = set.into_iter().collect();
        let outcome = score(&set);
        assert!(!recommendation_for(outcome.category).title.is_empty());
    }
}

#[test]
fn empty_answer_set_defaults_to_professional() {
    assert_eq!(
        score(&AnswerSet::new()).category,
        SiteCategory::Professional
    );
}

#[test]
fn professional_leaning_answers_score_professional() {
    let outcome = score(&answers(&[
        (1, "1a"),
        (2, "2a"),
        (3, "3a"),
        (4, "4a"),
        (5, "5a"),
        (6, "6b"),
    ]));
    assert_eq!(outcome.category, SiteCategory::Professional);
    assert_eq!(
        recommendation_for(outcome.category).title,
        "Site Profissional Essencial"
    );
}

#[test]
fn creative_partial_quiz_scores_portfolio() {
    let outcome = score(&answers(&[(1, "1b"), (2, "2b"), (3, "3b")]));
    assert_eq!(outcome.category, SiteCategory::Portfolio);
    assert_eq!(
        recommendation_for(outcome.category).title,
        "Site Portfólio Visual"
    );
}

#[test]
fn answers_for_retired_questions_are_tolerated() {
    let mut set = answers(&[(1, "1d"), (2, "2c")]);
    set.insert(99, "99a".to_string());
    let outcome = score(&set);
    assert_eq!(outcome.category, SiteCategory::Ecommerce);
}
