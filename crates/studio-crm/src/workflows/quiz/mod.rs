//! Site-recommendation quiz: the static question catalog, the weighted
//! scoring engine with its count-based fallback, and the recommendation
//! reference data keyed by the resulting category.

pub mod catalog;
pub mod recommendations;
pub mod scoring;

pub use catalog::{
    ensure_catalog_integrity, find_question, question_catalog, AnswerSet, CatalogIntegrityError,
    QuizOption, QuizQuestion, SiteCategory,
};
pub use recommendations::{recommendation_for, Recommendation};
pub use scoring::{score, CategoryTally, ScoreOutcome};
