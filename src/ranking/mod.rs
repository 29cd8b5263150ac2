//! Ranking candidate courses by relevance to a student's programs.

pub mod importance;

pub use importance::{
    category_bonus, ImportanceRanker, ScoredCourse, ScoringContext, CORE_BONUS,
    DISTRIBUTION_BONUS, ELECTIVE_BONUS, ELIGIBLE_BONUS, MINOR_BONUS, TAKEN_PENALTY,
};
