// Bias analysis — sentiment, indicator language, subjectivity, overall score.

pub mod sentiment;
pub mod indicators;
pub mod subjectivity;
pub mod analyzer;
