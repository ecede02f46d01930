// Overall bias score formula.
//
// Four signals are fused into one score on a 0-5 scale:
//   sentiment  — |average compound polarity|
//   subjectivity — subjective-token ratio
//   emotional  — sentences with |compound| > 0.5, saturating at 10
//   indicators — bias-indicator hits across all categories, saturating at 10
//
// A sentence that trips several indicator categories is counted once per
// category, so heavily loaded sentences push the score up faster.

/// Configurable weights for the overall bias formula.
///
/// `score = min(scale * (|compound| * sentiment_weight
///                       + subjectivity * subjectivity_weight
///                       + min(emotional / saturation, 1) * emotional_weight
///                       + min(indicators / saturation, 1) * indicators_weight), max_score)`
pub struct BiasWeights {
    /// Weight for absolute average sentiment (default 0.3)
    pub sentiment_weight: f64,
    /// Weight for the subjectivity ratio (default 0.3)
    pub subjectivity_weight: f64,
    /// Weight for the emotional sentence count (default 0.2)
    pub emotional_weight: f64,
    /// Weight for the bias indicator count (default 0.2)
    pub indicators_weight: f64,
    /// Count at which emotional/indicator signals saturate (default 10)
    pub count_saturation: f64,
    /// Multiplier taking the weighted sum onto the output scale (default 5.0)
    pub scale: f64,
    /// Upper bound of the score (default 5.0)
    pub max_score: f64,
}

impl Default for BiasWeights {
    fn default() -> Self {
        Self {
            sentiment_weight: 0.3,
            subjectivity_weight: 0.3,
            emotional_weight: 0.2,
            indicators_weight: 0.2,
            count_saturation: 10.0,
            scale: 5.0,
            max_score: 5.0,
        }
    }
}

/// Inputs to the overall bias formula.
#[derive(Debug, Clone, Copy, Default)]
pub struct BiasSignals {
    /// Average compound sentiment across sentences
    pub sentiment_compound: f64,
    /// Subjective-token ratio (0.0-1.0)
    pub subjectivity: f64,
    /// Sentences with |compound| above the emotional threshold
    pub emotional_count: usize,
    /// Total indicator hits, one per (sentence, category) pair
    pub indicator_count: usize,
}

/// Fuse the bias signals into one score in `[0, weights.max_score]`.
pub fn compute_overall_bias(signals: &BiasSignals, weights: &BiasWeights) -> f64 {
    let saturate = |count: usize| {
        crate::scoring::safe_ratio(count as f64, weights.count_saturation).min(1.0)
    };

    let weighted = signals.sentiment_compound.abs() * weights.sentiment_weight
        + signals.subjectivity * weights.subjectivity_weight
        + saturate(signals.emotional_count) * weights.emotional_weight
        + saturate(signals.indicator_count) * weights.indicators_weight;

    (weighted * weights.scale).clamp(0.0, weights.max_score)
}
