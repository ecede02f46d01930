// Linguistic front-end — segmentation, tagging, chunking and sentence polarity.
//
// The analyzers only see the traits in `traits`. The rule-based toolkit and
// lexicon sentiment scorer are the built-in implementations; a heavier NLP
// backend can be dropped in without touching scoring code.

pub mod traits;
pub mod rules;
pub mod sentiment;
