// Newslens: bias and political-leaning analysis for news articles
//
// This is the library root. Each module corresponds to a stage of the
// article analysis pipeline or one of its pluggable capabilities.

pub mod bias;
pub mod config;
pub mod keywords;
pub mod lexicon;
pub mod linguistics;
pub mod output;
pub mod pipeline;
pub mod related;
pub mod scoring;
