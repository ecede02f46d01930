// Article analysis pipeline: parse once -> bias, keywords, political leaning,
// then keyword-driven related-article retrieval.

pub mod analyze;
