// Keyword extraction — noun phrases, entities, TF-IDF and POS filtering
// combined into one ranked list.

pub mod traits;
pub mod tfidf;
pub mod composite;
