// Rule-based linguistic toolkit.
//
// A dependency-light front-end: sentence segmentation on terminal punctuation
// (abbreviation aware), regex tokenization, a closed-class + suffix tagger,
// suffix-stripping lemmatization, determiner/adjective/noun chunking and
// proper-noun runs as entity spans. It is deterministic and needs no model
// files, which makes it a good default and a predictable test fixture.

use std::collections::HashSet;

use anyhow::{Context, Result};
use regex_lite::Regex;
use stop_words::{get, LANGUAGE};

use super::traits::{LinguisticToolkit, ParsedDocument, PartOfSpeech, Token};

/// Numbers (with separators and percent), words (with inner apostrophes or
/// hyphens), or any other single non-space character.
const TOKEN_PATTERN: &str =
    r"[0-9]+(?:[.,:][0-9]+)*%?|[A-Za-zÀ-ÖØ-öø-ÿ]+(?:['’\-][A-Za-zÀ-ÖØ-öø-ÿ]+)*|[^\s]";

const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "gov", "sen", "rep", "gen", "col",
    "lt", "inc", "ltd", "co", "corp", "vs", "etc", "jan", "feb", "aug", "sept", "oct", "nov",
    "dec",
];

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "these", "those", "each", "every", "some", "any", "no", "all",
    "both", "either", "neither", "another", "such", "my", "your", "his", "her", "its", "our",
    "their", "what", "which", "whose",
];

const PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "us", "them", "myself",
    "yourself", "himself", "herself", "itself", "ourselves", "themselves", "who", "whom",
    "everyone", "everybody", "everything", "someone", "somebody", "something", "anyone",
    "anybody", "anything", "nobody", "nothing", "none", "one", "mine", "yours", "hers",
    "ours", "theirs", "it's", "that's", "there's", "he's", "she's", "i'm", "we're",
    "they're", "you're", "i've", "we've", "they've", "you've", "i'd", "we'd", "they'd",
    "i'll", "we'll", "they'll", "there",
];

const ADPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "by", "for", "with", "about", "against", "between", "into",
    "through", "during", "before", "after", "above", "below", "from", "up", "down", "over",
    "under", "since", "without", "within", "among", "across", "toward", "towards", "upon",
    "per", "via", "despite", "like", "amid", "around", "behind", "beyond", "near", "off",
    "onto", "out", "outside", "inside", "throughout",
];

const CONJUNCTIONS: &[&str] = &[
    "and", "or", "but", "nor", "yet", "so", "because", "although", "though", "while",
    "whereas", "if", "unless", "whether", "than", "that", "as", "when", "where", "once",
    "until", "whenever",
];

const AUXILIARIES: &[&str] = &[
    "is", "am", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do",
    "does", "did", "will", "would", "shall", "should", "can", "could", "may", "might",
    "must", "don't", "doesn't", "didn't", "isn't", "aren't", "wasn't", "weren't", "won't",
    "wouldn't", "can't", "cannot", "couldn't", "shouldn't", "hasn't", "haven't", "hadn't",
];

const PARTICLES: &[&str] = &["not", "to", "n't"];

const NUMBER_WORDS: &[&str] = &[
    "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "twenty", "thirty", "forty", "fifty", "hundred", "thousand", "million",
    "billion", "trillion", "dozen",
];

const ADVERBS: &[&str] = &[
    "very", "too", "also", "just", "only", "even", "still", "already", "always", "never",
    "often", "sometimes", "here", "now", "then", "today", "soon", "again", "almost",
    "quite", "rather", "really", "perhaps", "maybe", "however", "therefore", "ever",
    "later", "much", "more", "most", "less", "least", "well", "instead", "indeed",
    "together", "away", "back", "yesterday", "tomorrow", "far", "enough", "else", "why",
    "how",
];

const ADJECTIVES: &[&str] = &[
    "good", "great", "bad", "new", "old", "big", "small", "high", "low", "long", "short",
    "large", "little", "major", "free", "true", "false", "real", "clear", "strong", "weak",
    "amazing", "terrible", "horrible", "awesome", "fantastic", "dreadful", "spectacular",
    "extraordinary", "controversial", "radical", "extremist", "progressive",
    "conservative", "liberal", "notorious", "infamous", "impossible", "best", "worst",
    "better", "worse", "many", "few", "several", "other", "same", "different", "recent",
    "former", "key", "private", "fair", "legal", "illegal", "full", "whole", "likely",
    "early", "late", "top", "hard", "easy", "poor", "rich", "young", "safe", "wrong",
    "right", "sure", "able", "open", "last", "next", "first", "second", "third", "own",
    "main", "certain", "single", "current", "human", "serious", "wide", "huge", "nice",
    "happy", "sad", "angry", "afraid", "fine", "dead", "common",
];

/// Base forms the lemmatizer can map inflections onto.
const VERB_BASES: &[&str] = &[
    "say", "tell", "believe", "think", "feel", "suggest", "seem", "appear", "suspect",
    "assume", "speculate", "guess", "imagine", "presume", "suppose", "need", "want", "make",
    "go", "know", "take", "see", "get", "give", "show", "agree", "argue", "claim", "report",
    "announce", "state", "add", "ask", "call", "come", "continue", "create", "cut", "do",
    "be", "have", "find", "help", "hold", "include", "keep", "lead", "leave", "let", "live",
    "look", "lose", "mean", "move", "pay", "plan", "play", "provide", "put", "raise",
    "reach", "remain", "run", "seek", "serve", "set", "start", "stay", "support", "talk",
    "try", "turn", "use", "vote", "win", "work", "write", "increase", "reduce", "face",
    "fight", "warn", "bring", "begin", "become", "expect", "accuse", "deny", "pass", "sign",
    "allow", "require", "fund", "ban", "protect", "build", "spend", "grow", "fall", "rise",
    "criticize", "oppose", "promise", "insist", "note", "admit", "reveal", "release",
];

/// Irregular inflections and their base forms.
const IRREGULAR_VERBS: &[(&str, &str)] = &[
    ("said", "say"), ("says", "say"), ("told", "tell"), ("thought", "think"), ("felt", "feel"),
    ("made", "make"), ("went", "go"), ("gone", "go"), ("goes", "go"), ("knew", "know"),
    ("known", "know"), ("took", "take"), ("taken", "take"), ("saw", "see"), ("seen", "see"),
    ("got", "get"), ("gotten", "get"), ("gave", "give"), ("given", "give"), ("shown", "show"),
    ("found", "find"), ("came", "come"), ("left", "leave"), ("kept", "keep"), ("began", "begin"),
    ("begun", "begin"), ("ran", "run"), ("brought", "bring"), ("wrote", "write"),
    ("written", "write"), ("held", "hold"), ("led", "lead"), ("meant", "mean"), ("paid", "pay"),
    ("lost", "lose"), ("won", "win"), ("became", "become"), ("built", "build"),
    ("spent", "spend"), ("grew", "grow"), ("grown", "grow"), ("fell", "fall"),
    ("fallen", "fall"), ("rose", "rise"), ("risen", "rise"), ("sought", "seek"),
];

/// Inflection suffixes tried against `VERB_BASES`, in order.
const VERB_SUFFIXES: &[(&str, &str)] = &[
    ("ies", "y"), ("ied", "y"), ("ying", "y"), ("ing", "e"), ("ing", ""), ("ed", "e"),
    ("ed", ""), ("es", ""), ("s", ""),
];

const ADJECTIVE_SUFFIXES: &[(&str, usize)] = &[
    ("ous", 4), ("ful", 4), ("ive", 4), ("able", 5), ("ible", 5), ("ical", 5), ("less", 5),
    ("ish", 4), ("ic", 6), ("al", 7),
];

/// Nouns ending in "s" that are not plurals.
const SINGULAR_S_NOUNS: &[&str] = &["news", "series", "species", "politics", "economics"];

/// The built-in toolkit. Construct once and share.
pub struct RuleBasedToolkit {
    token_pattern: Regex,
    stop_words: HashSet<String>,
}

impl RuleBasedToolkit {
    /// Build the toolkit with the English stop-word list.
    pub fn new() -> Result<Self> {
        Self::with_stop_words(get(LANGUAGE::English))
    }

    /// Build the toolkit with a caller-supplied stop-word list.
    pub fn with_stop_words(stop_words: Vec<String>) -> Result<Self> {
        let token_pattern =
            Regex::new(TOKEN_PATTERN).context("Failed to compile token pattern")?;
        Ok(Self {
            token_pattern,
            stop_words: stop_words.into_iter().map(|w| w.to_lowercase()).collect(),
        })
    }

    /// Tokenize and tag one sentence.
    pub fn tag_sentence(&self, sentence: &str) -> Vec<Token> {
        let words: Vec<&str> = self
            .token_pattern
            .find_iter(sentence)
            .map(|m| m.as_str())
            .collect();

        let mut tokens: Vec<Token> = Vec::with_capacity(words.len());
        for (i, word) in words.iter().enumerate() {
            let prev = tokens.last().map(|t| t.pos);
            let next = words.get(i + 1).copied();
            let lower = normalize_apostrophes(&word.to_lowercase());
            let pos = tag_word(word, &lower, i == 0, prev, next);
            let is_punct = pos == PartOfSpeech::Punctuation;

            tokens.push(Token {
                text: (*word).to_string(),
                lemma: lemmatize(&lower, pos),
                pos,
                is_stop: !is_punct && self.stop_words.contains(&lower),
                is_punct,
            });
        }
        tokens
    }
}

impl LinguisticToolkit for RuleBasedToolkit {
    fn parse(&self, text: &str) -> ParsedDocument {
        let mut doc = ParsedDocument::default();
        for sentence in split_sentences(text) {
            let tokens = self.tag_sentence(&sentence);
            doc.noun_chunks.extend(noun_chunks(&tokens));
            doc.entities.extend(entity_spans(&tokens));
            doc.tokens.extend(tokens);
            doc.sentences.push(sentence);
        }
        doc
    }
}

/// Split text into trimmed sentences.
///
/// Breaks after runs of `.`, `!` or `?` (plus closing quotes/brackets) that
/// are followed by whitespace, and at blank lines. A period after a known
/// abbreviation, a letter-dot acronym, or a middle initial following a name
/// does not end a sentence; a period after a number always does.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    for paragraph in text.split("\n\n") {
        split_paragraph(paragraph, &mut sentences);
    }
    sentences
}

fn split_paragraph(text: &str, out: &mut Vec<String>) {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        let (idx, c) = chars[i];
        if !matches!(c, '.' | '!' | '?') {
            i += 1;
            continue;
        }

        let mut j = i + 1;
        while j < chars.len()
            && matches!(chars[j].1, '.' | '!' | '?' | '"' | '\'' | '”' | '’' | ')' | ']')
        {
            j += 1;
        }

        let at_boundary = j >= chars.len() || chars[j].1.is_whitespace();
        if at_boundary && !(c == '.' && ends_with_abbreviation(&text[start..idx])) {
            let end = chars.get(j).map_or(text.len(), |&(pos, _)| pos);
            push_trimmed(out, &text[start..end]);
            start = end;
        }
        i = j;
    }

    push_trimmed(out, &text[start..]);
}

fn push_trimmed(out: &mut Vec<String>, span: &str) {
    let trimmed = span.trim();
    if trimmed.chars().any(char::is_alphanumeric) {
        out.push(trimmed.to_string());
    }
}

fn ends_with_abbreviation(preceding: &str) -> bool {
    let mut words = preceding.split_whitespace().rev();
    let word = words
        .next()
        .unwrap_or("")
        .trim_start_matches(|c: char| !c.is_alphanumeric());

    if word.is_empty() || word.ends_with(|c: char| c.is_ascii_digit()) {
        return false;
    }
    if word.contains('.') {
        return is_dotted_acronym(word);
    }

    let mut chars = word.chars();
    if matches!((chars.next(), chars.next()), (Some(c), None) if c.is_uppercase()) {
        return words.next().is_some_and(is_name_word);
    }
    ABBREVIATIONS.contains(&word.to_lowercase().as_str())
}

/// Single letters separated by dots: "U.S", "e.g", "J.R.R" (final dot excluded).
fn is_dotted_acronym(word: &str) -> bool {
    let mut parts = 0;
    for part in word.split('.') {
        let mut chars = part.chars();
        if !matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic()) {
            return false;
        }
        parts += 1;
    }
    parts >= 2
}

/// A capitalized word that is not ordinary vocabulary, so a following single
/// capital is a middle initial ("George W. Bush") rather than a label ("Plan B.").
fn is_name_word(word: &str) -> bool {
    let word = word.trim_matches(|c: char| !c.is_alphabetic());
    if !is_capitalized(word) || !word.chars().all(char::is_alphabetic) {
        return false;
    }
    let lower = word.to_lowercase();
    let lower = lower.as_str();
    closed_class(lower).is_none()
        && ![ADVERBS, ADJECTIVES, VERB_BASES].iter().any(|list| list.contains(&lower))
}

fn normalize_apostrophes(word: &str) -> String {
    word.replace('’', "'")
}

fn is_capitalized(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

fn tag_word(
    word: &str,
    lower: &str,
    sentence_initial: bool,
    prev: Option<PartOfSpeech>,
    next: Option<&str>,
) -> PartOfSpeech {
    use PartOfSpeech::*;

    if !word.chars().any(char::is_alphanumeric) {
        return Punctuation;
    }
    if word.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        return Numeral;
    }
    if let Some(pos) = closed_class(lower) {
        return pos;
    }
    if is_capitalized(word) && (!sentence_initial || next.is_some_and(is_capitalized)) {
        return ProperNoun;
    }
    if ADVERBS.contains(&lower) {
        return Adverb;
    }
    if ADJECTIVES.contains(&lower) {
        return Adjective;
    }
    if IRREGULAR_VERBS.iter().any(|(form, _)| *form == lower) {
        return Verb;
    }

    // After a determiner, modifier or preposition a verb-looking word is
    // almost always nominal ("the vote", "for support"), and so is a plural
    // right after a noun ("tax cuts").
    let nominal_context = matches!(prev, Some(Determiner | Adjective | Adposition | Numeral))
        || (prev == Some(Noun) && lower.ends_with('s'));
    if !nominal_context && verb_base(lower).is_some() {
        return Verb;
    }

    suffix_tag(lower, prev)
}

fn closed_class(lower: &str) -> Option<PartOfSpeech> {
    use PartOfSpeech::*;

    let tables: [(&[&str], PartOfSpeech); 7] = [
        (PRONOUNS, Pronoun),
        (DETERMINERS, Determiner),
        (AUXILIARIES, Auxiliary),
        (PARTICLES, Particle),
        (ADPOSITIONS, Adposition),
        (CONJUNCTIONS, Conjunction),
        (NUMBER_WORDS, Numeral),
    ];
    tables
        .iter()
        .find(|(words, _)| words.contains(&lower))
        .map(|(_, pos)| *pos)
}

fn suffix_tag(lower: &str, prev: Option<PartOfSpeech>) -> PartOfSpeech {
    use PartOfSpeech::*;

    let len = lower.chars().count();
    if len > 4 && lower.ends_with("ly") {
        return Adverb;
    }
    if ADJECTIVE_SUFFIXES
        .iter()
        .any(|(suffix, min_len)| len >= *min_len && lower.ends_with(suffix))
    {
        return Adjective;
    }
    if len > 5 && lower.ends_with("ing") {
        return if prev == Some(Determiner) { Noun } else { Verb };
    }
    if len > 4 && lower.ends_with("ed") {
        return if prev == Some(Determiner) { Adjective } else { Verb };
    }
    if prev == Some(Pronoun) {
        return Verb;
    }
    Noun
}

/// Map an inflected verb onto a known base form, if one matches.
fn verb_base(lower: &str) -> Option<String> {
    if let Some((_, base)) = IRREGULAR_VERBS.iter().find(|(form, _)| *form == lower) {
        return Some((*base).to_string());
    }
    if VERB_BASES.contains(&lower) {
        return Some(lower.to_string());
    }
    VERB_SUFFIXES.iter().find_map(|(suffix, replacement)| {
        let stem = lower.strip_suffix(suffix)?;
        let candidate = format!("{stem}{replacement}");
        VERB_BASES
            .contains(&candidate.as_str())
            .then_some(candidate)
    })
}

fn lemmatize(lower: &str, pos: PartOfSpeech) -> String {
    match pos {
        PartOfSpeech::Verb | PartOfSpeech::Auxiliary => {
            verb_base(lower).unwrap_or_else(|| strip_verb_inflection(lower))
        }
        PartOfSpeech::Noun => singularize(lower),
        _ => lower.to_string(),
    }
}

fn strip_verb_inflection(lower: &str) -> String {
    if lower.chars().count() <= 4 {
        return lower.to_string();
    }
    for suffix in ["ing", "ed"] {
        if let Some(stem) = lower.strip_suffix(suffix) {
            return stem.to_string();
        }
    }
    singularize(lower)
}

fn singularize(lower: &str) -> String {
    if lower.chars().count() <= 3
        || SINGULAR_S_NOUNS.contains(&lower)
        || lower.ends_with("ss")
        || lower.ends_with("us")
        || lower.ends_with("is")
    {
        return lower.to_string();
    }
    if let Some(stem) = lower.strip_suffix("ies") {
        return format!("{stem}y");
    }
    for suffix in ["shes", "ches", "xes", "sses"] {
        if lower.ends_with(suffix) {
            return lower[..lower.len() - 2].to_string();
        }
    }
    lower.strip_suffix('s').unwrap_or(lower).to_string()
}

fn is_chunk_part(pos: PartOfSpeech) -> bool {
    matches!(
        pos,
        PartOfSpeech::Determiner
            | PartOfSpeech::Adjective
            | PartOfSpeech::Numeral
            | PartOfSpeech::Noun
            | PartOfSpeech::ProperNoun
    )
}

fn is_nominal(pos: PartOfSpeech) -> bool {
    matches!(pos, PartOfSpeech::Noun | PartOfSpeech::ProperNoun)
}

fn join_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Base noun phrases: an optional determiner, modifiers, then nouns, ending
/// at the last noun. Pronouns form single-token chunks.
fn noun_chunks(tokens: &[Token]) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        let pos = tokens[i].pos;
        if pos == PartOfSpeech::Pronoun {
            chunks.push(tokens[i].text.clone());
            i += 1;
            continue;
        }
        if !is_chunk_part(pos) {
            i += 1;
            continue;
        }

        let start = i;
        let mut last_noun = None;
        while i < tokens.len()
            && is_chunk_part(tokens[i].pos)
            && (i == start || tokens[i].pos != PartOfSpeech::Determiner)
        {
            if is_nominal(tokens[i].pos) {
                last_noun = Some(i);
            }
            i += 1;
        }

        if let Some(end) = last_noun {
            chunks.push(join_tokens(&tokens[start..=end]));
        }
    }

    chunks
}

/// Runs of proper nouns, allowing an inner "of" ("Bank of America").
fn entity_spans(tokens: &[Token]) -> Vec<String> {
    let mut spans = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        if tokens[i].pos != PartOfSpeech::ProperNoun {
            i += 1;
            continue;
        }

        let start = i;
        let mut end = i + 1;
        loop {
            if end < tokens.len() && tokens[end].pos == PartOfSpeech::ProperNoun {
                end += 1;
            } else if end + 1 < tokens.len()
                && tokens[end].text == "of"
                && tokens[end + 1].pos == PartOfSpeech::ProperNoun
            {
                end += 2;
            } else {
                break;
            }
        }

        spans.push(join_tokens(&tokens[start..end]));
        i = end;
    }

    spans
}
