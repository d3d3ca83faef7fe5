// ============================================================
// Layer 4 — Text Cleaner
// ============================================================
// Normalises raw news articles and highlight summaries before
// tokenisation. The corpus carries the usual web-scrape noise:
// URLs, @-mentions, hashtags, HTML fragments such as "<br />"
// and "&amp;", non-ASCII bytes, and English contractions.
//
// The cleaner is an ordered pipeline of pure string transforms
// applied left-to-right. The order IS the contract — later
// stages assume earlier ones already ran (stopword removal
// expects lowercased, punctuation-free text; the length filter
// expects stopwords to be gone).
//
//   1. expand_contractions   can't → can not, 're → are, ...
//   2. strip_entities        lowercase, URLs/mentions, ASCII,
//                            punctuation, stopwords, long words
//   3. clean_hashtags        trailing #tags dropped, mid-text
//                            #tags keep their word
//   4. filter_symbol_tokens  tokens containing '$' or '&' go
//   5. squeeze_whitespace    collapse runs of spaces
//
// Stemming, lemmatisation and emoji stripping exist as optional
// stages, off by default — they did not help on this corpus.
//
// Every stage maps the empty string to the empty string, and
// every lookup table is a process-wide immutable static built
// once on first use.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::{HashMap, HashSet};

use crate::domain::traits::Normalize;

// ─── Fixed lookup tables ─────────────────────────────────────────────────────

/// Literal contraction rewrites, applied in this exact order.
/// "can't" must come before the generic "n't" rule, and "n't"
/// before the bare "'t" rule, or the generic rules would eat
/// the specific forms first.
const CONTRACTIONS: &[(&str, &str)] = &[
    ("can't", "can not"),
    ("n't", " not"),
    ("'re", " are"),
    ("'s", " is"),
    ("'d", " would"),
    ("'ll", " will"),
    ("'t", " not"),
    ("'ve", " have"),
    ("'m", " am"),
];

/// The standard ASCII punctuation set — every one of these
/// characters is deleted outright (not replaced by a space).
const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Tokens longer than this never carry signal in this corpus —
/// they are mangled URLs, concatenated words or encoding junk.
const MAX_WORD_LEN: usize = 14;

/// The 179-entry English stopword list (NLTK corpus ordering).
const STOPWORD_LIST: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're",
    "you've", "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he",
    "him", "his", "himself", "she", "she's", "her", "hers", "herself", "it",
    "it's", "its", "itself", "they", "them", "their", "theirs", "themselves",
    "what", "which", "who", "whom", "this", "that", "that'll", "these", "those",
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and",
    "but", "if", "or", "because", "as", "until", "while", "of", "at", "by",
    "for", "with", "about", "against", "between", "into", "through", "during",
    "before", "after", "above", "below", "to", "from", "up", "down", "in",
    "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both",
    "each", "few", "more", "most", "other", "some", "such", "no", "nor", "not",
    "only", "own", "same", "so", "than", "too", "very", "s", "t", "can",
    "will", "just", "don", "don't", "should", "should've", "now", "d", "ll",
    "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't",
    "didn", "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't",
    "haven", "haven't", "isn", "isn't", "ma", "mightn", "mightn't", "mustn",
    "mustn't", "needn", "needn't", "shan", "shan't", "shouldn", "shouldn't",
    "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn", "wouldn't",
];

static STOPWORDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| STOPWORD_LIST.iter().copied().collect());

// Compiled once on first use, shared read-only afterwards
static RE_MENTION_OR_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:@|https?://)\S+").unwrap());
static RE_RESIDUAL_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)https?://.*[\r\n]*").unwrap());
static RE_SYMBOL_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[_"\-;%()|+&=*%.,!?:#$@\[\]/]"#).unwrap());
static RE_MULTI_WS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s\s+").unwrap());

static STEMMER: Lazy<Stemmer> = Lazy::new(|| Stemmer::create(Algorithm::English));

/// Irregular noun forms the suffix rules below cannot reach
static LEMMA_EXCEPTIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("men", "man"),
        ("women", "woman"),
        ("children", "child"),
        ("people", "person"),
        ("feet", "foot"),
        ("teeth", "tooth"),
        ("geese", "goose"),
        ("mice", "mouse"),
        ("wives", "wife"),
        ("knives", "knife"),
        ("leaves", "leaf"),
        ("lives", "life"),
    ])
});

// ─── Pipeline stages ─────────────────────────────────────────────────────────

/// Stage 1: rewrite English contractions to their full forms.
/// Case-sensitive, literal substitution — "Can't" is left alone
/// because the apostrophe forms only ever appear lowercased in
/// mid-word position by the time they matter.
pub fn expand_contractions(text: &str) -> String {
    CONTRACTIONS
        .iter()
        .fold(text.to_string(), |acc, (from, to)| acc.replace(from, to))
}

/// Stage 2: lowercase and strip corpus noise.
///
/// Sub-steps run in a fixed order: line-break collapse, URL and
/// @-mention removal, non-ASCII removal, punctuation deletion,
/// stopword filtering, the >= 14-char word filter, then a sweep
/// of residual HTML fragments. Stopwords go BEFORE the length
/// filter, so a removed stopword's length never matters.
pub fn strip_entities(text: &str) -> String {
    let text = text.replace('\r', "").replace('\n', " ").to_lowercase();
    let text = RE_MENTION_OR_URL.replace_all(&text, "").into_owned();
    let text: String = text.chars().filter(|c| c.is_ascii()).collect();
    let text: String = text.chars().filter(|c| !PUNCTUATION.contains(*c)).collect();
    let text = text
        .split_whitespace()
        .filter(|word| !STOPWORDS.contains(*word))
        .collect::<Vec<_>>()
        .join(" ");
    let text = text
        .split_whitespace()
        .filter(|word| word.chars().count() < MAX_WORD_LEN)
        .collect::<Vec<_>>()
        .join(" ");
    let text = RE_RESIDUAL_URL.replace_all(&text, "").into_owned();
    let text = text.replace("<a href", " ");
    let text = text.replace("&amp;", "");
    let text = RE_SYMBOL_RUN.replace_all(&text, " ").into_owned();
    let text = text.replace("<br />", " ");
    text.replace('\'', " ")
}

/// Stage 3: drop the trailing run of hashtags at the end of the
/// string, then strip the '#'/'_' symbols off any tags left in
/// the middle, keeping the tagged word itself.
///
/// A tag whose word is exactly "hashtag" is exempt from the
/// trailing-run removal — "#hashtag" is corpus vocabulary, not
/// a tag.
pub fn clean_hashtags(text: &str) -> String {
    let tokens: Vec<&str> = text.split_whitespace().collect();

    // Walk backwards over the trailing run of hashtag-shaped tokens
    let mut run_start = tokens.len();
    while run_start > 0 && is_hashtag(tokens[run_start - 1]) {
        run_start -= 1;
    }

    // Inside the run only exempted tags survive
    let kept: Vec<&str> = tokens
        .iter()
        .enumerate()
        .filter(|(i, token)| *i < run_start || hashtag_exempt(token))
        .map(|(_, token)| *token)
        .collect();
    let without_trailing = kept.join(" ");

    // Mid-sentence tags keep their word, losing the symbols
    without_trailing
        .split(['#', '_'])
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(" ")
}

/// True when the token looks like "#word" (word chars or '-')
fn is_hashtag(token: &str) -> bool {
    match token.strip_prefix('#') {
        Some(word) => {
            !word.is_empty()
                && word
                    .chars()
                    .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
        }
        None => false,
    }
}

/// The literal word "hashtag" is never treated as a trailing tag
fn hashtag_exempt(token: &str) -> bool {
    match token.strip_prefix('#') {
        Some(word) => word == "hashtag" || word.starts_with("hashtag-"),
        None => false,
    }
}

/// Stage 4: a token containing '$' or '&' contributes nothing —
/// it is replaced by the empty string, not by a placeholder.
/// "$100" disappears entirely.
pub fn filter_symbol_tokens(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            if word.contains('$') || word.contains('&') {
                ""
            } else {
                word
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Stage 5: collapse any run of two or more whitespace chars
/// into a single space. Idempotent.
pub fn squeeze_whitespace(text: &str) -> String {
    RE_MULTI_WS.replace_all(text, " ").into_owned()
}

// ─── Optional stages (off by default) ────────────────────────────────────────

/// Porter-family suffix stripping, word by word.
pub fn stem(text: &str) -> String {
    text.split_whitespace()
        .map(|word| STEMMER.stem(word).into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Dictionary lemmatisation: irregular-form lookup first, then
/// conservative plural-suffix detachment. Noun forms only.
pub fn lemmatize(text: &str) -> String {
    text.split_whitespace()
        .map(lemma_noun)
        .collect::<Vec<_>>()
        .join(" ")
}

fn lemma_noun(word: &str) -> String {
    if let Some(lemma) = LEMMA_EXCEPTIONS.get(word) {
        return (*lemma).to_string();
    }
    if let Some(stem) = word.strip_suffix("sses") {
        return format!("{stem}ss");
    }
    if word.len() > 3 {
        if let Some(stem) = word.strip_suffix("ies") {
            return format!("{stem}y");
        }
    }
    if word.ends_with("ss") {
        return word.to_string();
    }
    if word.len() > 2 {
        if let Some(stem) = word.strip_suffix('s') {
            return stem.to_string();
        }
    }
    word.to_string()
}

/// Remove characters in the common emoji codepoint ranges.
pub fn strip_emoji(text: &str) -> String {
    text.chars().filter(|c| !is_emoji(*c)).collect()
}

fn is_emoji(c: char) -> bool {
    matches!(
        u32::from(c),
        0x1F1E6..=0x1F1FF   // regional indicators
        | 0x1F300..=0x1F5FF // symbols and pictographs
        | 0x1F600..=0x1F64F // emoticons
        | 0x1F680..=0x1F6FF // transport
        | 0x1F900..=0x1FAFF // supplemental pictographs
        | 0x2600..=0x27BF   // misc symbols and dingbats
        | 0xFE00..=0xFE0F   // variation selectors
    )
}

// ─── TextNormalizer ──────────────────────────────────────────────────────────

/// Which optional stages to append to the fixed pipeline.
/// All off by default — the production pipeline runs exactly
/// the five fixed stages.
#[derive(Debug, Clone, Copy, Default)]
pub struct CleanOptions {
    /// Porter-family stemming after whitespace normalisation
    pub stemming: bool,

    /// Dictionary lemmatisation after whitespace normalisation
    pub lemmatize: bool,

    /// Emoji removal ahead of contraction expansion
    pub strip_emoji: bool,
}

/// The deterministic document cleaner. Stateless per call —
/// the only shared state is the read-only lookup tables above,
/// so cleaning is safely parallelisable across records.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextNormalizer {
    options: CleanOptions,
}

impl TextNormalizer {
    /// Production pipeline: the five fixed stages, nothing else
    pub fn new() -> Self {
        Self::default()
    }

    /// Pipeline with optional stages switched on
    pub fn with_options(options: CleanOptions) -> Self {
        Self { options }
    }

    /// The ordered stage list for this configuration.
    /// Exposed so each stage stays unit-testable in isolation.
    fn pipeline(&self) -> Vec<fn(&str) -> String> {
        let mut stages: Vec<fn(&str) -> String> = Vec::new();
        if self.options.strip_emoji {
            stages.push(strip_emoji);
        }
        stages.push(expand_contractions);
        stages.push(strip_entities);
        stages.push(clean_hashtags);
        stages.push(filter_symbol_tokens);
        stages.push(squeeze_whitespace);
        if self.options.stemming {
            stages.push(stem);
        }
        if self.options.lemmatize {
            stages.push(lemmatize);
        }
        stages
    }

    /// Run the full pipeline over one document.
    /// Never panics on well-formed string input.
    pub fn clean(&self, text: &str) -> String {
        self.pipeline()
            .iter()
            .fold(text.to_string(), |doc, stage| stage(&doc))
    }
}

impl Normalize for TextNormalizer {
    fn clean(&self, text: &str) -> String {
        TextNormalizer::clean(self, text)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expands_cant_to_can_not() {
        assert_eq!(expand_contractions("can't go"), "can not go");
    }

    #[test]
    fn test_generic_nt_rule() {
        assert_eq!(expand_contractions("don't"), "do not");
        assert_eq!(expand_contractions("we're they'll"), "we are they will");
    }

    #[test]
    fn test_strip_entities_removes_links_and_mentions() {
        let out = strip_entities("Check https://example.com/x @bob wrote headlines");
        assert_eq!(out, "check wrote headlines");
    }

    #[test]
    fn test_strip_entities_output_is_ascii() {
        let out = strip_entities("café naïve 😀 résumé plain");
        assert!(out.chars().all(|c| c.is_ascii()));
    }

    #[test]
    fn test_pure_punctuation_token_disappears() {
        // "!!!" is deleted char by char, leaving no placeholder
        let out = strip_entities("good !!! news");
        assert_eq!(out, "good news");
    }

    #[test]
    fn test_stopwords_removed() {
        // "ourselves" and "the" are stopwords, "report" is not
        let out = strip_entities("ourselves the report");
        assert_eq!(out, "report");
    }

    #[test]
    fn test_no_long_token_survives() {
        let out = strip_entities("short pneumonoultramicroscopic word");
        assert!(out.split_whitespace().all(|w| w.chars().count() < 14));
        assert_eq!(out, "short word");
    }

    #[test]
    fn test_trailing_hashtags_removed() {
        let cleaned = squeeze_whitespace(&clean_hashtags("great news #world #news"));
        assert_eq!(cleaned.trim(), "great news");
    }

    #[test]
    fn test_hashtag_word_is_exempt() {
        // the literal tag "#hashtag" is not part of a trailing run
        let cleaned = squeeze_whitespace(&clean_hashtags("I love #hashtag today"));
        assert_eq!(cleaned.trim(), "I love hashtag today");
    }

    #[test]
    fn test_exempt_tag_inside_trailing_run_survives() {
        let cleaned = squeeze_whitespace(&clean_hashtags("a #x #hashtag #y"));
        assert_eq!(cleaned.trim(), "a hashtag");
    }

    #[test]
    fn test_mid_sentence_hashtag_keeps_word() {
        let cleaned = squeeze_whitespace(&clean_hashtags("big #breaking story today"));
        assert_eq!(cleaned.trim(), "big breaking story today");
    }

    #[test]
    fn test_dollar_and_amp_tokens_filtered() {
        let out = squeeze_whitespace(&filter_symbol_tokens("won $100 at AT&T yesterday"));
        assert_eq!(out.trim(), "won at yesterday");
    }

    #[test]
    fn test_squeeze_is_idempotent() {
        let once = squeeze_whitespace("a  b\t\tc   d");
        let twice = squeeze_whitespace(&once);
        assert_eq!(once, twice);
        assert_eq!(once, "a b c d");
    }

    #[test]
    fn test_empty_string_at_every_stage() {
        assert_eq!(expand_contractions(""), "");
        assert_eq!(strip_entities(""), "");
        assert_eq!(clean_hashtags(""), "");
        assert_eq!(filter_symbol_tokens(""), "");
        assert_eq!(squeeze_whitespace(""), "");
        assert_eq!(TextNormalizer::new().clean(""), "");
    }

    #[test]
    fn test_full_clean_is_a_fixed_point() {
        let normalizer = TextNormalizer::new();
        let raw = "Stocks & Shares can't rally today!! http://t.co/abc #markets #news";
        let once = normalizer.clean(raw);
        let twice = normalizer.clean(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_full_clean_end_to_end() {
        let normalizer = TextNormalizer::new();
        let out = normalizer.clean("The CEO said: we'll DOUBLE our profits!\r\n@press https://x.co");
        // stopwords, punctuation, mention and link all gone, lowercased
        assert_eq!(out, "ceo said double profits");
    }

    #[test]
    fn test_stemming_stage_is_off_by_default() {
        let normalizer = TextNormalizer::new();
        let out = normalizer.clean("running quickly");
        assert_eq!(out, "running quickly");
    }

    #[test]
    fn test_stemming_stage_when_enabled() {
        let normalizer = TextNormalizer::with_options(CleanOptions {
            stemming: true,
            ..Default::default()
        });
        let out = normalizer.clean("running quickly");
        assert_eq!(out, "run quick");
    }

    #[test]
    fn test_lemmatizer_irregulars_and_plurals() {
        assert_eq!(lemmatize("children stories women"), "child story woman");
    }

    #[test]
    fn test_strip_emoji_when_enabled() {
        assert_eq!(strip_emoji("fire 🔥 sale"), "fire  sale");
    }
}
