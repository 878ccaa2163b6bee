// Keyword analysis core: tokenize, extract, match, categorize, score, highlight.
// Everything here is synchronous and pure. Configuration tables live in `lexicon`
// and are passed in explicitly; nothing reads ambient globals.

pub mod categorizer;
pub mod handlers;
pub mod highlighter;
pub mod keywords;
pub mod lexicon;
pub mod matcher;
pub mod pipeline;
pub mod scoring;
pub mod tokenizer;
