//! Enrichment stages: summarization, keyword ranking and sentiment scoring
//!
//! All engines are pure over their inputs. Lexicons and stopword lists are
//! injected at construction and never change afterwards.

mod keywords;
mod sentiment;
mod summarizer;
mod text;

pub use keywords::{KeywordEngine, KOREAN_STOPWORDS};
pub use sentiment::{Lexicon, SentimentScorer, KOREAN_NEGATIVE, KOREAN_POSITIVE};
pub use summarizer::{summarize_articles, LeadSummarizer, Summarizer};
pub use text::{hangul_words, normalize};
