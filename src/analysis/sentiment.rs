//! Lexicon-based sentiment scoring
//!
//! A text's score is `(p - n) / (p + n)` where `p` and `n` are the summed
//! substring occurrence counts of the positive and negative lexicon terms in
//! the normalized, lowercased text. Matching is plain substring search, so a
//! term inside a longer word counts, and overlapping terms each count.

use crate::analysis::text::normalize;
use crate::models::{ArticleRecord, SentimentLabel, SentimentResult, SentimentStatistics};

pub const KOREAN_POSITIVE: &[&str] = &[
    "좋다", "훌륭하다", "우수하다", "성공", "발전", "성장", "상승", "증가", "개선", "향상",
    "긍정적", "효과적", "유익", "도움", "혜택", "이익", "수익", "호조", "활성화", "회복",
    "안정", "확대", "강화", "발달", "진전", "진보", "번영", "풍요", "만족", "기대",
    "희망", "신뢰", "믿음", "확신", "낙관", "밝다", "밝은", "좋은", "훌륭한",
];

pub const KOREAN_NEGATIVE: &[&str] = &[
    "나쁘다", "문제", "위험", "위기", "하락", "감소", "악화", "부정적", "손실", "손해",
    "피해", "타격", "충격", "우려", "걱정", "불안", "어려움", "곤란", "어렵다", "힘들다",
    "실패", "좌절", "침체", "둔화", "악영향", "부작용", "문제점", "단점", "취약", "불리",
    "비관", "절망", "실망", "후회", "분노", "화", "짜증", "스트레스", "압박", "부담",
];

/// Immutable positive and negative term lists
#[derive(Debug, Clone)]
pub struct Lexicon {
    positive: Vec<String>,
    negative: Vec<String>,
}

impl Lexicon {
    pub fn new<P, N>(positive: P, negative: N) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        N: IntoIterator,
        N::Item: Into<String>,
    {
        Self {
            positive: positive.into_iter().map(Into::into).collect(),
            negative: negative.into_iter().map(Into::into).collect(),
        }
    }

    /// The built-in Korean news lexicon
    pub fn korean_default() -> Self {
        Self::new(KOREAN_POSITIVE.iter().copied(), KOREAN_NEGATIVE.iter().copied())
    }
}

fn occurrences(text: &str, terms: &[String]) -> usize {
    terms
        .iter()
        .filter(|term| !term.is_empty())
        .map(|term| text.matches(term.as_str()).count())
        .sum()
}

/// Rounds to `decimals` places, halves away from zero
///
/// Banker's rounding would turn 0.0625 into 0.062; this gives 0.063.
fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Scores texts against a [`Lexicon`]
#[derive(Debug, Clone)]
pub struct SentimentScorer {
    lexicon: Lexicon,
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::new(Lexicon::korean_default())
    }
}

impl SentimentScorer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Scores a single text
    pub fn score(&self, text: &str) -> SentimentResult {
        let cleaned = normalize(text).to_lowercase();
        if cleaned.is_empty() {
            return SentimentResult::neutral();
        }

        let positive_count = occurrences(&cleaned, &self.lexicon.positive);
        let negative_count = occurrences(&cleaned, &self.lexicon.negative);

        let total = positive_count + negative_count;
        if total == 0 {
            return SentimentResult {
                positive_count,
                negative_count,
                ..SentimentResult::neutral()
            };
        }

        let raw = (positive_count as f64 - negative_count as f64) / total as f64;

        SentimentResult {
            sentiment: SentimentLabel::from_score(raw),
            score: round_to(raw, 3),
            positive_count,
            negative_count,
        }
    }

    /// Scores every article over its title, search snippet and content
    pub fn score_articles(&self, articles: &mut [ArticleRecord]) {
        for article in articles.iter_mut() {
            article.sentiment = Some(self.score(&article.sentiment_text()));
        }
    }

    /// Aggregates per-article results into run statistics
    ///
    /// An empty input yields all-zero statistics with a neutral overall label.
    pub fn aggregate(&self, results: &[SentimentResult]) -> SentimentStatistics {
        let total = results.len();
        let count = |label: SentimentLabel| results.iter().filter(|r| r.sentiment == label).count();

        let positive_count = count(SentimentLabel::Positive);
        let negative_count = count(SentimentLabel::Negative);
        let neutral_count = count(SentimentLabel::Neutral);

        if total == 0 {
            return SentimentStatistics {
                total_articles: 0,
                positive_count,
                negative_count,
                neutral_count,
                positive_ratio: 0.0,
                negative_ratio: 0.0,
                neutral_ratio: 0.0,
                average_score: 0.0,
                overall_sentiment: SentimentLabel::Neutral,
            };
        }

        let ratio = |n: usize| round_to(n as f64 / total as f64 * 100.0, 1);
        let average = results.iter().map(|r| r.score).sum::<f64>() / total as f64;

        SentimentStatistics {
            total_articles: total,
            positive_count,
            negative_count,
            neutral_count,
            positive_ratio: ratio(positive_count),
            negative_ratio: ratio(negative_count),
            neutral_ratio: ratio(neutral_count),
            average_score: round_to(average, 3),
            overall_sentiment: SentimentLabel::from_score(average),
        }
    }

    /// Aggregates the results attached to scored articles
    pub fn aggregate_articles(&self, articles: &[ArticleRecord]) -> SentimentStatistics {
        let results: Vec<SentimentResult> = articles
            .iter()
            .map(|a| a.sentiment.clone().unwrap_or_else(SentimentResult::neutral))
            .collect();
        self.aggregate(&results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding_halves_away_from_zero() {
        assert_eq!(round_to(0.0625, 3), 0.063);
        assert_eq!(round_to(-0.0625, 3), -0.063);
    }

    fn scorer() -> SentimentScorer {
        SentimentScorer::default()
    }

    fn result(sentiment: SentimentLabel, score: f64) -> SentimentResult {
        SentimentResult {
            sentiment,
            score,
            positive_count: 0,
            negative_count: 0,
        }
    }

    #[test]
    fn test_three_positive_one_negative() {
        let scorer = SentimentScorer::new(Lexicon::new(["성장"], ["위기"]));
        let r = scorer.score("성장 성장 성장 위기");
        assert_eq!(r.positive_count, 3);
        assert_eq!(r.negative_count, 1);
        assert_eq!(r.score, 0.5);
        assert_eq!(r.sentiment, SentimentLabel::Positive);
    }

    #[test]
    fn test_no_lexicon_hits_is_neutral() {
        let r = scorer().score("그냥 평범한 문장");
        assert_eq!(r.positive_count, 0);
        assert_eq!(r.negative_count, 0);
        assert_eq!(r.score, 0.0);
        assert_eq!(r.sentiment, SentimentLabel::Neutral);
    }

    #[test]
    fn test_empty_text_is_neutral() {
        assert_eq!(scorer().score(""), SentimentResult::neutral());
    }

    #[test]
    fn test_good_news_is_positive() {
        let r = scorer().score("정말 좋은 소식이네요");
        assert_eq!(r.sentiment, SentimentLabel::Positive);
        assert!(r.score > 0.0);
    }

    #[test]
    fn test_negative_text() {
        let r = scorer().score("경기 침체 우려 확산");
        assert_eq!(r.sentiment, SentimentLabel::Negative);
        assert_eq!(r.score, -1.0);
    }

    #[test]
    fn test_substring_matches_count() {
        // "문제점" contains "문제", both terms count
        let r = scorer().score("문제점");
        assert_eq!(r.negative_count, 2);
    }

    #[test]
    fn test_score_is_rounded() {
        let scorer = SentimentScorer::new(Lexicon::new(["성장"], ["위기"]));
        let r = scorer.score("성장 성장 위기");
        assert_eq!(r.score, 0.333);
    }

    #[test]
    fn test_aggregate_ratios_sum_to_hundred() {
        let results = vec![
            result(SentimentLabel::Positive, 0.5),
            result(SentimentLabel::Negative, -1.0),
            result(SentimentLabel::Neutral, 0.0),
        ];
        let stats = scorer().aggregate(&results);
        assert_eq!(stats.total_articles, 3);
        assert_eq!(stats.positive_ratio, 33.3);
        let sum = stats.positive_ratio + stats.negative_ratio + stats.neutral_ratio;
        assert!((sum - 100.0).abs() <= 0.2);
        assert_eq!(stats.average_score, -0.167);
        assert_eq!(stats.overall_sentiment, SentimentLabel::Negative);
    }

    #[test]
    fn test_aggregate_empty() {
        let stats = scorer().aggregate(&[]);
        assert_eq!(stats.total_articles, 0);
        assert_eq!(stats.average_score, 0.0);
        assert_eq!(stats.overall_sentiment, SentimentLabel::Neutral);
    }

    #[test]
    fn test_aggregate_overall_positive() {
        let results = vec![
            result(SentimentLabel::Positive, 1.0),
            result(SentimentLabel::Neutral, 0.0),
        ];
        let stats = scorer().aggregate(&results);
        assert_eq!(stats.positive_count, 1);
        assert_eq!(stats.neutral_count, 1);
        assert_eq!(stats.overall_sentiment, SentimentLabel::Positive);
    }
}
