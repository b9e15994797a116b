//! Keyword frequency ranking
//!
//! Tokens are runs of two or more Hangul syllables taken from normalized
//! text. Stopwords and numeric tokens are dropped, the rest are counted
//! across the whole corpus, and the top N are returned by descending count.
//! Equal counts keep the order in which the words first appeared.

use crate::analysis::text::{hangul_words, normalize};
use crate::models::{ArticleRecord, KeywordRecord};
use std::collections::{HashMap, HashSet};

/// Particles, generic news vocabulary and place names excluded from rankings
pub const KOREAN_STOPWORDS: &[&str] = &[
    "것", "수", "등", "때", "곳", "점", "개", "명", "번", "차", "년", "월", "일",
    "이", "그", "저", "의", "를", "에", "가", "은", "는", "이다", "있다", "하다",
    "되다", "같다", "다른", "새로운", "많은", "좋은", "큰", "작은", "높은", "낮은",
    "기자", "뉴스", "기사", "보도", "취재", "인터뷰", "발표", "설명", "말",
    "오늘", "어제", "내일", "이번", "다음", "지난", "최근", "현재", "앞으로",
    "서울", "경기", "인천", "부산", "대구", "광주", "대전", "울산", "세종",
    "한국", "우리나라", "국내", "전국", "지역", "지방", "수도권", "비수도권",
];

/// Counts and ranks keywords over a corpus
#[derive(Debug, Clone)]
pub struct KeywordEngine {
    stopwords: HashSet<String>,
}

impl Default for KeywordEngine {
    fn default() -> Self {
        Self::new(KOREAN_STOPWORDS.iter().copied())
    }
}

impl KeywordEngine {
    /// Creates an engine with the given stopword list
    pub fn new<I, S>(stopwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            stopwords: stopwords.into_iter().map(Into::into).collect(),
        }
    }

    /// Tokens of one text that survive filtering, in order
    pub fn tokens(&self, text: &str) -> Vec<String> {
        let normalized = normalize(text);
        hangul_words(&normalized)
            .filter(|word| !self.stopwords.contains(*word))
            .filter(|word| !word.chars().all(|c| c.is_numeric()))
            .map(str::to_string)
            .collect()
    }

    /// Top `top_n` keywords across `texts`
    ///
    /// # Arguments
    ///
    /// * `texts` - The corpus, in order; earlier texts win ties
    /// * `top_n` - Maximum number of keywords returned
    pub fn rank<'a, I>(&self, texts: I, top_n: usize) -> Vec<KeywordRecord>
    where
        I: IntoIterator<Item = &'a str>,
    {
        // Insertion order of `order` is first-occurrence order
        let mut counts: HashMap<String, usize> = HashMap::new();
        let mut order: Vec<String> = Vec::new();

        for text in texts {
            for token in self.tokens(text) {
                match counts.get_mut(&token) {
                    Some(count) => *count += 1,
                    None => {
                        counts.insert(token.clone(), 1);
                        order.push(token);
                    }
                }
            }
        }

        let mut ranked: Vec<KeywordRecord> = order
            .into_iter()
            .map(|word| {
                let count = counts.get(&word).copied().unwrap_or_default();
                KeywordRecord { word, count }
            })
            .collect();

        // Stable sort keeps first-occurrence order among equal counts
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(top_n);
        ranked
    }

    /// Ranks keywords over each article's title, best summary and content
    pub fn rank_articles(&self, articles: &[ArticleRecord], top_n: usize) -> Vec<KeywordRecord> {
        let texts: Vec<String> = articles.iter().map(ArticleRecord::keyword_text).collect();
        self.rank(texts.iter().map(String::as_str), top_n)
    }
}
