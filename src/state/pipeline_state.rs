/// Pipeline state definitions for tracking run progress
///
/// A run moves forward through the stages in a fixed order. `Failed` can be
/// entered from any non-terminal state; `Done` only from `Rendering`.
use std::fmt;

/// Represents the current stage of a pipeline run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineState {
    /// Nothing has started yet
    Idle,

    // ===== Active States =====
    /// Search-result pages are being fetched and parsed
    Crawling,

    /// Article bodies are being fetched
    ContentFetching,

    /// Article summaries are being generated
    Summarizing,

    /// Keywords are being ranked
    KeywordExtraction,

    /// Articles are being scored and aggregated
    SentimentAnalysis,

    /// The report is being written
    Rendering,

    // ===== Terminal States =====
    /// The run finished all stages
    Done,

    /// The run halted on an unrecoverable error
    Failed,
}

impl PipelineState {
    /// Returns true if no further transition is possible
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }

    /// Progress weight reported when the state is entered
    ///
    /// `Failed` reports no weight of its own; the last reported weight stands.
    pub fn weight(&self) -> Option<u8> {
        match self {
            Self::Idle => Some(0),
            Self::Crawling => Some(10),
            Self::ContentFetching => Some(30),
            Self::Summarizing => Some(50),
            Self::KeywordExtraction => Some(70),
            Self::SentimentAnalysis => Some(75),
            Self::Rendering => Some(90),
            Self::Done => Some(100),
            Self::Failed => None,
        }
    }

    /// The state that follows this one on a successful run
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::Idle => Some(Self::Crawling),
            Self::Crawling => Some(Self::ContentFetching),
            Self::ContentFetching => Some(Self::Summarizing),
            Self::Summarizing => Some(Self::KeywordExtraction),
            Self::KeywordExtraction => Some(Self::SentimentAnalysis),
            Self::SentimentAnalysis => Some(Self::Rendering),
            Self::Rendering => Some(Self::Done),
            Self::Done | Self::Failed => None,
        }
    }

    /// Returns true if moving from `self` to `to` is allowed
    pub fn can_transition_to(&self, to: Self) -> bool {
        if self.is_terminal() {
            return false;
        }
        to == Self::Failed || self.next() == Some(to)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Crawling => "crawling",
            Self::ContentFetching => "content_fetching",
            Self::Summarizing => "summarizing",
            Self::KeywordExtraction => "keyword_extraction",
            Self::SentimentAnalysis => "sentiment_analysis",
            Self::Rendering => "rendering",
            Self::Done => "done",
            Self::Failed => "failed",
        }
    }

    /// Returns all states in run order, `Failed` last
    pub fn all_states() -> Vec<Self> {
        vec![
            Self::Idle,
            Self::Crawling,
            Self::ContentFetching,
            Self::Summarizing,
            Self::KeywordExtraction,
            Self::SentimentAnalysis,
            Self::Rendering,
            Self::Done,
            Self::Failed,
        ]
    }
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
