//! Weighted ranking of search candidates

use crate::index::{build_index, SearchCandidate};
use crate::score::similarity;
use corkboard_config::SearchConfig;
use corkboard_kanban::{Board, KanbanContext, Label, UserId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Results returned when no limit is configured
pub const DEFAULT_MAX_RESULTS: usize = 50;

const TITLE_WEIGHT: f64 = 3.0;
const DESCRIPTION_WEIGHT: f64 = 2.0;
const BOARD_TITLE_WEIGHT: f64 = 1.0;
const LIST_TITLE_WEIGHT: f64 = 1.0;
const LABEL_WEIGHT: f64 = 2.0;

/// What a search result points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchResultKind {
    Board,
    List,
    Card,
    Label,
}

/// A ranked hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: SearchResultKind,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_title: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<Label>,
    pub score: f64,
}

impl SearchResult {
    /// True when the match is stronger than a plain prefix hit
    pub fn is_exact_match(&self) -> bool {
        self.score > 80.0
    }

    fn from_candidate(candidate: SearchCandidate, score: f64) -> Self {
        Self {
            id: candidate.id,
            kind: candidate.kind,
            title: candidate.title,
            description: candidate.description,
            board_title: candidate.board_title,
            list_title: candidate.list_title,
            labels: candidate.labels,
            score,
        }
    }
}

/// Ranks a user's boards, lists, cards and labels against a query
#[derive(Debug, Clone)]
pub struct SearchRanker {
    max_results: usize,
}

impl Default for SearchRanker {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchRanker {
    pub fn new() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new().with_max_results(config.max_results)
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    /// Weighted total for one candidate
    pub fn score(candidate: &SearchCandidate, query: &str) -> f64 {
        let optional = |field: &Option<String>, weight: f64| {
            field
                .as_deref()
                .map_or(0.0, |text| similarity(text, query) * weight)
        };

        similarity(&candidate.title, query) * TITLE_WEIGHT
            + optional(&candidate.description, DESCRIPTION_WEIGHT)
            + optional(&candidate.board_title, BOARD_TITLE_WEIGHT)
            + optional(&candidate.list_title, LIST_TITLE_WEIGHT)
            + candidate
                .labels
                .iter()
                .map(|label| similarity(&label.title, query) * LABEL_WEIGHT)
                .sum::<f64>()
    }

    /// Rank everything `user` owns in `boards` against `query`.
    ///
    /// A blank query or a missing user yields no results. Results are sorted
    /// by descending score; ties keep index order.
    pub fn search(&self, boards: &[Board], query: &str, user: Option<&UserId>) -> Vec<SearchResult> {
        let Some(user) = user else {
            return Vec::new();
        };
        if query.trim().is_empty() {
            return Vec::new();
        }

        let mut results: Vec<SearchResult> = build_index(boards, user)
            .into_iter()
            .filter_map(|candidate| {
                let score = Self::score(&candidate, query);
                (score > 0.0).then(|| SearchResult::from_candidate(candidate, score))
            })
            .collect();

        results.sort_by(|a, b| b.score.total_cmp(&a.score));
        results.truncate(self.max_results);

        debug!(query, user = %user, hits = results.len(), "ranked search results");
        results
    }

    /// [`search`](Self::search) against a copy of the boards currently in
    /// `ctx`. The context lock is released before ranking starts.
    pub fn search_context(
        &self,
        ctx: &KanbanContext,
        query: &str,
        user: Option<&UserId>,
    ) -> Vec<SearchResult> {
        self.search(&ctx.boards(), query, user)
    }
}
