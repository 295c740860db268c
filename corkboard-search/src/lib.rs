//! Corkboard search
//!
//! Ranks the boards, lists, cards and labels a user owns against a free-text
//! query, and keeps a short most-recent-first list of past queries.
//!
//! ## Scoring
//!
//! Every candidate field is compared to the query case-insensitively:
//!
//! | match | score |
//! |-------|-------|
//! | equal | 100 |
//! | prefix | 80 |
//! | substring | 60 |
//! | in-order subsequence | sum of `10 / (gap + 1)` per character |
//!
//! Field scores are weighted (title ×3, description ×2, board and list
//! title ×1, each label ×2) and summed. Candidates scoring zero are dropped.
//!
//! ```rust
//! use corkboard_kanban::{board::CreateBoard, Execute, KanbanContext, UserId};
//! use corkboard_search::SearchRanker;
//!
//! let ctx = KanbanContext::new();
//! CreateBoard::new("Launch", "user-1").execute(&ctx).into_result().unwrap();
//!
//! let results = SearchRanker::new().search_context(&ctx, "launch", Some(&UserId::from("user-1")));
//! assert_eq!(results[0].title, "Launch");
//! assert!(results[0].is_exact_match());
//! ```

mod error;
mod history;
mod index;
mod ranker;
mod score;

pub use error::{Result, SearchError};
pub use history::RecentSearches;
pub use index::{build_index, SearchCandidate};
pub use ranker::{SearchRanker, SearchResult, SearchResultKind, DEFAULT_MAX_RESULTS};
pub use score::similarity;
