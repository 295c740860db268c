//! Search candidates built from a user's boards

use crate::ranker::SearchResultKind;
use corkboard_kanban::{Board, Label, LabelId, UserId};
use std::collections::HashSet;

/// One searchable entity with the fields the ranker scores
#[derive(Debug, Clone, PartialEq)]
pub struct SearchCandidate {
    pub id: String,
    pub kind: SearchResultKind,
    pub title: String,
    pub description: Option<String>,
    pub board_title: Option<String>,
    pub list_title: Option<String>,
    pub labels: Vec<Label>,
}

/// Build candidates for every board owned by `user`.
///
/// Boards are visited in store order; each board is followed by its lists and
/// each list by its cards. Distinct labels found on those cards come last,
/// attributed to the first board they appear on.
pub fn build_index(boards: &[Board], user: &UserId) -> Vec<SearchCandidate> {
    let mut candidates = Vec::new();
    let mut labels: Vec<(Label, String)> = Vec::new();
    let mut seen: HashSet<&LabelId> = HashSet::new();

    for board in boards.iter().filter(|b| &b.user_id == user) {
        candidates.push(SearchCandidate {
            id: board.id.to_string(),
            kind: SearchResultKind::Board,
            title: board.title.clone(),
            description: Some(format!("Board with {} lists", board.lists.len())),
            board_title: None,
            list_title: None,
            labels: Vec::new(),
        });

        for list in &board.lists {
            candidates.push(SearchCandidate {
                id: list.id.to_string(),
                kind: SearchResultKind::List,
                title: list.title.clone(),
                description: Some(format!(
                    "List in {} with {} cards",
                    board.title,
                    list.cards.len()
                )),
                board_title: Some(board.title.clone()),
                list_title: None,
                labels: Vec::new(),
            });

            for card in &list.cards {
                candidates.push(SearchCandidate {
                    id: card.id.to_string(),
                    kind: SearchResultKind::Card,
                    title: card.title.clone(),
                    description: Some(
                        card.description
                            .clone()
                            .filter(|d| !d.is_empty())
                            .unwrap_or_else(|| format!("Card in {}", list.title)),
                    ),
                    board_title: Some(board.title.clone()),
                    list_title: Some(list.title.clone()),
                    labels: card.labels.clone(),
                });

                for label in &card.labels {
                    if seen.insert(&label.id) {
                        labels.push((label.clone(), board.title.clone()));
                    }
                }
            }
        }
    }

    candidates.extend(labels.into_iter().map(|(label, board_title)| SearchCandidate {
        id: label.id.to_string(),
        kind: SearchResultKind::Label,
        title: label.title.clone(),
        description: None,
        board_title: Some(board_title),
        list_title: None,
        labels: Vec::new(),
    }));

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use corkboard_kanban::{Card, LabelColor};

    fn board(owner: &str) -> Board {
        let mut board = Board::new("Launch", owner);
        board.push_list("To Do");
        let list_id = board.lists[0].id.clone();
        let bug = Label::new("bug", "Bug", LabelColor::Red);

        let mut first = Card::new(list_id.clone(), "Fix login");
        first.add_label(bug.clone());
        board.lists[0].push_card(first);
        let mut second = Card::new(list_id, "Fix logout").with_description("Session cleanup");
        second.add_label(bug);
        board.lists[0].push_card(second);
        board
    }

    #[test]
    fn test_index_order_and_fields() {
        let boards = vec![board("user-1")];
        let index = build_index(&boards, &UserId::from("user-1"));

        let kinds: Vec<SearchResultKind> = index.iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SearchResultKind::Board,
                SearchResultKind::List,
                SearchResultKind::Card,
                SearchResultKind::Card,
                SearchResultKind::Label,
            ]
        );
        assert_eq!(index[0].description.as_deref(), Some("Board with 1 lists"));
        assert_eq!(
            index[1].description.as_deref(),
            Some("List in Launch with 2 cards")
        );
        assert_eq!(index[2].description.as_deref(), Some("Card in To Do"));
        assert_eq!(index[3].description.as_deref(), Some("Session cleanup"));
        assert_eq!(index[3].list_title.as_deref(), Some("To Do"));
        assert_eq!(index[4].title, "Bug");
        assert_eq!(index[4].board_title.as_deref(), Some("Launch"));
    }

    #[test]
    fn test_index_only_includes_owned_boards() {
        let boards = vec![board("user-1"), board("user-2")];
        let index = build_index(&boards, &UserId::from("user-2"));
        assert_eq!(index.len(), 5);
        assert_eq!(index[0].id, boards[1].id.to_string());
        assert!(build_index(&boards, &UserId::from("user-3")).is_empty());
    }
}
