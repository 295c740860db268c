//! MoveCard command

use crate::context::{KanbanContext, Outcome};
use crate::error::KanbanError;
use crate::types::{position, Card, CardId, ListId};
use corkboard_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Move a card within its list or to another list on the same board.
///
/// Within one list the position is clamped to the last index; into another
/// list it is clamped to that list's length (append). An unknown card or
/// target list, or a target list on a different board, changes nothing and
/// yields `None`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveCard {
    pub id: CardId,
    /// The list the card should end up in
    pub list_id: ListId,
    pub position: usize,
}

operation!(
    MoveCard,
    verb = "move",
    noun = "card",
    description = "Move a card to a list and position"
);

impl MoveCard {
    pub fn new(id: impl Into<CardId>, list_id: impl Into<ListId>, position: usize) -> Self {
        Self {
            id: id.into(),
            list_id: list_id.into(),
            position,
        }
    }
}

impl Execute<KanbanContext, KanbanError> for MoveCard {
    type Output = Option<Card>;

    fn execute(&self, ctx: &KanbanContext) -> ExecutionResult<Option<Card>, KanbanError> {
        ctx.mutate_logged(self, |state| {
            let (Some((b, from_list, from)), Some((target_board, to_list))) = (
                state.locate_card(&self.id),
                state.locate_list(&self.list_id),
            ) else {
                return Ok(Outcome::unchanged(None));
            };

            if target_board != b {
                debug!(card = %self.id, list = %self.list_id, "target list is on another board");
                return Ok(Outcome::unchanged(None));
            }

            let board = &mut state.boards[b];

            let card = if from_list == to_list {
                let cards = &mut board.lists[to_list].cards;
                let Some(to) = position::move_within(cards, from, self.position) else {
                    return Ok(Outcome::unchanged(None));
                };
                if to == from {
                    return Ok(Outcome::unchanged(Some(cards[to].clone())));
                }
                cards[to].clone()
            } else {
                let Some(mut card) = position::remove_at(&mut board.lists[from_list].cards, from)
                else {
                    return Ok(Outcome::unchanged(None));
                };
                let target = &mut board.lists[to_list];
                card.list_id = target.id.clone();
                let to = position::insert_at(&mut target.cards, card, self.position);
                target.cards[to].clone()
            };

            board.touch();
            Ok(Outcome::changed(board.id.clone(), Some(card)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CreateBoard;
    use crate::card::CreateCard;
    use crate::test_support::{backdate, updated_at};
    use crate::types::Board;

    fn setup(cards: &[&str]) -> (KanbanContext, Board) {
        let ctx = KanbanContext::new().with_sample_cards(false);
        let board = CreateBoard::new("Launch", "user-1")
            .execute(&ctx)
            .into_result()
            .unwrap();
        for title in cards {
            CreateCard::new(&board.lists[0].id, *title)
                .execute(&ctx)
                .into_result()
                .unwrap();
        }
        let board = ctx.boards().remove(0);
        (ctx, board)
    }

    fn titles(ctx: &KanbanContext, list: &ListId) -> Vec<String> {
        ctx.snapshot()
            .list(list)
            .map(|l| l.cards.iter().map(|c| c.title.clone()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_move_card_to_front() {
        let (ctx, board) = setup(&["A", "B", "C", "D"]);
        let list = &board.lists[0];

        let moved = MoveCard::new(&list.cards[2].id, &list.id, 0)
            .execute(&ctx)
            .into_result()
            .unwrap()
            .unwrap();

        assert_eq!(moved.position, 0);
        assert_eq!(titles(&ctx, &list.id), vec!["C", "A", "B", "D"]);
        assert!(ctx.snapshot().is_consistent());
    }

    #[test]
    fn test_move_card_to_back() {
        let (ctx, board) = setup(&["A", "B", "C", "D"]);
        let list = &board.lists[0];

        MoveCard::new(&list.cards[0].id, &list.id, 3)
            .execute(&ctx)
            .into_result()
            .unwrap();

        assert_eq!(titles(&ctx, &list.id), vec!["B", "C", "D", "A"]);
    }

    #[test]
    fn test_move_card_position_clamped() {
        let (ctx, board) = setup(&["A", "B", "C"]);
        let list = &board.lists[0];

        let moved = MoveCard::new(&list.cards[0].id, &list.id, 42)
            .execute(&ctx)
            .into_result()
            .unwrap()
            .unwrap();

        assert_eq!(moved.position, 2);
        assert_eq!(titles(&ctx, &list.id), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_move_card_across_lists() {
        let (ctx, board) = setup(&["X", "Y"]);
        let source = &board.lists[0];
        let target = &board.lists[1];
        CreateCard::new(&target.id, "Z")
            .execute(&ctx)
            .into_result()
            .unwrap();

        let moved = MoveCard::new(&source.cards[0].id, &target.id, 1)
            .execute(&ctx)
            .into_result()
            .unwrap()
            .unwrap();

        assert_eq!(moved.list_id, target.id);
        assert_eq!(moved.position, 1);
        assert_eq!(titles(&ctx, &source.id), vec!["Y"]);
        assert_eq!(titles(&ctx, &target.id), vec!["Z", "X"]);
        assert!(ctx.snapshot().is_consistent());
    }

    #[test]
    fn test_move_card_into_empty_list_appends() {
        let (ctx, board) = setup(&["X"]);
        let done = &board.lists[2];

        let moved = MoveCard::new(&board.lists[0].cards[0].id, &done.id, 7)
            .execute(&ctx)
            .into_result()
            .unwrap()
            .unwrap();

        assert_eq!(moved.position, 0);
        assert_eq!(titles(&ctx, &done.id), vec!["X"]);
        assert!(titles(&ctx, &board.lists[0].id).is_empty());
    }

    #[test]
    fn test_move_card_in_place_is_noop() {
        let (ctx, board) = setup(&["A", "B"]);
        let list = &board.lists[0];
        let before = ctx.snapshot();
        let mut rx = ctx.subscribe();

        let moved = MoveCard::new(&list.cards[1].id, &list.id, 1)
            .execute(&ctx)
            .into_result()
            .unwrap();

        assert_eq!(moved.unwrap().title, "B");
        assert_eq!(ctx.snapshot(), before);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_move_card_to_other_board_is_noop() {
        let (ctx, board) = setup(&["A"]);
        let other = CreateBoard::new("Other", "user-1")
            .execute(&ctx)
            .into_result()
            .unwrap();
        let before = ctx.snapshot();

        let moved = MoveCard::new(&board.lists[0].cards[0].id, &other.lists[0].id, 0)
            .execute(&ctx)
            .into_result()
            .unwrap();

        assert!(moved.is_none());
        assert_eq!(ctx.snapshot(), before);
    }

    #[test]
    fn test_move_unknown_card_or_list_is_noop() {
        let (ctx, board) = setup(&["A"]);
        let before = ctx.snapshot();

        let unknown_card = MoveCard::new("missing", &board.lists[1].id, 0)
            .execute(&ctx)
            .into_result()
            .unwrap();
        let unknown_list = MoveCard::new(&board.lists[0].cards[0].id, "missing", 0)
            .execute(&ctx)
            .into_result()
            .unwrap();

        assert!(unknown_card.is_none());
        assert!(unknown_list.is_none());
        assert_eq!(ctx.snapshot(), before);
    }

    #[test]
    fn test_move_card_bumps_board_only_when_moved() {
        let (ctx, board) = setup(&["A", "B"]);
        let list = &board.lists[0];

        let past = backdate(&ctx, &board.id);
        MoveCard::new(&list.cards[1].id, &list.id, 1)
            .execute(&ctx)
            .into_result()
            .unwrap();
        assert_eq!(updated_at(&ctx, &board.id), past);

        MoveCard::new(&list.cards[1].id, &board.lists[1].id, 0)
            .execute(&ctx)
            .into_result()
            .unwrap();
        assert!(updated_at(&ctx, &board.id) > past);
    }

    #[test]
    fn test_move_card_input_is_camel_case() {
        let input = serde_json::to_value(MoveCard::new("card-1", "list-1", 2)).unwrap();
        assert_eq!(input["id"], "card-1");
        assert_eq!(input["listId"], "list-1");
        assert!(input.get("list_id").is_none());
    }
}
