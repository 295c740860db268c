//! UpdateCard command

use crate::context::{KanbanContext, Outcome};
use crate::error::{require_text, KanbanError};
use crate::types::{Card, CardId, Label};
use chrono::{DateTime, Utc};
use corkboard_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Deserializer, Serialize};

/// Update card properties.
///
/// Only the fields that were set are changed. Optional card fields use a
/// nested `Option`: `Some(None)` clears the field. In JSON an absent key
/// leaves the field alone and `null` clears it. An unknown card is left alone
/// and yields `None`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCard {
    pub id: CardId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present"
    )]
    pub description: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present"
    )]
    pub due_date: Option<Option<DateTime<Utc>>>,
    /// Replacement label set, deduplicated by id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<Label>>,
}

/// A key that is present, even with a `null` value, deserializes to `Some`
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

operation!(
    UpdateCard,
    verb = "update",
    noun = "card",
    description = "Update card properties"
);

impl UpdateCard {
    /// Create a new UpdateCard command
    pub fn new(id: impl Into<CardId>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(Some(description.into()));
        self
    }

    pub fn clear_description(mut self) -> Self {
        self.description = Some(None);
        self
    }

    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(Some(due_date));
        self
    }

    pub fn clear_due_date(mut self) -> Self {
        self.due_date = Some(None);
        self
    }

    pub fn with_labels(mut self, labels: Vec<Label>) -> Self {
        self.labels = Some(labels);
        self
    }

    fn apply_to(&self, card: &mut Card, title: Option<String>) {
        if let Some(title) = title {
            card.title = title;
        }
        if let Some(description) = &self.description {
            card.description = description.clone();
        }
        if let Some(due_date) = self.due_date {
            card.due_date = due_date;
        }
        if let Some(labels) = &self.labels {
            card.set_labels(labels.clone());
        }
    }
}

impl Execute<KanbanContext, KanbanError> for UpdateCard {
    type Output = Option<Card>;

    fn execute(&self, ctx: &KanbanContext) -> ExecutionResult<Option<Card>, KanbanError> {
        ctx.mutate_logged(self, |state| {
            let title = self
                .title
                .as_deref()
                .map(|t| require_text("title", t))
                .transpose()?;

            let Some((b, l, c)) = state.locate_card(&self.id) else {
                return Ok(Outcome::unchanged(None));
            };

            let board = &mut state.boards[b];
            let card = &mut board.lists[l].cards[c];
            self.apply_to(card, title);
            let card = card.clone();
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
    use crate::types::{LabelColor, LabelId};
    use chrono::TimeZone;
    use serde_json::json;

    fn setup() -> (KanbanContext, Card) {
        let ctx = KanbanContext::new().with_sample_cards(false);
        let board = CreateBoard::new("Launch", "user-1")
            .execute(&ctx)
            .into_result()
            .unwrap();
        let card = CreateCard::new(&board.lists[0].id, "Draft post")
            .with_description("First draft")
            .execute(&ctx)
            .into_result()
            .unwrap();
        (ctx, card)
    }

    #[test]
    fn test_update_card_merges_fields() {
        let (ctx, card) = setup();
        let due = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();

        let updated = UpdateCard::new(&card.id)
            .with_title("Publish post")
            .with_due_date(due)
            .execute(&ctx)
            .into_result()
            .unwrap()
            .unwrap();

        assert_eq!(updated.title, "Publish post");
        assert_eq!(updated.description.as_deref(), Some("First draft"));
        assert_eq!(updated.due_date, Some(due));
        assert_eq!(updated.position, card.position);
        assert_eq!(updated.list_id, card.list_id);
    }

    #[test]
    fn test_update_card_clears_optional_fields() {
        let (ctx, card) = setup();
        let due = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
        UpdateCard::new(&card.id)
            .with_due_date(due)
            .execute(&ctx)
            .into_result()
            .unwrap();

        let updated = UpdateCard::new(&card.id)
            .clear_description()
            .clear_due_date()
            .execute(&ctx)
            .into_result()
            .unwrap()
            .unwrap();

        assert!(updated.description.is_none());
        assert!(updated.due_date.is_none());
        assert_eq!(updated.title, "Draft post");
    }

    #[test]
    fn test_update_card_dedupes_labels() {
        let (ctx, card) = setup();
        let bug = Label::new("bug", "Bug", LabelColor::Red);

        let updated = UpdateCard::new(&card.id)
            .with_labels(vec![
                bug.clone(),
                Label::new("feature", "Feature", LabelColor::Green),
                bug,
            ])
            .execute(&ctx)
            .into_result()
            .unwrap()
            .unwrap();

        assert_eq!(updated.labels.len(), 2);
        assert!(updated.has_label(&LabelId::from("bug")));
        assert!(updated.has_label(&LabelId::from("feature")));
    }

    #[test]
    fn test_update_unknown_card_is_noop() {
        let (ctx, _card) = setup();
        let before = ctx.snapshot();

        let result = UpdateCard::new("missing")
            .with_title("Anything")
            .execute(&ctx)
            .into_result()
            .unwrap();

        assert!(result.is_none());
        assert_eq!(ctx.snapshot(), before);
    }

    #[test]
    fn test_update_card_blank_title_rejected() {
        let (ctx, card) = setup();

        let err = UpdateCard::new(&card.id)
            .with_title(" ")
            .execute(&ctx)
            .into_result()
            .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(ctx.snapshot().card(&card.id).unwrap().title, "Draft post");
    }

    #[test]
    fn test_update_card_bumps_board() {
        let (ctx, card) = setup();
        let board_id = ctx.boards()[0].id.clone();
        let past = backdate(&ctx, &board_id);

        UpdateCard::new(&card.id)
            .with_title("Publish post")
            .execute(&ctx)
            .into_result()
            .unwrap();
        assert!(updated_at(&ctx, &board_id) > past);

        let past = backdate(&ctx, &board_id);
        UpdateCard::new("missing")
            .with_title("Anything")
            .execute(&ctx)
            .into_result()
            .unwrap();
        assert_eq!(updated_at(&ctx, &board_id), past);
    }

    #[test]
    fn test_clear_survives_json() {
        let (ctx, card) = setup();
        let due = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
        UpdateCard::new(&card.id)
            .with_due_date(due)
            .execute(&ctx)
            .into_result()
            .unwrap();

        let command = UpdateCard::new(&card.id).clear_description().clear_due_date();
        let value = serde_json::to_value(&command).unwrap();
        assert_eq!(value["description"], json!(null));
        assert_eq!(value["dueDate"], json!(null));
        assert!(value.get("title").is_none());

        let parsed: UpdateCard = serde_json::from_value(value).unwrap();
        assert_eq!(parsed.description, Some(None));
        assert_eq!(parsed.due_date, Some(None));
        assert!(parsed.title.is_none());

        let updated = parsed.execute(&ctx).into_result().unwrap().unwrap();
        assert!(updated.description.is_none());
        assert!(updated.due_date.is_none());
        assert_eq!(updated.title, "Draft post");
    }

    #[test]
    fn test_absent_fields_are_left_alone() {
        let (ctx, card) = setup();

        let parsed: UpdateCard =
            serde_json::from_value(json!({ "id": card.id.as_str(), "title": "Renamed" })).unwrap();
        assert!(parsed.description.is_none());
        assert!(parsed.due_date.is_none());

        let updated = parsed.execute(&ctx).into_result().unwrap().unwrap();
        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.description.as_deref(), Some("First draft"));
    }
}
