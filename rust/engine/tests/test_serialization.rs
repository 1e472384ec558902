mod common;

use common::{arranged_game, card};
use notty_engine::cards::Card;
use notty_engine::rules::{ActionKind, GroupKind};
use serde_json::json;

#[test]
fn card_uses_lowercase_color() {
    let value = serde_json::to_value(card("yellow 7")).unwrap();
    assert_eq!(value, json!({ "color": "yellow", "number": 7 }));
}

#[test]
fn card_deserialization_validates_number() {
    let ok: Card = serde_json::from_value(json!({ "color": "black", "number": 9 })).unwrap();
    assert_eq!(ok, card("black 9"));

    let err = serde_json::from_value::<Card>(json!({ "color": "black", "number": 10 }));
    assert!(err.is_err());
    let err = serde_json::from_value::<Card>(json!({ "color": "purple", "number": 1 }));
    assert!(err.is_err());
}

#[test]
fn action_kinds_and_groups_are_snake_case() {
    assert_eq!(
        serde_json::to_value(ActionKind::DrawDiscardDraw).unwrap(),
        json!("draw_discard_draw")
    );
    assert_eq!(serde_json::to_value(GroupKind::Run).unwrap(), json!("run"));
}

#[test]
fn snapshot_reports_budget_and_availability() {
    let mut game = arranged_game(&[&["red 1", "red 2"], &["blue 5"]]);
    assert!(game.player_draw_discard_draws());

    let value = serde_json::to_value(game.snapshot()).unwrap();
    assert_eq!(value["deck_size"], 86);
    assert_eq!(value["current_player"], 0);
    assert_eq!(value["winner"], serde_json::Value::Null);
    assert_eq!(value["actions_used"]["draw_discard_draw"], 1);
    assert_eq!(value["actions_used"]["draw"], 0);
    assert_eq!(value["players"][0]["hand_size"], 3);
    assert_eq!(value["players"][1]["cards"], json!([{ "color": "blue", "number": 5 }]));
    assert_eq!(
        value["available"],
        json!(["draw", "steal", "draw_discard_discard"])
    );
}
