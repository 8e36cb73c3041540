//! Integration tests for the nickname tally
//!
//! These tests verify:
//! - First-seen ordering and counts
//! - Missing or wrongly-typed intermediate fields contribute nothing
//! - The counts always sum to the number of cards carrying a nickname

use camino::Utf8PathBuf;
use lorcana_deck_manager::services::tally::{tally_file, tally_value};
use lorcana_deck_manager::services::validation::ValidationError;
use proptest::prelude::*;
use serde_json::{Value, json};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_duplicate_nicknames_counted_in_order() {
    let doc = json!({"ObjectStates":[{"ContainedObjects":[
        {"Nickname":"Elsa"},{"Nickname":"Elsa"},{"Nickname":"Moana"},{}
    ]}]});

    let tally = tally_value(&doc);
    let entries: Vec<_> = tally.iter().collect();

    assert_eq!(entries, vec![("Elsa", 2), ("Moana", 1)]);
    assert_eq!(tally.total(), 3);
}

#[test]
fn test_no_object_states() {
    assert!(tally_value(&json!({})).is_empty());
}

#[test]
fn test_missing_and_malformed_branches_are_skipped() {
    let doc = json!({"ObjectStates":[
        {},
        {"ContainedObjects": null},
        {"ContainedObjects": [ "card", 12, {"Name": "Card"}, {"Nickname": "Mickey Mouse"} ]},
        "state"
    ]});

    let tally = tally_value(&doc);
    assert_eq!(tally.len(), 1);
    assert_eq!(tally.get("Mickey Mouse"), Some(1));
}

#[test]
fn test_every_nickname_field_is_counted() {
    let doc = json!({"ObjectStates":[{"ContainedObjects":[
        {"Nickname":"Elsa"},{"Nickname":3},{"Nickname":null},{}
    ]}]});

    let tally = tally_value(&doc);

    assert_eq!(tally.total(), 3);
    assert_eq!(tally.lines(), vec!["1x Elsa", "1x 3", "1x null"]);
}

#[test]
fn test_tally_file() {
    let temp_dir = TempDir::new().unwrap();
    let dir = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
    let path = dir.join("deck.json");
    fs::write(
        &path,
        r#"{"SaveName":"","ObjectStates":[{"Name":"DeckCustom","ContainedObjects":[
            {"Name":"Card","Nickname":"Belle"},{"Name":"Card","Nickname":"Gaston"},
            {"Name":"Card","Nickname":"Belle"}]}]}"#,
    )
    .unwrap();

    let tally = tally_file(&path).unwrap();
    assert_eq!(tally.lines(), vec!["2x Belle", "1x Gaston"]);

    fs::write(&path, "{\"ObjectStates\": [").unwrap();
    assert!(matches!(
        tally_file(&path),
        Err(ValidationError::Malformed { .. })
    ));
}

fn arb_card() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop::sample::select(vec![
        "Elsa", "Moana", "Stitch", "Maui", "Ariel",
    ]))
    .prop_map(|name| name.map(str::to_string))
}

fn arb_deck() -> impl Strategy<Value = Vec<Option<Vec<Option<String>>>>> {
    prop::collection::vec(
        prop::option::of(prop::collection::vec(arb_card(), 0..12)),
        0..5,
    )
}

fn deck_to_json(states: &[Option<Vec<Option<String>>>]) -> Value {
    let states: Vec<Value> = states
        .iter()
        .map(|state| match state {
            Some(cards) => {
                let cards: Vec<Value> = cards
                    .iter()
                    .map(|card| match card {
                        Some(name) => json!({"Name": "Card", "Nickname": name}),
                        None => json!({"Name": "Card"}),
                    })
                    .collect();
                json!({"Name": "Deck", "ContainedObjects": cards})
            }
            None => json!({"Name": "Bag"}),
        })
        .collect();
    json!({ "ObjectStates": states })
}

proptest! {
    #[test]
    fn prop_counts_sum_to_nicknamed_cards(deck in arb_deck()) {
        let expected = deck
            .iter()
            .flatten()
            .flatten()
            .filter(|card| card.is_some())
            .count();

        let tally = tally_value(&deck_to_json(&deck));

        prop_assert_eq!(tally.total(), expected);
        prop_assert!(tally.iter().all(|(_, count)| count > 0));
    }

    #[test]
    fn prop_first_seen_order(deck in arb_deck()) {
        let mut first_seen: Vec<String> = Vec::new();
        for name in deck.iter().flatten().flatten().flatten() {
            if !first_seen.contains(name) {
                first_seen.push(name.clone());
            }
        }

        let tally = tally_value(&deck_to_json(&deck));
        let order: Vec<String> = tally.iter().map(|(name, _)| name.to_string()).collect();

        prop_assert_eq!(order, first_seen);
    }
}
