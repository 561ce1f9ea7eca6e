use serde_json::json;

use super::*;
use crate::model::EntryId;

fn client(base: &str) -> RemoteClient {
    let config = ViewerConfig {
        api_base: base.to_string(),
        list_limit: 151,
        ..ViewerConfig::default()
    };
    RemoteClient::new(&config).unwrap()
}

fn detail(value: serde_json::Value) -> DetailRecord {
    serde_json::from_value(value).unwrap()
}

#[test]
fn urls_hang_off_the_api_root() {
    let c = client("http://127.0.0.1:9/api/v2/");
    assert_eq!(c.api_root(), "http://127.0.0.1:9/api/v2");
    assert_eq!(c.list_url(), "http://127.0.0.1:9/api/v2/pokemon?limit=151");
    assert_eq!(c.detail_url(EntryId(25)), "http://127.0.0.1:9/api/v2/pokemon/25");
    assert_eq!(
        c.species_url(EntryId(25)),
        "http://127.0.0.1:9/api/v2/pokemon-species/25"
    );
}

#[test]
fn official_artwork_wins_over_default_sprite() {
    let entry = normalize(detail(json!({
        "id": 25,
        "name": "pikachu",
        "sprites": {
            "front_default": "https://img/sprite/25.png",
            "other": { "official-artwork": { "front_default": "https://img/art/25.png" } }
        },
        "types": [{ "slot": 1, "type": { "name": "electric", "url": "x" } }]
    })));
    assert_eq!(entry.id, EntryId(25));
    assert_eq!(entry.name, "pikachu");
    assert_eq!(entry.sprite_url, "https://img/art/25.png");
    assert_eq!(entry.types, vec!["electric".to_string()]);
}

#[test]
fn default_sprite_used_when_artwork_missing_or_null() {
    let missing = normalize(detail(json!({
        "id": 1,
        "name": "bulbasaur",
        "sprites": { "front_default": "https://img/sprite/1.png" },
        "types": []
    })));
    assert_eq!(missing.sprite_url, "https://img/sprite/1.png");

    let null = normalize(detail(json!({
        "id": 1,
        "name": "bulbasaur",
        "sprites": {
            "front_default": "https://img/sprite/1.png",
            "other": { "official-artwork": { "front_default": null } }
        }
    })));
    assert_eq!(null.sprite_url, "https://img/sprite/1.png");
}

#[test]
fn no_image_gives_empty_url() {
    let entry = normalize(detail(json!({
        "id": 10,
        "name": "caterpie",
        "sprites": { "front_default": null }
    })));
    assert_eq!(entry.sprite_url, "");
    assert!(entry.types.is_empty());
}

#[test]
fn types_keep_declared_order() {
    let entry = normalize(detail(json!({
        "id": 6,
        "name": "charizard",
        "types": [
            { "slot": 1, "type": { "name": "fire" } },
            { "slot": 2, "type": { "name": "flying" } }
        ]
    })));
    assert_eq!(entry.types, vec!["fire".to_string(), "flying".to_string()]);
}

#[test]
fn list_response_ignores_extra_fields() {
    let list: ListResponse = serde_json::from_value(json!({
        "count": 2,
        "next": null,
        "results": [
            { "name": "bulbasaur", "url": "https://x/pokemon/1/" },
            { "name": "ivysaur", "url": "https://x/pokemon/2/" }
        ]
    }))
    .unwrap();
    assert_eq!(list.results.len(), 2);
    assert_eq!(list.results[1].name, "ivysaur");
}

fn species() -> SpeciesRecord {
    serde_json::from_value(json!({
        "names": [
            { "name": "Pikachu", "language": { "name": "en" } },
            { "name": "ピカチュウ", "language": { "name": "ja" } }
        ],
        "flavor_text_entries": [
            { "flavor_text": "When several of\nthese POKéMON\u{000C}gather", "language": { "name": "en" } },
            { "flavor_text": "Second english entry", "language": { "name": "en" } },
            { "flavor_text": "Il stocke\nde l'électricité.", "language": { "name": "fr" } }
        ]
    }))
    .unwrap()
}

#[test]
fn localized_name_matches_exact_language() {
    let s = species();
    assert_eq!(find_localized_name(&s, "ja").as_deref(), Some("ピカチュウ"));
    assert_eq!(find_localized_name(&s, "fr"), None);
    assert_eq!(find_localized_name(&s, "EN"), None);
}

#[test]
fn description_takes_first_match_and_flattens_breaks() {
    let s = species();
    assert_eq!(
        find_localized_description(&s, "en").as_deref(),
        Some("When several of these POKéMON gather")
    );
    assert_eq!(
        find_localized_description(&s, "fr").as_deref(),
        Some("Il stocke de l'électricité.")
    );
    assert_eq!(find_localized_description(&s, "de"), None);
}

#[test]
fn species_without_arrays_parses_as_empty() {
    let s: SpeciesRecord = serde_json::from_value(json!({ "id": 25 })).unwrap();
    assert_eq!(find_localized_name(&s, "fr"), None);
    assert_eq!(find_localized_description(&s, "fr"), None);
}

#[test]
fn clean_flavor_text_replaces_each_break_with_one_space() {
    assert_eq!(clean_flavor_text("a\nb\u{000C}c"), "a b c");
    assert_eq!(clean_flavor_text("a\n\nb"), "a  b");
    assert_eq!(clean_flavor_text("plain"), "plain");
}

#[test]
fn catalog_errors_name_what_failed() {
    let list = CatalogError::list("status 503");
    assert_eq!(list.user_message(), "unable to fetch the catalog list");
    assert!(list.to_string().contains("status 503"));

    let detail = CatalogError::detail("pikachu", "status 500");
    assert_eq!(detail.user_message(), "failed to fetch details for pikachu");
    assert!(detail.to_string().contains("pikachu"));
}
