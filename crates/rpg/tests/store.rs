use assert_matches::assert_matches;
use painel_core::error::CoreError;
use painel_core::geometry::Rgb;
use painel_rpg::account::MSG_USERNAME_TAKEN;
use painel_rpg::character::{Character, CharacterClass};
use painel_rpg::store::{StoreError, UserMap, UserRecord, UserStore};
use painel_rpg::AccountBook;
use serde_json::json;

const HASH: &str = "240be518fabd2724ddb6f04eeb1da5967448d7e831c08c8fa822809f74c720a9";

fn store_with(contents: &str) -> (tempfile::TempDir, UserStore) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users_v2.json");
    std::fs::write(&path, contents).unwrap();
    (dir, UserStore::new(path))
}

fn record_json() -> serde_json::Value {
    json!({
        "password": HASH,
        "character": {
            "name": "aria",
            "class_type": "mage",
            "level": 3,
            "intelligence": 18,
            "skin_color": [255, 213, 170],
            "hair_color": [255, 215, 0],
        },
        "created_at": "2024-03-01T10:15:30.123456",
        "last_login": null,
        "achievements": [],
        "total_playtime": 42
    })
}

#[test]
fn missing_file_is_none() {
    let dir = tempfile::tempdir().unwrap();
    let store = UserStore::new(dir.path().join("absent.json"));
    assert!(store.load().unwrap().is_none());
}

#[test]
fn malformed_json_is_a_parse_error() {
    let (_dir, store) = store_with("{ not json");
    assert_matches!(store.load(), Err(StoreError::Parse { .. }));
}

#[test]
fn out_of_range_attribute_is_a_decode_error() {
    let mut record = record_json();
    record["character"]["strength"] = json!(25);
    let (_dir, store) = store_with(&json!({ "aria": record }).to_string());
    let err = store.load().unwrap_err();
    assert_matches!(err, StoreError::Decode(ref e) if e.field == "aria.character.strength");
}

#[test]
fn wrong_field_type_is_a_decode_error() {
    let mut record = record_json();
    record["total_playtime"] = json!("forever");
    let (_dir, store) = store_with(&json!({ "aria": record }).to_string());
    assert_matches!(store.load(), Err(StoreError::Decode(_)));
}

#[test]
fn colour_lists_load_as_triples_and_missing_fields_default() {
    let (_dir, store) = store_with(&json!({ "aria": record_json() }).to_string());
    let users = store.load().unwrap().unwrap();
    let record = &users["aria"];

    assert_eq!(record.character.class_type, CharacterClass::Mage);
    assert_eq!(record.character.hair_color, Rgb::new(255, 215, 0));
    assert_eq!(record.character.eye_color, Character::default().eye_color);
    assert_eq!(record.character.strength, 10);
    assert_eq!(record.total_playtime, 42);
    assert!(record.last_login.is_none());
}

#[test]
fn save_then_load_preserves_records() {
    let dir = tempfile::tempdir().unwrap();
    let store = UserStore::new(dir.path().join("users_v2.json"));
    let created = chrono::NaiveDate::from_ymd_opt(2024, 5, 4)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();

    let mut users = UserMap::new();
    let mut character = Character::named("bram");
    character.hair_style = 2;
    users.insert(
        "bram".into(),
        UserRecord::new(HASH.into(), character, created),
    );
    store.save(&users).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
    assert_eq!(raw["bram"]["character"]["skin_color"], json!([255, 213, 170]));

    assert_eq!(store.load().unwrap().unwrap(), users);
}

#[test]
fn malformed_file_opens_an_empty_book_and_is_kept_aside() {
    let (_dir, store) = store_with("{ not json");
    let original = store.path().to_path_buf();
    let aside = store.set_aside_path();

    let mut book = AccountBook::open(store);
    assert!(book.users().is_empty());
    assert!(!original.exists());
    assert_eq!(std::fs::read_to_string(&aside).unwrap(), "{ not json");

    book.register("ana", "secret1", "secret1").unwrap();
    assert!(original.exists());
    assert_eq!(std::fs::read_to_string(&aside).unwrap(), "{ not json");
}

#[test]
fn one_bad_record_does_not_wipe_the_others_on_save() {
    let mut bad = record_json();
    bad["character"]["strength"] = json!(99);
    let contents = json!({ "aria": record_json(), "bram": bad }).to_string();
    let (_dir, store) = store_with(&contents);
    let aside = store.set_aside_path();

    let mut book = AccountBook::open(store);
    assert!(book.users().is_empty());
    book.register("ana", "secret1", "secret1").unwrap();

    assert_eq!(std::fs::read_to_string(&aside).unwrap(), contents);
}

#[test]
fn unwritable_store_keeps_accounts_in_memory() {
    let dir = tempfile::tempdir().unwrap();
    // A directory can be neither read nor written as a file.
    let store = UserStore::new(dir.path());
    assert_matches!(store.load(), Err(StoreError::Io { .. }));

    let mut book = AccountBook::open(store);
    assert!(book.users().is_empty());
    assert!(dir.path().is_dir());

    book.register("ana", "secret1", "secret1").unwrap();
    assert!(book.contains("ana"));
    assert!(book.login("ana", "secret1").is_ok());
    assert_matches!(
        book.register("ana", "secret2", "secret2"),
        Err(CoreError::Conflict(msg)) if msg == MSG_USERNAME_TAKEN
    );
}
