use std::sync::Arc;

use gundagardi::dictionary::{
    first_definition, random_funny_message, Definition, DefinitionEntry, DictionaryError, Meaning,
    RecentSearches, RECENT_SEARCH_CAP,
};
use gundagardi::prefs::{MemoryPreferences, PreferenceStore, RECENT_SEARCHES};

fn entry(word: &str, definition: &str) -> DefinitionEntry {
    DefinitionEntry {
        word: word.to_string(),
        phonetics: Vec::new(),
        meanings: vec![Meaning {
            part_of_speech: "noun".to_string(),
            definitions: vec![Definition {
                definition: definition.to_string(),
                example: None,
                synonyms: Vec::new(),
                antonyms: Vec::new(),
            }],
        }],
        source_urls: Vec::new(),
    }
}

fn test_first_definition() {
    println!("\n====== Testing first definition extraction ======");
    let entries = vec![
        entry("education", "the process of receiving or giving systematic instruction"),
        entry("education", "an enlightening experience"),
    ];
    assert_eq!(
        first_definition(&entries).unwrap(),
        "the process of receiving or giving systematic instruction"
    );

    assert!(first_definition(&[]).is_none());

    let no_meanings = DefinitionEntry {
        word: "blank".to_string(),
        phonetics: Vec::new(),
        meanings: Vec::new(),
        source_urls: Vec::new(),
    };
    assert!(first_definition(&[no_meanings]).is_none());
    println!("✓ First definition of the first meaning wins; empty input gives None");
}

fn test_history_cap() {
    println!("\n====== Testing history cap ======");
    let mut recent = RecentSearches::load(Arc::new(MemoryPreferences::new()));

    for term in ["one", "two", "three", "four", "five", "six"] {
        recent.record(term, "some definition").unwrap();
    }

    assert_eq!(recent.list().len(), RECENT_SEARCH_CAP);
    assert_eq!(recent.list()[0].term, "six");
    assert_eq!(recent.list()[4].term, "two");
    // "one" fell off the end
    assert!(recent.list().iter().all(|s| s.term != "one"));
    println!("✓ Six lookups keep only the newest five, newest first");
}

fn test_history_dedup_moves_to_front() {
    println!("\n====== Testing history dedup ======");
    let mut recent = RecentSearches::load(Arc::new(MemoryPreferences::new()));

    for term in ["education", "knowledge", "wisdom"] {
        recent.record(term, "def").unwrap();
    }
    recent.record("education", "a newer definition").unwrap();

    let terms: Vec<&str> = recent.list().iter().map(|s| s.term.as_str()).collect();
    assert_eq!(terms, vec!["education", "wisdom", "knowledge"]);
    assert_eq!(recent.list().len(), 3);
    println!("✓ Repeating a term moves it to the front without duplicating it");
}

fn test_snippet_truncation() {
    println!("\n====== Testing snippet truncation ======");
    let mut recent = RecentSearches::load(Arc::new(MemoryPreferences::new()));

    let long: String = "x".repeat(250);
    recent.record("long", &long).unwrap();
    let snippet = &recent.list()[0].snippet;
    assert_eq!(snippet.chars().count(), 103);
    assert!(snippet.ends_with("..."));

    recent.record("short", "tiny").unwrap();
    assert_eq!(recent.list()[0].snippet, "tiny...");
    println!("✓ Snippets cut at 100 characters with a trailing ellipsis");
}

fn test_history_persists_through_store() {
    println!("\n====== Testing history persistence ======");
    let store = Arc::new(MemoryPreferences::new());

    {
        let mut recent = RecentSearches::load(store.clone());
        recent.record("education", "systematic instruction").unwrap();
        recent.record("knowledge", "facts and skills").unwrap();
    }

    // The store now holds a JSON list under the well-known key
    let raw = store.get(RECENT_SEARCHES).unwrap();
    assert!(raw.contains("\"education\""));

    let reloaded = RecentSearches::load(store.clone());
    let terms: Vec<&str> = reloaded.list().iter().map(|s| s.term.as_str()).collect();
    assert_eq!(terms, vec!["knowledge", "education"]);
    println!("✓ A fresh instance reloads the recorded history from the store");
}

fn test_corrupt_history_starts_empty() {
    println!("\n====== Testing corrupt history handling ======");
    let store = Arc::new(MemoryPreferences::new());
    store.set(RECENT_SEARCHES, "not valid json at all").unwrap();

    let recent = RecentSearches::load(store);
    assert!(recent.list().is_empty());
    println!("✓ Unparseable stored history degrades to an empty list");
}

fn test_not_found_message() {
    println!("\n====== Testing lookup error messages ======");
    let err = DictionaryError::NotFound {
        term: "qwzrty".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "\"qwzrty\" ka matlab nahi mila. Spelling sahi se likh bhai!"
    );

    let err = DictionaryError::Failed(500);
    assert_eq!(err.to_string(), "Failed to fetch definition");
    println!("✓ Error messages name the term and stay user-facing");
}

fn test_funny_messages() {
    println!("\n====== Testing no-result quips ======");
    for _ in 0..20 {
        let msg = random_funny_message();
        assert!(!msg.is_empty());
    }
    println!("✓ The random quip picker always returns a message");
}

fn test_entries_parse_from_api_json() {
    println!("\n====== Testing API response parsing ======");
    let json = r#"[{
        "word": "education",
        "phonetic": "/ˌɛd.jʊˈkeɪ.ʃən/",
        "phonetics": [{"text": "/ˌɛd.jʊˈkeɪ.ʃən/", "audio": ""}],
        "meanings": [{
            "partOfSpeech": "noun",
            "definitions": [{
                "definition": "The process of imparting knowledge, skill and judgment.",
                "synonyms": [],
                "antonyms": []
            }]
        }],
        "sourceUrls": ["https://en.wiktionary.org/wiki/education"]
    }]"#;

    let entries: Vec<DefinitionEntry> = serde_json::from_str(json).unwrap();
    assert_eq!(entries[0].word, "education");
    assert_eq!(entries[0].meanings[0].part_of_speech, "noun");
    assert_eq!(
        first_definition(&entries).unwrap(),
        "The process of imparting knowledge, skill and judgment."
    );
    println!("✓ A real-shaped API payload deserializes, unknown keys ignored");
}

fn main() {
    test_first_definition();
    test_history_cap();
    test_history_dedup_moves_to_front();
    test_snippet_truncation();
    test_history_persists_through_store();
    test_corrupt_history_starts_empty();
    test_not_found_message();
    test_funny_messages();
    test_entries_parse_from_api_json();

    println!("\nAll dictionary tests passed!");
}
