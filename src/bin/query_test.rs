use gundagardi::catalog::{poems, stories};
use gundagardi::feedback::FeedbackRow;
use gundagardi::query::{apply, Query, Record, SortDirection};

// Helper to build a feedback row without going through validation
fn row(name: &str, rating: &str, category: &str, message: &str, email: &str, ts: &str) -> FeedbackRow {
    FeedbackRow {
        name: name.to_string(),
        rating: rating.to_string(),
        category: category.to_string(),
        message: message.to_string(),
        email: email.to_string(),
        timestamp: ts.to_string(),
    }
}

fn sample_rows() -> Vec<FeedbackRow> {
    vec![
        row("Asha", "5", "general", "Great app for exam prep", "asha@example.com", "2024-01-03T00:00:00.000Z"),
        row("Test User", "2", "bug", "Broken button on the poems page", "Not provided", "2024-01-01T00:00:00.000Z"),
        row("Kunal", "4", "feature", "Please add more stories", "kunal@example.com", "2024-01-02T00:00:00.000Z"),
        row("Pranit", "3", "content", "TEST entry from Pranit", "Not provided", "2024-01-04T00:00:00.000Z"),
    ]
}

// An unfiltered query returns every record exactly once
fn test_unfiltered_is_permutation() {
    println!("\n====== Testing unfiltered query ======");
    let all = stories();
    let view = apply(&all, &Query::unfiltered());

    assert_eq!(view.len(), all.len());
    for story in &all {
        assert!(
            view.iter().filter(|s| s.id == story.id).count() == 1,
            "story {} should appear exactly once",
            story.id
        );
    }
    println!("✓ Unfiltered query returned all {} stories exactly once", all.len());
}

fn test_category_filter() {
    println!("\n====== Testing category filter ======");
    let all = stories();

    let social = apply(&all, &Query::unfiltered().with_category("social"));
    assert!(!social.is_empty());
    assert!(social.iter().all(|s| s.category == "social"));
    println!("✓ Every filtered story has category 'social'");

    let none = apply(&all, &Query::unfiltered().with_category("nonexistent"));
    assert!(none.is_empty());
    println!("✓ Unknown category yields an empty view, not an error");

    let everything = apply(&all, &Query::unfiltered().with_category("all"));
    assert_eq!(everything.len(), all.len());
    println!("✓ The 'all' sentinel keeps every record");
}

// The social filter yields exactly two stories, alphabetical by title
fn test_social_stories_scenario() {
    println!("\n====== Testing social stories scenario ======");
    let all = stories();
    let q = Query::unfiltered()
        .with_category("social")
        .sorted_by("title", SortDirection::Ascending);
    let view = apply(&all, &q);

    assert_eq!(view.len(), 2);
    let titles: Vec<&str> = view.iter().map(|s| s.title.as_str()).collect();
    assert!(titles.contains(&"बात अठन्नी की"));
    assert!(titles.contains(&"बड़े घर की बेटी"));
    assert!(view[0].title <= view[1].title, "view should be ordered by title");
    println!("✓ Exactly the two social stories returned, ordered by title");
}

fn test_search_case_insensitive() {
    println!("\n====== Testing case-insensitive search ======");
    let rows = sample_rows();

    let upper = apply(&rows, &Query::unfiltered().with_search("TEST"));
    let lower = apply(&rows, &Query::unfiltered().with_search("test"));
    assert_eq!(upper, lower);
    assert_eq!(upper.len(), 2); // "Test User" by name, "TEST entry" by message
    println!("✓ 'TEST' and 'test' return identical result sets");

    // Also holds over the Devanagari catalog, where neither form matches
    let s_upper = apply(&stories(), &Query::unfiltered().with_search("KAKI"));
    let s_lower = apply(&stories(), &Query::unfiltered().with_search("kaki"));
    assert_eq!(s_upper, s_lower);
    println!("✓ Case variants agree on the story catalog too");
}

fn test_search_spans_designated_fields() {
    println!("\n====== Testing search field coverage ======");
    let rows = sample_rows();

    let by_email = apply(&rows, &Query::unfiltered().with_search("asha@example"));
    assert_eq!(by_email.len(), 1);
    assert_eq!(by_email[0].name, "Asha");

    let by_message = apply(&rows, &Query::unfiltered().with_search("broken button"));
    assert_eq!(by_message.len(), 1);
    assert_eq!(by_message[0].name, "Test User");
    println!("✓ Search matches name, message and email fields");
}

fn test_sort_direction_and_stability() {
    println!("\n====== Testing sort stage ======");
    let rows = sample_rows();

    let asc = apply(
        &rows,
        &Query::unfiltered().sorted_by("timestamp", SortDirection::Ascending),
    );
    let desc = apply(
        &rows,
        &Query::unfiltered().sorted_by("timestamp", SortDirection::Descending),
    );
    assert_eq!(asc[0].name, "Test User");
    assert_eq!(desc[0].name, "Pranit");
    let reversed: Vec<_> = desc.iter().rev().cloned().collect();
    assert_eq!(asc, reversed);
    println!("✓ Descending is the exact inverse of ascending");

    // An unknown sort field leaves insertion order untouched
    let unsorted = apply(
        &rows,
        &Query::unfiltered().sorted_by("no_such_field", SortDirection::Ascending),
    );
    let names: Vec<&str> = unsorted.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Asha", "Test User", "Kunal", "Pranit"]);
    println!("✓ Unknown sort field degrades to no reordering");
}

fn test_missing_value_keeps_pair_in_place() {
    println!("\n====== Testing missing sort values ======");
    let mut rows = sample_rows();
    rows[0].timestamp = String::new();
    rows[2].timestamp = String::new();

    let view = apply(
        &rows,
        &Query::unfiltered().sorted_by("timestamp", SortDirection::Ascending),
    );
    // Rows with an empty timestamp compare equal to everything, so the
    // stable sort leaves them where they were.
    assert_eq!(view[0].name, "Asha");
    assert_eq!(view[2].name, "Kunal");
    println!("✓ Records with empty sort values are not reordered");
}

fn test_rating_sorts_as_text() {
    println!("\n====== Testing textual rating sort ======");
    let rows = sample_rows();
    let view = apply(
        &rows,
        &Query::unfiltered().sorted_by("rating", SortDirection::Ascending),
    );
    let ratings: Vec<&str> = view.iter().map(|r| r.rating.as_str()).collect();
    assert_eq!(ratings, vec!["2", "3", "4", "5"]);
    println!("✓ Single-digit ratings order correctly under text comparison");
}

fn test_numeric_fields_sort_numerically() {
    println!("\n====== Testing numeric sort fields ======");
    let all = poems();
    let view = apply(
        &all,
        &Query::unfiltered().sorted_by("id", SortDirection::Ascending),
    );
    let ids: Vec<u32> = view.iter().map(|p| p.id).collect();
    assert_eq!(ids, (1..=10).collect::<Vec<u32>>());
    println!("✓ Poem ids sort 1..10, not lexicographically (1, 10, 2, ...)");

    let by_likes = apply(
        &all,
        &Query::unfiltered().sorted_by("likes", SortDirection::Descending),
    );
    assert_eq!(by_likes[0].likes, 426);
    assert_eq!(by_likes.last().unwrap().likes, 267);
    println!("✓ Likes sort numerically, descending");
}

fn test_idempotence() {
    println!("\n====== Testing idempotence ======");
    let all = stories();
    let q = Query::unfiltered()
        .with_category("satire")
        .sorted_by("title", SortDirection::Ascending);

    let once = apply(&all, &q);
    let twice = apply(&once, &q);
    assert_eq!(once, twice);
    println!("✓ Re-applying a query to its own output changes nothing");
}

fn test_input_never_mutated() {
    println!("\n====== Testing input immutability ======");
    let all = stories();
    let before = all.clone();
    let _ = apply(
        &all,
        &Query::unfiltered()
            .with_category("family")
            .with_search("काकी")
            .sorted_by("author", SortDirection::Descending),
    );
    assert_eq!(all, before);
    println!("✓ The source collection is untouched by apply()");
}

fn test_recent_search_records_filter() {
    println!("\n====== Testing recent searches as records ======");
    use gundagardi::dictionary::RecentSearch;

    let entries = vec![
        RecentSearch {
            term: "education".to_string(),
            timestamp: "2024-01-02T00:00:00.000Z".to_string(),
            snippet: "the process of receiving instruction...".to_string(),
        },
        RecentSearch {
            term: "knowledge".to_string(),
            timestamp: "2024-01-01T00:00:00.000Z".to_string(),
            snippet: "facts and skills acquired...".to_string(),
        },
    ];

    // Recent searches carry no category, so only "all" matches them
    let view = apply(&entries, &Query::unfiltered().with_search("edu"));
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].term, "education");
    assert!(entries[0].field("term").is_some());
    assert!(entries[0].field("unknown").is_none());
    println!("✓ The engine serves the recent-search list too");
}

fn main() {
    test_unfiltered_is_permutation();
    test_category_filter();
    test_social_stories_scenario();
    test_search_case_insensitive();
    test_search_spans_designated_fields();
    test_sort_direction_and_stability();
    test_missing_value_keeps_pair_in_place();
    test_rating_sorts_as_text();
    test_numeric_fields_sort_numerically();
    test_idempotence();
    test_input_never_mutated();
    test_recent_search_records_filter();

    println!("\nAll query engine tests passed!");
}
