//! Search service tests across catalog loading, indexing and shaping.

use super::test_utils::TestFixture;
use crate::config::{EmptyQueryPolicy, SearcherConfig};
use crate::search::SongSearcher;

fn jackson_rows() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Michael Jackson", "Billie Jean"),
        ("Michael Jackson", "Bad"),
        ("Michael Jackson", "Beat It"),
        ("Michael Jackson", "Thriller"),
    ]
}

fn searcher_for(fixture: &TestFixture, rows: &[(&str, &str)]) -> SongSearcher {
    let mut config = SearcherConfig::default();
    config.catalog.path = fixture.create_catalog("catalog.csv", rows).unwrap();
    SongSearcher::from_config(&config)
}

#[test]
fn test_scenarios_from_file() {
    let fixture = TestFixture::new().unwrap();
    let searcher = searcher_for(&fixture, &jackson_rows());

    let titles: Vec<_> = searcher.search("b").iter().map(|r| r.title()).collect();
    assert_eq!(titles, vec!["Bad", "Beat It", "Billie Jean"]);

    assert_eq!(searcher.render("thriller"), vec!["Thriller by Michael Jackson"]);
    assert_eq!(searcher.render("xyz"), vec!["no results for 'xyz'"]);
    assert_eq!(searcher.render("Bi!!lie"), vec!["no results for 'Bi!!lie'"]);
    assert_eq!(searcher.render(""), vec!["no results for ''"]);
}

#[test]
fn test_five_rows_at_most() {
    let fixture = TestFixture::new().unwrap();
    let rows = [
        ("The Beatles", "Help!"),
        ("Adele", "Hello"),
        ("Lionel Richie", "Hello"),
        ("The Beatles", "Hello, Goodbye"),
        ("Elvis Presley", "Heartbreak Hotel"),
        ("Queen", "Heaven For Everyone"),
        ("The Doors", "Hello, I Love You"),
    ];
    let searcher = searcher_for(&fixture, &rows);

    assert_eq!(searcher.search("he").len(), 7);
    assert_eq!(
        searcher.render("he"),
        vec![
            "Heartbreak Hotel by Elvis Presley",
            "Heaven For Everyone by Queen",
            "Hello by Adele",
            "Hello by Lionel Richie",
            // Catalog titles stop at the first comma.
            "Hello by The Beatles",
        ]
    );
}

#[test]
fn test_unreadable_catalog_answers_no_results() {
    let fixture = TestFixture::new().unwrap();
    let mut config = SearcherConfig::default();
    config.catalog.path = fixture.temp_dir.path().join("missing.csv");

    let searcher = SongSearcher::from_config(&config);
    assert!(searcher.index().is_empty());
    assert_eq!(searcher.render("hello"), vec!["no results for 'hello'"]);
}

#[test]
fn test_empty_query_policy_all() {
    let fixture = TestFixture::new().unwrap();
    let mut config = SearcherConfig::default();
    config.catalog.path = fixture.create_catalog("catalog.csv", &jackson_rows()).unwrap();
    config.search.empty_query = EmptyQueryPolicy::All;

    let searcher = SongSearcher::from_config(&config);
    assert_eq!(searcher.settings().empty_query, EmptyQueryPolicy::All);
    assert_eq!(searcher.search("--").len(), 4);
    assert_eq!(searcher.top_matches("").records().len(), 4);
}
