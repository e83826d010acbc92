//! Two-pass search tests against a fixture SQLite dictionary

use crate::common::{create_test_services, ids, result_ids, TestDictionary};
use kotoba::core::error::KotobaError;
use kotoba::core::script::Category;
use kotoba::core::search::MAX_RESULTS;
use kotoba::core::types::SearchPass;

#[test]
fn test_exact_kanji_match() {
    let dict = TestDictionary::sample();
    let services = create_test_services(&dict);

    let response = services.search.search("食べる").unwrap();

    assert_eq!(response.category, Category::Kanji);
    assert_eq!(response.pass, SearchPass::Primary);
    assert_eq!(result_ids(&response), vec![ids::TABERU]);

    let entry = &response.results[0];
    assert_eq!(entry.kanji, vec!["食べる", "喰べる"]);
    assert_eq!(entry.readings, vec!["たべる"]);
    assert_eq!(entry.meanings, vec!["to eat", "to live on"]);
}

#[test]
fn test_kanji_substring_ordered_by_length_then_id() {
    let dict = TestDictionary::sample();
    let services = create_test_services(&dict);

    let response = services.search.search("食べ").unwrap();

    // 食べる and 食べ物 tie on length, 食べ過ぎる is longer
    assert_eq!(
        result_ids(&response),
        vec![ids::TABERU, ids::TABEMONO, ids::TABESUGIRU]
    );
}

#[test]
fn test_kana_searches_readings() {
    let dict = TestDictionary::sample();
    let services = create_test_services(&dict);

    let response = services.search.search("たべ").unwrap();

    assert_eq!(response.category, Category::Kana);
    assert_eq!(
        result_ids(&response),
        vec![ids::TABERU, ids::TABEMONO, ids::TABESUGIRU]
    );
}

#[test]
fn test_kana_exact_reading_without_kanji() {
    let dict = TestDictionary::sample();
    let services = create_test_services(&dict);

    let response = services.search.search("コーヒー").unwrap();

    assert_eq!(result_ids(&response), vec![ids::KOOHII]);
    assert!(response.results[0].kanji.is_empty());
}

#[test]
fn test_english_substring_is_case_sensitive() {
    let dict = TestDictionary::sample();
    let services = create_test_services(&dict);

    let response = services.search.search("eat").unwrap();

    // "Eating" does not contain "eat"
    assert_eq!(response.pass, SearchPass::Primary);
    assert_eq!(result_ids(&response), vec![ids::TABERU, ids::TABESUGIRU]);
}

#[test]
fn test_english_exact_meaning_ranked_first() {
    let dict = TestDictionary::sample();
    let services = create_test_services(&dict);

    let response = services.search.search("water").unwrap();
    assert_eq!(result_ids(&response), vec![ids::MIZU]);
}

#[test]
fn test_fallback_prefix_search() {
    let dict = TestDictionary::sample();
    let services = create_test_services(&dict);

    // No meaning contains "eati", but the full-text index matches the
    // token "Eating" as a prefix regardless of case
    let response = services.search.search("eati").unwrap();

    assert_eq!(response.pass, SearchPass::Fallback);
    assert_eq!(result_ids(&response), vec![ids::SHOKUJI]);
    assert_eq!(response.results[0].meanings, vec!["meal", "Eating"]);
}

#[test]
fn test_no_results_anywhere() {
    let dict = TestDictionary::sample();
    let services = create_test_services(&dict);

    let response = services.search.search("zzzz").unwrap();

    assert_eq!(response.pass, SearchPass::Fallback);
    assert!(response.results.is_empty());
    assert_eq!(response.count, 0);
}

#[test]
fn test_mixed_exact_kanji_form() {
    let dict = TestDictionary::sample();
    let services = create_test_services(&dict);

    let response = services.search.search("Ｔシャツ").unwrap();

    assert_eq!(response.category, Category::Mixed);
    assert_eq!(result_ids(&response), vec![ids::TSHATSU]);
}

#[test]
fn test_mixed_meaning_only_hit() {
    let dict = TestDictionary::sample();
    let services = create_test_services(&dict);

    // Hyphen makes this Mixed; it only matches a meaning
    let response = services.search.search("T-shirt").unwrap();

    assert_eq!(response.category, Category::Mixed);
    assert_eq!(response.pass, SearchPass::Primary);
    assert_eq!(result_ids(&response), vec![ids::TSHATSU]);
}

#[test]
fn test_duplicate_rows_collapse() {
    let dict = TestDictionary::sample();
    let services = create_test_services(&dict);

    let response = services.search.search("書く").unwrap();

    let entry = &response.results[0];
    assert_eq!(entry.id, ids::KAKU);
    assert_eq!(entry.kanji, vec!["書く"]);
    assert_eq!(entry.readings, vec!["かく"]);
    assert_eq!(entry.meanings, vec!["to write"]);
}

#[test]
fn test_results_capped_at_fifty() {
    let dict = TestDictionary::many(80);
    let services = create_test_services(&dict);

    let response = services.search.search("run").unwrap();

    assert_eq!(response.count, MAX_RESULTS);
    assert_eq!(response.results.len(), MAX_RESULTS);
    // All tie on rank and length, so ids come back ascending
    assert_eq!(response.results[0].id, 1);
    assert_eq!(response.results[MAX_RESULTS - 1].id, MAX_RESULTS as i64);
}

#[test]
fn test_empty_query_rejected() {
    let dict = TestDictionary::sample();
    let services = create_test_services(&dict);

    assert!(matches!(
        services.search.search(""),
        Err(KotobaError::MissingQuery)
    ));
}

#[test]
fn test_malformed_fulltext_syntax_is_store_error() {
    let dict = TestDictionary::sample();
    let services = create_test_services(&dict);

    // Nothing contains the quote, so the fallback receives `"eat*`
    let result = services.search.search("\"eat");
    assert!(matches!(result, Err(KotobaError::StoreError(_))));
}
