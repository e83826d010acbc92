//! Query classification tests

use kotoba::core::script::{classify, Category};

#[test]
fn test_kanji_takes_precedence() {
    assert_eq!(classify("食べる"), Category::Kanji);
    assert_eq!(classify("食べる123"), Category::Kanji);
    assert_eq!(classify("Ｔ水"), Category::Kanji);
    assert_eq!(classify("eat 食"), Category::Kanji);
}

#[test]
fn test_kana() {
    assert_eq!(classify("たべる"), Category::Kana);
    assert_eq!(classify("コーヒー"), Category::Kana);
    assert_eq!(classify("ティーシャツ"), Category::Kana);
}

#[test]
fn test_english() {
    assert_eq!(classify("eat"), Category::English);
    assert_eq!(classify("to eat"), Category::English);
    assert_eq!(classify("Eating"), Category::English);
}

#[test]
fn test_mixed() {
    assert_eq!(classify("T-shirt"), Category::Mixed);
    assert_eq!(classify("ＣＤ"), Category::Mixed);
    assert_eq!(classify("たべる eat"), Category::Mixed);
    assert_eq!(classify("123"), Category::Mixed);
    assert_eq!(classify("café"), Category::Mixed);
    assert_eq!(classify(""), Category::Mixed);
}

#[test]
fn test_category_serializes_lowercase() {
    let json = serde_json::to_string(&Category::Kana).unwrap();
    assert_eq!(json, "\"kana\"");
}
