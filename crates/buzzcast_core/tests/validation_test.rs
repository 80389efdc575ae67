//! Tests for post validation.

use buzzcast_core::{ValidationResult, text_length};

#[test]
fn test_valid_post() {
    let result = ValidationResult::check("円安が進行中。", 280);
    assert!(result.is_valid);
    assert!(result.errors.is_empty());
    assert_eq!(result.length, 7);
}

#[test]
fn test_empty_post_rejected() {
    let result = ValidationResult::check("   ", 280);
    assert!(!result.is_valid);
    assert_eq!(result.errors, vec!["Post text cannot be empty".to_string()]);
}

#[test]
fn test_too_long_post_mentions_limit() {
    let text = "a".repeat(281);
    let result = ValidationResult::check(&text, 280);

    assert!(!result.is_valid);
    assert_eq!(result.length, 281);
    assert!(result.errors[0].contains("max: 280"));
    assert!(result.errors[0].contains("281 characters"));
}

#[test]
fn test_exact_limit_is_valid() {
    let text = "あ".repeat(500);
    assert!(ValidationResult::check(&text, 500).is_valid);
}

#[test]
fn test_length_counts_graphemes_not_bytes() {
    assert_eq!(text_length("がが"), 2);
    assert_eq!(text_length("e\u{301}"), 1);
    assert_eq!(text_length("🇯🇵"), 1);
}
