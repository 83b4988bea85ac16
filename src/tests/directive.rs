use super::{
    parse_directive, parse_directive_over, parse_legacy, read_settings, resolve_settings,
    save_settings, to_directive, DIRECTIVE_KEY,
};
use crate::document::DocumentAccessor;
use crate::error::Error;
use crate::front_matter::FrontMatter;
use crate::settings::Settings;
use crate::test_support::StubDocument;
use crate::token::NumberingStyle;

#[test]
fn test_directive_round_trip() {
    let directive = "auto, first-level 2, max 4, contents Overview, 1.A.";

    let settings = parse_directive(directive);

    assert!(settings.auto);
    assert_eq!(settings.first_level, 2);
    assert_eq!(settings.max_level, 4);
    assert_eq!(settings.contents, "Overview");
    assert!(!settings.skip_top_level);
    assert_eq!(settings.style_level_1, NumberingStyle::Decimal);
    assert_eq!(settings.style_level_other, NumberingStyle::Letter);
    assert_eq!(settings.separator, ".");
    assert_eq!(to_directive(&settings), directive);
}

#[test]
fn test_format_token_with_skip_and_separator() {
    let settings = parse_directive("_.A.1:");

    assert!(settings.skip_top_level);
    assert_eq!(settings.style_level_1, NumberingStyle::Letter);
    assert_eq!(settings.style_level_other, NumberingStyle::Decimal);
    assert_eq!(settings.separator, ":");
}

#[test]
fn test_format_token_without_separator() {
    let settings = parse_directive("1.1");

    assert_eq!(settings.separator, "");
}

#[test]
fn test_invalid_parts_keep_defaults() {
    let settings = parse_directive("max 9, first-level zero, start-at 12a, contents , 1.B., 1.1|");

    assert_eq!(settings, Settings::default());
}

#[test]
fn test_last_occurrence_wins() {
    let settings = parse_directive("max 2, 1.A, max 3, A.1-");

    assert_eq!(settings.max_level, 3);
    assert_eq!(settings.style_level_1, NumberingStyle::Letter);
    assert_eq!(settings.separator, "-");
}

#[test]
fn test_empty_segments_are_ignored() {
    let settings = parse_directive(" , auto,, max 2 ,");

    assert!(settings.auto);
    assert_eq!(settings.max_level, 2);
}

#[test]
fn test_parse_over_existing_settings() {
    let current = Settings {
        contents: "Contents".to_string(),
        max_level: 3,
        ..Settings::default()
    };

    let settings = parse_directive_over("start-at C, A.A", current);

    assert_eq!(settings.contents, "Contents");
    assert_eq!(settings.max_level, 3);
    assert_eq!(settings.start_at, "C");
    assert_eq!(settings.style_level_1, NumberingStyle::Letter);
}

#[test]
fn test_serialise_optional_parts_in_order() {
    let settings = Settings {
        skip_top_level: true,
        start_at: "3".to_string(),
        contents: "TOC".to_string(),
        separator: "-".to_string(),
        ..Settings::default()
    };

    let directive = to_directive(&settings);

    assert_eq!(
        directive,
        "first-level 1, max 6, contents TOC, start-at 3, _.1.1-"
    );
    assert_eq!(parse_directive(&directive), settings);
}

#[test]
fn test_legacy_keys_read_over_defaults() {
    let doc = StubDocument::new(
        "---\nnumber-headings-max-level: 3\nheader-numbering-skip-top-level: true\nnumber-headings-style-level-1: A\nnumber-headings-auto: maybe\n---\n# Title",
    );
    let front_matter = FrontMatter::read(&doc).unwrap();
    let defaults = Settings {
        contents: "Contents".to_string(),
        ..Settings::default()
    };

    let settings = parse_legacy(&front_matter, &defaults);

    assert_eq!(settings.max_level, 3);
    assert!(settings.skip_top_level);
    assert_eq!(settings.style_level_1, NumberingStyle::Letter);
    assert!(!settings.auto, "invalid flag keeps the default");
    assert_eq!(settings.contents, "Contents");
}

#[test]
fn test_newer_legacy_name_wins() {
    let doc = StubDocument::new(
        "---\nheader-numbering-max-level: 4\nnumber-headings-max-level: 2\n---",
    );
    let front_matter = FrontMatter::read(&doc).unwrap();

    let settings = parse_legacy(&front_matter, &Settings::default());

    assert_eq!(settings.max_level, 2);
}

#[test]
fn test_directive_takes_precedence_over_legacy() {
    let doc = StubDocument::new(
        "---\nnumber headings: max 2, A.A\nnumber-headings-max-level: 5\n---\n# T",
    );

    let settings = read_settings(&doc, &Settings::default());

    assert_eq!(settings.max_level, 2);
    assert_eq!(settings.style_level_other, NumberingStyle::Letter);
}

#[test]
fn test_defaults_without_settings() {
    let defaults = Settings {
        max_level: 3,
        ..Settings::default()
    };
    let plain = StubDocument::new("# Title");
    let unrelated = StubDocument::new("---\ntitle: Notes\n---\n# Title");

    assert_eq!(read_settings(&plain, &defaults), defaults);
    assert_eq!(read_settings(&unrelated, &defaults), defaults);
    assert_eq!(resolve_settings(None, &defaults), defaults);
}

#[test]
fn test_numeric_directive_value() {
    // YAML reads `1.1` as a number
    let doc = StubDocument::new("---\nnumber headings: 1.1\n---");

    let settings = read_settings(&doc, &Settings::default());

    assert_eq!(settings.separator, "");
}

#[test]
fn test_save_creates_front_matter() {
    let mut doc = StubDocument::new("# Title\nBody");
    let settings = parse_directive("max 3, 1.1.");

    let plan = save_settings(&doc, &settings).unwrap();
    doc.apply(&plan).unwrap();

    assert_eq!(
        doc.text(),
        "---\nnumber headings: first-level 1, max 3, 1.1.\n---\n\n# Title\nBody"
    );
    assert_eq!(read_settings(&doc, &Settings::default()), settings);
}

#[test]
fn test_save_inserts_key_into_existing_block() {
    let mut doc = StubDocument::new("---\ntitle: Notes\n---\n# Title");
    let settings = Settings {
        auto: true,
        ..Settings::default()
    };

    let plan = save_settings(&doc, &settings).unwrap();
    doc.apply(&plan).unwrap();

    assert_eq!(
        doc.text(),
        "---\nnumber headings: auto, first-level 1, max 6, 1.1.\ntitle: Notes\n---\n# Title"
    );
}

#[test]
fn test_save_replaces_existing_line() {
    let mut doc = StubDocument::new("---\ntitle: Notes\nnumber headings: max 2, 1.1\n---\n# Title");
    let settings = parse_directive("contents Contents, A.1:");

    let plan = save_settings(&doc, &settings).unwrap();
    doc.apply(&plan).unwrap();

    assert_eq!(
        doc.line(2),
        Some("number headings: first-level 1, max 6, contents Contents, A.1:")
    );
    assert_eq!(doc.line_count(), 5);
}

#[test]
fn test_save_unchanged_settings_is_a_no_op() {
    let doc = StubDocument::new("---\nnumber headings: first-level 1, max 6, 1.1.\n---");

    let plan = save_settings(&doc, &Settings::default()).unwrap();

    assert!(plan.is_empty());
}

#[test]
fn test_save_fails_when_key_line_is_missing() {
    let doc = StubDocument::new("---\n\"number headings\": auto\n---\n# Title");

    let result = save_settings(&doc, &Settings::default());

    assert!(matches!(
        result,
        Err(Error::MissingDirectiveLine { start_line: 0 })
    ));
}

#[test]
fn test_directive_key_name() {
    assert_eq!(DIRECTIVE_KEY, "number headings");
}
