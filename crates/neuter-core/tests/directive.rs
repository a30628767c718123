use neuter_core::directive::{DirectiveParser, DirectivePreset};

#[test]
fn test_default_parses_single_and_double_quotes() {
    let parser = DirectiveParser::default();
    let parsed = parser.parse("require('b');\nrequire(\"c\")\nA");
    assert_eq!(parsed.declarations, vec!["b", "c"]);
    assert_eq!(parsed.stripped, "A");
}

#[test]
fn test_default_allows_surrounding_whitespace() {
    let parser = DirectiveParser::default();
    let parsed = parser.parse("  require('b') ;  \n\trequire('c');\nA\n");
    assert_eq!(parsed.declarations, vec!["b", "c"]);
    assert_eq!(parsed.stripped, "A\n");
}

#[test]
fn test_directive_on_last_line_without_newline() {
    let parser = DirectiveParser::default();
    let parsed = parser.parse("A\nrequire('b');");
    assert_eq!(parsed.declarations, vec!["b"]);
    assert_eq!(parsed.stripped, "A\n");
}

#[test]
fn test_mid_expression_require_is_not_a_directive() {
    let parser = DirectiveParser::default();
    let body = "var x = require('b');\nrequire('c'); doStuff();\nA";
    let parsed = parser.parse(body);
    assert!(parsed.declarations.is_empty());
    assert_eq!(parsed.stripped, body);
}

#[test]
fn test_duplicates_are_preserved_in_order() {
    let parser = DirectiveParser::default();
    let parsed = parser.parse("require('c');\nrequire('b');\nrequire('c');\n");
    assert_eq!(parsed.declarations, vec!["c", "b", "c"]);
    assert_eq!(parsed.stripped, "");
}

#[test]
fn test_stripped_body_contains_no_directive_lines() {
    let parser = DirectiveParser::default();
    let body = "require('a');\nfoo();\n   require(\"b\");\nbar();\nrequire('c')";
    let parsed = parser.parse(body);
    assert_eq!(parsed.stripped, "foo();\nbar();\n");
    assert!(parser.declarations(&parsed.stripped).is_empty());
}

#[test]
fn test_minispade_preset() {
    let parser = DirectiveParser::from_preset(DirectivePreset::Minispade);
    let parsed = parser.parse("minispade.require('b');\nrequire('c');\nA");
    assert_eq!(parsed.declarations, vec!["b"]);
    assert_eq!(parsed.stripped, "require('c');\nA");
}

#[test]
fn test_sprockets_preset() {
    let parser = DirectiveParser::from_preset(DirectivePreset::Sprockets);
    let parsed = parser.parse("//= require b\n//= require lib/c.js\nA");
    assert_eq!(parsed.declarations, vec!["b", "lib/c.js"]);
    assert_eq!(parsed.stripped, "A");
}

#[test]
fn test_custom_pattern_is_line_anchored() {
    let parser = DirectiveParser::new(r"^//= require (\S+)\s*").unwrap();
    let parsed = parser.parse("A\n//= require c\nB");
    assert_eq!(parsed.declarations, vec!["c"]);
    assert_eq!(parsed.stripped, "A\nB");
}

#[test]
fn test_pattern_without_capture_group_is_rejected() {
    let err = DirectiveParser::new(r"^require\(.*\)").unwrap_err();
    assert!(err.to_string().contains("found 0"), "got: {err}");
}

#[test]
fn test_pattern_with_two_capture_groups_is_rejected() {
    let err = DirectiveParser::new(r"^(require)\('(.*)'\)").unwrap_err();
    assert!(err.to_string().contains("found 2"), "got: {err}");
}

#[test]
fn test_invalid_regex_is_rejected() {
    assert!(DirectiveParser::new(r"^require\((").is_err());
}

#[test]
fn test_preset_parse_roundtrips_display() {
    for preset in [
        DirectivePreset::Require,
        DirectivePreset::Minispade,
        DirectivePreset::Sprockets,
    ] {
        assert_eq!(DirectivePreset::parse(&preset.to_string()), Some(preset));
    }
    assert_eq!(DirectivePreset::parse("import"), None);
}
