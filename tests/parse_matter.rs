use mdmatter::{Delimiters, Options, parse, parse_with, test, test_with};
use rstest::rstest;

#[test]
fn document_without_fence_is_all_content() {
    let source = "# Title\n\nJust a markdown file.\n";
    let doc = parse(source).unwrap();
    assert!(!doc.has_matter());
    assert!(doc.data.is_empty());
    assert!(doc.directive.is_none());
    assert_eq!(doc.content, source);
    assert!(!test(source));
}

#[test]
fn basic_block_is_split_into_matter_and_content() {
    let doc = parse("---\ntitle: Hello\ndraft: false\n---\n# Heading\n\nBody.\n").unwrap();
    assert!(doc.has_matter());
    assert_eq!(doc.matter, "title: Hello\ndraft: false");
    assert_eq!(doc.data.get("title").and_then(|v| v.as_str()), Some("Hello"));
    assert_eq!(doc.data.get("draft").and_then(|v| v.as_bool()), Some(false));
    assert_eq!(doc.content, "# Heading\n\nBody.\n");
    assert!(doc.empty.is_none());
}

#[test]
fn empty_block_surfaces_the_original_document() {
    let source = "---\n---\nrest";
    let doc = parse(source).unwrap();
    assert!(doc.has_matter());
    assert_eq!(doc.matter, "");
    assert!(doc.data.is_empty());
    assert_eq!(doc.empty.as_deref(), Some(source));
    assert_eq!(doc.content, "rest");
}

#[test]
fn unterminated_block_consumes_the_document() {
    let doc = parse("---\nkey: 1\n").unwrap();
    assert!(doc.has_matter());
    assert_eq!(doc.matter, "key: 1\n");
    assert_eq!(doc.data.get("key").and_then(|v| v.as_i64()), Some(1));
    assert_eq!(doc.content, "");
}

#[test]
fn comment_only_block_counts_as_empty() {
    let source = "---\n# just a comment\n---\nbody";
    let doc = parse(source).unwrap();
    assert!(doc.is_empty_matter());
    assert!(doc.data.is_empty());
    assert_eq!(doc.empty.as_deref(), Some(source));
    assert_eq!(doc.content, "body");
}

// The fence check compares the single character after the opening delimiter
// with the single last character of the closing delimiter. `----` therefore
// reads as a dash run, not as a fence around an empty block. Historical
// rule, kept as-is.
#[test]
fn fence_of_four_dashes_is_not_matter() {
    let source = "----\nfoo";
    let doc = parse(source).unwrap();
    assert!(!doc.has_matter());
    assert_eq!(doc.content, source);
}

// Same heuristic with asymmetric fences: only the closing fence's final
// character participates in the check.
#[test]
fn disambiguation_uses_the_closing_fence_last_char() {
    let delims = Delimiters::pair("<!--", "-->");
    let options = Options::default().with_delimiters(delims);
    assert!(test_with("<!--\na: 1\n-->\nbody", &options));
    assert!(!test_with("<!-->\na: 1\n-->\nbody", &options));
}

#[rstest]
#[case("---\nkey: 1\n---\n", true)]
#[case("---", true)]
#[case("---\n", true)]
#[case("----\nfoo", false)]
#[case("--\nfoo", false)]
#[case(" ---\nkey: 1\n---\n", false)]
#[case("text before\n---\nkey: 1\n---\n", false)]
#[case("", false)]
fn fence_detection(#[case] source: &str, #[case] expected: bool) {
    assert_eq!(test(source), expected);
}

#[test]
fn bare_fence_is_empty_matter() {
    let doc = parse("---").unwrap();
    assert!(doc.has_matter());
    assert!(doc.is_empty_matter());
    assert_eq!(doc.content, "");
}

#[test]
fn crlf_documents_parse() {
    let doc = parse("---\r\ntitle: X\r\n---\r\nbody\r\n").unwrap();
    assert!(doc.has_matter());
    assert_eq!(doc.data.get("title").and_then(|v| v.as_str()), Some("X"));
    assert_eq!(doc.content, "body\r\n");
}

#[test]
fn custom_symmetric_fence() {
    let options = Options::default().with_delimiters("~~~");
    let doc = parse_with("~~~\ntitle: Waves\n~~~\nbody\n", &options).unwrap();
    assert_eq!(doc.data.get("title").and_then(|v| v.as_str()), Some("Waves"));
    assert_eq!(doc.content, "body\n");
}

#[test]
fn custom_fence_pair() {
    let options = Options::default().with_delimiters(("<!--", "-->"));
    let doc = parse_with("<!--\ntitle: Comment\n-->\nbody\n", &options).unwrap();
    assert_eq!(doc.data.get("title").and_then(|v| v.as_str()), Some("Comment"));
    assert_eq!(doc.content, "body\n");
}

#[test]
fn content_keeps_later_fences() {
    // Matter extraction stops at the first closing fence; later ones are
    // plain content.
    let doc = parse("---\nkey: 1\n---\nfirst line\n---\nsecond").unwrap();
    assert_eq!(doc.matter, "key: 1");
    assert_eq!(doc.content, "first line\n---\nsecond");
}

#[test]
fn data_survives_into_serde_types() {
    let doc = parse("---\ntags:\n- rust\n- docs\n---\nbody\n").unwrap();
    let tags: Vec<String> = doc
        .data
        .get("tags")
        .and_then(|v| v.as_sequence())
        .map(|seq| {
            seq.iter().filter_map(|v| v.as_str().map(str::to_string)).collect()
        })
        .unwrap_or_default();
    assert_eq!(tags, vec!["rust".to_string(), "docs".to_string()]);
}
