use std::io::Write;

use mdmatter::{ExcerptMode, MatterError, Options, read, read_with};
use tempfile::NamedTempFile;

#[test]
fn reads_and_parses_a_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "---\ntitle: Notes\n---\n# Notes\n\nbody\n").unwrap();

    let doc = read(file.path()).unwrap();
    assert_eq!(doc.data.get("title").and_then(|v| v.as_str()), Some("Notes"));
    assert_eq!(doc.content, "# Notes\n\nbody\n");
}

#[test]
fn read_honors_options() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "---\nkey: 1\n---\nintro\n---\nrest\n").unwrap();

    let options = Options::default().with_excerpt(ExcerptMode::Enabled);
    let doc = read_with(file.path(), &options).unwrap();
    assert_eq!(doc.excerpt.as_deref(), Some("intro\n"));
}

#[test]
fn missing_file_propagates_the_io_error() {
    let err = read("/definitely/not/here.md").unwrap_err();
    assert!(matches!(err, MatterError::Io(_)));
}

#[test]
fn file_without_front_matter_is_all_content() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "plain text file\n").unwrap();

    let doc = read(file.path()).unwrap();
    assert!(!doc.has_matter());
    assert_eq!(doc.content, "plain text file\n");
}
