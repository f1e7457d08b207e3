//! Parser splitting an art file into frames on `*` sentinel lines

use anyhow::{Context, Result};
use std::path::Path;

use crate::model::{Document, Frame};

/// Line (after trimming surrounding whitespace) that closes the current frame
pub const SENTINEL: &str = "*";

/// Read an art file as UTF-8 and parse it into frames.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let document = parse_frames(&content);
    tracing::debug!(
        "Parsed {} frame(s) from {}",
        document.len(),
        path.display()
    );
    Ok(document)
}

/// Parse art source text into frames.
///
/// Non-sentinel lines are kept verbatim. A sentinel with nothing buffered
/// before it is ignored, so repeated sentinels never produce empty frames.
/// Trailing lines without a closing sentinel still form the last frame.
pub fn parse_frames(content: &str) -> Document {
    let mut frames = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for line in split_lines(content) {
        if line.trim() == SENTINEL {
            if !current.is_empty() {
                frames.push(Frame::new(std::mem::take(&mut current)));
            }
        } else {
            current.push(line.to_string());
        }
    }

    if !current.is_empty() {
        frames.push(Frame::new(current));
    }

    Document::new(frames)
}

/// Characters that end a line, in addition to the `\r\n` pair
fn is_line_break(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split into lines on any line break, dropping the terminators.
///
/// `\r\n` counts as one break. A break at the very end does not start an
/// extra empty line.
fn split_lines(content: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = content.char_indices().peekable();

    while let Some((i, ch)) = chars.next() {
        if !is_line_break(ch) {
            continue;
        }
        lines.push(&content[start..i]);
        start = i + ch.len_utf8();
        if ch == '\r' && matches!(chars.peek(), Some((_, '\n'))) {
            chars.next();
            start += 1;
        }
    }

    if start < content.len() {
        lines.push(&content[start..]);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(doc: &Document) -> Vec<Vec<&str>> {
        doc.frames
            .iter()
            .map(|f| f.lines.iter().map(String::as_str).collect())
            .collect()
    }

    #[test]
    fn test_two_frames() {
        let doc = parse_frames("AB\n*\nCD\n");
        assert_eq!(lines(&doc), vec![vec!["AB"], vec!["CD"]]);
    }

    #[test]
    fn test_frame_count_and_order() {
        let doc = parse_frames("1a\n1b\n*\n2a\n2b\n*\n3a\n3b\n*\n");
        assert_eq!(doc.len(), 3);
        assert_eq!(
            lines(&doc),
            vec![vec!["1a", "1b"], vec!["2a", "2b"], vec!["3a", "3b"]]
        );
    }

    #[test]
    fn test_consecutive_sentinels_collapse() {
        let doc = parse_frames("*\n*\nA\n*\n*\n  *  \n*\nB\n*\n");
        assert_eq!(lines(&doc), vec![vec!["A"], vec!["B"]]);
    }

    #[test]
    fn test_trailing_frame_without_sentinel() {
        let doc = parse_frames("A B\n");
        assert_eq!(lines(&doc), vec![vec!["A B"]]);

        let doc = parse_frames("x\n*\ny\nz");
        assert_eq!(lines(&doc), vec![vec!["x"], vec!["y", "z"]]);
    }

    #[test]
    fn test_sentinel_with_surrounding_whitespace() {
        let doc = parse_frames("A\n \t* \nB\n");
        assert_eq!(lines(&doc), vec![vec!["A"], vec!["B"]]);
    }

    #[test]
    fn test_lines_kept_verbatim() {
        // Leading/trailing spaces and lines merely containing `*` are art
        let doc = parse_frames("  /\\  \n **\n* *\n\n");
        assert_eq!(lines(&doc), vec![vec!["  /\\  ", " **", "* *", ""]]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let doc = parse_frames("AB\r\n*\r\nCD\r\n");
        assert_eq!(lines(&doc), vec![vec!["AB"], vec!["CD"]]);
    }

    #[test]
    fn test_bare_carriage_return_line_endings() {
        let doc = parse_frames("AB\r*\rCD");
        assert_eq!(lines(&doc), vec![vec!["AB"], vec!["CD"]]);
    }

    #[test]
    fn test_trailing_carriage_return_dropped() {
        let doc = parse_frames("AB\r\n*\r\nCD\r");
        assert_eq!(lines(&doc), vec![vec!["AB"], vec!["CD"]]);
        assert_eq!(doc.dimensions().unwrap().width, 2);
    }

    #[test]
    fn test_unicode_line_separators() {
        let doc = parse_frames("AB\u{2028}*\u{2029}CD\x0bEF\x0c*\u{85}GH\n");
        assert_eq!(lines(&doc), vec![vec!["AB"], vec!["CD", "EF"], vec!["GH"]]);
    }

    #[test]
    fn test_split_lines() {
        assert!(split_lines("").is_empty());
        assert_eq!(split_lines("\n"), vec![""]);
        assert_eq!(split_lines("a\r\rb"), vec!["a", "", "b"]);
        assert_eq!(split_lines("a\n\r\nb\r\n"), vec!["a", "", "b"]);
        assert_eq!(split_lines("x\x1cy\x1dz\x1e"), vec!["x", "y", "z"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_frames("").is_empty());
        assert!(parse_frames("*\n*\n").is_empty());
    }

    #[test]
    fn test_parse_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");

        let err = parse_file(&missing).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_parse_file_rejects_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        std::fs::write(&path, [0x41, 0xff, 0xfe, 0x0a]).unwrap();

        assert!(parse_file(&path).is_err());
    }
}
