//! Wide-character table generator

use anyhow::Result;
use std::path::Path;

use super::{include_name, write_frames, write_header};
use crate::model::Document;

/// Generate the `wchar_t` table, keeping every glyph of the art
pub fn generate_full_table(document: &Document, output: &Path) -> Result<String> {
    let mut table = String::new();

    write_header(
        &mut table,
        document,
        "Auto-generated ASCII art include file",
        "wchar_t",
        &include_name(output),
    )?;
    write_frames(&mut table, document, "L", str::to_string)?;

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::tests::{document, unescape_c_string};

    #[test]
    fn test_generate_full_table() {
        let doc = document(&[&["AB"], &["CD"]]);
        let table = generate_full_table(&doc, Path::new("out/title.inc")).unwrap();

        let expected = "\
/** Auto-generated ASCII art include file
 * Num Frames: 2, Dimensions: (2, 1) characters
 * Usage:\x20
 *     const wchar_t *art[NUM_FRAMES][ART_HEIGHT] = {
 * #include \"title.inc\"
 *     };
 */

{
L\"AB\",
},
{
L\"CD\",
},
";
        assert_eq!(table, expected);
    }

    #[test]
    fn test_escapes_backslash_and_quote() {
        let doc = document(&[&[r#"a\b"c"#]]);
        let table = generate_full_table(&doc, Path::new("t.inc")).unwrap();
        assert!(table.contains(r#"L"a\\b\"c","#));
    }

    #[test]
    fn test_lines_preserved_exactly() {
        let source: &[&str] = &["  /\\_/\\  ", " ( o.o ) ", "  > ^ <\t", "██ \"Ünï\" "];
        let doc = document(&[source]);
        let table = generate_full_table(&doc, Path::new("cat.inc")).unwrap();

        let literals: Vec<String> = table
            .lines()
            .filter_map(|l| l.strip_prefix("L\"")?.strip_suffix("\","))
            .map(unescape_c_string)
            .collect();
        assert_eq!(literals, source);
    }

    #[test]
    fn test_header_reports_first_frame_only() {
        let doc = document(&[&["abcd", "efgh", "ijkl"], &["x"]]);
        let table = generate_full_table(&doc, Path::new("t.inc")).unwrap();
        assert!(table.contains(" * Num Frames: 2, Dimensions: (4, 3) characters\n"));
    }
}
