//! Cleanup for text pulled out of PDFs before it is handed to the analyzer.

use once_cell::sync::Lazy;
use regex::Regex;

/// `experi-\nence` → `experience`
static RE_LINE_HYPHEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\w+)-\s*\n\s*(\w+)").expect("Invalid line hyphen regex"));

static RE_INVISIBLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\u{00AD}\u{200B}\u{200C}\u{200D}\u{FEFF}]").expect("Invalid invisible regex")
});

static RE_SPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t]+").expect("Invalid space run regex"));

static RE_BLANK_LINES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{3,}").expect("Invalid blank lines regex"));

static RE_PAGE_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\d+\s*$").expect("Invalid page number regex"));

static RE_PAGE_OF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?mi)^Page \d+ of \d+\s*$").expect("Invalid page footer regex"));

static RE_DOUBLE_SPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"  +").expect("Invalid double space regex"));

fn typographic(c: char) -> Option<&'static str> {
    match c {
        '\u{2018}' | '\u{2019}' => Some("'"),
        '\u{201C}' | '\u{201D}' => Some("\""),
        '\u{2013}' | '\u{2014}' => Some("-"),
        '\u{2026}' => Some("..."),
        '\u{00A0}' => Some(" "),
        '\u{2022}' | '\u{2023}' | '\u{25E6}' | '\u{2043}' => Some("*"),
        _ => None,
    }
}

fn is_kept(c: char) -> bool {
    matches!(c, '\x20'..='\x7E' | '\n' | '\r' | '\t')
}

/// Normalizes raw PDF text into plain printable ASCII with tidy whitespace.
///
/// Page-number lines and "Page X of Y" footers are dropped. Characters with no
/// ASCII transliteration become a space.
pub fn normalize_pdf_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let text = RE_LINE_HYPHEN.replace_all(text, "$1$2");
    let text = RE_INVISIBLE.replace_all(&text, "");

    let mut ascii = String::with_capacity(text.len());
    for c in text.chars() {
        if is_kept(c) {
            ascii.push(c);
        } else if let Some(mapped) = typographic(c) {
            ascii.push_str(mapped);
        } else {
            match deunicode::deunicode_char(c) {
                Some(t) if !t.is_empty() && t.chars().all(is_kept) => ascii.push_str(t),
                _ => ascii.push(' '),
            }
        }
    }

    let text = RE_SPACE_RUN.replace_all(&ascii, " ");
    let text = RE_BLANK_LINES.replace_all(&text, "\n\n");
    let text = text.split('\n').map(str::trim).collect::<Vec<_>>().join("\n");

    let text = RE_PAGE_NUMBER.replace_all(&text, "");
    let text = RE_PAGE_OF.replace_all(&text, "");

    RE_DOUBLE_SPACE.replace_all(text.trim(), " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(normalize_pdf_text(""), "");
        assert_eq!(normalize_pdf_text("  \n\n "), "");
    }

    #[test]
    fn test_rejoins_hyphenated_line_breaks() {
        assert_eq!(normalize_pdf_text("deep experi-\nence here"), "deep experience here");
        assert_eq!(normalize_pdf_text("micro-  \n  services"), "microservices");
    }

    #[test]
    fn test_keeps_inline_hyphens() {
        assert_eq!(normalize_pdf_text("full-stack developer"), "full-stack developer");
    }

    #[test]
    fn test_drops_invisible_characters() {
        assert_eq!(normalize_pdf_text("re\u{00AD}su\u{200B}me\u{FEFF}"), "resume");
    }

    #[test]
    fn test_typographic_punctuation() {
        assert_eq!(
            normalize_pdf_text("\u{201C}Lead\u{201D} \u{2014} it\u{2019}s done\u{2026}"),
            "\"Lead\" - it's done..."
        );
        assert_eq!(normalize_pdf_text("\u{2022} Rust\u{00A0}dev"), "* Rust dev");
    }

    #[test]
    fn test_transliterates_accents() {
        assert_eq!(normalize_pdf_text("caf\u{e9} na\u{ef}ve"), "cafe naive");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(normalize_pdf_text("a   b\t\tc"), "a b c");
        assert_eq!(normalize_pdf_text("a\n\n\n\n\nb"), "a\n\nb");
        assert_eq!(normalize_pdf_text("  left\nright  \n"), "left\nright");
    }

    #[test]
    fn test_removes_page_numbers_and_footers() {
        assert_eq!(normalize_pdf_text("Intro\n3\nBody"), "Intro\n\nBody");
        assert_eq!(normalize_pdf_text("Skills\nPage 2 of 5\nRust"), "Skills\n\nRust");
        assert_eq!(normalize_pdf_text("Skills\npage 2 OF 5\nRust"), "Skills\n\nRust");
    }

    #[test]
    fn test_numbers_inside_lines_survive() {
        assert_eq!(normalize_pdf_text("5 years of Go"), "5 years of Go");
    }
}
