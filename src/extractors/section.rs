// src/extractors/section.rs

// --- Imports ---
use once_cell::sync::Lazy;
use regex::Regex;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

// --- Regex Patterns (Lazy Static) ---
// ECMAScript whitespace and line terminators. Differs from the Unicode
// White_Space set used by `\s` and `char::is_whitespace`: includes U+FEFF,
// excludes U+0085.
const JS_SPACE_CLASS: &str =
    r"[\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]";

// A level-1 ATX header: a single '#', at least one whitespace char, then text
// running to the end of the line. The text may not contain a line terminator,
// so a CRLF line ("# A\r") is not a header.
// "## Sub" never matches because the char after the first '#' is not whitespace.
static HEADER_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^#{}+([^\n\r\x{{2028}}\x{{2029}}]+)$", JS_SPACE_CLASS))
        .expect("Failed to compile HEADER_LINE_RE")
});

// Marker plus the whole whitespace run that follows it.
static HEADER_PREFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^#{}+", JS_SPACE_CLASS)).expect("Failed to compile HEADER_PREFIX_RE")
});

// --- Data Structures ---

/// One extracted section: the body text that followed a top-level header.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct HeaderEntry {
    pub description: String,
}

/// Header text -> entry, iterated in first-insert order.
///
/// Re-inserting an existing header replaces its value but keeps the
/// position it was first given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionMap {
    entries: Vec<(String, HeaderEntry)>,
    index: HashMap<String, usize>,
}

impl SectionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites `header`, returning the replaced entry if any.
    pub fn insert(&mut self, header: String, entry: HeaderEntry) -> Option<HeaderEntry> {
        if let Some(&pos) = self.index.get(&header) {
            return Some(std::mem::replace(&mut self.entries[pos].1, entry));
        }
        self.index.insert(header.clone(), self.entries.len());
        self.entries.push((header, entry));
        None
    }

    #[allow(dead_code)]
    pub fn get(&self, header: &str) -> Option<&HeaderEntry> {
        self.index.get(header).map(|&pos| &self.entries[pos].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &HeaderEntry)> {
        self.entries.iter().map(|(h, e)| (h.as_str(), e))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(h, _)| h.as_str())
    }
}

impl Serialize for SectionMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (header, entry) in self.iter() {
            map.serialize_entry(header, entry)?;
        }
        map.end()
    }
}

// --- Main Extractor Structure ---
#[derive(Debug, Default)]
pub struct SectionExtractor;

impl SectionExtractor {
    pub fn new() -> Self { Self {} }

    /// Splits `content` on top-level `# ` headers.
    ///
    /// Every line after a header, up to the next header or end of input,
    /// becomes that header's description (joined with `\n`, then trimmed as a
    /// block). Lines before the first header are dropped. Never fails.
    pub fn extract(&self, content: &str) -> SectionMap {
        let mut sections = SectionMap::new();
        let mut current_header: Option<String> = None;
        let mut current_body: Vec<&str> = Vec::new();

        for line in content.split('\n') {
            if HEADER_LINE_RE.is_match(line) {
                if let Some(header) = current_header.take() {
                    self.commit(&mut sections, header, &current_body);
                }
                current_header = Some(HEADER_PREFIX_RE.replace(line, "").into_owned());
                current_body.clear();
            } else if current_header.is_some() {
                current_body.push(line);
            }
        }

        if let Some(header) = current_header {
            self.commit(&mut sections, header, &current_body);
        }

        tracing::debug!("Extracted {} section(s) from {} bytes", sections.len(), content.len());
        sections
    }

    fn commit(&self, sections: &mut SectionMap, header: String, body: &[&str]) {
        let description = trim_block(&body.join("\n")).to_string();
        tracing::trace!("Committing section '{}' ({} bytes)", header, description.len());
        if sections.insert(header.clone(), HeaderEntry { description }).is_some() {
            tracing::debug!("Duplicate header '{}' overwrote an earlier section", header);
        }
    }
}

// Same character set as JS_SPACE_CLASS.
fn is_js_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' ' | '\u{A0}' | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}' | '\u{3000}' | '\u{FEFF}'
    )
}

fn trim_block(text: &str) -> &str {
    text.trim_matches(is_js_space)
}
