//! Plain-text extraction from cell paragraph markup.
//!
//! A cell's text is the text of its paragraphs joined by `\n`. Inside a
//! paragraph, `text:s` expands to `text:c` spaces (one if the count is missing
//! or not a number); every other element is dropped but its character data is
//! kept in document order.

use super::model::{CompressedCell, Paragraph};
use memchr::memchr2;
use quick_xml::Reader;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesStart, Event};

/// Reusable text extractor.
///
/// Holds a scratch buffer so that multi-paragraph cells and marked-up
/// paragraphs do not allocate per call. One extractor must not be shared
/// between concurrent materializations.
#[derive(Debug, Default)]
pub struct TextExtractor {
    buf: String,
}

impl TextExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// The displayed text of a cell.
    pub fn cell_text(&mut self, cell: &CompressedCell) -> String {
        match cell.paragraphs.as_slice() {
            [] => String::new(),
            [only] => self.paragraph_text(only),
            paragraphs => {
                self.buf.clear();
                for (i, paragraph) in paragraphs.iter().enumerate() {
                    if i > 0 {
                        self.buf.push('\n');
                    }
                    write_plain_text(paragraph.raw(), &mut self.buf);
                }
                self.buf.clone()
            },
        }
    }

    /// The displayed text of one paragraph.
    pub fn paragraph_text(&mut self, paragraph: &Paragraph) -> String {
        let raw = paragraph.raw();
        if !has_markup(raw) {
            return raw.to_string();
        }
        self.buf.clear();
        decode_markup(raw, &mut self.buf);
        self.buf.clone()
    }
}

#[inline]
fn has_markup(raw: &str) -> bool {
    memchr2(b'<', b'&', raw.as_bytes()).is_some()
}

/// Append the plain text of one paragraph's raw markup to `out`.
pub fn write_plain_text(raw: &str, out: &mut String) {
    if has_markup(raw) {
        decode_markup(raw, out);
    } else {
        out.push_str(raw);
    }
}

fn space_count(e: &BytesStart) -> usize {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.local_name().as_ref() == b"c")
        .and_then(|attr| atoi_simd::parse::<u32, false, false>(&attr.value).ok())
        .map_or(1, |n| n as usize)
}

fn decode_markup(raw: &str, out: &mut String) {
    let mut reader = Reader::from_str(raw);
    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                if e.local_name().as_ref() == b"s" {
                    let n = space_count(e);
                    out.extend(std::iter::repeat_n(' ', n));
                }
            },
            Ok(Event::Text(ref t)) => {
                if let Ok(text) = reader.decoder().decode(t) {
                    out.push_str(&text);
                }
            },
            Ok(Event::CData(ref c)) => {
                if let Ok(text) = c.decode() {
                    out.push_str(&text);
                }
            },
            Ok(Event::GeneralRef(ref r)) => {
                if let Ok(Some(ch)) = r.resolve_char_ref() {
                    out.push(ch);
                } else if let Ok(name) = r.decode()
                    && let Some(resolved) = resolve_predefined_entity(&name)
                {
                    out.push_str(resolved);
                }
            },
            Ok(Event::Eof) => break,
            // The payload was cut from a well-formed document; keep what was decoded.
            Err(_) => break,
            _ => {},
        }
    }
}
