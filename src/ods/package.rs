//! ODS package (ZIP archive) handling.
//!
//! Opens the container, checks that it holds a spreadsheet, and hands the
//! `content.xml` and `styles.xml` parts to the decoder.

use super::document::Document;
use crate::common::{Error, Result};
use std::cell::RefCell;
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;

/// MIME types accepted as spreadsheets
pub const SPREADSHEET_MIME_TYPES: &[&str] = &[
    "application/vnd.oasis.opendocument.spreadsheet",
    "application/vnd.oasis.opendocument.spreadsheet-template",
];

const CONTENT_PART: &str = "content.xml";
const STYLES_PART: &str = "styles.xml";

/// An opened OpenDocument Spreadsheet package
pub struct OdsFile<R> {
    archive: RefCell<zip::ZipArchive<R>>,
    mime_type: String,
}

impl OdsFile<BufReader<File>> {
    /// Open an ODS file from a path.
    ///
    /// Fails if the file is not a ZIP container or does not declare a
    /// spreadsheet MIME type.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }
}

impl OdsFile<Cursor<Vec<u8>>> {
    /// Open an ODS package held in memory.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        Self::from_reader(Cursor::new(bytes))
    }
}

impl<R: Read + Seek> OdsFile<R> {
    /// Open an ODS package from a reader
    pub fn from_reader(reader: R) -> Result<Self> {
        let mut archive = zip::ZipArchive::new(reader)
            .map_err(|_| Error::InvalidFormat("Invalid ZIP archive".to_string()))?;

        let mime_type = Self::read_mimetype(&mut archive)?;
        if !SPREADSHEET_MIME_TYPES.contains(&mime_type.as_str()) {
            return Err(Error::NotSpreadsheet { mime_type });
        }
        log::debug!(
            "opened spreadsheet package ({} entries, {})",
            archive.len(),
            mime_type
        );

        Ok(Self {
            archive: RefCell::new(archive),
            mime_type,
        })
    }

    /// Read MIME type from the mimetype file
    fn read_mimetype(archive: &mut zip::ZipArchive<R>) -> Result<String> {
        let mut mimetype_file = archive.by_name("mimetype").map_err(|_| {
            Error::InvalidFormat("No mimetype file found in ODF package".to_string())
        })?;

        let mut content = String::new();
        mimetype_file.read_to_string(&mut content)?;
        Ok(content.trim().to_string())
    }

    /// Get the MIME type from the mimetype file
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Check if a part exists in the package
    pub fn has_part(&self, name: &str) -> bool {
        self.archive.borrow_mut().by_name(name).is_ok()
    }

    /// Read a part from the package by path
    pub fn read_part(&self, name: &str) -> Result<Vec<u8>> {
        let mut archive = self.archive.borrow_mut();
        let mut file = archive
            .by_name(name)
            .map_err(|_| Error::ComponentNotFound(name.to_string()))?;

        let mut content = Vec::with_capacity(file.size() as usize);
        file.read_to_end(&mut content)?;
        Ok(content)
    }

    fn read_xml_part(&self, name: &str) -> Result<String> {
        String::from_utf8(self.read_part(name)?)
            .map_err(|_| Error::InvalidFormat(format!("Invalid UTF-8 in {}", name)))
    }

    /// Decode the spreadsheet content.
    ///
    /// `content.xml` is required; `styles.xml` contributes the common styles
    /// (such as `Default`) when present.
    pub fn parse_content(&self) -> Result<Document> {
        let content = self.read_xml_part(CONTENT_PART)?;
        let styles = if self.has_part(STYLES_PART) {
            Some(self.read_xml_part(STYLES_PART)?)
        } else {
            None
        };
        Document::from_xml(&content, styles.as_deref())
    }
}
