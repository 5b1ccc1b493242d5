use super::text_lines::TextLines;
use md5::{Digest, Md5};
use std::fs;
use std::io;
use std::path::Path;

/// A file name paired with its complete content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryFile {
    name: String,
    data: Vec<u8>,
}

impl MemoryFile {
    pub fn new(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }

    /// Read a whole file from disk. The name is the last path component.
    pub fn read<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path)?;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self { name, data })
    }

    /// Write the content to `destination`, replacing any existing file.
    pub fn write_to<P: AsRef<Path>>(&self, destination: P) -> io::Result<()> {
        fs::write(destination, &self.data)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Open a new line cursor positioned at the start of the content.
    pub fn text_lines(&self) -> TextLines<'_> {
        TextLines::new(&self.data)
    }

    /// MD5 fingerprint of the content as 32 lowercase hex digits.
    pub fn md5(&self) -> String {
        md5_hex(&self.data)
    }
}

/// Calculate the MD5 hash of `data` as a lowercase hex string.
pub fn md5_hex(data: &[u8]) -> String {
    format!("{:x}", Md5::digest(data))
}
