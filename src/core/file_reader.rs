//! Unified file reading
//!
//! Provides consistent handling for:
//! - Binary files (never tokenized)
//! - Non-UTF-8 files (lossy conversion)
//! - Read failures (reported as [`KeywordsError::FileRead`])

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::core::model::KeywordsError;

/// Number of leading bytes inspected by the binary check
pub const BINARY_CHECK_LEN: usize = 8 * 1024;

/// Share of suspicious bytes above which content counts as binary
const SUSPICIOUS_RATIO: f64 = 0.1;

/// Result of reading a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReadResult {
    /// The text content (None when the file is binary)
    pub content: Option<String>,

    /// Whether lossy conversion was used
    pub lossy_conversion: bool,

    /// File size in bytes
    pub size: u64,
}

impl FileReadResult {
    /// Create a successful read result
    pub fn text(content: String, size: u64) -> Self {
        Self {
            content: Some(content),
            lossy_conversion: false,
            size,
        }
    }

    /// Create a result for binary content
    pub fn binary(size: u64) -> Self {
        Self {
            content: None,
            lossy_conversion: false,
            size,
        }
    }

    /// Mark as lossy conversion
    pub fn with_lossy(mut self) -> Self {
        self.lossy_conversion = true;
        self
    }

    #[cfg(test)]
    pub fn is_binary(&self) -> bool {
        self.content.is_none()
    }
}

/// Decide whether `bytes` (the start of a file of `size` bytes) is binary
pub fn is_binary(bytes: &[u8], size: u64) -> bool {
    if size == 0 || bytes.is_empty() {
        return false;
    }

    let head = &bytes[..bytes.len().min(BINARY_CHECK_LEN)];

    if has_text_bom(head) {
        return false;
    }

    if head.contains(&0) {
        return true;
    }

    let suspicious = head.iter().filter(|b| is_suspicious_byte(**b)).count();
    suspicious as f64 / head.len() as f64 > SUSPICIOUS_RATIO
}

/// UTF-8, UTF-16 and UTF-32 byte order marks
fn has_text_bom(bytes: &[u8]) -> bool {
    bytes.starts_with(&[0xEF, 0xBB, 0xBF])
        || bytes.starts_with(&[0x00, 0x00, 0xFE, 0xFF])
        || bytes.starts_with(&[0xFF, 0xFE, 0x00, 0x00])
        || bytes.starts_with(&[0xFE, 0xFF])
        || bytes.starts_with(&[0xFF, 0xFE])
}

/// Control characters that do not normally appear in text
#[inline]
fn is_suspicious_byte(b: u8) -> bool {
    matches!(b, 0x01..=0x08 | 0x0E..=0x1A | 0x1C..=0x1F | 0x7F)
}

/// Read a file, classifying it as text or binary
pub fn read_text_file(path: &Path) -> Result<FileReadResult, KeywordsError> {
    let bytes = read_file_bytes(path).map_err(|e| KeywordsError::file_read(path, e))?;
    let size = bytes.len() as u64;

    if is_binary(&bytes, size) {
        return Ok(FileReadResult::binary(size));
    }

    let result = match String::from_utf8(bytes) {
        Ok(content) => FileReadResult::text(content, size),
        Err(e) => {
            let content = String::from_utf8_lossy(e.as_bytes()).into_owned();
            FileReadResult::text(content, size).with_lossy()
        }
    };
    Ok(result)
}

fn read_file_bytes(path: &Path) -> std::io::Result<Vec<u8>> {
    let file = fs::File::open(path)?;
    let file_size = file.metadata()?.len() as usize;

    let mut reader = std::io::BufReader::new(file);
    let mut buffer = Vec::with_capacity(file_size);
    reader.read_to_end(&mut buffer)?;

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_read_file_success() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("test.txt");
        fs::write(&file_path, "Hello, World!").unwrap();

        let result = read_text_file(&file_path).unwrap();
        assert!(!result.is_binary());
        assert_eq!(result.content, Some("Hello, World!".to_string()));
        assert_eq!(result.size, 13);
        assert!(!result.lossy_conversion);
    }

    #[test]
    fn test_read_file_binary() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("binary.bin");

        let mut file = fs::File::create(&file_path).unwrap();
        file.write_all(&[0x66, 0x6F, 0x78, 0x00, 0x03]).unwrap();

        let result = read_text_file(&file_path).unwrap();
        assert!(result.is_binary());
        assert!(result.content.is_none());
    }

    #[test]
    fn test_read_file_lossy_conversion() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("latin1.txt");

        // "café" in Latin-1
        let mut file = fs::File::create(&file_path).unwrap();
        file.write_all(&[0x63, 0x61, 0x66, 0xE9, 0x20, 0x6F, 0x6B]).unwrap();

        let result = read_text_file(&file_path).unwrap();
        assert!(!result.is_binary());
        assert!(result.lossy_conversion);
        assert!(result.content.unwrap().ends_with(" ok"));
    }

    #[test]
    fn test_read_empty_file() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("empty.txt");
        fs::write(&file_path, "").unwrap();

        let result = read_text_file(&file_path).unwrap();
        assert_eq!(result.content, Some(String::new()));
    }

    #[test]
    fn test_read_nonexistent_file() {
        let err = read_text_file(Path::new("/nonexistent/file.txt")).unwrap_err();
        assert!(matches!(err, KeywordsError::FileRead { .. }));
    }

    #[test]
    fn test_is_binary_heuristics() {
        assert!(!is_binary(b"", 0));
        assert!(!is_binary(b"plain text\nwith lines\r\n\ttabs", 30));
        assert!(is_binary(b"abc\0def", 7));
        assert!(is_binary(&[0x01, 0x02, 0x03, 0x41, 0x42], 5));
        assert!(!is_binary("ünïcödé".as_bytes(), 11));
    }

    #[test]
    fn test_is_binary_bom_is_text() {
        // UTF-16LE "hi" contains NUL bytes but is text
        assert!(!is_binary(&[0xFF, 0xFE, 0x68, 0x00, 0x69, 0x00], 6));
        assert!(!is_binary(&[0xEF, 0xBB, 0xBF, 0x68, 0x69], 5));
    }

    #[test]
    fn test_is_binary_only_checks_head() {
        let mut bytes = vec![b'a'; BINARY_CHECK_LEN];
        bytes.push(0);
        assert!(!is_binary(&bytes, bytes.len() as u64));
    }

    #[test]
    fn test_file_read_result_builders() {
        let result = FileReadResult::text("content".to_string(), 7).with_lossy();
        assert!(result.lossy_conversion);
        assert!(!result.is_binary());
        assert!(FileReadResult::binary(3).is_binary());
    }
}
