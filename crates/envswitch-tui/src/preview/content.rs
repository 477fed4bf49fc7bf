//! Preview content types and loading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Maximum file size to attempt preview (10 MB).
const MAX_PREVIEW_SIZE: u64 = 10 * 1024 * 1024;

/// Error that can occur during preview loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewError {
    /// File is too large to preview.
    TooLarge(u64),
    /// File is not valid UTF-8.
    NotText,
    /// File is a directory.
    IsDirectory,
    /// File could not be read.
    IoError(String),
}

impl std::fmt::Display for PreviewError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooLarge(size) => write!(
                f,
                "File too large: {}",
                humansize::format_size(*size, humansize::BINARY)
            ),
            Self::NotText => write!(f, "Not a text file"),
            Self::IsDirectory => write!(f, "Is a directory"),
            Self::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for PreviewError {}

/// One classified line of an environment file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewLine {
    /// A line whose first non-blank character is `#`.
    Comment(String),
    /// An empty or whitespace-only line.
    Blank,
    /// `KEY=value`, split on the first `=`.
    KeyValue { key: String, value: String },
    /// Anything else.
    Plain(String),
}

impl PreviewLine {
    /// Classify a single line.
    pub fn classify(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            Self::Blank
        } else if trimmed.starts_with('#') {
            Self::Comment(line.to_string())
        } else if let Some((key, value)) = line.split_once('=') {
            Self::KeyValue {
                key: key.to_string(),
                value: value.to_string(),
            }
        } else {
            Self::Plain(line.to_string())
        }
    }
}

/// The visible slice of a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewWindow {
    /// Visible lines, at most the viewport height.
    pub lines: Vec<PreviewLine>,
    /// Zero-based index of the first visible line.
    pub first_line: usize,
    /// Number of lines in the whole file.
    pub total_lines: usize,
    pub can_scroll_up: bool,
    pub can_scroll_down: bool,
}

impl PreviewWindow {
    /// Slice file content for a scroll offset and viewport height.
    ///
    /// The start is clamped so the last page stays full, which makes any
    /// offset valid.
    pub fn from_content(content: &str, offset: usize, viewport: usize) -> Self {
        let all: Vec<&str> = content.lines().collect();
        let total_lines = all.len();
        let first_line = offset.min(Self::max_offset_for(total_lines, viewport));
        let end = first_line.saturating_add(viewport).min(total_lines);

        Self {
            lines: all[first_line..end]
                .iter()
                .map(|line| PreviewLine::classify(line))
                .collect(),
            first_line,
            total_lines,
            can_scroll_up: first_line > 0,
            can_scroll_down: end < total_lines,
        }
    }

    /// Largest useful scroll offset for a file of `total_lines`.
    pub fn max_offset_for(total_lines: usize, viewport: usize) -> usize {
        total_lines.saturating_sub(viewport)
    }

    /// One-based "start-end / total" position label.
    pub fn position_label(&self) -> String {
        if self.total_lines == 0 {
            return "0 / 0".to_string();
        }
        format!(
            "{}-{} / {}",
            self.first_line + 1,
            self.first_line + self.lines.len(),
            self.total_lines
        )
    }
}

/// Loads preview content for files. Never writes.
pub struct PreviewLoader;

impl PreviewLoader {
    /// Read a file as text.
    pub fn read(path: &Path) -> Result<String, PreviewError> {
        if path.is_dir() {
            return Err(PreviewError::IsDirectory);
        }

        let file = File::open(path).map_err(|e| PreviewError::IoError(e.to_string()))?;
        let metadata = file
            .metadata()
            .map_err(|e| PreviewError::IoError(e.to_string()))?;

        if metadata.len() > MAX_PREVIEW_SIZE {
            return Err(PreviewError::TooLarge(metadata.len()));
        }

        let mut bytes = Vec::with_capacity(metadata.len() as usize);
        file.take(MAX_PREVIEW_SIZE)
            .read_to_end(&mut bytes)
            .map_err(|e| PreviewError::IoError(e.to_string()))?;

        String::from_utf8(bytes).map_err(|_| PreviewError::NotText)
    }

    /// Read a file and return the window visible at `offset`.
    pub fn render(
        path: &Path,
        offset: usize,
        viewport: usize,
    ) -> Result<PreviewWindow, PreviewError> {
        let content = Self::read(path)?;
        Ok(PreviewWindow::from_content(&content, offset, viewport))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_classify() {
        assert_eq!(
            PreviewLine::classify("# comment"),
            PreviewLine::Comment("# comment".into())
        );
        assert_eq!(
            PreviewLine::classify("   # indented"),
            PreviewLine::Comment("   # indented".into())
        );
        assert_eq!(PreviewLine::classify("   "), PreviewLine::Blank);
        assert_eq!(
            PreviewLine::classify("URL=postgres://u:p@h/db?a=b"),
            PreviewLine::KeyValue {
                key: "URL".into(),
                value: "postgres://u:p@h/db?a=b".into()
            }
        );
        assert_eq!(
            PreviewLine::classify("EMPTY="),
            PreviewLine::KeyValue {
                key: "EMPTY".into(),
                value: String::new()
            }
        );
        assert_eq!(
            PreviewLine::classify("export"),
            PreviewLine::Plain("export".into())
        );
    }

    #[test]
    fn test_window_clamps_to_last_page() {
        let content = (1..=30).map(|i| format!("K{i}=v")).collect::<Vec<_>>().join("\n");

        let window = PreviewWindow::from_content(&content, 100, 10);
        assert_eq!(window.first_line, 20);
        assert_eq!(window.lines.len(), 10);
        assert!(window.can_scroll_up);
        assert!(!window.can_scroll_down);
        assert_eq!(window.position_label(), "21-30 / 30");

        let window = PreviewWindow::from_content(&content, 0, 10);
        assert!(!window.can_scroll_up);
        assert!(window.can_scroll_down);
        assert_eq!(window.position_label(), "1-10 / 30");
    }

    #[test]
    fn test_window_shorter_than_viewport() {
        let window = PreviewWindow::from_content("A=1\nB=2\n", 5, 10);
        assert_eq!(window.first_line, 0);
        assert_eq!(window.total_lines, 2);
        assert!(!window.can_scroll_up);
        assert!(!window.can_scroll_down);
    }

    #[test]
    fn test_empty_file() {
        let window = PreviewWindow::from_content("", 3, 10);
        assert!(window.lines.is_empty());
        assert_eq!(window.position_label(), "0 / 0");
    }

    #[test]
    fn test_render_reads_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".env.dev");
        fs::write(&path, "# dev\nA=1\n").unwrap();

        let window = PreviewLoader::render(&path, 0, 10).unwrap();
        assert_eq!(window.total_lines, 2);
        assert_eq!(window.lines[0], PreviewLine::Comment("# dev".into()));
    }

    #[test]
    fn test_unreadable_files() {
        let dir = TempDir::new().unwrap();

        assert!(matches!(
            PreviewLoader::read(&dir.path().join("missing")),
            Err(PreviewError::IoError(_))
        ));
        assert_eq!(
            PreviewLoader::read(dir.path()),
            Err(PreviewError::IsDirectory)
        );

        let binary = dir.path().join(".env.bin");
        fs::write(&binary, [0xff, 0xfe, 0x00]).unwrap();
        assert_eq!(PreviewLoader::read(&binary), Err(PreviewError::NotText));
    }
}
