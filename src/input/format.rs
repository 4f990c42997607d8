//! Input document format detection.

use std::path::Path;

/// Serialization format of an input document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Yaml,
}

impl InputFormat {
    /// Human-readable format name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        }
    }

    /// Format implied by the file extension, if any
    #[must_use]
    pub fn from_extension(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Guess the format from the first meaningful line of content.
    ///
    /// JSON documents open with `{` or `[`. YAML is recognized by a document
    /// marker, a list item or a `key:` mapping entry. Blank or comment-only
    /// content yields `None`.
    #[must_use]
    pub fn detect_from_content(content: &str) -> Option<Self> {
        let line = content
            .trim_start_matches('\u{feff}')
            .lines()
            .map(str::trim)
            .find(|l| !l.is_empty() && !l.starts_with('#'))?;

        if line.starts_with('{') || line.starts_with('[') {
            Some(Self::Json)
        } else if line.starts_with("---") || line.starts_with("- ") || line.contains(':') {
            Some(Self::Yaml)
        } else {
            None
        }
    }

    /// Extension first, content sniffing second
    #[must_use]
    pub fn detect(path: &Path, content: &str) -> Option<Self> {
        Self::from_extension(path).or_else(|| Self::detect_from_content(content))
    }
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
