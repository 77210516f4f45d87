#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub filename: String,
    pub content_type: ContentType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Text,
    Docx,
    Pdf,
}

impl ContentType {
    /// Maps a file extension (without the dot) to a supported content type.
    /// Unrecognized extensions return `None` and are skipped by the loader.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "txt" => Some(Self::Text),
            "docx" => Some(Self::Docx),
            "pdf" => Some(Self::Pdf),
            _ => None,
        }
    }

    pub fn as_extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Docx => "docx",
            Self::Pdf => "pdf",
        }
    }
}

impl Document {
    pub fn new(filename: String, content_type: ContentType) -> Self {
        Self {
            filename,
            content_type,
        }
    }
}
