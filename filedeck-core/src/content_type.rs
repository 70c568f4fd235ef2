/// Content type of a listed file.
///
/// Descriptive only. Records carry the MIME string; this enum names the ones
/// the app produces itself so they are spelled in one place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentType {
    Docx,
    Pptx,
    Pdf,
    Png,
    PlainText,
    Other(String),
}

impl ContentType {
    /// MIME type string (e.g., "application/pdf", "text/plain").
    pub fn as_str(&self) -> &str {
        match self {
            Self::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            Self::Pptx => {
                "application/vnd.openxmlformats-officedocument.presentationml.presentation"
            }
            Self::Pdf => "application/pdf",
            Self::Png => "image/png",
            Self::PlainText => "text/plain",
            Self::Other(s) => s,
        }
    }

    /// Parse from a MIME type string. Unknown strings are kept verbatim.
    pub fn from_mime(s: &str) -> Self {
        match s {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                Self::Docx
            }
            "application/vnd.openxmlformats-officedocument.presentationml.presentation" => {
                Self::Pptx
            }
            "application/pdf" => Self::Pdf,
            "image/png" => Self::Png,
            "text/plain" => Self::PlainText,
            other => Self::Other(other.to_string()),
        }
    }

    /// Short label for compact display ("DOCX", "PDF", ...).
    pub fn label(&self) -> String {
        match self {
            Self::Docx => "DOCX".to_string(),
            Self::Pptx => "PPTX".to_string(),
            Self::Pdf => "PDF".to_string(),
            Self::Png => "PNG".to_string(),
            Self::PlainText => "TXT".to_string(),
            Self::Other(s) => s
                .rsplit('/')
                .next()
                .unwrap_or(s)
                .to_uppercase(),
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
