use std::fmt;

/// Identifier of a file record. Unique within a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileId(pub u64);

impl FileId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for FileId {
    fn from(value: u64) -> Self {
        FileId(value)
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Metadata for one listed file. No file bytes are ever held.
///
/// Records are never mutated after creation; the list only appends and removes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub id: FileId,
    pub name: String,
    /// MIME-like type string, descriptive only
    pub content_type: String,
    /// Milliseconds since the Unix epoch
    pub last_modified_ms: u64,
    pub size_bytes: u64,
}

impl FileRecord {
    /// First character of the name, uppercased. Used for the avatar badge.
    pub fn initial(&self) -> char {
        self.name
            .chars()
            .next()
            .and_then(|c| c.to_uppercase().next())
            .unwrap_or('?')
    }
}
