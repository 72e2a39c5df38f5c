use std::borrow::Cow;
use std::ffi::OsString;

/// A single child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Raw file name as returned by the OS; used to build child paths.
    pub name: OsString,
    pub kind: EntryKind,
    /// `None` when the entry's metadata could not be read.
    pub size: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

impl DirectoryEntry {
    pub fn dir(name: impl Into<OsString>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Directory,
            size: None,
        }
    }

    pub fn file(name: impl Into<OsString>, size: u64) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
            size: Some(size),
        }
    }

    pub fn file_unknown(name: impl Into<OsString>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
            size: None,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Name for output; invalid UTF-8 is replaced with U+FFFD.
    pub fn display_name(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }
}
