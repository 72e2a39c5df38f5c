use crate::models::dir_entry::DirectoryEntry;
use std::fs;
use std::io;
use std::path::Path;

/// Lists the immediate children of a directory.
pub trait DirLister {
    fn list(&self, path: &Path) -> io::Result<Vec<DirectoryEntry>>;
}

/// Lister backed by the real filesystem.
///
/// Entries come back ordered by file name (byte-wise), and symlinks are not
/// followed: a link to a directory is listed as a file.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLister;

impl DirLister for FsLister {
    fn list(&self, path: &Path) -> io::Result<Vec<DirectoryEntry>> {
        let mut entries = Vec::new();

        for entry in fs::read_dir(path)? {
            let entry = entry?;
            let name = entry.file_name();

            let is_dir = match entry.file_type() {
                Ok(t) => t.is_dir(),
                Err(e) => {
                    tracing::debug!("File type unavailable for {:?}: {}", entry.path(), e);
                    false
                }
            };
            if is_dir {
                entries.push(DirectoryEntry::dir(name));
                continue;
            }

            match entry.metadata() {
                Ok(md) => entries.push(DirectoryEntry::file(name, md.len())),
                Err(e) => {
                    tracing::debug!("Metadata unavailable for {:?}: {}", entry.path(), e);
                    entries.push(DirectoryEntry::file_unknown(name));
                }
            }
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }
}

/// Keeps directories only, preserving their relative order.
pub fn take_dirs_only(entries: Vec<DirectoryEntry>) -> Vec<DirectoryEntry> {
    entries.into_iter().filter(|e| e.is_dir()).collect()
}
