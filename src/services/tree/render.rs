use crate::core::errors::{Error, Result};
use crate::models::dir_entry::DirectoryEntry;
use crate::services::fs::listing::{take_dirs_only, DirLister, FsLister};
use std::io::Write;
use std::path::Path;

pub const ENTRY_PREFIX: &str = "├───";
pub const LAST_ENTRY_PREFIX: &str = "└───";
pub const LEVEL_PREFIX: &str = "│\t";
pub const LAST_LEVEL_PREFIX: &str = "\t";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub include_files: bool,
}

/// Writes a directory hierarchy as an indented tree, one line per entry,
/// in depth-first pre-order.
///
/// Children are emitted in exactly the order the lister returns them. Any
/// listing failure aborts the whole render; lines already written stay in
/// the sink.
pub struct TreeRenderer<L> {
    lister: L,
    options: RenderOptions,
}

impl<L: DirLister> TreeRenderer<L> {
    pub fn new(lister: L, options: RenderOptions) -> Self {
        Self { lister, options }
    }

    pub fn render<W: Write>(&self, out: &mut W, root: &Path) -> Result<()> {
        self.render_level(out, root, "")
    }

    fn render_level<W: Write>(&self, out: &mut W, path: &Path, base_prefix: &str) -> Result<()> {
        tracing::debug!("Listing {:?}", path);
        let mut entries = self
            .lister
            .list(path)
            .map_err(|e| Error::traversal(path, e))?;

        if !self.options.include_files {
            entries = take_dirs_only(entries);
        }

        let count = entries.len();
        for (idx, entry) in entries.iter().enumerate() {
            let is_last = idx + 1 == count;
            let (line, child_prefix) = format_line(entry, base_prefix, is_last);
            out.write_all(line.as_bytes())?;

            if entry.is_dir() {
                self.render_level(out, &path.join(&entry.name), &child_prefix)?;
            }
        }

        Ok(())
    }
}

/// Renders `root` from the real filesystem.
pub fn render_tree<W: Write>(out: &mut W, root: &Path, include_files: bool) -> Result<()> {
    TreeRenderer::new(FsLister, RenderOptions { include_files }).render(out, root)
}

/// Returns the newline-terminated line for `entry` and the prefix its
/// children inherit.
///
/// An entry whose size is unknown gets `" (unknown)"` followed by the size
/// suffix of a zero size, so it ends in `" (unknown) (empty)"`.
pub fn format_line(entry: &DirectoryEntry, base_prefix: &str, is_last: bool) -> (String, String) {
    let (connector, level) = if is_last {
        (LAST_ENTRY_PREFIX, LAST_LEVEL_PREFIX)
    } else {
        (ENTRY_PREFIX, LEVEL_PREFIX)
    };

    let mut line = format!("{base_prefix}{connector}{}", entry.display_name());

    if !entry.is_dir() {
        if entry.size.is_none() {
            line.push_str(" (unknown)");
        }
        match entry.size.unwrap_or(0) {
            0 => line.push_str(" (empty)"),
            n => line.push_str(&format!(" ({n}b)")),
        }
    }
    line.push('\n');

    (line, format!("{base_prefix}{level}"))
}
