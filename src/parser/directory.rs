use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::tree::Tree;

/// Build a tree whose single top-level branch is `path`, with every non-hidden file and
/// directory below it. Entries are sorted by file name.
pub fn tree_from_directory(path: &Path) -> io::Result<Tree> {
    let mut tree = Tree::new();
    let root = tree.add_branch(path.display().to_string());
    add_entries(root, path)?;
    Ok(tree)
}

fn add_entries(tree: &mut Tree, path: &Path) -> io::Result<()> {
    let mut entries = fs::read_dir(path)?.collect::<io::Result<Vec<_>>>()?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            debug!(path = %entry.path().display(), "skipping hidden entry");
            continue;
        }

        let child = tree.add_branch(name);
        if entry.file_type()?.is_dir() {
            add_entries(child, &entry.path())?;
        }
    }

    Ok(())
}
