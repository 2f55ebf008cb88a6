//! Filesystem directories as traversal nodes

use std::cmp::Reverse;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::warn;

use crate::node::Node;

/// A path on disk, traversable as a [`Node`]
///
/// Children are read from the directory each time the traversal steps into
/// it: directories first, then files, alphabetically within each group.
/// Symbolic links are reported as leaves and never followed.
///
/// A directory that cannot be read is logged and treated as empty, so one
/// unreadable directory does not end the whole walk.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FsNode {
    path: PathBuf,
    is_dir: bool,
}

impl FsNode {
    /// Create a node for an existing path
    ///
    /// # Errors
    ///
    /// Returns an error if the path's metadata cannot be read.
    pub fn new(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let metadata = fs::symlink_metadata(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            is_dir: metadata.is_dir(),
        })
    }

    /// Full path of this node
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Last path component, or the whole path for roots like `/` or `.`
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// True for directories; files and symlinks are leaves
    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    fn read_children(&self) -> io::Result<Vec<FsNode>> {
        let entries = fs::read_dir(&self.path)?.map(|entry| -> io::Result<FsNode> {
            let entry = entry?;
            Ok(FsNode {
                is_dir: entry.file_type()?.is_dir(),
                path: entry.path(),
            })
        });
        Ok(collect_children(&self.path, entries))
    }
}

/// Directories first, then files, by name within each group
///
/// An entry that fails to read is logged and left out; its siblings are kept.
fn collect_children(dir: &Path, entries: impl Iterator<Item = io::Result<FsNode>>) -> Vec<FsNode> {
    let mut children: Vec<FsNode> = entries
        .filter_map(|entry| match entry {
            Ok(node) => Some(node),
            Err(e) => {
                warn!("skipping entry in {}: {}", dir.display(), e);
                None
            }
        })
        .collect();
    children.sort_by(|a, b| {
        (Reverse(a.is_dir), a.path.file_name()).cmp(&(Reverse(b.is_dir), b.path.file_name()))
    });
    children
}

impl Node for FsNode {
    type Children = std::vec::IntoIter<FsNode>;

    fn children(&self) -> Self::Children {
        if !self.is_dir() {
            return Vec::new().into_iter();
        }
        match self.read_children() {
            Ok(children) => children.into_iter(),
            Err(e) => {
                warn!("cannot read directory {}: {}", self.path.display(), e);
                Vec::new().into_iter()
            }
        }
    }
}
