//! Finding the bytes behind a sprite reference.

use std::{
    path::{Component, Path, PathBuf},
    sync::Arc,
};

use indexmap::IndexMap;

/// Environment variable read by [`DirLocator::from_env`].
pub const PATH_VAR: &str = "SPRITESTORE_PATH";

/// Where a located asset lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    /// A file on disk. It is read when the sprite is decoded.
    Path(PathBuf),
    /// Bytes already in memory.
    Bytes(Arc<[u8]>),
}

/// Resolves references to resources.
pub trait Locator {
    /// Finds the resource backing `reference`.
    ///
    /// Returns [`None`] if there is no such resource. This is an expected outcome, not an error.
    fn locate(&self, reference: &str) -> Option<Resource>;
}

impl<L> Locator for &L
where
    L: Locator + ?Sized,
{
    fn locate(&self, reference: &str) -> Option<Resource> {
        (**self).locate(reference)
    }
}

impl<L> Locator for Box<L>
where
    L: Locator + ?Sized,
{
    fn locate(&self, reference: &str) -> Option<Resource> {
        (**self).locate(reference)
    }
}

impl<L> Locator for Arc<L>
where
    L: Locator + ?Sized,
{
    fn locate(&self, reference: &str) -> Option<Resource> {
        (**self).locate(reference)
    }
}

/// Looks references up as relative paths under a list of root directories.
///
/// Roots are searched in order and the first regular file wins. References that would escape a root (absolute paths, `..`) are never found.
#[derive(Debug, Clone, Default)]
pub struct DirLocator {
    roots: Vec<PathBuf>,
}

impl DirLocator {
    /// Creates a locator with a single root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            roots: vec![root.into()],
        }
    }

    /// Creates a locator searching `roots` in order.
    pub fn with_roots<I>(roots: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<PathBuf>,
    {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a locator from the roots listed in `SPRITESTORE_PATH`, separated like `PATH`.
    ///
    /// Returns [`None`] if the variable is not set.
    pub fn from_env() -> Option<Self> {
        let paths = std::env::var_os(PATH_VAR)?;
        Some(Self::with_roots(std::env::split_paths(&paths)))
    }

    /// Appends a root, searched after all existing ones.
    pub fn push_root(&mut self, root: impl Into<PathBuf>) {
        self.roots.push(root.into());
    }

    pub fn roots(&self) -> impl Iterator<Item = &Path> {
        self.roots.iter().map(PathBuf::as_path)
    }
}

impl Locator for DirLocator {
    fn locate(&self, reference: &str) -> Option<Resource> {
        let relative = Path::new(reference);
        if !relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return None;
        }
        self.roots
            .iter()
            .map(|root| root.join(relative))
            .find(|path| path.is_file())
            .map(Resource::Path)
    }
}

/// Serves assets registered in memory, e.g. with [`include_bytes!`].
#[derive(Debug, Clone, Default)]
pub struct MemoryLocator {
    assets: IndexMap<String, Arc<[u8]>>,
}

impl MemoryLocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `bytes` under `reference`, replacing any previous asset.
    pub fn insert(&mut self, reference: impl Into<String>, bytes: impl Into<Arc<[u8]>>) {
        self.assets.insert(reference.into(), bytes.into());
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl Locator for MemoryLocator {
    fn locate(&self, reference: &str) -> Option<Resource> {
        self.assets.get(reference).cloned().map(Resource::Bytes)
    }
}
