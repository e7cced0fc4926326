//! File intake: turn a drop payload or picker selection into an ordered
//! list of file handles.

use std::fmt;

/// Where a batch of files came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileSource {
    /// `dataTransfer.files` of a `drop` event.
    Drop,
    /// `files` of the picker input after a `change` event.
    Picker,
    /// Handed in directly by script.
    Script,
}

impl fmt::Display for FileSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Drop => "drop",
            Self::Picker => "picker",
            Self::Script => "script",
        })
    }
}

/// An indexable collection of files, such as a browser `FileList`.
///
/// Owned lists are passed as slices (`files.as_slice()`), so inherent
/// `Vec` methods never compete with the trait's `len` / `get`.
pub trait FileCollection {
    /// The file handle type yielded by the collection.
    type File;

    /// Number of files in the collection.
    fn len(&self) -> usize;

    /// The file at `index`, or `None` if it cannot be retrieved.
    fn get(&self, index: usize) -> Option<Self::File>;

    /// Returns `true` if the collection holds no files.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<F: Clone> FileCollection for [F] {
    type File = F;

    fn len(&self) -> usize {
        <[F]>::len(self)
    }

    fn get(&self, index: usize) -> Option<F> {
        <[F]>::get(self, index).cloned()
    }
}

/// Copy a collection into a vector, preserving selection order.
///
/// Entries the collection cannot produce are skipped; the positions of
/// the remaining files are renumbered so indices stay contiguous.
pub fn normalize<C>(files: &C) -> Vec<C::File>
where
    C: FileCollection + ?Sized,
{
    (0..files.len()).filter_map(|i| files.get(i)).collect()
}
