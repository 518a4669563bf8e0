use std::collections::HashSet;
use std::path::Path;

use crate::error::GenerateError;

/// The set of device names the debugger knows about.
///
/// Duplicates collapse into one entry, and the order of first appearance is kept
/// so the generated table does not change between runs.
#[derive(Debug, Default, Clone)]
pub struct NameList {
    ordered: Vec<String>,
    members: HashSet<String>,
}

impl NameList {
    pub fn from_path(path: &Path) -> Result<Self, GenerateError> {
        let contents = std::fs::read_to_string(path).map_err(|source| GenerateError::Io {
            source,
            path: path.to_owned(),
        })?;

        let names = Self::parse(&contents);
        tracing::debug!("Read {} device names from {}.", names.len(), path.display());

        Ok(names)
    }

    /// Collects every non-empty line of `contents`.
    ///
    /// Lines may end in `\n`, `\r\n` or a lone `\r`.
    pub fn parse(contents: &str) -> Self {
        contents.split(['\r', '\n']).collect()
    }

    fn insert(&mut self, name: &str) {
        if name.is_empty() || self.members.contains(name) {
            return;
        }

        self.members.insert(name.to_owned());
        self.ordered.push(name.to_owned());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.members.contains(name)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Iterates the names in order of first appearance.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }
}

impl<'a> FromIterator<&'a str> for NameList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut names = NameList::default();
        for name in iter {
            names.insert(name);
        }
        names
    }
}
