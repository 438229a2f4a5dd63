use std::{fmt, path::is_separator};

/// A single path, relative to a base directory, as written on one line of a listing.
///
/// The entry keeps the trimmed line verbatim. Whether it denotes a directory is derived from
/// the trailing character only, so `src` is a file and `src/` is a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathEntry(String);
impl PathEntry {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }
    /// `true` iff the entry ends with a path separator.
    pub fn is_directory(&self) -> bool {
        self.0.ends_with(is_separator)
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
impl fmt::Display for PathEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl AsRef<str> for PathEntry {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Ordered list of [`PathEntry`] values parsed from a listing. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathList {
    pub entries: Vec<PathEntry>,
}
impl PathList {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, PathEntry> {
        self.entries.iter()
    }
    /// Renders the list back into listing form, one entry per line.
    pub fn to_listing(&self) -> String {
        self.entries
            .iter()
            .map(PathEntry::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
impl<'a> IntoIterator for &'a PathList {
    type Item = &'a PathEntry;
    type IntoIter = std::slice::Iter<'a, PathEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
impl FromIterator<PathEntry> for PathList {
    fn from_iter<I: IntoIterator<Item = PathEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Splits `input` into a [`PathList`], one entry per non-blank line.
///
/// Both `\n` and `\r\n` line endings are accepted. Each line is trimmed and lines that are empty
/// afterwards are dropped. There is no failure mode: text that holds no paths yields an empty list.
pub fn parse_paths(input: &str) -> PathList {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(PathEntry::new)
        .collect()
}
