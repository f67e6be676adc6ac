//! Grouped option collections.
//!
//! A [`Dataset`] is the canonical grouping handed to a selector; a
//! [`FilteredView`] is derived from it and always has the same sections in
//! the same order, even when a section ends up empty.

use serde::{Deserialize, Serialize};

/// An ordered group of options with an optional header title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>"))]
pub struct Section<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default = "Vec::new")]
    pub options: Vec<T>,
}

impl<T> Section<T> {
    pub fn new(options: Vec<T>) -> Self {
        Self {
            title: None,
            options,
        }
    }

    pub fn titled(title: impl Into<String>, options: Vec<T>) -> Self {
        Self {
            title: Some(title.into()),
            options,
        }
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn get(&self, row: usize) -> Option<&T> {
        self.options.get(row)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.options.iter()
    }
}

impl<T: Clone> Section<T> {
    /// Copies the section keeping only options accepted by `keep`.
    ///
    /// The title and the relative order of the kept options are preserved.
    pub fn filtered<F>(&self, mut keep: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        Self {
            title: self.title.clone(),
            options: self
                .options
                .iter()
                .filter(|option| keep(option))
                .cloned()
                .collect(),
        }
    }
}

impl<T> FromIterator<T> for Section<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// An ordered sequence of sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>"))]
pub struct GroupedOptions<T> {
    sections: Vec<Section<T>>,
}

/// Canonical, never-filtered option collection.
pub type Dataset<T> = GroupedOptions<T>;

/// Display-ready collection derived from a [`Dataset`] by the active filter.
pub type FilteredView<T> = GroupedOptions<T>;

impl<T> Default for GroupedOptions<T> {
    fn default() -> Self {
        Self {
            sections: Vec::new(),
        }
    }
}

impl<T> GroupedOptions<T> {
    pub fn new(sections: Vec<Section<T>>) -> Self {
        Self { sections }
    }

    /// Builds untitled sections from nested vectors.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        Self {
            sections: rows.into_iter().map(Section::new).collect(),
        }
    }

    pub fn sections(&self) -> &[Section<T>] {
        &self.sections
    }

    pub fn section(&self, index: usize) -> Option<&Section<T>> {
        self.sections.get(index)
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Number of options across all sections.
    pub fn option_count(&self) -> usize {
        self.sections.iter().map(Section::len).sum()
    }

    pub fn get(&self, path: IndexPath) -> Option<&T> {
        self.sections.get(path.section)?.get(path.row)
    }

    /// Iterates options together with their index paths.
    pub fn iter_with_paths(&self) -> impl Iterator<Item = (IndexPath, &T)> {
        self.sections
            .iter()
            .enumerate()
            .flat_map(|(section, group)| {
                group
                    .iter()
                    .enumerate()
                    .map(move |(row, option)| (IndexPath::new(section, row), option))
            })
    }

    pub fn into_sections(self) -> Vec<Section<T>> {
        self.sections
    }
}

impl<T: Clone> GroupedOptions<T> {
    /// Derives a same-shaped collection keeping only options accepted by `keep`.
    pub fn filtered<F>(&self, mut keep: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        Self {
            sections: self
                .sections
                .iter()
                .map(|section| section.filtered(&mut keep))
                .collect(),
        }
    }

    /// Option lists per section, without titles.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.sections
            .iter()
            .map(|section| section.options.clone())
            .collect()
    }
}

impl<T> From<Vec<Section<T>>> for GroupedOptions<T> {
    fn from(sections: Vec<Section<T>>) -> Self {
        Self::new(sections)
    }
}

impl<T> FromIterator<Section<T>> for GroupedOptions<T> {
    fn from_iter<I: IntoIterator<Item = Section<T>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Position of an option inside a grouped collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IndexPath {
    pub section: usize,
    pub row: usize,
}

impl IndexPath {
    pub fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }
}

impl std::fmt::Display for IndexPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.section, self.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filtering_keeps_empty_sections() {
        let data = GroupedOptions::from_rows(vec![vec![1, 2, 3], vec![4]]);
        let evens = data.filtered(|n| n % 2 == 0);
        assert_eq!(evens.section_count(), 2);
        assert_eq!(evens.to_rows(), vec![vec![2], vec![4]]);

        let none = data.filtered(|_| false);
        assert_eq!(none.section_count(), 2);
        assert_eq!(none.option_count(), 0);
    }

    #[test]
    fn filtering_keeps_titles() {
        let data = GroupedOptions::new(vec![Section::titled("North", vec!["a", "b"])]);
        let filtered = data.filtered(|value| *value == "b");
        assert_eq!(filtered.sections()[0].title.as_deref(), Some("North"));
        assert_eq!(filtered.sections()[0].options, vec!["b"]);
    }

    #[test]
    fn index_paths_follow_sections() {
        let data = GroupedOptions::from_rows(vec![vec!['a'], vec![], vec!['b', 'c']]);
        let paths: Vec<_> = data.iter_with_paths().map(|(path, v)| (path, *v)).collect();
        assert_eq!(
            paths,
            vec![
                (IndexPath::new(0, 0), 'a'),
                (IndexPath::new(2, 0), 'b'),
                (IndexPath::new(2, 1), 'c'),
            ]
        );
        assert_eq!(data.get(IndexPath::new(2, 1)), Some(&'c'));
        assert_eq!(data.get(IndexPath::new(1, 0)), None);
    }
}
