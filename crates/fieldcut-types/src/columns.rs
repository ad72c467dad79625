use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Which occurrence of a repeated header name the name lookup keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    First,
    #[default]
    Last,
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DuplicatePolicy::First => write!(f, "first"),
            DuplicatePolicy::Last => write!(f, "last"),
        }
    }
}

/// A column name paired with its 0-based input position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub index: usize,
}

impl Column {
    pub fn new(name: impl Into<String>, index: usize) -> Self {
        Self {
            name: name.into(),
            index,
        }
    }
}

/// The header row: every cell in order plus a name lookup.
///
/// `columns()` always has one entry per header cell. The name lookup holds one
/// index per distinct name, chosen by the [`DuplicatePolicy`].
#[derive(Debug, Clone)]
pub struct HeaderMap {
    columns: Vec<Column>,
    lookup: HashMap<String, usize>,
}

impl HeaderMap {
    pub fn new(cells: &[String], policy: DuplicatePolicy) -> Self {
        let mut columns = Vec::with_capacity(cells.len());
        let mut lookup = HashMap::with_capacity(cells.len());

        for (index, name) in cells.iter().enumerate() {
            columns.push(Column::new(name.clone(), index));
            match policy {
                DuplicatePolicy::Last => {
                    lookup.insert(name.clone(), index);
                }
                DuplicatePolicy::First => {
                    lookup.entry(name.clone()).or_insert(index);
                }
            }
        }

        Self { columns, lookup }
    }

    /// Header for input without a header row: columns are named `1..=width`
    pub fn numbered(width: usize) -> Self {
        let cells: Vec<String> = (1..=width).map(|n| n.to_string()).collect();
        Self::new(&cells, DuplicatePolicy::Last)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column at a 0-based header position
    pub fn at(&self, position: usize) -> Option<&Column> {
        self.columns.get(position)
    }

    /// Input index the name lookup assigns to `name`
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.lookup.get(name).copied()
    }
}

/// Ordered map of output column name to input index.
///
/// Insertion order is output order. Inserting a name that is already present
/// leaves the map unchanged, so the first insertion owns the position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedColumns {
    columns: Vec<Column>,
    names: HashSet<String>,
}

impl ResolvedColumns {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the column was added
    pub fn insert(&mut self, name: &str, index: usize) -> bool {
        if self.names.contains(name) {
            return false;
        }
        self.names.insert(name.to_string());
        self.columns.push(Column::new(name, index));
        true
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Column> {
        self.columns.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn as_pairs(&self) -> Vec<(&str, usize)> {
        self.columns
            .iter()
            .map(|c| (c.name.as_str(), c.index))
            .collect()
    }
}

impl<'a> IntoIterator for &'a ResolvedColumns {
    type Item = &'a Column;
    type IntoIter = std::slice::Iter<'a, Column>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}
