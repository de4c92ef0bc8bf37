//! Ordered set of compiled layouts.
//!
//! [`Layouts`] wraps an [`IndexSet`] so that duplicate layouts collapse into
//! one entry while iteration keeps the order in which variants were first
//! produced. That order is deterministic: the same template always yields
//! the same sequence of layouts.
//!
//! ```rust
//! use flexlayout::compile_all;
//!
//! let layouts = compile_all("YYYY[-MM[-DD]]").unwrap();
//! let all: Vec<&str> = layouts.iter().map(String::as_str).collect();
//! assert_eq!(all, ["2006", "2006-01", "2006-01-02"]);
//! ```

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Deduplicated layouts in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Layouts(IndexSet<String>);

impl Layouts {
    #[must_use]
    pub fn new() -> Self {
        Layouts(IndexSet::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Layouts(IndexSet::with_capacity(capacity))
    }

    /// Adds a layout. Returns `false` if it was already present, in which
    /// case its original position is kept.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flexlayout::Layouts;
    ///
    /// let mut layouts = Layouts::new();
    /// assert!(layouts.insert("2006".to_string()));
    /// assert!(!layouts.insert("2006".to_string()));
    /// assert_eq!(layouts.len(), 1);
    /// ```
    pub fn insert(&mut self, layout: String) -> bool {
        self.0.insert(layout)
    }

    #[must_use]
    pub fn contains(&self, layout: &str) -> bool {
        self.0.contains(layout)
    }

    /// The layout of the first variant produced.
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get_index(index).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the layouts, in first-seen order.
    pub fn iter(&self) -> indexmap::set::Iter<'_, String> {
        self.0.iter()
    }

    /// Returns the only layout, or `None` when there are zero or several.
    #[must_use]
    pub fn single(&self) -> Option<&str> {
        if self.0.len() == 1 {
            self.first()
        } else {
            None
        }
    }
}

impl From<Layouts> for Vec<String> {
    fn from(layouts: Layouts) -> Self {
        layouts.0.into_iter().collect()
    }
}

impl IntoIterator for Layouts {
    type Item = String;
    type IntoIter = indexmap::set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Layouts {
    type Item = &'a String;
    type IntoIter = indexmap::set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<String> for Layouts {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Layouts(IndexSet::from_iter(iter))
    }
}
