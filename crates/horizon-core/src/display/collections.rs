//! Newtypes over `Vec` so listings get their own markdown `Display`.

use std::{fmt, ops::Index};

use crate::models::{ListSummary, Todo};

/// Newtype wrapper for displaying a list of todos.
///
/// # Examples
///
/// ```rust
/// use horizon_core::display::Todos;
///
/// let todos = Todos(vec![]);
/// assert_eq!(todos.to_string(), "No todos found.\n");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Todos(pub Vec<Todo>);

impl Todos {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of todos in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the todo at the given index.
    pub fn get(&self, index: usize) -> Option<&Todo> {
        self.0.get(index)
    }

    /// Get an iterator over the todos.
    pub fn iter(&self) -> std::slice::Iter<'_, Todo> {
        self.0.iter()
    }

    /// The underlying slice.
    pub fn as_slice(&self) -> &[Todo] {
        &self.0
    }
}

impl Index<usize> for Todos {
    type Output = Todo;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Todos {
    type Item = Todo;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Todos {
    type Item = &'a Todo;
    type IntoIter = std::slice::Iter<'a, Todo>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Todos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No todos found.")
        } else {
            for todo in &self.0 {
                todo.fmt_summary(f)?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying candidate list summaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSummaries(pub Vec<ListSummary>);

impl ListSummaries {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of lists in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the list summaries.
    pub fn iter(&self) -> std::slice::Iter<'_, ListSummary> {
        self.0.iter()
    }
}

impl IntoIterator for ListSummaries {
    type Item = ListSummary;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for ListSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No lists found.")
        } else {
            for list in &self.0 {
                write!(f, "{list}")?;
            }
            Ok(())
        }
    }
}
