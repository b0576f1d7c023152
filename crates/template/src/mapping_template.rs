use std::collections::VecDeque;
use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Serialize, Serializer};

const FRAGMENT_SEPARATOR: &str = "\n\n";

/// A resolver mapping template kept as an ordered list of text fragments.
///
/// Fragments render head first, separated by a blank line.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct MappingTemplate(VecDeque<String>);

impl MappingTemplate {
    pub fn new(text: impl Into<String>) -> Self {
        let mut template = Self::default();
        template.append(text);
        template
    }

    /// Inserts a fragment ahead of all existing content.
    pub fn prepend(&mut self, fragment: impl Into<String>) {
        self.0.push_front(fragment.into());
    }

    pub fn append(&mut self, fragment: impl Into<String>) {
        self.0.push_back(fragment.into());
    }

    pub fn fragments(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn render(&self) -> String {
        self.fragments().collect::<Vec<_>>().join(FRAGMENT_SEPARATOR)
    }
}

impl Display for MappingTemplate {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.render())
    }
}

impl Serialize for MappingTemplate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.render())
    }
}
