//! Keyword-based category detection.
//!
//! A `CategoryTable` maps category names to keyword lists. Text is assigned
//! every category with at least one keyword occurring as a case-insensitive
//! substring; there is no tokenization, so `car` matches inside `scarf`.
//! Text without any hit is labelled `Uncategorized`.
//!
//! The table is data, not logic: the built-in table can be swapped for a JSON
//! file of the form `{"Category": ["keyword", ...]}` (key order preserved).

mod defaults;

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use log::debug;

use crate::config::{CATEGORY_SEPARATOR, UNCATEGORIZED};
use crate::error_handling::CategoryTableError;

use defaults::DEFAULT_CATEGORIES;

/// One category and its lower-cased keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    keywords: Vec<String>,
}

impl Category {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    fn matches(&self, lowered_text: &str) -> bool {
        self.keywords.iter().any(|k| lowered_text.contains(k.as_str()))
    }
}

/// Ordered category keyword table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTable {
    categories: Vec<Category>,
}

impl CategoryTable {
    /// Builds a validated table from `(name, keywords)` pairs.
    ///
    /// Names are trimmed, keywords are trimmed and lower-cased, and blank
    /// keywords are dropped.
    ///
    /// # Errors
    ///
    /// Fails on a blank or duplicate name, on the reserved `Uncategorized`
    /// name, or on a category left without keywords.
    pub fn from_entries<I, N, KI, K>(entries: I) -> Result<Self, CategoryTableError>
    where
        I: IntoIterator<Item = (N, KI)>,
        N: Into<String>,
        KI: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut categories = Vec::new();

        for (name, keywords) in entries {
            let name = name.into().trim().to_string();
            if name.is_empty() {
                return Err(CategoryTableError::EmptyName);
            }
            if name.eq_ignore_ascii_case(UNCATEGORIZED) {
                return Err(CategoryTableError::ReservedName(name));
            }
            if !seen.insert(name.clone()) {
                return Err(CategoryTableError::DuplicateName(name));
            }

            let keywords: Vec<String> = keywords
                .into_iter()
                .map(|k| k.into().trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect();
            if keywords.is_empty() {
                return Err(CategoryTableError::EmptyKeywords(name));
            }

            categories.push(Category { name, keywords });
        }

        Ok(CategoryTable { categories })
    }

    /// The built-in table.
    pub fn builtin() -> Self {
        let categories = DEFAULT_CATEGORIES
            .iter()
            .map(|(name, keywords)| Category {
                name: (*name).to_string(),
                keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            })
            .collect();
        CategoryTable { categories }
    }

    /// Parses a JSON object mapping category names to keyword arrays.
    pub fn from_json_str(json: &str) -> Result<Self, CategoryTableError> {
        let object: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;
        let mut entries = Vec::with_capacity(object.len());
        for (name, value) in object {
            let keywords: Vec<String> = serde_json::from_value(value)?;
            entries.push((name, keywords));
        }
        Self::from_entries(entries)
    }

    /// Reads and parses a JSON keyword table from disk.
    pub fn from_path(path: &Path) -> Result<Self, CategoryTableError> {
        let content = std::fs::read_to_string(path)?;
        let table = Self::from_json_str(&content)?;
        debug!(
            "Loaded {} categories from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    /// Returns every category with a keyword hit in `text`, in table order.
    pub fn detect(&self, text: &str) -> DetectedCategories {
        let lowered = text.to_lowercase();
        let matched: Vec<String> = self
            .categories
            .iter()
            .filter(|c| c.matches(&lowered))
            .map(|c| c.name.clone())
            .collect();

        if matched.is_empty() {
            DetectedCategories(vec![UNCATEGORIZED.to_string()])
        } else {
            DetectedCategories(matched)
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Detects categories in `text` using `table`.
pub fn detect_categories(table: &CategoryTable, text: &str) -> DetectedCategories {
    table.detect(text)
}

/// Set of category names detected for one record.
///
/// Never empty: text without a hit carries the single `Uncategorized` label.
/// Names are unique because table names are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedCategories(Vec<String>);

impl DetectedCategories {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|c| c == name)
    }

    pub fn is_uncategorized(&self) -> bool {
        self.0.len() == 1 && self.0[0] == UNCATEGORIZED
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for DetectedCategories {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(CATEGORY_SEPARATOR))
    }
}
