//! Category records and flat record files.
//!
//! A record file is TOML with one `[[category]]` table per record:
//!
//! ```toml
//! [[category]]
//! id = 1
//! name = "Root"
//!
//! [[category]]
//! id = 2
//! name = "Child1"
//! parent_id = 1
//! ```

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::config::LabelStyle;
use crate::domain::{build_forest, Forest, Index, NodeId, TreeRecord};

/// Named product category, linked by parent id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: NodeId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub parent_id: Option<NodeId>,
}

impl Category {
    pub fn new(id: NodeId, name: impl Into<String>, parent_id: Option<NodeId>) -> Self {
        Self {
            id,
            name: name.into(),
            parent_id,
        }
    }

    pub fn label(&self, style: LabelStyle) -> String {
        match style {
            LabelStyle::Id => self.id.to_string(),
            LabelStyle::Name if !self.name.is_empty() => self.name.clone(),
            LabelStyle::Name => self.id.to_string(),
            LabelStyle::Both => self.to_string(),
        }
    }
}

impl TreeRecord for Category {
    fn id(&self) -> NodeId {
        self.id
    }

    fn parent_id(&self) -> Option<NodeId> {
        self.parent_id
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "{}", self.id)
        } else {
            write!(f, "{} ({})", self.name, self.id)
        }
    }
}

#[derive(Debug, Deserialize, Default)]
struct RecordFile {
    #[serde(default)]
    category: Vec<Category>,
}

/// Parse record file content. `path` is only used for error messages.
pub fn parse_categories(content: &str, path: &Path) -> ApplicationResult<Vec<Category>> {
    let file: RecordFile = toml::from_str(content).map_err(|e| ApplicationError::InvalidRecords {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(file.category)
}

#[instrument(level = "debug")]
pub fn load_categories(path: &Path) -> ApplicationResult<Vec<Category>> {
    let content = std::fs::read_to_string(path).with_path_context("read record file", path)?;
    let categories = parse_categories(&content, path)?;
    debug!(count = categories.len(), "records loaded");
    Ok(categories)
}

/// Linked forest of categories with id resolution.
#[derive(Debug)]
pub struct Catalog {
    forest: Forest<Category>,
}

impl Catalog {
    pub fn from_records(records: Vec<Category>) -> Self {
        Self {
            forest: build_forest(records),
        }
    }

    pub fn load(path: &Path) -> ApplicationResult<Self> {
        Ok(Self::from_records(load_categories(path)?))
    }

    pub fn forest(&self) -> &Forest<Category> {
        &self.forest
    }

    /// Index of the node with `id`; orphans do not resolve.
    pub fn resolve(&self, id: NodeId) -> ApplicationResult<Index> {
        self.forest
            .find_in_forest(id)
            .ok_or(ApplicationError::UnknownId(id))
    }

    /// Label of the node at `idx`, empty for dangling indices.
    pub fn label(&self, idx: Index, style: LabelStyle) -> String {
        self.forest
            .record(idx)
            .map(|c| c.label(style))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_parse_categories_defaults_optional_fields() {
        let content = r#"
[[category]]
id = 1

[[category]]
id = 2
name = "Child1"
parent_id = 1
"#;
        let categories = parse_categories(content, &PathBuf::from("inline.toml")).unwrap();

        assert_eq!(
            categories,
            vec![Category::new(1, "", None), Category::new(2, "Child1", Some(1))]
        );
    }

    #[test]
    fn test_label_styles() {
        let named = Category::new(3, "Child2", Some(1));
        let unnamed = Category::new(4, "", None);

        assert_eq!(named.label(LabelStyle::Id), "3");
        assert_eq!(named.label(LabelStyle::Name), "Child2");
        assert_eq!(named.label(LabelStyle::Both), "Child2 (3)");
        assert_eq!(unnamed.label(LabelStyle::Name), "4");
        assert_eq!(unnamed.label(LabelStyle::Both), "4");
    }
}
