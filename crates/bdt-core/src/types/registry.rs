//! Category registry: id → Category.

use std::collections::HashMap;

use super::{Category, CategoryId};
use crate::errors::{AgentError, AgentResult};

/// Read-only mapping from category id to its Gaussian parameters.
/// Several ids may share identical parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryRegistry {
    categories: HashMap<CategoryId, Category>,
}

impl CategoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a category under `id`, replacing any previous entry.
    pub fn insert(&mut self, id: impl Into<CategoryId>, category: Category) -> Option<Category> {
        self.categories.insert(id.into(), category)
    }

    /// Validate `(mean, std_dev)` and register the resulting category.
    pub fn register(
        &mut self,
        id: impl Into<CategoryId>,
        mean: f64,
        std_dev: f64,
    ) -> AgentResult<()> {
        let id = id.into();
        let category = Category::new(mean, std_dev).map_err(|err| match err {
            AgentError::InvalidParameter { field, message } => AgentError::InvalidParameter {
                field: format!("categories.{id}.{field}"),
                message,
            },
            other => other,
        })?;
        self.categories.insert(id, category);
        Ok(())
    }

    /// Look up `id`, failing with `UndefinedCategory` when absent.
    pub fn get(&self, id: &CategoryId) -> AgentResult<&Category> {
        self.categories
            .get(id)
            .ok_or_else(|| AgentError::UndefinedCategory { id: id.clone() })
    }

    pub fn contains(&self, id: &CategoryId) -> bool {
        self.categories.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CategoryId, &Category)> {
        self.categories.iter()
    }
}

impl<K: Into<CategoryId>> FromIterator<(K, Category)> for CategoryRegistry {
    fn from_iter<I: IntoIterator<Item = (K, Category)>>(iter: I) -> Self {
        Self {
            categories: iter.into_iter().map(|(k, c)| (k.into(), c)).collect(),
        }
    }
}
