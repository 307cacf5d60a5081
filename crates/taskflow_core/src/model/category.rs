//! Category domain model.
//!
//! # Responsibility
//! - Define the user-defined grouping record applied to tasks.
//! - Validate display colors and provide creation defaults.
//!
//! # Invariants
//! - `id` is a unique positive integer and never reused.
//! - `color` is always a `#RRGGBB` hex string.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable numeric identifier for categories.
pub type CategoryId = i64;

/// Color assigned to categories created without one.
pub const DEFAULT_CATEGORY_COLOR: &str = "#8B5CF6";
/// Icon assigned to categories created without one.
pub const DEFAULT_CATEGORY_ICON: &str = "Folder";

static HEX_COLOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("valid hex color regex"));

/// Canonical category record.
///
/// Serialized field names follow the mock fixture shape (`Id`, camelCase).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(rename = "Id")]
    pub id: CategoryId,
    pub name: String,
    /// `#RRGGBB` display color.
    pub color: String,
    /// Icon name rendered next to the category.
    pub icon: String,
    /// Display ordering, ascending.
    pub order: i64,
}

impl Category {
    /// Display-only stand-in for tasks whose category no longer exists.
    ///
    /// The id is 0, which no stored category can carry.
    pub fn uncategorized() -> Self {
        Self {
            id: 0,
            name: "Uncategorized".to_string(),
            color: "#6B7280".to_string(),
            icon: DEFAULT_CATEGORY_ICON.to_string(),
            order: 0,
        }
    }
}

/// Validation failure for category drafts and patches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    /// Name is empty or whitespace-only.
    EmptyName,
    /// Color is not a `#RRGGBB` hex string.
    InvalidColor(String),
}

impl Display for CategoryValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "category name must not be empty"),
            Self::InvalidColor(value) => {
                write!(f, "invalid category color `{value}`; expected #RRGGBB")
            }
        }
    }
}

impl Error for CategoryValidationError {}

/// Checks a display color against the `#RRGGBB` contract.
pub fn validate_color(value: &str) -> Result<(), CategoryValidationError> {
    if HEX_COLOR_RE.is_match(value) {
        return Ok(());
    }
    Err(CategoryValidationError::InvalidColor(value.to_string()))
}

/// Request model for creating a category.
///
/// Absent or empty color/icon fall back to the crate defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryDraft {
    pub name: String,
    pub color: Option<String>,
    pub icon: Option<String>,
}

impl CategoryDraft {
    /// Creates a draft carrying only a name; color and icon use defaults.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: None,
            icon: None,
        }
    }

    /// Resolves the effective color, applying the default for blank input.
    pub fn resolved_color(&self) -> String {
        resolve_or_default(self.color.as_deref(), DEFAULT_CATEGORY_COLOR)
    }

    /// Resolves the effective icon, applying the default for blank input.
    pub fn resolved_icon(&self) -> String {
        resolve_or_default(self.icon.as_deref(), DEFAULT_CATEGORY_ICON)
    }

    /// Checks draft-level invariants before persistence.
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }
        validate_color(&self.resolved_color())
    }
}

/// Partial update applied over an existing category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub color: Option<String>,
    pub icon: Option<String>,
    pub order: Option<i64>,
}

impl CategoryPatch {
    /// Checks patch-level invariants before merging.
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(CategoryValidationError::EmptyName);
            }
        }
        if let Some(color) = &self.color {
            validate_color(color)?;
        }
        Ok(())
    }

    /// Merges set fields into `category`, leaving the id untouched.
    pub fn apply(&self, category: &mut Category) {
        if let Some(name) = &self.name {
            category.name = name.clone();
        }
        if let Some(color) = &self.color {
            category.color = color.clone();
        }
        if let Some(icon) = &self.icon {
            category.icon = icon.clone();
        }
        if let Some(order) = self.order {
            category.order = order;
        }
    }
}

fn resolve_or_default(value: Option<&str>, default: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}
