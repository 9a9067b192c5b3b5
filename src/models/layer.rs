//! Keyboard layer definitions.

use crate::models::Key;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Which edge of the screen a panel is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelSide {
    /// Panel fixed to the left screen edge
    Left,
    /// Panel fixed to the right screen edge
    Right,
}

impl PanelSide {
    /// Both sides, in left-to-right order.
    pub const ALL: [Self; 2] = [Self::Left, Self::Right];

    /// Lowercase name used in CLI arguments and JSON output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// A keyboard layer: a named pair of row sets, one per panel side.
///
/// # Validation
///
/// - Name must be non-empty
/// - Each side must define at least one row
/// - Every key width must be strictly positive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyboardLayer {
    /// Unique layer identifier (e.g., "default", "shift")
    pub name: String,
    /// Ordered rows of keys for the left panel
    pub left_rows: Vec<Vec<Key>>,
    /// Ordered rows of keys for the right panel
    pub right_rows: Vec<Vec<Key>>,
}

impl KeyboardLayer {
    /// Creates a new layer after validating its invariants.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty, a side has no rows, or any
    /// key carries a non-positive width weight.
    pub fn new(
        name: impl Into<String>,
        left_rows: Vec<Vec<Key>>,
        right_rows: Vec<Vec<Key>>,
    ) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            anyhow::bail!("Layer name cannot be empty");
        }
        if left_rows.is_empty() || right_rows.is_empty() {
            anyhow::bail!("Layer '{}' must define at least one row per side", name);
        }
        for row in left_rows.iter().chain(right_rows.iter()) {
            if let Some(key) = row.iter().find(|k| k.width <= 0.0) {
                anyhow::bail!(
                    "Key '{}' on layer '{}' has non-positive width {}",
                    key.label,
                    name,
                    key.width
                );
            }
        }

        Ok(Self {
            name,
            left_rows,
            right_rows,
        })
    }

    /// Gets the row set for the given panel side.
    #[must_use]
    pub fn rows(&self, side: PanelSide) -> &[Vec<Key>] {
        match side {
            PanelSide::Left => &self.left_rows,
            PanelSide::Right => &self.right_rows,
        }
    }

    /// Total number of keys on one side.
    #[must_use]
    pub fn key_count(&self, side: PanelSide) -> usize {
        self.rows(side).iter().map(Vec::len).sum()
    }
}
