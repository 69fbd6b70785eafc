//! TOML drag scenarios.
//!
//! A scenario pins down a window, a selection, and a drag delta in a small
//! TOML file. The CLI replays scenarios while debugging geometry questions;
//! the snapshot suite replays them to lock in calculator behavior.
//!
//! ```toml
//! name = "single item past one neighbor"
//! delta = 60.0
//! selected = ["a"]
//!
//! [[items]]
//! id = "a"
//! size = 50.0
//! ```
//!
//! Only sizes are written down; starts are derived as a contiguous layout
//! from `origin` (default `0.0`).

use crate::displace::calculate_displacements;
use crate::model::{contiguous_layout, DisplaceError, InvalidItemId, Item, ItemId};
use crate::reorder::committed_order;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors encountered loading or replaying a scenario file.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// Failed to read the scenario file.
    #[error("failed to read scenario: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid scenario TOML.
    #[error("failed to parse scenario: {0}")]
    Toml(#[from] toml::de::Error),

    /// An item id in the file is invalid.
    #[error("invalid item id: {0}")]
    Id(#[from] InvalidItemId),

    /// A selected id does not match any item in the scenario window.
    #[error("selected id '{0}' does not match any item")]
    UnknownSelected(String),

    /// The displacement calculator rejected the scenario's inputs.
    #[error(transparent)]
    Displace(#[from] DisplaceError),
}

/// One item of a scenario window. `start` is derived, only sizes are given.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemSpec {
    /// Stable item id.
    pub id: String,
    /// Pixel extent.
    pub size: f64,
}

/// A drag described as data: window, selection, and delta.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    /// Human-readable scenario name, echoed into the outcome.
    pub name: String,
    /// Pixel offset of the window's first item.
    #[serde(default)]
    pub origin: f64,
    /// Drag delta in pixels.
    pub delta: f64,
    /// Ids of the dragged items.
    #[serde(default)]
    pub selected: Vec<String>,
    /// The window items, in order.
    #[serde(default)]
    pub items: Vec<ItemSpec>,
}

impl Scenario {
    /// Parse a scenario from TOML text.
    ///
    /// # Errors
    ///
    /// [`ScenarioError::Toml`] on malformed input.
    pub fn parse(raw: &str) -> Result<Self, ScenarioError> {
        Ok(toml::from_str(raw)?)
    }

    /// Load a scenario from a TOML file.
    ///
    /// # Errors
    ///
    /// [`ScenarioError::Io`] or [`ScenarioError::Toml`].
    pub fn from_path(path: &Path) -> Result<Self, ScenarioError> {
        let raw = std::fs::read_to_string(path)?;
        Self::parse(&raw)
    }

    /// Materialize the window geometry as a contiguous layout.
    ///
    /// # Errors
    ///
    /// [`ScenarioError::Id`] when an item id is invalid.
    pub fn window(&self) -> Result<Vec<Item>, ScenarioError> {
        let specs = self
            .items
            .iter()
            .map(|spec| Ok((ItemId::new(&spec.id)?, spec.size)))
            .collect::<Result<Vec<_>, ScenarioError>>()?;
        Ok(contiguous_layout(self.origin, specs))
    }

    /// Replay the drag and collect displacements plus the committed order.
    ///
    /// # Errors
    ///
    /// [`ScenarioError::UnknownSelected`] when a selected id is not in the
    /// window, or any error from the displacement calculator.
    pub fn run(&self) -> Result<ScenarioOutcome, ScenarioError> {
        let window = self.window()?;
        let mut selected = Vec::with_capacity(self.selected.len());
        for raw in &self.selected {
            let item = window
                .iter()
                .find(|item| item.id.as_str() == raw)
                .ok_or_else(|| ScenarioError::UnknownSelected(raw.clone()))?;
            selected.push(item.clone());
        }

        debug!(name = %self.name, delta = self.delta, "replaying scenario");
        let displacements = calculate_displacements(&window, &selected, self.delta)?;
        let order = committed_order(&window, &selected, self.delta)?;

        Ok(ScenarioOutcome {
            name: self.name.clone(),
            delta: self.delta,
            displacements: displacements
                .iter()
                .map(|(id, offset)| DisplacedItem {
                    id: id.to_string(),
                    offset,
                })
                .collect(),
            order: order.into_iter().map(|id| id.to_string()).collect(),
        })
    }
}

/// JSON-serializable result of replaying a scenario.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioOutcome {
    /// Scenario name, copied through.
    pub name: String,
    /// The delta that was applied.
    pub delta: f64,
    /// Per-item offsets in window order.
    pub displacements: Vec<DisplacedItem>,
    /// Committed visual order after the drop.
    pub order: Vec<String>,
}

/// One entry of [`ScenarioOutcome::displacements`].
#[derive(Debug, Clone, Serialize)]
pub struct DisplacedItem {
    /// Item id.
    pub id: String,
    /// Pixel offset from the item's resting start.
    pub offset: f64,
}
