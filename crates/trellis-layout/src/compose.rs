//! Composition of container and item directives.

use serde::{Deserialize, Serialize};

use crate::config::{ItemConfig, StackConfig};
use crate::container::{resolve_container, ContainerDirectives};
use crate::error::LayoutError;
use crate::item::{resolve_item, ItemDirectives};

/// Complete directive set for one stack: the container plus its items in
/// placement order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StackLayout {
    /// Container directives
    pub container: ContainerDirectives,
    /// Item directives, same order as the input items
    pub items: Vec<ItemDirectives>,
}

impl StackLayout {
    /// Number of gaps between adjacent items.
    #[must_use]
    pub fn gap_count(&self) -> usize {
        self.items.len().saturating_sub(1)
    }

    /// Total main-axis space taken by gaps.
    #[must_use]
    pub fn total_gap(&self) -> f32 {
        self.container.gap * self.gap_count() as f32
    }

    /// Total main-axis space taken by item margins.
    #[must_use]
    pub fn total_margin(&self) -> f32 {
        self.items.iter().map(ItemDirectives::margins).sum()
    }
}

/// Resolve a stack and its items into a [`StackLayout`].
///
/// Item order is preserved. The first invalid value aborts the whole
/// computation; no partial layout is returned.
pub fn layout(config: &StackConfig, items: &[ItemConfig]) -> Result<StackLayout, LayoutError> {
    let container = resolve_container(config)?;

    let items = items
        .iter()
        .map(|item| resolve_item(item, &container))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(
        direction = ?container.direction,
        justify = ?container.justify,
        gap = container.gap,
        items = items.len(),
        "resolved stack layout"
    );

    Ok(StackLayout { container, items })
}
