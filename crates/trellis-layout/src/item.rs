//! Item-level directive resolution.

use serde::{Deserialize, Serialize};

use crate::config::ItemConfig;
use crate::container::ContainerDirectives;
use crate::error::LayoutError;
use crate::flex::FlexAlign;

/// Weight used by flexible items that do not set one.
pub const DEFAULT_WEIGHT: f32 = 1.0;

/// Layout directives for a single stack child.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ItemDirectives {
    /// Resolved cross-axis alignment
    pub align: FlexAlign,
    /// Base main-axis extent; `None` defers to the content's natural extent
    pub basis: Option<f32>,
    /// Grow factor (0 = never grows)
    pub grow: f32,
    /// Shrink factor (0 = never shrinks)
    pub shrink: f32,
    /// Main-axis space before the item
    pub margin_before: f32,
    /// Main-axis space after the item
    pub margin_after: f32,
}

impl ItemDirectives {
    /// Whether the item's main extent can differ from its base.
    #[must_use]
    pub fn is_flexible(&self) -> bool {
        self.grow > 0.0 || self.shrink > 0.0
    }

    /// Sum of both margins.
    #[must_use]
    pub fn margins(&self) -> f32 {
        self.margin_before + self.margin_after
    }
}

/// Resolve one item's overrides against its container.
///
/// Fails with [`LayoutError::InvalidConfiguration`] when `size`, `weight`,
/// `margin_before` or `margin_after` is negative or not finite.
pub fn resolve_item(
    item: &ItemConfig,
    container: &ContainerDirectives,
) -> Result<ItemDirectives, LayoutError> {
    item.validate()?;

    let weight = item.weight.unwrap_or(DEFAULT_WEIGHT);

    Ok(ItemDirectives {
        align: item.align.map_or(container.align, |a| a.align()),
        basis: item.size,
        grow: if item.grow { weight } else { 0.0 },
        shrink: if item.shrink { weight } else { 0.0 },
        margin_before: item.margin_before.unwrap_or(0.0),
        margin_after: item.margin_after.unwrap_or(0.0),
    })
}
