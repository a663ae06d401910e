//! Flexbox directive types and main-axis space distribution.

use serde::{Deserialize, Serialize};

use crate::item::ItemDirectives;

/// Main axis of a flex container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlexDirection {
    /// Horizontal (left to right)
    #[default]
    Row,
    /// Vertical (top to bottom)
    Column,
}

/// Main axis distribution for flex layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlexJustify {
    /// Pack items at the start
    #[default]
    Start,
    /// Center the packed group
    Center,
    /// Pack items at the end
    End,
    /// Distribute leftover space evenly between items
    SpaceBetween,
}

/// Cross axis alignment for flex layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlexAlign {
    /// Align to the start
    #[default]
    Start,
    /// Center items
    Center,
    /// Align to the end
    End,
    /// Stretch to fill
    Stretch,
}

impl FlexAlign {
    /// Offset ratio of the free cross space placed before the item.
    ///
    /// `Stretch` returns 0.0; stretched items have no free cross space.
    #[must_use]
    pub const fn offset_ratio(&self) -> f32 {
        match self {
            Self::Start | Self::Stretch => 0.0,
            Self::Center => 0.5,
            Self::End => 1.0,
        }
    }
}

/// Distribute available main-axis space among items.
///
/// `bases` holds each item's base extent. Surplus is shared by grow factor,
/// deficit by shrink factor; items with a zero factor keep their base.
/// Shrinking never goes below zero; the deficit an item cannot absorb
/// passes to the other shrinkable items.
#[must_use]
pub(crate) fn distribute_flex(items: &[ItemDirectives], bases: &[f32], available: f32) -> Vec<f32> {
    if items.is_empty() {
        return Vec::new();
    }

    let total_base: f32 = bases.iter().sum();
    let remaining = available - total_base;

    if remaining.abs() < 0.001 {
        return bases.to_vec();
    }

    if remaining > 0.0 {
        let total_grow: f32 = items.iter().map(|i| i.grow).sum();

        if total_grow > 0.0 {
            return bases
                .iter()
                .zip(items.iter())
                .map(|(&base, item)| base + (remaining * item.grow / total_grow))
                .collect();
        }
    } else if items.iter().any(|i| i.shrink > 0.0) {
        return shrink_flex(items, bases, -remaining);
    }

    bases.to_vec()
}

/// Share `deficit` by shrink factor. Items that would go below zero are
/// frozen at zero and the rest of the deficit is shared again among the
/// items still free to shrink.
fn shrink_flex(items: &[ItemDirectives], bases: &[f32], mut deficit: f32) -> Vec<f32> {
    let mut extents = bases.to_vec();
    let mut frozen: Vec<bool> = items.iter().map(|i| i.shrink <= 0.0).collect();

    loop {
        let total_shrink: f32 = items
            .iter()
            .zip(&frozen)
            .filter(|(_, is_frozen)| !**is_frozen)
            .map(|(i, _)| i.shrink)
            .sum();
        if total_shrink <= 0.0 || deficit < 0.001 {
            break;
        }

        let share = deficit / total_shrink;
        let mut newly_frozen = false;
        for (index, item) in items.iter().enumerate() {
            if !frozen[index] && extents[index] < share * item.shrink {
                deficit -= extents[index];
                extents[index] = 0.0;
                frozen[index] = true;
                newly_frozen = true;
            }
        }

        if !newly_frozen {
            for (index, item) in items.iter().enumerate() {
                if !frozen[index] {
                    extents[index] -= share * item.shrink;
                }
            }
            break;
        }
    }

    extents
}
