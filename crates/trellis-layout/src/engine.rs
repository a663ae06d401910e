//! Reference placement of resolved directives.
//!
//! Hosts normally hand directives to a native flex engine. This module does
//! the same job in plain Rust so directives can be turned into rectangles
//! without one: tests, scene previews and the CLI all use it.

use crate::compose::StackLayout;
use crate::error::{check_length, LayoutError};
use crate::flex::{distribute_flex, FlexAlign, FlexJustify};
use crate::geometry::{Rect, Size};

/// Place every item of `layout` inside a container of size `container`.
///
/// `natural` holds each item's content size, in item order. Returned
/// rectangles are relative to the container's top-left corner.
///
/// Fails with [`LayoutError::InvalidConfiguration`] when a container or
/// natural dimension is negative or not finite.
pub fn arrange(
    layout: &StackLayout,
    container: Size,
    natural: &[Size],
) -> Result<Vec<Rect>, LayoutError> {
    let items = &layout.items;
    if natural.len() != items.len() {
        return Err(LayoutError::ItemCountMismatch {
            items: items.len(),
            sizes: natural.len(),
        });
    }
    check_length("container.width", container.width)?;
    check_length("container.height", container.height)?;
    for size in natural {
        check_length("natural.width", size.width)?;
        check_length("natural.height", size.height)?;
    }
    if items.is_empty() {
        return Ok(Vec::new());
    }

    let direction = layout.container.direction;
    let main_size = container.main(direction);
    let cross_size = container.cross(direction);
    let gap = layout.container.gap;

    // Phase 1: main-axis extents
    let bases: Vec<f32> = items
        .iter()
        .zip(natural)
        .map(|(item, size)| item.basis.unwrap_or_else(|| size.main(direction)))
        .collect();
    let reserved = layout.total_gap() + layout.total_margin();
    let extents = distribute_flex(items, &bases, main_size - reserved);

    // Phase 2: positions
    let leftover = main_size - reserved - extents.iter().sum::<f32>();
    let (mut cursor, between) = match layout.container.justify {
        FlexJustify::Start => (0.0, 0.0),
        FlexJustify::Center => (leftover / 2.0, 0.0),
        FlexJustify::End => (leftover, 0.0),
        FlexJustify::SpaceBetween if items.len() > 1 && leftover > 0.0 => {
            (0.0, leftover / (items.len() - 1) as f32)
        }
        FlexJustify::SpaceBetween => (0.0, 0.0),
    };

    tracing::trace!(main_size, cross_size, leftover, "arranging stack items");

    let mut rects = Vec::with_capacity(items.len());
    for ((item, &extent), size) in items.iter().zip(&extents).zip(natural) {
        cursor += item.margin_before;

        let (cross_offset, cross_extent) = match item.align {
            FlexAlign::Stretch => (0.0, cross_size),
            align => {
                let extent = size.cross(direction);
                ((cross_size - extent) * align.offset_ratio(), extent)
            }
        };

        rects.push(Rect::from_axes(
            direction,
            cursor,
            cross_offset,
            extent,
            cross_extent,
        ));
        cursor += extent + item.margin_after + gap + between;
    }

    Ok(rects)
}

impl StackLayout {
    /// Place this layout's items; see [`arrange`].
    pub fn arrange(&self, container: Size, natural: &[Size]) -> Result<Vec<Rect>, LayoutError> {
        arrange(self, container, natural)
    }
}
