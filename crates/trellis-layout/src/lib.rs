#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]
//! Stack layout model for Trellis.
//!
//! Translates declarative stack and item configuration into flexbox-style
//! layout directives:
//!
//! - **Container resolution**: [`StackConfig`] → [`ContainerDirectives`]
//! - **Item resolution**: [`ItemConfig`] + container → [`ItemDirectives`]
//! - **Composition**: [`layout`] produces a [`StackLayout`] with items in
//!   input order
//!
//! Directives can be rendered to CSS declarations (`to_css`) or placed
//! into rectangles with the reference [`arrange`] engine.
//!
//! ```
//! use trellis_layout::{layout, Alignment, ItemConfig, Size, StackConfig};
//!
//! let config = StackConfig::new().align(Alignment::Stretch).spacing(16.0);
//! let items = [ItemConfig::new().size(120.0), ItemConfig::spacer()];
//! let stack = layout(&config, &items)?;
//! assert_eq!(stack.gap_count(), 1);
//!
//! let rects = stack.arrange(Size::new(720.0, 60.0), &[Size::ZERO; 2])?;
//! assert_eq!(rects[1].x, 136.0);
//! # Ok::<(), trellis_layout::LayoutError>(())
//! ```

mod compose;
mod config;
mod container;
mod css;
mod engine;
mod error;
mod flex;
mod geometry;
mod item;

pub use compose::{layout, StackLayout};
pub use config::{Alignment, Axis, ItemConfig, StackConfig};
pub use container::{resolve_container, ContainerDirectives};
pub use engine::arrange;
pub use error::LayoutError;
pub use flex::{FlexAlign, FlexDirection, FlexJustify};
pub use geometry::{Rect, Size};
pub use item::{resolve_item, ItemDirectives, DEFAULT_WEIGHT};
