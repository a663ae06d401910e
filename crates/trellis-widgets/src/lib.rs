//! Stack and radio components for Trellis.
//!
//! - Layout: [`Stack`], [`HStack`], [`VStack`], [`StackItem`], [`Spacer`]
//! - Input: `LegacyRadio` (deprecated)
//!
//! Components are plain builders over `trellis-layout` configuration.
//! They resolve to layout directives, CSS declarations or rectangles; they
//! do not paint.

#[cfg(feature = "input-widgets")]
pub mod radio;
#[cfg(feature = "layout-widgets")]
pub mod stack;

#[cfg(feature = "input-widgets")]
#[allow(deprecated)]
pub use radio::{
    is_checked, LegacyRadio, PointerEvent, RadioClicked, RadioHandleState, RADIO_HANDLE_TEST_ID,
    RADIO_TEST_ID,
};
#[cfg(feature = "layout-widgets")]
pub use stack::{HStack, Spacer, Stack, StackCss, StackItem, VStack};

pub use trellis_layout::{Alignment, Axis, LayoutError, Rect, Size};
