//! Container-level directive resolution.

use serde::{Deserialize, Serialize};

use crate::config::StackConfig;
use crate::error::LayoutError;
use crate::flex::{FlexAlign, FlexDirection, FlexJustify};

/// Layout directives applied to a stack container.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ContainerDirectives {
    /// Main axis
    pub direction: FlexDirection,
    /// Main-axis distribution
    pub justify: FlexJustify,
    /// Default cross-axis alignment of items
    pub align: FlexAlign,
    /// Gap between adjacent items
    pub gap: f32,
}

/// Resolve a stack configuration into container directives.
///
/// Fails with [`LayoutError::InvalidConfiguration`] when `spacing` is
/// negative or not finite.
pub fn resolve_container(config: &StackConfig) -> Result<ContainerDirectives, LayoutError> {
    config.validate()?;

    Ok(ContainerDirectives {
        direction: config.direction.flex_direction(),
        justify: config.justify.justify(),
        align: config.align.align(),
        gap: config.spacing,
    })
}
