//! Declarative stack and item configuration.

use serde::{Deserialize, Serialize};

use crate::error::{check_length, check_optional, LayoutError};
use crate::flex::{FlexAlign, FlexDirection, FlexJustify};

/// Direction a stack lays its children out in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Children placed left to right
    #[default]
    Horizontal,
    /// Children placed top to bottom
    Vertical,
}

impl Axis {
    /// Flex direction for this axis.
    #[must_use]
    pub const fn flex_direction(&self) -> FlexDirection {
        match self {
            Self::Horizontal => FlexDirection::Row,
            Self::Vertical => FlexDirection::Column,
        }
    }
}

/// Alignment along either axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Leading edge
    #[default]
    Start,
    /// Centered
    Center,
    /// Trailing edge
    End,
    /// Fill the axis
    Stretch,
}

impl Alignment {
    /// Main-axis distribution for `justify`.
    ///
    /// `Stretch` spreads leftover space between items; with fewer than two
    /// items or no leftover space it is indistinguishable from `Start`.
    #[must_use]
    pub const fn justify(&self) -> FlexJustify {
        match self {
            Self::Start => FlexJustify::Start,
            Self::Center => FlexJustify::Center,
            Self::End => FlexJustify::End,
            Self::Stretch => FlexJustify::SpaceBetween,
        }
    }

    /// Cross-axis alignment for `align`.
    #[must_use]
    pub const fn align(&self) -> FlexAlign {
        match self {
            Self::Start => FlexAlign::Start,
            Self::Center => FlexAlign::Center,
            Self::End => FlexAlign::End,
            Self::Stretch => FlexAlign::Stretch,
        }
    }
}

/// Container-level configuration of a stack.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StackConfig {
    /// Main axis
    pub direction: Axis,
    /// Main-axis distribution
    pub justify: Alignment,
    /// Cross-axis alignment
    pub align: Alignment,
    /// Uniform gap between adjacent items
    pub spacing: f32,
}

impl StackConfig {
    /// Create a configuration with all defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the direction.
    #[must_use]
    pub const fn direction(mut self, direction: Axis) -> Self {
        self.direction = direction;
        self
    }

    /// Set main-axis distribution.
    #[must_use]
    pub const fn justify(mut self, justify: Alignment) -> Self {
        self.justify = justify;
        self
    }

    /// Set cross-axis alignment.
    #[must_use]
    pub const fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Set the gap between items.
    #[must_use]
    pub const fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the gap between items, rejecting negative or non-finite values.
    pub fn try_spacing(self, spacing: f32) -> Result<Self, LayoutError> {
        check_length("spacing", spacing).map(|s| self.spacing(s))
    }

    /// Check that numeric fields are finite and non-negative.
    pub fn validate(&self) -> Result<(), LayoutError> {
        check_length("spacing", self.spacing)?;
        Ok(())
    }
}

/// Per-item overrides. Absent fields inherit from the container.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemConfig {
    /// Cross-axis alignment override
    pub align: Option<Alignment>,
    /// Fixed base main-axis extent
    pub size: Option<f32>,
    /// Share of distributed space when growing or shrinking
    pub weight: Option<f32>,
    /// May expand into surplus main-axis space
    pub grow: bool,
    /// May contract under main-axis pressure
    pub shrink: bool,
    /// Extra space before the item
    #[serde(alias = "marginBefore")]
    pub margin_before: Option<f32>,
    /// Extra space after the item
    #[serde(alias = "marginAfter")]
    pub margin_after: Option<f32>,
}

impl ItemConfig {
    /// Create an item that inherits everything from its container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration of a spacer: grows and shrinks with weight 1.
    #[must_use]
    pub const fn spacer() -> Self {
        Self {
            align: None,
            size: None,
            weight: Some(1.0),
            grow: true,
            shrink: true,
            margin_before: None,
            margin_after: None,
        }
    }

    /// Override cross-axis alignment.
    #[must_use]
    pub const fn align(mut self, align: Alignment) -> Self {
        self.align = Some(align);
        self
    }

    /// Fix the base main-axis extent.
    #[must_use]
    pub const fn size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the distribution weight.
    #[must_use]
    pub const fn weight(mut self, weight: f32) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Allow or forbid growth.
    #[must_use]
    pub const fn grow(mut self, grow: bool) -> Self {
        self.grow = grow;
        self
    }

    /// Allow or forbid shrinking.
    #[must_use]
    pub const fn shrink(mut self, shrink: bool) -> Self {
        self.shrink = shrink;
        self
    }

    /// Set space inserted before the item.
    #[must_use]
    pub const fn margin_before(mut self, margin: f32) -> Self {
        self.margin_before = Some(margin);
        self
    }

    /// Set space inserted after the item.
    #[must_use]
    pub const fn margin_after(mut self, margin: f32) -> Self {
        self.margin_after = Some(margin);
        self
    }

    /// Validating form of [`size`](Self::size).
    pub fn try_size(self, size: f32) -> Result<Self, LayoutError> {
        check_length("size", size).map(|v| self.size(v))
    }

    /// Validating form of [`weight`](Self::weight).
    pub fn try_weight(self, weight: f32) -> Result<Self, LayoutError> {
        check_length("weight", weight).map(|v| self.weight(v))
    }

    /// Validating form of [`margin_before`](Self::margin_before).
    pub fn try_margin_before(self, margin: f32) -> Result<Self, LayoutError> {
        check_length("margin_before", margin).map(|v| self.margin_before(v))
    }

    /// Validating form of [`margin_after`](Self::margin_after).
    pub fn try_margin_after(self, margin: f32) -> Result<Self, LayoutError> {
        check_length("margin_after", margin).map(|v| self.margin_after(v))
    }

    /// Whether the item takes part in main-axis distribution.
    #[must_use]
    pub const fn is_flexible(&self) -> bool {
        self.grow || self.shrink
    }

    /// Check that numeric fields are finite and non-negative.
    pub fn validate(&self) -> Result<(), LayoutError> {
        check_optional("size", self.size)?;
        check_optional("weight", self.weight)?;
        check_optional("margin_before", self.margin_before)?;
        check_optional("margin_after", self.margin_after)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Axis / Alignment
    // =========================================================================

    #[test]
    fn test_axis_default_horizontal() {
        assert_eq!(Axis::default(), Axis::Horizontal);
    }

    #[test]
    fn test_axis_flex_direction() {
        assert_eq!(Axis::Horizontal.flex_direction(), FlexDirection::Row);
        assert_eq!(Axis::Vertical.flex_direction(), FlexDirection::Column);
    }

    #[test]
    fn test_alignment_default_start() {
        assert_eq!(Alignment::default(), Alignment::Start);
    }

    #[test]
    fn test_alignment_justify_mapping() {
        assert_eq!(Alignment::Start.justify(), FlexJustify::Start);
        assert_eq!(Alignment::Center.justify(), FlexJustify::Center);
        assert_eq!(Alignment::End.justify(), FlexJustify::End);
        assert_eq!(Alignment::Stretch.justify(), FlexJustify::SpaceBetween);
    }

    #[test]
    fn test_alignment_align_mapping() {
        assert_eq!(Alignment::Start.align(), FlexAlign::Start);
        assert_eq!(Alignment::Center.align(), FlexAlign::Center);
        assert_eq!(Alignment::End.align(), FlexAlign::End);
        assert_eq!(Alignment::Stretch.align(), FlexAlign::Stretch);
    }

    #[test]
    fn test_alignment_serde_lowercase() {
        let json = serde_json::to_string(&Alignment::Stretch).unwrap();
        assert_eq!(json, "\"stretch\"");
        let parsed: Axis = serde_json::from_str("\"vertical\"").unwrap();
        assert_eq!(parsed, Axis::Vertical);
    }

    // =========================================================================
    // StackConfig
    // =========================================================================

    #[test]
    fn test_stack_config_defaults() {
        let config = StackConfig::new();
        assert_eq!(config.direction, Axis::Horizontal);
        assert_eq!(config.justify, Alignment::Start);
        assert_eq!(config.align, Alignment::Start);
        assert_eq!(config.spacing, 0.0);
    }

    #[test]
    fn test_stack_config_builder() {
        let config = StackConfig::new()
            .direction(Axis::Vertical)
            .justify(Alignment::Center)
            .align(Alignment::Stretch)
            .spacing(16.0);
        assert_eq!(config.direction, Axis::Vertical);
        assert_eq!(config.justify, Alignment::Center);
        assert_eq!(config.align, Alignment::Stretch);
        assert_eq!(config.spacing, 16.0);
    }

    #[test]
    fn test_stack_config_negative_spacing_rejected() {
        let err = StackConfig::new().spacing(-1.0).validate().unwrap_err();
        assert!(err.is_invalid_configuration());
    }

    #[test]
    fn test_stack_config_try_spacing() {
        let config = StackConfig::new().try_spacing(8.0).unwrap();
        assert_eq!(config.spacing, 8.0);
        assert_eq!(
            StackConfig::new().try_spacing(-2.0),
            Err(LayoutError::InvalidConfiguration {
                field: "spacing",
                value: -2.0,
            })
        );
        assert!(StackConfig::new().try_spacing(f32::INFINITY).is_err());
    }

    #[test]
    fn test_stack_config_deserialize_partial() {
        let config: StackConfig = serde_json::from_str(r#"{"align":"center"}"#).unwrap();
        assert_eq!(config.align, Alignment::Center);
        assert_eq!(config.direction, Axis::Horizontal);
        assert_eq!(config.spacing, 0.0);
    }

    // =========================================================================
    // ItemConfig
    // =========================================================================

    #[test]
    fn test_item_config_default_inherits() {
        let item = ItemConfig::new();
        assert_eq!(item.align, None);
        assert_eq!(item.size, None);
        assert_eq!(item.weight, None);
        assert!(!item.grow);
        assert!(!item.shrink);
        assert!(!item.is_flexible());
    }

    #[test]
    fn test_item_config_spacer() {
        let spacer = ItemConfig::spacer();
        assert_eq!(
            spacer,
            ItemConfig::new().grow(true).shrink(true).weight(1.0)
        );
        assert!(spacer.is_flexible());
    }

    #[test]
    fn test_item_config_builder() {
        let item = ItemConfig::new()
            .align(Alignment::End)
            .size(120.0)
            .margin_before(8.0)
            .margin_after(4.0);
        assert_eq!(item.align, Some(Alignment::End));
        assert_eq!(item.size, Some(120.0));
        assert_eq!(item.margin_before, Some(8.0));
        assert_eq!(item.margin_after, Some(4.0));
    }

    #[test]
    fn test_item_config_try_builders() {
        let item = ItemConfig::new()
            .try_size(120.0)
            .and_then(|i| i.try_weight(2.0))
            .and_then(|i| i.try_margin_before(8.0))
            .and_then(|i| i.try_margin_after(0.0))
            .unwrap();
        assert_eq!(item.size, Some(120.0));
        assert_eq!(item.weight, Some(2.0));
        assert_eq!(item.margin_before, Some(8.0));
        assert_eq!(item.margin_after, Some(0.0));
    }

    #[test]
    fn test_item_config_try_builders_reject_at_call_site() {
        let fields = [
            ItemConfig::new().try_size(-1.0),
            ItemConfig::new().try_weight(f32::NAN),
            ItemConfig::new().try_margin_before(-0.5),
            ItemConfig::new().try_margin_after(-3.0),
        ];
        let names: Vec<&str> = fields
            .iter()
            .map(|r| match r {
                Err(LayoutError::InvalidConfiguration { field, .. }) => *field,
                other => panic!("expected rejection, got {other:?}"),
            })
            .collect();
        assert_eq!(names, vec!["size", "weight", "margin_before", "margin_after"]);
    }

    #[test]
    fn test_item_config_validate_rejects_each_field() {
        assert!(ItemConfig::new().size(-1.0).validate().is_err());
        assert!(ItemConfig::new().weight(-1.0).validate().is_err());
        assert!(ItemConfig::new().margin_before(-1.0).validate().is_err());
        assert!(ItemConfig::new().margin_after(-1.0).validate().is_err());
        assert!(ItemConfig::new().size(0.0).validate().is_ok());
    }

    #[test]
    fn test_item_config_camel_case_margins() {
        let item: ItemConfig =
            serde_json::from_str(r#"{"marginBefore":40,"grow":true}"#).unwrap();
        assert_eq!(item.margin_before, Some(40.0));
        assert!(item.grow);
    }
}
