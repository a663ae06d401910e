//! Stack components: `Stack`, `HStack`, `VStack`, `StackItem` and `Spacer`.

use serde::{Deserialize, Serialize};
use std::ops::Deref;
use trellis_layout::{
    layout, Alignment, Axis, ItemConfig, LayoutError, Rect, Size, StackConfig, StackLayout,
};

/// A child of a stack: layout overrides plus optional content.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StackItem {
    /// Layout overrides
    config: ItemConfig,
    /// Content label
    content: Option<String>,
    /// Test ID
    test_id_value: Option<String>,
}

impl StackItem {
    /// Create an item that inherits all layout from its stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an item with a content label.
    #[must_use]
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    /// Create an item from an existing configuration.
    #[must_use]
    pub fn from_config(config: ItemConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Replace all layout overrides.
    #[must_use]
    pub const fn with_config(mut self, config: ItemConfig) -> Self {
        self.config = config;
        self
    }

    /// Override cross-axis alignment.
    #[must_use]
    pub const fn align(mut self, align: Alignment) -> Self {
        self.config = self.config.align(align);
        self
    }

    /// Fix the base main-axis extent.
    #[must_use]
    pub const fn size(mut self, size: f32) -> Self {
        self.config = self.config.size(size);
        self
    }

    /// Set the distribution weight.
    #[must_use]
    pub const fn weight(mut self, weight: f32) -> Self {
        self.config = self.config.weight(weight);
        self
    }

    /// Allow the item to grow.
    #[must_use]
    pub const fn grow(mut self) -> Self {
        self.config = self.config.grow(true);
        self
    }

    /// Allow the item to shrink.
    #[must_use]
    pub const fn shrink(mut self) -> Self {
        self.config = self.config.shrink(true);
        self
    }

    /// Set space before the item.
    #[must_use]
    pub const fn margin_before(mut self, margin: f32) -> Self {
        self.config = self.config.margin_before(margin);
        self
    }

    /// Set space after the item.
    #[must_use]
    pub const fn margin_after(mut self, margin: f32) -> Self {
        self.config = self.config.margin_after(margin);
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Get layout configuration.
    #[must_use]
    pub const fn config(&self) -> &ItemConfig {
        &self.config
    }

    /// Get content label.
    #[must_use]
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Get test ID.
    #[must_use]
    pub fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }
}

/// Invisible flexible item that pushes its siblings apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Spacer;

impl Spacer {
    /// Create a spacer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl From<Spacer> for StackItem {
    fn from(_: Spacer) -> Self {
        Self::from_config(ItemConfig::spacer())
    }
}

/// CSS declarations for a stack and its children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackCss {
    /// Declarations for the container element
    pub container: String,
    /// Declarations for each child, in order
    pub items: Vec<String>,
}

/// Flex container laying out its children along one axis.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Stack {
    /// Container configuration
    config: StackConfig,
    /// Children in placement order
    children: Vec<StackItem>,
    /// Test ID
    test_id_value: Option<String>,
}

impl Stack {
    /// Create an empty horizontal stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stack from an existing configuration.
    #[must_use]
    pub fn from_config(config: StackConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Set direction.
    #[must_use]
    pub const fn direction(mut self, direction: Axis) -> Self {
        self.config = self.config.direction(direction);
        self
    }

    /// Set main-axis distribution.
    #[must_use]
    pub const fn justify(mut self, justify: Alignment) -> Self {
        self.config = self.config.justify(justify);
        self
    }

    /// Set cross-axis alignment.
    #[must_use]
    pub const fn align(mut self, align: Alignment) -> Self {
        self.config = self.config.align(align);
        self
    }

    /// Set gap between children.
    #[must_use]
    pub const fn spacing(mut self, spacing: f32) -> Self {
        self.config = self.config.spacing(spacing);
        self
    }

    /// Add a child.
    #[must_use]
    pub fn child(mut self, item: impl Into<StackItem>) -> Self {
        self.children.push(item.into());
        self
    }

    /// Add multiple children.
    #[must_use]
    pub fn children(mut self, items: impl IntoIterator<Item = StackItem>) -> Self {
        self.children.extend(items);
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Get container configuration.
    #[must_use]
    pub const fn config(&self) -> &StackConfig {
        &self.config
    }

    /// Get children.
    #[must_use]
    pub fn items(&self) -> &[StackItem] {
        &self.children
    }

    /// Get test ID.
    #[must_use]
    pub fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    /// Item configurations in order.
    #[must_use]
    pub fn item_configs(&self) -> Vec<ItemConfig> {
        self.children.iter().map(|c| c.config).collect()
    }

    /// Resolve layout directives for this stack.
    pub fn layout(&self) -> Result<StackLayout, LayoutError> {
        layout(&self.config, &self.item_configs())
    }

    /// Place children inside `container` given their natural sizes.
    pub fn arrange(&self, container: Size, natural: &[Size]) -> Result<Vec<Rect>, LayoutError> {
        let resolved = self.layout()?;
        let rects = resolved.arrange(container, natural)?;
        tracing::trace!(
            test_id = self.test_id(),
            children = rects.len(),
            "arranged stack"
        );
        Ok(rects)
    }

    /// CSS declarations for the container and each child.
    pub fn to_css(&self) -> Result<StackCss, LayoutError> {
        let resolved = self.layout()?;
        Ok(StackCss {
            container: resolved.container.to_css(),
            items: resolved.item_css(),
        })
    }
}

macro_rules! fixed_direction_stack {
    ($(#[$meta:meta])* $name:ident, $axis:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name(Stack);

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $name {
            /// Create an empty stack.
            #[must_use]
            pub fn new() -> Self {
                Self(Stack::new().direction($axis))
            }

            /// Set main-axis distribution.
            #[must_use]
            pub fn justify(self, justify: Alignment) -> Self {
                Self(self.0.justify(justify))
            }

            /// Set cross-axis alignment.
            #[must_use]
            pub fn align(self, align: Alignment) -> Self {
                Self(self.0.align(align))
            }

            /// Set gap between children.
            #[must_use]
            pub fn spacing(self, spacing: f32) -> Self {
                Self(self.0.spacing(spacing))
            }

            /// Add a child.
            #[must_use]
            pub fn child(self, item: impl Into<StackItem>) -> Self {
                Self(self.0.child(item))
            }

            /// Add several children.
            #[must_use]
            pub fn children(self, items: impl IntoIterator<Item = StackItem>) -> Self {
                Self(self.0.children(items))
            }

            /// Set test ID.
            #[must_use]
            pub fn with_test_id(self, id: impl Into<String>) -> Self {
                Self(self.0.with_test_id(id))
            }

            /// Unwrap into a plain [`Stack`].
            #[must_use]
            pub fn into_stack(self) -> Stack {
                self.0
            }
        }

        impl Deref for $name {
            type Target = Stack;

            fn deref(&self) -> &Stack {
                &self.0
            }
        }

        impl From<$name> for Stack {
            fn from(stack: $name) -> Self {
                stack.0
            }
        }
    };
}

fixed_direction_stack!(
    /// Stack whose children run left to right.
    HStack,
    Axis::Horizontal
);

fixed_direction_stack!(
    /// Stack whose children run top to bottom.
    VStack,
    Axis::Vertical
);
