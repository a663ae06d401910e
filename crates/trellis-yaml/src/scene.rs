//! Stack scenes: a container, a stack configuration and its items.

use serde::{Deserialize, Serialize};
use trellis_layout::{ItemConfig, LayoutError, Rect, Size, StackConfig, StackLayout};
use trellis_widgets::{Spacer, Stack, StackCss, StackItem};

use crate::error::ParseError;

/// Kind of a scene item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// Regular item with optional content
    #[default]
    Item,
    /// Invisible flexible spacer
    Spacer,
}

/// Size of the box a scene's stack is laid out in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerSize {
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl From<ContainerSize> for Size {
    fn from(c: ContainerSize) -> Self {
        Self::new(c.width, c.height)
    }
}

/// One child of a scene's stack.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SceneItem {
    /// Item or spacer
    #[serde(default)]
    pub kind: ItemKind,
    /// Content label
    #[serde(default)]
    pub content: Option<String>,
    /// Natural content size `[width, height]`
    #[serde(default)]
    pub natural: Option<[f32; 2]>,
    /// Layout overrides
    #[serde(flatten)]
    pub layout: ItemConfig,
}

impl SceneItem {
    /// Natural content size; spacers and items without one are empty.
    #[must_use]
    pub fn natural_size(&self) -> Size {
        match (self.kind, self.natural) {
            (ItemKind::Item, Some(natural)) => Size::from(natural),
            _ => Size::ZERO,
        }
    }

    /// Build the corresponding stack child.
    #[must_use]
    pub fn to_stack_item(&self) -> StackItem {
        match self.kind {
            ItemKind::Spacer => Spacer.into(),
            ItemKind::Item => match &self.content {
                Some(content) => StackItem::with_content(content.clone()).with_config(self.layout),
                None => StackItem::from_config(self.layout),
            },
        }
    }
}

/// A stack laid out inside a fixed-size container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Unique scene ID
    pub id: String,
    /// Human-readable title
    #[serde(default)]
    pub title: Option<String>,
    /// Container box
    pub container: ContainerSize,
    /// Stack configuration
    #[serde(default)]
    pub stack: StackConfig,
    /// Children in placement order
    #[serde(default)]
    pub items: Vec<SceneItem>,
}

/// Evaluated scene: directives, rectangles and CSS.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneReport {
    /// Scene ID
    pub id: String,
    /// Resolved directives
    pub layout: StackLayout,
    /// Placed item rectangles
    pub rects: Vec<Rect>,
    /// CSS declarations
    pub css: StackCss,
}

impl Scene {
    /// Build the scene's stack component.
    #[must_use]
    pub fn to_stack(&self) -> Stack {
        Stack::from_config(self.stack).children(self.items.iter().map(SceneItem::to_stack_item))
    }

    /// Container size.
    #[must_use]
    pub fn container_size(&self) -> Size {
        self.container.into()
    }

    /// Natural sizes of all items, in order.
    #[must_use]
    pub fn natural_sizes(&self) -> Vec<Size> {
        self.items.iter().map(SceneItem::natural_size).collect()
    }

    /// Resolve layout directives.
    pub fn layout(&self) -> Result<StackLayout, LayoutError> {
        self.to_stack().layout()
    }

    /// Place the items inside the container.
    pub fn arrange(&self) -> Result<Vec<Rect>, LayoutError> {
        self.layout()?
            .arrange(self.container_size(), &self.natural_sizes())
    }

    /// Evaluate the scene into a report.
    pub fn evaluate(&self) -> Result<SceneReport, ParseError> {
        let wrap = |source| ParseError::Layout {
            scene: self.id.clone(),
            source,
        };
        let stack = self.to_stack();
        let layout = stack.layout().map_err(wrap)?;
        let rects = layout
            .arrange(self.container_size(), &self.natural_sizes())
            .map_err(wrap)?;
        let css = stack.to_css().map_err(wrap)?;

        Ok(SceneReport {
            id: self.id.clone(),
            layout,
            rects,
            css,
        })
    }

    /// Check the container, natural sizes and layout configuration.
    pub fn validate(&self) -> Result<(), ParseError> {
        check_dimension(&format!("{}.container.width", self.id), self.container.width)?;
        check_dimension(&format!("{}.container.height", self.id), self.container.height)?;

        for (index, item) in self.items.iter().enumerate() {
            if let Some([width, height]) = item.natural {
                check_dimension(&format!("{}.items[{index}].natural", self.id), width)?;
                check_dimension(&format!("{}.items[{index}].natural", self.id), height)?;
            }
            if item.kind == ItemKind::Spacer && item.layout != ItemConfig::default() {
                tracing::warn!(
                    scene = %self.id,
                    index,
                    "layout overrides on a spacer are ignored"
                );
            }
        }

        self.layout().map(|_| ()).map_err(|source| ParseError::Layout {
            scene: self.id.clone(),
            source,
        })
    }
}

fn check_dimension(field: &str, value: f32) -> Result<(), ParseError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ParseError::InvalidValue {
            field: field.to_string(),
            message: format!("must be a finite non-negative number (got {value})"),
        })
    }
}
