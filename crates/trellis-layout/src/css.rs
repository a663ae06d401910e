//! CSS declarations for resolved directives.

use std::fmt::Write as _;

use crate::compose::StackLayout;
use crate::container::ContainerDirectives;
use crate::flex::{FlexAlign, FlexDirection, FlexJustify};
use crate::item::ItemDirectives;

impl FlexDirection {
    /// CSS `flex-direction` value.
    #[must_use]
    pub const fn as_css(&self) -> &'static str {
        match self {
            Self::Row => "row",
            Self::Column => "column",
        }
    }

    const fn margin_properties(self) -> (&'static str, &'static str) {
        match self {
            Self::Row => ("margin-left", "margin-right"),
            Self::Column => ("margin-top", "margin-bottom"),
        }
    }
}

impl FlexJustify {
    /// CSS `justify-content` value.
    #[must_use]
    pub const fn as_css(&self) -> &'static str {
        match self {
            Self::Start => "flex-start",
            Self::Center => "center",
            Self::End => "flex-end",
            Self::SpaceBetween => "space-between",
        }
    }
}

impl FlexAlign {
    /// CSS `align-items` / `align-self` value.
    #[must_use]
    pub const fn as_css(&self) -> &'static str {
        match self {
            Self::Start => "flex-start",
            Self::Center => "center",
            Self::End => "flex-end",
            Self::Stretch => "stretch",
        }
    }
}

impl ContainerDirectives {
    /// CSS declarations for the container element.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!(
            "display: flex; flex-direction: {}; justify-content: {}; align-items: {}; gap: {}px;",
            self.direction.as_css(),
            self.justify.as_css(),
            self.align.as_css(),
            self.gap
        )
    }
}

impl ItemDirectives {
    /// CSS declarations for an item inside a container laid out along
    /// `direction`. Zero margins are omitted.
    #[must_use]
    pub fn to_css(&self, direction: FlexDirection) -> String {
        let mut css = match self.basis {
            Some(basis) => format!("flex: {} {} {}px;", self.grow, self.shrink, basis),
            None => format!("flex: {} {} auto;", self.grow, self.shrink),
        };
        let _ = write!(css, " align-self: {};", self.align.as_css());

        let (before, after) = direction.margin_properties();
        if self.margin_before > 0.0 {
            let _ = write!(css, " {before}: {}px;", self.margin_before);
        }
        if self.margin_after > 0.0 {
            let _ = write!(css, " {after}: {}px;", self.margin_after);
        }
        css
    }
}

impl StackLayout {
    /// CSS for every item, in order.
    #[must_use]
    pub fn item_css(&self) -> Vec<String> {
        let direction = self.container.direction;
        self.items.iter().map(|i| i.to_css(direction)).collect()
    }
}
