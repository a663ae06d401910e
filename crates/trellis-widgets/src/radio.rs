//! Legacy single radio control.
//!
//! A styled wrapper around a visual handle. The control does not own its
//! selection: it is checked when an externally supplied watching value
//! equals its own value.

#![allow(deprecated)]

use serde::{Deserialize, Serialize};

/// Default test ID of the wrapper.
pub const RADIO_TEST_ID: &str = "trellis-radio";

/// Default test ID of the handle.
pub const RADIO_HANDLE_TEST_ID: &str = "trellis-radio-handle";

/// Whether a radio with `value` is checked while `watching_value` is
/// selected. Absent values are never checked.
#[must_use]
pub fn is_checked<V: PartialEq>(watching_value: Option<&V>, value: Option<&V>) -> bool {
    match (watching_value, value) {
        (Some(watching), Some(value)) => watching == value,
        _ => false,
    }
}

/// Pointer interaction delivered to the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerEvent {
    /// Pointer entered the wrapper
    Enter,
    /// Pointer left the wrapper
    Leave,
    /// Wrapper was clicked
    Click,
}

/// Message emitted when an enabled radio is clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadioClicked<V> {
    /// The clicked radio's value
    pub value: Option<V>,
}

/// Visual state handed to the handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RadioHandleState {
    /// Watching value equals this radio's value
    pub checked: bool,
    /// Interaction disabled
    pub disabled: bool,
    /// Pointer is over the wrapper
    pub hovered: bool,
}

/// Single radio control checked by comparison with a watching value.
#[deprecated(note = "use a radio group component instead")]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegacyRadio<V> {
    /// This radio's value
    value: Option<V>,
    /// Currently selected value of the surrounding group
    watching_value: Option<V>,
    /// Whether disabled
    disabled: bool,
    /// Ephemeral hover state
    #[serde(skip)]
    hovered: bool,
    /// Label rendered next to the handle
    label: Option<String>,
    /// Extra class applied to the handle's dot
    dot_class_name: Option<String>,
    /// Test ID of the wrapper
    test_id_value: String,
    /// Test ID of the handle
    handle_test_id_value: String,
}

impl<V> Default for LegacyRadio<V> {
    fn default() -> Self {
        Self {
            value: None,
            watching_value: None,
            disabled: false,
            hovered: false,
            label: None,
            dot_class_name: None,
            test_id_value: RADIO_TEST_ID.to_string(),
            handle_test_id_value: RADIO_HANDLE_TEST_ID.to_string(),
        }
    }
}

impl<V: PartialEq + Clone> LegacyRadio<V> {
    /// Create a radio carrying `value`.
    #[must_use]
    pub fn new(value: V) -> Self {
        Self {
            value: Some(value),
            ..Self::default()
        }
    }

    /// Set the value currently selected by the group.
    #[must_use]
    pub fn watching(mut self, value: V) -> Self {
        self.watching_value = Some(value);
        self
    }

    /// Set disabled state.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the handle dot's class name.
    #[must_use]
    pub fn dot_class_name(mut self, class: impl Into<String>) -> Self {
        self.dot_class_name = Some(class.into());
        self
    }

    /// Set wrapper test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = id.into();
        self
    }

    /// Set handle test ID.
    #[must_use]
    pub fn with_handle_test_id(mut self, id: impl Into<String>) -> Self {
        self.handle_test_id_value = id.into();
        self
    }

    /// Update the watching value, e.g. after the group's selection changed.
    pub fn set_watching(&mut self, value: Option<V>) {
        self.watching_value = value;
    }

    /// Get value.
    #[must_use]
    pub const fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    /// Get label.
    #[must_use]
    pub fn get_label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Get the handle dot's class name.
    #[must_use]
    pub fn get_dot_class_name(&self) -> Option<&str> {
        self.dot_class_name.as_deref()
    }

    /// Get wrapper test ID.
    #[must_use]
    pub fn test_id(&self) -> &str {
        &self.test_id_value
    }

    /// Get handle test ID.
    #[must_use]
    pub fn handle_test_id(&self) -> &str {
        &self.handle_test_id_value
    }

    /// Whether the radio is checked.
    #[must_use]
    pub fn is_checked(&self) -> bool {
        is_checked(self.watching_value.as_ref(), self.value.as_ref())
    }

    /// Whether the radio is disabled.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Whether the pointer is over the radio.
    #[must_use]
    pub const fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// State handed to the handle.
    #[must_use]
    pub fn handle_state(&self) -> RadioHandleState {
        RadioHandleState {
            checked: self.is_checked(),
            disabled: self.disabled,
            hovered: self.hovered,
        }
    }

    /// Handle a pointer event. Clicks on an enabled radio emit its value.
    pub fn event(&mut self, event: PointerEvent) -> Option<RadioClicked<V>> {
        match event {
            PointerEvent::Enter => {
                self.hovered = true;
                None
            }
            PointerEvent::Leave => {
                self.hovered = false;
                None
            }
            PointerEvent::Click if self.disabled => None,
            PointerEvent::Click => Some(RadioClicked {
                value: self.value.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // =========================================================================
    // is_checked Tests
    // =========================================================================

    #[test]
    fn test_is_checked_equal_values() {
        assert!(is_checked(Some(&"a"), Some(&"a")));
    }

    #[test]
    fn test_is_checked_different_values() {
        assert!(!is_checked(Some(&"a"), Some(&"b")));
    }

    #[test]
    fn test_is_checked_absent_values() {
        assert!(!is_checked::<i32>(None, Some(&1)));
        assert!(!is_checked::<i32>(Some(&1), None));
        assert!(!is_checked::<i32>(None, None));
    }

    proptest! {
        #[test]
        fn prop_is_checked_matches_equality(a in 0i32..8, b in 0i32..8) {
            prop_assert_eq!(is_checked(Some(&a), Some(&b)), a == b);
        }
    }

    // =========================================================================
    // LegacyRadio Tests
    // =========================================================================

    #[test]
    fn test_radio_defaults() {
        let radio = LegacyRadio::new("apple");
        assert_eq!(radio.value(), Some(&"apple"));
        assert_eq!(radio.test_id(), RADIO_TEST_ID);
        assert_eq!(radio.handle_test_id(), RADIO_HANDLE_TEST_ID);
        assert!(!radio.is_checked());
        assert!(!radio.is_disabled());
        assert!(!radio.is_hovered());
        assert_eq!(radio.get_label(), None);
    }

    #[test]
    fn test_radio_builder() {
        let radio = LegacyRadio::new(2)
            .watching(2)
            .label("Two")
            .dot_class_name("dot")
            .with_test_id("radio-2")
            .with_handle_test_id("radio-2-handle");
        assert!(radio.is_checked());
        assert_eq!(radio.get_label(), Some("Two"));
        assert_eq!(radio.get_dot_class_name(), Some("dot"));
        assert_eq!(radio.test_id(), "radio-2");
        assert_eq!(radio.handle_test_id(), "radio-2-handle");
    }

    #[test]
    fn test_radio_unchecked_without_value() {
        let radio: LegacyRadio<i32> = LegacyRadio::default().watching(1);
        assert!(!radio.is_checked());
    }

    #[test]
    fn test_radio_set_watching() {
        let mut radio = LegacyRadio::new('b').watching('a');
        assert!(!radio.is_checked());
        radio.set_watching(Some('b'));
        assert!(radio.is_checked());
        radio.set_watching(None);
        assert!(!radio.is_checked());
    }

    #[test]
    fn test_radio_hover_tracking() {
        let mut radio = LegacyRadio::new(1);
        assert!(radio.event(PointerEvent::Enter).is_none());
        assert!(radio.is_hovered());
        assert!(radio.event(PointerEvent::Leave).is_none());
        assert!(!radio.is_hovered());
    }

    #[test]
    fn test_radio_click_emits_value() {
        let mut radio = LegacyRadio::new("x".to_string());
        let msg = radio.event(PointerEvent::Click);
        assert_eq!(
            msg,
            Some(RadioClicked {
                value: Some("x".to_string())
            })
        );
    }

    #[test]
    fn test_radio_click_disabled_is_ignored() {
        let mut radio = LegacyRadio::new(1).disabled(true);
        assert!(radio.event(PointerEvent::Click).is_none());
        // Hover still tracks while disabled
        radio.event(PointerEvent::Enter);
        assert!(radio.is_hovered());
    }

    #[test]
    fn test_radio_handle_state() {
        let mut radio = LegacyRadio::new(3).watching(3).disabled(true);
        radio.event(PointerEvent::Enter);
        assert_eq!(
            radio.handle_state(),
            RadioHandleState {
                checked: true,
                disabled: true,
                hovered: true,
            }
        );
    }

    #[test]
    fn test_radio_hover_not_serialized() {
        let mut radio = LegacyRadio::new(1);
        radio.event(PointerEvent::Enter);
        let json = serde_json::to_string(&radio).unwrap();
        let parsed: LegacyRadio<i32> = serde_json::from_str(&json).unwrap();
        assert!(!parsed.is_hovered());
        assert_eq!(parsed.value(), Some(&1));
    }
}
