//! Boundary to the host toolkit's widgets.
//!
//! The control pushes derived state through these traits and never reads it
//! back; the host forwards each widget's "user changed value" notification to
//! the matching entry point on the control.

/// Continuous slider over the fixed tick range `[0, SLIDER_TICKS]`.
pub trait SliderView {
    fn set_position(&mut self, position: i32);
    fn set_enabled(&mut self, enabled: bool);
}

/// Stepped spinner. Works on raw values for contiguous domains and on
/// indices into the valid-value set for discrete ones; the display text is
/// set separately since it follows the representation, not the index.
pub trait SpinView {
    fn configure(&mut self, minimum: i64, maximum: i64, step: i64);
    fn set_index(&mut self, index: i64);
    fn set_display_text(&mut self, text: &str);
    fn set_readonly(&mut self, readonly: bool);
    fn set_buttons_visible(&mut self, visible: bool);
}

/// Free-form text field for address-like representations.
pub trait EditView {
    fn set_text(&mut self, text: &str);
    fn set_readonly(&mut self, readonly: bool);
}

/// Instantiates widgets on demand; which ones get created is decided by the
/// control from the property's representation.
pub trait ViewFactory {
    fn create_slider(&mut self) -> Box<dyn SliderView>;
    fn create_spin(&mut self) -> Box<dyn SpinView>;
    fn create_edit(&mut self) -> Box<dyn EditView>;
}
