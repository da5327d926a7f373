use log::{debug, error, warn};

use crate::format::{format_value, parse_value};
use crate::mapper::IntegerValueMapper;
use crate::property::{IntegerProperty, Representation};

use super::views::{EditView, SliderView, SpinView, ViewFactory};
use super::{ControlError, ControlUi};

/// Binds one integer property to its editors and keeps every view in sync
/// with the raw value.
///
/// Which editors exist depends on the representation: plain and hex numbers
/// get a spinner, linear and logarithmic ranges get a slider plus a spinner,
/// address-like values get a text field. The host forwards widget change
/// notifications to `slider_moved`, `spin_stepped`, `spin_text_committed` and
/// `edit_committed`; the control pushes derived state back through the view
/// traits with change signals blocked, so an update originating in one view
/// never loops back through the others.
pub struct IntegerControl<P: IntegerProperty> {
    property: P,
    mapper: IntegerValueMapper,
    value: i64,
    last_slider_position: i32,
    signals_blocked: bool,
    slider: Option<Box<dyn SliderView>>,
    spin: Option<Box<dyn SpinView>>,
    edit: Option<Box<dyn EditView>>,
}

impl<P: IntegerProperty> IntegerControl<P> {
    pub fn new(property: P, factory: &mut dyn ViewFactory) -> Result<Self, ControlError> {
        let domain = property.domain()?;
        let value = property.value()?;

        let (slider, spin, edit) = match domain.representation {
            Representation::PureNumber | Representation::HexNumber => {
                (None, Some(factory.create_spin()), None)
            }
            Representation::Linear | Representation::Logarithmic => (
                Some(factory.create_slider()),
                Some(factory.create_spin()),
                None,
            ),
            Representation::MacAddress | Representation::IP4Address => {
                (None, None, Some(factory.create_edit()))
            }
            Representation::Boolean => {
                return Err(ControlError::UnsupportedRepresentation(domain.representation));
            }
        };

        let mapper = IntegerValueMapper::new(domain)?;

        let mut control = IntegerControl {
            property,
            mapper,
            value,
            last_slider_position: 0,
            signals_blocked: false,
            slider,
            spin,
            edit,
        };

        control.configure_spin();
        control.push_views(value);
        control.update_state();

        Ok(control)
    }

    /// Raw value the views currently show.
    pub fn value(&self) -> i64 {
        self.value
    }

    /// The host calls this when the slider reports a new position.
    ///
    /// A move by exactly one tick is treated as a step gesture and advances
    /// by a full increment; the affine mapping would round a single tick back
    /// onto the current value whenever the range is wider than the tick count.
    pub fn slider_moved(&mut self, position: i32) {
        if self.signals_blocked {
            return;
        }

        let delta = i64::from(position) - i64::from(self.last_slider_position);
        if delta.abs() == 1 {
            let stepped = self.mapper.step_value(self.value, delta > 0);
            self.apply_value(stepped);
        } else {
            let candidate = self.mapper.slider_position_to_value(position);
            let snapped = self.mapper.snap_to_increment(candidate, self.value);
            self.apply_value(snapped);
        }
    }

    /// The host calls this when the spinner's up/down buttons changed its
    /// index.
    pub fn spin_stepped(&mut self, index: i64) {
        if self.signals_blocked {
            return;
        }

        match self.mapper.index_to_value(index) {
            Some(value) => self.apply_value(value),
            None => {
                error!("spin index {} is outside the configured range", index);
                self.push_views(self.value);
            }
        }
    }

    /// The host calls this when text typed into the spinner is committed.
    pub fn spin_text_committed(&mut self, text: &str) {
        if self.signals_blocked {
            return;
        }

        self.commit_text(text);
    }

    /// The host calls this when the text field's content is committed.
    pub fn edit_committed(&mut self, text: &str) {
        if self.signals_blocked {
            return;
        }

        self.commit_text(text);
    }

    fn commit_text(&mut self, text: &str) {
        match parse_value(text, self.mapper.domain().representation) {
            Ok(candidate) => {
                let snapped = self.mapper.snap_to_increment(candidate, self.value);
                self.apply_value(snapped);
            }
            Err(e) => {
                // Revert the field to the last known-good display string
                debug!("{}", e);
                self.push_views(self.value);
            }
        }
    }

    /// Hands a value to the property layer and re-syncs the views; a rejected
    /// write falls back to whatever the property reports as authoritative.
    fn apply_value(&mut self, new_value: i64) {
        match self.property.set_value(new_value) {
            Ok(()) => self.value = new_value,
            Err(e) => {
                warn!("property rejected value {}: {}", new_value, e);
                match self.property.value() {
                    Ok(v) => self.value = v,
                    Err(e) => error!("could not re-read property value: {}", e),
                }
            }
        }

        self.push_views(self.value);
    }

    fn configure_spin(&mut self) {
        self.signals_blocked = true;

        let (low, high) = self.mapper.spin_range();
        let step = self.mapper.spin_step();
        if let Some(spin) = self.spin.as_mut() {
            spin.configure(low, high, step);
        }

        self.signals_blocked = false;
    }

    fn push_views(&mut self, value: i64) {
        self.signals_blocked = true;

        let text = format_value(value, self.mapper.domain().representation);
        let index = self.mapper.value_to_index(value);

        self.last_slider_position = self.mapper.value_to_slider_position(value);
        if let Some(slider) = self.slider.as_mut() {
            slider.set_position(self.last_slider_position);
        }

        if let Some(spin) = self.spin.as_mut() {
            spin.set_index(index);
            spin.set_display_text(&text);
        }

        if let Some(edit) = self.edit.as_mut() {
            edit.set_text(&text);
        }

        self.signals_blocked = false;
    }
}

impl<P: IntegerProperty> ControlUi for IntegerControl<P> {
    fn update_value(&mut self) {
        let new_value = match self.property.value() {
            Ok(v) => v,
            Err(e) => {
                error!("error while refreshing property value: {}", e);
                return;
            }
        };

        if new_value != self.value {
            self.value = new_value;
            self.push_views(new_value);
        }
    }

    fn update_state(&mut self) {
        let locked = self.property.is_locked();
        let readonly = self.property.is_readonly();

        if let Some(slider) = self.slider.as_mut() {
            slider.set_enabled(!locked);
        }

        if let Some(spin) = self.spin.as_mut() {
            spin.set_readonly(locked || readonly);
            spin.set_buttons_visible(!readonly);
        }

        if let Some(edit) = self.edit.as_mut() {
            edit.set_readonly(locked || readonly);
        }
    }
}
