use log::warn;

use crate::controls::{ControlError, ControlUi, IntegerControl, ViewFactory};
use crate::property::IntegerProperty;

/// Collects the controls of one property-inspector dialog.
///
/// Writing one property can change the value or lock state of others on the
/// same device, so the host should call [`refresh_all`] after every accepted
/// edit and on external refresh requests.
///
/// [`refresh_all`]: InspectorPanel::refresh_all
#[derive(Default)]
pub struct InspectorPanel {
    controls: Vec<Box<dyn ControlUi>>,
}

impl InspectorPanel {
    pub fn new() -> InspectorPanel {
        InspectorPanel { controls: vec![] }
    }

    /// Builds a control for an integer property and adds it to the panel.
    ///
    /// Properties this control cannot represent (e.g. boolean-represented
    /// integers) are reported and skipped rather than aborting the dialog.
    pub fn add_integer<P>(
        &mut self,
        property: P,
        factory: &mut dyn ViewFactory,
    ) -> Result<(), ControlError>
    where
        P: IntegerProperty + 'static,
    {
        match IntegerControl::new(property, factory) {
            Ok(control) => {
                self.controls.push(Box::new(control));
                Ok(())
            }
            Err(e) => {
                warn!("skipping property control: {}", e);
                Err(e)
            }
        }
    }

    pub fn refresh_all(&mut self) {
        for control in self.controls.iter_mut() {
            control.update_state();
            control.update_value();
        }
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }
}
