/// Operations the inspector panel runs against every control on an external
/// refresh, e.g. after any property write (one write may change the value or
/// lock state of other properties on the device).
pub trait ControlUi {
    fn update_value(&mut self);
    fn update_state(&mut self);
}
