mod control_ui;
pub use self::control_ui::ControlUi;

mod control_error;
pub use self::control_error::ControlError;

mod views;
pub use self::views::{EditView, SliderView, SpinView, ViewFactory};

mod integer_control;
pub use self::integer_control::IntegerControl;
