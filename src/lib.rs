//! Toolkit-agnostic controls for integer-valued device properties.
//!
//! A camera property dialog presents every integer property through one of
//! three editors, chosen by the property's representation: a slider with an
//! attached spinner, a plain spinner, or a text field. This crate implements
//! the value/view synchronization behind those editors; the actual widgets
//! and the device transport are reached through the traits in [`controls`]
//! and [`IntegerProperty`].

pub mod controls;

mod format;
pub use self::format::{format_value, parse_value};

mod mapper;
pub use self::mapper::{IntegerValueMapper, SLIDER_TICKS};

mod panel;
pub use self::panel::InspectorPanel;

mod property;
pub use self::property::{
    InMemoryProperty, IntegerDomain, IntegerProperty, PropertyError, Representation,
};
