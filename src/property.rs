use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;

/// Display/encoding mode of an integer property, as reported by the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Representation {
    PureNumber,
    HexNumber,
    MacAddress,
    IP4Address,
    Linear,
    Logarithmic,
    Boolean,
}

/// Legal values of an integer property.
///
/// When `valid_values` is non-empty the property only accepts exactly those
/// values and `minimum`/`maximum`/`increment` are advisory.
#[derive(Debug, Clone)]
pub struct IntegerDomain {
    pub minimum: i64,
    pub maximum: i64,
    pub increment: i64,
    pub representation: Representation,
    pub valid_values: Vec<i64>,
}

impl IntegerDomain {
    pub fn contiguous(
        minimum: i64,
        maximum: i64,
        increment: i64,
        representation: Representation,
    ) -> IntegerDomain {
        IntegerDomain {
            minimum,
            maximum,
            increment,
            representation,
            valid_values: vec![],
        }
    }

    pub fn with_valid_values(representation: Representation, valid_values: Vec<i64>) -> IntegerDomain {
        let minimum = valid_values.iter().copied().min().unwrap_or(0);
        let maximum = valid_values.iter().copied().max().unwrap_or(0);

        IntegerDomain {
            minimum,
            maximum,
            increment: 1,
            representation,
            valid_values,
        }
    }
}

#[derive(Debug, Error)]
pub enum PropertyError {
    #[error("value {value} is not accepted by the property")]
    OutOfRange { value: i64 },

    #[error("{0}")]
    Backend(String),
}

/// Accessor for one integer property of a device.
///
/// The control re-queries value and lock/readonly state on every external
/// refresh; the domain is only read once, at construction.
pub trait IntegerProperty {
    fn domain(&self) -> Result<IntegerDomain, PropertyError>;
    fn value(&self) -> Result<i64, PropertyError>;
    fn set_value(&mut self, value: i64) -> Result<(), PropertyError>;
    fn is_locked(&self) -> bool;
    fn is_readonly(&self) -> bool;
}

/// The host usually keeps its own handle on the property while the control
/// owns another, the same way all controls of a dialog share one device.
impl<P: IntegerProperty> IntegerProperty for Rc<RefCell<P>> {
    fn domain(&self) -> Result<IntegerDomain, PropertyError> {
        self.borrow().domain()
    }

    fn value(&self) -> Result<i64, PropertyError> {
        self.borrow().value()
    }

    fn set_value(&mut self, value: i64) -> Result<(), PropertyError> {
        self.borrow_mut().set_value(value)
    }

    fn is_locked(&self) -> bool {
        self.borrow().is_locked()
    }

    fn is_readonly(&self) -> bool {
        self.borrow().is_readonly()
    }
}

/// Property backed by plain memory, enforcing the same write rules a device
/// would. Used by the crate's own tests and handy for prototyping a dialog
/// without hardware.
pub struct InMemoryProperty {
    domain: IntegerDomain,
    value: i64,
    locked: bool,
    readonly: bool,
}

impl InMemoryProperty {
    pub fn new(domain: IntegerDomain, value: i64) -> InMemoryProperty {
        InMemoryProperty {
            domain,
            value,
            locked: false,
            readonly: false,
        }
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    pub fn set_readonly(&mut self, readonly: bool) {
        self.readonly = readonly;
    }

    /// Device-side value change, bypassing the write checks.
    pub fn force_value(&mut self, value: i64) {
        self.value = value;
    }
}

impl IntegerProperty for InMemoryProperty {
    fn domain(&self) -> Result<IntegerDomain, PropertyError> {
        Ok(self.domain.clone())
    }

    fn value(&self) -> Result<i64, PropertyError> {
        Ok(self.value)
    }

    fn set_value(&mut self, value: i64) -> Result<(), PropertyError> {
        if self.locked || self.readonly {
            return Err(PropertyError::Backend("property is not writable".to_string()));
        }

        if !self.domain.valid_values.is_empty() {
            if !self.domain.valid_values.contains(&value) {
                return Err(PropertyError::OutOfRange { value });
            }
        } else {
            if value < self.domain.minimum || value > self.domain.maximum {
                return Err(PropertyError::OutOfRange { value });
            }

            // The range length may exceed i64, keep the grid check in i128
            let offset = i128::from(value) - i128::from(self.domain.minimum);
            if value != self.domain.maximum && offset % i128::from(self.domain.increment) != 0 {
                return Err(PropertyError::OutOfRange { value });
            }
        }

        self.value = value;
        Ok(())
    }

    fn is_locked(&self) -> bool {
        self.locked
    }

    fn is_readonly(&self) -> bool {
        self.readonly
    }
}
