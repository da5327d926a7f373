use thiserror::Error;

use crate::property::{PropertyError, Representation};

#[derive(Debug, Error)]
pub enum ControlError {
    #[error("representation {0:?} is not supported by the integer control")]
    UnsupportedRepresentation(Representation),

    #[error("invalid domain: {0}")]
    InvalidDomain(String),

    #[error("cannot parse {input:?} as a {representation:?} value")]
    Parse {
        input: String,
        representation: Representation,
    },

    #[error(transparent)]
    Property(#[from] PropertyError),
}
