//! Primitive types for the quorum update engine.

pub use payload::{PayloadDecodeError, PriceUpdate};
mod payload;

pub use round::{ConfirmationRound, RoundId};
mod round;

pub use time::unix_timestamp;
mod time;
