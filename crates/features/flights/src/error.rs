use crate::flight::FlightNumber;
use crate::manifest::{FlightId, PassengerId};
use std::borrow::Cow;

/// A specialized [`FlightError`] enum of this crate.
#[roster_derive::roster_error]
pub enum FlightError {
    /// Malformed flight number or unknown country code.
    #[error("{message}{}", format_context(.context))]
    InvalidArgument { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The flight's roster already holds `seats` passengers.
    #[error("Not enough seats for flight {flight_number}{}", format_context(.context))]
    CapacityExceeded { flight_number: FlightNumber, seats: i32, context: Option<Cow<'static, str>> },

    /// Roster and back-reference disagree.
    #[error("{message}{}", format_context(.context))]
    OperationFailed { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The handle was not issued by this manifest.
    #[error("Unknown flight {id}{}", format_context(.context))]
    UnknownFlight { id: FlightId, context: Option<Cow<'static, str>> },

    /// The handle was not issued by this manifest.
    #[error("Unknown passenger {id}{}", format_context(.context))]
    UnknownPassenger { id: PassengerId, context: Option<Cow<'static, str>> },
}

impl FlightError {
    pub(crate) const fn invalid(message: &'static str) -> Self {
        Self::InvalidArgument { message: Cow::Borrowed(message), context: None }
    }

    pub(crate) const fn failed(message: &'static str) -> Self {
        Self::OperationFailed { message: Cow::Borrowed(message), context: None }
    }
}
