//! Flights slice: capacity-bounded flights, the passengers booked on them, and transfers
//! between flights.
//!
//! Flights and passengers are built on their own, then handed to a [`Manifest`], which
//! owns them and hands back [`FlightId`] / [`PassengerId`] handles. Every change that
//! touches a roster and a passenger's back-reference at once goes through the manifest.
//!
//! ```rust
//! use roster_flights::{Flight, Manifest, Passenger};
//!
//! # fn main() -> Result<(), roster_flights::FlightError> {
//! let mut manifest = Manifest::new();
//! let ab = manifest.register_flight(Flight::new("AB123", 2)?);
//! let cd = manifest.register_flight(Flight::new("CD456", 2)?);
//! let maria = manifest.register_passenger(Passenger::new("P001", "Maria Diaz", "US")?);
//!
//! manifest.join_flight(maria, Some(ab))?;
//! manifest.join_flight(maria, Some(cd))?;
//!
//! assert_eq!(manifest.passenger(maria)?.flight(), Some(cd));
//! assert_eq!(manifest.flight(ab)?.number_of_passengers(), 0);
//! # Ok(())
//! # }
//! ```
mod error;
mod flight;
mod manifest;
mod passenger;

pub use crate::error::{FlightError, FlightErrorExt};
pub use crate::flight::{Flight, FlightNumber};
pub use crate::manifest::{FlightId, Manifest, PassengerId};
pub use crate::passenger::{CountryCode, Passenger};
pub use roster_kernel::domain::config::TransferMode;
