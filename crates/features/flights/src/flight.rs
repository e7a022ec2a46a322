use crate::error::FlightError;
use crate::manifest::PassengerId;
use fxhash::FxHashSet;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

// ASCII digits only; `\d` would also accept other Unicode decimal digits.
static FLIGHT_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z]{2}[0-9]{3,4}$").expect("flight number pattern must compile")
});

/// Validated flight designator: two uppercase letters followed by 3 or 4 digits (`AB123`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FlightNumber(String);

impl FlightNumber {
    /// # Errors
    /// Returns [`FlightError::InvalidArgument`] ("Invalid flight number") if `number` does
    /// not match the designator format.
    pub fn parse(number: &str) -> Result<Self, FlightError> {
        if FLIGHT_NUMBER.is_match(number) {
            Ok(Self(number.to_owned()))
        } else {
            Err(FlightError::invalid("Invalid flight number"))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for FlightNumber {
    type Err = FlightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for FlightNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for FlightNumber {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for FlightNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A flight with a fixed capacity and the set of passengers booked on it.
///
/// The roster only changes through [`crate::Manifest`], which keeps each passenger's
/// back-reference in step with it.
#[derive(Debug)]
pub struct Flight {
    number: FlightNumber,
    seats: i32,
    passengers: FxHashSet<PassengerId>,
}

impl Flight {
    /// Creates an empty flight. `seats` is not validated; a flight with zero or negative
    /// capacity exists but never accepts a passenger.
    ///
    /// # Errors
    /// Returns [`FlightError::InvalidArgument`] for a malformed flight number.
    pub fn new(flight_number: &str, seats: i32) -> Result<Self, FlightError> {
        Ok(Self { number: FlightNumber::parse(flight_number)?, seats, passengers: FxHashSet::default() })
    }

    #[must_use]
    pub const fn flight_number(&self) -> &FlightNumber {
        &self.number
    }

    #[must_use]
    pub const fn seats(&self) -> i32 {
        self.seats
    }

    /// Current roster size, not remaining capacity.
    #[must_use]
    pub fn number_of_passengers(&self) -> usize {
        self.passengers.len()
    }

    #[must_use]
    pub fn available_seats(&self) -> usize {
        usize::try_from(self.seats).unwrap_or(0).saturating_sub(self.passengers.len())
    }

    #[must_use]
    pub fn contains(&self, passenger: PassengerId) -> bool {
        self.passengers.contains(&passenger)
    }

    /// Booked passengers, in no particular order.
    pub fn passengers(&self) -> impl Iterator<Item = PassengerId> + '_ {
        self.passengers.iter().copied()
    }

    pub(crate) fn ensure_free_seat(&self) -> Result<(), FlightError> {
        if self.available_seats() == 0 {
            return Err(FlightError::CapacityExceeded {
                flight_number: self.number.clone(),
                seats: self.seats,
                context: None,
            });
        }
        Ok(())
    }

    pub(crate) fn insert(&mut self, passenger: PassengerId) -> bool {
        self.passengers.insert(passenger)
    }

    pub(crate) fn remove(&mut self, passenger: PassengerId) -> bool {
        self.passengers.remove(&passenger)
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.number, f)
    }
}
