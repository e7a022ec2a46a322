use crate::error::FlightError;
use crate::manifest::FlightId;
use roster_kernel::domain::countries;
use std::fmt;
use std::str::FromStr;

/// An assigned ISO 3166-1 alpha-2 country code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CountryCode(&'static str);

impl CountryCode {
    /// # Errors
    /// Returns [`FlightError::InvalidArgument`] ("Invalid country code") if `code` is not an
    /// assigned alpha-2 code. Matching is case-sensitive.
    pub fn parse(code: &str) -> Result<Self, FlightError> {
        countries::lookup(code).map(Self).ok_or_else(|| FlightError::invalid("Invalid country code"))
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl FromStr for CountryCode {
    type Err = FlightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl PartialEq<&str> for CountryCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A traveller, booked on at most one flight.
///
/// `identifier` and `name` are free text; two passengers sharing an identifier are still
/// distinct. The `flight` back-reference mirrors roster membership and is maintained by
/// [`crate::Manifest`].
#[derive(Debug)]
pub struct Passenger {
    identifier: String,
    name: String,
    country_code: CountryCode,
    flight: Option<FlightId>,
}

impl Passenger {
    /// Creates an unbooked passenger.
    ///
    /// # Errors
    /// Returns [`FlightError::InvalidArgument`] for an unknown country code.
    pub fn new(
        identifier: impl Into<String>,
        name: impl Into<String>,
        country_code: &str,
    ) -> Result<Self, FlightError> {
        Ok(Self {
            identifier: identifier.into(),
            name: name.into(),
            country_code: CountryCode::parse(country_code)?,
            flight: None,
        })
    }

    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn country_code(&self) -> CountryCode {
        self.country_code
    }

    /// The flight currently holding this passenger, `None` when unbooked.
    #[must_use]
    pub const fn flight(&self) -> Option<FlightId> {
        self.flight
    }

    #[must_use]
    pub const fn is_booked(&self) -> bool {
        self.flight.is_some()
    }

    pub(crate) const fn set_flight(&mut self, flight: Option<FlightId>) {
        self.flight = flight;
    }
}

impl fmt::Display for Passenger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Passenger {} with identifier: {} from {}", self.name, self.identifier, self.country_code)
    }
}
