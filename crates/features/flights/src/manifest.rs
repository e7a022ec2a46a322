use crate::error::FlightError;
use crate::flight::Flight;
use crate::passenger::Passenger;
use roster_kernel::domain::config::{RosterConfig, TransferMode};
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};
use tracing::{debug, warn};

static NEXT_MANIFEST: AtomicU32 = AtomicU32::new(0);

/// Handle of a flight registered in a [`Manifest`]. Only valid for the manifest that
/// issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FlightId {
    manifest: u32,
    index: usize,
}

/// Handle of a passenger registered in a [`Manifest`]. Only valid for the manifest that
/// issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PassengerId {
    manifest: u32,
    index: usize,
}

impl FlightId {
    /// Registration order within the issuing manifest.
    #[must_use]
    pub const fn index(self) -> usize {
        self.index
    }
}

impl PassengerId {
    #[cfg(test)]
    pub(crate) const fn new(index: usize) -> Self {
        Self { manifest: 0, index }
    }

    /// Registration order within the issuing manifest.
    #[must_use]
    pub const fn index(self) -> usize {
        self.index
    }
}

impl fmt::Display for FlightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "flight#{}", self.index)
    }
}

impl fmt::Display for PassengerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "passenger#{}", self.index)
    }
}

/// Owns every flight and passenger and performs all changes that touch both sides of a
/// booking.
///
/// Flights and passengers refer to each other only through [`FlightId`] and
/// [`PassengerId`]. A passenger `p` is on the roster of flight `f` exactly when
/// `p.flight() == Some(f)`; every operation here keeps that true when used in sequence,
/// except where its docs say otherwise. Handles are validated before any state changes;
/// a handle issued by another manifest is unknown here even if its index is in range.
#[derive(Debug)]
pub struct Manifest {
    id: u32,
    flights: Vec<Flight>,
    passengers: Vec<Passenger>,
    transfer: TransferMode,
}

impl Default for Manifest {
    fn default() -> Self {
        Self::with_transfer_mode(TransferMode::default())
    }
}

impl Manifest {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_transfer_mode(transfer: TransferMode) -> Self {
        Self {
            id: NEXT_MANIFEST.fetch_add(1, Ordering::Relaxed),
            flights: Vec::new(),
            passengers: Vec::new(),
            transfer,
        }
    }

    #[must_use]
    pub fn from_config(config: &RosterConfig) -> Self {
        Self::with_transfer_mode(config.transfer)
    }

    #[must_use]
    pub const fn transfer_mode(&self) -> TransferMode {
        self.transfer
    }

    pub fn register_flight(&mut self, flight: Flight) -> FlightId {
        let id = FlightId { manifest: self.id, index: self.flights.len() };
        debug!(%id, flight = %flight.flight_number(), seats = flight.seats(), "Flight registered");
        self.flights.push(flight);
        id
    }

    pub fn register_passenger(&mut self, passenger: Passenger) -> PassengerId {
        let id = PassengerId { manifest: self.id, index: self.passengers.len() };
        debug!(%id, identifier = passenger.identifier(), "Passenger registered");
        self.passengers.push(passenger);
        id
    }

    /// # Errors
    /// Returns [`FlightError::UnknownFlight`] for a handle from another manifest.
    pub fn flight(&self, id: FlightId) -> Result<&Flight, FlightError> {
        self.flights
            .get(id.index)
            .filter(|_| id.manifest == self.id)
            .ok_or(FlightError::UnknownFlight { id, context: None })
    }

    /// # Errors
    /// Returns [`FlightError::UnknownPassenger`] for a handle from another manifest.
    pub fn passenger(&self, id: PassengerId) -> Result<&Passenger, FlightError> {
        self.passengers
            .get(id.index)
            .filter(|_| id.manifest == self.id)
            .ok_or(FlightError::UnknownPassenger { id, context: None })
    }

    pub fn flights(&self) -> impl Iterator<Item = (FlightId, &Flight)> {
        self.flights.iter().enumerate().map(|(index, flight)| (FlightId { manifest: self.id, index }, flight))
    }

    pub fn passengers(&self) -> impl Iterator<Item = (PassengerId, &Passenger)> {
        self.passengers.iter().enumerate().map(|(index, p)| (PassengerId { manifest: self.id, index }, p))
    }

    /// Passengers booked on `flight`, in no particular order.
    ///
    /// # Errors
    /// Returns [`FlightError::UnknownFlight`] for a foreign handle.
    pub fn roster(
        &self,
        flight: FlightId,
    ) -> Result<impl Iterator<Item = (PassengerId, &Passenger)>, FlightError> {
        let flight = self.flight(flight)?;
        Ok(flight.passengers().map(move |id| (id, &self.passengers[id.index])))
    }

    /// Every registered passenger carrying `identifier`. Identifiers are not unique.
    pub fn find_passenger<'a>(
        &'a self,
        identifier: &'a str,
    ) -> impl Iterator<Item = PassengerId> + 'a {
        self.passengers().filter(move |(_, p)| p.identifier() == identifier).map(|(id, _)| id)
    }

    /// Books `passenger` on `flight`.
    ///
    /// The capacity check runs before anything changes. On success the passenger's
    /// back-reference is set to `flight` even if the passenger is still listed elsewhere;
    /// use [`Manifest::join_flight`] to move a booked passenger.
    ///
    /// Returns `false` when the passenger was already on the roster.
    ///
    /// # Errors
    /// Returns [`FlightError::CapacityExceeded`] when the roster is full, or an unknown
    /// handle error.
    pub fn add_passenger(
        &mut self,
        flight: FlightId,
        passenger: PassengerId,
    ) -> Result<bool, FlightError> {
        self.check(Some(flight), passenger)?;

        let target = &self.flights[flight.index];
        if let Err(err) = target.ensure_free_seat() {
            warn!(flight = %target.flight_number(), %passenger, seats = target.seats(), "Booking rejected, flight is full");
            return Err(err);
        }

        self.passengers[passenger.index].set_flight(Some(flight));
        let inserted = self.flights[flight.index].insert(passenger);
        debug!(%flight, %passenger, inserted, "Passenger added");
        Ok(inserted)
    }

    /// Clears the passenger's back-reference, then drops them from the roster.
    ///
    /// Returns whether the passenger was on the roster; removing an absent passenger is a
    /// harmless `false`.
    ///
    /// # Errors
    /// Returns an unknown handle error.
    pub fn remove_passenger(
        &mut self,
        flight: FlightId,
        passenger: PassengerId,
    ) -> Result<bool, FlightError> {
        self.check(Some(flight), passenger)?;

        self.passengers[passenger.index].set_flight(None);
        let removed = self.flights[flight.index].remove(passenger);
        debug!(%flight, %passenger, removed, "Passenger removed");
        Ok(removed)
    }

    /// Overwrites the back-reference without touching any roster.
    ///
    /// This is the raw mutator behind the roster operations; it does not keep the two
    /// sides consistent on its own.
    ///
    /// # Errors
    /// Returns an unknown handle error.
    pub fn set_flight(
        &mut self,
        passenger: PassengerId,
        flight: Option<FlightId>,
    ) -> Result<(), FlightError> {
        self.check(flight, passenger)?;
        self.passengers[passenger.index].set_flight(flight);
        Ok(())
    }

    /// Moves `passenger` to `target`, or off any flight when `target` is `None`.
    ///
    /// Behaviour on a full destination depends on [`TransferMode`]:
    /// * `Atomic` rejects the transfer before anything changes; the passenger keeps the
    ///   previous booking.
    /// * `Sequential` has already left the previous flight and points at `target` when
    ///   the capacity error surfaces, so `target`'s roster does not list a passenger that
    ///   claims to be on it until the caller repairs it.
    ///
    /// # Errors
    /// Returns [`FlightError::CapacityExceeded`] for a full destination,
    /// [`FlightError::OperationFailed`] ("Cannot remove passenger" / "Cannot add
    /// passenger") when roster and back-reference disagree, or an unknown handle error.
    pub fn join_flight(
        &mut self,
        passenger: PassengerId,
        target: Option<FlightId>,
    ) -> Result<(), FlightError> {
        self.check(target, passenger)?;

        match self.transfer {
            TransferMode::Atomic => self.transfer_atomic(passenger, target)?,
            TransferMode::Sequential => self.transfer_sequential(passenger, target)?,
        }

        debug!(%passenger, target = ?target, mode = ?self.transfer, "Passenger transferred");
        Ok(())
    }

    /// Audits the whole manifest.
    ///
    /// # Errors
    /// Returns [`FlightError::OperationFailed`] describing the first passenger whose
    /// back-reference and roster membership disagree.
    pub fn verify(&self) -> Result<(), FlightError> {
        for (id, passenger) in self.passengers() {
            if let Some(flight) = passenger.flight()
                && !self.flights.get(flight.index).is_some_and(|f| f.contains(id))
            {
                return Err(FlightError::OperationFailed {
                    message: format!("{id} points at {flight} but is not on its roster").into(),
                    context: None,
                });
            }
        }

        for (id, flight) in self.flights() {
            if let Some(stray) = flight.passengers().find(|p| self.passengers[p.index].flight() != Some(id)) {
                return Err(FlightError::OperationFailed {
                    message: format!("{stray} is on the roster of {id} without pointing at it")
                        .into(),
                    context: None,
                });
            }
        }

        Ok(())
    }

    fn transfer_sequential(
        &mut self,
        passenger: PassengerId,
        target: Option<FlightId>,
    ) -> Result<(), FlightError> {
        if let Some(previous) = self.passengers[passenger.index].flight()
            && !self.remove_passenger(previous, passenger)?
        {
            return Err(FlightError::failed("Cannot remove passenger"));
        }

        self.passengers[passenger.index].set_flight(target);

        let Some(target) = target else {
            return Ok(());
        };
        match self.add_passenger(target, passenger) {
            Ok(true) => Ok(()),
            Ok(false) => Err(FlightError::failed("Cannot add passenger")),
            Err(err) => {
                warn!(%passenger, flight = %target, "Transfer failed after rebinding; back-reference is dangling");
                Err(err)
            }
        }
    }

    fn transfer_atomic(
        &mut self,
        passenger: PassengerId,
        target: Option<FlightId>,
    ) -> Result<(), FlightError> {
        let previous = self.passengers[passenger.index].flight();

        if let Some(previous) = previous
            && !self.flights[previous.index].contains(passenger)
        {
            return Err(FlightError::failed("Cannot remove passenger"));
        }
        if let Some(target) = target
            && previous != Some(target)
        {
            let flight = &self.flights[target.index];
            if flight.contains(passenger) {
                return Err(FlightError::failed("Cannot add passenger"));
            }
            if let Err(err) = flight.ensure_free_seat() {
                warn!(flight = %flight.flight_number(), %passenger, "Transfer rejected, flight is full");
                return Err(err);
            }
        }

        if let Some(previous) = previous {
            self.flights[previous.index].remove(passenger);
        }
        if let Some(target) = target {
            self.flights[target.index].insert(passenger);
        }
        self.passengers[passenger.index].set_flight(target);
        Ok(())
    }

    fn check(&self, flight: Option<FlightId>, passenger: PassengerId) -> Result<(), FlightError> {
        self.passenger(passenger)?;
        if let Some(flight) = flight {
            self.flight(flight)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest(mode: TransferMode) -> (Manifest, FlightId, FlightId, PassengerId) {
        let mut manifest = Manifest::with_transfer_mode(mode);
        let ab = manifest.register_flight(Flight::new("AB123", 2).unwrap());
        let cd = manifest.register_flight(Flight::new("CD456", 1).unwrap());
        let p = manifest.register_passenger(Passenger::new("P001", "Maria Diaz", "US").unwrap());
        (manifest, ab, cd, p)
    }

    #[test]
    fn handles_are_sequential_and_display() {
        let (manifest, ab, cd, p) = manifest(TransferMode::Atomic);
        assert_eq!((ab.index(), cd.index(), p.index()), (0, 1, 0));
        assert_eq!(cd.to_string(), "flight#1");
        assert_eq!(p.to_string(), "passenger#0");
        assert_eq!(manifest.flights().count(), 2);
    }

    #[test]
    fn foreign_handles_are_rejected_without_mutation() {
        let (mut manifest, ab, _, p) = manifest(TransferMode::Atomic);
        let ghost_flight = FlightId { manifest: manifest.id, index: 42 };
        let ghost_passenger = PassengerId { manifest: manifest.id, index: 42 };

        assert!(matches!(
            manifest.add_passenger(ghost_flight, p),
            Err(FlightError::UnknownFlight { .. })
        ));
        assert!(matches!(
            manifest.join_flight(ghost_passenger, Some(ab)),
            Err(FlightError::UnknownPassenger { .. })
        ));
        assert!(manifest.set_flight(p, Some(ghost_flight)).is_err());
        assert_eq!(manifest.flight(ab).unwrap().number_of_passengers(), 0);
        assert_eq!(manifest.passenger(p).unwrap().flight(), None);
        assert_eq!(
            manifest.flight(ghost_flight).unwrap_err().to_string(),
            "Unknown flight flight#42"
        );
    }

    #[test]
    fn atomic_rejoin_of_full_flight_keeps_booking() {
        let (mut manifest, _, cd, p) = manifest(TransferMode::Atomic);
        manifest.join_flight(p, Some(cd)).unwrap();
        manifest.join_flight(p, Some(cd)).unwrap();
        assert_eq!(manifest.flight(cd).unwrap().number_of_passengers(), 1);
        assert_eq!(manifest.passenger(p).unwrap().flight(), Some(cd));
    }

    #[test]
    fn handles_from_another_manifest_are_unknown() {
        let (mut a, a_flight, _, a_pass) = manifest(TransferMode::Sequential);
        let mut b = Manifest::with_transfer_mode(TransferMode::Sequential);
        let b_flight = b.register_flight(Flight::new("ZZ999", 5).unwrap());
        let b_pass = b.register_passenger(Passenger::new("P777", "Juan Perez", "ES").unwrap());
        assert_eq!((a_flight.index(), a_pass.index()), (b_flight.index(), b_pass.index()));

        assert!(matches!(
            b.join_flight(a_pass, Some(b_flight)),
            Err(FlightError::UnknownPassenger { .. })
        ));
        assert!(matches!(
            b.join_flight(b_pass, Some(a_flight)),
            Err(FlightError::UnknownFlight { .. })
        ));
        assert!(matches!(b.add_passenger(a_flight, a_pass), Err(FlightError::UnknownPassenger { .. })));
        assert!(b.remove_passenger(b_flight, a_pass).is_err());
        assert!(b.set_flight(b_pass, Some(a_flight)).is_err());
        assert!(b.flight(a_flight).is_err());
        assert!(b.roster(a_flight).is_err());

        assert_eq!(b.flight(b_flight).unwrap().number_of_passengers(), 0);
        assert_eq!(b.passenger(b_pass).unwrap().flight(), None);
        b.verify().unwrap();

        a.join_flight(a_pass, Some(a_flight)).unwrap();
        assert!(a.passenger(b_pass).is_err());
    }

    #[test]
    fn sequential_rejoin_of_full_flight_keeps_booking() {
        let (mut manifest, _, cd, p) = manifest(TransferMode::Sequential);
        manifest.join_flight(p, Some(cd)).unwrap();
        manifest.join_flight(p, Some(cd)).unwrap();
        assert_eq!(manifest.flight(cd).unwrap().number_of_passengers(), 1);
        assert_eq!(manifest.passenger(p).unwrap().flight(), Some(cd));
        manifest.verify().unwrap();
    }

    #[test]
    fn atomic_detects_dangling_back_reference_before_mutating() {
        let (mut manifest, ab, cd, p) = manifest(TransferMode::Atomic);
        manifest.set_flight(p, Some(ab)).unwrap();

        let err = manifest.join_flight(p, Some(cd)).unwrap_err();
        assert_eq!(err.to_string(), "Cannot remove passenger");
        assert_eq!(manifest.passenger(p).unwrap().flight(), Some(ab));
        assert_eq!(manifest.flight(cd).unwrap().number_of_passengers(), 0);
    }

    #[test]
    fn sequential_detects_dangling_back_reference() {
        let (mut manifest, ab, cd, p) = manifest(TransferMode::Sequential);
        manifest.set_flight(p, Some(ab)).unwrap();

        let err = manifest.join_flight(p, Some(cd)).unwrap_err();
        assert_eq!(err.to_string(), "Cannot remove passenger");
        // The failed removal already cleared the back-reference.
        assert_eq!(manifest.passenger(p).unwrap().flight(), None);
    }

    #[test]
    fn verify_reports_both_directions() {
        let (mut manifest, ab, _, p) = manifest(TransferMode::Atomic);
        manifest.set_flight(p, Some(ab)).unwrap();
        let err = manifest.verify().unwrap_err();
        assert_eq!(err.to_string(), "passenger#0 points at flight#0 but is not on its roster");

        manifest.add_passenger(ab, p).unwrap();
        manifest.verify().unwrap();

        manifest.set_flight(p, None).unwrap();
        let err = manifest.verify().unwrap_err();
        assert_eq!(err.to_string(), "passenger#0 is on the roster of flight#0 without pointing at it");
    }

    #[test]
    fn roster_lists_booked_passengers() {
        let (mut manifest, ab, _, p) = manifest(TransferMode::Atomic);
        let q = manifest.register_passenger(Passenger::new("P002", "Juan Perez", "ES").unwrap());
        manifest.join_flight(p, Some(ab)).unwrap();
        manifest.join_flight(q, Some(ab)).unwrap();

        let mut names: Vec<_> = manifest.roster(ab).unwrap().map(|(_, p)| p.name()).collect();
        names.sort_unstable();
        assert_eq!(names, ["Juan Perez", "Maria Diaz"]);
    }

    #[test]
    fn find_passenger_matches_every_holder_of_an_identifier() {
        let (mut manifest, _, _, p) = manifest(TransferMode::Atomic);
        let twin = manifest.register_passenger(Passenger::new("P001", "Maria Diaz", "US").unwrap());
        manifest.register_passenger(Passenger::new("P002", "Juan Perez", "ES").unwrap());

        let found: Vec<_> = manifest.find_passenger("P001").collect();
        assert_eq!(found, [p, twin]);
    }
}
