use std::io::Write;

use super::fleet_error::FleetError;
use super::flight::{Flight, FlightUpdate};
use super::MAX_FLIGHTS;

/// Ordered, fixed-capacity sequence of flights.
///
/// Flights are stored in insertion order and addressed by their id through a linear
/// scan. Ids are not required to be unique; lookups act on the first match.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FlightTable {
    flights: Vec<Flight>,
}

impl FlightTable {
    pub fn new() -> Self {
        FlightTable {
            flights: Vec::with_capacity(MAX_FLIGHTS),
        }
    }

    /// Appends a flight at the end of the table.
    ///
    /// # Errors
    /// - `FleetError::FlightTableFull` if `MAX_FLIGHTS` flights are already stored.
    pub fn create(&mut self, flight: Flight) -> Result<(), FleetError> {
        if self.is_full() {
            return Err(FleetError::FlightTableFull);
        }
        self.flights.push(flight);
        Ok(())
    }

    /// Overwrites the mutable fields of the first flight with the given id.
    ///
    /// # Errors
    /// - `FleetError::FlightNotFound` if no flight has this id.
    /// - Any validation error of the new fields; the flight is left untouched.
    pub fn update(&mut self, flight_id: u32, update: FlightUpdate) -> Result<(), FleetError> {
        let flight = self
            .flights
            .iter_mut()
            .find(|flight| flight.flight_id == flight_id)
            .ok_or(FleetError::FlightNotFound(flight_id))?;
        flight.apply_update(update)
    }

    /// Removes the first flight with the given id, shifting later flights one position
    /// earlier so the order of the remaining ones is kept.
    pub fn delete(&mut self, flight_id: u32) -> Result<Flight, FleetError> {
        let position = self
            .position_of(flight_id)
            .ok_or(FleetError::FlightNotFound(flight_id))?;
        Ok(self.flights.remove(position))
    }

    /// Writes the details of every flight, in stored order.
    pub fn list_all<W: Write>(&self, out: &mut W) -> Result<(), FleetError> {
        writeln!(out, "\nFlight Details:")?;
        if self.flights.is_empty() {
            writeln!(out, "No flights available.")?;
        }
        for flight in &self.flights {
            writeln!(out, "{}", flight)?;
        }
        Ok(())
    }

    pub fn get(&self, flight_id: u32) -> Option<&Flight> {
        self.flights.iter().find(|flight| flight.flight_id == flight_id)
    }

    fn position_of(&self, flight_id: u32) -> Option<usize> {
        self.flights
            .iter()
            .position(|flight| flight.flight_id == flight_id)
    }

    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    /// Replaces the whole content of the table, keeping at most `MAX_FLIGHTS` flights.
    pub fn replace_all(&mut self, mut flights: Vec<Flight>) {
        flights.truncate(MAX_FLIGHTS);
        self.flights = flights;
    }

    pub fn count(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.flights.len() >= MAX_FLIGHTS
    }
}
