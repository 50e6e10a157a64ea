use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use logger::{Color, Logger};

use super::config::Config;
use super::fleet_error::FleetError;
use super::flight::{Flight, FlightUpdate};
use super::flight_table::FlightTable;
use super::hangar::{Hangar, TypeTally};
use super::ledger::MonthlyLedger;
use super::plane::Plane;
use super::plane_type::PlaneType;
use super::storage::FlightStore;

/// Owns every record of the airline and logs each change made to them.
///
/// The `FleetManager` struct contains the flight table, the plane hangar, the monthly
/// ledger and the file flights are persisted to.
pub struct FleetManager {
    flights: FlightTable,
    hangar: Hangar,
    ledger: MonthlyLedger,
    store: FlightStore,
    logger: Logger,
    echo: bool,
}

impl FleetManager {
    /// Creates a manager with empty records, logging to `config.log_dir`.
    ///
    /// `echo` controls whether log records are also printed to the console.
    pub fn new(config: &Config, echo: bool) -> Result<Self, FleetError> {
        let logger = Logger::new(&config.log_dir, "console")?;
        Ok(Self::with_parts(
            config.flights_file.clone(),
            logger,
            Hangar::new(),
            echo,
        ))
    }

    pub fn with_parts(flights_file: PathBuf, logger: Logger, hangar: Hangar, echo: bool) -> Self {
        FleetManager {
            flights: FlightTable::new(),
            hangar,
            ledger: MonthlyLedger::new(),
            store: FlightStore::new(flights_file),
            logger,
            echo,
        }
    }

    /// Replaces the flight table with the content of the flights file.
    ///
    /// A missing file is not an error: the table is left empty and a warning is logged.
    ///
    /// # Returns
    /// The number of flights loaded.
    pub fn load_flights(&mut self) -> Result<usize, FleetError> {
        let loaded = match self.store.load() {
            Ok(loaded) => loaded,
            Err(FleetError::IoError(e)) if e.kind() == ErrorKind::NotFound => {
                self.warn(&format!(
                    "No saved flights found at {}",
                    self.store.path().display()
                ));
                return Ok(0);
            }
            Err(e) => {
                self.error(&format!("Failed to load flights: {}", e));
                return Err(e);
            }
        };

        if let Some(line) = loaded.malformed_line {
            self.warn(&format!(
                "Stopped reading {} at malformed line {}",
                self.store.path().display(),
                line
            ));
        }
        if loaded.truncated {
            self.warn("Flights file holds more flights than fit in the table; extra ones skipped");
        }

        let count = loaded.flights.len();
        self.flights.replace_all(loaded.flights);
        self.info(&format!("Data loaded successfully ({} flights).", count), Color::Green);
        Ok(count)
    }

    /// Writes the flight table to the flights file.
    pub fn save_flights(&self) -> Result<usize, FleetError> {
        match self.store.save(self.flights.flights()) {
            Ok(count) => {
                self.info(&format!("Data saved successfully ({} flights).", count), Color::Green);
                Ok(count)
            }
            Err(e) => {
                self.error(&format!("Unable to save flights: {}", e));
                Err(e)
            }
        }
    }

    pub fn create_flight(&mut self, flight: Flight) -> Result<(), FleetError> {
        let flight_id = flight.flight_id;
        let result = self.flights.create(flight);
        self.report(result)?;
        self.info(&format!("Flight {} created successfully!", flight_id), Color::Green);
        Ok(())
    }

    pub fn update_flight(&mut self, flight_id: u32, update: FlightUpdate) -> Result<(), FleetError> {
        let result = self.flights.update(flight_id, update);
        self.report(result)?;
        self.info(&format!("Flight {} updated successfully!", flight_id), Color::Cyan);
        Ok(())
    }

    pub fn delete_flight(&mut self, flight_id: u32) -> Result<Flight, FleetError> {
        let result = self.flights.delete(flight_id);
        let removed = self.report(result)?;
        self.info(&format!("Flight {} deleted successfully!", flight_id), Color::Magenta);
        Ok(removed)
    }

    pub fn show_flights<W: Write>(&self, out: &mut W) -> Result<(), FleetError> {
        self.flights.list_all(out)
    }

    pub fn add_plane(&mut self, plane: Plane) -> Result<(), FleetError> {
        let plane_id = plane.plane_id;
        let result = self.hangar.add_plane(plane);
        self.report(result)?;
        self.info(&format!("Plane {} added successfully!", plane_id), Color::Green);
        Ok(())
    }

    pub fn show_planes<W: Write>(&mut self, out: &mut W) -> Result<(), FleetError> {
        self.hangar.list_all(out)
    }

    /// Counts planes by the standard categories. Planes of other types are logged.
    pub fn count_planes_by_type(&mut self) -> Result<TypeTally, FleetError> {
        let tally = self.hangar.count_by_type(&PlaneType::labels())?;
        if tally.unmatched > 0 {
            self.warn(&format!(
                "{} plane(s) have a type outside the counted categories",
                tally.unmatched
            ));
        }
        Ok(tally)
    }

    pub fn record_month(&mut self, month: usize, revenue: f64, expense: f64) -> Result<(), FleetError> {
        let result = self.ledger.record_month(month, revenue, expense);
        self.report(result)
    }

    pub fn show_profits<W: Write>(&self, out: &mut W) -> Result<(), FleetError> {
        writeln!(out, "{}", self.ledger)?;
        Ok(())
    }

    pub fn flights(&self) -> &FlightTable {
        &self.flights
    }

    pub fn hangar(&self) -> &Hangar {
        &self.hangar
    }

    pub fn ledger(&self) -> &MonthlyLedger {
        &self.ledger
    }

    // Logs rejected operations before handing the result back.
    fn report<T>(&self, result: Result<T, FleetError>) -> Result<T, FleetError> {
        if let Err(e) = &result {
            self.warn(&e.to_string());
        }
        result
    }

    fn info(&self, message: &str, color: Color) {
        if let Err(e) = self.logger.info(message, color, self.echo) {
            eprintln!("Failed to write log: {}", e);
        }
    }

    fn warn(&self, message: &str) {
        if let Err(e) = self.logger.warn(message, self.echo) {
            eprintln!("Failed to write log: {}", e);
        }
    }

    fn error(&self, message: &str) {
        if let Err(e) = self.logger.error(message, self.echo) {
            eprintln!("Failed to write log: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;
    use std::path::Path;

    fn manager(name: &str) -> (FleetManager, PathBuf) {
        let dir = env::temp_dir().join(format!("fleet_manager_{}", name));
        fs::create_dir_all(&dir).expect("Failed to create test directory");
        let config = Config {
            flights_file: dir.join("flights.txt"),
            log_dir: dir.join("logs"),
        };
        (FleetManager::new(&config, false).unwrap(), dir)
    }

    fn read_log(dir: &Path) -> String {
        fs::read_to_string(dir.join("logs").join("fleet_console.log")).unwrap()
    }

    #[test]
    fn test_missing_file_loads_nothing() {
        let (mut fleet, dir) = manager("missing");
        assert_eq!(fleet.load_flights().unwrap(), 0);
        assert!(fleet.flights().is_empty());
        assert!(read_log(&dir).contains("[WARN]"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_operations_are_logged() {
        let (mut fleet, dir) = manager("logged");
        let flight = Flight::new(101, "09:00", "10:00", "Rome", 300.0, 1, 2, 50).unwrap();
        fleet.create_flight(flight).unwrap();
        assert!(fleet.delete_flight(7).is_err());

        let log = read_log(&dir);
        assert!(log.contains("Flight 101 created successfully!"));
        assert!(log.contains("Flight ID 7 not found."));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_save_and_reload() {
        let (mut fleet, dir) = manager("reload");
        fleet
            .create_flight(Flight::new(1, "09:00", "10:00", "Rome", 300.0, 1, 2, 50).unwrap())
            .unwrap();
        fleet
            .create_flight(Flight::new(2, "11:00", "13:30", "Oslo", 1500.5, 3, 4, 20).unwrap())
            .unwrap();
        assert_eq!(fleet.save_flights().unwrap(), 2);

        let (mut reloaded, _) = manager("reload");
        assert_eq!(reloaded.load_flights().unwrap(), 2);
        assert_eq!(reloaded.flights(), fleet.flights());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_unmatched_planes_are_warned() {
        let (mut fleet, dir) = manager("unmatched");
        fleet
            .add_plane(Plane::new(1, "Zeppelin", "Air", "Blimps", "Gas", 4, 100.0).unwrap())
            .unwrap();

        let tally = fleet.count_planes_by_type().unwrap();
        assert_eq!(tally.total(), 0);
        assert_eq!(tally.unmatched, 1);
        assert!(read_log(&dir).contains("outside the counted categories"));

        fs::remove_dir_all(&dir).unwrap();
    }
}
