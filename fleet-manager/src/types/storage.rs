use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::num::ParseIntError;
use std::path::{Path, PathBuf};

use super::fleet_error::FleetError;
use super::flight::Flight;
use super::MAX_FLIGHTS;

/// Flights read back from disk.
#[derive(Debug, Default, PartialEq)]
pub struct LoadedFlights {
    pub flights: Vec<Flight>,
    /// Line number of the first record that could not be parsed. Reading stops there.
    pub malformed_line: Option<usize>,
    /// True when the file held more records than `MAX_FLIGHTS` and the rest was skipped.
    pub truncated: bool,
}

/// Text file holding one flight per line:
///
/// `flight_id departure arrival destination distance pilot_number team_id available_seats`
///
/// Fields are separated by a single space and the distance is written with two decimals.
pub struct FlightStore {
    path: PathBuf,
}

impl FlightStore {
    pub fn new(path: PathBuf) -> Self {
        FlightStore { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes every flight to the file, replacing its previous content.
    ///
    /// The records are written to a temporary file next to the target, which is then
    /// renamed into place.
    ///
    /// # Returns
    /// - `Ok(usize)` with the number of flights written.
    /// - `Err(FleetError::IoError)` if the file cannot be created, written or renamed.
    pub fn save(&self, flights: &[Flight]) -> Result<usize, FleetError> {
        let temp_path = self.temp_path();
        {
            let mut writer = BufWriter::new(File::create(&temp_path)?);
            for flight in flights {
                writeln!(writer, "{}", to_record(flight))?;
            }
            writer.flush()?;
        }

        if let Err(e) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(FleetError::IoError(e));
        }

        Ok(flights.len())
    }

    /// Reads flights from the file in stored order.
    ///
    /// Blank lines are skipped. Reading stops at the first malformed line or after
    /// `MAX_FLIGHTS` records; everything read before that is returned.
    pub fn load(&self) -> Result<LoadedFlights, FleetError> {
        let reader = BufReader::new(File::open(&self.path)?);
        let mut loaded = LoadedFlights::default();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            if loaded.flights.len() >= MAX_FLIGHTS {
                loaded.truncated = true;
                break;
            }
            match parse_record(&line, index + 1) {
                Ok(flight) => loaded.flights.push(flight),
                Err(_) => {
                    loaded.malformed_line = Some(index + 1);
                    break;
                }
            }
        }

        Ok(loaded)
    }

    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "flights".to_string());
        self.path.with_file_name(format!("{}.tmp", file_name))
    }
}

/// Formats a flight as one line of the flights file, without the trailing newline.
pub fn to_record(flight: &Flight) -> String {
    format!(
        "{} {} {} {} {:.2} {} {} {}",
        flight.flight_id,
        flight.departure_time,
        flight.arrival_time,
        flight.destination,
        flight.distance,
        flight.pilot_number,
        flight.team_id,
        flight.available_seats
    )
}

/// Parses one line of the flights file.
pub fn parse_record(line: &str, line_number: usize) -> Result<Flight, FleetError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 8 {
        return Err(FleetError::MalformedRecord(line_number));
    }

    let malformed = |_: ParseIntError| FleetError::MalformedRecord(line_number);
    let flight_id: u32 = fields[0].parse().map_err(malformed)?;
    let distance: f64 = fields[4]
        .parse()
        .map_err(|_| FleetError::MalformedRecord(line_number))?;
    let pilot_number: u32 = fields[5].parse().map_err(malformed)?;
    let team_id: u32 = fields[6].parse().map_err(malformed)?;
    let available_seats: u32 = fields[7].parse().map_err(malformed)?;

    Flight::new(
        flight_id,
        fields[1],
        fields[2],
        fields[3],
        distance,
        pilot_number,
        team_id,
        available_seats,
    )
    .map_err(|_| FleetError::MalformedRecord(line_number))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("fleet_storage_{}", name));
        fs::create_dir_all(&dir).expect("Failed to create test directory");
        dir
    }

    fn flight(flight_id: u32, destination: &str, distance: f64) -> Flight {
        Flight::new(flight_id, "06:15", "10:40", destination, distance, 11, 4, 150).unwrap()
    }

    #[test]
    fn test_record_format() {
        let record = to_record(&flight(12, "Cordoba", 710.5));
        assert_eq!(record, "12 06:15 10:40 Cordoba 710.50 11 4 150");
    }

    #[test]
    fn test_parse_record_rejects_bad_lines() {
        assert!(parse_record("12 06:15 10:40 Cordoba 710.50 11 4", 1).is_err());
        assert!(parse_record("x 06:15 10:40 Cordoba 710.50 11 4 150", 1).is_err());
        assert!(parse_record("12 06:15 10:40 Cordoba far 11 4 150", 1).is_err());
        assert!(parse_record("12 6pm 10:40 Cordoba 710.50 11 4 150", 1).is_err());
        assert!(parse_record("-12 06:15 10:40 Cordoba 710.50 11 4 150", 1).is_err());
        assert!(matches!(
            parse_record("12 06:15 10:40 New York 710.50 11 4 150", 3),
            Err(FleetError::MalformedRecord(3))
        ));
    }

    #[test]
    fn test_save_then_load_returns_same_flights() {
        let dir = temp_dir("round_trip");
        let store = FlightStore::new(dir.join("flights.txt"));
        let flights = vec![
            flight(1, "Salta", 1245.25),
            flight(2, "Ushuaia", 2380.0),
            flight(2, "Rosario", 0.75),
        ];

        assert_eq!(store.save(&flights).unwrap(), 3);
        let loaded = store.load().unwrap();

        assert_eq!(loaded.flights, flights);
        assert_eq!(loaded.malformed_line, None);
        assert!(!loaded.truncated);
        assert!(!dir.join("flights.txt.tmp").exists());

        fs::remove_dir_all(&dir).expect("Failed to remove test directory");
    }

    #[test]
    fn test_round_trip_with_extra_decimals() {
        let dir = temp_dir("extra_decimals");
        let store = FlightStore::new(dir.join("flights.txt"));
        let flights = vec![
            flight(1, "Lima", 1250.555),
            flight(2, "Quito", 0.005),
            flight(3, "Bogota", 987.6543),
        ];

        store.save(&flights).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded.flights, flights);

        fs::remove_dir_all(&dir).expect("Failed to remove test directory");
    }

    #[test]
    fn test_load_stops_at_first_malformed_line() {
        let dir = temp_dir("malformed");
        let path = dir.join("flights.txt");
        fs::write(
            &path,
            "1 08:00 09:00 Salta 100.00 1 1 10\n\
             2 08:00 09:00 Jujuy 200.00 1 1 20\n\
             3 08:00 09:00 broken\n\
             4 08:00 09:00 Mendoza 300.00 1 1 30\n",
        )
        .unwrap();

        let loaded = FlightStore::new(path).load().unwrap();
        let ids: Vec<u32> = loaded.flights.iter().map(|f| f.flight_id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(loaded.malformed_line, Some(3));

        fs::remove_dir_all(&dir).expect("Failed to remove test directory");
    }

    #[test]
    fn test_load_discards_partial_last_line() {
        let dir = temp_dir("partial");
        let path = dir.join("flights.txt");
        fs::write(&path, "1 08:00 09:00 Salta 100.00 1 1 10\n2 08:00 09:00 Ju").unwrap();

        let loaded = FlightStore::new(path).load().unwrap();
        assert_eq!(loaded.flights.len(), 1);
        assert_eq!(loaded.malformed_line, Some(2));

        fs::remove_dir_all(&dir).expect("Failed to remove test directory");
    }

    #[test]
    fn test_load_stops_at_capacity() {
        let dir = temp_dir("capacity");
        let store = FlightStore::new(dir.join("flights.txt"));
        let flights: Vec<Flight> = (0..MAX_FLIGHTS as u32 + 3)
            .map(|id| flight(id, "Neuquen", 10.0))
            .collect();
        store.save(&flights).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.flights.len(), MAX_FLIGHTS);
        assert!(loaded.truncated);

        fs::remove_dir_all(&dir).expect("Failed to remove test directory");
    }

    #[test]
    fn test_load_missing_file() {
        let store = FlightStore::new(env::temp_dir().join("fleet_storage_missing/flights.txt"));
        assert!(matches!(store.load(), Err(FleetError::IoError(_))));
    }
}
