use std::fmt;

use chrono::NaiveTime;

use super::fleet_error::FleetError;

const TIME_FORMAT: &str = "%H:%M";

/// A scheduled flight as stored in the flight table.
///
/// `pilot_number` and `team_id` refer to crews managed elsewhere; they are kept
/// as plain numbers and never resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Flight {
    pub flight_id: u32,
    pub departure_time: String,
    pub arrival_time: String,
    pub destination: String,
    pub distance: f64,
    pub pilot_number: u32,
    pub team_id: u32,
    pub available_seats: u32,
}

/// The fields of a flight that may change after it was created.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightUpdate {
    pub departure_time: String,
    pub arrival_time: String,
    pub destination: String,
    pub distance: f64,
    pub available_seats: u32,
}

impl Flight {
    /// Creates a new flight, checking that every text field can be stored and read back.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        flight_id: u32,
        departure_time: &str,
        arrival_time: &str,
        destination: &str,
        distance: f64,
        pilot_number: u32,
        team_id: u32,
        available_seats: u32,
    ) -> Result<Self, FleetError> {
        Ok(Flight {
            flight_id,
            departure_time: parse_time(departure_time)?,
            arrival_time: parse_time(arrival_time)?,
            destination: parse_token("destination", destination)?,
            distance: parse_distance(distance)?,
            pilot_number,
            team_id,
            available_seats,
        })
    }

    /// Overwrites the mutable fields in place. Nothing changes if any field is invalid.
    pub fn apply_update(&mut self, update: FlightUpdate) -> Result<(), FleetError> {
        let departure_time = parse_time(&update.departure_time)?;
        let arrival_time = parse_time(&update.arrival_time)?;
        let destination = parse_token("destination", &update.destination)?;
        let distance = parse_distance(update.distance)?;

        self.departure_time = departure_time;
        self.arrival_time = arrival_time;
        self.destination = destination;
        self.distance = distance;
        self.available_seats = update.available_seats;
        Ok(())
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Flight ID: {}", self.flight_id)?;
        writeln!(f, "Departure Time: {}", self.departure_time)?;
        writeln!(f, "Arrival Time: {}", self.arrival_time)?;
        writeln!(f, "Destination: {}", self.destination)?;
        writeln!(f, "Distance: {:.2} km", self.distance)?;
        writeln!(f, "Pilot Number: {}", self.pilot_number)?;
        writeln!(f, "Team ID: {}", self.team_id)?;
        writeln!(f, "Available Seats: {}", self.available_seats)?;
        write!(f, "-------------------------")
    }
}

/// Accepts `HH:MM` and returns it normalized with leading zeros.
pub fn parse_time(time_str: &str) -> Result<String, FleetError> {
    let trimmed = time_str.trim();
    NaiveTime::parse_from_str(trimmed, TIME_FORMAT)
        .map(|time| time.format(TIME_FORMAT).to_string())
        .map_err(|_| FleetError::InvalidTimeFormat(trimmed.to_string()))
}

/// Text fields are persisted space-separated, so they must be a single non-empty word.
pub fn parse_token(field: &str, value: &str) -> Result<String, FleetError> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.contains(char::is_whitespace) {
        return Err(FleetError::InvalidInput(format!(
            "{} must be a single word, got '{}'",
            field, trimmed
        )));
    }
    Ok(trimmed.to_string())
}

fn parse_distance(distance: f64) -> Result<f64, FleetError> {
    if !distance.is_finite() {
        return Err(FleetError::InvalidInput(format!(
            "distance must be a number, got {}",
            distance
        )));
    }
    // Persisted with two decimals, so keep only what the file can hold
    Ok((distance * 100.0).round() / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_flight() -> Flight {
        Flight::new(101, "08:30", "11:45", "Madrid", 1250.5, 7, 3, 180).unwrap()
    }

    #[test]
    fn test_new_flight_keeps_fields() {
        let flight = sample_flight();
        assert_eq!(flight.flight_id, 101);
        assert_eq!(flight.departure_time, "08:30");
        assert_eq!(flight.arrival_time, "11:45");
        assert_eq!(flight.destination, "Madrid");
        assert_eq!(flight.pilot_number, 7);
        assert_eq!(flight.team_id, 3);
        assert_eq!(flight.available_seats, 180);
    }

    #[test]
    fn test_time_is_normalized() {
        let flight = Flight::new(1, "8:05", "9:00", "Lima", 10.0, 1, 1, 1).unwrap();
        assert_eq!(flight.departure_time, "08:05");
        assert_eq!(flight.arrival_time, "09:00");
    }

    #[test]
    fn test_invalid_time_is_rejected() {
        let result = Flight::new(1, "25:00", "09:00", "Lima", 10.0, 1, 1, 1);
        assert!(matches!(result, Err(FleetError::InvalidTimeFormat(_))));

        let result = Flight::new(1, "noon", "09:00", "Lima", 10.0, 1, 1, 1);
        assert!(matches!(result, Err(FleetError::InvalidTimeFormat(_))));
    }

    #[test]
    fn test_destination_with_spaces_is_rejected() {
        let result = Flight::new(1, "08:00", "09:00", "New York", 10.0, 1, 1, 1);
        assert!(matches!(result, Err(FleetError::InvalidInput(_))));

        let result = Flight::new(1, "08:00", "09:00", "   ", 10.0, 1, 1, 1);
        assert!(matches!(result, Err(FleetError::InvalidInput(_))));
    }

    #[test]
    fn test_apply_update_changes_only_mutable_fields() {
        let mut flight = sample_flight();
        flight
            .apply_update(FlightUpdate {
                departure_time: "10:00".to_string(),
                arrival_time: "12:15".to_string(),
                destination: "Paris".to_string(),
                distance: 980.0,
                available_seats: 12,
            })
            .unwrap();

        assert_eq!(flight.flight_id, 101);
        assert_eq!(flight.pilot_number, 7);
        assert_eq!(flight.team_id, 3);
        assert_eq!(flight.destination, "Paris");
        assert_eq!(flight.departure_time, "10:00");
        assert_eq!(flight.available_seats, 12);
    }

    #[test]
    fn test_failed_update_leaves_flight_untouched() {
        let mut flight = sample_flight();
        let result = flight.apply_update(FlightUpdate {
            departure_time: "10:00".to_string(),
            arrival_time: "bad".to_string(),
            destination: "Paris".to_string(),
            distance: 980.0,
            available_seats: 12,
        });

        assert!(result.is_err());
        assert_eq!(flight, sample_flight());
    }

    #[test]
    fn test_distance_is_kept_to_two_decimals() {
        let flight = Flight::new(1, "08:00", "09:00", "Lima", 314.159, 1, 1, 1).unwrap();
        assert_eq!(flight.distance, 314.16);

        let mut updated = flight.clone();
        updated
            .apply_update(FlightUpdate {
                departure_time: "08:00".to_string(),
                arrival_time: "09:00".to_string(),
                destination: "Lima".to_string(),
                distance: 12.004,
                available_seats: 1,
            })
            .unwrap();
        assert_eq!(updated.distance, 12.0);
    }

    #[test]
    fn test_display_lists_every_field() {
        let text = sample_flight().to_string();
        assert!(text.contains("Flight ID: 101"));
        assert!(text.contains("Distance: 1250.50 km"));
        assert!(text.contains("Pilot Number: 7"));
        assert!(text.contains("Team ID: 3"));
        assert!(text.contains("Available Seats: 180"));
    }
}
