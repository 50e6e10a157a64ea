use std::fmt;
use std::io;

use logger::LoggerError;

/// Represents errors that can occur in the fleet manager application.
#[derive(Debug)]
pub enum FleetError {
    FlightTableFull,           // The flight table already holds MAX_FLIGHTS records
    HangarFull(u32),           // The plane queue rejected the plane with this id
    FlightNotFound(u32),       // No flight with this id
    InvalidInput(String),      // A field did not match its expected format
    InvalidTimeFormat(String), // Times are entered as HH:MM
    MalformedRecord(usize),    // Line number of a flight record that could not be parsed
    InvalidMonth(usize),       // Months go from 1 to 12
    IoError(io::Error),
    Logger(LoggerError),
}

impl fmt::Display for FleetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FleetError::FlightTableFull => {
                write!(f, "The flight table is full. Delete a flight before adding another one.")
            }
            FleetError::HangarFull(plane_id) => {
                write!(f, "Queue is full. Cannot add plane {}.", plane_id)
            }
            FleetError::FlightNotFound(flight_id) => write!(f, "Flight ID {} not found.", flight_id),
            FleetError::InvalidInput(ref msg) => {
                write!(f, "Invalid input: {}. Please check your input and try again.", msg)
            }
            FleetError::InvalidTimeFormat(ref time) => {
                write!(f, "Invalid time format (expected HH:MM): {}", time)
            }
            FleetError::MalformedRecord(line) => {
                write!(f, "Malformed flight record at line {}", line)
            }
            FleetError::InvalidMonth(month) => {
                write!(f, "Invalid month {} (expected 1 to 12)", month)
            }
            FleetError::IoError(e) => write!(f, "I/O Error: {}", e),
            FleetError::Logger(e) => write!(f, "Logger Error: {}", e),
        }
    }
}

impl std::error::Error for FleetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FleetError::IoError(e) => Some(e),
            FleetError::Logger(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for FleetError {
    fn from(error: io::Error) -> Self {
        FleetError::IoError(error)
    }
}

impl From<LoggerError> for FleetError {
    fn from(error: LoggerError) -> Self {
        FleetError::Logger(error)
    }
}
