use std::fmt;

use super::fleet_error::FleetError;
use super::flight::parse_token;

/// A plane of the fleet. Planes are never modified once created.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    pub plane_id: u32,
    pub plane_type: String,
    pub airline: String,
    pub fleet_name: String,
    pub engine_type: String,
    pub capacity: u32,
    pub range: f64,
}

impl Plane {
    /// Creates a new plane. The type is free text; only exact category labels are counted.
    pub fn new(
        plane_id: u32,
        plane_type: &str,
        airline: &str,
        fleet_name: &str,
        engine_type: &str,
        capacity: u32,
        range: f64,
    ) -> Result<Self, FleetError> {
        if !range.is_finite() {
            return Err(FleetError::InvalidInput(format!(
                "range must be a number, got {}",
                range
            )));
        }

        Ok(Plane {
            plane_id,
            plane_type: parse_token("plane type", plane_type)?,
            airline: parse_token("airline", airline)?,
            fleet_name: parse_token("fleet name", fleet_name)?,
            engine_type: parse_token("engine type", engine_type)?,
            capacity,
            range,
        })
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Plane ID: {}", self.plane_id)?;
        writeln!(f, "Airline: {}", self.airline)?;
        writeln!(f, "Fleet Name: {}", self.fleet_name)?;
        writeln!(f, "Plane Type: {}", self.plane_type)?;
        writeln!(f, "Engine Type: {}", self.engine_type)?;
        writeln!(f, "Capacity: {}", self.capacity)?;
        writeln!(f, "Range: {:.2} km", self.range)?;
        write!(f, "-------------------------")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_plane() {
        let plane = Plane::new(1, "Jet", "Aerolineas", "Skyline", "Turbofan", 180, 5600.0).unwrap();
        assert_eq!(plane.plane_type, "Jet");
        assert_eq!(plane.capacity, 180);

        let text = plane.to_string();
        assert!(text.contains("Airline: Aerolineas"));
        assert!(text.contains("Range: 5600.00 km"));
    }

    #[test]
    fn test_unknown_type_is_accepted() {
        let plane = Plane::new(2, "Glider", "Club", "Wings", "None", 2, 300.0).unwrap();
        assert_eq!(plane.plane_type, "Glider");
    }

    #[test]
    fn test_invalid_fields_are_rejected() {
        assert!(Plane::new(3, "", "Club", "Wings", "None", 2, 300.0).is_err());
        assert!(Plane::new(3, "Jet", "Big Airline", "Wings", "None", 2, 300.0).is_err());
        assert!(Plane::new(3, "Jet", "Club", "Wings", "None", 2, f64::NAN).is_err());
    }
}
