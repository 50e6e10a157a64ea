use rand::seq::SliceRandom;
use rand::Rng;

use super::fleet_error::FleetError;
use super::fleet_manager::FleetManager;
use super::flight::Flight;
use super::plane::Plane;
use super::plane_type::PlaneType;
use super::MAX_FLIGHTS;

const DESTINATIONS: [&str; 12] = [
    "Cordoba", "Rosario", "Mendoza", "Bariloche", "Ushuaia", "Salta", "Jujuy", "Tucuman",
    "Neuquen", "Corrientes", "Posadas", "Montevideo",
];

const AIRLINES: [&str; 4] = ["Aerolineas", "Austral", "Andes", "Flybondi"];

const FLEETS: [&str; 4] = ["Boeing737", "EmbraerE190", "AirbusA330", "ATR72"];

const ENGINES: [&str; 3] = ["Turbofan", "Turboprop", "Piston"];

/// How many records a call to `add_sample_data` created.
#[derive(Debug, Default, PartialEq)]
pub struct SampleSummary {
    pub flights: usize,
    pub planes: usize,
}

/// Adds up to `flights` random flights and `planes` random planes, never going past
/// the free room of the flight table or the hangar.
pub fn add_sample_data<R: Rng>(
    fleet: &mut FleetManager,
    rng: &mut R,
    flights: usize,
    planes: usize,
) -> Result<SampleSummary, FleetError> {
    let mut summary = SampleSummary::default();

    // New ids continue after the highest one; none are added once ids run out
    let mut next_flight_id = match fleet
        .flights()
        .flights()
        .iter()
        .map(|flight| flight.flight_id)
        .max()
    {
        Some(max) => max.checked_add(1),
        None => Some(1),
    };
    let free_flights = MAX_FLIGHTS - fleet.flights().count();

    for _ in 0..flights.min(free_flights) {
        let Some(flight_id) = next_flight_id else {
            break;
        };
        let flight = random_flight(rng, flight_id)?;
        fleet.create_flight(flight)?;
        summary.flights += 1;
        next_flight_id = flight_id.checked_add(1);
    }

    let free_planes = fleet.hangar().remaining();
    for _ in 0..planes.min(free_planes) {
        let plane = random_plane(rng)?;
        fleet.add_plane(plane)?;
        summary.planes += 1;
    }

    Ok(summary)
}

fn random_flight<R: Rng>(rng: &mut R, flight_id: u32) -> Result<Flight, FleetError> {
    let departure_hour = rng.gen_range(0..18);
    let duration_hours = rng.gen_range(1..=6); // Between 1 and 6 hours
    let departure = format!("{:02}:{:02}", departure_hour, rng.gen_range(0..60));
    let arrival = format!(
        "{:02}:{:02}",
        departure_hour + duration_hours,
        rng.gen_range(0..60)
    );
    let destination = DESTINATIONS.choose(rng).copied().unwrap_or("Cordoba");
    let distance = (rng.gen_range(30_000..300_000) as f64) / 100.0;

    Flight::new(
        flight_id,
        &departure,
        &arrival,
        destination,
        distance,
        rng.gen_range(1..500),
        rng.gen_range(1..50),
        rng.gen_range(0..=300),
    )
}

fn random_plane<R: Rng>(rng: &mut R) -> Result<Plane, FleetError> {
    let plane_type = PlaneType::ALL
        .choose(rng)
        .copied()
        .unwrap_or(PlaneType::Passenger);

    Plane::new(
        rng.gen_range(1000..10000),
        plane_type.as_str(),
        AIRLINES.choose(rng).copied().unwrap_or("Aerolineas"),
        FLEETS.choose(rng).copied().unwrap_or("Boeing737"),
        ENGINES.choose(rng).copied().unwrap_or("Turbofan"),
        rng.gen_range(2..400),
        rng.gen_range(500.0..15000.0),
    )
}
