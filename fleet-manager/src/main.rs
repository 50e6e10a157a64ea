use std::env;
use std::io::{self, ErrorKind, Write};
use std::str::FromStr;

use fleet_manager::types::config::Config;
use fleet_manager::types::flight::{Flight, FlightUpdate};
use fleet_manager::types::plane::Plane;
use fleet_manager::types::sample_data::add_sample_data;
use fleet_manager::types::MONTHS;
use fleet_manager::{FleetError, FleetManager};

const SAMPLE_FLIGHTS: usize = 10;
const SAMPLE_PLANES: usize = 20;

fn create_flight(fleet: &mut FleetManager) -> Result<(), FleetError> {
    let flight_id = prompt_parsed("Enter Flight ID: ", "flight ID")?;
    let departure_time = prompt_input("Enter Departure Time (HH:MM): ")?;
    let arrival_time = prompt_input("Enter Arrival Time (HH:MM): ")?;
    let destination = prompt_input("Enter Destination: ")?;
    let distance = prompt_parsed("Enter Distance (in km): ", "distance")?;
    let pilot_number = prompt_parsed("Enter Pilot Number: ", "pilot number")?;
    let team_id = prompt_parsed("Enter Team ID: ", "team ID")?;
    let available_seats = prompt_parsed("Enter Available Seats: ", "available seats")?;

    let flight = Flight::new(
        flight_id,
        &departure_time,
        &arrival_time,
        &destination,
        distance,
        pilot_number,
        team_id,
        available_seats,
    )?;
    fleet.create_flight(flight)
}

fn update_flight(fleet: &mut FleetManager) -> Result<(), FleetError> {
    let flight_id = prompt_parsed("Enter Flight ID to update: ", "flight ID")?;
    if fleet.flights().get(flight_id).is_none() {
        return Err(FleetError::FlightNotFound(flight_id));
    }

    let update = FlightUpdate {
        departure_time: prompt_input("Enter New Departure Time (HH:MM): ")?,
        arrival_time: prompt_input("Enter New Arrival Time (HH:MM): ")?,
        destination: prompt_input("Enter New Destination: ")?,
        distance: prompt_parsed("Enter New Distance (in km): ", "distance")?,
        available_seats: prompt_parsed("Enter New Available Seats: ", "available seats")?,
    };
    fleet.update_flight(flight_id, update)
}

fn delete_flight(fleet: &mut FleetManager) -> Result<(), FleetError> {
    let flight_id = prompt_parsed("Enter Flight ID to delete: ", "flight ID")?;
    fleet.delete_flight(flight_id)?;
    Ok(())
}

fn create_plane(fleet: &mut FleetManager) -> Result<(), FleetError> {
    let plane_id = prompt_parsed("Enter Plane ID: ", "plane ID")?;
    let airline = prompt_input("Enter Airline Name: ")?;
    let fleet_name = prompt_input("Enter Fleet Name: ")?;
    let plane_type =
        prompt_input("Enter Plane Type (Jet, Propeller, Cargo, Military, Passenger): ")?;
    let engine_type = prompt_input("Enter Engine Type: ")?;
    let capacity = prompt_parsed("Enter Capacity: ", "capacity")?;
    let range = prompt_parsed("Enter Range (in km): ", "range")?;

    let plane = Plane::new(
        plane_id,
        &plane_type,
        &airline,
        &fleet_name,
        &engine_type,
        capacity,
        range,
    )?;
    fleet.add_plane(plane)
}

fn count_planes(fleet: &mut FleetManager) -> Result<(), FleetError> {
    let tally = fleet.count_planes_by_type()?;
    print!("{}", tally);
    Ok(())
}

fn enter_revenues(fleet: &mut FleetManager) -> Result<(), FleetError> {
    println!("\nEnter Revenues and Expenses for {} months:", MONTHS);
    for month in 1..=MONTHS {
        let revenue = prompt_parsed(&format!("Month {} Revenue: ", month), "revenue")?;
        let expense = prompt_parsed(&format!("Month {} Expense: ", month), "expense")?;
        fleet.record_month(month, revenue, expense)?;
    }
    Ok(())
}

fn add_sample(fleet: &mut FleetManager) -> Result<(), FleetError> {
    let mut rng = rand::thread_rng();
    let summary = add_sample_data(fleet, &mut rng, SAMPLE_FLIGHTS, SAMPLE_PLANES)?;
    println!(
        "Sample data added: {} flights, {} planes.",
        summary.flights, summary.planes
    );
    Ok(())
}

fn main() -> Result<(), String> {
    let args: Vec<String> = env::args().collect();
    let config = Config::from_args(&args)?;

    let mut fleet = FleetManager::new(&config, true).map_err(|e| e.to_string())?;
    if let Err(e) = fleet.load_flights() {
        eprintln!("{}", e);
    }

    let mut stdout = io::stdout();

    loop {
        print_menu();
        let choice = match prompt_input("Enter your choice: ") {
            Ok(choice) => choice,
            Err(FleetError::IoError(e)) if e.kind() == ErrorKind::UnexpectedEof => break,
            Err(e) => {
                eprintln!("{}", e);
                break;
            }
        };

        let result = match choice.as_str() {
            "1" => create_flight(&mut fleet),
            "2" => update_flight(&mut fleet),
            "3" => delete_flight(&mut fleet),
            "4" => fleet.show_flights(&mut stdout),
            "5" => create_plane(&mut fleet),
            "6" => fleet.show_planes(&mut stdout),
            "7" => count_planes(&mut fleet),
            "8" => enter_revenues(&mut fleet),
            "9" => fleet.show_profits(&mut stdout),
            "10" => {
                if fleet.save_flights().is_ok() {
                    println!("Exiting program.");
                    break;
                }
                continue;
            }
            "11" => add_sample(&mut fleet),
            "h" | "-h" | "help" => {
                print_help();
                Ok(())
            }
            "" => continue,
            _ => {
                eprintln!("Invalid choice. Please try again.");
                Ok(())
            }
        };

        match result {
            Ok(()) => {}
            Err(FleetError::IoError(e)) if e.kind() == ErrorKind::UnexpectedEof => break,
            Err(e) => eprintln!("{}", e),
        }
    }

    Ok(())
}

fn prompt_input(prompt: &str) -> Result<String, FleetError> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Err(FleetError::IoError(io::Error::new(
            ErrorKind::UnexpectedEof,
            "standard input closed",
        )));
    }
    Ok(input.trim().to_string())
}

fn prompt_parsed<T: FromStr>(prompt: &str, field: &str) -> Result<T, FleetError> {
    let input = prompt_input(prompt)?;
    input
        .parse()
        .map_err(|_| FleetError::InvalidInput(format!("'{}' is not a valid {}", input, field)))
}

fn print_menu() {
    println!("\nFlight Management System");
    println!("1. Create New Flight");
    println!("2. Update Flight Data");
    println!("3. Delete a Flight");
    println!("4. Show Flight Details");
    println!("5. Create a New Plane");
    println!("6. Show Plane Details");
    println!("7. Count Planes by Type");
    println!("8. Enter Revenues and Expenses");
    println!("9. Display Monthly Profits");
    println!("10. Save and Exit");
    println!("11. Add Sample Data");
}

fn print_help() {
    println!("Available options:");
    println!("  1-4");
    println!("    Create, update, delete and list flights. Up to 100 flights are kept.");
    println!("  5-7");
    println!("    Add planes, list them and count them by type. Planes are not saved.");
    println!("  8-9");
    println!("    Enter monthly revenues and expenses, then show the profit of each month.");
    println!("  10");
    println!("    Saves the flights to disk and closes this application.");
    println!("  11");
    println!("    Adds {} random flights and {} random planes.", SAMPLE_FLIGHTS, SAMPLE_PLANES);
    println!("Usage: fleet-manager [flights_file] [log_dir]");
}
