use crate::error::Result;
use crate::flights::FlightRepository;
use crate::table;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "flights")]
#[command(about = "Flight registry")]
#[command(version)]
pub struct Cli {
    /// Database file
    #[arg(long, default_value = "airports.db", global = true)]
    pub db: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add an airport
    AddAirport {
        /// Airport code
        #[arg(long)]
        code: String,
        /// Airport name
        #[arg(long)]
        name: String,
        /// City
        #[arg(long)]
        city: String,
    },

    /// Add a flight
    AddFlight {
        /// Flight number
        #[arg(long)]
        number: String,
        /// Departure airport code
        #[arg(long)]
        departure: String,
        /// Arrival airport code
        #[arg(long)]
        arrival: String,
        /// Departure time (YYYY-MM-DD HH:MM)
        #[arg(long)]
        departure_time: String,
        /// Arrival time (YYYY-MM-DD HH:MM)
        #[arg(long)]
        arrival_time: String,
    },

    /// Show all flights
    ShowFlights,

    /// Show all airports
    ShowAirports,

    /// Show flights arriving at an airport
    SelectByDestination {
        /// Arrival airport code
        #[arg(long)]
        airport: String,
    },
}

pub fn run(cli: Cli) -> Result<()> {
    let repo = FlightRepository::open(&cli.db)?;

    match cli.command {
        Commands::AddAirport { code, name, city } => {
            repo.add_airport(&code, &name, &city)?;
            println!("Airport {code} added.");
        }
        Commands::AddFlight {
            number,
            departure,
            arrival,
            departure_time,
            arrival_time,
        } => {
            repo.add_flight(&number, &departure, &arrival, &departure_time, &arrival_time)?;
            println!("Flight {number} added.");
        }
        Commands::ShowFlights => {
            let flights = repo.get_all_flights()?;
            print!("{}", table::render_flights(&flights));
        }
        Commands::ShowAirports => {
            let airports = repo.get_all_airports()?;
            print!("{}", table::render_airports(&airports));
        }
        Commands::SelectByDestination { airport } => {
            let flights = repo.get_flights_by_destination(&airport)?;
            if flights.is_empty() {
                println!("No flights arriving at {airport} found.");
            } else {
                println!("Flights arriving at {airport}:");
                print!("{}", table::render_flights(&flights));
            }
        }
    }

    Ok(())
}
