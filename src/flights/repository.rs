use crate::error::{RegistryError, Result};
use crate::flights::models::{Airport, Flight};
use crate::flights::TIME_FORMAT;
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, Row};
use std::path::{Path, PathBuf};

/// Repository for the flight registry.
///
/// Same discipline as the staff repository: only the path is held,
/// each operation opens and closes its own connection. Foreign keys
/// are enforced, so a flight referencing an unknown airport code is
/// rejected.
pub struct FlightRepository {
    db_path: PathBuf,
}

impl FlightRepository {
    /// Open the repository and make sure the schema exists.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = FlightRepository {
            db_path: path.as_ref().to_path_buf(),
        };
        repo.ensure_schema()?;
        Ok(repo)
    }

    fn connect(&self) -> Result<Connection> {
        let conn = Connection::open(&self.db_path)?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        Ok(conn)
    }

    /// Create the `airports` and `flights` tables if absent.
    pub fn ensure_schema(&self) -> Result<()> {
        let conn = self.connect()?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS airports (
                code TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                city TEXT NOT NULL
            )",
            [],
        )?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS flights (
                number TEXT PRIMARY KEY,
                departure_airport TEXT NOT NULL REFERENCES airports(code),
                arrival_airport TEXT NOT NULL REFERENCES airports(code),
                departure_time TEXT NOT NULL,
                arrival_time TEXT NOT NULL
            )",
            [],
        )?;

        Ok(())
    }

    /// Insert an airport. A duplicate code is a uniqueness violation.
    pub fn add_airport(&self, code: &str, name: &str, city: &str) -> Result<()> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO airports (code, name, city) VALUES (?1, ?2, ?3)",
            params![code, name, city],
        )
        .map_err(|e| RegistryError::from_insert(e, "airport", code))?;

        tracing::debug!(code, name, city, "airport added");
        Ok(())
    }

    /// Insert a flight. Both timestamps are parsed up front, so a
    /// malformed string fails before anything touches the database.
    pub fn add_flight(
        &self,
        number: &str,
        departure_airport: &str,
        arrival_airport: &str,
        departure_time: &str,
        arrival_time: &str,
    ) -> Result<()> {
        let departure = parse_time(departure_time)?;
        let arrival = parse_time(arrival_time)?;

        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO flights (
                number, departure_airport, arrival_airport,
                departure_time, arrival_time
            )
            VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                number,
                departure_airport,
                arrival_airport,
                departure.format(TIME_FORMAT).to_string(),
                arrival.format(TIME_FORMAT).to_string(),
            ],
        )
        .map_err(|e| RegistryError::from_insert(e, "flight", number))?;

        tracing::debug!(number, departure_airport, arrival_airport, "flight added");
        Ok(())
    }

    pub fn get_all_flights(&self) -> Result<Vec<Flight>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT number, departure_airport, arrival_airport,
                    departure_time, arrival_time
             FROM flights",
        )?;

        let flights = stmt.query_map([], flight_from_row)?;
        flights
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Into::into)
    }

    /// Flights arriving at the given airport code. An unknown code is
    /// not an error, just an empty result.
    pub fn get_flights_by_destination(&self, airport_code: &str) -> Result<Vec<Flight>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT number, departure_airport, arrival_airport,
                    departure_time, arrival_time
             FROM flights
             WHERE arrival_airport = ?1",
        )?;

        let flights = stmt.query_map([airport_code], flight_from_row)?;
        flights
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Into::into)
    }

    pub fn get_all_airports(&self) -> Result<Vec<Airport>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare("SELECT code, name, city FROM airports")?;

        let airports = stmt.query_map([], |row| {
            Ok(Airport {
                code: row.get(0)?,
                name: row.get(1)?,
                city: row.get(2)?,
            })
        })?;
        airports
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Into::into)
    }
}

/// Parse a timestamp in the registry's fixed `YYYY-MM-DD HH:MM` format.
pub fn parse_time(value: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, TIME_FORMAT).map_err(|_| {
        RegistryError::InvalidTimestamp {
            value: value.to_owned(),
        }
    })
}

fn flight_from_row(row: &Row) -> std::result::Result<Flight, rusqlite::Error> {
    let departure: String = row.get(3)?;
    let arrival: String = row.get(4)?;

    Ok(Flight {
        number: row.get(0)?,
        departure_airport: row.get(1)?,
        arrival_airport: row.get(2)?,
        departure_time: time_from_column(3, departure)?,
        arrival_time: time_from_column(4, arrival)?,
    })
}

fn time_from_column(
    index: usize,
    value: String,
) -> std::result::Result<NaiveDateTime, rusqlite::Error> {
    NaiveDateTime::parse_from_str(&value, TIME_FORMAT).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(index, rusqlite::types::Type::Text, Box::new(e))
    })
}
