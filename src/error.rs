use rusqlite::ffi;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("{entity} with key '{key}' already exists")]
    UniquenessViolation { entity: &'static str, key: String },

    #[error("{entity} '{key}' references a row that does not exist")]
    ReferentialIntegrity { entity: &'static str, key: String },

    #[error("invalid timestamp '{value}', expected YYYY-MM-DD HH:MM")]
    InvalidTimestamp { value: String },

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RegistryError {
    /// Classify an insert failure by SQLite extended result code.
    /// Constraint failures become domain errors; anything else stays `Db`.
    pub(crate) fn from_insert(err: rusqlite::Error, entity: &'static str, key: &str) -> Self {
        if let rusqlite::Error::SqliteFailure(code, _) = &err {
            match code.extended_code {
                ffi::SQLITE_CONSTRAINT_PRIMARYKEY | ffi::SQLITE_CONSTRAINT_UNIQUE => {
                    return RegistryError::UniquenessViolation {
                        entity,
                        key: key.to_owned(),
                    };
                }
                ffi::SQLITE_CONSTRAINT_FOREIGNKEY => {
                    return RegistryError::ReferentialIntegrity {
                        entity,
                        key: key.to_owned(),
                    };
                }
                _ => {}
            }
        }
        RegistryError::Db(err)
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;
