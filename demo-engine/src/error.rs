use std::fmt;

#[derive(Debug)]
pub enum Error {
    EmptyCatalog,
    DuplicateId(String),
    EmptyField { id: String, field: &'static str },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyCatalog => write!(f, "catalog is empty"),
            Error::DuplicateId(id) => write!(f, "duplicate operation id: {}", id),
            Error::EmptyField { id, field } => {
                write!(f, "operation '{}': empty field '{}'", id, field)
            }
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
