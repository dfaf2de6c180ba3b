use std::fmt;

#[derive(Debug, PartialEq)]
pub enum DeliveryError {
    EmptyCatalog,
    MissingCatalog,
    RecipeIndexOutOfRange,
    UnknownIngredient(u32),
    InvalidConfig(String),
    FileReaderError(String),
    LockError,
    LoggerError,
}

impl<T> From<std::sync::PoisonError<T>> for DeliveryError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        DeliveryError::LockError
    }
}

impl fmt::Display for DeliveryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeliveryError::EmptyCatalog => write!(f, "recipe catalog has no recipes"),
            DeliveryError::MissingCatalog => {
                write!(f, "a recipe catalog is required for the first creation")
            }
            DeliveryError::RecipeIndexOutOfRange => {
                write!(f, "random source picked an index outside the catalog")
            }
            DeliveryError::UnknownIngredient(id) => write!(f, "unknown ingredient id {}", id),
            DeliveryError::InvalidConfig(reason) => write!(f, "invalid configuration: {}", reason),
            DeliveryError::FileReaderError(reason) => write!(f, "could not read catalog: {}", reason),
            DeliveryError::LockError => write!(f, "lock poisoned"),
            DeliveryError::LoggerError => write!(f, "logger already initialized"),
        }
    }
}

impl std::error::Error for DeliveryError {}
