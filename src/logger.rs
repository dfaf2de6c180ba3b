use log::LevelFilter;
use simple_logger::SimpleLogger;

use crate::errors::DeliveryError;

/// Instala `simple_logger` con el nivel indicado. Solo puede hacerse una vez por proceso.
pub fn init_logger(level: LevelFilter) -> Result<(), DeliveryError> {
    SimpleLogger::new()
        .with_level(level)
        .init()
        .map_err(|_| DeliveryError::LoggerError)
}
