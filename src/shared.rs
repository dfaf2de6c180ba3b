//! Administrador de entregas compartido por todo el proceso, para cuando varias
//! partes del programa necesitan llegar a la misma instancia.
use std::sync::{Arc, Mutex};

use log::info;

use crate::{
    catalog::RecipeCatalog, clock::SystemClock, delivery_manager::DeliveryManager,
    errors::DeliveryError, game_state::GameActivityGate, random::ThreadRandom,
};

/// Cada llamado a `update` o `deliver` se hace con el lock tomado.
pub type SharedDeliveryManager = Arc<Mutex<DeliveryManager>>;

static INSTANCE: Mutex<Option<SharedDeliveryManager>> = Mutex::new(None);

/// Devuelve la instancia compartida. La primera vez la crea con el catalogo recibido,
/// el estado de juego global, el reloj del sistema y el generador del hilo.
pub fn get_instance(
    catalog: Option<RecipeCatalog>,
) -> Result<SharedDeliveryManager, DeliveryError> {
    let mut instance = INSTANCE.lock()?;
    if let Some(manager) = instance.as_ref() {
        return Ok(manager.clone());
    }

    let catalog = catalog.ok_or(DeliveryError::MissingCatalog)?;
    let manager = Arc::new(Mutex::new(DeliveryManager::new(
        catalog,
        GameActivityGate::global(),
        Box::new(SystemClock::new()),
        Box::new(ThreadRandom),
    )));
    info!("[DELIVERY] Shared delivery manager created");
    *instance = Some(manager.clone());
    Ok(manager)
}

/// Descarta la instancia compartida. La proxima llamada a `get_instance` crea otra.
pub fn reset_instance() -> Result<(), DeliveryError> {
    *INSTANCE.lock()? = None;
    Ok(())
}
