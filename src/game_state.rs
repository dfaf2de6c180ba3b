//! Indica si la partida esta en curso. Solo condiciona la generacion de pedidos.
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, OnceLock,
};

use log::info;

static GLOBAL_GATE: OnceLock<Arc<GameActivityGate>> = OnceLock::new();

pub struct GameActivityGate {
    playing: AtomicBool,
}

impl GameActivityGate {
    pub fn new() -> GameActivityGate {
        GameActivityGate {
            playing: AtomicBool::new(false),
        }
    }

    /// Instancia compartida por todo el proceso. Se crea en el primer acceso.
    pub fn global() -> Arc<GameActivityGate> {
        GLOBAL_GATE
            .get_or_init(|| Arc::new(GameActivityGate::new()))
            .clone()
    }

    pub fn start(&self) {
        self.playing.store(true, Ordering::SeqCst);
        info!("[GAME] Game started");
    }

    pub fn stop(&self) {
        self.playing.store(false, Ordering::SeqCst);
        info!("[GAME] Game stopped");
    }

    pub fn is_active(&self) -> bool {
        self.playing.load(Ordering::SeqCst)
    }
}

impl Default for GameActivityGate {
    fn default() -> Self {
        GameActivityGate::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_an_inactive_gate() {
        let gate = GameActivityGate::new();
        assert_eq!(false, gate.is_active());
    }

    #[test]
    fn should_start_and_stop_the_game() {
        let gate = GameActivityGate::new();
        gate.start();
        assert_eq!(true, gate.is_active());
        gate.stop();
        assert_eq!(false, gate.is_active());
    }

    #[test]
    fn should_return_the_same_global_gate() {
        let first = GameActivityGate::global();
        let second = GameActivityGate::global();
        assert_eq!(true, Arc::ptr_eq(&first, &second));
    }
}
