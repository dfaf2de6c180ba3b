//! Fuentes de aleatoriedad para elegir que receta pedir
use rand::{rngs::StdRng, thread_rng, Rng, SeedableRng};

/// Elige un indice en `0..len`. Solo se llama con `len > 0`.
pub trait RandomChoiceSource {
    fn choose_index(&mut self, len: usize) -> usize;
}

/// Usa el generador del hilo actual.
#[derive(Default)]
pub struct ThreadRandom;

impl RandomChoiceSource for ThreadRandom {
    fn choose_index(&mut self, len: usize) -> usize {
        thread_rng().gen_range(0, len)
    }
}

/// Generador con semilla, para obtener siempre la misma secuencia.
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> SeededRandom {
        SeededRandom {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomChoiceSource for SeededRandom {
    fn choose_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0, len)
    }
}
