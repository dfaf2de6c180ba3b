//! Configuracion del administrador de entregas
use serde::Deserialize;

use crate::{
    constants::{SPAWN_RECIPE_TIMER_MAX, WAITING_RECIPES_MAX},
    errors::DeliveryError,
};

/// Los campos que falten toman los valores de `constants`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DeliveryConfig {
    /// Segundos entre intentos de generar un pedido
    pub spawn_recipe_timer_max: f64,
    /// Cantidad maxima de pedidos en espera
    pub waiting_recipes_max: usize,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        DeliveryConfig {
            spawn_recipe_timer_max: SPAWN_RECIPE_TIMER_MAX,
            waiting_recipes_max: WAITING_RECIPES_MAX,
        }
    }
}

impl DeliveryConfig {
    pub fn validate(&self) -> Result<(), DeliveryError> {
        if !self.spawn_recipe_timer_max.is_finite() || self.spawn_recipe_timer_max <= 0.0 {
            return Err(DeliveryError::InvalidConfig(format!(
                "spawn_recipe_timer_max must be positive, got {}",
                self.spawn_recipe_timer_max
            )));
        }
        if self.waiting_recipes_max == 0 {
            return Err(DeliveryError::InvalidConfig(
                "waiting_recipes_max must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
