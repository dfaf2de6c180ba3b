//! Parametros de configuracion del administrador de entregas

/// Tiempo (en segundos) entre intentos de generar un nuevo pedido
pub const SPAWN_RECIPE_TIMER_MAX: f64 = 4.0;

/// Cantidad maxima de pedidos que pueden estar esperando a ser entregados
pub const WAITING_RECIPES_MAX: usize = 4;
