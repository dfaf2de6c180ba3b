//! Administrador de entregas de recetas.
//!
//! Genera pedidos de recetas cada cierto tiempo, los mantiene en una cola con
//! capacidad maxima y evalua si un plato entregado satisface alguno. Informa lo
//! que ocurre mediante eventos: pedido generado, entrega completada, entrega
//! exitosa y entrega fallida.

pub mod catalog;
pub mod catalog_reader;
pub mod clock;
pub mod config;
pub mod constants;
pub mod delivery_manager;
pub mod errors;
pub mod event;
pub mod game_state;
pub mod logger;
pub mod orders_queue;
pub mod random;
pub mod recipe;
pub mod shared;
