//! Representacion de la cola de pedidos en espera
use std::collections::VecDeque;

use crate::recipe::{Plate, RecipeDefinition};

/// Pedido en espera. Dos pedidos de la misma receta son pedidos distintos, se diferencian por `id`.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingOrder {
    pub id: usize,
    pub recipe: RecipeDefinition,
}

impl PendingOrder {
    pub fn new(id: usize, recipe: RecipeDefinition) -> PendingOrder {
        PendingOrder { id, recipe }
    }
}

/// Cola de pedidos en espera con capacidad maxima.
/// Los pedidos se revisan en el orden en que fueron agregados.
pub struct PendingOrderQueue {
    orders: VecDeque<PendingOrder>,
    capacity: usize,
}

impl PendingOrderQueue {
    pub fn new(capacity: usize) -> PendingOrderQueue {
        PendingOrderQueue {
            orders: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Agrega el pedido al final. Si la cola esta llena lo devuelve.
    pub fn push(&mut self, order: PendingOrder) -> Result<(), PendingOrder> {
        if self.is_full() {
            return Err(order);
        }
        self.orders.push_back(order);
        Ok(())
    }

    /// Quita y devuelve el primer pedido que coincide con el plato.
    pub fn take_first_match(&mut self, plate: &Plate) -> Option<PendingOrder> {
        let position = self
            .orders
            .iter()
            .position(|order| order.recipe.is_satisfied_by(plate))?;
        self.orders.remove(position)
    }

    pub fn snapshot(&self) -> Vec<PendingOrder> {
        self.orders.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.orders.len() >= self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
