//! Administrador de entregas. Genera pedidos cada cierto tiempo y decide si
//! un plato entregado corresponde a alguno de los pedidos en espera.
use std::sync::Arc;

use log::{debug, error, info, warn};

use crate::{
    catalog::RecipeCatalog,
    clock::ClockSource,
    config::DeliveryConfig,
    errors::DeliveryError,
    event::{Event, Handler},
    game_state::GameActivityGate,
    orders_queue::{PendingOrder, PendingOrderQueue},
    random::RandomChoiceSource,
    recipe::Plate,
};

/// Se genero un nuevo pedido y ya esta en la cola.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeSpawned {
    pub order: PendingOrder,
}

/// Se entrego un plato que coincide con el pedido, que ya salio de la cola.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDelivered {
    pub order: PendingOrder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    MissingPlate,
    EmptyPlate,
    NoWaitingRecipes,
    NoMatchingRecipe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryFailed {
    pub reason: FailureReason,
}

pub type DeliveryHandler<P> = Handler<DeliveryManager, P>;

/// Es dueño del temporizador, la cola de pedidos en espera y el contador de entregas exitosas.
///
/// Los handlers de los eventos reciben al administrador como emisor. No deben volver a
/// llamar a `update` o `deliver` del mismo administrador mientras se ejecutan: si el
/// administrador esta detras de un `Mutex` eso bloquearia al hilo.
pub struct DeliveryManager {
    catalog: RecipeCatalog,
    gate: Arc<GameActivityGate>,
    clock: Box<dyn ClockSource + Send>,
    random: Box<dyn RandomChoiceSource + Send>,
    config: DeliveryConfig,
    waiting_orders: PendingOrderQueue,
    spawn_recipe_timer: f64,
    last_update_time: Option<f64>,
    successful_recipes_amount: u64,
    next_order_id: usize,
    on_recipe_spawned: Event<DeliveryManager, RecipeSpawned>,
    on_recipe_completed: Event<DeliveryManager, RecipeDelivered>,
    on_recipe_success: Event<DeliveryManager, RecipeDelivered>,
    on_recipe_failed: Event<DeliveryManager, DeliveryFailed>,
}

impl DeliveryManager {
    pub fn new(
        catalog: RecipeCatalog,
        gate: Arc<GameActivityGate>,
        clock: Box<dyn ClockSource + Send>,
        random: Box<dyn RandomChoiceSource + Send>,
    ) -> DeliveryManager {
        let config = DeliveryConfig::default();
        DeliveryManager {
            catalog,
            gate,
            clock,
            random,
            waiting_orders: PendingOrderQueue::new(config.waiting_recipes_max),
            spawn_recipe_timer: config.spawn_recipe_timer_max,
            config,
            last_update_time: None,
            successful_recipes_amount: 0,
            next_order_id: 1,
            on_recipe_spawned: Event::new(),
            on_recipe_completed: Event::new(),
            on_recipe_success: Event::new(),
            on_recipe_failed: Event::new(),
        }
    }

    pub fn with_config(
        catalog: RecipeCatalog,
        gate: Arc<GameActivityGate>,
        clock: Box<dyn ClockSource + Send>,
        random: Box<dyn RandomChoiceSource + Send>,
        config: DeliveryConfig,
    ) -> Result<DeliveryManager, DeliveryError> {
        config.validate()?;
        let mut manager = DeliveryManager::new(catalog, gate, clock, random);
        manager.waiting_orders = PendingOrderQueue::new(config.waiting_recipes_max);
        manager.spawn_recipe_timer = config.spawn_recipe_timer_max;
        manager.config = config;
        Ok(manager)
    }

    /// Avanza el temporizador con el instante leido del reloj inyectado.
    pub fn tick(&mut self) {
        let now = self.clock.now();
        self.update(now);
    }

    /// Avanza el temporizador hasta `now` y, si vence, intenta generar un pedido.
    ///
    /// El primer llamado solo registra el instante de referencia. Si `now` es anterior
    /// al ultimo instante el tiempo transcurrido se toma como cero.
    /// Al vencer, el temporizador vuelve a su maximo se genere o no el pedido, asi que
    /// un `now` muy adelantado produce a lo sumo un pedido.
    pub fn update(&mut self, now: f64) {
        let last_update_time = match self.last_update_time.replace(now) {
            Some(last_update_time) => last_update_time,
            None => return,
        };
        let delta = (now - last_update_time).max(0.0);
        self.spawn_recipe_timer -= delta;

        if self.spawn_recipe_timer > 0.0 {
            return;
        }
        self.spawn_recipe_timer = self.config.spawn_recipe_timer_max;
        self.spawn_recipe();
    }

    fn spawn_recipe(&mut self) {
        if !self.gate.is_active() {
            debug!("[DELIVERY] Game is not being played, skipping recipe spawn");
            return;
        }
        if self.waiting_orders.is_full() {
            debug!(
                "[DELIVERY] {} recipes already waiting, skipping recipe spawn",
                self.waiting_orders.len()
            );
            return;
        }

        let recipe = match self.catalog.pick_random(self.random.as_mut()) {
            Ok(recipe) => recipe.clone(),
            Err(err) => {
                error!("[DELIVERY] Could not pick a recipe to spawn: {}", err);
                return;
            }
        };
        let order = PendingOrder::new(self.next_order_id, recipe);
        self.next_order_id += 1;

        if let Err(order) = self.waiting_orders.push(order.clone()) {
            error!("[DELIVERY] Queue rejected order {}", order.id);
            return;
        }
        debug!(
            "[DELIVERY] Spawned order {} for {}",
            order.id, order.recipe.name
        );
        self.on_recipe_spawned.publish(self, &RecipeSpawned { order });
    }

    /// Busca, en orden de llegada, el primer pedido con los mismos ingredientes que el
    /// plato. Si lo encuentra lo quita de la cola y emite `completed` y luego `success`.
    /// En cualquier otro caso emite `failed` y no modifica nada.
    pub fn deliver(&mut self, plate: Option<&Plate>) {
        let plate = match plate {
            Some(plate) => plate,
            None => {
                warn!("[DELIVERY] Attempted to deliver a missing plate");
                return self.fail(FailureReason::MissingPlate);
            }
        };
        if plate.is_empty() {
            warn!("[DELIVERY] Attempted to deliver an empty plate");
            return self.fail(FailureReason::EmptyPlate);
        }
        if self.waiting_orders.is_empty() {
            warn!("[DELIVERY] No waiting recipes to deliver");
            return self.fail(FailureReason::NoWaitingRecipes);
        }

        match self.waiting_orders.take_first_match(plate) {
            Some(order) => {
                self.successful_recipes_amount += 1;
                info!(
                    "[DELIVERY] Recipe delivered successfully: {} (order {})",
                    order.recipe.name, order.id
                );
                let delivered = RecipeDelivered { order };
                self.on_recipe_completed.publish(self, &delivered);
                self.on_recipe_success.publish(self, &delivered);
            }
            None => {
                info!("[DELIVERY] No matching recipe found for delivery");
                self.fail(FailureReason::NoMatchingRecipe);
            }
        }
    }

    pub fn deliver_plate(&mut self, plate: &Plate) {
        self.deliver(Some(plate));
    }

    fn fail(&self, reason: FailureReason) {
        self.on_recipe_failed
            .publish(self, &DeliveryFailed { reason });
    }

    /// Copia de los pedidos en espera. Modificarla no afecta a la cola.
    pub fn get_waiting_orders(&self) -> Vec<PendingOrder> {
        self.waiting_orders.snapshot()
    }

    pub fn get_success_count(&self) -> u64 {
        self.successful_recipes_amount
    }

    pub fn spawn_timer(&self) -> f64 {
        self.spawn_recipe_timer
    }

    pub fn config(&self) -> &DeliveryConfig {
        &self.config
    }

    pub fn catalog(&self) -> &RecipeCatalog {
        &self.catalog
    }

    pub fn on_recipe_spawned(&self) -> &Event<DeliveryManager, RecipeSpawned> {
        &self.on_recipe_spawned
    }

    pub fn on_recipe_completed(&self) -> &Event<DeliveryManager, RecipeDelivered> {
        &self.on_recipe_completed
    }

    pub fn on_recipe_success(&self) -> &Event<DeliveryManager, RecipeDelivered> {
        &self.on_recipe_success
    }

    pub fn on_recipe_failed(&self) -> &Event<DeliveryManager, DeliveryFailed> {
        &self.on_recipe_failed
    }
}
