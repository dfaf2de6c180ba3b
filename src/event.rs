//! Evento observable. Cada tipo de notificacion tiene su propia instancia.
use std::{
    any::Any,
    panic::{self, AssertUnwindSafe},
    sync::{Arc, RwLock},
};

use log::error;

/// Funcion que atiende un evento. Recibe quien lo emitio y los datos del evento.
pub type Handler<S, P> = Arc<dyn Fn(&S, &P) + Send + Sync>;

/// Lista de suscriptores de un tipo de evento.
/// La publicacion es sincronica, en orden de suscripcion, en el hilo que publica.
pub struct Event<S, P> {
    handlers: RwLock<Vec<Handler<S, P>>>,
}

impl<S, P> Event<S, P> {
    pub fn new() -> Event<S, P> {
        Event {
            handlers: RwLock::new(Vec::new()),
        }
    }

    /// Registra el handler. Si ya estaba registrado no hace nada.
    pub fn subscribe(&self, handler: Handler<S, P>) {
        match self.handlers.write() {
            Ok(mut handlers) => {
                if !handlers.iter().any(|h| Arc::ptr_eq(h, &handler)) {
                    handlers.push(handler);
                }
            }
            Err(_) => error!("[EVENT] Error while taking the handlers lock to subscribe"),
        }
    }

    /// Quita el handler si estaba registrado.
    pub fn unsubscribe(&self, handler: &Handler<S, P>) {
        match self.handlers.write() {
            Ok(mut handlers) => handlers.retain(|h| !Arc::ptr_eq(h, handler)),
            Err(_) => error!("[EVENT] Error while taking the handlers lock to unsubscribe"),
        }
    }

    pub fn subscribers(&self) -> usize {
        self.handlers.read().map(|h| h.len()).unwrap_or(0)
    }

    /// Invoca a todos los handlers registrados. Si alguno falla se loguea
    /// y se sigue con los demas.
    pub fn publish(&self, sender: &S, payload: &P) {
        // Se copia la lista para que un handler pueda suscribirse o desuscribirse
        let handlers = match self.handlers.read() {
            Ok(handlers) => handlers.clone(),
            Err(_) => {
                error!("[EVENT] Error while taking the handlers lock to publish");
                return;
            }
        };

        for handler in handlers {
            let result = panic::catch_unwind(AssertUnwindSafe(|| handler(sender, payload)));
            if let Err(cause) = result {
                error!("[EVENT] Event handler error: {}", panic_message(&*cause));
            }
        }
    }
}

impl<S, P> Default for Event<S, P> {
    fn default() -> Self {
        Event::new()
    }
}

fn panic_message(cause: &(dyn Any + Send)) -> String {
    if let Some(message) = cause.downcast_ref::<&str>() {
        return message.to_string();
    }
    if let Some(message) = cause.downcast_ref::<String>() {
        return message.clone();
    }
    "unknown panic".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn recorder(log: &Arc<Mutex<Vec<String>>>, tag: &'static str) -> Handler<(), u32> {
        let log = log.clone();
        Arc::new(move |_: &(), payload: &u32| {
            log.lock().unwrap().push(format!("{}:{}", tag, payload));
        })
    }

    #[test]
    fn should_call_handlers_in_subscription_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let event: Event<(), u32> = Event::new();
        event.subscribe(recorder(&log, "a"));
        event.subscribe(recorder(&log, "b"));

        event.publish(&(), &7);

        assert_eq!(vec!["a:7", "b:7"], *log.lock().unwrap());
    }

    #[test]
    fn should_ignore_a_duplicated_subscription() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let event: Event<(), u32> = Event::new();
        let handler = recorder(&log, "a");
        event.subscribe(handler.clone());
        event.subscribe(handler);

        event.publish(&(), &1);

        assert_eq!(1, event.subscribers());
        assert_eq!(1, log.lock().unwrap().len());
    }

    #[test]
    fn should_not_call_an_unsubscribed_handler() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let event: Event<(), u32> = Event::new();
        let handler = recorder(&log, "a");
        event.subscribe(handler.clone());
        event.unsubscribe(&handler);
        event.unsubscribe(&handler);

        event.publish(&(), &1);

        assert_eq!(0, event.subscribers());
        assert_eq!(true, log.lock().unwrap().is_empty());
    }

    #[test]
    fn should_keep_dispatching_after_a_handler_panics() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let event: Event<(), u32> = Event::new();
        event.subscribe(Arc::new(|_: &(), _: &u32| panic!("broken handler")));
        event.subscribe(recorder(&log, "b"));

        event.publish(&(), &3);

        assert_eq!(vec!["b:3"], *log.lock().unwrap());
    }

    #[test]
    fn should_allow_a_handler_to_unsubscribe_while_dispatching() {
        let event: Arc<Event<(), u32>> = Arc::new(Event::new());
        let calls = Arc::new(Mutex::new(0));
        let handler_slot: Arc<Mutex<Option<Handler<(), u32>>>> = Arc::new(Mutex::new(None));

        let event_clone = event.clone();
        let calls_clone = calls.clone();
        let slot_clone = handler_slot.clone();
        let handler: Handler<(), u32> = Arc::new(move |_: &(), _: &u32| {
            *calls_clone.lock().unwrap() += 1;
            if let Some(me) = slot_clone.lock().unwrap().take() {
                event_clone.unsubscribe(&me);
            }
        });
        *handler_slot.lock().unwrap() = Some(handler.clone());
        event.subscribe(handler);

        event.publish(&(), &1);
        event.publish(&(), &2);

        assert_eq!(1, *calls.lock().unwrap());
        assert_eq!(0, event.subscribers());
    }
}
