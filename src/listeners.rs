use fnv::FnvHashMap;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Registration {
    target: web::EventTarget,
    closure: Closure<dyn FnMut(web::Event)>,
}

/// Event listeners owned by one mounted component.
///
/// Closures stay alive here until `remove_all` detaches them from their
/// targets.
#[derive(Default)]
pub struct ListenerSet {
    by_event: FnvHashMap<&'static str, Vec<Registration>>,
}

impl ListenerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `event` on `target`. Events that are not an `E`
    /// are ignored.
    pub fn add<E>(
        &mut self,
        target: &web::EventTarget,
        event: &'static str,
        mut handler: impl FnMut(E) + 'static,
    ) where
        E: JsCast + 'static,
    {
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            if let Ok(ev) = ev.dyn_into::<E>() {
                handler(ev);
            }
        }) as Box<dyn FnMut(web::Event)>);
        if let Err(e) =
            target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        {
            log::warn!("[listeners] could not add {}: {:?}", event, e);
            return;
        }
        self.by_event.entry(event).or_default().push(Registration {
            target: target.clone(),
            closure,
        });
    }

    pub fn len(&self) -> usize {
        self.by_event.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Detach and drop every registered closure.
    pub fn remove_all(&mut self) {
        for (event, registrations) in self.by_event.drain() {
            for r in registrations {
                _ = r.target.remove_event_listener_with_callback(
                    event,
                    r.closure.as_ref().unchecked_ref(),
                );
            }
        }
    }
}

impl Drop for ListenerSet {
    fn drop(&mut self) {
        self.remove_all();
    }
}
