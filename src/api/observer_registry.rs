use tracing::warn;

use crate::error::{RigError, RigResult};
use crate::extensions::NarrativeObserver;
use crate::render::Renderer;

use super::NarrativeEngine;

impl<R: Renderer> NarrativeEngine<R> {
    /// Registers an observer with a unique identifier.
    ///
    /// Observers are notified in registration order.
    pub fn register_observer(&mut self, observer: Box<dyn NarrativeObserver>) -> RigResult<()> {
        let observer_id = observer.id().to_owned();
        if observer_id.is_empty() {
            return Err(RigError::InvalidConfig(
                "observer id must not be empty".to_owned(),
            ));
        }
        if self.core.runtime.observers.contains_key(&observer_id) {
            warn!(observer_id = %observer_id, "observer id collision");
            return Err(RigError::InvalidConfig(format!(
                "observer with id `{observer_id}` is already registered"
            )));
        }
        self.core.runtime.observers.insert(observer_id, observer);
        Ok(())
    }

    /// Unregisters an observer by id. Returns `true` when removed.
    pub fn unregister_observer(&mut self, observer_id: &str) -> bool {
        self.core
            .runtime
            .observers
            .shift_remove(observer_id)
            .is_some()
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.core.runtime.observers.len()
    }

    #[must_use]
    pub fn has_observer(&self, observer_id: &str) -> bool {
        self.core.runtime.observers.contains_key(observer_id)
    }
}
