mod observers;

pub use observers::{FnObserver, NarrativeEvent, NarrativeObserver, ObserverContext};
