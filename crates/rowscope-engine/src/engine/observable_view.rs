//! Current snapshot with automatic change notifications.
//!
//! Publishing is the only way to replace the snapshot, and publishing always
//! broadcasts. Callers cannot update the view without notifying.

use std::sync::Arc;

use tokio::sync::watch;

use crate::snapshot::ViewSnapshot;

/// Holds the latest snapshot and broadcasts every replacement.
///
/// `watch::Sender::send` is synchronous and needs no runtime, so the engine
/// stays single-threaded. Receivers always see the most recent snapshot.
pub struct ObservableView {
    current: Arc<ViewSnapshot>,
    tx: watch::Sender<Arc<ViewSnapshot>>,
    rx: watch::Receiver<Arc<ViewSnapshot>>,
}

impl ObservableView {
    /// Start with an initial snapshot.
    pub fn new(initial: ViewSnapshot) -> Self {
        let current = Arc::new(initial);
        let (tx, rx) = watch::channel(Arc::clone(&current));
        Self { current, tx, rx }
    }

    /// Replace the snapshot and broadcast it.
    pub fn publish(&mut self, snapshot: ViewSnapshot) {
        self.current = Arc::new(snapshot);
        let _ = self.tx.send(Arc::clone(&self.current));
    }

    /// The latest snapshot.
    pub fn current(&self) -> &ViewSnapshot {
        &self.current
    }

    /// Subscribe to snapshot changes.
    ///
    /// The receiver starts at the current snapshot. Clone it for more subscribers.
    pub fn subscribe(&self) -> watch::Receiver<Arc<ViewSnapshot>> {
        self.rx.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::projection::{project, ViewState};
    use crate::store::RecordStore;
    use rowscope_core::fixture::sample_records;
    use rowscope_core::PresentationMode;

    #[test]
    fn test_publish_broadcasts() {
        let store = RecordStore::new(sample_records(30)).unwrap();
        let mut state = ViewState::default();
        let mut view = ObservableView::new(project(&store, &state, 2));
        let mut rx = view.subscribe();

        assert_eq!(rx.borrow().visible_count, 10);
        assert!(!rx.has_changed().unwrap());

        state.mode.set_mode(PresentationMode::Continuous);
        view.publish(project(&store, &state, 2));

        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().visible_count, 30);
        assert_eq!(view.current().visible_count, 30);
    }
}
