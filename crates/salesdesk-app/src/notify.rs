//! Data change notifications for the presentation layer.

/// Registry of callbacks fired after a successful save or removal.
///
/// List views subscribe once at startup and refresh themselves whenever
/// a mutation goes through, so they never render stale rows.
#[derive(Default)]
pub struct ChangeNotifier {
    listeners: Vec<Box<dyn Fn() + Send + Sync>>,
}

impl ChangeNotifier {
    /// Creates an empty notifier.
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    /// Registers a listener invoked on every data change.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Invokes every registered listener in subscription order.
    pub fn notify_all(&self) {
        for listener in &self.listeners {
            listener();
        }
    }
}
