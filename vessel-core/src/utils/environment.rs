use std::sync::Arc;

/// A logger type which is called with various information messages.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of the environment specific settings which are passed through the pipeline
/// instead of living in a global state.
#[derive(Clone)]
pub struct Environment {
    /// An information logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates a new instance of `Environment` with given logger.
    pub fn new(logger: InfoLogger) -> Self {
        Self { logger }
    }

    /// Creates a new instance of `Environment` which swallows all messages.
    pub fn new_silent() -> Self {
        Self { logger: Arc::new(|_| {}) }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self { logger: Arc::new(|msg| println!("{msg}")) }
    }
}
