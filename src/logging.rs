use tracing::{error, warn};

/// Logging capability handed to the validator and renderer.
///
/// Keeps the core free of any particular host logger. `TracingLog` is the
/// default implementation; hosts with their own log sink implement this trait.
pub trait ModuleLog {
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// Forwards messages to `tracing`, prefixed with the module name.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl ModuleLog for TracingLog {
    fn warn(&self, message: &str) {
        warn!("{}: {}", crate::MODULE_NAME, message);
    }

    fn error(&self, message: &str) {
        error!("{}: {}", crate::MODULE_NAME, message);
    }
}

impl<L: ModuleLog + ?Sized> ModuleLog for &L {
    fn warn(&self, message: &str) {
        (**self).warn(message);
    }

    fn error(&self, message: &str) {
        (**self).error(message);
    }
}
