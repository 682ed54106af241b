//! Application state shared across handlers.
//!
//! Requests are stateless; this is configuration plus the two directory
//! stores and the services built on them. Nothing here is mutated after
//! startup.

use pixup_core::Config;
use pixup_processing::{BatchEnhancer, UploadValidator};
use pixup_storage::DirStore;

/// Main application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Intake directory holding as-submitted files.
    pub intake: DirStore,
    /// Output directory holding enhanced files.
    pub output: DirStore,
    pub validator: UploadValidator,
    pub enhancer: BatchEnhancer,
}

fn _assert_app_state_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<AppState>();
    assert_sync::<AppState>();
}
