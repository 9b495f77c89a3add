pub mod calendar;
pub mod config;
pub mod edit;
pub mod extract;
pub mod hours;
pub mod log;
pub mod period;
pub mod reconcile;
pub mod show;
pub mod state;

pub use reconcile::{ReconcilePolicy, Reconciliation, reconcile};
pub use state::AppState;
