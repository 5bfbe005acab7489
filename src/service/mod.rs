pub mod classifier;
pub mod locator;
pub mod markers;
pub mod reconciler;
pub mod report;

pub use reconciler::{Outcome, reconcile};
