//! View coordination module.

mod coordinator;

pub use coordinator::{DraftSelection, ViewCoordinator};
