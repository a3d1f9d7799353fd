//! Change-set model and application
//!
//! A change-set is an ordered batch of declarative change records. Records
//! are parsed into the closed [`Change`] type and then folded over a dataset
//! in a single pass by [`apply_changes`].

mod model;
mod apply;

pub use model::{Change, ChangeRecord, ChangeRecordError, ChangeSetDocument};
pub use apply::apply_changes;
