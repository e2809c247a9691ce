//! Service layer
//!
//! Business operations behind every command. The session shell and the
//! one-shot commands are thin adapters over [`InventoryService`].

mod inventory;

pub use inventory::{InventoryError, InventoryService};
