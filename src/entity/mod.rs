/// Entity types exchanged with the remote accounting service.
pub mod item;

/// Shared tax-type vocabulary referenced by entity tax fields.
pub mod tax;

pub use item::{Item, ItemBuilder, Violation};
