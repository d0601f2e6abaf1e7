//! Order workflows: admin edit modal, cancel/refund inventory dialog

pub mod editor;
pub mod inventory_dialog;

pub use editor::{OrderEditError, OrderEditor};
pub use inventory_dialog::{DialogError, DialogMode, InventoryActionDialog};
