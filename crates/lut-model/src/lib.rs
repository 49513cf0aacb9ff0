pub mod entry;
pub mod error;
pub mod table;

pub use entry::{CAVLC_NOT_APPLICABLE, Field, TableEntry};
pub use error::{LutError, Result};
pub use table::{CavlcMode, TableKind};
