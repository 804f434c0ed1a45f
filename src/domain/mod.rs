mod date;
mod entry;
mod ledger;
mod money;

pub use date::*;
pub use entry::*;
pub use ledger::*;
pub use money::*;
