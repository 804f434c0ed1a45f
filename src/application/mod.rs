mod error;
mod sample;
mod service;

pub use error::AppError;
pub use sample::SAMPLE_LEDGER;
pub use service::LedgerService;
