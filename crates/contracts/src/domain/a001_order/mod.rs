//! Order hub: selection parsing, pricing, upload session and delivery estimate.

pub mod delivery;
pub mod pricing;
pub mod selection;
pub mod session;
pub mod upload;

pub use pricing::{recompute, PriceSnapshot, PricingInputs, PricingMode};
pub use selection::OrderSelection;
pub use session::{FileStatus, OrderSession, UploadTicket};
pub use upload::{UploadOutcome, UploadResponse};
