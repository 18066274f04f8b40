pub mod error;
pub mod notification;

pub use error::SyncError;
pub use notification::NotificationKind;
