//! Profile page
//!
//! - view_model.rs: edit form state and submission
//! - view.rs: profile card and edit modal

mod view;
mod view_model;

pub use view::ProfilePage;
pub use view_model::ProfileViewModel;
