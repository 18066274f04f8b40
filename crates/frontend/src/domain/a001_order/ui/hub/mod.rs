//! Document order page
//!
//! MVVM pattern implementation:
//! - model.rs: page-count analysis request
//! - view_model.rs: upload flow against the order session
//! - view.rs: Leptos component (pure UI)

mod model;
mod view;
mod view_model;

pub use view::OrderHub;
pub use view_model::OrderHubViewModel;
