//! Order form with live pricing.
//!
//! Shared by the document order page and the services page; the pricing mode
//! and base rate are the only differences between the two.
//! - view_model.rs: control state and the derived price snapshot
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::PricingForm;
pub use view_model::PricingViewModel;
