//! Service catalog and tab selection.

pub mod catalog;
pub mod tabs;

pub use catalog::{ChoiceOption, ServiceCatalog, ServiceTheme};
pub use tabs::ServiceTabs;
