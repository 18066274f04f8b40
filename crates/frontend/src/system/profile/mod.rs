pub mod api;
pub mod context;
pub mod submit;
pub mod ui;
