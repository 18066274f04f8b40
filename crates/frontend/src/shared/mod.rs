pub mod api_utils;
pub mod components;
pub mod config;
pub mod dom_binding;
pub mod icons;
pub mod modal;
pub mod toast;
