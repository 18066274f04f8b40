pub mod hub;
pub mod pricing;
