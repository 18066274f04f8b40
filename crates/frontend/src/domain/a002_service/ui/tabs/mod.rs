mod view;
mod view_model;

pub use view::ServicesPage;
pub use view_model::ServiceTabsViewModel;
