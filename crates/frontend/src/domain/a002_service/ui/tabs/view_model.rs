use contracts::domain::a002_service::{ServiceCatalog, ServiceTabs, ServiceTheme};
use leptos::prelude::*;

/// ViewModel for the service tabs
#[derive(Clone, Copy)]
pub struct ServiceTabsViewModel {
    pub tabs: RwSignal<ServiceTabs>,
    catalog: StoredValue<ServiceCatalog>,
}

impl ServiceTabsViewModel {
    pub fn new(catalog: ServiceCatalog) -> Self {
        Self {
            tabs: RwSignal::new(ServiceTabs::new(&catalog)),
            catalog: StoredValue::new(catalog),
        }
    }

    pub fn services(&self) -> Vec<ServiceTheme> {
        self.catalog.with_value(|c| c.services.clone())
    }

    pub fn active_theme(&self) -> ServiceTheme {
        let tabs = self.tabs.get();
        self.catalog.with_value(|c| tabs.active_theme(c).clone())
    }

    pub fn is_active(&self, slug: &str) -> bool {
        self.tabs.with(|t| t.is_active(slug))
    }

    /// Switch the form to another service; unknown names fall back to the
    /// default service.
    pub fn select_service(&self, name: &str) {
        let catalog = self.catalog;
        self.tabs.update(|tabs| {
            catalog.with_value(|c| {
                let theme = tabs.select(c, name);
                log::debug!(
                    "service '{}' selected (base rate {})",
                    theme.name,
                    theme.base_rate
                );
            });
        });
    }
}
