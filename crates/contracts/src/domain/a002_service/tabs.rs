use super::catalog::{ServiceCatalog, ServiceTheme};
use serde::{Deserialize, Serialize};

/// Which service tab is active. Holding a single slug keeps exactly one tab
/// active at any time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceTabs {
    active: String,
}

impl ServiceTabs {
    /// Start on the first service of the catalog
    pub fn new(catalog: &ServiceCatalog) -> Self {
        let first = catalog
            .services
            .first()
            .unwrap_or_else(|| catalog.default_theme());
        Self {
            active: first.slug.clone(),
        }
    }

    pub fn active_slug(&self) -> &str {
        &self.active
    }

    pub fn is_active(&self, slug: &str) -> bool {
        self.active == slug
    }

    pub fn active_theme<'a>(&self, catalog: &'a ServiceCatalog) -> &'a ServiceTheme {
        catalog
            .by_slug(&self.active)
            .unwrap_or_else(|| catalog.default_theme())
    }

    /// Activate the service called `name` (or the default service when the
    /// name is unknown) and return its theme.
    pub fn select<'a>(&mut self, catalog: &'a ServiceCatalog, name: &str) -> &'a ServiceTheme {
        let theme = catalog.lookup(name);
        self.active = theme.slug.clone();
        theme
    }
}
