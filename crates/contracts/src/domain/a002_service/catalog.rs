use crate::domain::a001_order::PricingMode;
use anyhow::{bail, ensure};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Catalog shipped with the client
const DEFAULT_CATALOG: &str = include_str!("service_catalog.toml");

static BUILTIN: Lazy<ServiceCatalog> = Lazy::new(|| {
    ServiceCatalog::from_toml_str(DEFAULT_CATALOG).expect("embedded service catalog is valid")
});

// ============================================================================
// Entries
// ============================================================================

/// Branding and base rate of one service tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceTheme {
    pub name: String,
    pub slug: String,
    /// CSS color for the form header
    pub color: String,
    pub base_rate: f64,
    #[serde(default)]
    pub description: String,
}

/// One `<option>` of a select
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub label: String,
    pub value: String,
    /// Explicit numeric factor for non-numeric values such as `"color"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiplier: Option<f64>,
}

impl ChoiceOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            multiplier: None,
        }
    }

    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = Some(multiplier);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaperOptions {
    pub per_page: Vec<ChoiceOption>,
    pub per_item: Vec<ChoiceOption>,
}

// ============================================================================
// Catalog
// ============================================================================

/// Per-deployment table of services and price options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceCatalog {
    pub default_service: String,
    pub services: Vec<ServiceTheme>,
    pub paper: PaperOptions,
    pub sides: Vec<ChoiceOption>,
}

impl ServiceCatalog {
    /// The catalog embedded in the binary
    pub fn builtin() -> &'static ServiceCatalog {
        &BUILTIN
    }

    /// Parse and validate a catalog.
    pub fn from_toml_str(source: &str) -> anyhow::Result<Self> {
        let catalog: ServiceCatalog = toml::from_str(source)?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> anyhow::Result<()> {
        ensure!(!self.services.is_empty(), "catalog has no services");
        ensure!(
            self.services.iter().any(|s| s.name == self.default_service),
            "default service '{}' is not in the catalog",
            self.default_service
        );
        let mut slugs = HashSet::new();
        for service in &self.services {
            if !slugs.insert(service.slug.as_str()) {
                bail!("duplicate service slug '{}'", service.slug);
            }
            ensure!(
                service.base_rate.is_finite() && service.base_rate >= 0.0,
                "service '{}' has an invalid base rate",
                service.name
            );
        }
        ensure!(!self.sides.is_empty(), "catalog has no side options");
        Ok(())
    }

    pub fn default_theme(&self) -> &ServiceTheme {
        self.services
            .iter()
            .find(|s| s.name == self.default_service)
            .unwrap_or(&self.services[0])
    }

    /// Theme by display name; unknown names resolve to the default service.
    pub fn lookup(&self, name: &str) -> &ServiceTheme {
        self.services
            .iter()
            .find(|s| s.name == name)
            .unwrap_or_else(|| self.default_theme())
    }

    pub fn by_slug(&self, slug: &str) -> Option<&ServiceTheme> {
        self.services.iter().find(|s| s.slug == slug)
    }

    pub fn paper_options(&self, mode: PricingMode) -> &[ChoiceOption] {
        match mode {
            PricingMode::PerPage => &self.paper.per_page,
            PricingMode::PerItem => &self.paper.per_item,
        }
    }

    pub fn side_options(&self) -> &[ChoiceOption] {
        &self.sides
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = ServiceCatalog::builtin();
        assert_eq!(catalog.services.len(), 6);
        assert_eq!(catalog.default_theme().name, "Printing");
        assert_eq!(catalog.lookup("Thesis Binding").base_rate, 150.0);
        assert_eq!(catalog.lookup("Photo Frames").color, "#dc2626");
        assert!(!catalog.paper_options(PricingMode::PerPage).is_empty());
        assert_eq!(
            catalog.paper_options(PricingMode::PerItem)[1].multiplier,
            Some(5.0)
        );
    }

    #[test]
    fn test_unknown_service_falls_back() {
        let catalog = ServiceCatalog::builtin();
        let theme = catalog.lookup("Laminating");
        assert_eq!(theme.name, "Printing");
        assert_eq!(theme.base_rate, 2.0);
    }

    #[test]
    fn test_by_slug() {
        let catalog = ServiceCatalog::builtin();
        assert_eq!(
            catalog.by_slug("soft-binding").map(|s| s.name.as_str()),
            Some("Soft Binding")
        );
        assert!(catalog.by_slug("nope").is_none());
    }

    #[test]
    fn test_rejects_missing_default() {
        let source = r##"
            default_service = "Binding"

            [[services]]
            name = "Printing"
            slug = "printing"
            color = "#000"
            base_rate = 1.0

            [paper]
            per_page = []
            per_item = []

            [[sides]]
            label = "Single"
            value = "1"
        "##;
        let err = ServiceCatalog::from_toml_str(source).unwrap_err();
        assert!(err.to_string().contains("default service"));
    }

    #[test]
    fn test_rejects_duplicate_slug() {
        let source = r##"
            default_service = "A"

            [[services]]
            name = "A"
            slug = "same"
            color = "#000"
            base_rate = 1.0

            [[services]]
            name = "B"
            slug = "same"
            color = "#fff"
            base_rate = 2.0

            [paper]
            per_page = []
            per_item = []

            [[sides]]
            label = "Single"
            value = "1"
        "##;
        let err = ServiceCatalog::from_toml_str(source).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }
}
