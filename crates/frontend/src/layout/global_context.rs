use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Storefront pages rendered inside the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Order,
    Services,
    Profile,
}

impl Page {
    pub fn all() -> [Page; 3] {
        [Page::Order, Page::Services, Page::Profile]
    }

    pub fn key(&self) -> &'static str {
        match self {
            Page::Order => "order",
            Page::Services => "services",
            Page::Profile => "profile",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Order => "Print Documents",
            Page::Services => "Services",
            Page::Profile => "My Profile",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Page::Order => "printer",
            Page::Services => "layers",
            Page::Profile => "user",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Page::all().into_iter().find(|p| p.key() == key)
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub page: RwSignal<Page>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            page: RwSignal::new(Page::Order),
        }
    }

    /// Restore the page from `?page=` and keep the query string in sync.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(page) = page_from_query(&search) {
            self.page.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let page = this.page.get();
            let query_string = serde_qs::to_string(&HashMap::from([(
                "page".to_string(),
                page.key().to_string(),
            )]))
            .unwrap_or_default();

            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn open(&self, page: Page) {
        log::debug!("open page '{}'", page.key());
        self.page.set(page);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

fn page_from_query(search: &str) -> Option<Page> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get("page").and_then(|key| Page::from_key(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_from_query() {
        assert_eq!(page_from_query("?page=services"), Some(Page::Services));
        assert_eq!(page_from_query("page=profile&x=1"), Some(Page::Profile));
        assert_eq!(page_from_query("?page=admin"), None);
        assert_eq!(page_from_query(""), None);
    }
}
