//! Binding to elements rendered by the host page rather than by this app.
//!
//! A component declares the named elements it wants to touch, the binding
//! resolves them once, and writes to absent elements are skipped.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

/// How a bound element is found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// Single element by `id`
    Id(&'static str),
    /// Every element carrying the class
    Class(&'static str),
}

impl Selector {
    fn resolve(&self, document: &Document) -> Vec<HtmlElement> {
        match self {
            Selector::Id(id) => document
                .get_element_by_id(id)
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                .into_iter()
                .collect(),
            Selector::Class(class) => {
                let Ok(nodes) = document.query_selector_all(&format!(".{}", class)) else {
                    return Vec::new();
                };
                (0..nodes.length())
                    .filter_map(|i| nodes.item(i))
                    .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
                    .collect()
            }
        }
    }
}

#[derive(Default)]
pub struct ViewBinding {
    slots: Vec<(&'static str, Vec<HtmlElement>)>,
}

impl ViewBinding {
    /// Resolve every declared element against the current document.
    pub fn resolve(elements: &[(&'static str, Selector)]) -> Self {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return Self::default();
        };
        let slots: Vec<_> = elements
            .iter()
            .map(|(name, selector)| (*name, selector.resolve(&document)))
            .collect();
        let binding = Self { slots };
        let missing = binding.missing();
        if !missing.is_empty() {
            log::debug!("view binding: host page has no {:?}", missing);
        }
        binding
    }

    pub fn get(&self, name: &str) -> Option<&[HtmlElement]> {
        self.slots
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, elements)| elements.as_slice())
            .filter(|elements| !elements.is_empty())
    }

    /// Replace the text of every element bound under `name`.
    pub fn set_text(&self, name: &str, text: &str) {
        if let Some(elements) = self.get(name) {
            for element in elements {
                element.set_inner_text(text);
            }
        }
    }

    pub fn missing(&self) -> Vec<&'static str> {
        self.slots
            .iter()
            .filter(|(_, elements)| elements.is_empty())
            .map(|(name, _)| *name)
            .collect()
    }
}
