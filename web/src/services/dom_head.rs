//! Browser document head as a [`HeadTarget`]
//!
//! `<title>` goes through `document.title`; `<meta>` tags are located by
//! attribute selector, created in `<head>` on first write and removed on clear.

use shared::head::{HeadKey, HeadTarget};
use web_sys::{Document, Element};

pub struct DomHead {
    document: Option<Document>,
}

impl DomHead {
    pub fn new() -> Self {
        let document = web_sys::window().and_then(|w| w.document());
        if document.is_none() {
            log::warn!("[HEAD] No document available, head tags will not be applied");
        }
        Self { document }
    }

    fn find(&self, key: &HeadKey) -> Option<Element> {
        let selector = selector_for(key)?;
        let document = self.document.as_ref()?;
        match document.query_selector(&selector) {
            Ok(element) => element,
            Err(e) => {
                log::warn!("[HEAD] Invalid selector {}: {:?}", selector, e);
                None
            }
        }
    }

    fn create_meta(&self, key: &HeadKey) -> Option<Element> {
        let (attribute, value) = meta_attribute(key)?;
        let document = self.document.as_ref()?;
        let head = document.head()?;

        let meta = document.create_element("meta").ok()?;
        meta.set_attribute(attribute, value).ok()?;
        if let Err(e) = head.append_child(&meta) {
            log::warn!("[HEAD] Failed to append {}: {:?}", key, e);
            return None;
        }
        Some(meta)
    }
}

impl Default for DomHead {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadTarget for DomHead {
    fn read(&self, key: &HeadKey) -> Option<String> {
        match key {
            HeadKey::Title => self
                .document
                .as_ref()
                .map(Document::title)
                .filter(|title| !title.is_empty()),
            _ => self.find(key)?.get_attribute("content"),
        }
    }

    fn write(&mut self, key: &HeadKey, content: &str) {
        if let HeadKey::Title = key {
            if let Some(document) = &self.document {
                document.set_title(content);
            }
            return;
        }

        let Some(meta) = self.find(key).or_else(|| self.create_meta(key)) else {
            return;
        };
        if let Err(e) = meta.set_attribute("content", content) {
            log::warn!("[HEAD] Failed to set {}: {:?}", key, e);
        }
    }

    fn clear(&mut self, key: &HeadKey) {
        match key {
            HeadKey::Title => {
                if let Some(document) = &self.document {
                    document.set_title("");
                }
            }
            _ => {
                if let Some(meta) = self.find(key) {
                    meta.remove();
                }
            }
        }
    }
}

/// Identifying attribute of a `<meta>` slot; `None` for the title.
fn meta_attribute(key: &HeadKey) -> Option<(&'static str, &str)> {
    match key {
        HeadKey::Title => None,
        HeadKey::MetaName(name) => Some(("name", name.as_str())),
        HeadKey::MetaProperty(property) => Some(("property", property.as_str())),
    }
}

/// CSS selector matching the `<meta>` element for `key`.
pub fn selector_for(key: &HeadKey) -> Option<String> {
    let (attribute, value) = meta_attribute(key)?;
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    Some(format!("head meta[{attribute}=\"{escaped}\"]"))
}
