use std::collections::BTreeMap;

use super::{HeadKey, HeadTarget};

/// In-memory document head.
///
/// Used where there is no DOM: tests and server-side rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryHead {
    slots: BTreeMap<HeadKey, String>,
}

impl MemoryHead {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(title: impl Into<String>) -> Self {
        let mut head = Self::new();
        head.slots.insert(HeadKey::Title, title.into());
        head
    }

    pub fn get(&self, key: &HeadKey) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl HeadTarget for MemoryHead {
    fn read(&self, key: &HeadKey) -> Option<String> {
        self.slots.get(key).cloned()
    }

    fn write(&mut self, key: &HeadKey, content: &str) {
        self.slots.insert(key.clone(), content.to_string());
    }

    fn clear(&mut self, key: &HeadKey) {
        self.slots.remove(key);
    }
}
