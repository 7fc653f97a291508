//! Document head state

use leptos::prelude::*;
use shared::head::{mount, HeadGuard, HeadManager, HeadTags, SharedHead};

use crate::services::DomHead;

/// Global head context
///
/// Every page mounts its tags through the one manager held here, so pages that
/// overlap during navigation layer their tags instead of overwriting each other.
#[derive(Clone, Copy)]
pub struct HeadContext {
    head: StoredValue<SharedHead<DomHead>, LocalStorage>,
}

impl HeadContext {
    pub fn new() -> Self {
        Self {
            head: StoredValue::new_local(HeadManager::shared(DomHead::new())),
        }
    }

    pub fn mount(&self, tags: HeadTags) -> HeadGuard<DomHead> {
        self.head.with_value(|head| mount(head, tags))
    }
}

impl Default for HeadContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_head_context() -> HeadContext {
    let context = HeadContext::new();
    provide_context(context);
    context
}

pub fn use_head_context() -> HeadContext {
    expect_context::<HeadContext>()
}
