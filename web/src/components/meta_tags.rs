//! Head metadata injector
//!
//! Mounts its tags while the component is alive. The layer is removed when the
//! owning view is cleaned up, whether by navigation or by the route being
//! replaced.

use leptos::prelude::*;
use shared::head::HeadTags;

use crate::state::head::use_head_context;

#[component]
pub fn MetaTags(tags: HeadTags) -> impl IntoView {
    let head = use_head_context();
    let guard = StoredValue::new_local(Some(head.mount(tags)));

    on_cleanup(move || {
        // Dropping the guard unmounts the layer
        let _ = guard.try_update_value(|guard| guard.take());
    });
}
