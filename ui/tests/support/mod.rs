//! Headless VirtualDom helpers shared by the component tests.

use std::time::Duration;

use dioxus::dioxus_core::NoOpMutations;
use dioxus::prelude::VirtualDom;

/// Poll tasks and re-render dirty scopes for `window`, then return.
pub async fn run_for(dom: &mut VirtualDom, window: Duration) {
    let _ = tokio::time::timeout(window, async {
        loop {
            dom.wait_for_work().await;
            dom.render_immediate(&mut NoOpMutations);
        }
    })
    .await;
}
