//! Platform detection and task spawning helpers.

use std::future::Future;

use dioxus::prelude::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Desktop,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Desktop
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Desktop => "desktop",
        }
    }
}

/// Spawn `fut` on the Dioxus runtime of the calling scope. The task is dropped
/// together with that scope.
pub fn spawn_future<F>(fut: F) -> Task
where
    F: Future<Output = ()> + 'static,
{
    dioxus::prelude::spawn(fut)
}
