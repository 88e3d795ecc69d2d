//! Admin visibility context for the UI.

use dioxus::prelude::*;
use store::AdminSession;

/// Get the admin session of the current page load.
pub fn use_admin() -> Signal<AdminSession> {
    use_context::<Signal<AdminSession>>()
}

/// Provider component that evaluates the stored admin credentials once, after
/// mount. Until then, and wherever browser storage is unavailable, the page
/// renders as a visitor.
#[component]
pub fn AdminProvider(children: Element) -> Element {
    #[allow(unused_mut)]
    let mut session = use_signal(AdminSession::visitor);

    use_effect(move || {
        #[cfg(all(target_arch = "wasm32", feature = "web"))]
        session.set(AdminSession::load(store::LocalStore::new()));
    });

    use_context_provider(|| session);

    rsx! {
        {children}
    }
}
