//! Blocking user prompts: notices and yes/no confirmations.

/// Shows notices to the user and asks for confirmation.
pub trait Prompt {
    /// Show a notice. Returns once the user has dismissed it.
    fn alert(&self, message: &str);

    /// Ask a yes/no question. `true` means the user agreed.
    fn confirm(&self, message: &str) -> bool;
}

/// `window.alert` / `window.confirm` on the web.
///
/// Native builds (server-side rendering) have nobody to ask: notices are logged
/// and every confirmation is declined.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserPrompt;

impl Prompt for BrowserPrompt {
    fn alert(&self, message: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(message);
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            tracing::info!("alert: {}", message);
        }
    }

    fn confirm(&self, message: &str) -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::window()
                .and_then(|window| window.confirm_with_message(message).ok())
                .unwrap_or(false)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            tracing::info!("confirm declined outside the browser: {}", message);
            false
        }
    }
}
