//! Clipboard and new-tab helpers for the explorer's API URL affordances.
//!
//! TRADE-OFFS
//! ==========
//! Both helpers are best-effort browser-only behavior; outside `hydrate`
//! they report failure and do nothing.

#![allow(clippy::unused_async)]

/// Write `text` to the system clipboard. Returns `true` once the browser
/// confirms the write.
pub async fn copy_text(text: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let promise = window.navigator().clipboard().write_text(text);
        wasm_bindgen_futures::JsFuture::from(promise).await.is_ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        false
    }
}

/// Open `url` in a new browsing context without giving it a window handle.
pub fn open_in_new_tab(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if window
                .open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer")
                .is_err()
            {
                leptos::logging::warn!("failed to open {url}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}
