//! Hard navigation helper for flows that must bypass the in-app router
//! (post-login redirect, forced logout on an expired session).

/// Navigate via `window.location`, triggering a full page load.
pub fn force_navigate(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}
