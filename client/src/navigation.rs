use wasm_bindgen::JsValue;

use photospot_shared::NavigationIntent;

use crate::log;

/// Hand a navigation intent to the page router.
///
/// Pushes the photo-spot listing URL onto the history stack and dispatches a
/// `popstate` so whichever router owns the page picks it up. Falls back to a
/// full page load when the History API is unavailable.
pub fn navigate(intent: &NavigationIntent) {
    let href = intent.href_with(|part| String::from(js_sys::encode_uri_component(part)));
    let Some(window) = web_sys::window() else {
        return;
    };

    let pushed = window
        .history()
        .and_then(|history| history.push_state_with_url(&JsValue::NULL, "", Some(&href)));
    if let Err(err) = pushed {
        log::warn(&format!("pushState failed for {href}: {err:?}"));
        window.location().set_href(&href).ok();
        return;
    }

    if let Ok(event) = web_sys::PopStateEvent::new("popstate") {
        window.dispatch_event(&event).ok();
    }
}
