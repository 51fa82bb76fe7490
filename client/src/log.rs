//! Browser console diagnostics.

pub fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

pub fn info(message: &str) {
    web_sys::console::info_1(&message.into());
}
