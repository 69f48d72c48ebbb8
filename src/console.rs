// web_sys imports panic off wasm32, so native builds log to stderr instead

#[cfg(target_arch = "wasm32")]
pub(crate) fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn warn(message: &str) {
    eprintln!("warn: {}", message);
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn error(message: &str) {
    web_sys::console::error_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn error(message: &str) {
    eprintln!("error: {}", message);
}

macro_rules! console_warn {
    ($($arg:tt)*) => {
        $crate::console::warn(&format!($($arg)*))
    };
}

macro_rules! console_error {
    ($($arg:tt)*) => {
        $crate::console::error(&format!($($arg)*))
    };
}

pub(crate) use console_error;
pub(crate) use console_warn;
