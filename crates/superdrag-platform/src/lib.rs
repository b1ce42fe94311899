pub mod browser;
pub mod clipboard;

pub use browser::open_in_browser;
pub use clipboard::{ClipboardBackend, CommandClipboard, SystemClipboard};
