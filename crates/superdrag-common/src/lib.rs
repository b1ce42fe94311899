pub mod actions;
pub mod errors;
pub mod events;
pub mod messages;
pub mod toast;
pub mod types;

pub use actions::{ActionId, AiService, Direction, MagnitudeBand, SearchEngine, Translator};
pub use errors::{ConfigError, DispatchError, PlatformError, SuperdragError};
pub use events::{ConfigChange, EventBus};
pub use messages::DispatchMessage;
pub use toast::{Toast, ToastQueue};
pub use types::{Point, Rect};

