//! Subprocess collaborators: the blocking menu picker and the
//! fire-and-forget browser launcher.

mod browser;
mod error;
mod menu;

pub use browser::{BrowserLauncher, DetachedSpawner, Spawn, container_url};
pub use error::{Error, Result};
pub use menu::{MenuPicker, RofiMenu};
