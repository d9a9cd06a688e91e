pub mod rules;
pub mod config;
pub mod url;
pub mod bar;
pub mod render;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use self::rules::*;
pub use self::config::*;
pub use self::url::*;
pub use self::bar::*;
pub use self::render::*;
