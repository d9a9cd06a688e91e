pub mod tree;
pub mod memory;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use tree::*;
pub use memory::*;
#[cfg(target_arch = "wasm32")]
pub use web::*;
