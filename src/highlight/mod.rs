pub mod groups;
pub mod collector;
pub mod matcher;
pub mod rewriter;
pub mod diagnostics;
pub mod highlighter;

pub use groups::*;
pub use collector::*;
pub use matcher::*;
pub use rewriter::*;
pub use diagnostics::*;
pub use highlighter::*;
