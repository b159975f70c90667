pub mod chunker;
pub mod cleaner;
pub mod context;
pub mod dispatch;
pub mod merge;

pub use chunker::*;
pub use cleaner::*;
pub use context::*;
pub use dispatch::*;
pub use merge::*;
