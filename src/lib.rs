pub mod config;
pub mod error;
pub mod export;
pub mod graph;
pub mod instance;
pub mod layout;
pub mod loader;
pub mod scorer;
// cmd and reports belong to the binary crate (main.rs).

pub use error::{BfResult, BlockForgeError};
pub use graph::InteractionGraph;
pub use instance::Instance;
pub use layout::Layout;
pub use scorer::Scorer;
