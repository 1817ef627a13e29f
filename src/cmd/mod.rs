pub mod compare;
pub mod eval;
pub mod graph;
pub mod list;

use blockforge::{BfResult, Instance, Layout};

/// Parses `--solution` or falls back to the identity layout.
pub fn resolve_layout(solution: Option<&str>, instance: &Instance) -> BfResult<Layout> {
    match solution {
        Some(text) => Layout::parse(text, instance.block_count()),
        None => Ok(Layout::identity(instance.block_count())),
    }
}
