mod render;
mod tree;
pub mod types;

pub use render::render_toc;
pub use tree::build_tree;
pub use types::{Entry, TocNode, TocTree};
