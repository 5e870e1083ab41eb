//! Node trees, page descriptions and their HTML output.

mod node;
mod page;
mod renderer;

pub use node::{Element, Node};
pub use page::{level_one_headings, Block, Page};
pub use renderer::PageRenderer;
