pub mod color;
pub mod config;
pub mod edges;

pub use color::{normalize_color, CssColor};
pub use config::{InputConfig, InputOptions};
pub use edges::BoxEdges;
