mod builder;
mod matcher;
mod tree;

pub use tree::Tree;
