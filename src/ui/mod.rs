//! UI components for StackPad

pub mod editor;
pub mod file_tree;
pub mod find_replace;
pub mod status_bar;
