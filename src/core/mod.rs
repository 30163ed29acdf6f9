//! Editor model: tabs, sessions, the folder tree, and the commands acting on them

pub mod commands;
pub mod config;
pub mod document;
pub mod file_system;
pub mod search;
pub mod session;
pub mod tabs;
pub mod zoom;
