// Command modules
mod birthday;

// Re-export all commands
pub use birthday::{add, list, remove, start};
