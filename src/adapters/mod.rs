// Adapters layer: concrete implementations for the filesystem.

pub mod discovery;
pub mod storage;
