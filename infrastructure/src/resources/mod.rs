//! File-backed resources listed next to the tool catalog.

mod file_resources;

pub use file_resources::FileResourceReader;
