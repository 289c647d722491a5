//! State storage adapters.

mod file;
mod memory;

pub use file::FileStateStorage;
pub use memory::MemoryStateStorage;
