pub mod file;
pub mod memory;

pub use file::FileConfigStore;
pub use memory::InMemoryConfigStore;
