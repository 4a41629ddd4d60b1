//! Key-value backends implementing `vinyl_core::KeyValue`

mod file;
mod memory;

pub use file::FileKv;
pub use memory::MemoryKv;
