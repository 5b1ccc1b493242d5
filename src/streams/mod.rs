pub mod memory_file;
pub mod text_lines;

pub use memory_file::{md5_hex, MemoryFile};
pub use text_lines::TextLines;
