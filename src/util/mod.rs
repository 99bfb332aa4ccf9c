pub mod display;
pub mod reader;

pub use self::display::DumpPrinter;
pub use self::reader::{load_file, read_rope, ChunkReader, DEFAULT_CHUNK_SIZE};
