pub mod offsets;

pub use offsets::{storage_key, OffsetStore};
