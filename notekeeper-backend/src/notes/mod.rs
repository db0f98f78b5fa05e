//! Notes system — in-memory CRUD store for the REST API
//!
//! The store is shared across actix workers as `Arc<dyn NoteStore>`.

pub mod seed;
pub mod store;

pub use store::{IdStrategy, MemoryNoteStore, NoteStore};
