//! # lumina-store
//!
//! Local persistence for the Lumina publishing app.
//!
//! All state lives in a handful of named slots, each holding one JSON value:
//! the user directory, the post collection, the signed-in session, and the
//! set of posts this installation has liked.  [`RecordService`] layers typed
//! read-modify-write operations over a [`SlotStore`] backend; [`SqliteSlots`]
//! is the durable backend and [`MemorySlots`] the ephemeral one.

pub mod models;
pub mod records;
pub mod seed;
pub mod slots;

mod error;

pub use error::StoreError;
pub use models::*;
pub use records::RecordService;
pub use slots::{MemorySlots, SlotStore, SqliteSlots};
