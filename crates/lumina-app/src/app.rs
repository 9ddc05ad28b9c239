//! The application façade.
//!
//! [`App`] owns the record service and the AI assistant.  Flow
//! implementations are grouped by screen domain across the sibling modules
//! (`session`, `feed`, `reading`, `compose`, `dashboard`).

use lumina_assist::Assist;
use lumina_store::{MemorySlots, RecordService, SlotStore, SqliteSlots};

use crate::error::Result;

/// Central application handle.
pub struct App<S = SqliteSlots> {
    records: RecordService<S>,
    assist: Assist,
}

impl App {
    /// Open the default on-disk store and configure the assistant from the
    /// environment.
    pub fn open() -> Result<Self> {
        Ok(Self::new(RecordService::open()?, Assist::from_env()))
    }
}

impl App<MemorySlots> {
    /// An app over a throwaway in-memory store.  State vanishes on drop.
    pub fn ephemeral() -> Self {
        Self::new(
            RecordService::new(MemorySlots::new()),
            Assist::from_env(),
        )
    }
}

impl<S: SlotStore> App<S> {
    /// Assemble an app from explicit parts.
    pub fn new(records: RecordService<S>, assist: Assist) -> Self {
        Self { records, assist }
    }

    /// The underlying record service.
    pub fn records(&self) -> &RecordService<S> {
        &self.records
    }

    /// The text-generation assistant.
    pub fn assist(&self) -> &Assist {
        &self.assist
    }
}

#[cfg(test)]
pub(crate) fn test_app() -> App<MemorySlots> {
    use lumina_assist::AssistConfig;

    App::new(
        RecordService::new(MemorySlots::new()),
        Assist::new(AssistConfig::default()),
    )
}
