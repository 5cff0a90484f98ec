use crate::config::SearchConfig;
use crate::engines::generation::{
    evolution_engine::{CancelHandle, EvolutionEngine},
    progress::{ChannelProgressCallback, SearchEvent},
};
use crate::engines::translation::CodonTable;
use crate::error::{CodonsearchError, Result};
use crate::types::SearchOutcome;
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Result from a background search
pub type SearchRunResult = Result<SearchOutcome>;

pub struct SearchRunner {
    handle: Option<JoinHandle<SearchRunResult>>,
    progress_rx: Receiver<SearchEvent>,
    cancel: CancelHandle,
}

impl SearchRunner {
    /// Validate on the calling thread, then search in the background
    pub fn start(target: &str, config: SearchConfig) -> Result<Self> {
        Self::start_with_table(target, config, Arc::new(CodonTable::standard()))
    }

    pub fn start_with_table(
        target: &str,
        config: SearchConfig,
        table: Arc<CodonTable>,
    ) -> Result<Self> {
        let mut engine = EvolutionEngine::new(config, table)?;
        engine.start(target)?;

        let (progress_tx, progress_rx) = channel();
        let cancel = engine.cancel_handle();

        let handle = thread::Builder::new()
            .name("codonsearch".to_string())
            .spawn(move || {
                log::debug!("Search thread started");
                engine.drive(ChannelProgressCallback::new(progress_tx))
            })?;

        Ok(Self {
            handle: Some(handle),
            progress_rx,
            cancel,
        })
    }

    /// Poll for progress updates (non-blocking)
    pub fn poll_progress(&self) -> Option<SearchEvent> {
        self.progress_rx.try_recv().ok()
    }

    /// Blocking receive; `None` once the search thread has hung up
    pub fn recv_progress(&self) -> Option<SearchEvent> {
        self.progress_rx.recv().ok()
    }

    /// Check if the search is complete and get the outcome
    pub fn try_get_results(&mut self) -> Option<SearchRunResult> {
        let handle = self.handle.take()?;
        if handle.is_finished() {
            Some(Self::join(handle))
        } else {
            // Not finished yet, put handle back
            self.handle = Some(handle);
            None
        }
    }

    /// Block until the search thread finishes
    pub fn wait(mut self) -> SearchRunResult {
        match self.handle.take() {
            Some(handle) => Self::join(handle),
            None => Err(CodonsearchError::InvariantViolation(
                "search results already taken".to_string(),
            )),
        }
    }

    /// Cancel the running search at its next generation boundary
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    fn join(handle: JoinHandle<SearchRunResult>) -> SearchRunResult {
        handle.join().unwrap_or_else(|_| {
            Err(CodonsearchError::InvariantViolation(
                "search thread panicked".to_string(),
            ))
        })
    }
}

impl Drop for SearchRunner {
    fn drop(&mut self) {
        self.cancel();
    }
}
