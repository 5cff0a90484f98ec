use super::evolution_engine::ProgressCallback;
use crate::types::{GenerationResult, SearchStatus};
use std::sync::mpsc::Sender;

pub struct ConsoleProgressCallback {
    every: usize,
    // Last result skipped by `every`, printed when the search finishes
    pending: Option<GenerationResult>,
}

impl Default for ConsoleProgressCallback {
    fn default() -> Self {
        Self::new(1)
    }
}

impl ConsoleProgressCallback {
    /// Print every n-th generation plus the last one
    pub fn new(every: usize) -> Self {
        Self {
            every: every.max(1),
            pending: None,
        }
    }

    fn print(result: &GenerationResult) {
        println!(
            "Generation {}: accuracy {:.2}% best {} -> {}",
            result.generation_number,
            result.accuracy * 100.0,
            result.best_candidate.dna,
            result.best_candidate.aa,
        );
    }
}

impl ProgressCallback for ConsoleProgressCallback {
    fn on_generation_complete(&mut self, result: &GenerationResult) {
        if result.generation_number % self.every == 0 {
            Self::print(result);
            self.pending = None;
        } else {
            self.pending = Some(result.clone());
        }
    }

    fn on_search_finished(&mut self, status: SearchStatus, generations: usize) {
        if let Some(result) = self.pending.take() {
            Self::print(&result);
        }
        println!("Search finished ({:?}) after {} generations", status, generations);
    }
}

// For handing results to another thread
#[derive(Debug, Clone)]
pub enum SearchEvent {
    Generation(GenerationResult),
    Finished { status: SearchStatus, generations: usize },
}

pub struct ChannelProgressCallback {
    sender: Sender<SearchEvent>,
}

impl ChannelProgressCallback {
    pub fn new(sender: Sender<SearchEvent>) -> Self {
        Self { sender }
    }
}

impl ProgressCallback for ChannelProgressCallback {
    fn on_generation_complete(&mut self, result: &GenerationResult) {
        let _ = self.sender.send(SearchEvent::Generation(result.clone()));
    }

    fn on_search_finished(&mut self, status: SearchStatus, generations: usize) {
        let _ = self.sender.send(SearchEvent::Finished { status, generations });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BestCandidate;

    fn result(generation_number: usize) -> GenerationResult {
        GenerationResult {
            generation_number,
            accuracy: 0.5,
            best_candidate: BestCandidate {
                dna: "ATGGGG".to_string(),
                aa: "MG".to_string(),
            },
            population: Vec::new(),
        }
    }

    #[test]
    fn test_console_keeps_last_skipped_generation() {
        let mut callback = ConsoleProgressCallback::new(10);
        for generation in 1..=7 {
            callback.on_generation_complete(&result(generation));
        }
        assert_eq!(callback.pending.as_ref().map(|r| r.generation_number), Some(7));

        callback.on_search_finished(SearchStatus::GenerationLimitReached, 7);
        assert!(callback.pending.is_none());
    }

    #[test]
    fn test_console_clears_pending_on_printed_generation() {
        let mut callback = ConsoleProgressCallback::new(5);
        for generation in 1..=10 {
            callback.on_generation_complete(&result(generation));
        }
        assert!(callback.pending.is_none());
    }

    #[test]
    fn test_console_every_zero_prints_all() {
        let mut callback = ConsoleProgressCallback::new(0);
        callback.on_generation_complete(&result(3));
        assert!(callback.pending.is_none());
    }

    #[test]
    fn test_channel_forwards_events_in_order() {
        let (tx, rx) = std::sync::mpsc::channel();
        let mut callback = ChannelProgressCallback::new(tx);
        callback.on_generation_complete(&result(1));
        callback.on_search_finished(SearchStatus::Aborted, 1);
        drop(callback);

        let events: Vec<SearchEvent> = rx.iter().collect();
        assert_eq!(events.len(), 2);
        assert!(matches!(&events[0], SearchEvent::Generation(r) if r.generation_number == 1));
        assert!(matches!(
            events[1],
            SearchEvent::Finished { status: SearchStatus::Aborted, generations: 1 }
        ));
    }
}
