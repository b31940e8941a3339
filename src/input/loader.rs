//! Listing Loader Module
//!
//! Loads and parses the listing source once, in a background thread, so the
//! caller is not blocked while the text is read. The result comes back over a
//! channel and can be polled or waited for.

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, RecvError, TryRecvError, channel};

use crate::error::BikeDashError;
use crate::listing::parser::{ListingParser, Parsed};
use crate::listing::RowPolicy;

/// Represents the current state of listing loading
#[derive(Debug, Clone, PartialEq)]
pub enum LoadingState {
    Loading,
    Complete(Parsed),
    Error(BikeDashError),
}

/// Manages the one-shot background load of the listing source
pub struct FileLoader {
    pub state: LoadingState,
    pub rx: Option<Receiver<Result<Parsed, BikeDashError>>>,
}

impl FileLoader {
    /// Spawn a background thread that reads and parses a listing file
    ///
    /// # Arguments
    /// * `path` - Path to the listing text
    /// * `policy` - How malformed rows are treated
    pub fn spawn_load(path: PathBuf, policy: RowPolicy) -> Self {
        Self::spawn(move || load_file_sync(&path, policy))
    }

    /// Spawn a background thread that reads and parses listings from stdin
    pub fn spawn_load_stdin(policy: RowPolicy) -> Self {
        Self::spawn(move || load_stdin_sync(policy))
    }

    fn spawn<F>(load: F) -> Self
    where
        F: FnOnce() -> Result<Parsed, BikeDashError> + Send + 'static,
    {
        let (tx, rx) = channel();

        std::thread::spawn(move || {
            let result = load();
            let _ = tx.send(result);
        });

        Self {
            state: LoadingState::Loading,
            rx: Some(rx),
        }
    }

    /// Poll for loading completion (non-blocking)
    ///
    /// Returns None while still loading (and after the result was taken),
    /// or Some with the result the first time it is available.
    pub fn poll(&mut self) -> Option<Result<Parsed, BikeDashError>> {
        let rx = self.rx.as_ref()?;
        match rx.try_recv() {
            Ok(result) => Some(self.finish(result)),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(self.finish(Err(disconnected()))),
        }
    }

    /// Block until the load finishes
    ///
    /// Returns None only if the result was already taken by `poll` or `wait`.
    pub fn wait(&mut self) -> Option<Result<Parsed, BikeDashError>> {
        let rx = self.rx.as_ref()?;
        let result = rx.recv().unwrap_or_else(|RecvError| Err(disconnected()));
        Some(self.finish(result))
    }

    fn finish(&mut self, result: Result<Parsed, BikeDashError>) -> Result<Parsed, BikeDashError> {
        self.rx = None;
        self.state = match &result {
            Ok(parsed) => LoadingState::Complete(parsed.clone()),
            Err(e) => LoadingState::Error(e.clone()),
        };
        result
    }

    /// Get the current loading state
    pub fn state(&self) -> &LoadingState {
        &self.state
    }

    /// Check if currently loading
    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadingState::Loading)
    }
}

fn disconnected() -> BikeDashError {
    BikeDashError::Io("Listing loader thread disconnected".to_string())
}

/// Synchronous file loading (runs in background thread)
fn load_file_sync(path: &Path, policy: RowPolicy) -> Result<Parsed, BikeDashError> {
    let contents = std::fs::read_to_string(path)?;
    log::debug!("Read {} bytes from {:?}", contents.len(), path);
    ListingParser::new(policy).parse(&contents)
}

/// Synchronous stdin loading (runs in background thread)
///
/// Refuses to wait on an interactive terminal: listings must be piped in.
fn load_stdin_sync(policy: RowPolicy) -> Result<Parsed, BikeDashError> {
    use std::io::{self, Read};

    if io::stdin().is_terminal() {
        return Err(BikeDashError::Io(
            "No input provided. Pass a listing file or pipe listings on stdin".to_string(),
        ));
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    log::debug!("Read {} bytes from stdin", buffer.len());
    ListingParser::new(policy).parse(&buffer)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
