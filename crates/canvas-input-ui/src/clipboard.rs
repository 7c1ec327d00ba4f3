//! System clipboard access off the UI thread.
//!
//! Clipboard reads can block (X11 selection owners, large payloads), so each
//! input owns a small worker thread that runs requests in order and hands
//! completions back through a channel the widget polls every frame.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use canvas_input_core::{ClipboardCompletion, ClipboardRequest, ClipboardService};

/// The system clipboard via `arboard`.
pub struct ArboardClipboard(arboard::Clipboard);

impl ArboardClipboard {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self(arboard::Clipboard::new()?))
    }
}

impl ClipboardService for ArboardClipboard {
    fn read_text(&mut self) -> anyhow::Result<String> {
        Ok(self.0.get_text()?)
    }

    fn write_text(&mut self, text: &str) -> anyhow::Result<()> {
        self.0.set_text(text)?;
        Ok(())
    }
}

pub struct ClipboardWorker {
    requests: Option<Sender<ClipboardRequest>>,
    completions: Receiver<ClipboardCompletion>,
}

impl ClipboardWorker {
    /// Starts a worker on the system clipboard.
    pub fn spawn() -> Self {
        Self::spawn_with(ArboardClipboard::new)
    }

    /// Starts a worker whose service is created by `open` on the worker
    /// thread. If `open` fails every request completes with an error.
    pub fn spawn_with<S, F>(open: F) -> Self
    where
        S: ClipboardService + 'static,
        F: FnOnce() -> anyhow::Result<S> + Send + 'static,
    {
        let (request_tx, request_rx) = mpsc::channel::<ClipboardRequest>();
        let (done_tx, done_rx) = mpsc::channel();

        let spawned = thread::Builder::new()
            .name("clipboard".to_string())
            .spawn(move || {
                let mut service = match open() {
                    Ok(service) => Some(service),
                    Err(e) => {
                        tracing::warn!("Clipboard unavailable: {e:#}");
                        None
                    }
                };
                for request in request_rx {
                    let completion = match service.as_mut() {
                        Some(service) => request.fulfill(service),
                        None => unavailable(request),
                    };
                    if done_tx.send(completion).is_err() {
                        break;
                    }
                }
            });

        // the thread is detached; it exits once both channels are closed
        let requests = match spawned {
            Ok(_) => Some(request_tx),
            Err(e) => {
                tracing::warn!("Failed to start clipboard thread: {e}");
                None
            }
        };
        Self {
            requests,
            completions: done_rx,
        }
    }

    /// Queues a request. Returns false if the worker is gone.
    pub fn submit(&self, request: ClipboardRequest) -> bool {
        let sent = self
            .requests
            .as_ref()
            .is_some_and(|tx| tx.send(request).is_ok());
        if !sent {
            tracing::warn!("Clipboard worker is not running, request dropped");
        }
        sent
    }

    /// Completions that arrived since the last poll, oldest first.
    pub fn poll(&self) -> Vec<ClipboardCompletion> {
        self.completions.try_iter().collect()
    }

    /// Blocks up to `timeout` for the next completion.
    pub fn wait(&self, timeout: Duration) -> Option<ClipboardCompletion> {
        self.completions.recv_timeout(timeout).ok()
    }
}

fn unavailable(request: ClipboardRequest) -> ClipboardCompletion {
    let err = || anyhow::anyhow!("clipboard unavailable");
    match request {
        ClipboardRequest::Copy { .. } => ClipboardCompletion::Copied(Err(err())),
        ClipboardRequest::Cut { range, .. } => ClipboardCompletion::Cut {
            range,
            result: Err(err()),
        },
        ClipboardRequest::Paste { range } => ClipboardCompletion::Pasted {
            range,
            result: Err(err()),
        },
    }
}
