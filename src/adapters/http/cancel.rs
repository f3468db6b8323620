//! Caller-driven cancellation
//!
//! A [`CancelHandle`] / [`CancelSignal`] pair is a thin wrapper around a
//! `tokio::sync::watch` channel carrying `true` once cancellation has been
//! requested. The signal is cheap to clone and can be handed to any number
//! of in-flight operations; firing the handle aborts all of them.
//!
//! # Example
//!
//! ```
//! use clinic_adapter::adapters::http::cancel::cancel_pair;
//!
//! let (handle, signal) = cancel_pair();
//! assert!(!signal.is_cancelled());
//!
//! handle.cancel();
//! assert!(signal.is_cancelled());
//! ```

use crate::domain::{ClinicError, Result};
use std::future::Future;
use tokio::sync::watch;

/// Creates a connected handle and signal
pub fn cancel_pair() -> (CancelHandle, CancelSignal) {
    let (tx, rx) = watch::channel(false);
    (CancelHandle { tx }, CancelSignal { rx })
}

/// Owner side: requests cancellation
#[derive(Debug)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelHandle {
    /// Requests cancellation of every operation observing this handle's signals
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    /// Creates another signal connected to this handle
    pub fn signal(&self) -> CancelSignal {
        CancelSignal {
            rx: self.tx.subscribe(),
        }
    }
}

/// Observer side: passed into service operations
#[derive(Debug, Clone)]
pub struct CancelSignal {
    rx: watch::Receiver<bool>,
}

impl CancelSignal {
    /// Whether cancellation has already been requested
    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once cancellation is requested
    ///
    /// If the handle is dropped without cancelling, this never resolves.
    pub async fn cancelled(&self) {
        let mut rx = self.rx.clone();
        loop {
            if *rx.borrow_and_update() {
                return;
            }
            if rx.changed().await.is_err() {
                std::future::pending::<()>().await;
            }
        }
    }
}

impl From<watch::Receiver<bool>> for CancelSignal {
    /// Adopts an existing shutdown channel as a cancellation signal
    fn from(rx: watch::Receiver<bool>) -> Self {
        Self { rx }
    }
}

/// Runs `operation`, abandoning it with [`ClinicError::Cancelled`] if the
/// signal fires first
///
/// Dropping the operation future aborts whatever it was awaiting, including
/// an in-flight HTTP exchange.
pub async fn with_cancel<T, F>(operation: F, cancel: Option<&CancelSignal>) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    let Some(signal) = cancel else {
        return operation.await;
    };

    if signal.is_cancelled() {
        return Err(ClinicError::Cancelled);
    }

    tokio::select! {
        biased;
        _ = signal.cancelled() => Err(ClinicError::Cancelled),
        result = operation => result,
    }
}
