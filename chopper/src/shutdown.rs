//! Stop signal shared between the hop loop and its two stop sources.
//!
//! The operator interrupt and the optional timeout both go through
//! [`StopHandle::stop`]; the first reason wins and later calls do nothing.
//! The hop loop only ever asks [`StopSignal::is_stopped`].

// STD LIB
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

// THIRD PARTY CRATES
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    Interrupted,
    TimedOut,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::Interrupted => write!(f, "interrupted"),
            StopReason::TimedOut => write!(f, "timed out"),
        }
    }
}

/// Sets the stop signal.
#[derive(Clone)]
pub struct StopHandle {
    tx: Arc<watch::Sender<Option<StopReason>>>,
}

/// Observes the stop signal.
#[derive(Clone)]
pub struct StopSignal {
    rx: watch::Receiver<Option<StopReason>>,
}

pub fn stop_channel() -> (StopHandle, StopSignal) {
    let (tx, rx) = watch::channel(None);
    (StopHandle { tx: Arc::new(tx) }, StopSignal { rx })
}

impl StopHandle {
    /// Request a stop. Returns `true` only for the call that set the signal.
    pub fn stop(&self, reason: StopReason) -> bool {
        self.tx.send_if_modified(|current| match current {
            Some(_) => false,
            None => {
                *current = Some(reason);
                true
            }
        })
    }
}

impl StopSignal {
    pub fn is_stopped(&self) -> bool {
        self.rx.borrow().is_some()
    }

    pub fn reason(&self) -> Option<StopReason> {
        *self.rx.borrow()
    }
}

/// Stop on every SIGINT for as long as the runtime lives.
pub fn arm_interrupt(handle: StopHandle) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("cannot listen for SIGINT: {}", e);
                return;
            }
            if handle.stop(StopReason::Interrupted) {
                info!("interrupt received, stopping after the current hop");
            }
        }
    })
}

/// Stop once `after` has elapsed.
pub fn arm_timeout(handle: StopHandle, after: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(after).await;
        if handle.stop(StopReason::TimedOut) {
            info!("timeout of {:?} reached, stopping after the current hop", after);
        }
    })
}
