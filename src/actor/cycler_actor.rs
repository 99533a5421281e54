//! Cycler Actor: dedicated thread that runs a [`Driver`] in real time.
//!
//! The thread sleeps on the control channel until the driver's next
//! deadline, then fires whatever is due. Disposing the actor wakes it
//! immediately, so no step or glitch callback runs after `dispose`
//! returns.

use super::driver::Driver;
use super::messages::Command;
use crate::random::RandomSource;
use crate::target::DisplayTarget;
use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender};
use std::io;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// How long to wait on the control channel when nothing is scheduled.
const IDLE_WAIT: Duration = Duration::from_millis(250);

/// A cycler running on its own thread.
pub struct CyclerActor<T, R> {
    /// Handle to the actor thread. It hands the driver back on exit.
    handle: Option<JoinHandle<Driver<T, R>>>,
    /// Control channel.
    control: Sender<Command>,
}

impl<T, R> CyclerActor<T, R>
where
    T: DisplayTarget + Send + 'static,
    R: RandomSource + Send + 'static,
{
    /// Start `driver` on a new thread.
    ///
    /// The driver's virtual clock is pinned to the moment the thread
    /// starts; the initial frame and the first step are shown right away.
    ///
    /// # Errors
    ///
    /// Returns an error if the OS fails to spawn the thread.
    pub fn spawn(driver: Driver<T, R>) -> io::Result<Self> {
        let (control, control_rx) = bounded(1);

        let handle = thread::Builder::new()
            .name("typecycler-actor".to_string())
            .spawn(move || Self::run_loop(driver, &control_rx))?;

        Ok(Self {
            handle: Some(handle),
            control,
        })
    }

    /// Whether the actor thread is still running.
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Stop the actor and wait for its thread.
    ///
    /// Returns the driver, with its display target and cycler state as of
    /// the last fired event, or `None` if the thread panicked.
    pub fn dispose(mut self) -> Option<Driver<T, R>> {
        let _ = self.control.try_send(Command::Dispose);
        self.handle.take().and_then(|handle| handle.join().ok())
    }

    /// Main actor loop.
    fn run_loop(mut driver: Driver<T, R>, control: &Receiver<Command>) -> Driver<T, R> {
        let mut origin = Instant::now();
        tracing::info!(phrases = driver.cycler().phrase_count(), "cycler actor started");

        if let Err(err) = driver.start() {
            tracing::warn!(error = %err, "display target failed, stopping cycler");
            return driver;
        }

        loop {
            let timeout = driver.next_deadline().map_or(IDLE_WAIT, |deadline| {
                (origin + deadline).saturating_duration_since(Instant::now())
            });

            match control.recv_timeout(timeout) {
                Ok(Command::Dispose) | Err(RecvTimeoutError::Disconnected) => break,
                Err(RecvTimeoutError::Timeout) => {
                    let now = Instant::now();
                    let rebased = rebase_origin(
                        origin,
                        now,
                        driver.next_deadline(),
                        driver.cycler().timing().hold,
                    );
                    if rebased != origin {
                        tracing::debug!(
                            lag = ?(rebased - origin),
                            "cycler stalled, skipping missed frames"
                        );
                        origin = rebased;
                    }

                    match driver.advance_to(now.saturating_duration_since(origin)) {
                        Ok(_) => {}
                        Err(err) if err.kind() == io::ErrorKind::Interrupted => {
                            tracing::debug!(error = %err, "display target interrupted");
                        }
                        Err(err) => {
                            tracing::warn!(error = %err, "display target failed, stopping cycler");
                            break;
                        }
                    }
                }
            }
        }

        tracing::info!(
            phrase = driver.cycler().current_phrase_index(),
            "cycler actor disposed"
        );
        driver
    }
}

/// Move `origin` forward when the next deadline is more than `max_lag`
/// overdue, so a stalled actor resumes at that event instead of replaying
/// every missed frame in one burst.
fn rebase_origin(
    origin: Instant,
    now: Instant,
    next_deadline: Option<Duration>,
    max_lag: Duration,
) -> Instant {
    let Some(deadline) = next_deadline else {
        return origin;
    };
    let lag = now.saturating_duration_since(origin).saturating_sub(deadline);
    if lag > max_lag {
        origin + lag
    } else {
        origin
    }
}

impl<T, R> Drop for CyclerActor<T, R> {
    fn drop(&mut self) {
        let _ = self.control.try_send(Command::Dispose);
    }
}
