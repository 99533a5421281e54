//! Message types for actor communication.

/// Control messages sent to a running [`CyclerActor`](super::CyclerActor).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Cancel every pending step and glitch callback and stop the thread.
    Dispose,
}
