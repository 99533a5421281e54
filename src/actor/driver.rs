//! Driver: single-threaded timer queue that runs a cycler.
//!
//! The driver owns a [`TextCycler`], a [`DisplayTarget`] and a queue of
//! pending timer events on a virtual clock. Two chains share the queue:
//!
//! - the step chain: every step re-queues the next step at its delay
//! - glitch chains: a fired glitch queues its own continuations
//!
//! Events fire in deadline order; events with equal deadlines fire in the
//! order they were queued. A glitch continuation and a step may therefore
//! overwrite each other's frames, exactly as two timers on one event loop
//! would.

use crate::cycler::{GlitchTick, TextCycler};
use crate::random::{RandomSource, ThreadRandom};
use crate::target::DisplayTarget;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::io;
use std::time::Duration;

/// A pending callback kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerEvent {
    /// Run the next cycler step.
    Step,
    /// Run the next glitch continuation.
    Glitch,
}

#[derive(Debug, PartialEq, Eq)]
struct Scheduled {
    at: Duration,
    seq: u64,
    event: TimerEvent,
}

impl Ord for Scheduled {
    fn cmp(&self, other: &Self) -> Ordering {
        self.at.cmp(&other.at).then(self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for Scheduled {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Runs a cycler against a display target on a virtual clock.
#[derive(Debug)]
pub struct Driver<T, R = ThreadRandom> {
    cycler: TextCycler<R>,
    target: T,
    queue: BinaryHeap<Reverse<Scheduled>>,
    now: Duration,
    next_seq: u64,
    started: bool,
}

impl<T: DisplayTarget, R: RandomSource> Driver<T, R> {
    /// Bind a cycler to a display target. Nothing is shown until [`start`](Self::start).
    pub fn new(cycler: TextCycler<R>, target: T) -> Self {
        Self {
            cycler,
            target,
            queue: BinaryHeap::new(),
            now: Duration::ZERO,
            next_seq: 0,
            started: false,
        }
    }

    /// Render the initial frame and queue the first step for right now.
    ///
    /// Calling `start` again has no effect.
    pub fn start(&mut self) -> io::Result<()> {
        if self.started {
            return Ok(());
        }
        self.started = true;
        self.target.show(&self.cycler.render())?;
        self.schedule(self.now, TimerEvent::Step);
        Ok(())
    }

    /// Whether [`start`](Self::start) has run.
    pub const fn is_started(&self) -> bool {
        self.started
    }

    /// Current virtual time.
    pub const fn now(&self) -> Duration {
        self.now
    }

    /// Deadline of the earliest pending event.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.queue.peek().map(|Reverse(s)| s.at)
    }

    /// Number of pending events.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Fire every event due at or before `t`, then move the clock to `t`.
    ///
    /// Returns the number of events fired.
    pub fn advance_to(&mut self, t: Duration) -> io::Result<usize> {
        let mut fired = 0;
        while let Some(Reverse(head)) = self.queue.peek() {
            if head.at > t {
                break;
            }
            let Some(Reverse(due)) = self.queue.pop() else { break };
            self.now = due.at;
            self.fire(due.event)?;
            fired += 1;
        }
        self.now = self.now.max(t);
        Ok(fired)
    }

    /// Advance the clock by `delta`.
    pub fn advance_by(&mut self, delta: Duration) -> io::Result<usize> {
        self.advance_to(self.now + delta)
    }

    /// The cycler being driven.
    pub const fn cycler(&self) -> &TextCycler<R> {
        &self.cycler
    }

    /// The display target.
    pub const fn target(&self) -> &T {
        &self.target
    }

    /// The display target, mutably.
    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    /// Tear the driver down, returning the display target.
    pub fn into_target(self) -> T {
        self.target
    }

    fn schedule(&mut self, at: Duration, event: TimerEvent) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Reverse(Scheduled { at, seq, event }));
    }

    /// Continuations are queued before anything is shown, so a failed write
    /// drops a frame but never a chain.
    fn fire(&mut self, event: TimerEvent) -> io::Result<()> {
        match event {
            TimerEvent::Step => {
                let outcome = self.cycler.step();
                if let Some(glitch) = &outcome.glitch {
                    self.schedule(self.now + glitch.next_in, TimerEvent::Glitch);
                }
                self.schedule(self.now + outcome.delay, TimerEvent::Step);

                self.target.show(&outcome.frame)?;
                if let Some(glitch) = &outcome.glitch {
                    self.target.show(&glitch.frame)?;
                }
            }
            TimerEvent::Glitch => match self.cycler.glitch_tick() {
                Some(GlitchTick::Frame { frame, next_in }) => {
                    self.schedule(self.now + next_in, TimerEvent::Glitch);
                    self.target.show(&frame)?;
                }
                Some(GlitchTick::Restore(frame)) => self.target.show(&frame)?,
                None => {}
            },
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cycler::{Frame, FrameKind, Mode};
    use crate::random::ScriptedRandom;
    use crate::target::{MarkupTarget, RecordingTarget};

    const PREFIX: &str = "root@kali:~# ";

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn driver(phrases: &[&str], roll: f64) -> Driver<RecordingTarget, ScriptedRandom> {
        let cycler =
            TextCycler::new(PREFIX, phrases.iter().copied(), ScriptedRandom::constant(roll))
                .unwrap();
        Driver::new(cycler, RecordingTarget::new())
    }

    #[test]
    fn test_start_renders_prefix_once() {
        let mut driver = driver(&["OSINT"], 0.99);
        assert!(driver.target().frames().is_empty());
        driver.start().unwrap();
        driver.start().unwrap();
        assert_eq!(driver.target().bodies(), vec![""]);
        assert_eq!(driver.target().frames()[0].text(), PREFIX);
        assert_eq!(driver.next_deadline(), Some(Duration::ZERO));
        assert_eq!(driver.pending(), 1);
    }

    #[test]
    fn test_unstarted_driver_is_idle() {
        let mut driver = driver(&["OSINT"], 0.99);
        assert_eq!(driver.advance_to(ms(10_000)).unwrap(), 0);
        assert!(driver.target().frames().is_empty());
    }

    #[test]
    fn test_step_timeline() {
        let mut driver = driver(&["OSINT", "VAPT"], 0.99);
        driver.start().unwrap();

        let expected = [
            (0, "O"),
            (70, "OS"),
            (140, "OSI"),
            (210, "OSIN"),
            (280, "OSINT"),
            (3280, "OSIN"),
            (3320, "OSI"),
            (3360, "OS"),
            (3400, "O"),
            (3440, ""),
            (4140, "V"),
            (4210, "VA"),
        ];
        for (at, body) in expected {
            assert_eq!(driver.next_deadline(), Some(ms(at)));
            assert_eq!(driver.advance_to(ms(at)).unwrap(), 1);
            assert_eq!(driver.target().last().unwrap().body(), body);
        }
        assert_eq!(driver.cycler().current_phrase_index(), 1);
    }

    #[test]
    fn test_hold_keeps_full_phrase_visible() {
        let mut driver = driver(&["AB"], 0.99);
        driver.start().unwrap();
        driver.advance_to(ms(70)).unwrap();
        assert_eq!(driver.cycler().visible_text(), "AB");
        assert_eq!(driver.cycler().mode(), Mode::Deleting);

        driver.advance_to(ms(3069)).unwrap();
        assert_eq!(driver.target().last().unwrap().body(), "AB");
        driver.advance_to(ms(3070)).unwrap();
        assert_eq!(driver.target().last().unwrap().body(), "A");
    }

    #[test]
    fn test_glitch_interleaves_with_steps() {
        let mut driver = driver(&["OSINT"], 0.0);
        driver.start().unwrap();
        driver.advance_to(ms(200)).unwrap();

        let frames = driver.target().frames();
        let seen: Vec<(&str, FrameKind)> = frames.iter().map(|f| (f.body(), f.kind())).collect();
        assert_eq!(
            seen,
            vec![
                ("", FrameKind::Live),       // start
                ("O", FrameKind::Live),      // step @0
                ("!", FrameKind::Glitch),    // glitch fires inline
                ("!", FrameKind::Glitch),    // glitch @40
                ("OS", FrameKind::Live),     // step @70
                ("!", FrameKind::Glitch),    // glitch @80 overwrites the step
                ("OS", FrameKind::Live),     // restore @120
                ("OSI", FrameKind::Live),    // step @140
                ("!!!", FrameKind::Glitch),  // new glitch fires inline
                ("!!!", FrameKind::Glitch),  // glitch @180
            ]
        );
        assert!(driver.cycler().is_glitching());
    }

    #[test]
    fn test_equal_deadlines_fire_in_queue_order() {
        let mut driver = driver(&["OSINT"], 0.0);
        driver.start().unwrap();
        driver.advance_to(Duration::ZERO).unwrap();
        // The glitch continuation was queued before the next step.
        let mut order = Vec::new();
        while let Some(Reverse(s)) = driver.queue.pop() {
            order.push((s.at, s.event));
        }
        assert_eq!(order, vec![(ms(40), TimerEvent::Glitch), (ms(70), TimerEvent::Step)]);
    }

    /// Fails the first `failures` writes, then records.
    struct Flaky {
        failures: usize,
        inner: RecordingTarget,
    }

    impl DisplayTarget for Flaky {
        fn show(&mut self, frame: &Frame) -> io::Result<()> {
            if self.failures > 0 {
                self.failures -= 1;
                return Err(io::Error::new(io::ErrorKind::Interrupted, "try again"));
            }
            self.inner.show(frame)
        }
    }

    #[test]
    fn test_failed_write_keeps_chains_alive() {
        let cycler = TextCycler::new(PREFIX, ["OSINT"], ScriptedRandom::constant(0.0)).unwrap();
        let target = Flaky {
            failures: 0,
            inner: RecordingTarget::new(),
        };
        let mut driver = Driver::new(cycler, target);
        driver.start().unwrap();

        // The first step fires a glitch; its frame write fails.
        driver.target_mut().failures = 1;
        assert!(driver.advance_to(Duration::ZERO).is_err());
        assert!(driver.cycler().is_glitching());
        assert_eq!(driver.pending(), 2);

        // Retrying picks both chains back up.
        assert!(driver.advance_to(ms(200)).unwrap() > 0);
        assert_eq!(driver.cycler().visible_text(), "OSI");
        let bodies = driver.target().inner.bodies();
        assert_eq!(bodies[..4], ["", "!", "OS", "!"]);
        assert!(bodies.contains(&"OSI"));

        // The glitch that was in flight restored, so new ones can fire.
        driver.advance_to(ms(5000)).unwrap();
        assert!(driver.target().inner.bodies().contains(&"!!!!!"));
    }

    #[test]
    fn test_failed_restore_does_not_block_glitches() {
        let cycler = TextCycler::new(PREFIX, ["OSINT"], ScriptedRandom::constant(0.0)).unwrap();
        let target = Flaky {
            failures: 0,
            inner: RecordingTarget::new(),
        };
        let mut driver = Driver::new(cycler, target);
        driver.start().unwrap();
        driver.advance_to(ms(119)).unwrap();

        driver.target_mut().failures = 1;
        assert!(driver.advance_to(ms(120)).is_err());
        assert!(!driver.cycler().is_glitching());
        assert_eq!(driver.next_deadline(), Some(ms(140)));

        driver.advance_to(ms(140)).unwrap();
        assert!(driver.cycler().is_glitching());
    }

    #[test]
    fn test_advance_by_moves_clock() {
        let cycler = TextCycler::new(PREFIX, ["OSINT"], ScriptedRandom::constant(0.99)).unwrap();
        let mut driver = Driver::new(cycler, MarkupTarget::new());
        driver.start().unwrap();
        assert_eq!(driver.advance_by(ms(100)).unwrap(), 2);
        assert_eq!(driver.now(), ms(100));
        assert!(driver.target().markup().ends_with("</span>OS"));
        assert_eq!(driver.into_target().writes(), 3);
    }
}
