//! Shared fakes for unit tests.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::clock::AudioPlayer;

#[derive(Debug, Default)]
pub(crate) struct PlayerProbe {
    pub(crate) position: f64,
    pub(crate) playing: bool,
    pub(crate) duration: Option<f64>,
    pub(crate) play_calls: u32,
    pub(crate) pause_calls: u32,
    pub(crate) seeks: Vec<f64>,
}

/// Audio player whose state is inspected and driven through a shared probe.
pub(crate) struct FakePlayer {
    probe: Rc<RefCell<PlayerProbe>>,
}

impl FakePlayer {
    pub(crate) fn new(duration: Option<f64>) -> (Self, Rc<RefCell<PlayerProbe>>) {
        let probe = Rc::new(RefCell::new(PlayerProbe {
            duration,
            ..PlayerProbe::default()
        }));
        (
            Self {
                probe: Rc::clone(&probe),
            },
            probe,
        )
    }
}

/// Move a playing fake forward, as real output would between frames.
pub(crate) fn advance(probe: &Rc<RefCell<PlayerProbe>>, secs: f64) {
    let mut p = probe.borrow_mut();
    if p.playing {
        p.position += secs;
        if let Some(d) = p.duration {
            p.position = p.position.min(d);
        }
    }
}

impl AudioPlayer for FakePlayer {
    fn position(&self) -> f64 {
        self.probe.borrow().position
    }

    fn set_position(&mut self, secs: f64) {
        let mut p = self.probe.borrow_mut();
        let upper = p.duration.unwrap_or(f64::INFINITY);
        p.position = secs.clamp(0.0, upper);
        p.seeks.push(secs);
    }

    fn play(&mut self) {
        let mut p = self.probe.borrow_mut();
        p.playing = true;
        p.play_calls += 1;
    }

    fn pause(&mut self) {
        let mut p = self.probe.borrow_mut();
        p.playing = false;
        p.pause_calls += 1;
    }

    fn loaded_duration(&self) -> Option<f64> {
        self.probe.borrow().duration
    }
}

/// Instant `ms` milliseconds after `base`.
pub(crate) fn at(base: Instant, ms: u64) -> Instant {
    base + Duration::from_millis(ms)
}
