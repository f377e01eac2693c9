// Test support utilities for both unit and integration tests

use std::cell::RefCell;
use std::rc::Rc;

use crate::element::{Element, ElementHandle};
use crate::player::{Player, PlayerCallback, PlayerEvent};

/// Mock host player for testing
///
/// Records seek and play calls, and lets tests control when the
/// readiness and seek-completion signals are delivered.
pub struct MockPlayer {
    root: ElementHandle,
    big_play_button: Option<ElementHandle>,
    ready_immediately: bool,
    state: RefCell<MockPlayerState>,
}

#[derive(Default)]
struct MockPlayerState {
    seeks: Vec<f64>,
    play_count: u32,
    pending_ready: Vec<PlayerCallback>,
    pending_seeked: Vec<PlayerCallback>,
}

impl MockPlayer {
    /// Player that reports readiness synchronously. Seeked delivery is
    /// always explicit via [`MockPlayer::fire_seeked`].
    pub fn new() -> Rc<Self> {
        Self::build(true, false)
    }

    /// Player that holds readiness callbacks until
    /// [`MockPlayer::fire_ready`] is called.
    pub fn with_deferred_ready() -> Rc<Self> {
        Self::build(false, false)
    }

    /// Player exposing a default play affordance.
    pub fn with_big_play_button() -> Rc<Self> {
        Self::build(true, true)
    }

    fn build(ready_immediately: bool, with_big_play_button: bool) -> Rc<Self> {
        let mut root = Element::new("div");
        root.id = "player".to_string();

        let big_play_button = with_big_play_button.then(|| {
            let mut button = Element::new("button");
            button.id = "big_play_button".to_string();
            button.into_handle()
        });

        Rc::new(MockPlayer {
            root: root.into_handle(),
            big_play_button,
            ready_immediately,
            state: RefCell::new(MockPlayerState::default()),
        })
    }

    pub fn root(&self) -> ElementHandle {
        self.root.clone()
    }

    /// Positions passed to `current_time`, in call order.
    pub fn seeks(&self) -> Vec<f64> {
        self.state.borrow().seeks.clone()
    }

    pub fn play_count(&self) -> u32 {
        self.state.borrow().play_count
    }

    pub fn pending_seeked_count(&self) -> usize {
        self.state.borrow().pending_seeked.len()
    }

    /// Deliver the readiness signal, draining all held callbacks.
    pub fn fire_ready(&self) {
        let callbacks = std::mem::take(&mut self.state.borrow_mut().pending_ready);
        for callback in callbacks {
            callback();
        }
    }

    /// Deliver the one-shot seeked signal to every registered
    /// subscriber, consuming the subscriptions.
    pub fn fire_seeked(&self) {
        let callbacks = std::mem::take(&mut self.state.borrow_mut().pending_seeked);
        for callback in callbacks {
            callback();
        }
    }
}

impl Player for MockPlayer {
    fn current_time(&self, seconds: f64) {
        self.state.borrow_mut().seeks.push(seconds);
    }

    fn play(&self) {
        self.state.borrow_mut().play_count += 1;
    }

    fn ready(&self, callback: PlayerCallback) {
        if self.ready_immediately {
            callback();
        } else {
            self.state.borrow_mut().pending_ready.push(callback);
        }
    }

    fn one(&self, event: PlayerEvent, callback: PlayerCallback) {
        match event {
            PlayerEvent::Seeked => self.state.borrow_mut().pending_seeked.push(callback),
        }
    }

    fn el(&self) -> ElementHandle {
        self.root.clone()
    }

    fn big_play_button(&self) -> Option<ElementHandle> {
        self.big_play_button.clone()
    }
}
