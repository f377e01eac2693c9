use crate::element::ElementHandle;

/// Named player events the component subscribes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayerEvent {
    /// A requested seek has completed.
    Seeked,
}

/// One-shot continuation handed to the player.
pub type PlayerCallback = Box<dyn FnOnce()>;

/// Contract the host media player is consumed through.
///
/// The player is an external collaborator; this trait is the full
/// capability set the overlay needs. Seeks return immediately and
/// complete asynchronously, signaled via [`PlayerEvent::Seeked`].
pub trait Player {
    /// Request a seek to `seconds`. Fire-and-forget.
    fn current_time(&self, seconds: f64);

    /// Start playback from the current position.
    fn play(&self);

    /// Invoke `callback` once the player has finished initializing.
    /// An already-initialized player may invoke it synchronously.
    fn ready(&self, callback: PlayerCallback);

    /// Subscribe to `event` exactly once.
    fn one(&self, event: PlayerEvent, callback: PlayerCallback);

    /// Root element the overlay attaches into.
    fn el(&self) -> ElementHandle;

    /// The player's default play affordance, when it exposes one.
    fn big_play_button(&self) -> Option<ElementHandle> {
        None
    }
}
