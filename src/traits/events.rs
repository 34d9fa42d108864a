use crate::signal::Signal;

/// Non-blocking source of classified platform events
///
/// `poll_signal` must return immediately: `Some` while events are pending,
/// `None` once the queue is drained. The frame loop calls it in a
/// drain-until-empty inner loop every iteration, so an implementation that
/// waits for the next event would stall rendering.
pub trait EventSource {
    /// Next pending signal, or `None` when the queue is empty right now
    fn poll_signal(&mut self) -> Option<Signal>;
}
