//! Notification sinks for broadcast game events.

/// Receives human-readable game event messages.
///
/// Sinks are invoked synchronously in registration order after each
/// state-changing transition: game start, each accepted move, and the
/// terminal outcome. Invalid moves are not broadcast.
pub trait NotificationSink {
    /// Delivers one event message.
    fn notify(&mut self, message: &str);
}

/// Sink that prints events to stdout with an `[INFO]` prefix.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl NotificationSink for ConsoleNotifier {
    fn notify(&mut self, message: &str) {
        println!("[INFO] {message}");
    }
}
