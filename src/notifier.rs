/*!
Short messages for the user that components can emit without knowing how they are shown.
*/
use crossbeam::channel::Sender;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub is_error: bool,
}

impl Notification {
    pub fn info(message: &str) -> Self {
        Self {
            message: message.to_string(),
            is_error: false,
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            message: message.to_string(),
            is_error: true,
        }
    }
}

pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

/// Drops every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&mut self, _notification: Notification) {}
}

/// Sends notifications to whoever holds the receiving end (the toast).
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: Sender<Notification>,
}

impl ChannelNotifier {
    pub fn new(tx: Sender<Notification>) -> Self {
        Self { tx }
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&mut self, notification: Notification) {
        if let Err(error) = self.tx.send(notification) {
            log::debug!("Dropping a notification nobody is listening for: {:?}", error.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crossbeam::channel;

    #[test]
    fn test_channel_notifier_delivers_in_order() {
        let (tx, rx) = channel::unbounded();
        let mut notifier = ChannelNotifier::new(tx);

        notifier.notify(Notification::error("first"));
        notifier.notify(Notification::info("second"));

        let received: Vec<Notification> = rx.try_iter().collect();
        assert_eq!(
            received,
            vec![Notification::error("first"), Notification::info("second")]
        );
    }

    #[test]
    fn test_channel_notifier_without_a_receiver_does_not_panic() {
        let (tx, rx) = channel::unbounded();
        drop(rx);
        let mut notifier = ChannelNotifier::new(tx);

        notifier.notify(Notification::info("nobody hears this"));
    }
}
