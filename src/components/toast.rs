/*!
A notification shown on the bottom row for a little while.
*/
use std::time::Duration;

pub const DEFAULT_DURATION: Duration = Duration::from_millis(3000);

mod props {
    use std::time::Duration;

    pub struct Props {
        pub duration: Duration,
    }
}
pub use props::Props;

mod toast {
    use super::{Event, Props};
    use crate::color::Color;
    use crate::component::Component;
    use crate::notifier::Notification;
    use crate::rendering::{Fabric, Size, Yarn};

    use std::time::{Duration, Instant};

    pub struct Toast {
        duration: Duration,
        current: Option<(Notification, Instant)>,
    }

    impl Toast {
        pub fn notification(&self) -> Option<&Notification> {
            self.current.as_ref().map(|(notification, _)| notification)
        }
    }

    impl Component<Props, Event, ()> for Toast {
        fn new(props: Props) -> Self {
            Self {
                duration: props.duration,
                current: None,
            }
        }

        fn handle(&mut self, event: Event) -> Option<()> {
            match event {
                Event::Show { notification, now } => {
                    self.current = Some((notification, now + self.duration));
                }
                Event::Tick { now } => {
                    if matches!(&self.current, Some((_, expires)) if *expires <= now) {
                        self.current = None;
                    }
                }
            }
            None
        }

        fn render(&self, size: Size) -> Fabric {
            let mut fabric = Fabric::new(size);
            if let Some(notification) = self.notification() {
                let mut yarn = Yarn::truncated(&format!(" {}", notification.message), size.columns);
                yarn.color(Color::InvertedText.into());
                let background = if notification.is_error {
                    Color::Error
                } else {
                    Color::Success
                };
                yarn.background(background.into());
                fabric.write(&yarn, Default::default());
            }
            fabric
        }

        fn deadline(&self) -> Option<Instant> {
            self.current.as_ref().map(|(_, expires)| *expires)
        }
    }
}
pub use toast::Toast;

mod event {
    use crate::notifier::Notification;

    use std::time::Instant;

    pub enum Event {
        Show {
            notification: Notification,
            now: Instant,
        },
        Tick {
            now: Instant,
        },
    }
}
pub use event::Event;
