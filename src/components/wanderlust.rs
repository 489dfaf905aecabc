/*!
The root component: owns the current page and moves between pages.
*/

const TITLE: &str = "Wanderlust";

mod props {
    use crate::args::Command;
    use crate::config::Config;
    use crate::handoff::Handoff;
    use crate::rendering::Size;

    use typed_builder::TypedBuilder;

    #[derive(TypedBuilder)]
    pub struct Props {
        start: Start,
        config: Config,
        handoff: Handoff,
        size: Size,
    }

    impl Props {
        pub fn into_parts(self) -> (Start, Config, Handoff, Size) {
            (self.start, self.config, self.handoff, self.size)
        }
    }

    /// The page to start on.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Start {
        Home { query: Option<String> },
        Destination { name: Option<String> },
        Contact,
    }

    impl From<Option<Command>> for Start {
        fn from(command: Option<Command>) -> Self {
            match command {
                Some(Command::Home) | None => Start::Home { query: None },
                Some(Command::Search { query }) => Start::Home { query },
                Some(Command::Destination { name }) => Start::Destination { name },
                Some(Command::Contact) => Start::Contact,
            }
        }
    }
}
pub use props::{Props, Start};

mod page {
    use crate::components::{ContactPage, DestinationPage, Home};

    pub enum Page {
        Home(Home),
        Destination(DestinationPage),
        Contact(ContactPage),
    }
}
use page::Page;

mod wanderlust {
    use super::{Action, Page, Props, State};
    use crate::component::Component;
    use crate::components::{ContactEffect, DestinationEffect, HomeEffect, ToastEvent};
    use crate::event::Event;
    use crate::rendering::{Fabric, Location, Size};
    use crate::stateful::Stateful;
    use crate::system_effect::SystemEffect;

    use std::time::Instant;

    use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};

    pub struct Wanderlust {
        state: State,
    }

    fn now_of(event: &Event) -> Instant {
        match event {
            Event::Crossterm { now, .. } | Event::Tick { now } => *now,
        }
    }

    fn is_exit(event: &Event) -> bool {
        matches!(
            event,
            Event::Crossterm {
                event: CrosstermEvent::Key(KeyEvent {
                    code: KeyCode::Char('c') | KeyCode::Char('q'),
                    modifiers: KeyModifiers::CONTROL,
                    ..
                }),
                ..
            }
        )
    }

    impl Wanderlust {
        /// The title the terminal window should have for the current page.
        pub fn title(&self) -> String {
            self.state.title()
        }

        fn page_action(&mut self, event: Event) -> Option<Action> {
            match &mut self.state.page {
                Page::Home(home) => match home.handle(event)? {
                    HomeEffect::Navigate(link) => Some(Action::Navigate(link)),
                    HomeEffect::Select(destination) => Some(Action::Select(destination)),
                },
                Page::Destination(destination) => match destination.handle(event)? {
                    DestinationEffect::Navigate(link) => Some(Action::Navigate(link)),
                },
                Page::Contact(contact) => match contact.handle(event)? {
                    ContactEffect::Navigate(link) => Some(Action::Navigate(link)),
                    ContactEffect::Bell => Some(Action::Bell),
                },
            }
        }
    }

    impl Component<Props, Event, SystemEffect> for Wanderlust {
        fn new(props: Props) -> Self {
            let state = State::from(props);
            Self { state }
        }

        fn handle(&mut self, event: Event) -> Option<SystemEffect> {
            let now: Instant = now_of(&event);

            // Terminal events can keep arriving past a deadline, so anything due runs first.
            let mut due_effect: Option<SystemEffect> = None;
            if let Event::Crossterm { .. } = event {
                if matches!(self.deadline(), Some(deadline) if deadline <= now) {
                    self.state.toast.handle(ToastEvent::Tick { now });
                    if let Some(action) = self.page_action(Event::Tick { now }) {
                        due_effect = self.state.perform(action);
                    }
                }
            }

            let action: Option<Action> = if is_exit(&event) {
                Some(Action::Exit)
            } else {
                match &event {
                    Event::Crossterm {
                        event: CrosstermEvent::Resize(columns, rows),
                        ..
                    } => {
                        self.state.size = Size::from((*columns, *rows));
                    }
                    Event::Tick { now } => {
                        self.state.toast.handle(ToastEvent::Tick { now: *now });
                    }
                    Event::Crossterm { .. } => {}
                }
                self.page_action(event)
            };

            self.state.show_notifications(now);

            match action {
                Some(action) => self.state.perform(action).or(due_effect),
                None => due_effect,
            }
        }

        fn render(&self, size: Size) -> Fabric {
            let mut fabric: Fabric = match &self.state.page {
                Page::Home(home) => home.render(size),
                Page::Destination(destination) => destination.render(size),
                Page::Contact(contact) => contact.render(size),
            };

            if self.state.toast.notification().is_some() && size.rows > 0 {
                let toast: Fabric = self.state.toast.render(Size::new(1, size.columns));
                fabric.overlay(&toast, Location::new(size.rows - 1, 0));
            }

            fabric
        }

        fn deadline(&self) -> Option<Instant> {
            let page: Option<Instant> = match &self.state.page {
                Page::Home(home) => home.deadline(),
                Page::Destination(destination) => destination.deadline(),
                Page::Contact(contact) => contact.deadline(),
            };
            [page, self.state.toast.deadline()].into_iter().flatten().min()
        }
    }
}
pub use wanderlust::Wanderlust;

mod state {
    use super::{Action, Page, Props, Start, TITLE};
    use crate::catalog::{load_catalog, Catalog, Destination};
    use crate::component::Component;
    use crate::components::{
        ContactPage, ContactProps, DestinationPage, DestinationProps, Home, HomeProps, Link,
        Toast, ToastEvent, ToastProps, TOAST_DURATION,
    };
    use crate::config::Config;
    use crate::handoff::{resolve_destination, Handoff};
    use crate::notifier::{ChannelNotifier, Notification};
    use crate::rendering::Size;
    use crate::stateful::Stateful;
    use crate::system_effect::SystemEffect;

    use std::rc::Rc;
    use std::time::Instant;

    use crossbeam::channel::{self, Receiver};

    pub struct State {
        pub page: Page,
        pub toast: Toast,
        pub size: Size,
        config: Config,
        handoff: Handoff,
        notifier: ChannelNotifier,
        notifications: Receiver<Notification>,
    }

    impl From<Props> for State {
        fn from(props: Props) -> Self {
            let (start, config, handoff, size) = props.into_parts();
            let (tx, rx) = channel::unbounded();

            let mut state = Self {
                // Replaced below once the state can build pages.
                page: Page::Destination(DestinationPage::new(DestinationProps {
                    destination: None,
                    breakpoint: config.general().mobile_breakpoint(),
                    size,
                })),
                toast: Toast::new(ToastProps {
                    duration: TOAST_DURATION,
                }),
                size,
                config,
                handoff,
                notifier: ChannelNotifier::new(tx),
                notifications: rx,
            };

            state.page = match start {
                Start::Home { query } => state.home(query),
                Start::Destination { name } => state.destination(name.as_deref()),
                Start::Contact => state.contact(),
            };
            state
        }
    }

    impl State {
        pub fn title(&self) -> String {
            match &self.page {
                Page::Home(_) => TITLE.to_string(),
                Page::Destination(page) => match page.destination() {
                    Some(destination) => format!("{} - {}", destination.name, TITLE),
                    None => TITLE.to_string(),
                },
                Page::Contact(_) => format!("Contact - {}", TITLE),
            }
        }

        /// Move anything the pages reported into the toast.
        pub fn show_notifications(&mut self, now: Instant) {
            for notification in self.notifications.try_iter() {
                self.toast.handle(ToastEvent::Show { notification, now });
            }
        }

        fn home(&mut self, query: Option<String>) -> Page {
            let catalog: Option<Rc<Catalog>> = load_catalog(&self.config.search().source()).map(Rc::new);
            Page::Home(Home::new(HomeProps {
                catalog,
                debounce: self.config.search().debounce(),
                limit: self.config.search().limit(),
                breakpoint: self.config.general().mobile_breakpoint(),
                query,
                size: self.size,
            }))
        }

        fn destination(&mut self, name: Option<&str>) -> Page {
            let source = self.config.search().source();
            let destination: Option<Destination> = resolve_destination(&mut self.handoff, name, &source);
            Page::Destination(DestinationPage::new(DestinationProps {
                destination,
                breakpoint: self.config.general().mobile_breakpoint(),
                size: self.size,
            }))
        }

        fn contact(&mut self) -> Page {
            Page::Contact(ContactPage::new(ContactProps {
                notifier: Box::new(self.notifier.clone()),
                reset_delay: self.config.contact().reset_delay(),
                bell: self.config.general().bell(),
                breakpoint: self.config.general().mobile_breakpoint(),
                size: self.size,
            }))
        }

        fn set_title(&self) -> Option<SystemEffect> {
            Some(SystemEffect::SetTitle {
                title: self.title(),
            })
        }

        fn navigate(&mut self, link: Link) -> Option<SystemEffect> {
            log::info!("Navigating to {}.", link.label());
            self.page = match link {
                Link::Home | Link::Destinations => self.home(None),
                Link::Contact => self.contact(),
            };
            self.set_title()
        }

        fn select(&mut self, destination: Destination) -> Option<SystemEffect> {
            log::info!("Selected {:?}.", destination.name);
            if let Err(error) = self.handoff.stash(&destination) {
                log::error!("{}", error);
            }
            self.page = self.destination(Some(&destination.name));
            self.set_title()
        }
    }

    impl Stateful<Action, SystemEffect> for State {
        fn perform(&mut self, action: Action) -> Option<SystemEffect> {
            match action {
                Action::Navigate(link) => self.navigate(link),
                Action::Select(destination) => self.select(destination),
                Action::Bell => Some(SystemEffect::Bell),
                Action::Exit => Some(SystemEffect::Exit),
            }
        }
    }
}
use state::State;

mod action {
    use crate::catalog::Destination;
    use crate::components::Link;

    pub enum Action {
        Navigate(Link),
        Select(Destination),
        Bell,
        Exit,
    }
}
use action::Action;
