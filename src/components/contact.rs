/*!
The contact page: a validated form that reports through the notifier.
*/
use regex::Regex;

const HEADING: &str = "Contact us";
const SEND: &str = "[Send]";
const SENT: &str = "Message sent successfully! ✓";
const INVALID: &str = "Please fill in all fields correctly";

const FORM_ROW: usize = 4;
const FIELD_WIDTH: usize = 60;
const MESSAGE_ROWS: usize = 4;

lazy_static! {
    static ref EMAIL: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

mod field {
    use super::{EMAIL, FORM_ROW, MESSAGE_ROWS};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Field {
        Name,
        Email,
        Message,
    }

    impl Field {
        pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

        pub fn index(&self) -> usize {
            match self {
                Field::Name => 0,
                Field::Email => 1,
                Field::Message => 2,
            }
        }

        pub fn label(&self) -> &'static str {
            match self {
                Field::Name => "Name",
                Field::Email => "Email",
                Field::Message => "Message",
            }
        }

        pub fn placeholder(&self) -> &'static str {
            match self {
                Field::Name => "Your name",
                Field::Email => "you@example.com",
                Field::Message => "Where would you like to go?",
            }
        }

        pub fn error(&self) -> &'static str {
            match self {
                Field::Name => "Please enter your name",
                Field::Email => "Please enter a valid email",
                Field::Message => "Please enter a message",
            }
        }

        pub fn rows(&self) -> usize {
            match self {
                Field::Message => MESSAGE_ROWS,
                _ => 1,
            }
        }

        /// The row of the group's label. The input follows on the next row.
        pub fn label_row(&self) -> usize {
            Field::ALL[..self.index()]
                .iter()
                .fold(FORM_ROW, |row, field| row + field.rows() + 2)
        }

        /// A value is valid when it is not blank, and emails also have to look like one.
        pub fn is_valid(&self, value: &str) -> bool {
            let value: &str = value.trim();
            !value.is_empty() && (*self != Field::Email || EMAIL.is_match(value))
        }
    }

    /// The row the send button is drawn on.
    pub fn send_row() -> usize {
        let last = Field::Message;
        last.label_row() + 1 + last.rows() + 1
    }
}
pub use field::Field;

mod focus {
    use super::Field;

    /// The part of the form that keys go to.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Focus {
        Field(Field),
        Send,
    }

    impl Focus {
        const ORDER: [Focus; 4] = [
            Focus::Field(Field::Name),
            Focus::Field(Field::Email),
            Focus::Field(Field::Message),
            Focus::Send,
        ];

        fn position(&self) -> usize {
            match self {
                Focus::Field(field) => field.index(),
                Focus::Send => Field::ALL.len(),
            }
        }

        pub fn next(&self) -> Self {
            Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
        }

        pub fn previous(&self) -> Self {
            Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
        }
    }
}
pub use focus::Focus;

mod props {
    use crate::notifier::Notifier;
    use crate::rendering::Size;

    use std::time::Duration;

    pub struct Props {
        pub notifier: Box<dyn Notifier>,
        /// How long the success message stays before the form is reset.
        pub reset_delay: Duration,
        /// Whether to ring the bell when a submission is blocked.
        pub bell: bool,
        pub breakpoint: usize,
        pub size: Size,
    }
}
pub use props::Props;

mod contact {
    use super::field::send_row;
    use super::{Action, Effect, Field, Focus, Props, State, FIELD_WIDTH, HEADING, SEND, SENT};
    use crate::color::Color;
    use crate::component::Component;
    use crate::components::NavEvent;
    use crate::event::Event;
    use crate::rendering::{Fabric, Location, Region, Size, Yarn};
    use crate::stateful::Stateful;

    use std::time::Instant;

    use crossterm::event::{
        Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    };

    pub struct ContactPage {
        state: State,
    }

    fn input_region(field: Field, columns: usize) -> Region {
        Region::new(
            field.label_row() + 1,
            0,
            field.rows(),
            columns.min(FIELD_WIDTH),
        )
    }

    fn send_region() -> Region {
        Region::row(send_row(), 0, SEND.len())
    }

    impl ContactPage {
        pub fn value(&self, field: Field) -> &str {
            self.state.input(field).value()
        }

        pub fn has_error(&self, field: Field) -> bool {
            self.state.has_error(field)
        }

        pub fn focus(&self) -> Focus {
            self.state.focus()
        }

        /// Whether the form was sent and the success message is showing instead.
        pub fn is_sent(&self) -> bool {
            self.state.is_sent()
        }

        fn handle_key(&mut self, event: KeyEvent, now: Instant) -> Option<Action> {
            if self.state.nav().captures(&event) {
                return Some(Action::Nav(NavEvent::Key { event }));
            }
            if self.state.is_sent() {
                return None;
            }

            match event {
                KeyEvent {
                    code: KeyCode::Char('s'),
                    modifiers: KeyModifiers::CONTROL,
                    ..
                } => Some(Action::Submit { now }),
                KeyEvent {
                    code: KeyCode::Tab | KeyCode::Down,
                    ..
                } => Some(Action::Focus(self.state.focus().next())),
                KeyEvent {
                    code: KeyCode::BackTab | KeyCode::Up,
                    ..
                } => Some(Action::Focus(self.state.focus().previous())),
                KeyEvent {
                    code: KeyCode::Enter,
                    ..
                } => match self.state.focus() {
                    Focus::Send => Some(Action::Submit { now }),
                    Focus::Field(Field::Message) => Some(Action::Edit { event }),
                    focus => Some(Action::Focus(focus.next())),
                },
                event => Some(Action::Edit { event }),
            }
        }

        fn handle_mouse(&mut self, event: MouseEvent, now: Instant) -> Option<Action> {
            if event.kind != MouseEventKind::Down(MouseButton::Left) {
                return None;
            }
            let location = Location::new(event.row.into(), event.column.into());
            let columns: usize = self.state.size().columns;

            if self.state.nav().covers(location, columns) || self.state.nav().is_open() {
                return Some(Action::Nav(NavEvent::Click { location, columns }));
            }
            if self.state.is_sent() {
                return None;
            }

            if send_region().contains(location) {
                return Some(Action::Submit { now });
            }
            Field::ALL
                .into_iter()
                .find(|field| input_region(*field, columns).contains(location))
                .map(|field| Action::Focus(Focus::Field(field)))
        }

        fn render_form(&self, fabric: &mut Fabric, columns: usize) {
            for field in Field::ALL {
                let mut label = Yarn::from(field.label());
                if self.state.has_error(field) {
                    label.color(Color::Error.into());
                    let mut error = Yarn::from(format!("  {}", field.error()));
                    error.color(Color::Error.into());
                    label = label.concat(error);
                }
                fabric.write(&label, Location::new(field.label_row(), 0));

                let region = input_region(field, columns);
                let input: Fabric = self.state.input(field).render(region.size);
                fabric.overlay(&input, region.location);
            }

            let mut send = Yarn::from(SEND);
            if self.state.focus() == Focus::Send {
                send.color(Color::InvertedText.into());
                send.background(Color::Highlight.into());
            } else {
                send.color(Color::Brand.into());
            }
            fabric.write(&send, send_region().location);
        }
    }

    impl Component<Props, Event, Effect> for ContactPage {
        fn new(props: Props) -> Self {
            let state = State::from(props);
            Self { state }
        }

        fn handle(&mut self, event: Event) -> Option<Effect> {
            let action: Option<Action> = match event {
                Event::Tick { now } => Some(Action::Tick { now }),
                Event::Crossterm { event, now } => match event {
                    CrosstermEvent::Resize(columns, rows) => Some(Action::Resize {
                        size: Size::from((columns, rows)),
                    }),
                    CrosstermEvent::Key(event) => self.handle_key(event, now),
                    CrosstermEvent::Mouse(event) => self.handle_mouse(event, now),
                },
            };

            if let Some(action) = action {
                self.state.perform(action)
            } else {
                None
            }
        }

        fn render(&self, size: Size) -> Fabric {
            let mut fabric = Fabric::new(size);
            let columns: usize = size.columns;

            let nav: Fabric = self.state.nav().render(Size::new(size.rows.min(1), columns));
            fabric.overlay(&nav, Location::new(0, 0));

            let mut heading = Yarn::from(HEADING);
            heading.color(Color::Highlight.into());
            fabric.write(&heading, Location::new(2, 0));

            if self.state.is_sent() {
                let mut sent = Yarn::from(SENT);
                sent.color(Color::Success.into());
                fabric.write(&sent, Location::new(super::FORM_ROW, 0));
            } else {
                self.render_form(&mut fabric, columns);
            }

            if let Some((location, menu)) = self.state.nav().menu(columns) {
                fabric.overlay(&menu, location);
            }

            fabric
        }

        fn deadline(&self) -> Option<Instant> {
            self.state.reset().deadline()
        }
    }
}
pub use contact::ContactPage;

mod state {
    use super::{Action, Effect, Field, Focus, Props, INVALID, SENT};
    use crate::component::Component;
    use crate::components::common::{Input, InputEffect, InputEvent, InputProps};
    use crate::components::{Link, Nav, NavEffect, NavEvent, NavProps};
    use crate::debounce::Debouncer;
    use crate::notifier::{Notification, Notifier};
    use crate::rendering::Size;
    use crate::stateful::Stateful;

    use std::time::Instant;

    use crossterm::event::KeyEvent;

    pub struct State {
        nav: Nav,
        inputs: Vec<Input>,
        errors: [bool; 3],
        focus: Focus,
        sent: bool,
        reset: Debouncer<()>,
        notifier: Box<dyn Notifier>,
        bell: bool,
        size: Size,
    }

    fn new_inputs() -> Vec<Input> {
        Field::ALL
            .iter()
            .map(|field| {
                Input::new(
                    InputProps::new(field.placeholder())
                        .focus(*field == Field::Name)
                        .multiline(*field == Field::Message),
                )
            })
            .collect()
    }

    impl From<Props> for State {
        fn from(props: Props) -> Self {
            Self {
                nav: Nav::new(NavProps {
                    breakpoint: props.breakpoint,
                    current: Link::Contact,
                }),
                inputs: new_inputs(),
                errors: [false; 3],
                focus: Focus::Field(Field::Name),
                sent: false,
                reset: Debouncer::new(props.reset_delay),
                notifier: props.notifier,
                bell: props.bell,
                size: props.size,
            }
        }
    }

    impl State {
        pub fn nav(&self) -> &Nav {
            &self.nav
        }

        pub fn input(&self, field: Field) -> &Input {
            &self.inputs[field.index()]
        }

        pub fn has_error(&self, field: Field) -> bool {
            self.errors[field.index()]
        }

        pub fn focus(&self) -> Focus {
            self.focus
        }

        pub fn is_sent(&self) -> bool {
            self.sent
        }

        pub fn reset(&self) -> &Debouncer<()> {
            &self.reset
        }

        pub fn size(&self) -> Size {
            self.size
        }

        /// Update the group's error flag and return whether the field is valid.
        fn validate(&mut self, field: Field) -> bool {
            let valid: bool = field.is_valid(self.inputs[field.index()].value());
            self.errors[field.index()] = !valid;
            valid
        }

        fn nav_event(&mut self, event: NavEvent) -> Option<Effect> {
            match self.nav.handle(event) {
                Some(NavEffect::Navigate(link)) => Some(Effect::Navigate(link)),
                None => None,
            }
        }

        fn set_focus(&mut self, focus: Focus) -> Option<Effect> {
            if let Focus::Field(field) = self.focus {
                self.inputs[field.index()].handle(InputEvent::Unfocus);
            }
            if let Focus::Field(field) = focus {
                self.inputs[field.index()].handle(InputEvent::Focus);
            }
            self.focus = focus;
            None
        }

        fn edit(&mut self, event: KeyEvent) -> Option<Effect> {
            let field: Field = match self.focus {
                Focus::Field(field) => field,
                Focus::Send => return None,
            };
            match self.inputs[field.index()].handle(InputEvent::Key { event }) {
                Some(InputEffect::Changed { .. }) => {
                    self.validate(field);
                }
                Some(InputEffect::Enter { .. }) | None => {}
            }
            None
        }

        fn submit(&mut self, now: Instant) -> Option<Effect> {
            let valid: Vec<bool> = Field::ALL
                .into_iter()
                .map(|field| self.validate(field))
                .collect();

            if !valid.iter().all(|valid| *valid) {
                log::info!("Blocked a contact form submission with invalid fields.");
                self.notifier.notify(Notification::error(INVALID));
                return if self.bell { Some(Effect::Bell) } else { None };
            }

            log::info!("Sent the contact form.");
            self.sent = true;
            self.notifier.notify(Notification::info(SENT));
            self.reset.schedule(now, ());
            None
        }

        fn tick(&mut self, now: Instant) -> Option<Effect> {
            if self.reset.fire(now).is_some() {
                log::debug!("Resetting the contact form.");
                for input in self.inputs.iter_mut() {
                    input.handle(InputEvent::Clear);
                }
                self.errors = [false; 3];
                self.sent = false;
                self.set_focus(Focus::Field(Field::Name));
            }
            None
        }
    }

    impl Stateful<Action, Effect> for State {
        fn perform(&mut self, action: Action) -> Option<Effect> {
            match action {
                Action::Nav(event) => self.nav_event(event),
                Action::Focus(focus) => self.set_focus(focus),
                Action::Edit { event } => self.edit(event),
                Action::Submit { now } => self.submit(now),
                Action::Tick { now } => self.tick(now),
                Action::Resize { size } => {
                    self.size = size;
                    None
                }
            }
        }
    }
}
use state::State;

mod action {
    use super::Focus;
    use crate::components::NavEvent;
    use crate::rendering::Size;

    use std::time::Instant;

    use crossterm::event::KeyEvent;

    pub enum Action {
        Nav(NavEvent),
        Focus(Focus),
        Edit { event: KeyEvent },
        Submit { now: Instant },
        Tick { now: Instant },
        Resize { size: Size },
    }
}
use action::Action;

mod effect {
    use crate::components::Link;

    #[derive(Debug, PartialEq, Eq)]
    pub enum Effect {
        Navigate(Link),
        /// A submission was blocked.
        Bell,
    }
}
pub use effect::Effect;

#[cfg(test)]
mod tests {
    use super::*;

    use crate::component::Component;
    use crate::event::Event;
    use crate::notifier::{ChannelNotifier, Notification, NoopNotifier};
    use crate::rendering::Size;

    use std::time::{Duration, Instant};

    use crossbeam::channel::{self, Receiver};
    use crossterm::event::{
        Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    };
    use test_case::test_case;

    const RESET_DELAY: Duration = Duration::from_millis(2000);
    const SIZE: Size = Size {
        rows: 20,
        columns: 60,
    };

    fn page() -> (ContactPage, Receiver<Notification>) {
        let (tx, rx) = channel::unbounded();
        let page = ContactPage::new(Props {
            notifier: Box::new(ChannelNotifier::new(tx)),
            reset_delay: RESET_DELAY,
            bell: true,
            breakpoint: 80,
            size: SIZE,
        });
        (page, rx)
    }

    fn key_with(code: KeyCode, modifiers: KeyModifiers, now: Instant) -> Event {
        Event::Crossterm {
            event: CrosstermEvent::Key(KeyEvent::new(code, modifiers)),
            now,
        }
    }

    fn key(code: KeyCode) -> Event {
        key_with(code, KeyModifiers::NONE, Instant::now())
    }

    fn type_str(page: &mut ContactPage, string: &str) {
        for character in string.chars() {
            page.handle(key(KeyCode::Char(character)));
        }
    }

    fn fill(page: &mut ContactPage, name: &str, email: &str, message: &str) {
        type_str(page, name);
        page.handle(key(KeyCode::Tab));
        type_str(page, email);
        page.handle(key(KeyCode::Tab));
        type_str(page, message);
        page.handle(key(KeyCode::Tab));
    }

    fn submit(page: &mut ContactPage, now: Instant) -> Option<Effect> {
        page.handle(key_with(KeyCode::Char('s'), KeyModifiers::CONTROL, now))
    }

    #[test_case(Field::Name, "Ada", true; "name")]
    #[test_case(Field::Name, "   ", false; "blank name")]
    #[test_case(Field::Email, "ada@example.com", true; "email")]
    #[test_case(Field::Email, " ada@example.com ", true; "email with spaces around")]
    #[test_case(Field::Email, "ada@example", false; "email without a dot after the at")]
    #[test_case(Field::Email, "ada example@x.com", false; "email with a space")]
    #[test_case(Field::Email, "@example.com", false; "email without a local part")]
    #[test_case(Field::Message, "", false; "empty message")]
    fn test_is_valid(field: Field, value: &str, expected: bool) {
        assert_eq!(field.is_valid(value), expected);
    }

    #[test]
    fn test_submitting_with_an_empty_field_is_blocked() {
        let (mut page, rx) = page();
        fill(&mut page, "Ada", "ada@example.com", "");

        let effect = submit(&mut page, Instant::now());

        assert_eq!(effect, Some(Effect::Bell));
        assert!(!page.is_sent());
        assert!(page.has_error(Field::Message));
        assert!(!page.has_error(Field::Name));
        assert!(!page.has_error(Field::Email));
        assert_eq!(
            rx.try_iter().collect::<Vec<_>>(),
            vec![Notification::error("Please fill in all fields correctly")]
        );
        assert!(!page.render(SIZE).line(FORM_ROW).contains("Message sent"));
    }

    #[test]
    fn test_successful_submission_resets_after_the_delay() {
        let (mut page, rx) = page();
        fill(&mut page, "Ada", "ada@example.com", "Kyoto please");
        let now = Instant::now();

        assert_eq!(submit(&mut page, now), None);

        assert!(page.is_sent());
        assert_eq!(page.deadline(), Some(now + RESET_DELAY));
        assert_eq!(
            rx.try_iter().collect::<Vec<_>>(),
            vec![Notification::info("Message sent successfully! ✓")]
        );
        assert_eq!(
            page.render(SIZE).line(FORM_ROW).trim_end(),
            "Message sent successfully! ✓"
        );

        page.handle(Event::Tick {
            now: now + RESET_DELAY - Duration::from_millis(1),
        });
        assert!(page.is_sent());

        page.handle(Event::Tick {
            now: now + RESET_DELAY,
        });
        assert!(!page.is_sent());
        for field in Field::ALL {
            assert_eq!(page.value(field), "");
            assert!(!page.has_error(field));
        }
        assert_eq!(page.focus(), Focus::Field(Field::Name));
        assert_eq!(page.deadline(), None);
    }

    #[test]
    fn test_live_validation_only_touches_the_edited_field() {
        let (mut page, _rx) = page();
        page.handle(key(KeyCode::Tab));

        type_str(&mut page, "ada@");
        assert!(page.has_error(Field::Email));
        assert!(!page.has_error(Field::Name));

        type_str(&mut page, "example.com");
        assert!(!page.has_error(Field::Email));
    }

    #[test]
    fn test_focus_moves_around() {
        let (mut page, _rx) = page();

        page.handle(key(KeyCode::BackTab));
        assert_eq!(page.focus(), Focus::Send);

        page.handle(key(KeyCode::Down));
        assert_eq!(page.focus(), Focus::Field(Field::Name));

        page.handle(key(KeyCode::Enter));
        assert_eq!(page.focus(), Focus::Field(Field::Email));
    }

    #[test]
    fn test_enter_on_send_submits() {
        let (mut page, rx) = page();
        fill(&mut page, "Ada", "ada@example.com", "Hello");
        assert_eq!(page.focus(), Focus::Send);

        page.handle(key(KeyCode::Enter));

        assert!(page.is_sent());
        assert_eq!(rx.try_iter().count(), 1);
    }

    #[test]
    fn test_click_send_without_a_bell() {
        let mut page = ContactPage::new(Props {
            notifier: Box::new(NoopNotifier),
            reset_delay: RESET_DELAY,
            bell: false,
            breakpoint: 80,
            size: SIZE,
        });

        let effect = page.handle(Event::Crossterm {
            event: CrosstermEvent::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: 2,
                row: 16,
                modifiers: KeyModifiers::NONE,
            }),
            now: Instant::now(),
        });

        assert_eq!(effect, None);
        for field in Field::ALL {
            assert!(page.has_error(field));
        }
    }

    #[test]
    fn test_layout() {
        assert_eq!(Field::Name.label_row(), 4);
        assert_eq!(Field::Email.label_row(), 7);
        assert_eq!(Field::Message.label_row(), 10);
        assert_eq!(field::send_row(), 16);
    }

    #[test]
    fn test_render_errors() {
        let (mut page, _rx) = page();
        submit(&mut page, Instant::now());

        let fabric = page.render(SIZE);

        assert_eq!(fabric.line(4).trim_end(), "Name  Please enter your name");
        assert_eq!(fabric.line(16).trim_end(), "[Send]");
    }
}
