/*!
The page showing a single destination.
*/

const CONTENT_ROW: usize = 2;
const NO_DESTINATION: &str = "No destination selected.";
const PLAN_TRIP: &str = "[Plan trip]";
const EXPLORE_MORE: &str = "[Explore more]";
const BUTTON_GAP: usize = 2;

mod props {
    use crate::catalog::Destination;
    use crate::rendering::Size;

    pub struct Props {
        /// The destination to show, if one could be resolved.
        pub destination: Option<Destination>,
        pub breakpoint: usize,
        pub size: Size,
    }
}
pub use props::Props;

mod button {
    use super::{BUTTON_GAP, EXPLORE_MORE, PLAN_TRIP};
    use crate::components::Link;
    use crate::rendering::Region;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Button {
        PlanTrip,
        ExploreMore,
    }

    impl Button {
        pub const ALL: [Button; 2] = [Button::PlanTrip, Button::ExploreMore];

        pub fn label(&self) -> &'static str {
            match self {
                Button::PlanTrip => PLAN_TRIP,
                Button::ExploreMore => EXPLORE_MORE,
            }
        }

        /// Where the button leads.
        pub fn link(&self) -> Link {
            match self {
                Button::PlanTrip => Link::Contact,
                Button::ExploreMore => Link::Home,
            }
        }

        pub fn other(&self) -> Self {
            match self {
                Button::PlanTrip => Button::ExploreMore,
                Button::ExploreMore => Button::PlanTrip,
            }
        }

        pub fn region(&self, row: usize) -> Region {
            match self {
                Button::PlanTrip => Region::row(row, 0, PLAN_TRIP.len()),
                Button::ExploreMore => {
                    Region::row(row, PLAN_TRIP.len() + BUTTON_GAP, EXPLORE_MORE.len())
                }
            }
        }
    }
}
use button::Button;

mod content {
    use super::{CONTENT_ROW, NO_DESTINATION};
    use crate::catalog::Destination;
    use crate::color::Color;
    use crate::rendering::Yarn;

    /// Return the rows describing the destination, starting at `CONTENT_ROW`.
    pub fn lines(destination: Option<&Destination>, columns: usize) -> Vec<Yarn> {
        let destination: &Destination = match destination {
            Some(destination) => destination,
            None => {
                let mut yarn = Yarn::truncated(NO_DESTINATION, columns);
                yarn.color(Color::GrayyedText.into());
                return vec![yarn];
            }
        };

        let mut name = Yarn::truncated(&destination.name, columns);
        name.color(Color::Highlight.into());
        let mut lines: Vec<Yarn> = vec![name, Yarn::new()];

        lines.extend(Yarn::wrapped(&destination.description, columns));
        lines.push(Yarn::new());

        let mut image = Yarn::truncated(&format!("Image: {}", destination.image_url), columns);
        image.color(Color::GrayyedText.into());
        lines.push(image);

        lines
    }

    /// The row the buttons are drawn on.
    pub fn buttons_row(destination: Option<&Destination>, columns: usize) -> usize {
        CONTENT_ROW + lines(destination, columns).len() + 1
    }
}

mod destination {
    use super::content;
    use super::{Button, Effect, Props, CONTENT_ROW};
    use crate::catalog::Destination;
    use crate::color::Color;
    use crate::component::Component;
    use crate::components::{Link, Nav, NavEffect, NavEvent, NavProps};
    use crate::event::Event;
    use crate::rendering::{Fabric, Location, Size, Yarn};

    use crossterm::event::{
        Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    };

    pub struct DestinationPage {
        nav: Nav,
        destination: Option<Destination>,
        focus: Button,
        size: Size,
    }

    impl DestinationPage {
        pub fn destination(&self) -> Option<&Destination> {
            self.destination.as_ref()
        }

        fn nav_effect(&mut self, event: NavEvent) -> Option<Effect> {
            match self.nav.handle(event) {
                Some(NavEffect::Navigate(link)) => Some(Effect::Navigate(link)),
                None => None,
            }
        }

        fn press(&self, button: Button) -> Option<Effect> {
            log::debug!("Pressed {}.", button.label());
            Some(Effect::Navigate(button.link()))
        }

        fn handle_key(&mut self, event: KeyEvent) -> Option<Effect> {
            if self.nav.captures(&event) {
                return self.nav_effect(NavEvent::Key { event });
            }

            match event {
                KeyEvent {
                    code: KeyCode::Char('p'),
                    modifiers: KeyModifiers::NONE,
                    ..
                } => self.press(Button::PlanTrip),
                KeyEvent {
                    code: KeyCode::Char('e'),
                    modifiers: KeyModifiers::NONE,
                    ..
                } => self.press(Button::ExploreMore),
                KeyEvent {
                    code: KeyCode::Enter,
                    ..
                } => self.press(self.focus),
                KeyEvent {
                    code: KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab,
                    ..
                } => {
                    self.focus = self.focus.other();
                    None
                }
                _ => None,
            }
        }

        fn handle_mouse(&mut self, event: MouseEvent) -> Option<Effect> {
            if event.kind != MouseEventKind::Down(MouseButton::Left) {
                return None;
            }
            let location = Location::new(event.row.into(), event.column.into());
            let columns: usize = self.size.columns;

            let on_nav: bool = self.nav.covers(location, columns);
            let nav_effect = self.nav_effect(NavEvent::Click { location, columns });
            if on_nav {
                return nav_effect;
            }

            let row: usize = content::buttons_row(self.destination.as_ref(), columns);
            let button: Button = Button::ALL
                .into_iter()
                .find(|button| button.region(row).contains(location))?;
            self.press(button)
        }
    }

    impl Component<Props, Event, Effect> for DestinationPage {
        fn new(props: Props) -> Self {
            Self {
                nav: Nav::new(NavProps {
                    breakpoint: props.breakpoint,
                    current: Link::Destinations,
                }),
                destination: props.destination,
                focus: Button::PlanTrip,
                size: props.size,
            }
        }

        fn handle(&mut self, event: Event) -> Option<Effect> {
            match event {
                Event::Tick { .. } => None,
                Event::Crossterm { event, .. } => match event {
                    CrosstermEvent::Resize(columns, rows) => {
                        self.size = Size::from((columns, rows));
                        None
                    }
                    CrosstermEvent::Key(event) => self.handle_key(event),
                    CrosstermEvent::Mouse(event) => self.handle_mouse(event),
                },
            }
        }

        fn render(&self, size: Size) -> Fabric {
            let mut fabric = Fabric::new(size);
            let columns: usize = size.columns;

            fabric.overlay(&self.nav.render(Size::new(size.rows.min(1), columns)), Location::new(0, 0));

            let lines: Vec<Yarn> = content::lines(self.destination.as_ref(), columns);
            fabric.write_all(lines.iter(), Location::new(CONTENT_ROW, 0));

            let row: usize = content::buttons_row(self.destination.as_ref(), columns);
            for button in Button::ALL {
                let mut yarn = Yarn::from(button.label());
                if button == self.focus {
                    yarn.color(Color::InvertedText.into());
                    yarn.background(Color::Highlight.into());
                } else {
                    yarn.color(Color::Brand.into());
                }
                fabric.write(&yarn, button.region(row).location);
            }

            if let Some((location, menu)) = self.nav.menu(columns) {
                fabric.overlay(&menu, location);
            }

            fabric
        }
    }
}
pub use destination::DestinationPage;

mod effect {
    use crate::components::Link;

    #[derive(Debug, PartialEq, Eq)]
    pub enum Effect {
        Navigate(Link),
    }
}
pub use effect::Effect;
