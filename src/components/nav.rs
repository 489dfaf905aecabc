/*!
The navigation bar at the top of every page, with its collapsible menu for narrow terminals.
*/

const BRAND: &str = "Wanderlust";
const HAMBURGER: &str = "≡";
const MENU_WIDTH: usize = 16;
const LINK_GAP: usize = 2;

mod link {
    /// Somewhere the navigation can take the user.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Link {
        Home,
        Destinations,
        Contact,
    }

    impl Link {
        pub const ALL: [Link; 3] = [Link::Home, Link::Destinations, Link::Contact];

        pub fn label(&self) -> &'static str {
            match self {
                Link::Home => "Home",
                Link::Destinations => "Destinations",
                Link::Contact => "Contact",
            }
        }
    }
}
pub use link::Link;

mod props {
    use super::Link;

    pub struct Props {
        /// Terminals narrower than this get the collapsed menu.
        pub breakpoint: usize,
        /// The link of the page the navigation is on.
        pub current: Link,
    }
}
pub use props::Props;

mod layout {
    use super::{Link, HAMBURGER, LINK_GAP, MENU_WIDTH};
    use crate::rendering::{Location, Region};

    /// Return where each inline link is drawn on the bar.
    pub fn inline_links(columns: usize) -> Vec<(Link, Region)> {
        let width: usize = Link::ALL
            .iter()
            .map(|link| link.label().len() + LINK_GAP)
            .sum();
        let mut column: usize = columns.saturating_sub(width);
        Link::ALL
            .iter()
            .map(|link| {
                let region = Region::row(0, column, link.label().len());
                column += link.label().len() + LINK_GAP;
                (*link, region)
            })
            .collect()
    }

    pub fn hamburger(columns: usize) -> Region {
        Region::row(0, columns.saturating_sub(HAMBURGER.chars().count() + 1), 1)
    }

    pub fn menu(columns: usize) -> Region {
        let width: usize = MENU_WIDTH.min(columns);
        Region::new(1, columns - width, Link::ALL.len(), width)
    }

    /// Return the link of the open menu that the location is on.
    pub fn menu_link(columns: usize, location: Location) -> Option<Link> {
        if !menu(columns).contains(location) {
            return None;
        }
        Link::ALL.get(location.row - 1).copied()
    }
}

mod nav {
    use super::layout;
    use super::{Action, Effect, Event, Link, Props, State, BRAND, HAMBURGER};
    use crate::color::Color;
    use crate::component::Component;
    use crate::rendering::{Fabric, Location, Size, Yarn};
    use crate::stateful::Stateful;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn is_toggle(event: &KeyEvent) -> bool {
        event.code == KeyCode::Char('n') && event.modifiers == KeyModifiers::CONTROL
    }

    pub struct Nav {
        state: State,
    }

    impl Nav {
        pub fn is_open(&self) -> bool {
            self.state.is_open()
        }

        pub fn is_collapsed(&self, columns: usize) -> bool {
            columns < self.state.breakpoint()
        }

        /// Whether the key is meant for the navigation rather than the page.
        pub fn captures(&self, event: &KeyEvent) -> bool {
            self.is_open() || is_toggle(event)
        }

        /// Whether the location is on the bar or on the open menu.
        pub fn covers(&self, location: Location, columns: usize) -> bool {
            location.row == 0 || (self.is_open() && layout::menu(columns).contains(location))
        }

        /// Return the open menu and where to draw it.
        pub fn menu(&self, columns: usize) -> Option<(Location, Fabric)> {
            if !self.is_open() {
                return None;
            }

            let region = layout::menu(columns);
            let rows: Vec<Yarn> = Link::ALL
                .iter()
                .enumerate()
                .map(|(index, link)| {
                    let mut yarn = Yarn::truncated(&format!(" {}", link.label()), region.size.columns);
                    if index == self.state.selected() {
                        yarn.color(Color::InvertedText.into());
                        yarn.background(Color::Highlight.into());
                    } else {
                        yarn.background(Color::Dropdown.into());
                    }
                    yarn
                })
                .collect();
            Some((region.location, Fabric::from(rows)))
        }

        fn click(&self, location: Location, columns: usize) -> Option<Action> {
            if location.row == 0 {
                if self.is_collapsed(columns) {
                    if layout::hamburger(columns).contains(location) {
                        return Some(Action::Toggle);
                    }
                    return None;
                }
                return layout::inline_links(columns)
                    .into_iter()
                    .find(|(_, region)| region.contains(location))
                    .map(|(link, _)| Action::Navigate(link));
            }

            if !self.is_open() {
                return None;
            }
            match layout::menu_link(columns, location) {
                Some(link) => Some(Action::Navigate(link)),
                None => Some(Action::Close),
            }
        }
    }

    impl Component<Props, Event, Effect> for Nav {
        fn new(props: Props) -> Self {
            let state = State::from(props);
            Self { state }
        }

        fn handle(&mut self, event: Event) -> Option<Effect> {
            let action: Option<Action> = match event {
                Event::Click { location, columns } => self.click(location, columns),
                Event::Key { event } if is_toggle(&event) => Some(Action::Toggle),
                Event::Key { event } if self.is_open() => match event.code {
                    KeyCode::Up => Some(Action::Up),
                    KeyCode::Down => Some(Action::Down),
                    KeyCode::Enter => Some(Action::Navigate(Link::ALL[self.state.selected()])),
                    KeyCode::Esc => Some(Action::Close),
                    _ => None,
                },
                Event::Key { .. } => None,
            };

            if let Some(action) = action {
                self.state.perform(action)
            } else {
                None
            }
        }

        fn render(&self, size: Size) -> Fabric {
            let mut fabric = Fabric::new(size);
            if size.rows == 0 {
                return fabric;
            }

            let mut brand = Yarn::from(BRAND);
            brand.color(Color::Brand.into());
            fabric.write(&brand, Location::new(0, 1));

            if self.is_collapsed(size.columns) {
                let mut hamburger = Yarn::from(HAMBURGER);
                if self.is_open() {
                    hamburger.color(Color::Highlight.into());
                }
                fabric.write(&hamburger, layout::hamburger(size.columns).location);
            } else {
                for (link, region) in layout::inline_links(size.columns) {
                    let mut yarn = Yarn::from(link.label());
                    if link == self.state.current() {
                        yarn.color(Color::Highlight.into());
                    }
                    fabric.write(&yarn, region.location);
                }
            }

            fabric
        }
    }
}
pub use nav::Nav;

mod event {
    use crate::rendering::Location;

    use crossterm::event::KeyEvent;

    pub enum Event {
        /// A left click anywhere on the page.
        Click { location: Location, columns: usize },
        /// `Ctrl+N` toggles the menu, and the open menu takes the arrows, Enter and Escape.
        Key { event: KeyEvent },
    }
}
pub use event::Event;

mod state {
    use super::{Action, Effect, Link, Props};
    use crate::stateful::Stateful;

    pub struct State {
        breakpoint: usize,
        current: Link,
        open: bool,
        selected: usize,
    }

    impl From<Props> for State {
        fn from(props: Props) -> Self {
            Self {
                breakpoint: props.breakpoint,
                current: props.current,
                open: false,
                selected: 0,
            }
        }
    }

    impl State {
        pub fn breakpoint(&self) -> usize {
            self.breakpoint
        }

        pub fn current(&self) -> Link {
            self.current
        }

        pub fn is_open(&self) -> bool {
            self.open
        }

        pub fn selected(&self) -> usize {
            self.selected
        }

        fn toggle(&mut self) -> Option<Effect> {
            self.open = !self.open;
            self.selected = 0;
            log::debug!("Navigation menu open: {}.", self.open);
            None
        }

        fn close(&mut self) -> Option<Effect> {
            self.open = false;
            None
        }

        fn up(&mut self) -> Option<Effect> {
            self.selected = self.selected.saturating_sub(1);
            None
        }

        fn down(&mut self) -> Option<Effect> {
            self.selected = (self.selected + 1).min(Link::ALL.len() - 1);
            None
        }

        fn navigate(&mut self, link: Link) -> Option<Effect> {
            self.open = false;
            Some(Effect::Navigate(link))
        }
    }

    impl Stateful<Action, Effect> for State {
        fn perform(&mut self, action: Action) -> Option<Effect> {
            match action {
                Action::Toggle => self.toggle(),
                Action::Close => self.close(),
                Action::Up => self.up(),
                Action::Down => self.down(),
                Action::Navigate(link) => self.navigate(link),
            }
        }
    }
}
use state::State;

mod action {
    use super::Link;

    pub enum Action {
        Toggle,
        Close,
        Up,
        Down,
        Navigate(Link),
    }
}
use action::Action;

mod effect {
    use super::Link;

    #[derive(Debug, PartialEq, Eq)]
    pub enum Effect {
        Navigate(Link),
    }
}
pub use effect::Effect;
