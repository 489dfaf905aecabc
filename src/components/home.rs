/*!
The home page: navigation, the search bar and the list of every destination.
*/

/// The first row of the destination list.
const BODY_ROW: usize = 3;
const INDENT: usize = 2;

const HEADING: &str = "Destinations";
const SEARCH_UNAVAILABLE: &str = "Search is unavailable.";
const DESTINATIONS_UNAVAILABLE: &str = "Destinations are unavailable.";

mod props {
    use crate::catalog::Catalog;
    use crate::rendering::Size;

    use std::rc::Rc;
    use std::time::Duration;

    pub struct Props {
        /// The catalog, if it could be loaded.
        pub catalog: Option<Rc<Catalog>>,
        pub debounce: Duration,
        pub limit: usize,
        pub breakpoint: usize,
        /// A query to search for straight away.
        pub query: Option<String>,
        pub size: Size,
    }
}
pub use props::Props;

mod body {
    use super::{DESTINATIONS_UNAVAILABLE, HEADING, INDENT};
    use crate::catalog::Catalog;
    use crate::color::Color;
    use crate::rendering::Yarn;

    /// A row of the destination list and the index of the destination it belongs to.
    pub type Line = (Yarn, Option<usize>);

    pub fn lines(catalog: Option<&Catalog>, columns: usize) -> Vec<Line> {
        let mut heading = Yarn::truncated(HEADING, columns);
        heading.color(Color::Highlight.into());
        let mut lines: Vec<Line> = vec![(heading, None), (Yarn::new(), None)];

        let catalog: &Catalog = match catalog {
            Some(catalog) => catalog,
            None => {
                let mut yarn = Yarn::truncated(DESTINATIONS_UNAVAILABLE, columns);
                yarn.color(Color::GrayyedText.into());
                lines.push((yarn, None));
                return lines;
            }
        };

        for (index, destination) in catalog.destinations().iter().enumerate() {
            let mut name = Yarn::truncated(&destination.name, columns);
            name.color(Color::Brand.into());
            lines.push((name, Some(index)));

            for line in Yarn::wrapped(&destination.description, columns.saturating_sub(INDENT)) {
                lines.push((Yarn::blank(INDENT).concat(line), Some(index)));
            }

            lines.push((Yarn::new(), None));
        }
        lines
    }
}

mod home {
    use super::body::{self, Line};
    use super::{Effect, Props, State, BODY_ROW, SEARCH_UNAVAILABLE};
    use crate::color::Color;
    use crate::component::Component;
    use crate::components::{Nav, NavEffect, NavEvent, SearchBar, SearchBarEffect, SearchBarEvent};
    use crate::event::Event;
    use crate::rendering::{Fabric, Location, Size, Yarn};

    use std::time::Instant;

    use crossterm::event::{
        Event as CrosstermEvent, KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind,
    };

    pub struct Home {
        state: State,
    }

    impl Home {
        pub fn search(&self) -> Option<&SearchBar> {
            self.state.search.as_ref()
        }

        pub fn nav(&self) -> &Nav {
            &self.state.nav
        }

        pub fn scroll(&self) -> usize {
            self.state.scroll
        }

        /// Whether the page body is held still.
        pub fn is_scroll_locked(&self) -> bool {
            self.state.is_scroll_locked()
        }

        fn handle_key(&mut self, event: KeyEvent, now: Instant) -> Option<Effect> {
            if self.state.nav.captures(&event) {
                return self.nav_effect(NavEvent::Key { event });
            }

            match event.code {
                KeyCode::PageDown => {
                    let rows = self.state.body_rows();
                    self.state.scroll_by(rows as isize);
                    None
                }
                KeyCode::PageUp => {
                    let rows = self.state.body_rows();
                    self.state.scroll_by(-(rows as isize));
                    None
                }
                _ => self.search_effect(SearchBarEvent::Key { event, now }),
            }
        }

        fn handle_mouse(&mut self, event: MouseEvent) -> Option<Effect> {
            let location = Location::new(event.row.into(), event.column.into());
            match event.kind {
                MouseEventKind::Down(MouseButton::Left) => self.click(location),
                MouseEventKind::ScrollDown => {
                    self.state.scroll_by(1);
                    None
                }
                MouseEventKind::ScrollUp => {
                    self.state.scroll_by(-1);
                    None
                }
                _ => None,
            }
        }

        fn click(&mut self, location: Location) -> Option<Effect> {
            let columns: usize = self.state.size.columns;

            let on_nav: bool = self.state.nav.covers(location, columns);
            let nav_effect = self.nav_effect(NavEvent::Click { location, columns });
            if on_nav {
                self.search_effect(SearchBarEvent::Dismiss);
                return nav_effect;
            }

            // The search bar starts on the row below the navigation.
            let relative = Location::new(location.row - 1, location.column);
            let on_search: bool = match &self.state.search {
                Some(search) => search.covers(relative),
                None => location.row == 1,
            };
            let search_effect = self.search_effect(SearchBarEvent::Click {
                location: relative,
                columns,
            });
            if on_search {
                return search_effect;
            }

            if location.row < BODY_ROW {
                return None;
            }
            let lines: Vec<Line> = body::lines(self.state.catalog.as_deref(), columns);
            let index: usize = self.state.scroll + location.row - BODY_ROW;
            let (_, destination) = lines.get(index)?;
            let destination = self.state.catalog.as_ref()?.destinations().get((*destination)?)?;
            log::info!("Picked {:?} from the destination list.", destination.name);
            Some(Effect::Select(destination.clone()))
        }

        fn nav_effect(&mut self, event: NavEvent) -> Option<Effect> {
            match self.state.nav.handle(event) {
                Some(NavEffect::Navigate(link)) => Some(Effect::Navigate(link)),
                None => None,
            }
        }

        fn search_effect(&mut self, event: SearchBarEvent) -> Option<Effect> {
            let search: &mut SearchBar = self.state.search.as_mut()?;
            match search.handle(event) {
                Some(SearchBarEffect::Select(destination)) => Some(Effect::Select(destination)),
                None => None,
            }
        }
    }

    impl Component<Props, Event, Effect> for Home {
        fn new(props: Props) -> Self {
            let state = State::from(props);
            Self { state }
        }

        fn handle(&mut self, event: Event) -> Option<Effect> {
            match event {
                Event::Tick { now } => self.search_effect(SearchBarEvent::Tick { now }),
                Event::Crossterm { event, now } => match event {
                    CrosstermEvent::Resize(columns, rows) => {
                        self.state.size = Size::from((columns, rows));
                        self.state.scroll_by(0);
                        None
                    }
                    CrosstermEvent::Key(event) => self.handle_key(event, now),
                    CrosstermEvent::Mouse(event) => self.handle_mouse(event),
                },
            }
        }

        fn render(&self, size: Size) -> Fabric {
            let mut fabric = Fabric::new(size);
            if size.rows == 0 {
                return fabric;
            }
            let columns: usize = size.columns;

            let lines: Vec<Line> = body::lines(self.state.catalog.as_deref(), columns);
            let body_rows: usize = size.rows.saturating_sub(BODY_ROW);
            let visible: Vec<Yarn> = lines
                .into_iter()
                .skip(self.state.scroll)
                .take(body_rows)
                .map(|(yarn, _)| yarn)
                .collect();
            fabric.write_all(visible.iter(), Location::new(BODY_ROW, 0));

            fabric.overlay(&self.state.nav.render(Size::new(1, columns)), Location::new(0, 0));

            match &self.state.search {
                Some(search) => {
                    let rows: usize = search.height().min(size.rows.saturating_sub(1));
                    fabric.overlay(&search.render(Size::new(rows, columns)), Location::new(1, 0));
                }
                None => {
                    let mut yarn = Yarn::from(SEARCH_UNAVAILABLE);
                    yarn.color(Color::GrayyedText.into());
                    fabric.write(&yarn, Location::new(1, 0));
                }
            }

            if let Some((location, menu)) = self.state.nav.menu(columns) {
                fabric.overlay(&menu, location);
            }

            fabric
        }

        fn deadline(&self) -> Option<Instant> {
            self.state.search.as_ref().and_then(|search| search.deadline())
        }
    }
}
pub use home::Home;

mod state {
    use super::body;
    use super::{Props, BODY_ROW};
    use crate::catalog::Catalog;
    use crate::component::Component;
    use crate::components::{Link, Nav, NavProps, SearchBar, SearchBarProps};
    use crate::rendering::Size;

    use std::rc::Rc;

    pub struct State {
        pub nav: Nav,
        pub search: Option<SearchBar>,
        pub catalog: Option<Rc<Catalog>>,
        pub scroll: usize,
        pub size: Size,
    }

    impl From<Props> for State {
        fn from(props: Props) -> Self {
            let search: Option<SearchBar> = props.catalog.as_ref().map(|catalog| {
                SearchBar::new(SearchBarProps {
                    catalog: Rc::clone(catalog),
                    debounce: props.debounce,
                    limit: props.limit,
                    query: props.query.clone(),
                })
            });
            if search.is_none() {
                log::info!("Search is disabled because there is no catalog.");
            }

            Self {
                nav: Nav::new(NavProps {
                    breakpoint: props.breakpoint,
                    current: Link::Home,
                }),
                search,
                catalog: props.catalog,
                scroll: 0,
                size: props.size,
            }
        }
    }

    impl State {
        pub fn is_scroll_locked(&self) -> bool {
            let suggestions_visible: bool = match &self.search {
                Some(search) => search.suggestions().is_visible(),
                None => false,
            };
            suggestions_visible || self.nav.is_open()
        }

        pub fn body_rows(&self) -> usize {
            self.size.rows.saturating_sub(BODY_ROW)
        }

        /// Scroll the body by some rows, keeping the last row of the list at or below the
        /// bottom of the screen.
        pub fn scroll_by(&mut self, rows: isize) {
            if rows != 0 && self.is_scroll_locked() {
                return;
            }
            let len: usize = body::lines(self.catalog.as_deref(), self.size.columns).len();
            let max: usize = len.saturating_sub(self.body_rows());
            let scroll: isize = self.scroll as isize + rows;
            self.scroll = (scroll.max(0) as usize).min(max);
        }
    }
}
use state::State;

mod effect {
    use crate::catalog::Destination;
    use crate::components::Link;

    #[derive(Debug, PartialEq, Eq)]
    pub enum Effect {
        Navigate(Link),
        Select(Destination),
    }
}
pub use effect::Effect;

#[cfg(test)]
mod tests {
    use super::*;

    use crate::catalog::{Catalog, Destination};
    use crate::component::Component;
    use crate::components::Link;
    use crate::event::Event;
    use crate::rendering::Size;

    use std::rc::Rc;
    use std::time::{Duration, Instant};

    use crossterm::event::{
        Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    };

    const SIZE: Size = Size {
        rows: 12,
        columns: 100,
    };

    fn catalog() -> Rc<Catalog> {
        Rc::new(Catalog::new(vec![
            Destination::new("Paris", "City of lights", "paris.jpg"),
            Destination::new("Rome", "Ancient ruins", "rome.jpg"),
            Destination::new("Kyoto", "Temples and gardens", "kyoto.jpg"),
            Destination::new("Copacabana", "A famous beach", "copacabana.jpg"),
        ]))
    }

    fn home(catalog: Option<Rc<Catalog>>, query: Option<&str>) -> Home {
        Home::new(Props {
            catalog,
            debounce: Duration::from_millis(300),
            limit: 5,
            breakpoint: 80,
            query: query.map(|query| query.to_string()),
            size: SIZE,
        })
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Crossterm {
            event: CrosstermEvent::Key(KeyEvent::new(code, modifiers)),
            now: Instant::now(),
        }
    }

    fn mouse(kind: MouseEventKind, row: u16, column: u16) -> Event {
        Event::Crossterm {
            event: CrosstermEvent::Mouse(MouseEvent {
                kind,
                column,
                row,
                modifiers: KeyModifiers::NONE,
            }),
            now: Instant::now(),
        }
    }

    fn click(row: u16, column: u16) -> Event {
        mouse(MouseEventKind::Down(MouseButton::Left), row, column)
    }

    #[test]
    fn test_click_outside_the_search_hides_the_suggestions() {
        let mut home = home(Some(catalog()), Some("par"));
        assert!(home.search().unwrap().suggestions().is_visible());

        home.handle(click(10, 50));

        let suggestions = home.search().unwrap().suggestions();
        assert!(!suggestions.is_visible());
        assert!(suggestions.results().is_empty());
    }

    #[test]
    fn test_click_on_the_nav_bar_hides_the_suggestions() {
        let mut home = home(Some(catalog()), Some("par"));

        home.handle(click(0, 3));

        assert!(!home.search().unwrap().suggestions().is_visible());
        assert!(!home.is_scroll_locked());
    }

    #[test]
    fn test_click_on_a_suggestion_selects_it() {
        let mut home = home(Some(catalog()), Some("par"));

        let effect = home.handle(click(2, 5));

        assert_eq!(
            effect,
            Some(Effect::Select(Destination::new(
                "Paris",
                "City of lights",
                "paris.jpg"
            )))
        );
    }

    #[test]
    fn test_suggestions_lock_scrolling() {
        let mut home = home(Some(catalog()), Some("ro"));
        assert!(home.is_scroll_locked());

        home.handle(mouse(MouseEventKind::ScrollDown, 5, 5));
        assert_eq!(home.scroll(), 0);

        home.handle(key(KeyCode::Esc, KeyModifiers::NONE));
        assert!(!home.is_scroll_locked());

        home.handle(mouse(MouseEventKind::ScrollDown, 5, 5));
        assert_eq!(home.scroll(), 1);
    }

    #[test]
    fn test_open_menu_locks_scrolling() {
        let mut home = home(Some(catalog()), None);

        home.handle(key(KeyCode::Char('n'), KeyModifiers::CONTROL));
        assert!(home.nav().is_open());
        home.handle(key(KeyCode::PageDown, KeyModifiers::NONE));
        assert_eq!(home.scroll(), 0);

        home.handle(key(KeyCode::Esc, KeyModifiers::NONE));
        home.handle(key(KeyCode::PageDown, KeyModifiers::NONE));
        // Fourteen rows of list and nine rows of screen.
        assert_eq!(home.scroll(), 5);
    }

    #[test]
    fn test_menu_keyboard_navigation() {
        let mut home = home(Some(catalog()), None);

        home.handle(key(KeyCode::Char('n'), KeyModifiers::CONTROL));
        home.handle(key(KeyCode::Down, KeyModifiers::NONE));
        home.handle(key(KeyCode::Down, KeyModifiers::NONE));
        let effect = home.handle(key(KeyCode::Enter, KeyModifiers::NONE));

        assert_eq!(effect, Some(Effect::Navigate(Link::Contact)));
    }

    #[test]
    fn test_click_on_the_destination_list_selects() {
        let mut home = home(Some(catalog()), None);

        // Heading, blank, then "Paris" and its description.
        let effect = home.handle(click(6, 4));

        assert_eq!(
            effect,
            Some(Effect::Select(Destination::new(
                "Paris",
                "City of lights",
                "paris.jpg"
            )))
        );
    }

    #[test]
    fn test_without_a_catalog_search_is_unavailable() {
        let mut home = home(None, Some("par"));

        assert!(home.search().is_none());
        assert_eq!(home.handle(key(KeyCode::Char('p'), KeyModifiers::NONE)), None);
        assert_eq!(home.deadline(), None);

        let fabric = home.render(SIZE);
        assert_eq!(fabric.line(1).trim_end(), "Search is unavailable.");
        assert_eq!(fabric.line(5).trim_end(), "Destinations are unavailable.");
    }

    #[test]
    fn test_typing_sets_a_deadline() {
        let mut home = home(Some(catalog()), None);

        home.handle(key(KeyCode::Char('k'), KeyModifiers::NONE));

        assert!(home.deadline().is_some());
    }

    #[test]
    fn test_render() {
        let home = home(Some(catalog()), None);

        let fabric = home.render(SIZE);

        assert!(fabric.line(0).starts_with(" Wanderlust"));
        assert!(fabric.line(1).ends_with("[Search] [Clear]"));
        assert_eq!(fabric.line(3).trim_end(), "Destinations");
        assert_eq!(fabric.line(5).trim_end(), "Paris");
        assert_eq!(fabric.line(6).trim_end(), "  City of lights");
    }
}
