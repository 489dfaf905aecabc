/*!
The search input, its buttons and the suggestions below them.
*/

/// The buttons drawn to the right of the input.
const BUTTONS: &str = " [Search] [Clear]";
const SEARCH_BUTTON: &str = "[Search]";
const CLEAR_BUTTON: &str = "[Clear]";

mod props {
    use crate::catalog::Catalog;

    use std::rc::Rc;
    use std::time::Duration;

    pub struct Props {
        pub catalog: Rc<Catalog>,
        pub debounce: Duration,
        pub limit: usize,
        /// A query to search for straight away.
        pub query: Option<String>,
    }
}
pub use props::Props;

mod layout {
    use super::{BUTTONS, CLEAR_BUTTON, SEARCH_BUTTON};
    use crate::rendering::Region;

    /// Where the parts of the bar row are drawn for a given width.
    pub struct Layout {
        pub input: Region,
        pub search: Region,
        pub clear: Region,
    }

    impl Layout {
        pub fn new(columns: usize) -> Self {
            let input_columns: usize = columns.saturating_sub(BUTTONS.len());
            let search_column: usize = input_columns + 1;
            let clear_column: usize = search_column + SEARCH_BUTTON.len() + 1;
            Self {
                input: Region::row(0, 0, input_columns),
                search: Region::row(0, search_column, SEARCH_BUTTON.len()),
                clear: Region::row(0, clear_column, CLEAR_BUTTON.len()),
            }
        }
    }
}
use layout::Layout;

mod search_bar {
    use super::{Action, Effect, Event, Layout, Props, State, BUTTONS};
    use crate::color::Color;
    use crate::component::Component;
    use crate::components::Suggestions;
    use crate::rendering::{Fabric, Location, Size, Yarn};
    use crate::stateful::Stateful;

    use std::time::Instant;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    pub struct SearchBar {
        state: State,
    }

    impl SearchBar {
        pub fn query(&self) -> &str {
            self.state.input().value()
        }

        pub fn suggestions(&self) -> &Suggestions {
            self.state.suggestions()
        }

        /// The number of rows needed to draw the bar and its suggestions.
        pub fn height(&self) -> usize {
            1 + self.state.suggestions().height()
        }

        /// Whether the location (relative to the bar) is on the bar or the suggestions.
        pub fn covers(&self, location: Location) -> bool {
            match location.row {
                0 => true,
                row => row - 1 < self.state.suggestions().height(),
            }
        }

        fn click(&self, location: Location, columns: usize) -> Option<Action> {
            if !self.covers(location) {
                return Some(Action::Dismiss);
            }
            if location.row > 0 {
                return Some(Action::ClickSuggestion {
                    row: location.row - 1,
                });
            }

            let layout = Layout::new(columns);
            if layout.search.contains(location) {
                Some(Action::Search)
            } else if layout.clear.contains(location) {
                Some(Action::Clear)
            } else {
                None
            }
        }
    }

    impl Component<Props, Event, Effect> for SearchBar {
        fn new(props: Props) -> Self {
            let query: Option<String> = props.query.clone();

            let mut state = State::from(props);
            if let Some(query) = query {
                state.perform(Action::Set { query });
                state.perform(Action::Search);
            }

            Self { state }
        }

        fn handle(&mut self, event: Event) -> Option<Effect> {
            let action: Option<Action> = match event {
                Event::Tick { now } => Some(Action::Tick { now }),
                Event::Dismiss => Some(Action::Dismiss),
                Event::Click { location, columns } => self.click(location, columns),
                Event::Key { event, now } => match event {
                    KeyEvent {
                        code: KeyCode::Esc, ..
                    } => Some(Action::Dismiss),
                    KeyEvent {
                        code: KeyCode::Char('u'),
                        modifiers: KeyModifiers::CONTROL,
                        ..
                    } => Some(Action::Clear),
                    KeyEvent {
                        code: KeyCode::Up, ..
                    } => Some(Action::Up),
                    KeyEvent {
                        code: KeyCode::Down,
                        ..
                    } => Some(Action::Down),
                    KeyEvent {
                        code: KeyCode::Enter,
                        ..
                    } => match self.state.suggestions().selected() {
                        Some(_) => Some(Action::Choose),
                        None => Some(Action::Search),
                    },
                    event => Some(Action::Type { event, now }),
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
            if size.rows == 0 {
                return fabric;
            }

            let layout = Layout::new(size.columns);
            let input: Fabric = self.state.input().render(layout.input.size);
            fabric.overlay(&input, layout.input.location);

            let mut buttons = Yarn::from(BUTTONS);
            buttons.color(Color::Brand.into());
            fabric.write(&buttons, Location::new(0, layout.input.size.columns));

            let suggestions_rows: usize = self
                .state
                .suggestions()
                .height()
                .min(size.rows - 1);
            let suggestions: Fabric = self
                .state
                .suggestions()
                .render(Size::new(suggestions_rows, size.columns));
            fabric.overlay(&suggestions, Location::new(1, 0));

            fabric
        }

        fn deadline(&self) -> Option<Instant> {
            self.state.debouncer().deadline()
        }
    }
}
pub use search_bar::SearchBar;

mod event {
    use crate::rendering::Location;

    use std::time::Instant;

    use crossterm::event::KeyEvent;

    pub enum Event {
        Key { event: KeyEvent, now: Instant },
        Tick { now: Instant },
        /// A left click, relative to the top left of the bar.
        Click { location: Location, columns: usize },
        /// Hide the suggestions because something else was interacted with.
        Dismiss,
    }
}
pub use event::Event;

mod state {
    use super::{Action, Effect, Props};
    use crate::catalog::{filter, Catalog, Destination};
    use crate::component::Component;
    use crate::components::common::{Input, InputEffect, InputEvent, InputProps};
    use crate::components::{Suggestions, SuggestionsEffect, SuggestionsEvent, SuggestionsProps};
    use crate::debounce::Debouncer;
    use crate::stateful::Stateful;

    use std::rc::Rc;
    use std::time::Instant;

    use crossterm::event::KeyEvent;

    pub struct State {
        catalog: Rc<Catalog>,
        limit: usize,
        input: Input,
        suggestions: Suggestions,
        debouncer: Debouncer<String>,
    }

    impl From<Props> for State {
        fn from(props: Props) -> Self {
            Self {
                catalog: props.catalog,
                limit: props.limit,
                input: Input::new(InputProps::new("Search destinations, temples, beaches").focus(true)),
                suggestions: Suggestions::new(SuggestionsProps {}),
                debouncer: Debouncer::new(props.debounce),
            }
        }
    }

    impl State {
        pub fn input(&self) -> &Input {
            &self.input
        }

        pub fn suggestions(&self) -> &Suggestions {
            &self.suggestions
        }

        pub fn debouncer(&self) -> &Debouncer<String> {
            &self.debouncer
        }

        fn results(&self, query: &str) -> Vec<Destination> {
            filter(query, &self.catalog)
                .into_iter()
                .take(self.limit)
                .cloned()
                .collect()
        }

        fn show(&mut self, results: Vec<Destination>, show_empty_state: bool) {
            self.suggestions.handle(SuggestionsEvent::Show {
                results,
                show_empty_state,
            });
        }

        fn set(&mut self, query: String) -> Option<Effect> {
            self.input.handle(InputEvent::Set { value: query });
            None
        }

        fn type_(&mut self, event: KeyEvent, now: Instant) -> Option<Effect> {
            match self.input.handle(InputEvent::Key { event }) {
                Some(InputEffect::Changed { value }) => {
                    self.debouncer.schedule(now, value);
                }
                Some(InputEffect::Enter { .. }) | None => {}
            }
            None
        }

        fn tick(&mut self, now: Instant) -> Option<Effect> {
            if let Some(query) = self.debouncer.fire(now) {
                let results = self.results(&query);
                log::debug!("Live search for {:?} found {} results.", query, results.len());
                self.show(results, false);
            }
            None
        }

        fn search(&mut self) -> Option<Effect> {
            let query: String = self.input.value().to_string();
            if query.trim().is_empty() {
                return None;
            }

            self.debouncer.cancel();
            let results = self.results(&query);
            log::info!("Searched for {:?} and found {} results.", query, results.len());
            self.show(results, true);
            None
        }

        fn clear(&mut self) -> Option<Effect> {
            self.input.handle(InputEvent::Clear);
            self.debouncer.cancel();
            self.suggestions.handle(SuggestionsEvent::Hide);
            log::debug!("Search cleared.");
            None
        }

        fn dismiss(&mut self) -> Option<Effect> {
            self.debouncer.cancel();
            self.suggestions.handle(SuggestionsEvent::Hide);
            None
        }

        fn suggestions_effect(&mut self, effect: Option<SuggestionsEffect>) -> Option<Effect> {
            match effect {
                Some(SuggestionsEffect::Select(destination)) => {
                    self.debouncer.cancel();
                    Some(Effect::Select(destination))
                }
                None => None,
            }
        }
    }

    impl Stateful<Action, Effect> for State {
        fn perform(&mut self, action: Action) -> Option<Effect> {
            match action {
                Action::Set { query } => self.set(query),
                Action::Type { event, now } => self.type_(event, now),
                Action::Tick { now } => self.tick(now),
                Action::Search => self.search(),
                Action::Clear => self.clear(),
                Action::Dismiss => self.dismiss(),
                Action::Up => {
                    self.suggestions.handle(SuggestionsEvent::Up);
                    None
                }
                Action::Down => {
                    self.suggestions.handle(SuggestionsEvent::Down);
                    None
                }
                Action::Choose => {
                    let effect = self.suggestions.handle(SuggestionsEvent::Choose);
                    self.suggestions_effect(effect)
                }
                Action::ClickSuggestion { row } => {
                    let effect = self.suggestions.handle(SuggestionsEvent::Click { row });
                    self.suggestions_effect(effect)
                }
            }
        }
    }
}
use state::State;

mod action {
    use std::time::Instant;

    use crossterm::event::KeyEvent;

    pub enum Action {
        Set { query: String },
        Type { event: KeyEvent, now: Instant },
        Tick { now: Instant },
        Search,
        Clear,
        Dismiss,
        Up,
        Down,
        Choose,
        ClickSuggestion { row: usize },
    }
}
use action::Action;

mod effect {
    use crate::catalog::Destination;

    #[derive(Debug, PartialEq, Eq)]
    pub enum Effect {
        Select(Destination),
    }
}
pub use effect::Effect;

#[cfg(test)]
mod tests {
    use super::*;

    use crate::catalog::{Catalog, Destination};
    use crate::component::Component;
    use crate::rendering::{Location, Size};

    use std::rc::Rc;
    use std::time::{Duration, Instant};

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use test_case::test_case;

    const DEBOUNCE: Duration = Duration::from_millis(300);
    const COLUMNS: usize = 40;

    fn catalog() -> Rc<Catalog> {
        Rc::new(Catalog::new(vec![
            Destination::new("Paris", "City of lights", "paris.jpg"),
            Destination::new("Rome", "Ancient ruins", "rome.jpg"),
            Destination::new("Angkor Wat", "A vast temple complex", "angkor.jpg"),
        ]))
    }

    fn search_bar(query: Option<&str>) -> SearchBar {
        SearchBar::new(Props {
            catalog: catalog(),
            debounce: DEBOUNCE,
            limit: 5,
            query: query.map(|query| query.to_string()),
        })
    }

    fn type_str(search_bar: &mut SearchBar, string: &str, now: Instant) {
        for character in string.chars() {
            search_bar.handle(Event::Key {
                event: KeyEvent::new(KeyCode::Char(character), KeyModifiers::NONE),
                now,
            });
        }
    }

    fn press(search_bar: &mut SearchBar, code: KeyCode, now: Instant) -> Option<Effect> {
        search_bar.handle(Event::Key {
            event: KeyEvent::new(code, KeyModifiers::NONE),
            now,
        })
    }

    fn names(search_bar: &SearchBar) -> Vec<String> {
        search_bar
            .suggestions()
            .results()
            .iter()
            .map(|destination| destination.name.clone())
            .collect()
    }

    #[test]
    fn test_typing_filters_after_the_debounce() {
        let start = Instant::now();
        let mut search_bar = search_bar(None);

        type_str(&mut search_bar, "par", start);
        assert_eq!(search_bar.deadline(), Some(start + DEBOUNCE));

        search_bar.handle(Event::Tick {
            now: start + DEBOUNCE - Duration::from_millis(1),
        });
        assert!(!search_bar.suggestions().is_visible());

        search_bar.handle(Event::Tick {
            now: start + DEBOUNCE,
        });
        assert_eq!(names(&search_bar), vec!["Paris"]);
        assert_eq!(search_bar.deadline(), None);
    }

    #[test]
    fn test_each_keystroke_restarts_the_debounce() {
        let start = Instant::now();
        let mut search_bar = search_bar(None);

        type_str(&mut search_bar, "ro", start);
        let later = start + Duration::from_millis(200);
        type_str(&mut search_bar, "m", later);

        search_bar.handle(Event::Tick {
            now: start + DEBOUNCE,
        });
        assert!(!search_bar.suggestions().is_visible());

        search_bar.handle(Event::Tick {
            now: later + DEBOUNCE,
        });
        assert_eq!(names(&search_bar), vec!["Rome"]);
    }

    #[test]
    fn test_live_search_without_matches_stays_hidden() {
        let start = Instant::now();
        let mut search_bar = search_bar(None);

        type_str(&mut search_bar, "zz", start);
        search_bar.handle(Event::Tick {
            now: start + DEBOUNCE,
        });

        assert!(!search_bar.suggestions().is_visible());
    }

    #[test]
    fn test_explicit_search_without_matches_shows_the_empty_state() {
        let start = Instant::now();
        let mut search_bar = search_bar(None);

        type_str(&mut search_bar, "zz", start);
        press(&mut search_bar, KeyCode::Enter, start);

        assert!(search_bar.suggestions().is_visible());
        assert!(search_bar.suggestions().results().is_empty());
        assert_eq!(search_bar.deadline(), None);
    }

    #[test_case(""; "empty")]
    #[test_case("   "; "only spaces")]
    fn test_explicit_search_of_a_blank_query_does_nothing(query: &str) {
        let start = Instant::now();
        let mut search_bar = search_bar(None);

        type_str(&mut search_bar, query, start);
        press(&mut search_bar, KeyCode::Enter, start);

        assert!(!search_bar.suggestions().is_visible());
    }

    #[test]
    fn test_starting_query_is_searched() {
        let search_bar = search_bar(Some("an"));

        assert_eq!(search_bar.query(), "an");
        assert_eq!(names(&search_bar), vec!["Rome", "Angkor Wat"]);
    }

    #[test]
    fn test_results_are_limited() {
        let catalog: Vec<Destination> = (0..8)
            .map(|number| Destination::new(&format!("Beach {}", number), "Sand", "beach.jpg"))
            .collect();
        let search_bar = SearchBar::new(Props {
            catalog: Rc::new(Catalog::new(catalog)),
            debounce: DEBOUNCE,
            limit: 5,
            query: Some("beach".to_string()),
        });

        assert_eq!(search_bar.suggestions().results().len(), 5);
    }

    #[test]
    fn test_escape_hides_the_suggestions() {
        let start = Instant::now();
        let mut search_bar = search_bar(Some("par"));

        press(&mut search_bar, KeyCode::Esc, start);

        assert!(!search_bar.suggestions().is_visible());
        assert!(search_bar.suggestions().results().is_empty());
    }

    #[test]
    fn test_clear_empties_the_query_and_hides_the_suggestions() {
        let start = Instant::now();
        let mut search_bar = search_bar(Some("par"));

        search_bar.handle(Event::Key {
            event: KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
            now: start,
        });

        assert_eq!(search_bar.query(), "");
        assert!(!search_bar.suggestions().is_visible());
    }

    #[test]
    fn test_click_outside_hides_and_clears_the_suggestions() {
        let mut search_bar = search_bar(Some("par"));
        assert_eq!(search_bar.height(), 4);

        search_bar.handle(Event::Click {
            location: Location::new(10, 3),
            columns: COLUMNS,
        });

        assert!(!search_bar.suggestions().is_visible());
        assert!(search_bar.suggestions().results().is_empty());
    }

    #[test]
    fn test_click_on_a_suggestion_selects_it() {
        let mut search_bar = search_bar(Some("an"));

        let effect = search_bar.handle(Event::Click {
            location: Location::new(5, 3),
            columns: COLUMNS,
        });

        assert_eq!(
            effect,
            Some(Effect::Select(Destination::new(
                "Angkor Wat",
                "A vast temple complex",
                "angkor.jpg"
            )))
        );
    }

    #[test]
    fn test_buttons() {
        let start = Instant::now();
        let mut search_bar = search_bar(None);
        type_str(&mut search_bar, "rome", start);

        // " [Search] [Clear]" takes the last 17 columns.
        search_bar.handle(Event::Click {
            location: Location::new(0, COLUMNS - 15),
            columns: COLUMNS,
        });
        assert_eq!(names(&search_bar), vec!["Rome"]);

        search_bar.handle(Event::Click {
            location: Location::new(0, COLUMNS - 4),
            columns: COLUMNS,
        });
        assert_eq!(search_bar.query(), "");
        assert!(!search_bar.suggestions().is_visible());
    }

    #[test]
    fn test_enter_on_a_highlighted_suggestion_selects_it() {
        let start = Instant::now();
        let mut search_bar = search_bar(Some("an"));

        press(&mut search_bar, KeyCode::Down, start);
        let effect = press(&mut search_bar, KeyCode::Enter, start);

        assert_eq!(
            effect,
            Some(Effect::Select(Destination::new(
                "Rome",
                "Ancient ruins",
                "rome.jpg"
            )))
        );
    }

    #[test]
    fn test_render() {
        let search_bar = search_bar(Some("par"));

        let fabric = search_bar.render(Size::new(4, 30));

        assert_eq!(fabric.line(0), "par_          [Search] [Clear]");
        assert_eq!(fabric.line(1).trim_end(), "Paris");
    }
}
