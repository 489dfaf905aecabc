/*!
The drop-down of destinations matching the search.
*/

/// The number of rows each suggested destination takes up.
pub const ROWS_PER_ENTRY: usize = 3;

pub const NO_RESULTS: &str = "No results found.";

mod props {
    pub struct Props {}
}
pub use props::Props;

mod suggestions {
    use super::{Action, Effect, Event, Props, State, NO_RESULTS, ROWS_PER_ENTRY};
    use crate::catalog::Destination;
    use crate::color::Color;
    use crate::component::Component;
    use crate::rendering::{Fabric, Size, Yarn};
    use crate::stateful::Stateful;

    pub struct Suggestions {
        state: State,
    }

    impl Suggestions {
        pub fn is_visible(&self) -> bool {
            self.state.is_visible()
        }

        pub fn results(&self) -> &[Destination] {
            self.state.results()
        }

        pub fn selected(&self) -> Option<usize> {
            self.state.selected()
        }

        /// The number of rows needed to draw the suggestions.
        pub fn height(&self) -> usize {
            if !self.state.is_visible() {
                0
            } else if self.state.results().is_empty() {
                1
            } else {
                self.state.results().len() * ROWS_PER_ENTRY
            }
        }

        /// The index of the result drawn on the row.
        pub fn entry_at(&self, row: usize) -> Option<usize> {
            if !self.state.is_visible() {
                return None;
            }
            let entry = row / ROWS_PER_ENTRY;
            if entry < self.state.results().len() {
                Some(entry)
            } else {
                None
            }
        }
    }

    impl Component<Props, Event, Effect> for Suggestions {
        fn new(_props: Props) -> Self {
            Self {
                state: State::default(),
            }
        }

        fn handle(&mut self, event: Event) -> Option<Effect> {
            let action: Option<Action> = match event {
                Event::Show {
                    results,
                    show_empty_state,
                } => Some(Action::Show {
                    results,
                    show_empty_state,
                }),
                Event::Hide => Some(Action::Hide),
                Event::Up => Some(Action::Up),
                Event::Down => Some(Action::Down),
                Event::Choose => self.state.selected().map(|entry| Action::Select { entry }),
                Event::Click { row } => self.entry_at(row).map(|entry| Action::Select { entry }),
            };

            if let Some(action) = action {
                self.state.perform(action)
            } else {
                None
            }
        }

        fn render(&self, size: Size) -> Fabric {
            let mut fabric = Fabric::new(size);
            if !self.state.is_visible() {
                return fabric;
            }

            let columns = size.columns;
            let mut yarns: Vec<Yarn> = Vec::new();

            if self.state.results().is_empty() {
                let mut yarn = Yarn::truncated(NO_RESULTS, columns);
                yarn.color(Color::LightGrayyedText.into());
                yarn.background(Color::Dropdown.into());
                yarns.push(yarn);
            }

            for (entry, destination) in self.state.results().iter().enumerate() {
                let selected = self.state.selected() == Some(entry);

                let mut name = Yarn::truncated(&destination.name, columns);
                let mut description = Yarn::truncated(&destination.description, columns);
                let mut image = Yarn::truncated(&destination.image_url, columns);

                if selected {
                    for yarn in [&mut name, &mut description, &mut image] {
                        yarn.color(Color::InvertedText.into());
                        yarn.background(Color::Highlight.into());
                    }
                } else {
                    name.color(Color::Brand.into());
                    image.color(Color::GrayyedText.into());
                    for yarn in [&mut name, &mut description, &mut image] {
                        yarn.background(Color::Dropdown.into());
                    }
                }

                yarns.push(name);
                yarns.push(description);
                yarns.push(image);
            }

            yarns.truncate(size.rows);
            fabric.write_all(yarns.iter(), Default::default());
            fabric
        }
    }
}
pub use suggestions::Suggestions;

mod event {
    use crate::catalog::Destination;

    pub enum Event {
        Show {
            results: Vec<Destination>,
            show_empty_state: bool,
        },
        Hide,
        Up,
        Down,
        /// Pick the highlighted entry.
        Choose,
        /// A click on a row of the suggestions.
        Click { row: usize },
    }
}
pub use event::Event;

mod state {
    use super::{Action, Effect};
    use crate::catalog::Destination;
    use crate::stateful::Stateful;

    #[derive(Default)]
    pub struct State {
        results: Vec<Destination>,
        visible: bool,
        selected: Option<usize>,
    }

    impl State {
        pub fn is_visible(&self) -> bool {
            self.visible
        }

        pub fn results(&self) -> &[Destination] {
            &self.results
        }

        pub fn selected(&self) -> Option<usize> {
            self.selected
        }

        fn show(&mut self, results: Vec<Destination>, show_empty_state: bool) -> Option<Effect> {
            if results.is_empty() && !show_empty_state {
                return self.hide();
            }
            self.results = results;
            self.visible = true;
            self.selected = None;
            None
        }

        fn hide(&mut self) -> Option<Effect> {
            self.results.clear();
            self.visible = false;
            self.selected = None;
            None
        }

        fn up(&mut self) -> Option<Effect> {
            // Moving up from the first entry goes back to the input.
            self.selected = match self.selected {
                Some(0) | None => None,
                Some(entry) => Some(entry - 1),
            };
            None
        }

        fn down(&mut self) -> Option<Effect> {
            if !self.visible || self.results.is_empty() {
                return None;
            }
            self.selected = match self.selected {
                None => Some(0),
                Some(entry) => Some((entry + 1).min(self.results.len() - 1)),
            };
            None
        }

        fn select(&mut self, entry: usize) -> Option<Effect> {
            let destination: Destination = self.results.get(entry)?.clone();
            self.hide();
            Some(Effect::Select(destination))
        }
    }

    impl Stateful<Action, Effect> for State {
        fn perform(&mut self, action: Action) -> Option<Effect> {
            match action {
                Action::Show {
                    results,
                    show_empty_state,
                } => self.show(results, show_empty_state),
                Action::Hide => self.hide(),
                Action::Up => self.up(),
                Action::Down => self.down(),
                Action::Select { entry } => self.select(entry),
            }
        }
    }
}
use state::State;

mod action {
    use crate::catalog::Destination;

    pub enum Action {
        Show {
            results: Vec<Destination>,
            show_empty_state: bool,
        },
        Hide,
        Up,
        Down,
        Select {
            entry: usize,
        },
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

    use crate::catalog::Destination;
    use crate::component::Component;
    use crate::rendering::Size;

    use test_case::test_case;

    fn destinations() -> Vec<Destination> {
        vec![
            Destination::new("Paris", "City of lights", "paris.jpg"),
            Destination::new("Rome", "Ancient ruins", "rome.jpg"),
        ]
    }

    fn showing(results: Vec<Destination>, show_empty_state: bool) -> Suggestions {
        let mut suggestions = Suggestions::new(Props {});
        suggestions.handle(Event::Show {
            results,
            show_empty_state,
        });
        suggestions
    }

    #[test_case(vec![], false, false, 0; "empty on the live path is hidden")]
    #[test_case(vec![], true, true, 1; "empty on the explicit path shows a message")]
    #[test_case(destinations(), false, true, 6; "results are shown")]
    fn test_show(
        results: Vec<Destination>,
        show_empty_state: bool,
        visible: bool,
        height: usize,
    ) {
        let suggestions = showing(results, show_empty_state);

        assert_eq!(suggestions.is_visible(), visible);
        assert_eq!(suggestions.height(), height);
    }

    #[test]
    fn test_live_empty_result_clears_previous_results() {
        let mut suggestions = showing(destinations(), false);

        suggestions.handle(Event::Show {
            results: vec![],
            show_empty_state: false,
        });

        assert!(!suggestions.is_visible());
        assert!(suggestions.results().is_empty());
    }

    #[test]
    fn test_render_empty_state() {
        let suggestions = showing(vec![], true);

        let fabric = suggestions.render(Size::new(1, 20));

        assert_eq!(fabric.line(0), "No results found.   ");
    }

    #[test]
    fn test_render_entries() {
        let suggestions = showing(destinations(), false);

        let fabric = suggestions.render(Size::new(6, 14));

        assert_eq!(fabric.line(0), "Paris         ");
        assert_eq!(fabric.line(1), "City of lights");
        assert_eq!(fabric.line(2), "paris.jpg     ");
        assert_eq!(fabric.line(3), "Rome          ");
    }

    #[test_case(0, Some(0); "first row of the first entry")]
    #[test_case(2, Some(0); "last row of the first entry")]
    #[test_case(3, Some(1); "first row of the second entry")]
    #[test_case(6, None; "below the entries")]
    fn test_entry_at(row: usize, expected: Option<usize>) {
        let suggestions = showing(destinations(), false);

        assert_eq!(suggestions.entry_at(row), expected);
    }

    #[test]
    fn test_click_selects_and_hides() {
        let mut suggestions = showing(destinations(), false);

        let effect = suggestions.handle(Event::Click { row: 4 });

        assert_eq!(
            effect,
            Some(Effect::Select(Destination::new(
                "Rome",
                "Ancient ruins",
                "rome.jpg"
            )))
        );
        assert!(!suggestions.is_visible());
    }

    #[test]
    fn test_choose_highlighted_entry() {
        let mut suggestions = showing(destinations(), false);

        assert_eq!(suggestions.handle(Event::Choose), None);

        suggestions.handle(Event::Down);
        suggestions.handle(Event::Down);
        suggestions.handle(Event::Down);
        assert_eq!(suggestions.selected(), Some(1));
        suggestions.handle(Event::Up);

        assert_eq!(
            suggestions.handle(Event::Choose),
            Some(Effect::Select(Destination::new(
                "Paris",
                "City of lights",
                "paris.jpg"
            )))
        );
    }

    #[test]
    fn test_hide() {
        let mut suggestions = showing(destinations(), true);

        suggestions.handle(Event::Hide);

        assert!(!suggestions.is_visible());
        assert_eq!(suggestions.height(), 0);
        assert_eq!(suggestions.entry_at(0), None);
    }
}
