mod props {
    pub struct Props {
        pub placeholder: String,
        pub value: String,
        pub focus: bool,
        /// Whether Enter starts a new line instead of being reported.
        pub multiline: bool,
    }

    impl Props {
        pub fn new(placeholder: &str) -> Self {
            Self {
                placeholder: placeholder.to_string(),
                value: String::new(),
                focus: false,
                multiline: false,
            }
        }

        pub fn value(mut self, value: &str) -> Self {
            self.value = value.to_string();
            self
        }

        pub fn focus(mut self, focus: bool) -> Self {
            self.focus = focus;
            self
        }

        pub fn multiline(mut self, multiline: bool) -> Self {
            self.multiline = multiline;
            self
        }
    }
}
pub use props::Props;

mod input {
    use super::{Action, Effect, Event, Props, State};
    use crate::color::Color;
    use crate::component::Component;
    use crate::rendering::{Fabric, Size, Yarn};
    use crate::stateful::Stateful;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    pub struct Input {
        state: State,
    }

    impl Input {
        pub fn value(&self) -> &str {
            self.state.value()
        }

        pub fn is_focused(&self) -> bool {
            self.state.is_focused()
        }

        fn render_lines(&self, size: Size) -> Vec<Yarn> {
            let value: &str = self.state.value();

            let mut lines: Vec<String> = if value.is_empty() {
                vec![String::new()]
            } else {
                value.split('\n').map(|line| line.to_string()).collect()
            };
            if self.state.is_focused() {
                if let Some(last) = lines.last_mut() {
                    last.push('_');
                }
            }

            // The end of the value is kept in view.
            let mut yarns: Vec<Yarn> = Vec::new();
            for line in lines {
                let characters: Vec<char> = line.chars().collect();
                if characters.len() <= size.columns || size.columns == 0 {
                    yarns.push(Yarn::from(characters));
                } else if self.state.is_multiline() {
                    for chunk in characters.chunks(size.columns) {
                        yarns.push(Yarn::from(chunk.to_vec()));
                    }
                } else {
                    let start = characters.len() - size.columns;
                    yarns.push(Yarn::from(characters[start..].to_vec()));
                }
            }
            let skip = yarns.len().saturating_sub(size.rows);
            yarns.into_iter().skip(skip).collect()
        }
    }

    impl Component<Props, Event, Effect> for Input {
        fn new(props: Props) -> Self {
            let state = State::from(props);
            Self { state }
        }

        fn handle(&mut self, event: Event) -> Option<Effect> {
            let action: Option<Action> = match event {
                Event::Focus => Some(Action::Focus),
                Event::Unfocus => Some(Action::Unfocus),
                Event::Set { value } => Some(Action::Set { value }),
                Event::Clear => Some(Action::Set {
                    value: String::new(),
                }),
                Event::Key { event } => match event {
                    KeyEvent {
                        code: KeyCode::Backspace,
                        ..
                    } => Some(Action::Pop),
                    KeyEvent {
                        code: KeyCode::Enter,
                        ..
                    } => Some(Action::Enter),
                    KeyEvent {
                        code: KeyCode::Char(character),
                        modifiers,
                    } if modifiers == KeyModifiers::NONE || modifiers == KeyModifiers::SHIFT => {
                        Some(Action::Push { character })
                    }
                    _ => None,
                },
            };

            if let Some(action) = action {
                self.state.perform(action)
            } else {
                None
            }
        }

        fn render(&self, size: Size) -> Fabric {
            let background = Color::focus_or_important(self.state.is_focused());

            let mut rows: Vec<Yarn> = if self.state.value().is_empty() && !self.state.is_focused() {
                let mut yarn = Yarn::truncated(self.state.placeholder(), size.columns);
                yarn.color(Color::GrayyedText.into());
                vec![yarn]
            } else {
                self.render_lines(size)
                    .into_iter()
                    .map(|mut yarn| {
                        yarn.color(Color::InvertedText.into());
                        yarn
                    })
                    .collect()
            };
            rows.resize(size.rows, Yarn::new());

            let rows: Vec<Yarn> = rows
                .into_iter()
                .map(|mut yarn| {
                    yarn.resize(size.columns);
                    yarn.background(background.into());
                    yarn
                })
                .collect();
            Fabric::from(rows)
        }
    }
}
pub use input::Input;

mod event {
    use crossterm::event::KeyEvent;

    pub enum Event {
        Focus,
        Unfocus,
        Set { value: String },
        Clear,
        Key { event: KeyEvent },
    }
}
pub use event::Event;

mod state {
    use super::{Action, Effect, Props};
    use crate::stateful::Stateful;

    pub struct State {
        placeholder: String,
        value: String,
        focus: bool,
        multiline: bool,
    }

    impl From<Props> for State {
        fn from(props: Props) -> Self {
            Self {
                placeholder: props.placeholder,
                value: props.value,
                focus: props.focus,
                multiline: props.multiline,
            }
        }
    }

    impl State {
        pub fn placeholder(&self) -> &str {
            &self.placeholder
        }

        pub fn value(&self) -> &str {
            &self.value
        }

        pub fn is_focused(&self) -> bool {
            self.focus
        }

        pub fn is_multiline(&self) -> bool {
            self.multiline
        }

        fn focus(&mut self) -> Option<Effect> {
            self.focus = true;
            None
        }

        fn unfocus(&mut self) -> Option<Effect> {
            self.focus = false;
            None
        }

        fn set(&mut self, value: String) -> Option<Effect> {
            self.value = value;
            None
        }

        fn push(&mut self, character: char) -> Option<Effect> {
            self.value.push(character);
            self.changed()
        }

        fn pop(&mut self) -> Option<Effect> {
            self.value.pop()?;
            self.changed()
        }

        fn enter(&mut self) -> Option<Effect> {
            if self.multiline {
                self.push('\n')
            } else {
                Some(Effect::Enter {
                    value: self.value.clone(),
                })
            }
        }

        fn changed(&self) -> Option<Effect> {
            Some(Effect::Changed {
                value: self.value.clone(),
            })
        }
    }

    impl Stateful<Action, Effect> for State {
        fn perform(&mut self, action: Action) -> Option<Effect> {
            match action {
                Action::Focus => self.focus(),
                Action::Unfocus => self.unfocus(),
                Action::Set { value } => self.set(value),
                Action::Push { character } => self.push(character),
                Action::Pop => self.pop(),
                Action::Enter => self.enter(),
            }
        }
    }
}
use state::State;

mod action {
    pub enum Action {
        Focus,
        Unfocus,
        Set { value: String },
        Push { character: char },
        Pop,
        Enter,
    }
}
use action::Action;

mod effect {
    #[derive(Debug, PartialEq, Eq)]
    pub enum Effect {
        /// The value was edited.
        Changed { value: String },
        /// Enter was pressed on a single line input.
        Enter { value: String },
    }
}
pub use effect::Effect;

#[cfg(test)]
mod tests {
    use super::*;

    use crate::component::Component;
    use crate::rendering::Size;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key {
            event: KeyEvent::new(code, KeyModifiers::NONE),
        }
    }

    #[test]
    fn test_typing_reports_each_change() {
        let mut input = Input::new(Props::new("Search").focus(true));

        assert_eq!(
            input.handle(key(KeyCode::Char('r'))),
            Some(Effect::Changed {
                value: "r".to_string()
            })
        );
        assert_eq!(
            input.handle(key(KeyCode::Char('o'))),
            Some(Effect::Changed {
                value: "ro".to_string()
            })
        );
        assert_eq!(
            input.handle(key(KeyCode::Backspace)),
            Some(Effect::Changed {
                value: "r".to_string()
            })
        );
    }

    #[test]
    fn test_backspace_on_empty_is_not_a_change() {
        let mut input = Input::new(Props::new("Search"));

        assert_eq!(input.handle(key(KeyCode::Backspace)), None);
    }

    #[test]
    fn test_control_characters_are_ignored() {
        let mut input = Input::new(Props::new("Search"));

        let effect = input.handle(Event::Key {
            event: KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
        });

        assert_eq!(effect, None);
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_enter_on_single_line() {
        let mut input = Input::new(Props::new("Search").value("rome"));

        assert_eq!(
            input.handle(key(KeyCode::Enter)),
            Some(Effect::Enter {
                value: "rome".to_string()
            })
        );
    }

    #[test]
    fn test_enter_on_multiline_starts_a_new_line() {
        let mut input = Input::new(Props::new("Message").value("hi").multiline(true));

        input.handle(key(KeyCode::Enter));

        assert_eq!(input.value(), "hi\n");
    }

    #[test]
    fn test_render_shows_placeholder_when_empty_and_unfocused() {
        let input = Input::new(Props::new("Search destinations"));

        let fabric = input.render(Size::new(1, 10));

        assert_eq!(fabric.line(0), "Search ...");
    }

    #[test]
    fn test_render_keeps_the_end_in_view() {
        let input = Input::new(Props::new("Search").value("abcdefgh").focus(true));

        let fabric = input.render(Size::new(1, 5));

        assert_eq!(fabric.line(0), "efgh_");
    }
}
