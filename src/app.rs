use crate::component::Component;
use crate::event::Event;
use crate::rendering::{Fabric, Renderer, Size};
use crate::system_effect::SystemEffect;

use std::io::{self, Stdout, Write};
use std::panic;
use std::time::Instant;

use crossterm::cursor::{Hide as HideCursor, Show as ShowCursor};
use crossterm::event::{self as crossterm_event, DisableMouseCapture, EnableMouseCapture};
use crossterm::event::Event as CrosstermEvent;
use crossterm::style::Print;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen, SetTitle};
use crossterm::terminal::{Clear as ClearTerminal, ClearType as TerminalClearType};
use crossterm::{ExecutableCommand, QueueableCommand};

/// The ASCII bell character.
const BELL: char = '\u{7}';

pub struct App {
    stdout: Stdout,
    renderer: Renderer,
    size: Size,
}

impl App {
    pub fn new() -> Self {
        let stdout = io::stdout();
        let renderer = Renderer::new();
        App {
            stdout,
            renderer,
            size: Size::default(),
        }
    }

    /// Run the root component until it asks to exit.
    pub fn run<Props>(
        &mut self,
        root: &mut impl Component<Props, Event, SystemEffect>,
        starting_effects: Vec<SystemEffect>,
    ) -> io::Result<()> {
        self.set_up()?;

        log::info!("Running.");

        let result = self.run_loop(root, starting_effects);

        log::info!("Exiting.");
        self.teardown()?;

        result
    }

    fn run_loop<Props>(
        &mut self,
        root: &mut impl Component<Props, Event, SystemEffect>,
        starting_effects: Vec<SystemEffect>,
    ) -> io::Result<()> {
        for effect in starting_effects {
            if !self.perform(effect)? {
                return Ok(());
            }
        }

        loop {
            let fabric: Fabric = root.render(self.size);
            self.renderer.render(&fabric)?;

            let event: Event = self.next_event(root.deadline())?;
            if let Event::Crossterm {
                event: CrosstermEvent::Resize(columns, rows),
                ..
            } = event
            {
                self.size = Size::from((columns, rows));
                self.lazy_clear_screen()?;
            }

            if let Some(effect) = root.handle(event) {
                if !self.perform(effect)? {
                    return Ok(());
                }
            }
        }
    }

    /// Wait for the next terminal event, or until the deadline passes.
    fn next_event(&mut self, deadline: Option<Instant>) -> io::Result<Event> {
        if let Some(deadline) = deadline {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !crossterm_event::poll(timeout)? {
                return Ok(Event::Tick {
                    now: Instant::now(),
                });
            }
        }

        let event: CrosstermEvent = crossterm_event::read()?;
        Ok(Event::Crossterm {
            event,
            now: Instant::now(),
        })
    }

    /// Perform the effect, returning whether to keep running.
    fn perform(&mut self, effect: SystemEffect) -> io::Result<bool> {
        match effect {
            SystemEffect::Exit => return Ok(false),
            SystemEffect::Bell => {
                self.stdout.execute(Print(BELL))?;
            }
            SystemEffect::SetTitle { title } => {
                self.stdout.execute(SetTitle(title))?;
            }
        }
        Ok(true)
    }

    fn set_up(&mut self) -> io::Result<()> {
        self.change_panic_hook();

        self.size = Size::from(terminal::size()?);

        self.stdout.queue(EnterAlternateScreen)?;
        self.stdout.queue(EnableMouseCapture)?;
        terminal::enable_raw_mode()?;
        self.stdout.queue(HideCursor)?;
        self.lazy_clear_screen()?;
        self.stdout.flush()
    }

    fn teardown(&mut self) -> io::Result<()> {
        self.stdout.queue(DisableMouseCapture)?;
        self.stdout.queue(LeaveAlternateScreen)?;
        terminal::disable_raw_mode()?;
        self.stdout.queue(ShowCursor)?;
        self.stdout.flush()
    }

    fn lazy_clear_screen(&mut self) -> io::Result<()> {
        self.stdout.queue(ClearTerminal(TerminalClearType::All))?;
        Ok(())
    }

    fn change_panic_hook(&mut self) {
        let hook_before = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let mut stdout = io::stdout();
            let _ = stdout.queue(DisableMouseCapture);
            let _ = stdout.queue(LeaveAlternateScreen);
            let _ = stdout.queue(ShowCursor);
            let _ = stdout.flush();
            let _ = terminal::disable_raw_mode();
            hook_before(info);
        }));
    }
}
