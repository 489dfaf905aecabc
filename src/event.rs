/*!
Events the application delivers to the root component.
*/
use std::time::Instant;

use crossterm::event::Event as CrosstermEvent;

#[derive(Debug, Clone)]
pub enum Event {
    /// Something happened in the terminal.
    Crossterm { event: CrosstermEvent, now: Instant },
    /// Nothing happened before the root component's deadline.
    Tick { now: Instant },
}
