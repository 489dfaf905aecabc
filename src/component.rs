use crate::rendering::{Fabric, Size};

use std::time::Instant;

pub trait Component<Props, Event, Effect> {
    fn new(props: Props) -> Self
    where
        Self: Sized;

    fn handle(&mut self, event: Event) -> Option<Effect>;

    fn render(&self, size: Size) -> Fabric;

    /// The earliest instant the component needs to be handled again even if nothing happens.
    fn deadline(&self) -> Option<Instant> {
        None
    }
}
