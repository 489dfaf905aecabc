mod input;
pub use input::{Effect as InputEffect, Event as InputEvent, Input, Props as InputProps};
