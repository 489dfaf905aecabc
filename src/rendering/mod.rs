/*!
Contains functionality for representing styled text, laying it out, and rendering it to a terminal
screen.
*/
mod renderer;
pub use renderer::Renderer;

mod yarn;
pub use yarn::Yarn;

mod fabric;
pub use fabric::Fabric;

mod location;
pub use location::Location;

mod region;
pub use region::Region;

mod size;
pub use size::Size;
