pub mod common;

mod contact;
pub use contact::{ContactPage, Effect as ContactEffect, Props as ContactProps};

mod destination;
pub use destination::{DestinationPage, Effect as DestinationEffect, Props as DestinationProps};

mod home;
pub use home::{Effect as HomeEffect, Home, Props as HomeProps};

mod nav;
pub use nav::{Effect as NavEffect, Event as NavEvent, Link, Nav, Props as NavProps};

mod search_bar;
pub use search_bar::{
    Effect as SearchBarEffect, Event as SearchBarEvent, Props as SearchBarProps, SearchBar,
};

mod suggestions;
pub use suggestions::{
    Effect as SuggestionsEffect, Event as SuggestionsEvent, Props as SuggestionsProps, Suggestions,
};

mod toast;
pub use toast::{Event as ToastEvent, Props as ToastProps, Toast, DEFAULT_DURATION as TOAST_DURATION};

mod wanderlust;
pub use wanderlust::{Props as WanderlustProps, Start, Wanderlust};
