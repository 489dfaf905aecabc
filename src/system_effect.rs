/*!
System effects are side-effects that components can emit which the application will handle.
*/

/// A side-effect that components can emit which the application will handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SystemEffect {
    /// Exit wanderlust.
    Exit,
    /// Ring the terminal bell.
    Bell,
    /// Change the title of the terminal window.
    SetTitle {
        /// The new title.
        title: String,
    },
}
