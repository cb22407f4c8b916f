// app/events.rs

//! Events consumed by [`App::dispatch`](super::App::dispatch).

/// UI events that change the application state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The composer's send button was activated.
    SendClicked,
    /// The composer's stop button was activated.
    StopClicked,
    /// A view was requested by route name.
    RouteChanged(String),
    /// The back gesture on the displayed view.
    ViewPopped,
    /// The composer text changed.
    InputChanged,
}
