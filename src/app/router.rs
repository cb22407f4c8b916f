// app/router.rs

//! Stack of named views.
//!
//! Navigation always rebuilds the stack from the root: `navigate` clears it,
//! pushes the root view and then, for a known non-root route, overlays that
//! single view. There is no deeper history than one overlay.

use std::fmt::{self, Display};

use enum_iterator::{all, Sequence};
use log::*;

/// Views addressable by route name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Sequence)]
pub enum Route {
    Main,
    Settings,
    SelectText,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Main => "/",
            Route::Settings => "/settings",
            Route::SelectText => "/select_text",
        }
    }

    /// Looks up a route by its exact path.
    pub fn from_path(path: &str) -> Option<Route> {
        all::<Route>().find(|route| route.path() == path)
    }

    pub fn is_root(&self) -> bool {
        *self == Route::Main
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRouter {
    stack: Vec<Route>,
}

impl ViewRouter {
    /// Returns a router displaying the root view.
    pub fn new() -> Self {
        let mut router = Self { stack: Vec::new() };
        router.navigate(Route::Main.path());
        router
    }

    /// Goes to the root view, then overlays `route` if it names a non-root view.
    ///
    /// Unknown routes leave only the root view.
    pub fn navigate(&mut self, route: &str) {
        self.stack.clear();
        self.stack.push(Route::Main);
        match Route::from_path(route) {
            Some(view) if !view.is_root() => self.stack.push(view),
            Some(_) => {}
            None => warn!("Unknown route {:?}, showing {}", route, Route::Main),
        }
        trace!("View stack: {:?}", self.stack);
    }

    /// Removes the top view unless only the root remains, then navigates to
    /// the view now on top.
    pub fn pop(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
        let top = self.current();
        self.navigate(top.path());
    }

    /// The displayed view.
    pub fn current(&self) -> Route {
        self.stack.last().copied().unwrap_or(Route::Main)
    }

    pub fn stack(&self) -> &[Route] {
        self.stack.as_slice()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl Default for ViewRouter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_root_only() {
        let router = ViewRouter::new();
        assert_eq!(router.stack(), &[Route::Main]);
        assert_eq!(router.current(), Route::Main);
    }

    #[test]
    fn test_navigate_then_pop_to_root() {
        let mut router = ViewRouter::new();
        router.navigate("/settings");
        assert_eq!(router.stack(), &[Route::Main, Route::Settings]);
        assert_eq!(router.current(), Route::Settings);
        router.pop();
        assert_eq!(router.stack(), &[Route::Main]);
        router.pop();
        assert_eq!(router.stack(), &[Route::Main]);
    }

    #[test]
    fn test_navigate_unknown_route_falls_back_to_root() {
        let mut router = ViewRouter::new();
        router.navigate("/settings");
        router.navigate("/does_not_exist");
        assert_eq!(router.stack(), &[Route::Main]);
    }

    #[test]
    fn test_navigate_replaces_overlay() {
        let mut router = ViewRouter::new();
        router.navigate("/settings");
        router.navigate("/select_text");
        assert_eq!(router.stack(), &[Route::Main, Route::SelectText]);
        router.navigate("/");
        assert_eq!(router.stack(), &[Route::Main]);
    }

    #[test]
    fn test_route_paths_round_trip() {
        for route in all::<Route>() {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
        assert_eq!(Route::from_path("/Settings"), None);
    }

    #[test]
    fn test_stack_never_empties() {
        let mut router = ViewRouter::new();
        let steps = ["/select_text", "pop", "pop", "/nope", "pop", "/settings", "pop", "pop"];
        for step in steps {
            if step == "pop" {
                router.pop();
            } else {
                router.navigate(step);
            }
            assert!(router.depth() >= 1);
            assert_eq!(router.stack()[0], Route::Main);
            assert!(router.depth() <= 2);
        }
    }
}
