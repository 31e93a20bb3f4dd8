//! Screen state machine for the login / register / dashboard flow.
//!
//! DESIGN
//! ======
//! The screen is an enum with an explicit transition function instead of
//! string matching. Pairs not listed in [`Screen::next`] leave the screen
//! unchanged, so a stray callback can never land on an unexpected screen.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

/// Screen currently shown by the auth flow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Login,
    Register,
    Dashboard,
}

/// Event raised by a screen's callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAction {
    /// The screen's primary form succeeded.
    Succeed,
    SwitchToRegister,
    SwitchToLogin,
    Logout,
}

impl Screen {
    #[must_use]
    pub fn next(self, action: RouteAction) -> Self {
        match (self, action) {
            (Self::Login, RouteAction::Succeed) => Self::Dashboard,
            (Self::Login, RouteAction::SwitchToRegister) => Self::Register,
            (Self::Register, RouteAction::SwitchToLogin | RouteAction::Succeed) | (Self::Dashboard, RouteAction::Logout) => {
                Self::Login
            }
            (screen, _) => screen,
        }
    }

    /// Align the screen with the session once loading has finished.
    ///
    /// An unauthenticated session cannot stay on the dashboard, and an
    /// authenticated one skips the login form.
    #[must_use]
    pub fn reconcile(self, authenticated: bool) -> Self {
        match (self, authenticated) {
            (Self::Dashboard, false) => self.next(RouteAction::Logout),
            (Self::Login, true) => self.next(RouteAction::Succeed),
            (screen, _) => screen,
        }
    }
}
