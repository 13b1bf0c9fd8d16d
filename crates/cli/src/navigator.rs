//! Navigation for a terminal session.

use cart_checkout_core::Navigator;

/// Path of the shop's home page.
pub const HOME_ROUTE: &str = "/";

/// Records where the session was sent instead of switching screens.
#[derive(Debug, Default)]
pub struct SessionNavigator {
    visited: Vec<&'static str>,
}

impl SessionNavigator {
    /// Routes visited so far, oldest first.
    #[must_use]
    pub fn visited(&self) -> &[&'static str] {
        &self.visited
    }
}

impl Navigator for SessionNavigator {
    fn go_to_home(&mut self) {
        tracing::info!(route = HOME_ROUTE, "Navigating");
        self.visited.push(HOME_ROUTE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_go_to_home_records_route() {
        let mut nav = SessionNavigator::default();
        nav.go_to_home();
        nav.go_to_home();
        assert_eq!(nav.visited(), ["/", "/"]);
    }
}
