//! Navigation destinations.

/// The three places a user can be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Landing,
    AdminLogin,
    AdminDashboard,
}

/// Outcome of resolving a path. `redirected` is set when the path was not
/// recognized and the user was sent to the landing page instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteMatch {
    pub route: Route,
    pub redirected: bool,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::AdminLogin => "/admin",
            Self::AdminDashboard => "/admin/dashboard",
        }
    }

    /// Map a path to a destination. Query strings, fragments and trailing
    /// slashes are ignored; anything unknown lands on [`Route::Landing`].
    pub fn resolve(path: &str) -> RouteMatch {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim().trim_end_matches('/');

        let route = match trimmed {
            "" => Some(Self::Landing),
            "/admin" => Some(Self::AdminLogin),
            "/admin/dashboard" => Some(Self::AdminDashboard),
            _ => None,
        };

        match route {
            Some(route) => RouteMatch {
                route,
                redirected: false,
            },
            None => RouteMatch {
                route: Self::Landing,
                redirected: true,
            },
        }
    }
}
