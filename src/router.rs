//! Client-side routing: the route table and the navigation surface.
//!
//! Routes mirror the product's path syntax (`/`, `/clients`,
//! `/projects/{id}`, ...). The `Router` only knows "current route" and
//! "navigate"; access control lives in the route guard, which may rewrite
//! a navigation before it is rendered.

/// A destination in the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Clients,
    Projects,
    ProjectDetail(i64),
    Invoices,
    Billing,
    Login,
    NotFound,
}

/// Sidebar entries, in display order.
pub const NAV_ROUTES: [Route; 5] = [
    Route::Dashboard,
    Route::Clients,
    Route::Projects,
    Route::Invoices,
    Route::Billing,
];

impl Route {
    /// Resolve a path to a route. Anything outside the table is NotFound.
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Route::Dashboard,
            "/clients" => Route::Clients,
            "/projects" => Route::Projects,
            "/invoices" => Route::Invoices,
            "/billing" => Route::Billing,
            "/login" => Route::Login,
            _ => {
                if let Some(id) = trimmed
                    .strip_prefix("/projects/")
                    .and_then(|rest| rest.parse::<i64>().ok())
                {
                    Route::ProjectDetail(id)
                } else {
                    Route::NotFound
                }
            }
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Dashboard => "/".to_string(),
            Route::Clients => "/clients".to_string(),
            Route::Projects => "/projects".to_string(),
            Route::ProjectDetail(id) => format!("/projects/{}", id),
            Route::Invoices => "/invoices".to_string(),
            Route::Billing => "/billing".to_string(),
            Route::Login => "/login".to_string(),
            Route::NotFound => "/404".to_string(),
        }
    }

    /// Sidebar label. Detail routes highlight their parent entry.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Clients => "Clients",
            Route::Projects | Route::ProjectDetail(_) => "Projects",
            Route::Invoices => "Invoices",
            Route::Billing => "Billing",
            Route::Login => "Sign in",
            Route::NotFound => "Not found",
        }
    }

    /// The sidebar entry this route belongs under, if any.
    pub fn nav_parent(&self) -> Option<Route> {
        match self {
            Route::ProjectDetail(_) => Some(Route::Projects),
            Route::Login | Route::NotFound => None,
            other => Some(*other),
        }
    }

    /// Next sidebar entry, wrapping around.
    pub fn next_nav(&self) -> Route {
        let current = self.nav_parent().unwrap_or(Route::Dashboard);
        let idx = NAV_ROUTES.iter().position(|r| *r == current).unwrap_or(0);
        NAV_ROUTES[(idx + 1) % NAV_ROUTES.len()]
    }

    /// Previous sidebar entry, wrapping around.
    pub fn prev_nav(&self) -> Route {
        let current = self.nav_parent().unwrap_or(Route::Dashboard);
        let idx = NAV_ROUTES.iter().position(|r| *r == current).unwrap_or(0);
        NAV_ROUTES[(idx + NAV_ROUTES.len() - 1) % NAV_ROUTES.len()]
    }
}

/// Holds the current navigation target.
#[derive(Debug)]
pub struct Router {
    current: Route,
}

impl Router {
    /// Starts at the home route, like a fresh page load of `/`.
    pub fn new() -> Self {
        Self {
            current: Route::Dashboard,
        }
    }

    pub fn current(&self) -> Route {
        self.current
    }

    pub fn navigate(&mut self, route: Route) {
        self.current = route;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_round_trip() {
        let routes = [
            Route::Dashboard,
            Route::Clients,
            Route::Projects,
            Route::ProjectDetail(42),
            Route::Invoices,
            Route::Billing,
            Route::Login,
        ];
        for route in routes {
            assert_eq!(Route::from_path(&route.path()), route);
        }
    }

    #[test]
    fn test_trailing_slash_accepted() {
        assert_eq!(Route::from_path("/clients/"), Route::Clients);
        assert_eq!(Route::from_path("/projects/7/"), Route::ProjectDetail(7));
        assert_eq!(Route::from_path("/"), Route::Dashboard);
    }

    #[test]
    fn test_unknown_paths_are_not_found() {
        assert_eq!(Route::from_path("/reports"), Route::NotFound);
        assert_eq!(Route::from_path("/projects/abc"), Route::NotFound);
        assert_eq!(Route::from_path("/projects/7/tasks"), Route::NotFound);
    }

    #[test]
    fn test_nav_cycle_wraps() {
        assert_eq!(Route::Dashboard.next_nav(), Route::Clients);
        assert_eq!(Route::Billing.next_nav(), Route::Dashboard);
        assert_eq!(Route::Dashboard.prev_nav(), Route::Billing);
    }

    #[test]
    fn test_detail_route_cycles_from_parent() {
        assert_eq!(Route::ProjectDetail(3).next_nav(), Route::Invoices);
        assert_eq!(Route::ProjectDetail(3).nav_parent(), Some(Route::Projects));
    }

    #[test]
    fn test_router_navigate() {
        let mut router = Router::new();
        assert_eq!(router.current(), Route::Dashboard);
        router.navigate(Route::Invoices);
        assert_eq!(router.current(), Route::Invoices);
    }
}
