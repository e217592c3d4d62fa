use taller_engine::CrudScreen;
use tracing::debug;

use crate::dashboard::Dashboard;
use crate::nav::{Route, routes};
use crate::workspace::Workspace;

/// Navigation state of an interactive session: the current route and the
/// screen mounted for it.
///
/// Navigating away drops the screen; coming back remounts it from its seed.
#[derive(Debug)]
pub struct Console {
    workspace: Workspace,
    routes: Vec<Route>,
    route: Route,
    screen: Option<CrudScreen>,
    dashboard: Dashboard,
}

impl Console {
    pub fn new(workspace: Workspace) -> Self {
        let dashboard = workspace.dashboard();
        Self {
            workspace,
            routes: routes(),
            route: Route::Dashboard,
            screen: None,
            dashboard,
        }
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn route_index(&self) -> usize {
        self.routes
            .iter()
            .position(|r| *r == self.route)
            .unwrap_or(0)
    }

    pub fn screen(&self) -> Option<&CrudScreen> {
        self.screen.as_ref()
    }

    pub fn screen_mut(&mut self) -> Option<&mut CrudScreen> {
        self.screen.as_mut()
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn navigate(&mut self, route: Route) {
        debug!(from = %self.route, to = %route, "navigate");
        self.route = route;
        match route {
            Route::Dashboard => {
                self.screen = None;
                self.dashboard = self.workspace.dashboard();
            }
            Route::Screen(kind) => {
                self.screen = Some(self.workspace.mount(kind));
            }
        }
    }

    pub fn navigate_to_index(&mut self, index: usize) {
        if let Some(route) = self.routes.get(index).copied() {
            self.navigate(route);
        }
    }

    pub fn next_route(&mut self) {
        let next = (self.route_index() + 1) % self.routes.len();
        self.navigate_to_index(next);
    }

    pub fn prev_route(&mut self) {
        let len = self.routes.len();
        let prev = (self.route_index() + len - 1) % len;
        self.navigate_to_index(prev);
    }
}
