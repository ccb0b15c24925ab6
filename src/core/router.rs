use std::fmt;

/// How page locations are encoded in the browser URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum RoutingMode {
    /// `https://host/#/admin`
    Hash,
    /// `https://host/admin`
    History,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Purchase,
    Activation,
    PaymentSuccess,
    Login,
    SimpleLogin,
    Admin,
    PaymentAdmin,
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub view: View,
    pub requires_auth: bool,
}

impl Route {
    const fn public(path: &'static str, view: View) -> Self {
        Self {
            path,
            view,
            requires_auth: false,
        }
    }

    const fn protected(path: &'static str, view: View) -> Self {
        Self {
            path,
            view,
            requires_auth: true,
        }
    }
}

const STANDARD_ROUTES: [Route; 8] = [
    Route::public("/", View::Home),
    Route::public("/purchase", View::Purchase),
    Route::public("/activation", View::Activation),
    Route::public("/payment/success", View::PaymentSuccess),
    Route::public("/login", View::Login),
    Route::public("/auth", View::SimpleLogin),
    Route::protected("/admin", View::Admin),
    Route::protected("/admin/payments", View::PaymentAdmin),
];

pub const LOGIN_PATH: &str = "/login";

#[derive(Debug, Clone)]
pub struct RouteTable {
    mode: RoutingMode,
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new(mode: RoutingMode, routes: Vec<Route>) -> Self {
        Self { mode, routes }
    }

    /// The platform's page set. Admin pages require a session.
    pub fn standard(mode: RoutingMode) -> Self {
        Self::new(mode, STANDARD_ROUTES.to_vec())
    }

    pub fn mode(&self) -> RoutingMode {
        self.mode
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Finds the route for a location such as `/admin?tab=1` or, in hash mode, `#/admin`.
    pub fn resolve(&self, location: &str) -> Option<&Route> {
        let path = match self.mode {
            RoutingMode::Hash => location.strip_prefix('#').unwrap_or(location),
            RoutingMode::History => location.split('#').next().unwrap_or(location),
        };
        let path = path.split('?').next().unwrap_or(path);
        let path = if path.is_empty() { "/" } else { path };

        self.routes.iter().find(|route| route.path == path)
    }

    pub fn href(&self, path: &str) -> String {
        match self.mode {
            RoutingMode::Hash => format!("#{}", path),
            RoutingMode::History => path.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Allow,
    Deny { redirect: &'static str },
}

pub trait Authorizer {
    fn authorize(&self, route: &Route) -> Access;
}

/// Lets anyone through to public routes and only signed-in users to protected ones.
#[derive(Debug, Clone, Default)]
pub struct SessionAuthorizer {
    token: Option<String>,
}

impl SessionAuthorizer {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: token.filter(|t| !t.trim().is_empty()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

impl Authorizer for SessionAuthorizer {
    fn authorize(&self, route: &Route) -> Access {
        if !route.requires_auth || self.is_authenticated() {
            Access::Allow
        } else {
            tracing::debug!("Denying {} without a session", route.path);
            Access::Deny {
                redirect: LOGIN_PATH,
            }
        }
    }
}
