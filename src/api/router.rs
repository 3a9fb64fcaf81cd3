//! Route table for the plugin's HTTP surface.
//!
//! Routes under [`API_V1_PREFIX`] sit behind the user id check in
//! [`super::auth::check_authenticity`].

pub const API_V1_PREFIX: &str = "/api/v1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Plain-text banner with the installed version.
    Info,
    /// Dialog submission carrying a share or move request.
    ShareDialog,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteState {
    Enabled(Endpoint),
    /// Registered so the path is reserved, but answers as if absent.
    NotYetEnabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub method: &'static str,
    pub path: &'static str,
    pub state: RouteState,
}

pub const ROUTES: &[Route] = &[
    Route {
        method: "GET",
        path: "/",
        state: RouteState::Enabled(Endpoint::Info),
    },
    Route {
        method: "POST",
        path: "/api/v1/share",
        state: RouteState::Enabled(Endpoint::ShareDialog),
    },
    // Moves currently go through /share with share_type=move.
    Route {
        method: "POST",
        path: "/api/v1/move",
        state: RouteState::NotYetEnabled,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Matched(&'static Route),
    MethodNotAllowed,
    NotFound,
}

/// Finds the route for `method` and `path`.
#[must_use]
pub fn resolve(method: &str, path: &str) -> Resolution {
    let path = normalize_path(path);
    let mut path_known = false;

    for route in ROUTES {
        if route.path != path {
            continue;
        }
        path_known = true;
        if route.method.eq_ignore_ascii_case(method) {
            return Resolution::Matched(route);
        }
    }

    if path_known {
        Resolution::MethodNotAllowed
    } else {
        Resolution::NotFound
    }
}

/// Strips the host's `/plugins/<id>` mount prefix and any trailing slash.
#[must_use]
pub fn normalize_path(path: &str) -> &str {
    let mut path = path;
    if let Some(rest) = path.strip_prefix("/plugins/") {
        path = rest.find('/').map_or("/", |idx| &rest[idx..]);
    }

    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}
