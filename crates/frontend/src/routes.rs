//! Route table and navigation guard
//!
//! Every page has one [`Route`] variant. Before a page renders, the router
//! runs [`route_guard`], which only looks at whether a token is persisted:
//! the login page and the public help page are always reachable, everything
//! else sends a signed-out visitor to `/login`.

use pg_manager_http::TokenStorage;
use yew_router::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, Routable)]
pub enum Route {
    #[at("/login")]
    Login,
    /// Unified layout with no page selected
    #[at("/")]
    Home,
    #[at("/property-selector")]
    PropertySelector,
    #[at("/property/:id/dashboard")]
    Dashboard { id: String },
    #[at("/property/:id/inventory")]
    Inventory { id: String },
    #[at("/property/:id/tenants")]
    Tenants { id: String },
    #[at("/property/:id/complaints")]
    Complaints { id: String },
    #[at("/property/:id/admission")]
    Admission { id: String },
    #[at("/property/:id/expenditure")]
    Expenditure { id: String },
    #[at("/property/:id/payments")]
    Payments { id: String },
    #[at("/property/:id/archives")]
    Archives { id: String },
    #[at("/profile-settings")]
    ProfileSettings,
    /// Complaint page handed out to tenants; needs no login
    #[at("/help/:id")]
    PublicHelp { id: String },
    /// Catch-all, always redirected to the login page
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Resolve a browser path, falling back to the catch-all
    pub fn resolve(path: &str) -> Self {
        Self::recognize(path).unwrap_or(Self::NotFound)
    }

    /// Reachable without a token
    pub fn is_public(&self) -> bool {
        matches!(self, Self::Login | Self::PublicHelp { .. })
    }

    /// Rendered inside the unified layout
    pub fn uses_layout(&self) -> bool {
        !matches!(self, Self::Login | Self::PublicHelp { .. } | Self::NotFound)
    }

    /// Property the route belongs to, if any
    pub fn property_id(&self) -> Option<&str> {
        match self {
            Self::Dashboard { id }
            | Self::Inventory { id }
            | Self::Tenants { id }
            | Self::Complaints { id }
            | Self::Admission { id }
            | Self::Expenditure { id }
            | Self::Payments { id }
            | Self::Archives { id } => Some(id),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Home => "Home",
            Self::PropertySelector => "Properties",
            Self::Dashboard { .. } => "Dashboard",
            Self::Inventory { .. } => "Rooms",
            Self::Tenants { .. } => "Tenants",
            Self::Complaints { .. } => "Complaints",
            Self::Admission { .. } => "Admission",
            Self::Expenditure { .. } => "Expenditure",
            Self::Payments { .. } => "Payment History",
            Self::Archives { .. } => "Archived Tenants",
            Self::ProfileSettings => "Profile Settings",
            Self::PublicHelp { .. } => "Help",
            Self::NotFound => "Not Found",
        }
    }

    /// The per-property pages, in navigation order
    pub fn property_pages(id: &str) -> [Self; 8] {
        let id = || id.to_string();
        [
            Self::Dashboard { id: id() },
            Self::Inventory { id: id() },
            Self::Tenants { id: id() },
            Self::Complaints { id: id() },
            Self::Admission { id: id() },
            Self::Expenditure { id: id() },
            Self::Payments { id: id() },
            Self::Archives { id: id() },
        ]
    }
}

/// Outcome of a navigation attempt
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Navigation {
    /// Render the requested route
    Proceed(Route),
    /// Render this route instead
    Redirect(Route),
}

/// Decide a navigation from the token alone
pub fn guard(target: Route, token: Option<&str>) -> Navigation {
    if target.is_public() || token.is_some() {
        Navigation::Proceed(target)
    } else {
        Navigation::Redirect(Route::Login)
    }
}

/// Decide a navigation from the persisted token.
///
/// An unreadable storage counts as signed out.
pub fn route_guard(target: Route, storage: &dyn TokenStorage) -> Navigation {
    let token = storage.token().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Could not read token, treating visitor as signed out");
        None
    });

    let navigation = guard(target, token.as_deref());
    if let Navigation::Redirect(to) = &navigation {
        tracing::debug!(to = %to.to_path(), "Navigation redirected");
    }
    navigation
}

/// Decide a matched route: the catch-all always lands on the login page,
/// everything else goes through the guard
pub fn decide(target: Route, storage: &dyn TokenStorage) -> Navigation {
    match target {
        Route::NotFound => Navigation::Redirect(Route::Login),
        target => route_guard(target, storage),
    }
}

/// Resolve a browser path and decide it
pub fn navigate(path: &str, storage: &dyn TokenStorage) -> Navigation {
    decide(Route::resolve(path), storage)
}
