use crate::Error;
use std::{fmt, str::FromStr};

/// Named destinations the gate can send a visitor to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteTarget {
    SignIn,
    GuestDashboard,
    AdminDashboard,
}

impl RouteTarget {
    pub const ALL: [RouteTarget; 3] = [
        RouteTarget::SignIn,
        RouteTarget::GuestDashboard,
        RouteTarget::AdminDashboard,
    ];

    /// Literal route name exposed to presentation callers.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            RouteTarget::SignIn => "sign-in",
            RouteTarget::GuestDashboard => "guest-dashboard",
            RouteTarget::AdminDashboard => "admin-dashboard",
        }
    }

    /// Browser path the route is mounted at.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            RouteTarget::SignIn => "/sign-in",
            RouteTarget::GuestDashboard => "/dashboard",
            RouteTarget::AdminDashboard => "/admin",
        }
    }
}

impl fmt::Display for RouteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RouteTarget {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|target| target.name() == value)
            .ok_or_else(|| Error::UnknownRoute(value.to_string()))
    }
}

/// Navigation service. Implementations change the current route without
/// leaving a back-navigable history entry.
pub trait Navigator {
    fn navigate_replace(&self, target: RouteTarget);
}

impl<F: Fn(RouteTarget)> Navigator for F {
    fn navigate_replace(&self, target: RouteTarget) {
        self(target);
    }
}
