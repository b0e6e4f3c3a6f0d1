//! Role based dashboard routing and page access guards.

use crate::constants::{
    ROUTE_ADMIN_DASHBOARD, ROUTE_BASIC_DASHBOARD, ROUTE_DASHBOARD, ROUTE_MEMBER_DASHBOARD,
    ROUTE_PREMIUM_DASHBOARD, ROUTE_SIGN_IN, ROUTE_VIP_DASHBOARD,
};
use crate::user::{MembershipType, User, UserRole};

/// Dashboard route for a role and a raw membership tier.
///
/// Admins and super admins share `/admin/dashboard`. Members go to their tier
/// dashboard; a missing or unrecognised tier falls back to `/member/dashboard`.
pub fn dashboard_route(role: UserRole, membership_type: Option<&str>) -> &'static str {
    if role.is_admin() {
        return ROUTE_ADMIN_DASHBOARD;
    }

    match membership_type.and_then(|t| t.parse::<MembershipType>().ok()) {
        Some(tier) => tier_route(tier),
        None => ROUTE_MEMBER_DASHBOARD,
    }
}

/// Dashboard route for a user
pub fn dashboard_url(user: &User) -> &'static str {
    dashboard_route(user.role, user.membership_type.as_deref())
}

fn tier_route(tier: MembershipType) -> &'static str {
    match tier {
        MembershipType::Basic => ROUTE_BASIC_DASHBOARD,
        MembershipType::Premium => ROUTE_PREMIUM_DASHBOARD,
        MembershipType::Vip => ROUTE_VIP_DASHBOARD,
    }
}

/// Guarded dashboard pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// `/dashboard`, always forwards to the role dashboard
    Dashboard,
    /// `/member/dashboard`
    MemberDashboard,
    /// `/member/{tier}/dashboard`
    TierDashboard(MembershipType),
    /// `/admin/dashboard`
    AdminDashboard,
}

/// Outcome of a page guard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allow,
    Redirect(&'static str),
}

impl Page {
    pub fn route(&self) -> &'static str {
        match self {
            Page::Dashboard => ROUTE_DASHBOARD,
            Page::MemberDashboard => ROUTE_MEMBER_DASHBOARD,
            Page::TierDashboard(tier) => tier_route(*tier),
            Page::AdminDashboard => ROUTE_ADMIN_DASHBOARD,
        }
    }

    /// Resolve a route back to its page
    pub fn from_route(route: &str) -> Option<Page> {
        match route {
            ROUTE_DASHBOARD => Some(Page::Dashboard),
            ROUTE_MEMBER_DASHBOARD => Some(Page::MemberDashboard),
            ROUTE_BASIC_DASHBOARD => Some(Page::TierDashboard(MembershipType::Basic)),
            ROUTE_PREMIUM_DASHBOARD => Some(Page::TierDashboard(MembershipType::Premium)),
            ROUTE_VIP_DASHBOARD => Some(Page::TierDashboard(MembershipType::Vip)),
            ROUTE_ADMIN_DASHBOARD => Some(Page::AdminDashboard),
            _ => None,
        }
    }

    /// Decide whether `user` may see this page
    pub fn guard(&self, user: Option<&User>) -> Access {
        let Some(user) = user else {
            return Access::Redirect(ROUTE_SIGN_IN);
        };

        match self {
            Page::Dashboard => Access::Redirect(dashboard_url(user)),
            Page::AdminDashboard if user.is_admin() => Access::Allow,
            Page::AdminDashboard => Access::Redirect(ROUTE_MEMBER_DASHBOARD),
            _ if user.is_admin() => Access::Redirect(ROUTE_ADMIN_DASHBOARD),
            Page::MemberDashboard => Access::Allow,
            Page::TierDashboard(tier) if user.membership_tier() == Some(*tier) => Access::Allow,
            Page::TierDashboard(_) => Access::Redirect(dashboard_url(user)),
        }
    }
}
