//! Domain-level constants.
//!
//! These constants define business rules, route names and validation requirements.

// =============================================================================
// User Roles
// =============================================================================

/// Regular club member
pub const ROLE_MEMBER: &str = "member";

/// Club administrator
pub const ROLE_ADMIN: &str = "admin";

/// Administrator with system-wide privileges
pub const ROLE_SUPER_ADMIN: &str = "super_admin";

// =============================================================================
// Membership Tiers
// =============================================================================

pub const TIER_BASIC: &str = "basic";
pub const TIER_PREMIUM: &str = "premium";
pub const TIER_VIP: &str = "vip";

/// Tier assigned by the registration form when none is picked
pub const DEFAULT_MEMBERSHIP_TIER: &str = TIER_BASIC;

// =============================================================================
// Routes
// =============================================================================

pub const ROUTE_SIGN_IN: &str = "/auth/signin";
pub const ROUTE_DASHBOARD: &str = "/dashboard";
pub const ROUTE_ADMIN_DASHBOARD: &str = "/admin/dashboard";
pub const ROUTE_MEMBER_DASHBOARD: &str = "/member/dashboard";
pub const ROUTE_BASIC_DASHBOARD: &str = "/member/basic/dashboard";
pub const ROUTE_PREMIUM_DASHBOARD: &str = "/member/premium/dashboard";
pub const ROUTE_VIP_DASHBOARD: &str = "/member/vip/dashboard";

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: u64 = 8;

// =============================================================================
// Authentication
// =============================================================================

/// Authorization header prefix for Bearer tokens
pub const BEARER_TOKEN_PREFIX: &str = "Bearer ";

/// Path fragment shared by every authentication endpoint
pub const AUTH_PATH_FRAGMENT: &str = "/auth/";
