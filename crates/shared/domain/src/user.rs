//! User entity, roles, membership tiers and the auth DTOs.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::{
    ROLE_ADMIN, ROLE_MEMBER, ROLE_SUPER_ADMIN, TIER_BASIC, TIER_PREMIUM, TIER_VIP,
};
use crate::error::DomainError;
use crate::serde_helpers;

/// User roles enumeration.
///
/// The set is closed: anything else coming from the backend is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum UserRole {
    Member,
    Admin,
    SuperAdmin,
}

impl UserRole {
    /// Admins and super admins share the admin route family
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin | UserRole::SuperAdmin)
    }

    pub fn is_member(&self) -> bool {
        matches!(self, UserRole::Member)
    }

    pub fn is_super_admin(&self) -> bool {
        matches!(self, UserRole::SuperAdmin)
    }

    /// Human readable role name
    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::SuperAdmin => "Super Administrator",
            UserRole::Admin => "Administrator",
            UserRole::Member => "Member",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Member => ROLE_MEMBER,
            UserRole::Admin => ROLE_ADMIN,
            UserRole::SuperAdmin => ROLE_SUPER_ADMIN,
        }
    }
}

impl FromStr for UserRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROLE_MEMBER => Ok(UserRole::Member),
            ROLE_ADMIN => Ok(UserRole::Admin),
            ROLE_SUPER_ADMIN => Ok(UserRole::SuperAdmin),
            other => Err(DomainError::UnknownRole(other.to_string())),
        }
    }
}

impl TryFrom<String> for UserRole {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        role.as_str().to_string()
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Membership tier controlling booking privileges and the dashboard variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MembershipType {
    Basic,
    Premium,
    Vip,
}

impl MembershipType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MembershipType::Basic => TIER_BASIC,
            MembershipType::Premium => TIER_PREMIUM,
            MembershipType::Vip => TIER_VIP,
        }
    }

    /// How many days ahead a member of this tier may book a tee time
    pub fn advance_booking_days(&self) -> u32 {
        match self {
            MembershipType::Basic => 7,
            MembershipType::Premium => 14,
            MembershipType::Vip => 30,
        }
    }
}

impl FromStr for MembershipType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            TIER_BASIC => Ok(MembershipType::Basic),
            TIER_PREMIUM => Ok(MembershipType::Premium),
            TIER_VIP => Ok(MembershipType::Vip),
            other => Err(DomainError::UnknownMembershipTier(other.to_string())),
        }
    }
}

impl std::fmt::Display for MembershipType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Account status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
    Suspended,
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
            UserStatus::Suspended => "suspended",
        };
        f.write_str(s)
    }
}

impl FromStr for UserStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(UserStatus::Active),
            "inactive" => Ok(UserStatus::Inactive),
            "suspended" => Ok(UserStatus::Suspended),
            other => Err(DomainError::unknown("user status", other)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationSettings {
    #[serde(default)]
    pub email: bool,
    #[serde(default)]
    pub sms: bool,
    #[serde(default)]
    pub push: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPreferences {
    pub preferred_tee_time: String,
    pub preferred_courses: Vec<String>,
    pub notifications: NotificationSettings,
    pub playing_style: String,
}

/// User as mirrored from the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "serde_helpers::id")]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: String,
    pub role: UserRole,
    #[serde(default)]
    pub status: UserStatus,
    #[serde(default)]
    pub email_verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,

    // Member fields
    #[serde(
        default,
        deserialize_with = "serde_helpers::opt_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub membership_id: Option<String>,
    /// Raw tier string; see [`User::membership_tier`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub membership_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub membership_expiry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub membership_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handicap: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences: Option<UserPreferences>,

    // Admin fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_level: Option<String>,
    #[serde(default)]
    pub can_manage_courses: bool,
    #[serde(default)]
    pub can_manage_users: bool,
    #[serde(default)]
    pub can_manage_pricing: bool,
    #[serde(default)]
    pub can_view_analytics: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub two_factor_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// Minimal user with the given identity; all optional fields empty
    pub fn new(id: impl Into<String>, email: impl Into<String>, name: impl Into<String>, role: UserRole) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            name: name.into(),
            role,
            status: UserStatus::Active,
            email_verified: false,
            image: None,
            phone: None,
            address: None,
            date_of_birth: None,
            membership_id: None,
            membership_type: None,
            membership_expiry: None,
            membership_status: None,
            handicap: None,
            preferences: None,
            admin_level: None,
            can_manage_courses: false,
            can_manage_users: false,
            can_manage_pricing: false,
            can_view_analytics: false,
            last_login_at: None,
            two_factor_enabled: false,
            created_at: None,
            updated_at: None,
        }
    }

    /// Set the raw membership tier
    pub fn with_membership(mut self, tier: impl Into<String>) -> Self {
        self.membership_type = Some(tier.into());
        self
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    pub fn is_member(&self) -> bool {
        self.role.is_member()
    }

    pub fn is_super_admin(&self) -> bool {
        self.role.is_super_admin()
    }

    /// Parsed membership tier, `None` when absent or unrecognised
    pub fn membership_tier(&self) -> Option<MembershipType> {
        self.membership_type.as_deref().and_then(|t| t.parse().ok())
    }
}

// =============================================================================
// Auth DTOs
// =============================================================================

/// Credentials for `/auth/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    /// Sign-in tab the user picked; the backend rejects a mismatching role
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_role: Option<String>,
}

/// Payload for `/auth/register`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub membership_type: Option<MembershipType>,
}

/// Response of login, register and refresh
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Absent on refresh responses
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

/// Partial profile update; absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handicap: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<UserPreferences>,
}

/// Generic `{ "message": ... }` acknowledgement
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parsing_rejects_unknown_values() {
        assert_eq!("member".parse::<UserRole>().unwrap(), UserRole::Member);
        assert_eq!("super_admin".parse::<UserRole>().unwrap(), UserRole::SuperAdmin);
        assert_eq!(
            "staff".parse::<UserRole>(),
            Err(DomainError::UnknownRole("staff".to_string()))
        );
    }

    #[test]
    fn role_serde_is_strict() {
        let role: UserRole = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, UserRole::Admin);
        assert_eq!(serde_json::to_string(&UserRole::SuperAdmin).unwrap(), "\"super_admin\"");
        assert!(serde_json::from_str::<UserRole>("\"staff\"").is_err());
    }

    #[test]
    fn role_flags() {
        assert!(UserRole::Admin.is_admin());
        assert!(UserRole::SuperAdmin.is_admin());
        assert!(UserRole::SuperAdmin.is_super_admin());
        assert!(!UserRole::Admin.is_super_admin());
        assert!(UserRole::Member.is_member());
        assert!(!UserRole::Member.is_admin());
        assert_eq!(UserRole::SuperAdmin.display_name(), "Super Administrator");
    }

    #[test]
    fn user_deserializes_backend_payload() {
        let json = r#"{
            "id": 12,
            "email": "jane@example.com",
            "name": "Jane",
            "role": "member",
            "status": "active",
            "membership_type": "premium",
            "handicap": 12.4,
            "created_at": "2024-05-01T10:00:00Z"
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "12");
        assert_eq!(user.membership_tier(), Some(MembershipType::Premium));
        assert_eq!(user.handicap, Some(12.4));
        assert!(!user.can_manage_users);
    }

    #[test]
    fn unknown_tier_is_not_an_error_on_the_user() {
        let user = User::new("1", "a@b.co", "A", UserRole::Member).with_membership("gold");
        assert_eq!(user.membership_tier(), None);
    }

    #[test]
    fn tiers_grant_increasing_advance_booking() {
        assert!(MembershipType::Basic.advance_booking_days() < MembershipType::Premium.advance_booking_days());
        assert!(MembershipType::Premium.advance_booking_days() < MembershipType::Vip.advance_booking_days());
    }

    #[test]
    fn register_request_validation() {
        let req = RegisterRequest {
            name: "Jane".into(),
            email: "not-an-email".into(),
            password: "short".into(),
            role: Some(UserRole::Member),
            phone: None,
            address: None,
            date_of_birth: None,
            membership_type: None,
        };
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
        assert!(!fields.contains_key("name"));
    }

    #[test]
    fn password_minimum_matches_the_registration_form() {
        let at_minimum = "x".repeat(crate::constants::MIN_PASSWORD_LENGTH as usize);
        let mut req = RegisterRequest {
            name: "Jane".into(),
            email: "jane@club.test".into(),
            password: at_minimum.clone(),
            role: None,
            phone: None,
            address: None,
            date_of_birth: None,
            membership_type: None,
        };
        assert!(req.validate().is_ok());

        req.password = at_minimum[1..].to_string();
        assert!(req.validate().is_err());

        req.password = "fairway1".into();
        req.name = String::new();
        assert!(req.validate().unwrap_err().field_errors().contains_key("name"));
    }
}
