//! Dashboard and admin reporting payloads.

use serde::{Deserialize, Serialize};

use crate::query::QueryParams;
use crate::serde_helpers;

/// Club-wide summary served by `/dashboard/stats`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardStats {
    pub total_bookings: u64,
    pub total_revenue: f64,
    pub active_members: u64,
    pub upcoming_bookings: u64,
    pub range_sessions_today: u64,
    pub green_speed: f64,
}

/// Entry of the recent activity feed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminActivity {
    #[serde(deserialize_with = "serde_helpers::id")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopularCourse {
    #[serde(deserialize_with = "serde_helpers::id")]
    pub course_id: String,
    pub course_name: String,
    pub bookings_count: u64,
}

/// Statistics for `/admin/dashboard/stats`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminDashboardStats {
    pub total_users: u64,
    pub total_bookings: u64,
    pub total_revenue: f64,
    pub active_members: u64,
    pub todays_bookings: u64,
    pub monthly_revenue: f64,
    pub occupancy_rate: f64,
    pub pending_bookings: u64,
    pub popular_courses: Vec<PopularCourse>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportPeriod {
    Daily,
    Weekly,
    #[default]
    Monthly,
    Yearly,
}

impl ReportPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportPeriod::Daily => "daily",
            ReportPeriod::Weekly => "weekly",
            ReportPeriod::Monthly => "monthly",
            ReportPeriod::Yearly => "yearly",
        }
    }
}

impl std::fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevenuePoint {
    pub date: String,
    pub revenue: f64,
    pub bookings: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevenueReport {
    pub period: ReportPeriod,
    pub data: Vec<RevenuePoint>,
    pub total_revenue: f64,
    pub average_booking_value: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingAnalytics {
    pub total_bookings: u64,
    pub occupancy_rate: f64,
    pub peak_hours: Vec<String>,
    pub cancellation_rate: f64,
    pub average_group_size: f64,
}

/// Filters for the admin user listing
#[derive(Debug, Clone, Default)]
pub struct UserFilters {
    pub role: Option<String>,
    pub membership_type: Option<String>,
    pub status: Option<String>,
    pub search: Option<String>,
}

impl UserFilters {
    pub fn apply(&self, params: &mut QueryParams) {
        params.push_opt("role", self.role.as_deref());
        params.push_opt("membershipType", self.membership_type.as_deref());
        params.push_opt("status", self.status.as_deref());
        params.push_opt("search", self.search.as_deref());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemLogEntry {
    pub timestamp: String,
    pub level: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemStatus {
    /// healthy | warning | error
    pub status: String,
    /// connected | disconnected
    pub database: String,
    pub last_backup: String,
    /// Seconds
    pub uptime: u64,
    pub version: String,
}

impl SystemStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy" && self.database == "connected"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportKind {
    Users,
    Bookings,
    Revenue,
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
    Xlsx,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportRequest {
    #[serde(rename = "type")]
    pub kind: ExportKind,
    pub format: ExportFormat,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportResponse {
    pub download_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_request_uses_type_key() {
        let req = ExportRequest {
            kind: ExportKind::Bookings,
            format: ExportFormat::default(),
        };
        assert_eq!(
            serde_json::to_value(req).unwrap(),
            serde_json::json!({"type": "bookings", "format": "csv"})
        );
    }

    #[test]
    fn admin_stats_tolerate_missing_fields() {
        let stats: AdminDashboardStats = serde_json::from_str(r#"{"total_users": 40}"#).unwrap();
        assert_eq!(stats.total_users, 40);
        assert!(stats.popular_courses.is_empty());
    }

    #[test]
    fn user_filters_query() {
        let filters = UserFilters {
            membership_type: Some("vip".into()),
            search: Some("smith".into()),
            ..Default::default()
        };
        let mut params = QueryParams::new();
        filters.apply(&mut params);
        assert_eq!(params.to_query_string(), "?membershipType=vip&search=smith");
    }

    #[test]
    fn system_status_health() {
        let status = SystemStatus {
            status: "healthy".into(),
            database: "disconnected".into(),
            ..Default::default()
        };
        assert!(!status.is_healthy());
    }
}
