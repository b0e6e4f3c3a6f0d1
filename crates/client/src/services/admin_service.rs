//! Admin-only endpoints under `/admin`.

use serde::Serialize;

use common::ApiResponse;
use domain::{
    AdminDashboardStats, BookingAnalytics, BookingFilters, BookingSummary, CoursePricing,
    ExportFormat, ExportKind, ExportRequest, ExportResponse, MessageResponse, PageRequest,
    Paginated, QueryParams, ReportPeriod, RevenueReport, SystemLogEntry, SystemStatus,
    TeeTimeBooking, User, UserFilters, UserRole, UserStatus,
};

use super::path_id;
use crate::http::HttpClient;

#[derive(Serialize)]
struct RoleUpdate {
    role: UserRole,
}

#[derive(Serialize)]
struct StatusUpdate {
    status: UserStatus,
}

#[derive(Serialize)]
struct CancelBooking<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'a str>,
}

#[derive(Debug, Clone)]
pub struct AdminService {
    http: HttpClient,
}

impl AdminService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    // === DASHBOARD & ANALYTICS ===

    pub async fn dashboard_stats(&self) -> ApiResponse<AdminDashboardStats> {
        self.http.get("/admin/dashboard/stats").await
    }

    pub async fn revenue_report(
        &self,
        period: ReportPeriod,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> ApiResponse<RevenueReport> {
        let mut params = QueryParams::new();
        params
            .push("period", period)
            .push_opt("startDate", start_date)
            .push_opt("endDate", end_date);
        self.http.get(&params.to_endpoint("/admin/reports/revenue")).await
    }

    pub async fn booking_analytics(&self, course_id: Option<&str>) -> ApiResponse<BookingAnalytics> {
        let mut params = QueryParams::new();
        params.push_opt("courseId", course_id);
        self.http
            .get(&params.to_endpoint("/admin/analytics/bookings"))
            .await
    }

    // === USER MANAGEMENT ===

    pub async fn users(&self, filters: &UserFilters, page: PageRequest) -> ApiResponse<Paginated<User>> {
        let mut params = QueryParams::new();
        page.apply(&mut params);
        filters.apply(&mut params);
        self.http.get(&params.to_endpoint("/admin/users")).await
    }

    pub async fn user(&self, user_id: &str) -> ApiResponse<User> {
        self.http
            .get(&format!("/admin/users/{}", path_id(user_id)))
            .await
    }

    /// Change a user's role; only the canonical roles can be sent
    pub async fn update_user_role(&self, user_id: &str, role: UserRole) -> ApiResponse<User> {
        self.http
            .patch(
                &format!("/admin/users/{}/role", path_id(user_id)),
                &RoleUpdate { role },
            )
            .await
    }

    pub async fn update_user_status(&self, user_id: &str, status: UserStatus) -> ApiResponse<User> {
        self.http
            .put(
                &format!("/admin/users/{}/status", path_id(user_id)),
                &StatusUpdate { status },
            )
            .await
    }

    pub async fn delete_user(&self, user_id: &str) -> ApiResponse<MessageResponse> {
        self.http
            .delete(&format!("/admin/users/{}", path_id(user_id)))
            .await
    }

    pub async fn user_bookings(&self, user_id: &str) -> ApiResponse<BookingSummary> {
        self.http
            .get(&format!("/admin/users/{}/bookings", path_id(user_id)))
            .await
    }

    // === BOOKING MANAGEMENT ===

    pub async fn bookings(
        &self,
        filters: &BookingFilters,
        page: PageRequest,
    ) -> ApiResponse<Paginated<TeeTimeBooking>> {
        let mut params = QueryParams::new();
        page.apply(&mut params);
        filters.apply(&mut params);
        self.http.get(&params.to_endpoint("/admin/bookings")).await
    }

    /// Cancel any booking, optionally recording why
    pub async fn cancel_booking(&self, booking_id: &str, reason: Option<&str>) -> ApiResponse<MessageResponse> {
        self.http
            .patch(
                &format!("/admin/bookings/{}/cancel", path_id(booking_id)),
                &CancelBooking { reason },
            )
            .await
    }

    pub async fn confirm_booking(&self, booking_id: &str) -> ApiResponse<MessageResponse> {
        self.http
            .patch_empty(&format!("/admin/bookings/{}/confirm", path_id(booking_id)))
            .await
    }

    // === PRICING ===

    pub async fn course_pricing(&self, course_id: &str) -> ApiResponse<Vec<CoursePricing>> {
        self.http
            .get(&format!("/admin/courses/{}/pricing", path_id(course_id)))
            .await
    }

    pub async fn update_course_pricing(
        &self,
        course_id: &str,
        pricing: &[CoursePricing],
    ) -> ApiResponse<Vec<CoursePricing>> {
        self.http
            .put(&format!("/admin/courses/{}/pricing", path_id(course_id)), pricing)
            .await
    }

    // === SYSTEM MANAGEMENT ===

    pub async fn system_logs(
        &self,
        page: PageRequest,
        level: Option<&str>,
    ) -> ApiResponse<Paginated<SystemLogEntry>> {
        let mut params = QueryParams::new();
        page.apply(&mut params);
        params.push_opt("level", level);
        self.http.get(&params.to_endpoint("/admin/logs")).await
    }

    pub async fn system_status(&self) -> ApiResponse<SystemStatus> {
        self.http.get("/admin/system/status").await
    }

    /// Ask the backend to prepare an export; returns its download URL
    pub async fn export_data(&self, kind: ExportKind, format: ExportFormat) -> ApiResponse<ExportResponse> {
        self.http
            .post("/admin/export", &ExportRequest { kind, format })
            .await
    }
}
