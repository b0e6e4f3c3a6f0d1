//! Per-resource wrappers over the HTTP client.
//!
//! Each method maps to exactly one backend route.

mod admin_service;
mod auth_service;
mod booking_service;
mod course_service;
mod dashboard_service;
mod range_service;

use std::borrow::Cow;

pub use admin_service::AdminService;
pub use auth_service::AuthService;
pub use booking_service::BookingService;
pub use course_service::CourseService;
pub use dashboard_service::DashboardService;
pub use range_service::RangeService;

use crate::http::HttpClient;

/// Every resource service sharing one HTTP client
#[derive(Debug, Clone)]
pub struct Services {
    pub auth: AuthService,
    pub courses: CourseService,
    pub bookings: BookingService,
    pub range: RangeService,
    pub dashboard: DashboardService,
    pub admin: AdminService,
}

impl Services {
    pub fn new(http: HttpClient) -> Self {
        Self {
            auth: AuthService::new(http.clone()),
            courses: CourseService::new(http.clone()),
            bookings: BookingService::new(http.clone()),
            range: RangeService::new(http.clone()),
            dashboard: DashboardService::new(http.clone()),
            admin: AdminService::new(http),
        }
    }
}

/// Encode an identifier for use as a path segment
pub(crate) fn path_id(id: &str) -> Cow<'_, str> {
    urlencoding::encode(id)
}
