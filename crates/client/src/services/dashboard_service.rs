//! Dashboard endpoints.

use common::ApiResponse;
use domain::{AdminActivity, DashboardStats};

use crate::http::HttpClient;

#[derive(Debug, Clone)]
pub struct DashboardService {
    http: HttpClient,
}

impl DashboardService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn stats(&self) -> ApiResponse<DashboardStats> {
        self.http.get("/dashboard/stats").await
    }

    pub async fn recent_activity(&self) -> ApiResponse<Vec<AdminActivity>> {
        self.http.get("/dashboard/recent-activity").await
    }
}
