//! Driving-range session endpoints.

use common::ApiResponse;
use domain::{
    ActiveSessions, AddBallBucketRequest, AddEquipmentRequest, BucketResponse, EquipmentResponse,
    MessageResponse, RangeSession, SessionResponse, StartSessionRequest,
};

use super::path_id;
use crate::http::HttpClient;

#[derive(Debug, Clone)]
pub struct RangeService {
    http: HttpClient,
}

impl RangeService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn start_session(&self, request: &StartSessionRequest) -> ApiResponse<SessionResponse> {
        self.http.post("/range/sessions", request).await
    }

    pub async fn active_sessions(&self) -> ApiResponse<ActiveSessions> {
        self.http.get("/range/sessions/active").await
    }

    pub async fn session(&self, session_id: &str) -> ApiResponse<RangeSession> {
        self.http
            .get(&format!("/range/sessions/{}", path_id(session_id)))
            .await
    }

    pub async fn end_session(&self, session_id: &str) -> ApiResponse<SessionResponse> {
        self.http
            .post_empty(&format!("/range/sessions/{}/end", path_id(session_id)))
            .await
    }

    pub async fn add_ball_bucket(
        &self,
        session_id: &str,
        request: &AddBallBucketRequest,
    ) -> ApiResponse<BucketResponse> {
        self.http
            .post(&format!("/range/sessions/{}/buckets", path_id(session_id)), request)
            .await
    }

    pub async fn add_equipment(
        &self,
        session_id: &str,
        request: &AddEquipmentRequest,
    ) -> ApiResponse<EquipmentResponse> {
        self.http
            .post(&format!("/range/sessions/{}/equipment", path_id(session_id)), request)
            .await
    }

    pub async fn return_bucket(&self, bucket_id: &str) -> ApiResponse<MessageResponse> {
        self.http
            .post_empty(&format!("/range/buckets/{}/return", path_id(bucket_id)))
            .await
    }

    pub async fn return_equipment(&self, equipment_id: &str) -> ApiResponse<MessageResponse> {
        self.http
            .post_empty(&format!("/range/equipment/{}/return", path_id(equipment_id)))
            .await
    }
}
