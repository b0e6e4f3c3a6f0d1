//! Course endpoints.

use common::ApiResponse;
use domain::{
    Course, CourseCondition, CourseFilters, CourseInput, GreenCondition, MessageResponse, PageRequest,
    Paginated, QueryParams,
};

use super::path_id;
use crate::http::HttpClient;

#[derive(Debug, Clone)]
pub struct CourseService {
    http: HttpClient,
}

impl CourseService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Public course listing with optional filters
    pub async fn courses(
        &self,
        filters: &CourseFilters,
        page: Option<PageRequest>,
    ) -> ApiResponse<Paginated<Course>> {
        let mut params = QueryParams::new();
        if let Some(page) = page {
            page.apply(&mut params);
        }
        filters.apply(&mut params);
        self.http.get(&params.to_endpoint("/public/courses")).await
    }

    pub async fn course(&self, course_id: &str) -> ApiResponse<Course> {
        self.http
            .get(&format!("/public/courses/{}", path_id(course_id)))
            .await
    }

    pub async fn green_conditions(&self) -> ApiResponse<Vec<GreenCondition>> {
        self.http.get("/public/green-conditions").await
    }

    pub async fn course_conditions(&self, course_id: &str) -> ApiResponse<CourseCondition> {
        self.http
            .get(&format!("/courses/{}/conditions", path_id(course_id)))
            .await
    }

    pub async fn featured_courses(&self) -> ApiResponse<Vec<Course>> {
        self.http.get("/courses/featured").await
    }

    pub async fn search_courses(&self, query: &str) -> ApiResponse<Vec<Course>> {
        let mut params = QueryParams::new();
        params.push("q", query);
        self.http.get(&params.to_endpoint("/courses/search")).await
    }

    // === ADMIN ===

    pub async fn create_course(&self, course: &CourseInput) -> ApiResponse<Course> {
        self.http.post("/admin/courses", course).await
    }

    pub async fn update_course(&self, course_id: &str, course: &CourseInput) -> ApiResponse<Course> {
        self.http
            .put(&format!("/admin/courses/{}", path_id(course_id)), course)
            .await
    }

    pub async fn delete_course(&self, course_id: &str) -> ApiResponse<MessageResponse> {
        self.http
            .delete(&format!("/admin/courses/{}", path_id(course_id)))
            .await
    }

    pub async fn update_course_conditions(
        &self,
        course_id: &str,
        conditions: &CourseCondition,
    ) -> ApiResponse<CourseCondition> {
        self.http
            .put(
                &format!("/admin/courses/{}/conditions", path_id(course_id)),
                conditions,
            )
            .await
    }
}
