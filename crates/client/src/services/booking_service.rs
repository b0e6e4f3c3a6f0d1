//! Tee-time and range booking endpoints.

use common::ApiResponse;
use domain::{
    AvailableTimeSlot, BookingFilters, BookingStats, BookingSummary, Paginated, QueryParams,
    RangeBooking, RangeBookingRequest, RangeBookingUpdate, TeeTimeBooking, TeeTimeBookingRequest,
};

use super::path_id;
use crate::http::HttpClient;

#[derive(Debug, Clone)]
pub struct BookingService {
    http: HttpClient,
}

impl BookingService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    // === TEE TIME BOOKINGS ===

    /// Bookable tee times of a course on a date (`YYYY-MM-DD`)
    pub async fn available_tee_times(
        &self,
        course_id: &str,
        date: &str,
    ) -> ApiResponse<Vec<AvailableTimeSlot>> {
        let mut params = QueryParams::new();
        params.push("date", date);
        let path = format!("/courses/{}/available-times", path_id(course_id));
        self.http.get(&params.to_endpoint(&path)).await
    }

    pub async fn book_tee_time(&self, booking: &TeeTimeBookingRequest) -> ApiResponse<TeeTimeBooking> {
        self.http.post("/bookings/tee-time", booking).await
    }

    pub async fn tee_time_bookings(
        &self,
        filters: &BookingFilters,
    ) -> ApiResponse<Paginated<TeeTimeBooking>> {
        let mut params = QueryParams::new();
        filters.apply(&mut params);
        self.http.get(&params.to_endpoint("/bookings/tee-time")).await
    }

    pub async fn tee_time_booking(&self, booking_id: &str) -> ApiResponse<TeeTimeBooking> {
        self.http
            .get(&format!("/bookings/tee-time/{}", path_id(booking_id)))
            .await
    }

    pub async fn cancel_tee_time_booking(&self, booking_id: &str) -> ApiResponse<TeeTimeBooking> {
        self.http
            .patch_empty(&format!("/bookings/tee-time/{}/cancel", path_id(booking_id)))
            .await
    }

    // === RANGE BOOKINGS ===

    pub async fn available_range_slots(
        &self,
        course_id: &str,
        date: &str,
    ) -> ApiResponse<Vec<AvailableTimeSlot>> {
        let mut params = QueryParams::new();
        params.push("date", date);
        let path = format!("/courses/{}/available-range", path_id(course_id));
        self.http.get(&params.to_endpoint(&path)).await
    }

    pub async fn book_range(&self, booking: &RangeBookingRequest) -> ApiResponse<RangeBooking> {
        self.http.post("/bookings/range", booking).await
    }

    pub async fn range_bookings(&self, filters: &BookingFilters) -> ApiResponse<Paginated<RangeBooking>> {
        let mut params = QueryParams::new();
        filters.apply(&mut params);
        self.http.get(&params.to_endpoint("/bookings/range")).await
    }

    pub async fn range_booking(&self, booking_id: &str) -> ApiResponse<RangeBooking> {
        self.http
            .get(&format!("/bookings/range/{}", path_id(booking_id)))
            .await
    }

    pub async fn update_range_booking(
        &self,
        booking_id: &str,
        update: &RangeBookingUpdate,
    ) -> ApiResponse<RangeBooking> {
        self.http
            .patch(&format!("/bookings/range/{}", path_id(booking_id)), update)
            .await
    }

    pub async fn cancel_range_booking(&self, booking_id: &str) -> ApiResponse<RangeBooking> {
        self.http
            .patch_empty(&format!("/bookings/range/{}/cancel", path_id(booking_id)))
            .await
    }

    // === GENERAL ===

    /// Both booking families as one server-side listing
    pub async fn all_bookings(&self) -> ApiResponse<BookingSummary> {
        self.http.get("/bookings/all").await
    }

    pub async fn booking_stats(&self) -> ApiResponse<BookingStats> {
        self.http.get("/bookings/stats").await
    }

    /// Fetch tee-time and range bookings concurrently.
    ///
    /// Whatever succeeded is kept. When either listing fails the envelope is a
    /// failure carrying the first error, tee times before range.
    pub async fn my_bookings(&self) -> ApiResponse<BookingSummary> {
        let filters = BookingFilters::default();
        let (tee_times, range) = tokio::join!(
            self.tee_time_bookings(&filters),
            self.range_bookings(&filters)
        );

        let error = first_error(&tee_times, "Failed to fetch tee time bookings")
            .or_else(|| first_error(&range, "Failed to fetch range bookings"));

        let summary = BookingSummary {
            tee_time_bookings: success_data(tee_times),
            range_bookings: success_data(range),
        };

        match error {
            None => ApiResponse::ok(summary),
            Some(error) => ApiResponse {
                success: false,
                data: Some(summary),
                error: Some(error),
                message: None,
                cause: None,
            },
        }
    }
}

fn first_error<T>(response: &ApiResponse<T>, fallback: &str) -> Option<String> {
    if response.success {
        None
    } else {
        Some(response.error.clone().unwrap_or_else(|| fallback.to_string()))
    }
}

fn success_data<T>(response: ApiResponse<Paginated<T>>) -> Vec<T> {
    match response.data {
        Some(page) if response.success => page.data,
        _ => Vec::new(),
    }
}
