//! Tee-time and driving-range bookings.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::course::Course;
use crate::error::DomainError;
use crate::query::QueryParams;
use crate::serde_helpers;
use crate::user::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Completed => "completed",
        }
    }

    /// Pending and confirmed bookings can still be cancelled
    pub fn is_open(&self) -> bool {
        matches!(self, BookingStatus::Pending | BookingStatus::Confirmed)
    }
}

impl FromStr for BookingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(BookingStatus::Pending),
            "confirmed" => Ok(BookingStatus::Confirmed),
            "cancelled" => Ok(BookingStatus::Cancelled),
            "completed" => Ok(BookingStatus::Completed),
            other => Err(DomainError::unknown("booking status", other)),
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Refunded,
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Refunded => "refunded",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeBookingStatus {
    #[default]
    Active,
    Completed,
    Cancelled,
}

impl std::fmt::Display for RangeBookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RangeBookingStatus::Active => "active",
            RangeBookingStatus::Completed => "completed",
            RangeBookingStatus::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

/// Ball bucket size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BucketSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FromStr for BucketSize {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(BucketSize::Small),
            "medium" => Ok(BucketSize::Medium),
            "large" => Ok(BucketSize::Large),
            other => Err(DomainError::unknown("bucket size", other)),
        }
    }
}

impl std::fmt::Display for BucketSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BucketSize::Small => "small",
            BucketSize::Medium => "medium",
            BucketSize::Large => "large",
        };
        f.write_str(s)
    }
}

/// Reserved round of golf
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeeTimeBooking {
    #[serde(deserialize_with = "serde_helpers::id")]
    pub id: String,
    #[serde(deserialize_with = "serde_helpers::id")]
    pub course_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<Box<Course>>,
    #[serde(deserialize_with = "serde_helpers::id")]
    pub user_id: String,
    #[serde(
        default,
        deserialize_with = "serde_helpers::lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub user: Option<Box<User>>,
    /// YYYY-MM-DD
    pub date: String,
    /// HH:MM
    pub time: String,
    #[serde(default = "default_players")]
    pub players: u32,
    #[serde(default)]
    pub status: BookingStatus,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    #[serde(default)]
    pub checked_in: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_in_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_players() -> u32 {
    1
}

/// Scheduled driving-range visit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeBooking {
    #[serde(deserialize_with = "serde_helpers::id")]
    pub id: String,
    #[serde(deserialize_with = "serde_helpers::id")]
    pub user_id: String,
    #[serde(deserialize_with = "serde_helpers::id")]
    pub course_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<Box<Course>>,
    pub date: String,
    pub start_time: String,
    /// Minutes
    #[serde(default)]
    pub duration: u32,
    #[serde(default)]
    pub bucket_size: BucketSize,
    #[serde(default)]
    pub bucket_count: u32,
    #[serde(default)]
    pub used_buckets: u32,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub status: RangeBookingStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeeTimeBookingRequest {
    pub course_id: String,
    /// YYYY-MM-DD
    pub date: String,
    /// HH:MM
    pub time: String,
    pub players: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeBookingRequest {
    pub course_id: String,
    pub date: String,
    pub start_time: String,
    pub duration: u32,
    pub bucket_size: BucketSize,
    pub bucket_count: u32,
}

/// Partial range booking update, e.g. adding buckets
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RangeBookingUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket_size: Option<BucketSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket_count: Option<u32>,
}

/// Filters for booking listings
#[derive(Debug, Clone, Default)]
pub struct BookingFilters {
    pub status: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub course_id: Option<String>,
    /// Admin listings only
    pub user_id: Option<String>,
}

impl BookingFilters {
    pub fn apply(&self, params: &mut QueryParams) {
        params.push_opt("status", self.status.as_deref());
        params.push_opt("dateFrom", self.date_from.as_deref());
        params.push_opt("dateTo", self.date_to.as_deref());
        params.push_opt("courseId", self.course_id.as_deref());
        params.push_opt("userId", self.user_id.as_deref());
    }
}

/// Both booking families of one user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingSummary {
    pub tee_time_bookings: Vec<TeeTimeBooking>,
    pub range_bookings: Vec<RangeBooking>,
}

impl BookingSummary {
    pub fn is_empty(&self) -> bool {
        self.tee_time_bookings.is_empty() && self.range_bookings.is_empty()
    }

    /// Tee times that are still pending or confirmed
    pub fn upcoming_tee_times(&self) -> impl Iterator<Item = &TeeTimeBooking> {
        self.tee_time_bookings.iter().filter(|b| b.status.is_open())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingStats {
    pub total_bookings: u64,
    pub upcoming_bookings: u64,
    pub total_spent: f64,
    pub favorite_course: Option<String>,
}
