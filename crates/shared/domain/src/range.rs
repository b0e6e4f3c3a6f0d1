//! Driving-range sessions, ball buckets and equipment rentals.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::booking::RangeBookingStatus;
use crate::serde_helpers;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeSession {
    #[serde(deserialize_with = "serde_helpers::id")]
    pub id: String,
    #[serde(deserialize_with = "serde_helpers::id")]
    pub user_id: String,
    pub start_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub status: RangeBookingStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bay_number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub ball_buckets: Vec<BallBucket>,
    #[serde(default)]
    pub equipment: Vec<RangeEquipment>,
}

impl RangeSession {
    pub fn is_active(&self) -> bool {
        self.status == RangeBookingStatus::Active
    }

    /// Buckets and equipment still out with the golfer
    pub fn unreturned_items(&self) -> usize {
        self.ball_buckets.iter().filter(|b| !b.is_returned).count()
            + self.equipment.iter().filter(|e| !e.is_returned).count()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BallBucket {
    #[serde(deserialize_with = "serde_helpers::id")]
    pub id: String,
    #[serde(deserialize_with = "serde_helpers::id")]
    pub range_session_id: String,
    /// small | medium | large | jumbo
    pub bucket_size: String,
    #[serde(default)]
    pub ball_count: u32,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub is_returned: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub returned_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeEquipment {
    #[serde(deserialize_with = "serde_helpers::id")]
    pub id: String,
    #[serde(deserialize_with = "serde_helpers::id")]
    pub range_session_id: String,
    /// clubs, mat, tee, ...
    pub equipment_type: String,
    pub equipment_name: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub is_returned: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub returned_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
}

fn default_quantity() -> u32 {
    1
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StartSessionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bay_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddBallBucketRequest {
    pub bucket_size: String,
    pub ball_count: u32,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddEquipmentRequest {
    pub equipment_type: String,
    pub equipment_name: String,
    pub quantity: u32,
    pub price: f64,
}

/// `{session, message}` returned when a session starts or ends
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub session: RangeSession,
    #[serde(default)]
    pub message: String,
}

/// `{sessions, count}` listing of active sessions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ActiveSessions {
    pub sessions: Vec<RangeSession>,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BucketResponse {
    pub bucket: BallBucket,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentResponse {
    pub equipment: RangeEquipment,
    #[serde(default)]
    pub message: String,
}
