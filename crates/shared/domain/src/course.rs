//! Golf course entities and course queries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::query::QueryParams;
use crate::serde_helpers;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hazard {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub position: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoleDetail {
    pub hole_number: u32,
    pub par: u32,
    pub length: u32,
    pub handicap: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub hazards: Vec<Hazard>,
}

/// Descriptive, pricing and scheduling attributes of a course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    #[serde(deserialize_with = "serde_helpers::id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default)]
    pub holes: u32,
    #[serde(default)]
    pub par: u32,
    #[serde(default)]
    pub length: u32,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub hole_details: Vec<HoleDetail>,

    // Pricing
    #[serde(default)]
    pub green_fee_weekday: f64,
    #[serde(default)]
    pub green_fee_weekend: f64,
    #[serde(default)]
    pub green_fee_holiday: f64,
    #[serde(default)]
    pub cart_fee: f64,
    #[serde(default)]
    pub club_rental_fee: f64,
    #[serde(default)]
    pub range_ball_price: f64,
    #[serde(default)]
    pub member_discount: f64,

    // Settings
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub booking_advance_days: u32,
    #[serde(default)]
    pub max_players_per_slot: u32,
    #[serde(default)]
    pub slot_duration: u32,
    #[serde(default)]
    pub open_time: String,
    #[serde(default)]
    pub close_time: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Vec<CourseCondition>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_true() -> bool {
    true
}

/// Point-in-time environmental and maintenance snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourseCondition {
    #[serde(deserialize_with = "serde_helpers::id")]
    pub id: String,
    #[serde(deserialize_with = "serde_helpers::id")]
    pub course_id: String,
    /// 1-10 scale
    pub green_speed: f64,
    pub fairway_condition: String,
    pub rough_condition: String,
    pub bunker_condition: String,
    pub weather_condition: String,
    pub temperature: f64,
    pub wind_speed: f64,
    pub humidity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}

/// Public green report as served by `/public/green-conditions`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GreenCondition {
    #[serde(deserialize_with = "serde_helpers::id")]
    pub id: String,
    #[serde(deserialize_with = "serde_helpers::id")]
    pub course_id: String,
    pub hole_number: Option<u32>,
    pub green_speed: f64,
    pub condition: String,
    pub notes: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Admin-editable course fields
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CourseInput {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default)]
    pub holes: u32,
    #[serde(default)]
    pub par: u32,
    #[serde(default)]
    pub length: u32,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub green_fee_weekday: f64,
    #[serde(default)]
    pub green_fee_weekend: f64,
    #[serde(default)]
    pub amenities: Vec<String>,
}

/// A bookable slot with its price
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvailableTimeSlot {
    pub time: String,
    pub available: bool,
    pub price: f64,
}

/// Price rule attached to a course
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoursePricing {
    #[serde(deserialize_with = "serde_helpers::id")]
    pub id: String,
    #[serde(deserialize_with = "serde_helpers::id")]
    pub course_id: String,
    /// weekday | weekend | holiday | member | guest | twilight
    pub pricing_type: String,
    /// member | guest | student | senior
    pub player_type: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_end: Option<String>,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub min_players: u32,
    pub max_players: u32,
    pub advance_booking_days: u32,
}

/// Course list filters
#[derive(Debug, Clone, Default)]
pub struct CourseFilters {
    pub difficulty: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub amenities: Vec<String>,
    pub search: Option<String>,
}

impl CourseFilters {
    /// Append the filters to a query string
    pub fn apply(&self, params: &mut QueryParams) {
        params.push_opt("difficulty", self.difficulty.as_deref());
        params.push_opt("minPrice", self.min_price);
        params.push_opt("maxPrice", self.max_price);
        params.push_opt("search", self.search.as_deref());
        if !self.amenities.is_empty() {
            params.push("amenities", self.amenities.join(","));
        }
    }
}
