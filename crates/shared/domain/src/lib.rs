//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! the golf club entities mirrored from the backend, the closed role and tier
//! enums, dashboard routing, page guards and the registration form.

pub mod booking;
pub mod constants;
pub mod course;
pub mod dashboard;
pub mod error;
pub mod pagination;
pub mod query;
pub mod range;
pub mod registration;
pub mod routing;
pub mod serde_helpers;
pub mod user;

pub use booking::{
    BookingFilters, BookingStats, BookingStatus, BookingSummary, BucketSize, PaymentStatus,
    RangeBooking, RangeBookingRequest, RangeBookingStatus, RangeBookingUpdate, TeeTimeBooking,
    TeeTimeBookingRequest,
};
pub use constants::*;
pub use course::{
    AvailableTimeSlot, Course, CourseCondition, CourseFilters, CourseInput, CoursePricing,
    GreenCondition, Hazard, HoleDetail,
};
pub use dashboard::{
    AdminActivity, AdminDashboardStats, BookingAnalytics, DashboardStats, ExportFormat,
    ExportKind, ExportRequest, ExportResponse, ReportPeriod, RevenueReport, SystemLogEntry,
    SystemStatus, UserFilters,
};
pub use error::{DomainError, DomainResult};
pub use pagination::Paginated;
pub use query::{PageRequest, QueryParams};
pub use range::{
    ActiveSessions, AddBallBucketRequest, AddEquipmentRequest, BallBucket, BucketResponse,
    EquipmentResponse, RangeEquipment, RangeSession, SessionResponse, StartSessionRequest,
};
pub use registration::{RegistrationForm, RegistrationStep, RegistrationWizard};
pub use routing::{dashboard_route, dashboard_url, Access, Page};
pub use user::{
    AuthResponse, ChangePasswordRequest, LoginRequest, MembershipType, MessageResponse,
    RefreshRequest, RegisterRequest, UpdateProfileRequest, User, UserRole, UserStatus,
};
