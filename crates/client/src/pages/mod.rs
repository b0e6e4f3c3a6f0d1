//! Page view-models.
//!
//! Each page reads the auth context, applies its guard and then either
//! redirects or fetches what it renders.

mod dashboard;
mod register;
mod signin;

pub use dashboard::{AdminDashboard, DashboardPage, DashboardView, MemberDashboard, PageOutcome};
pub use register::RegistrationPage;
pub use signin::{SignInPage, SignInTab};
