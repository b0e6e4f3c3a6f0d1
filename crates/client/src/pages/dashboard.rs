use tracing::debug;

use common::ApiResponse;
use domain::{
    Access, AdminActivity, AdminDashboardStats, BookingSummary, DashboardStats, MembershipType,
    Page, User, ROUTE_SIGN_IN,
};

use crate::auth::AuthContext;
use crate::services::Services;

const LOAD_FAILED: &str = "Failed to load dashboard data";

/// Member dashboard data; `tier` is `None` on the generic member page
#[derive(Debug, Clone, PartialEq)]
pub struct MemberDashboard {
    pub user: User,
    pub tier: Option<MembershipType>,
    pub stats: Option<DashboardStats>,
    pub bookings: BookingSummary,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdminDashboard {
    pub user: User,
    pub stats: Option<AdminDashboardStats>,
    pub activity: Vec<AdminActivity>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardView {
    Member(MemberDashboard),
    Admin(AdminDashboard),
}

/// What a guarded page load ends in
#[derive(Debug, Clone, PartialEq)]
pub enum PageOutcome {
    Redirect(&'static str),
    Render(DashboardView),
}

pub struct DashboardPage;

impl DashboardPage {
    /// Guard `page` for the current user, then fetch its data.
    ///
    /// Fetch failures end up in the view's `error`, never as an `Err`.
    pub async fn load(ctx: &AuthContext, services: &Services, page: Page) -> PageOutcome {
        if ctx.is_loading().await {
            ctx.initialize().await;
        }

        let user = ctx.user().await;
        if let Access::Redirect(route) = page.guard(user.as_ref()) {
            debug!(from = page.route(), to = route, "Redirecting");
            return PageOutcome::Redirect(route);
        }
        let Some(user) = user else {
            return PageOutcome::Redirect(ROUTE_SIGN_IN);
        };

        let view = match page {
            Page::AdminDashboard => DashboardView::Admin(Self::admin(services, user).await),
            _ => DashboardView::Member(Self::member(services, user).await),
        };
        PageOutcome::Render(view)
    }

    async fn member(services: &Services, user: User) -> MemberDashboard {
        let (stats, bookings) = futures::join!(
            services.dashboard.stats(),
            services.bookings.my_bookings()
        );

        let error = first_error(&[stats.failure(), bookings.failure()]);
        MemberDashboard {
            tier: user.membership_tier(),
            user,
            stats: stats.data.filter(|_| stats.success),
            bookings: bookings.data.unwrap_or_default(),
            error,
        }
    }

    async fn admin(services: &Services, user: User) -> AdminDashboard {
        let (stats, activity) = futures::join!(
            services.admin.dashboard_stats(),
            services.dashboard.recent_activity()
        );

        let error = first_error(&[stats.failure(), activity.failure()]);
        AdminDashboard {
            user,
            stats: stats.data.filter(|_| stats.success),
            activity: activity.data.filter(|_| activity.success).unwrap_or_default(),
            error,
        }
    }
}

trait FailureText {
    fn failure(&self) -> Option<String>;
}

impl<T> FailureText for ApiResponse<T> {
    fn failure(&self) -> Option<String> {
        if self.success {
            None
        } else {
            Some(self.error.clone().unwrap_or_else(|| LOAD_FAILED.to_string()))
        }
    }
}

fn first_error(errors: &[Option<String>]) -> Option<String> {
    errors.iter().flatten().next().cloned()
}
