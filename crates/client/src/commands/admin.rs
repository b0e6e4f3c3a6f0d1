//! Admin commands.
//!
//! The backend enforces the admin role; these only format its answers.

use common::ClientResult;
use domain::{PageRequest, UserFilters};

use super::App;
use crate::cli::args::{AdminAction, AdminArgs};

/// Execute the admin command
pub async fn execute(app: &App, args: AdminArgs) -> ClientResult<()> {
    let admin = &app.services.admin;

    match args.action {
        AdminAction::Stats => {
            let stats = admin.dashboard_stats().await.into_result()?;
            println!("Users:          {}", stats.total_users);
            println!("Active members: {}", stats.active_members);
            println!(
                "Bookings:       {} ({} today, {} pending)",
                stats.total_bookings, stats.todays_bookings, stats.pending_bookings
            );
            println!(
                "Revenue:        {:.2} ({:.2} this month)",
                stats.total_revenue, stats.monthly_revenue
            );
            println!("Occupancy:      {:.0}%", stats.occupancy_rate);
            for course in &stats.popular_courses {
                println!("  {} - {} bookings", course.course_name, course.bookings_count);
            }
        }
        AdminAction::Revenue { period } => {
            let report = admin.revenue_report(period.into(), None, None).await.into_result()?;
            println!(
                "{} revenue: {:.2} (avg booking {:.2})",
                report.period, report.total_revenue, report.average_booking_value
            );
            for point in &report.data {
                println!("  {}  {:>10.2}  {} bookings", point.date, point.revenue, point.bookings);
            }
        }
        AdminAction::Users {
            role,
            search,
            page,
            limit,
        } => {
            let filters = UserFilters {
                role: role.map(|r| r.to_string()),
                search,
                ..UserFilters::default()
            };
            let users = admin
                .users(&filters, PageRequest::new(page, limit))
                .await
                .into_result()?;
            println!("Page {} of {} ({} users)", users.page, users.total_pages.max(1), users.total);
            for user in &users.data {
                let tier = user.membership_type.as_deref().unwrap_or("-");
                println!(
                    "  [{}] {} <{}> {} {} {}",
                    user.id, user.name, user.email, user.role, tier, user.status
                );
            }
        }
        AdminAction::SetRole { user_id, role } => {
            let user = admin.update_user_role(&user_id, role).await.into_result()?;
            println!("{} is now {}", user.email, user.role.display_name());
        }
        AdminAction::Logs { level, page, limit } => {
            let logs = admin
                .system_logs(PageRequest::new(page, limit), level.as_deref())
                .await
                .into_result()?;
            for entry in &logs.data {
                println!("{} {:<5} {}", entry.timestamp, entry.level, entry.message);
            }
        }
        AdminAction::Export { kind, format } => {
            let export = admin
                .export_data(kind.into(), format.into())
                .await
                .into_result()?;
            println!("Download: {}", export.download_url);
        }
    }
    Ok(())
}
