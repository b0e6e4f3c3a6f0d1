//! Account commands - sign in, registration, session and dashboards.

use common::{ClientError, ClientResult};
use domain::{Page, RegistrationForm};

use super::App;
use crate::cli::args::{DashboardArgs, LoginArgs, RegisterArgs};
use crate::pages::{
    AdminDashboard, DashboardPage, DashboardView, MemberDashboard, PageOutcome, RegistrationPage,
    SignInPage, SignInTab,
};

pub async fn login(app: &App, args: LoginArgs) -> ClientResult<()> {
    let tab = if args.admin {
        SignInTab::Admin
    } else {
        SignInTab::Member
    };

    let route = SignInPage::submit(&app.auth, &args.email, &args.password, tab).await?;
    if let Some(user) = app.auth.user().await {
        println!("Signed in as {} ({})", user.name, user.role.display_name());
    }
    println!("Dashboard: {}", route);
    Ok(())
}

pub async fn register(app: &App, args: RegisterArgs) -> ClientResult<()> {
    let mut page = RegistrationPage::with_form(RegistrationForm {
        name: args.name,
        email: args.email,
        password: args.password,
        confirm_password: args.confirm_password,
        phone: args.phone.unwrap_or_default(),
        date_of_birth: args.date_of_birth.unwrap_or_default(),
        membership_type: args.membership.to_string(),
        agree_to_terms: args.agree_terms,
        agree_to_marketing: false,
    });

    let route = page.submit(&app.auth).await?;
    println!("Account created");
    println!("Dashboard: {}", route);
    Ok(())
}

pub async fn logout(app: &App) -> ClientResult<()> {
    app.auth.logout().await?;
    println!("Signed out");
    Ok(())
}

pub async fn whoami(app: &App) -> ClientResult<()> {
    app.auth.initialize().await;
    let Some(user) = app.auth.user().await else {
        return Err(ClientError::Unauthorized("Not signed in".to_string()));
    };

    println!("{} <{}>", user.name, user.email);
    println!("Role:       {}", user.role.display_name());
    if let Some(tier) = user.membership_tier() {
        println!(
            "Membership: {} (book {} days ahead)",
            tier,
            tier.advance_booking_days()
        );
    }
    if let Some(handicap) = user.handicap {
        println!("Handicap:   {:.1}", handicap);
    }
    Ok(())
}

pub async fn dashboard(app: &App, args: DashboardArgs) -> ClientResult<()> {
    let page = Page::from_route(&args.route).ok_or_else(|| {
        ClientError::validation(format!("Unknown dashboard route: {}", args.route))
    })?;

    match DashboardPage::load(&app.auth, &app.services, page).await {
        PageOutcome::Redirect(route) => {
            // A redirect to another dashboard is followed once
            match Page::from_route(route) {
                Some(next) if next != page => {
                    match DashboardPage::load(&app.auth, &app.services, next).await {
                        PageOutcome::Render(view) => print_view(&view),
                        PageOutcome::Redirect(route) => println!("Redirect: {}", route),
                    }
                }
                _ => println!("Redirect: {}", route),
            }
        }
        PageOutcome::Render(view) => print_view(&view),
    }
    Ok(())
}

fn print_view(view: &DashboardView) {
    match view {
        DashboardView::Member(member) => print_member(member),
        DashboardView::Admin(admin) => print_admin(admin),
    }
}

fn print_member(view: &MemberDashboard) {
    match view.tier {
        Some(tier) => println!("{} - {} member", view.user.name, tier),
        None => println!("{} - member", view.user.name),
    }
    if let Some(error) = &view.error {
        println!("! {}", error);
    }
    if let Some(stats) = &view.stats {
        println!(
            "Bookings: {} total, {} upcoming | Range sessions today: {} | Green speed: {:.1}",
            stats.total_bookings, stats.upcoming_bookings, stats.range_sessions_today, stats.green_speed
        );
    }

    println!("Upcoming tee times:");
    let mut any = false;
    for booking in view.bookings.upcoming_tee_times() {
        any = true;
        println!(
            "  {} {} {} players [{}]",
            booking.date, booking.time, booking.players, booking.status
        );
    }
    if !any {
        println!("  none");
    }
    println!("Range bookings: {}", view.bookings.range_bookings.len());
}

fn print_admin(view: &AdminDashboard) {
    println!("{} - {}", view.user.name, view.user.role.display_name());
    if let Some(error) = &view.error {
        println!("! {}", error);
    }
    if let Some(stats) = &view.stats {
        println!(
            "Users: {} | Bookings: {} ({} today, {} pending) | Revenue: {:.2} | Occupancy: {:.0}%",
            stats.total_users,
            stats.total_bookings,
            stats.todays_bookings,
            stats.pending_bookings,
            stats.total_revenue,
            stats.occupancy_rate
        );
    }
    println!("Recent activity:");
    if view.activity.is_empty() {
        println!("  none");
    }
    for entry in &view.activity {
        println!("  {} {} {}", entry.timestamp, entry.kind, entry.description);
    }
}
