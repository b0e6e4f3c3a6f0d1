//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use domain::{ExportFormat, ExportKind, MembershipType, ReportPeriod, UserRole};

/// Golf club client - bookings, range sessions and dashboards from the terminal
#[derive(Parser, Debug)]
#[command(name = "golf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Backend origin
    #[arg(long, global = true, env = "GOLF_API_URL")]
    pub api_url: Option<String>,

    /// Session file path
    #[arg(long, global = true, env = "GOLF_SESSION_FILE")]
    pub session_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in and store the session
    Login(LoginArgs),

    /// Create a member account
    Register(RegisterArgs),

    /// Sign out and forget the session
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Show a dashboard
    Dashboard(DashboardArgs),

    /// List courses
    Courses(CoursesArgs),

    /// Show one course
    Course {
        /// Course ID
        id: String,
    },

    /// Course conditions; all green conditions when no course is given
    Conditions {
        /// Course ID
        course_id: Option<String>,
    },

    /// List your tee-time and range bookings
    Bookings,

    /// Book a tee time
    BookTeeTime(BookTeeTimeArgs),

    /// Cancel a booking
    CancelBooking {
        /// Booking ID
        id: String,

        /// The booking is a range booking
        #[arg(long)]
        range: bool,
    },

    /// Driving-range sessions
    Range(RangeArgs),

    /// Administration
    Admin(AdminArgs),
}

/// Arguments for the login command
#[derive(Parser, Debug)]
pub struct LoginArgs {
    #[arg(short, long)]
    pub email: String,

    #[arg(short, long, env = "GOLF_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Use the administrator sign-in
    #[arg(long)]
    pub admin: bool,
}

/// Arguments for the register command
#[derive(Parser, Debug)]
pub struct RegisterArgs {
    #[arg(long)]
    pub name: String,

    #[arg(short, long)]
    pub email: String,

    #[arg(short, long)]
    pub password: String,

    #[arg(long)]
    pub confirm_password: String,

    #[arg(long)]
    pub phone: Option<String>,

    /// YYYY-MM-DD
    #[arg(long)]
    pub date_of_birth: Option<String>,

    #[arg(long, default_value = "basic")]
    pub membership: MembershipType,

    /// Accept the terms and conditions
    #[arg(long)]
    pub agree_terms: bool,
}

/// Arguments for the dashboard command
#[derive(Parser, Debug)]
pub struct DashboardArgs {
    /// Route to open, e.g. /member/vip/dashboard
    #[arg(default_value = "/dashboard")]
    pub route: String,
}

/// Arguments for the courses command
#[derive(Parser, Debug)]
pub struct CoursesArgs {
    /// Free-text search
    #[arg(short, long)]
    pub search: Option<String>,

    #[arg(long)]
    pub difficulty: Option<String>,

    #[arg(long)]
    pub max_price: Option<f64>,

    /// Only featured courses
    #[arg(long, conflicts_with = "search")]
    pub featured: bool,

    #[arg(long, default_value = "1")]
    pub page: u32,

    #[arg(long, default_value = "20")]
    pub limit: u32,
}

/// Arguments for the book-tee-time command
#[derive(Parser, Debug)]
pub struct BookTeeTimeArgs {
    #[arg(long)]
    pub course: String,

    /// YYYY-MM-DD
    #[arg(long)]
    pub date: String,

    /// HH:MM
    #[arg(long)]
    pub time: String,

    #[arg(long, default_value = "1")]
    pub players: u32,

    #[arg(long)]
    pub notes: Option<String>,
}

/// Arguments for the range command
#[derive(Parser, Debug)]
pub struct RangeArgs {
    #[command(subcommand)]
    pub action: RangeAction,
}

/// Range session actions
#[derive(Subcommand, Debug)]
pub enum RangeAction {
    /// Start a session
    Start {
        #[arg(long)]
        bay: Option<u32>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// List active sessions
    Active,
    /// End a session
    End { session_id: String },
    /// Add a ball bucket to a session
    Bucket {
        session_id: String,
        /// small | medium | large
        #[arg(long, default_value = "medium")]
        size: String,
        #[arg(long)]
        balls: u32,
        #[arg(long)]
        price: f64,
    },
}

/// Arguments for the admin command
#[derive(Parser, Debug)]
pub struct AdminArgs {
    #[command(subcommand)]
    pub action: AdminAction,
}

/// Admin actions
#[derive(Subcommand, Debug)]
pub enum AdminAction {
    /// Club-wide statistics
    Stats,
    /// Revenue report
    Revenue {
        #[arg(long, value_enum, default_value = "monthly")]
        period: PeriodArg,
    },
    /// List users
    Users {
        #[arg(long)]
        role: Option<UserRole>,
        #[arg(long)]
        search: Option<String>,
        #[arg(long, default_value = "1")]
        page: u32,
        #[arg(long, default_value = "20")]
        limit: u32,
    },
    /// Change a user's role
    SetRole {
        user_id: String,
        /// member | admin | super_admin
        role: UserRole,
    },
    /// System log entries
    Logs {
        #[arg(long)]
        level: Option<String>,
        #[arg(long, default_value = "1")]
        page: u32,
        #[arg(long, default_value = "50")]
        limit: u32,
    },
    /// Request a data export
    Export {
        #[arg(value_enum)]
        kind: ExportKindArg,
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormatArg,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum PeriodArg {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl From<PeriodArg> for ReportPeriod {
    fn from(arg: PeriodArg) -> Self {
        match arg {
            PeriodArg::Daily => ReportPeriod::Daily,
            PeriodArg::Weekly => ReportPeriod::Weekly,
            PeriodArg::Monthly => ReportPeriod::Monthly,
            PeriodArg::Yearly => ReportPeriod::Yearly,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum ExportKindArg {
    Users,
    Bookings,
    Revenue,
    All,
}

impl From<ExportKindArg> for ExportKind {
    fn from(arg: ExportKindArg) -> Self {
        match arg {
            ExportKindArg::Users => ExportKind::Users,
            ExportKindArg::Bookings => ExportKind::Bookings,
            ExportKindArg::Revenue => ExportKind::Revenue,
            ExportKindArg::All => ExportKind::All,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum ExportFormatArg {
    Csv,
    Json,
    Xlsx,
}

impl From<ExportFormatArg> for ExportFormat {
    fn from(arg: ExportFormatArg) -> Self {
        match arg {
            ExportFormatArg::Csv => ExportFormat::Csv,
            ExportFormatArg::Json => ExportFormat::Json,
            ExportFormatArg::Xlsx => ExportFormat::Xlsx,
        }
    }
}
