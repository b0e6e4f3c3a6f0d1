//! Driving-range session commands.

use common::{ClientError, ClientResult};
use domain::{AddBallBucketRequest, BucketSize, RangeSession, StartSessionRequest};

use super::App;
use crate::cli::args::{RangeAction, RangeArgs};

/// Execute the range command
pub async fn execute(app: &App, args: RangeArgs) -> ClientResult<()> {
    let range = &app.services.range;

    match args.action {
        RangeAction::Start { bay, notes } => {
            let request = StartSessionRequest {
                bay_number: bay,
                notes,
            };
            let started = range.start_session(&request).await.into_result()?;
            println!("{}", started.message);
            print_session(&started.session);
        }
        RangeAction::Active => {
            let active = range.active_sessions().await.into_result()?;
            println!("{} active session(s)", active.count);
            for session in &active.sessions {
                print_session(session);
            }
        }
        RangeAction::End { session_id } => {
            let ended = range.end_session(&session_id).await.into_result()?;
            println!("{}", ended.message);
            print_session(&ended.session);
        }
        RangeAction::Bucket {
            session_id,
            size,
            balls,
            price,
        } => {
            let size: BucketSize = size.parse().map_err(ClientError::from)?;
            let request = AddBallBucketRequest {
                bucket_size: size.to_string(),
                ball_count: balls,
                price,
            };
            let added = range
                .add_ball_bucket(&session_id, &request)
                .await
                .into_result()?;
            println!(
                "{}: {} bucket [{}] with {} balls",
                added.message, added.bucket.bucket_size, added.bucket.id, added.bucket.ball_count
            );
        }
    }
    Ok(())
}

fn print_session(session: &RangeSession) {
    let bay = session
        .bay_number
        .map(|b| format!("bay {}", b))
        .unwrap_or_else(|| "no bay".to_string());
    println!(
        "  [{}] {} started {} - {} buckets, {:.2} ({})",
        session.id,
        bay,
        session.start_time.format("%Y-%m-%d %H:%M"),
        session.ball_buckets.len(),
        session.total_amount,
        session.status
    );
    let unreturned = session.unreturned_items();
    if unreturned > 0 {
        println!("  {} item(s) not yet returned", unreturned);
    }
}
