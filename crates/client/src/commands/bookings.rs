//! Booking commands.

use common::{ClientError, ClientResult};
use domain::TeeTimeBookingRequest;

use super::App;
use crate::cli::args::BookTeeTimeArgs;

/// Print both booking families; a partial failure still prints what loaded
pub async fn list(app: &App) -> ClientResult<()> {
    let response = app.services.bookings.my_bookings().await;
    let failure = (!response.success).then(|| response.to_error());
    let summary = response.data.unwrap_or_default();

    println!("Tee times:");
    if summary.tee_time_bookings.is_empty() {
        println!("  none");
    }
    for b in &summary.tee_time_bookings {
        println!(
            "  [{}] {} {} course {} - {} players, {:.2} ({}, {})",
            b.id, b.date, b.time, b.course_id, b.players, b.total_amount, b.status, b.payment_status
        );
    }

    println!("Range:");
    if summary.range_bookings.is_empty() {
        println!("  none");
    }
    for b in &summary.range_bookings {
        println!(
            "  [{}] {} {} - {} x {} bucket, {} min ({})",
            b.id, b.date, b.start_time, b.bucket_count, b.bucket_size, b.duration, b.status
        );
    }

    match failure {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

pub async fn book_tee_time(app: &App, args: BookTeeTimeArgs) -> ClientResult<()> {
    if args.players == 0 || args.players > 4 {
        return Err(ClientError::validation("Players must be between 1 and 4"));
    }

    let request = TeeTimeBookingRequest {
        course_id: args.course,
        date: args.date,
        time: args.time,
        players: args.players,
        special_requests: args.notes,
    };
    let booking = app
        .services
        .bookings
        .book_tee_time(&request)
        .await
        .into_result()?;

    println!(
        "Booked [{}] {} {} for {} players ({})",
        booking.id, booking.date, booking.time, booking.players, booking.status
    );
    Ok(())
}

pub async fn cancel(app: &App, id: &str, range: bool) -> ClientResult<()> {
    let bookings = &app.services.bookings;

    let status = if range {
        bookings.cancel_range_booking(id).await.into_result()?.status.to_string()
    } else {
        bookings.cancel_tee_time_booking(id).await.into_result()?.status.to_string()
    };

    println!("Booking {} is now {}", id, status);
    Ok(())
}
