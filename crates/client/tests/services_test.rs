//! Integration tests for the resource services: method, path and body of the
//! requests they send.

mod support;

use std::sync::Arc;

use axum::http::Method;
use serde_json::json;

use domain::{
    AddBallBucketRequest, AddEquipmentRequest, ChangePasswordRequest, CourseInput, ExportFormat,
    ExportKind, MembershipType, RegisterRequest, StartSessionRequest, UpdateProfileRequest,
    UserRole,
};
use golf_client::{AuthContext, SessionManager};

use support::{api, member_json, recorder, services, spawn, Recorded};

fn registration(membership: MembershipType) -> RegisterRequest {
    RegisterRequest {
        name: "Ann Lee".to_string(),
        email: "ann@club.test".to_string(),
        password: "fairway123".to_string(),
        role: Some(UserRole::Member),
        phone: None,
        address: None,
        date_of_birth: None,
        membership_type: Some(membership),
    }
}

fn request(method: Method, path: &str, body: Option<serde_json::Value>) -> Recorded {
    Recorded {
        method,
        uri: api(path),
        body,
    }
}

// =============================================================================
// AuthService
// =============================================================================

#[tokio::test]
async fn test_register_stores_issued_session() {
    let (router, log) = recorder(json!({
        "token": "t9",
        "refresh_token": "r9",
        "user": member_json("basic")
    }));
    let origin = spawn(router).await;
    let session = Arc::new(SessionManager::in_memory());
    let services = services(&origin, session.clone());

    let response = services.auth.register(&registration(MembershipType::Basic)).await;

    assert!(response.success);
    let sent = log.single();
    assert_eq!(sent.method, Method::POST);
    assert_eq!(sent.uri, api("/auth/register"));
    let body = sent.body.unwrap();
    assert_eq!(body["email"], "ann@club.test");
    assert_eq!(body["role"], "member");
    assert_eq!(body["membership_type"], "basic");
    assert!(body.get("phone").is_none());

    assert_eq!(session.token().await.as_deref(), Some("t9"));
    assert_eq!(session.refresh_token().await.as_deref(), Some("r9"));
    assert_eq!(session.user().await.map(|u| u.email), Some("ann@club.test".to_string()));
}

#[tokio::test]
async fn test_register_without_token_signs_in_context_only() {
    let (router, _log) = recorder(json!({
        "user": member_json("premium"),
        "message": "Account created"
    }));
    let origin = spawn(router).await;
    let session = Arc::new(SessionManager::in_memory());
    let ctx = AuthContext::new(services(&origin, session.clone()).auth);

    let user = ctx
        .register(&registration(MembershipType::Premium))
        .await
        .unwrap();

    assert_eq!(user.name, "Ann Lee");
    assert!(ctx.is_authenticated().await);
    assert!(!ctx.is_loading().await);
    assert_eq!(ctx.dashboard_url().await, Some("/member/premium/dashboard"));
    assert!(!session.is_authenticated().await);
}

#[tokio::test]
async fn test_update_profile_sends_only_changed_fields() {
    let (router, log) = recorder(member_json("vip"));
    let origin = spawn(router).await;
    let services = services(&origin, Arc::new(SessionManager::in_memory()));

    let update = UpdateProfileRequest {
        phone: Some("555-0102".to_string()),
        handicap: Some(9.5),
        ..Default::default()
    };
    let user = services.auth.update_profile(&update).await.into_result().unwrap();

    assert_eq!(user.id, "7");
    assert_eq!(
        log.single(),
        request(
            Method::PUT,
            "/auth/profile",
            Some(json!({ "phone": "555-0102", "handicap": 9.5 }))
        )
    );
}

#[tokio::test]
async fn test_change_password_posts_both_passwords() {
    let (router, log) = recorder(json!({ "message": "Password changed" }));
    let origin = spawn(router).await;
    let services = services(&origin, Arc::new(SessionManager::in_memory()));

    let request_body = ChangePasswordRequest {
        old_password: "fairway123".to_string(),
        new_password: "bunker456!".to_string(),
    };
    let response = services.auth.change_password(&request_body).await;

    assert_eq!(response.data.map(|m| m.message), Some("Password changed".to_string()));
    assert_eq!(
        log.single(),
        request(
            Method::POST,
            "/auth/change-password",
            Some(json!({ "old_password": "fairway123", "new_password": "bunker456!" }))
        )
    );
}

// =============================================================================
// RangeService
// =============================================================================

#[tokio::test]
async fn test_range_session_lifecycle_routes() {
    let (router, log) = recorder(json!({ "message": "ok" }));
    let origin = spawn(router).await;
    let range = services(&origin, Arc::new(SessionManager::in_memory())).range;

    let start = StartSessionRequest {
        bay_number: Some(4),
        notes: None,
    };
    let bucket = AddBallBucketRequest {
        bucket_size: "large".to_string(),
        ball_count: 100,
        price: 12.0,
    };
    let equipment = AddEquipmentRequest {
        equipment_type: "clubs".to_string(),
        equipment_name: "Driver".to_string(),
        quantity: 1,
        price: 5.0,
    };

    range.start_session(&start).await;
    let active = range.active_sessions().await;
    range.session("s1").await;
    range.end_session("s1").await;
    range.add_ball_bucket("s1", &bucket).await;
    range.add_equipment("s1", &equipment).await;
    let returned = range.return_bucket("b1").await;
    range.return_equipment("e1").await;

    assert!(active.success);
    assert_eq!(returned.data.map(|m| m.message), Some("ok".to_string()));
    assert_eq!(
        log.entries(),
        vec![
            request(Method::POST, "/range/sessions", Some(json!({ "bay_number": 4 }))),
            request(Method::GET, "/range/sessions/active", None),
            request(Method::GET, "/range/sessions/s1", None),
            request(Method::POST, "/range/sessions/s1/end", None),
            request(
                Method::POST,
                "/range/sessions/s1/buckets",
                Some(json!({ "bucket_size": "large", "ball_count": 100, "price": 12.0 }))
            ),
            request(
                Method::POST,
                "/range/sessions/s1/equipment",
                Some(json!({
                    "equipment_type": "clubs",
                    "equipment_name": "Driver",
                    "quantity": 1,
                    "price": 5.0
                }))
            ),
            request(Method::POST, "/range/buckets/b1/return", None),
            request(Method::POST, "/range/equipment/e1/return", None),
        ]
    );
}

// =============================================================================
// AdminService
// =============================================================================

#[tokio::test]
async fn test_update_user_role_sends_canonical_role() {
    let (router, log) = recorder(json!({ "message": "Role updated" }));
    let origin = spawn(router).await;
    let admin = services(&origin, Arc::new(SessionManager::in_memory())).admin;

    admin.update_user_role("user 12", UserRole::SuperAdmin).await;

    assert_eq!(
        log.single(),
        request(
            Method::PATCH,
            "/admin/users/user%2012/role",
            Some(json!({ "role": "super_admin" }))
        )
    );
}

#[tokio::test]
async fn test_cancel_booking_includes_reason_only_when_given() {
    let (router, log) = recorder(json!({ "message": "Booking cancelled" }));
    let origin = spawn(router).await;
    let admin = services(&origin, Arc::new(SessionManager::in_memory())).admin;

    let response = admin.cancel_booking("b7", Some("Course flooded")).await;
    admin.cancel_booking("b8", None).await;

    assert_eq!(response.data.map(|m| m.message), Some("Booking cancelled".to_string()));
    assert_eq!(
        log.entries(),
        vec![
            request(
                Method::PATCH,
                "/admin/bookings/b7/cancel",
                Some(json!({ "reason": "Course flooded" }))
            ),
            request(Method::PATCH, "/admin/bookings/b8/cancel", Some(json!({}))),
        ]
    );
}

#[tokio::test]
async fn test_export_data_posts_kind_and_format() {
    let (router, log) = recorder(json!({ "download_url": "/exports/bookings.xlsx" }));
    let origin = spawn(router).await;
    let admin = services(&origin, Arc::new(SessionManager::in_memory())).admin;

    let export = admin
        .export_data(ExportKind::Bookings, ExportFormat::Xlsx)
        .await
        .into_result()
        .unwrap();

    assert_eq!(export.download_url, "/exports/bookings.xlsx");
    assert_eq!(
        log.single(),
        request(
            Method::POST,
            "/admin/export",
            Some(json!({ "type": "bookings", "format": "xlsx" }))
        )
    );
}

// =============================================================================
// CourseService
// =============================================================================

#[tokio::test]
async fn test_course_admin_mutations() {
    let (router, log) = recorder(json!({ "id": "c1", "name": "Pinewood" }));
    let origin = spawn(router).await;
    let courses = services(&origin, Arc::new(SessionManager::in_memory())).courses;

    let input = CourseInput {
        name: "Pinewood".to_string(),
        holes: 18,
        par: 72,
        green_fee_weekday: 65.0,
        ..Default::default()
    };

    let created = courses.create_course(&input).await.into_result().unwrap();
    courses.update_course("c1", &input).await;
    courses.delete_course("c1").await;

    assert_eq!(created.id, "c1");

    let entries = log.entries();
    assert_eq!(entries.len(), 3);

    assert_eq!(entries[0].method, Method::POST);
    assert_eq!(entries[0].uri, api("/admin/courses"));
    let body = entries[0].body.clone().unwrap();
    assert_eq!(body["name"], "Pinewood");
    assert_eq!(body["holes"], 18);
    assert_eq!(body["green_fee_weekday"], 65.0);
    assert!(body.get("website").is_none());

    assert_eq!(entries[1].method, Method::PUT);
    assert_eq!(entries[1].uri, api("/admin/courses/c1"));
    assert_eq!(entries[1].body, entries[0].body);

    assert_eq!(entries[2], request(Method::DELETE, "/admin/courses/c1", None));
}
