mod common;

use axum::http::StatusCode;
use common::{add_student, app, award, create_class, get, post, signup};
use serde_json::json;
use std::collections::HashSet;

#[tokio::test]
async fn test_create_class_returns_access_code() {
    let app = app();
    let token = signup(&app, "kim@school.kr").await;

    let (status, body) = post(
        &app,
        "/api/classes",
        &token,
        json!({ "name": "Sunflowers", "grade": 5, "class_number": 1 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Sunflowers");
    assert_eq!(body["grade"], 5);
    assert_eq!(body["class_number"], 1);
    assert!(body["created_at"].is_string());
    let code = body["access_code"].as_str().unwrap();
    assert_eq!(code.len(), 8);
    assert!(code.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
}

#[tokio::test]
async fn test_access_codes_unique_across_classes() {
    let app = app();
    let token = signup(&app, "kim@school.kr").await;
    for n in 0..20 {
        create_class(&app, &token, 3, n).await;
    }

    let (_, list) = get(&app, "/api/classes", &token).await;
    let codes: HashSet<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["access_code"].as_str().unwrap())
        .collect();
    assert_eq!(codes.len(), 20);
}

#[tokio::test]
async fn test_list_shows_only_own_classes_with_counts() {
    let app = app();
    let kim = signup(&app, "kim@school.kr").await;
    let lee = signup(&app, "lee@school.kr").await;

    let first = create_class(&app, &kim, 5, 1).await;
    let second = create_class(&app, &kim, 5, 2).await;
    create_class(&app, &lee, 6, 1).await;

    add_student(&app, &kim, &first, "Minji", 1).await;
    add_student(&app, &kim, &first, "Jisoo", 2).await;
    add_student(&app, &kim, &first, "Jisoo", 2).await;

    let (status, list) = get(&app, "/api/classes", &kim).await;
    assert_eq!(status, StatusCode::OK);
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["id"], first.as_str());
    assert_eq!(list[0]["student_count"], 3);
    assert_eq!(list[1]["id"], second.as_str());
    assert_eq!(list[1]["student_count"], 0);
}

#[tokio::test]
async fn test_class_detail_includes_student_totals() {
    let app = app();
    let token = signup(&app, "kim@school.kr").await;
    let class_id = create_class(&app, &token, 5, 1).await;
    let minji = add_student(&app, &token, &class_id, "Minji", 1).await;
    add_student(&app, &token, &class_id, "Jisoo", 2).await;

    award(&app, &token, &minji, 10, "homework").await;
    award(&app, &token, &minji, -4, "late").await;

    let (status, detail) = get(&app, &format!("/api/classes/{}", class_id), &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["id"], class_id.as_str());
    assert_eq!(detail["grade"], 5);

    let students = detail["students"].as_array().unwrap();
    assert_eq!(students.len(), 2);
    assert_eq!(students[0]["name"], "Minji");
    assert_eq!(students[0]["total_points"], 6);
    assert_eq!(students[1]["name"], "Jisoo");
    assert_eq!(students[1]["total_points"], 0);
}

#[tokio::test]
async fn test_unknown_class_not_found() {
    let app = app();
    let token = signup(&app, "kim@school.kr").await;
    let missing = uuid::Uuid::new_v4();

    for uri in [
        format!("/api/classes/{}", missing),
        format!("/api/classes/{}/leaderboard", missing),
        "/api/classes/not-a-uuid".to_string(),
    ] {
        let (status, body) = get(&app, &uri, &token).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body["detail"], "Class not found");
    }

    let (status, _) = post(
        &app,
        &format!("/api/classes/{}/students", missing),
        &token,
        json!({ "name": "Minji", "student_number": 1 }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_other_teachers_class_forbidden() {
    let app = app();
    let kim = signup(&app, "kim@school.kr").await;
    let lee = signup(&app, "lee@school.kr").await;
    let class_id = create_class(&app, &kim, 5, 1).await;

    for uri in [
        format!("/api/classes/{}", class_id),
        format!("/api/classes/{}/leaderboard", class_id),
    ] {
        let (status, body) = get(&app, &uri, &lee).await;
        assert_eq!(status, StatusCode::FORBIDDEN, "{uri}");
        assert_eq!(body["detail"], "Not authorized");
    }

    let (status, _) = post(
        &app,
        &format!("/api/classes/{}/students", class_id),
        &lee,
        json!({ "name": "Intruder", "student_number": 99 }),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (_, detail) = get(&app, &format!("/api/classes/{}", class_id), &kim).await;
    assert!(detail["students"].as_array().unwrap().is_empty());
}
