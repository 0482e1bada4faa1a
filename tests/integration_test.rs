use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use study_planner::models::{load_plan_file, SubjectField};
use study_planner::services::renderer;
use study_planner::{
    logger, App, Config, FormState, HttpScheduleClient, ScheduleService, SubmissionController,
    SubmissionPayload, SubmissionStatus, SubmitError,
};

/// 启动本地排期服务，返回接口地址
async fn spawn_schedule_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}/api/schedule", addr)
}

/// 每个章节排一天，日期故意乱序返回
async fn echo_schedule(Json(payload): Json<SubmissionPayload>) -> Json<Value> {
    let dates = ["2024-03-05", "2024-01-20", "2024-02-10"];
    let mut schedule = serde_json::Map::new();
    let chapters = payload
        .subjects
        .iter()
        .flat_map(|s| s.chapters.iter().map(move |c| (s.name.clone(), c.clone())));
    for (date, (subject, chapter)) in dates.iter().zip(chapters) {
        schedule.insert(
            date.to_string(),
            json!([{ "subject": subject, "chapter": chapter, "hours": payload.daily_hours }]),
        );
    }
    Json(json!({ "schedule": schedule }))
}

fn client(endpoint: &str) -> HttpScheduleClient {
    HttpScheduleClient::with_endpoint(endpoint, Duration::from_secs(5)).unwrap()
}

fn valid_form() -> FormState {
    FormState::new()
        .edit_subject_field(0, SubjectField::Name("Math".into()))
        .edit_subject_field(0, SubjectField::exam_date_from_input("2024-06-01"))
        .edit_chapter(0, 0, "Algebra")
        .add_chapter(0)
        .edit_chapter(0, 1, " ")
        .add_chapter(0)
        .edit_chapter(0, 2, "Geometry")
        .add_subject()
        .edit_subject_field(1, SubjectField::Name("Physics".into()))
        .edit_chapter(1, 0, "Optics")
        .set_daily_hours(Some(1.0))
}

#[tokio::test]
async fn test_submit_and_render_sorted_timetable() {
    logger::init(false);
    let router = Router::new().route("/api/schedule", post(echo_schedule));
    let endpoint = spawn_schedule_server(router).await;

    let mut controller = SubmissionController::new(client(&endpoint));
    let status = controller.submit(&valid_form()).await;

    assert_eq!(status, SubmissionStatus::Success);
    assert!(controller.error().is_none());

    let rows: Vec<(String, Vec<String>)> = renderer::rows(controller.schedule())
        .into_iter()
        .map(|row| {
            (
                row.date.to_string(),
                row.tasks.iter().map(renderer::format_task).collect(),
            )
        })
        .collect();

    assert_eq!(
        rows,
        vec![
            ("2024-01-20".to_string(), vec!["Math: Geometry (1 hr)".to_string()]),
            ("2024-02-10".to_string(), vec!["Physics: Optics (1 hr)".to_string()]),
            ("2024-03-05".to_string(), vec!["Math: Algebra (1 hr)".to_string()]),
        ]
    );
}

#[tokio::test]
async fn test_server_error_message_is_used() {
    let router = Router::new().route(
        "/api/schedule",
        post(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Exam date must be in the future" })),
            )
        }),
    );
    let endpoint = spawn_schedule_server(router).await;

    let mut controller = SubmissionController::new(client(&endpoint));
    let status = controller.submit(&valid_form()).await;

    assert_eq!(status, SubmissionStatus::Failure);
    assert_eq!(controller.error(), Some("Exam date must be in the future"));
    assert!(controller.schedule().is_none());
}

#[tokio::test]
async fn test_server_error_without_message_uses_fallback() {
    let router = Router::new().route(
        "/api/schedule",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({}))) }),
    );
    let endpoint = spawn_schedule_server(router).await;

    let result = client(&endpoint)
        .create_schedule(&study_planner::normalize(&valid_form()).unwrap())
        .await;

    assert_eq!(
        result,
        Err(SubmitError::Service {
            status: 500,
            message: "Failed to generate the schedule.".to_string(),
        })
    );
}

#[tokio::test]
async fn test_success_without_schedule_is_service_failure() {
    let router = Router::new().route("/api/schedule", post(|| async { Json(json!({})) }));
    let endpoint = spawn_schedule_server(router).await;

    let mut controller = SubmissionController::new(client(&endpoint));
    controller.submit(&valid_form()).await;

    assert_eq!(controller.status(), SubmissionStatus::Failure);
    assert_eq!(controller.error(), Some("Failed to generate the schedule."));
}

#[tokio::test]
async fn test_non_json_body_is_connectivity_error() {
    let router = Router::new().route(
        "/api/schedule",
        post(|| async { (StatusCode::BAD_GATEWAY, "upstream unavailable") }),
    );
    let endpoint = spawn_schedule_server(router).await;

    let mut controller = SubmissionController::new(client(&endpoint));
    controller.submit(&valid_form()).await;

    assert_eq!(controller.status(), SubmissionStatus::Failure);
    assert_eq!(controller.error(), Some("Error connecting to server."));
}

#[tokio::test]
async fn test_unreachable_server_is_connectivity_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut controller =
        SubmissionController::new(client(&format!("http://{}/api/schedule", addr)));
    let status = controller.submit(&valid_form()).await;

    assert_eq!(status, SubmissionStatus::Failure);
    assert_eq!(controller.error(), Some("Error connecting to server."));
    assert!(controller.can_submit());
}

#[tokio::test]
async fn test_hung_request_times_out() {
    let router = Router::new().route(
        "/api/schedule",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({ "schedule": {} }))
        }),
    );
    let endpoint = spawn_schedule_server(router).await;

    let slow_client =
        HttpScheduleClient::with_endpoint(endpoint, Duration::from_millis(200)).unwrap();
    let mut controller = SubmissionController::new(slow_client);
    let status = controller.submit(&valid_form()).await;

    assert_eq!(status, SubmissionStatus::Failure);
    assert_eq!(controller.error(), Some("Error connecting to server."));
}

#[tokio::test]
async fn test_app_generates_schedule_from_plan_file() {
    let router = Router::new().route("/api/schedule", post(echo_schedule));
    let endpoint = spawn_schedule_server(router).await;

    let dir = tempfile::tempdir().unwrap();
    let plan_path = dir.path().join("plan.toml");
    std::fs::write(
        &plan_path,
        r#"
[[subjects]]
name = "History"
exam_date = "2024-06-01"
chapters = ["Rome", "", "Greece"]
"#,
    )
    .unwrap();

    let config = Config {
        schedule_api_url: endpoint,
        plan_file: plan_path.to_string_lossy().to_string(),
        ..Config::default()
    };

    let form = load_plan_file(&plan_path, config.default_daily_hours)
        .await
        .unwrap();
    let mut app = App::initialize(config).await.unwrap();
    let schedule = app.generate(&form).await.unwrap();

    let table = renderer::render_table(Some(schedule));
    assert!(table.starts_with("Date       | Study Topics\n"));
    assert!(table.contains("2024-01-20 | History: Greece (4 hrs)"));
    assert!(table.contains("2024-03-05 | History: Rome (4 hrs)"));
}

#[tokio::test]
async fn test_app_reports_validation_error() {
    let config = Config {
        schedule_api_url: "http://127.0.0.1:9/api/schedule".to_string(),
        ..Config::default()
    };
    let mut app = App::initialize(config).await.unwrap();

    let err = app.generate(&FormState::new()).await.unwrap_err();
    assert_eq!(err.to_string(), "Please add at least one subject with chapters.");
}
