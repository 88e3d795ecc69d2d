//! Exercises `MembersClient` against an in-process axum server.

use std::sync::{Arc, Mutex};

use api::{ClientError, ImageUpload, MembersBackend, MembersClient, NewMember, Position};
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get};
use axum::{Json, Router};
use serde_json::{json, Value};

#[derive(Clone, Default)]
struct Recorded {
    fields: Arc<Mutex<Vec<(String, Option<String>, Vec<u8>)>>>,
    deleted: Arc<Mutex<Vec<i64>>>,
}

async fn list() -> Json<Value> {
    Json(json!([
        { "id": 2, "name": "Lee", "position": "Undergraduate Researcher", "research": "ML", "email": "lee@lab.kr", "image": "/profile/lee.png" },
        { "id": 1, "name": "Kim", "position": "Master's Student", "research": "DB", "email": "kim@lab.kr", "image": "" }
    ]))
}

async fn create(State(recorded): State<Recorded>, mut multipart: Multipart) -> (StatusCode, Json<Value>) {
    while let Some(field) = multipart.next_field().await.expect("valid multipart") {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let bytes = field.bytes().await.expect("field bytes").to_vec();
        recorded.fields.lock().unwrap().push((name, file_name, bytes));
    }
    (StatusCode::CREATED, Json(json!({ "message": "Member created" })))
}

async fn remove(State(recorded): State<Recorded>, Path(id): Path<i64>) -> Json<Value> {
    recorded.deleted.lock().unwrap().push(id);
    Json(json!({ "message": "Member deleted" }))
}

async fn conflict() -> (StatusCode, Json<Value>) {
    (StatusCode::CONFLICT, Json(json!({ "message": "duplicate email" })))
}

async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("test server");
    });
    format!("http://{addr}")
}

fn new_member(image: Option<ImageUpload>) -> NewMember {
    NewMember {
        name: "Park".into(),
        position: Position::MastersStudent,
        research: "Query optimisation".into(),
        email: "park@lab.kr".into(),
        image,
    }
}

#[tokio::test]
async fn test_list_members() {
    let base = spawn(Router::new().route("/api/members", get(list))).await;
    let client = MembersClient::new(base);

    let members = client.list_members().await.expect("members listed");
    assert_eq!(members.len(), 2);
    assert_eq!(members[0].name, "Lee");
    assert_eq!(members[0].role(), Position::UndergraduateResearcher);
    assert_eq!(members[1].image_src(), "/placeholder.svg");
}

#[tokio::test]
async fn test_create_member_sends_multipart_fields() {
    let recorded = Recorded::default();
    let router = Router::new()
        .route("/api/members", get(list).post(create))
        .with_state(recorded.clone());
    let client = MembersClient::new(spawn(router).await);

    let image = ImageUpload {
        file_name: "park.png".into(),
        content_type: Some("image/png".into()),
        bytes: b"png".to_vec(),
    };
    client
        .create_member(new_member(Some(image)))
        .await
        .expect("member created");

    let fields = recorded.fields.lock().unwrap().clone();
    let names: Vec<&str> = fields.iter().map(|(n, _, _)| n.as_str()).collect();
    assert_eq!(names, vec!["name", "position", "research", "email", "image"]);
    assert_eq!(fields[1].2, b"Master's Student");
    assert_eq!(fields[4].1.as_deref(), Some("park.png"));
    assert_eq!(fields[4].2, b"png");
}

#[tokio::test]
async fn test_create_member_without_image() {
    let recorded = Recorded::default();
    let router = Router::new()
        .route("/api/members", get(list).post(create))
        .with_state(recorded.clone());
    let client = MembersClient::new(spawn(router).await);

    client.create_member(new_member(None)).await.expect("member created");

    let fields = recorded.fields.lock().unwrap().clone();
    assert_eq!(fields.len(), 4);
    assert!(fields.iter().all(|(name, _, _)| name != "image"));
}

#[tokio::test]
async fn test_create_member_surfaces_server_message() {
    let router = Router::new().route("/api/members", get(list).post(conflict));
    let client = MembersClient::new(spawn(router).await);

    let err = client.create_member(new_member(None)).await.unwrap_err();
    assert_eq!(
        err,
        ClientError::Application {
            status: 409,
            message: Some("duplicate email".into()),
        }
    );
}

#[tokio::test]
async fn test_delete_member_targets_id() {
    let recorded = Recorded::default();
    let router = Router::new()
        .route("/api/members/{id}", delete(remove))
        .with_state(recorded.clone());
    let client = MembersClient::new(spawn(router).await);

    client.delete_member(42).await.expect("member deleted");
    assert_eq!(*recorded.deleted.lock().unwrap(), vec![42]);
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // Bind then drop to get a port nobody listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let client = MembersClient::new(format!("http://{addr}"));
    let err = client.list_members().await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
}

#[tokio::test]
async fn test_html_error_page_is_transport_error() {
    let router = Router::new().route(
        "/api/members",
        get(list).post(|| async { (StatusCode::BAD_GATEWAY, "<html>Bad Gateway</html>") }),
    );
    let client = MembersClient::new(spawn(router).await);

    let err = client.create_member(new_member(None)).await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
}

#[tokio::test]
async fn test_non_json_listing_is_transport_error() {
    let router = Router::new().route("/api/members", get(|| async { "not json" }));
    let client = MembersClient::new(spawn(router).await);

    let err = client.list_members().await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
}
