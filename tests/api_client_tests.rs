use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, State},
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use user_crud_core::api::{HttpClient, HttpUserService, UserService};
use user_crud_core::errors::ApiError;
use user_crud_core::user::{CreateUserDto, UpdateUserDto, User};

#[derive(Clone, Default)]
struct Backend {
    users: Arc<Mutex<Vec<User>>>,
    content_types: Arc<Mutex<Vec<String>>>,
}

impl Backend {
    fn record(&self, headers: &HeaderMap) {
        let value = headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("")
            .to_string();
        self.content_types.lock().unwrap().push(value);
    }
}

async fn list_users(State(backend): State<Backend>, headers: HeaderMap) -> Json<Vec<User>> {
    backend.record(&headers);
    Json(backend.users.lock().unwrap().clone())
}

async fn create_user(
    State(backend): State<Backend>,
    headers: HeaderMap,
    Json(dto): Json<CreateUserDto>,
) -> (StatusCode, Json<User>) {
    backend.record(&headers);
    let mut users = backend.users.lock().unwrap();
    let user = dto.into_user(format!("srv-{}", users.len() + 1));
    users.push(user.clone());
    (StatusCode::CREATED, Json(user))
}

async fn get_user(
    State(backend): State<Backend>,
    Path(id): Path<String>,
) -> Result<Json<User>, StatusCode> {
    backend
        .users
        .lock()
        .unwrap()
        .iter()
        .find(|user| user.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_user(
    State(backend): State<Backend>,
    Path(id): Path<String>,
    Json(dto): Json<UpdateUserDto>,
) -> Result<Json<User>, StatusCode> {
    let mut users = backend.users.lock().unwrap();
    let user = users
        .iter_mut()
        .find(|user| user.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    user.apply(&dto);
    Ok(Json(user.clone()))
}

async fn delete_user(State(backend): State<Backend>, Path(id): Path<String>) -> StatusCode {
    let mut users = backend.users.lock().unwrap();
    let before = users.len();
    users.retain(|user| user.id != id);
    if users.len() == before {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::NO_CONTENT
    }
}

async fn spawn_backend(backend: Backend) -> SocketAddr {
    let app = Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
        .with_state(backend);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve test backend");
    });
    addr
}

fn service_for(addr: SocketAddr) -> HttpUserService {
    HttpUserService::new(HttpClient::new(format!("http://{addr}/")))
}

fn dto() -> CreateUserDto {
    CreateUserDto {
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        email: "ada@example.com".into(),
        phone_number: "+44 20 7946 0958".into(),
    }
}

#[tokio::test]
async fn crud_round_trip_against_rest_backend() {
    let backend = Backend::default();
    let service = service_for(spawn_backend(backend.clone()).await);

    assert!(service.list().await.unwrap().is_empty());

    let created = service.create(&dto()).await.unwrap();
    assert_eq!(created.id, "srv-1");
    assert_eq!(service.get("srv-1").await.unwrap(), created);

    let updated = service
        .update(
            "srv-1",
            &UpdateUserDto {
                email: Some("ada@analytical.engine".into()),
                ..UpdateUserDto::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.email, "ada@analytical.engine");
    assert_eq!(updated.first_name, "Ada");

    service.delete("srv-1").await.unwrap();
    assert!(service.list().await.unwrap().is_empty());

    let content_types = backend.content_types.lock().unwrap().clone();
    assert!(!content_types.is_empty());
    assert!(content_types.iter().all(|value| value == "application/json"));
}

#[tokio::test]
async fn non_success_status_maps_to_status_error() {
    let service = service_for(spawn_backend(Backend::default()).await);

    let err = service.get("missing").await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.to_string(), "API request failed: Not Found");

    let err = service.delete("missing").await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 404, .. }));
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = service_for(addr).list().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn update_sends_only_present_fields() {
    let backend = Backend::default();
    backend.users.lock().unwrap().push(dto().into_user("u1"));
    let service = service_for(spawn_backend(backend.clone()).await);

    let changes = UpdateUserDto {
        last_name: Some("Byron".into()),
        ..UpdateUserDto::default()
    };
    assert_eq!(
        serde_json::to_value(&changes).unwrap(),
        serde_json::json!({ "lastName": "Byron" })
    );

    let updated = service.update("u1", &changes).await.unwrap();
    assert_eq!(updated.last_name, "Byron");
    assert_eq!(updated.email, "ada@example.com");
}

#[tokio::test]
async fn unrouted_method_is_a_status_error() {
    let service = service_for(spawn_backend(Backend::default()).await);
    let err = service
        .client()
        .patch::<User, _>("/users/u1", &serde_json::json!({ "lastName": "Byron" }))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(405));
    assert_eq!(err.to_string(), "API request failed: Method Not Allowed");
}
