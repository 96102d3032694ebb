#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use base64::{Engine as _, engine::general_purpose};
use chrono::Utc;
use serde_json::{Value, json};
use uuid::Uuid;

use wakehub_client::config::Config;
use wakehub_client::domain::models::user::UserProfile;
use wakehub_client::infra::factory::bootstrap_context;
use wakehub_client::state::AppContext;

/// In-memory stand-in for the booking backend. Stores documents the way the
/// real API serves them (camelCase, `_id`, references embedded on reads) and
/// records the last bodies it saw so tests can assert on the wire shape.
#[derive(Default)]
pub struct StubState {
    pub locations: Mutex<Vec<Value>>,
    pub instructors: Mutex<Vec<Value>>,
    pub sessions: Mutex<Vec<Value>>,
    pub packages: Mutex<Vec<Value>>,
    pub bookings: Mutex<Vec<Value>>,
    pub users: Mutex<Vec<Value>>,

    pub fail_sessions: AtomicBool,
    pub fail_packages: AtomicBool,
    pub fail_booking_create: AtomicBool,
    pub booking_error_message: Mutex<Option<String>>,
    pub garbage_token: AtomicBool,

    pub last_booking_post: Mutex<Option<Value>>,
    pub last_booking_put: Mutex<Option<Value>>,
    pub last_resource_post: Mutex<Option<(String, Value)>>,
    pub last_auth_header: Mutex<Option<String>>,
}

pub struct TestApi {
    pub ctx: AppContext,
    pub stub: Arc<StubState>,
}

impl TestApi {
    pub async fn new() -> Self {
        let stub = Arc::new(StubState::default());
        let app = stub_router(stub.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub backend");
        let addr = listener.local_addr().expect("No local addr for stub backend");
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let config = Config {
            api_base_url: format!("http://{}/api", addr),
            request_timeout_secs: 5,
        };
        let ctx = bootstrap_context(&config);

        Self { ctx, stub }
    }

    pub fn seed_location(&self, name: &str) -> Value {
        let doc = location_doc(name);
        self.stub.locations.lock().unwrap().push(doc.clone());
        doc
    }

    pub fn seed_session(&self, location: &Value, price: Option<f64>) -> Value {
        let doc = session_doc(location, price);
        self.stub.sessions.lock().unwrap().push(doc.clone());
        doc
    }

    pub fn seed_package(&self, name: &str, price: Option<f64>) -> Value {
        let doc = package_doc(name, price);
        self.stub.packages.lock().unwrap().push(doc.clone());
        doc
    }

    pub fn seed_booking(&self, doc: Value) -> Value {
        self.stub.bookings.lock().unwrap().push(doc.clone());
        doc
    }

    pub fn seed_user(&self, username: &str, email: &str, password: &str, role: &str) -> Value {
        let doc = json!({
            "_id": Uuid::new_v4().to_string(),
            "username": username,
            "email": email,
            "password": password,
            "role": role,
        });
        self.stub.users.lock().unwrap().push(doc.clone());
        doc
    }

    pub async fn login_as(&self, email: &str, password: &str) -> UserProfile {
        self.ctx
            .auth_flow
            .login(email, password)
            .await
            .expect("Login failed in test helper")
    }
}

pub fn location_doc(name: &str) -> Value {
    json!({
        "_id": Uuid::new_v4().to_string(),
        "name": name,
        "address": "1 Marina Way",
        "description": "Dock with boat access",
    })
}

pub fn session_doc(location: &Value, price: Option<f64>) -> Value {
    let mut doc = json!({
        "_id": Uuid::new_v4().to_string(),
        "location": location,
        "date": "2026-09-05T08:00:00Z",
        "time": "08:00",
        "durationMinutes": 60,
        "status": "available",
    });
    if let Some(price) = price {
        doc["price"] = json!(price);
    }
    doc
}

pub fn package_doc(name: &str, price: Option<f64>) -> Value {
    let mut doc = json!({
        "_id": Uuid::new_v4().to_string(),
        "name": name,
        "description": "Rental gear bundle",
        "itemsIncluded": ["Wakeboard", "Helmet"],
        "category": "wakeboard",
    });
    if let Some(price) = price {
        doc["price"] = json!(price);
    }
    doc
}

pub fn booking_doc(session: &Value, user: &Value, packages: &[Value], status: &str, total: f64) -> Value {
    json!({
        "_id": Uuid::new_v4().to_string(),
        "session": session,
        "user": {"_id": user["_id"], "username": user["username"], "email": user["email"]},
        "equipmentPackages": packages,
        "totalPrice": total,
        "status": status,
        "paymentStatus": "pending",
        "bookingDate": "2026-08-01T10:00:00Z",
    })
}

fn stub_router(state: Arc<StubState>) -> Router {
    Router::new()
        .route("/api/users/login", post(login))
        .route("/api/users/register", post(register))
        .route("/api/users/update", put(update_user))
        .route("/api/users/reset-password", post(reset_password))
        .route("/api/bookings", get(list_bookings).post(create_booking))
        .route("/api/bookings/{id}", get(get_booking).put(put_booking).delete(delete_booking))
        .route("/api/{resource}", get(list_resource).post(create_resource))
        .route("/api/{resource}/{id}", get(get_resource).put(put_resource).delete(delete_resource))
        .with_state(state)
}

fn collection<'a>(st: &'a StubState, resource: &str) -> Option<&'a Mutex<Vec<Value>>> {
    match resource {
        "locations" => Some(&st.locations),
        "instructors" => Some(&st.instructors),
        "sessions" => Some(&st.sessions),
        "packages" => Some(&st.packages),
        _ => None,
    }
}

fn find_doc(list: &[Value], id: &str) -> Option<Value> {
    list.iter().find(|d| d["_id"] == id).cloned()
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get("authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::to_string)
}

fn make_token(user: &Value) -> String {
    let header = general_purpose::URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let claims = json!({
        "id": user["_id"],
        "username": user["username"],
        "email": user["email"],
        "role": user["role"],
        "exp": Utc::now().timestamp() + 3600,
    });
    let body = general_purpose::URL_SAFE_NO_PAD.encode(claims.to_string().as_bytes());
    format!("{}.{}.stubsig", header, body)
}

fn decode_stub_claims(token: &str) -> Option<Value> {
    let payload = token.split('.').nth(1)?;
    let bytes = general_purpose::URL_SAFE_NO_PAD.decode(payload).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Mirrors the backend's read model: reference ids arrive in a write and the
/// documents come back embedded.
fn populate(st: &StubState, resource: &str, doc: &mut Value) {
    match resource {
        "sessions" => {
            if let Some(loc_id) = doc["location"].as_str() {
                if let Some(loc) = find_doc(&st.locations.lock().unwrap(), loc_id) {
                    doc["location"] = loc;
                }
            }
            if let Some(inst_id) = doc["instructor"].as_str() {
                if let Some(inst) = find_doc(&st.instructors.lock().unwrap(), inst_id) {
                    doc["instructor"] = inst;
                }
            }
        }
        "instructors" => {
            if let Some(ids) = doc["activeLocations"].as_array().cloned() {
                let locations = st.locations.lock().unwrap();
                let embedded: Vec<Value> = ids
                    .iter()
                    .filter_map(Value::as_str)
                    .filter_map(|id| find_doc(&locations, id))
                    .collect();
                doc["activeLocations"] = json!(embedded);
            }
        }
        _ => {}
    }
}

async fn list_resource(State(st): State<Arc<StubState>>, Path(resource): Path<String>) -> Response {
    if resource == "sessions" && st.fail_sessions.load(Ordering::SeqCst) {
        return error_response(StatusCode::INTERNAL_SERVER_ERROR, "sessions unavailable");
    }
    if resource == "packages" && st.fail_packages.load(Ordering::SeqCst) {
        return error_response(StatusCode::INTERNAL_SERVER_ERROR, "packages unavailable");
    }
    let Some(col) = collection(&st, &resource) else {
        return error_response(StatusCode::NOT_FOUND, "Unknown resource");
    };
    let docs = col.lock().unwrap().clone();
    Json(docs).into_response()
}

async fn create_resource(
    State(st): State<Arc<StubState>>,
    Path(resource): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    *st.last_resource_post.lock().unwrap() = Some((resource.clone(), body.clone()));

    let mut doc = body;
    doc["_id"] = json!(Uuid::new_v4().to_string());
    populate(&st, &resource, &mut doc);

    let Some(col) = collection(&st, &resource) else {
        return error_response(StatusCode::NOT_FOUND, "Unknown resource");
    };
    col.lock().unwrap().push(doc.clone());
    (StatusCode::CREATED, Json(doc)).into_response()
}

async fn get_resource(
    State(st): State<Arc<StubState>>,
    Path((resource, id)): Path<(String, String)>,
) -> Response {
    let Some(col) = collection(&st, &resource) else {
        return error_response(StatusCode::NOT_FOUND, "Unknown resource");
    };
    let docs = col.lock().unwrap();
    match find_doc(&docs, &id) {
        Some(doc) => Json(doc).into_response(),
        None => error_response(StatusCode::NOT_FOUND, "Not found"),
    }
}

async fn put_resource(
    State(st): State<Arc<StubState>>,
    Path((resource, id)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> Response {
    let mut doc = body;
    doc["_id"] = json!(id);
    populate(&st, &resource, &mut doc);

    let Some(col) = collection(&st, &resource) else {
        return error_response(StatusCode::NOT_FOUND, "Unknown resource");
    };
    let mut docs = col.lock().unwrap();
    let Some(pos) = docs.iter().position(|d| d["_id"] == doc["_id"]) else {
        return error_response(StatusCode::NOT_FOUND, "Not found");
    };
    docs[pos] = doc.clone();
    drop(docs);
    Json(doc).into_response()
}

async fn delete_resource(
    State(st): State<Arc<StubState>>,
    Path((resource, id)): Path<(String, String)>,
) -> Response {
    let Some(col) = collection(&st, &resource) else {
        return error_response(StatusCode::NOT_FOUND, "Unknown resource");
    };
    let mut docs = col.lock().unwrap();
    let before = docs.len();
    docs.retain(|d| d["_id"] != id.as_str());
    if docs.len() == before {
        return error_response(StatusCode::NOT_FOUND, "Not found");
    }
    Json(json!({ "message": "Deleted" })).into_response()
}

async fn list_bookings(State(st): State<Arc<StubState>>, headers: HeaderMap) -> Response {
    *st.last_auth_header.lock().unwrap() = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let docs = st.bookings.lock().unwrap().clone();
    Json(docs).into_response()
}

async fn get_booking(State(st): State<Arc<StubState>>, Path(id): Path<String>) -> Response {
    let docs = st.bookings.lock().unwrap();
    match find_doc(&docs, &id) {
        Some(doc) => Json(doc).into_response(),
        None => error_response(StatusCode::NOT_FOUND, "Booking not found"),
    }
}

async fn create_booking(
    State(st): State<Arc<StubState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    *st.last_booking_post.lock().unwrap() = Some(body.clone());
    *st.last_auth_header.lock().unwrap() = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    if st.fail_booking_create.load(Ordering::SeqCst) {
        return match st.booking_error_message.lock().unwrap().clone() {
            Some(msg) => error_response(StatusCode::INTERNAL_SERVER_ERROR, &msg),
            None => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        };
    }

    if bearer_token(&headers).is_none() {
        return error_response(StatusCode::UNAUTHORIZED, "Not authorized");
    }

    let session = body["session"]
        .as_str()
        .and_then(|id| find_doc(&st.sessions.lock().unwrap(), id));
    let Some(session) = session else {
        return error_response(StatusCode::BAD_REQUEST, "Session not found");
    };

    let packages = resolve_packages(&st, &body["equipmentPackages"]);

    let user = body["user"]
        .as_str()
        .and_then(|id| find_doc(&st.users.lock().unwrap(), id));
    let Some(user) = user else {
        return error_response(StatusCode::BAD_REQUEST, "User not found");
    };

    let total = session["price"].as_f64().unwrap_or(0.0)
        + packages.iter().map(|p| p["price"].as_f64().unwrap_or(0.0)).sum::<f64>();

    let doc = json!({
        "_id": Uuid::new_v4().to_string(),
        "session": session,
        "user": {"_id": user["_id"], "username": user["username"], "email": user["email"]},
        "equipmentPackages": packages,
        "totalPrice": total,
        "status": "confirmed",
        "paymentStatus": "pending",
        "notes": body["notes"],
        "bookingDate": Utc::now().to_rfc3339(),
    });
    st.bookings.lock().unwrap().push(doc.clone());
    (StatusCode::CREATED, Json(doc)).into_response()
}

async fn put_booking(
    State(st): State<Arc<StubState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    *st.last_booking_put.lock().unwrap() = Some(body.clone());
    *st.last_auth_header.lock().unwrap() = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    if body.get("status").is_some() {
        let mut bookings = st.bookings.lock().unwrap();
        let Some(booking) = bookings.iter_mut().find(|b| b["_id"] == id.as_str()) else {
            return error_response(StatusCode::NOT_FOUND, "Booking not found");
        };
        booking["status"] = body["status"].clone();
        match body.get("cancellationReason") {
            Some(reason) => booking["cancellationReason"] = reason.clone(),
            None => {
                booking.as_object_mut().unwrap().remove("cancellationReason");
            }
        }
        return Json(booking.clone()).into_response();
    }

    let session = body["session"]
        .as_str()
        .and_then(|sid| find_doc(&st.sessions.lock().unwrap(), sid));
    let Some(session) = session else {
        return error_response(StatusCode::BAD_REQUEST, "Session not found");
    };
    let packages = resolve_packages(&st, &body["equipmentPackages"]);
    let total = session["price"].as_f64().unwrap_or(0.0)
        + packages.iter().map(|p| p["price"].as_f64().unwrap_or(0.0)).sum::<f64>();

    let mut bookings = st.bookings.lock().unwrap();
    let Some(old) = bookings.iter_mut().find(|b| b["_id"] == id.as_str()) else {
        return error_response(StatusCode::NOT_FOUND, "Booking not found");
    };
    let doc = json!({
        "_id": old["_id"],
        "session": session,
        "user": old["user"],
        "equipmentPackages": packages,
        "totalPrice": total,
        "status": old["status"],
        "paymentStatus": old["paymentStatus"],
        "notes": body["notes"],
        "bookingDate": old["bookingDate"],
    });
    *old = doc.clone();
    Json(doc).into_response()
}

async fn delete_booking(State(st): State<Arc<StubState>>, Path(id): Path<String>) -> Response {
    let mut bookings = st.bookings.lock().unwrap();
    let before = bookings.len();
    bookings.retain(|b| b["_id"] != id.as_str());
    if bookings.len() == before {
        return error_response(StatusCode::NOT_FOUND, "Booking not found");
    }
    Json(json!({ "message": "Booking deleted" })).into_response()
}

fn resolve_packages(st: &StubState, ids: &Value) -> Vec<Value> {
    let docs = st.packages.lock().unwrap();
    ids.as_array()
        .map(|ids| {
            ids.iter()
                .filter_map(Value::as_str)
                .filter_map(|id| find_doc(&docs, id))
                .collect()
        })
        .unwrap_or_default()
}

async fn login(State(st): State<Arc<StubState>>, Json(body): Json<Value>) -> Response {
    let found = st
        .users
        .lock()
        .unwrap()
        .iter()
        .find(|u| u["email"] == body["email"] && u["password"] == body["password"])
        .cloned();
    let Some(user) = found else {
        return error_response(StatusCode::UNAUTHORIZED, "Invalid credentials");
    };

    if st.garbage_token.load(Ordering::SeqCst) {
        return Json(json!({ "token": "not-a-jwt" })).into_response();
    }
    Json(json!({ "token": make_token(&user) })).into_response()
}

async fn register(State(st): State<Arc<StubState>>, Json(body): Json<Value>) -> Response {
    let mut users = st.users.lock().unwrap();
    if users.iter().any(|u| u["email"] == body["email"]) {
        return error_response(StatusCode::CONFLICT, "Email already registered");
    }
    let doc = json!({
        "_id": Uuid::new_v4().to_string(),
        "username": body["username"],
        "email": body["email"],
        "password": body["password"],
        "role": "CUSTOMER",
    });
    users.push(doc.clone());
    let mut public = doc;
    public.as_object_mut().unwrap().remove("password");
    (StatusCode::CREATED, Json(public)).into_response()
}

async fn update_user(
    State(st): State<Arc<StubState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let Some(token) = bearer_token(&headers) else {
        return error_response(StatusCode::UNAUTHORIZED, "Not authorized");
    };
    let Some(claims) = decode_stub_claims(&token) else {
        return error_response(StatusCode::UNAUTHORIZED, "Not authorized");
    };
    let user_id = claims["id"].as_str().unwrap_or_default().to_string();

    let mut users = st.users.lock().unwrap();
    let Some(user) = users.iter_mut().find(|u| u["_id"] == user_id.as_str()) else {
        return error_response(StatusCode::NOT_FOUND, "User not found");
    };
    if let Some(username) = body.get("username") {
        user["username"] = username.clone();
    }
    let mut public = user.clone();
    public.as_object_mut().unwrap().remove("password");
    Json(json!({ "user": public })).into_response()
}

async fn reset_password(State(st): State<Arc<StubState>>, Json(body): Json<Value>) -> Response {
    if body["email"].as_str().unwrap_or_default().is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "Email is required");
    }
    let _ = &st;
    Json(json!({ "message": "Password reset email sent" })).into_response()
}
