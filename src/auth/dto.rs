use serde::{Deserialize, Serialize};

/// Form body for registration and login.
#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Returned after register or login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user_id: i64,
    pub email: String,
}
