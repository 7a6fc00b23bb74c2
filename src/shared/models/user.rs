//! User and authentication payloads

use serde::{Deserialize, Serialize};

/// Authority granted to a user
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Role {
    #[serde(rename = "ROLE_USER")]
    User,
    #[serde(rename = "ROLE_MANAGER")]
    Manager,
    #[serde(rename = "ROLE_ADMIN")]
    Admin,
    /// Any authority this client does not know about
    #[serde(other)]
    Unknown,
}

impl Role {
    /// Whether this role may open the back-office
    pub fn is_staff(self) -> bool {
        matches!(self, Role::Manager | Role::Admin)
    }
}

/// Signed-in user, persisted under the `userInfo` key
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub user_id: i64,
    pub email: String,
    pub nickname: String,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub introduce: Option<String>,
    #[serde(default)]
    pub job_id: Option<i64>,
    #[serde(default)]
    pub target_ids: Vec<i64>,
    #[serde(default)]
    pub roles: Vec<Role>,
}

impl UserInfo {
    pub fn is_admin(&self) -> bool {
        self.roles.iter().any(|role| role.is_staff())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub nickname: String,
    #[serde(default)]
    pub job_id: Option<i64>,
    #[serde(default)]
    pub target_ids: Vec<i64>,
}

/// Partial profile edit sent to `PATCH /user/me`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub introduce: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_ids: Option<Vec<i64>>,
}

/// Body form of a token-bearing response (`/user/login`, `/reissue`)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenBody {
    #[serde(default)]
    pub access_token: Option<String>,
}
