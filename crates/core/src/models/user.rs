//! Storefront users.

use serde::{Deserialize, Serialize};

use crate::types::{Email, UserId};

/// A user account. `is_admin` gates every mutation control in the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub email: Email,
    pub is_admin: bool,
}

/// Body for creating a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub email: Email,
    #[serde(default)]
    pub is_admin: bool,
}

/// Body for the session lookup endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: Email,
}
