use serde::{Deserialize, Serialize};

use crate::schema::{FormRecord, FormValues};

/// A user record as served by the API. `id` is assigned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Applies the fields present in `changes`, keeping the id.
    pub fn apply(&mut self, changes: &UpdateUserDto) {
        if let Some(value) = &changes.first_name {
            self.first_name = value.clone();
        }
        if let Some(value) = &changes.last_name {
            self.last_name = value.clone();
        }
        if let Some(value) = &changes.email {
            self.email = value.clone();
        }
        if let Some(value) = &changes.phone_number {
            self.phone_number = value.clone();
        }
    }
}

impl FormRecord for User {
    const ATTRIBUTES: &'static [&'static str] = &["firstName", "lastName", "email", "phoneNumber"];

    fn id(&self) -> &str {
        &self.id
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        match name {
            "firstName" => Some(&self.first_name),
            "lastName" => Some(&self.last_name),
            "email" => Some(&self.email),
            "phoneNumber" => Some(&self.phone_number),
            _ => None,
        }
    }
}

/// Body of a create request: every user field except the id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
}

impl CreateUserDto {
    /// Reads a submitted form. Missing keys become empty strings.
    pub fn from_values(values: &FormValues) -> Self {
        let get = |key: &str| values.get(key).cloned().unwrap_or_default();
        Self {
            first_name: get("firstName"),
            last_name: get("lastName"),
            email: get("email"),
            phone_number: get("phoneNumber"),
        }
    }

    pub fn into_user(self, id: impl Into<String>) -> User {
        User {
            id: id.into(),
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone_number: self.phone_number,
        }
    }
}

/// Body of an update request. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

impl UpdateUserDto {
    /// Reads a submitted form. Only keys present in `values` are sent.
    pub fn from_values(values: &FormValues) -> Self {
        Self {
            first_name: values.get("firstName").cloned(),
            last_name: values.get("lastName").cloned(),
            email: values.get("email").cloned(),
            phone_number: values.get("phoneNumber").cloned(),
        }
    }
}

impl From<CreateUserDto> for UpdateUserDto {
    fn from(dto: CreateUserDto) -> Self {
        Self {
            first_name: Some(dto.first_name),
            last_name: Some(dto.last_name),
            email: Some(dto.email),
            phone_number: Some(dto.phone_number),
        }
    }
}
