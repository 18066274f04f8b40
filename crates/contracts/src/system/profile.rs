use crate::shared::SyncError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Body field the backend reads the CSRF token from
pub const CSRF_FIELD: &str = "csrfmiddlewaretoken";
/// Header the backend reads the CSRF token from
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Editable customer profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDto {
    pub name: String,
    pub mobile: String,
    pub address: String,
}

impl ProfileDto {
    /// Texts shown in the page chrome once the profile is saved. Values are
    /// shown exactly as submitted.
    pub fn display(&self, phone_prefix: &str) -> ProfileDisplay {
        ProfileDisplay {
            name: self.name.clone(),
            phone: format!("{}{}", phone_prefix, self.mobile),
            address: self.address.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDisplay {
    pub name: String,
    pub phone: String,
    pub address: String,
}

/// Profile edit submission: the known fields plus anything else the form
/// carries (hidden inputs rendered by the host page).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateProfileDto {
    #[serde(flatten)]
    pub profile: ProfileDto,
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl UpdateProfileDto {
    /// Flat field list for a form-encoded body, CSRF token included.
    pub fn to_form_fields(&self, csrf_token: &str) -> BTreeMap<String, String> {
        let mut fields = self.extra.clone();
        fields.insert("name".to_string(), self.profile.name.clone());
        fields.insert("mobile".to_string(), self.profile.mobile.clone());
        fields.insert("address".to_string(), self.profile.address.clone());
        fields.insert(CSRF_FIELD.to_string(), csrf_token.to_string());
        fields
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateProfileResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl UpdateProfileResponse {
    pub fn into_result(self) -> Result<(), SyncError> {
        if self.success {
            Ok(())
        } else {
            Err(SyncError::Application(self.message))
        }
    }
}
