use gomun_core::ProfilePatch;

use serde::Deserialize;

/// Any subset of profile fields. Missing and `null` both mean "keep".
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub region: Option<String>,

    #[serde(default)]
    pub focus: Option<String>,

    #[serde(default)]
    pub availability: Option<String>,

    #[serde(default)]
    pub response_time: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub website: Option<String>,

    #[serde(default)]
    pub bio: Option<String>,
}

impl From<UpdateProfileRequest> for ProfilePatch {
    fn from(r: UpdateProfileRequest) -> Self {
        Self {
            name: r.name,
            title: r.title,
            region: r.region,
            focus: r.focus,
            availability: r.availability,
            response_time: r.response_time,
            phone: r.phone,
            website: r.website,
            bio: r.bio,
        }
    }
}
