use gomun_core::Profile;

use serde::Serialize;

/// Profile DTO for JSON serialization. All keys are always present.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDto {
    pub name: Option<String>,
    pub title: Option<String>,
    pub region: Option<String>,
    pub focus: Option<String>,
    pub availability: Option<String>,
    pub response_time: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub bio: Option<String>,
}

impl From<Profile> for ProfileDto {
    fn from(p: Profile) -> Self {
        Self {
            name: p.name,
            title: p.title,
            region: p.region,
            focus: p.focus,
            availability: p.availability,
            response_time: p.response_time,
            phone: p.phone,
            website: p.website,
            bio: p.bio,
        }
    }
}
