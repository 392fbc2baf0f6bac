//! Expert profile record.

use crate::{
    DEFAULT_PROFILE_AVAILABILITY, DEFAULT_PROFILE_REGION, DEFAULT_PROFILE_RESPONSE_TIME,
    DEFAULT_PROFILE_TITLE, ProfilePatch,
};

use serde::{Deserialize, Serialize};

/// Public profile of an expert, keyed by the owner's email in the profile store.
///
/// Every field is optional. Unset fields serialize as `null` so clients always
/// see the full set of keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
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

impl Profile {
    /// Placeholder profile created when an expert registers
    pub fn placeholder(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            title: Some(String::from(DEFAULT_PROFILE_TITLE)),
            region: Some(String::from(DEFAULT_PROFILE_REGION)),
            focus: Some(String::new()),
            availability: Some(String::from(DEFAULT_PROFILE_AVAILABILITY)),
            response_time: Some(String::from(DEFAULT_PROFILE_RESPONSE_TIME)),
            phone: Some(String::new()),
            website: Some(String::new()),
            bio: Some(String::new()),
        }
    }

    /// Shallow merge: only fields set in `patch` overwrite, everything else is kept
    pub fn apply(&mut self, patch: ProfilePatch) {
        let ProfilePatch {
            name,
            title,
            region,
            focus,
            availability,
            response_time,
            phone,
            website,
            bio,
        } = patch;

        overwrite(&mut self.name, name);
        overwrite(&mut self.title, title);
        overwrite(&mut self.region, region);
        overwrite(&mut self.focus, focus);
        overwrite(&mut self.availability, availability);
        overwrite(&mut self.response_time, response_time);
        overwrite(&mut self.phone, phone);
        overwrite(&mut self.website, website);
        overwrite(&mut self.bio, bio);
    }
}

fn overwrite(target: &mut Option<String>, value: Option<String>) {
    if let Some(value) = value {
        *target = Some(value);
    }
}
