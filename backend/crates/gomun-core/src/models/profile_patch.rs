use serde::Deserialize;

/// Partial profile update.
///
/// `None` means "leave unchanged"; a missing key and an explicit `null` both
/// deserialize to `None`. `Some` overwrites, including with an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
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

impl ProfilePatch {
    /// True when applying this patch would change nothing
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
