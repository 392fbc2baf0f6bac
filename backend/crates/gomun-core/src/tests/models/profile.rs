use crate::{Profile, ProfilePatch};

fn sample() -> Profile {
    Profile {
        name: Some("김한울".into()),
        title: Some("전략 컨설턴트".into()),
        region: Some("서울".into()),
        ..Profile::default()
    }
}

#[test]
fn test_placeholder_profile_values() {
    let profile = Profile::placeholder("새 전문가");

    assert_eq!(profile.name.as_deref(), Some("새 전문가"));
    assert_eq!(profile.title.as_deref(), Some("전문가"));
    assert_eq!(profile.region.as_deref(), Some("서울"));
    assert_eq!(profile.availability.as_deref(), Some("즉시 투입"));
    assert_eq!(profile.response_time.as_deref(), Some("평균 4시간"));
    assert_eq!(profile.focus.as_deref(), Some(""));
    assert_eq!(profile.phone.as_deref(), Some(""));
    assert_eq!(profile.website.as_deref(), Some(""));
    assert_eq!(profile.bio.as_deref(), Some(""));
}

#[test]
fn test_apply_overwrites_only_set_fields() {
    let mut profile = sample();
    profile.apply(ProfilePatch {
        title: Some("신규".into()),
        ..ProfilePatch::default()
    });

    assert_eq!(profile.title.as_deref(), Some("신규"));
    assert_eq!(profile.name.as_deref(), Some("김한울"));
    assert_eq!(profile.region.as_deref(), Some("서울"));
}

#[test]
fn test_apply_empty_patch_is_noop() {
    let mut profile = sample();
    let patch = ProfilePatch::default();
    assert!(patch.is_empty());

    profile.apply(patch);

    assert_eq!(profile, sample());
}

#[test]
fn test_apply_empty_string_overwrites() {
    let mut profile = sample();
    profile.apply(ProfilePatch {
        region: Some(String::new()),
        ..ProfilePatch::default()
    });

    assert_eq!(profile.region.as_deref(), Some(""));
}

#[test]
fn test_patch_null_deserializes_as_unset() {
    let patch: ProfilePatch =
        serde_json::from_str(r#"{"title": null, "responseTime": "1시간"}"#).unwrap();

    assert_eq!(patch.title, None);
    assert_eq!(patch.response_time.as_deref(), Some("1시간"));
    assert!(!patch.is_empty());
}

#[test]
fn test_profile_serializes_all_keys_in_camel_case() {
    let json = serde_json::to_value(sample()).unwrap();
    let obj = json.as_object().unwrap();

    assert_eq!(obj.len(), 9);
    assert!(obj.contains_key("responseTime"));
    assert!(obj["bio"].is_null());
    assert_eq!(obj["name"], "김한울");
}
