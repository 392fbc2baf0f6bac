//! Demo records loaded at startup.

use gomun_core::{Profile, User, UserRole};

use std::collections::HashMap;

pub const SEED_EXPERT_EMAIL: &str = "hanul@gomun.kr";
pub const SEED_COMPANY_EMAIL: &str = "company@gomun.kr";
pub const SEED_PASSWORD: &str = "gomun123";

pub fn users() -> Vec<User> {
    vec![
        User {
            role: UserRole::Expert,
            name: "김한울".into(),
            email: SEED_EXPERT_EMAIL.into(),
            password: SEED_PASSWORD.into(),
        },
        User {
            role: UserRole::Company,
            name: "고문매칭 기업".into(),
            email: SEED_COMPANY_EMAIL.into(),
            password: SEED_PASSWORD.into(),
        },
    ]
}

pub fn profiles() -> HashMap<String, Profile> {
    let hanul = Profile {
        name: Some("김한울".into()),
        title: Some("전략 컨설턴트".into()),
        region: Some("서울".into()),
        focus: Some("대기업 HQ 전략실 및 중견기업 PMO 리드".into()),
        availability: Some("즉시 투입".into()),
        response_time: Some("평균 4시간".into()),
        phone: Some("010-1234-5678".into()),
        website: Some("https://gomun.kr".into()),
        bio: Some("하이-스킬 공백을 메우는 Zero-Gap HR 전문가입니다.".into()),
    };

    HashMap::from([(SEED_EXPERT_EMAIL.to_string(), hanul)])
}
