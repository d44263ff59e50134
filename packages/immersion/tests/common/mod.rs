#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};

use deutsch_algo::UserProfile;
use deutsch_immersion::{Config, LearningSession};

pub fn fixed_time(minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 9, minute, 0).unwrap()
}

pub fn profile() -> UserProfile {
    let mut profile = UserProfile::new("learner-1", "Lena");
    profile.interests = vec!["travel".to_string()];
    profile.goals = vec!["Travel through Germany by train".to_string()];
    profile
}

pub fn session() -> LearningSession {
    LearningSession::new(profile(), Config::default())
}
