//! Form validation
//!
//! Synchronous checks run before a form is submitted. Each function reports
//! the first failing field.

use crate::shared::models::{Activity, PlanForm, SignupRequest};
use crate::shared::SharedError;
use chrono::NaiveTime;

pub const MAX_PLAN_DAYS: u32 = 365;
pub const MAX_TITLE_CHARS: usize = 50;
pub const MAX_REVIEW_CHARS: usize = 500;
pub const MIN_PASSWORD_CHARS: usize = 8;
pub const NICKNAME_CHARS: std::ops::RangeInclusive<usize> = 2..=20;

pub fn validate_plan(form: &PlanForm) -> Result<(), SharedError> {
    let title = form.title.trim();
    if title.is_empty() {
        return Err(SharedError::validation("title", "Title is required"));
    }
    if title.chars().count() > MAX_TITLE_CHARS {
        return Err(SharedError::validation(
            "title",
            format!("Title must be at most {} characters", MAX_TITLE_CHARS),
        ));
    }
    if form.duration_days == 0 || form.duration_days > MAX_PLAN_DAYS {
        return Err(SharedError::validation(
            "durationDays",
            format!("Duration must be between 1 and {} days", MAX_PLAN_DAYS),
        ));
    }
    if form.activities.is_empty() {
        return Err(SharedError::validation("activities", "Add at least one activity"));
    }
    for (index, activity) in form.activities.iter().enumerate() {
        validate_activity(activity).map_err(|err| match err {
            SharedError::ValidationError { field, message } => {
                SharedError::validation(format!("activities[{}].{}", index, field), message)
            }
            other => other,
        })?;
    }
    Ok(())
}

pub fn validate_activity(activity: &Activity) -> Result<(), SharedError> {
    if activity.name.trim().is_empty() {
        return Err(SharedError::validation("name", "Activity name is required"));
    }
    let start = parse_clock(&activity.start_time)
        .ok_or_else(|| SharedError::validation("startTime", "Use HH:MM"))?;
    let end = parse_clock(&activity.end_time)
        .ok_or_else(|| SharedError::validation("endTime", "Use HH:MM"))?;
    if start >= end {
        return Err(SharedError::validation("endTime", "End time must be after start time"));
    }
    if let Some(rating) = activity.rating {
        validate_rating(rating)?;
    }
    Ok(())
}

pub fn validate_rating(rating: u8) -> Result<(), SharedError> {
    if (1..=5).contains(&rating) {
        Ok(())
    } else {
        Err(SharedError::validation("rating", "Rating must be between 1 and 5"))
    }
}

pub fn validate_signup(form: &SignupRequest) -> Result<(), SharedError> {
    if !looks_like_email(form.email.trim()) {
        return Err(SharedError::validation("email", "Enter a valid email address"));
    }
    if form.password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(SharedError::validation(
            "password",
            format!("Password must be at least {} characters", MIN_PASSWORD_CHARS),
        ));
    }
    if !NICKNAME_CHARS.contains(&form.nickname.trim().chars().count()) {
        return Err(SharedError::validation(
            "nickname",
            format!(
                "Nickname must be {}-{} characters",
                NICKNAME_CHARS.start(),
                NICKNAME_CHARS.end()
            ),
        ));
    }
    Ok(())
}

pub fn validate_review(content: &str) -> Result<(), SharedError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(SharedError::validation("content", "Review cannot be empty"));
    }
    if content.chars().count() > MAX_REVIEW_CHARS {
        return Err(SharedError::validation(
            "content",
            format!("Review must be at most {} characters", MAX_REVIEW_CHARS),
        ));
    }
    Ok(())
}

/// Strict zero-padded `HH:MM`
fn parse_clock(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    let digits_at = |range: std::ops::Range<usize>| {
        value.get(range).is_some_and(|part| part.bytes().all(|b| b.is_ascii_digit()))
    };
    if value.len() != 5 || !digits_at(0..2) || !digits_at(3..5) {
        return None;
    }
    NaiveTime::parse_from_str(value, "%H:%M").ok()
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !value.contains(char::is_whitespace)
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}
