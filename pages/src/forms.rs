//! Typed form state, distinct from the typed submission payload.
//!
//! Modal forms hold what the user typed - strings. Drafts hold what the
//! API accepts - numbers, dates, times. The conversion between them is a
//! total function that fails loudly on non-numeric input instead of
//! silently coercing to a default, which is how the original console kept
//! shipping string-typed foreign keys to the backend.

use brewdesk_api::{
    CoffeeDraft, CupTrackingDraft, PlanCoffeeOptionDraft, PlanDraft, SubscriptionDraft,
    TimeWindowDraft, UserDraft,
};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use thiserror::Error;

/// A rejected form field.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    /// A required field was left empty.
    #[error("{field} is required")]
    Missing {
        /// The empty field.
        field: &'static str,
    },

    /// A numeric field did not parse.
    #[error("{field} must be a number (got \"{value}\")")]
    InvalidNumber {
        /// The offending field.
        field: &'static str,
        /// What the user typed.
        value: String,
    },

    /// A date field did not parse (expected `YYYY-MM-DD`).
    #[error("{field} must be a date in YYYY-MM-DD format (got \"{value}\")")]
    InvalidDate {
        /// The offending field.
        field: &'static str,
        /// What the user typed.
        value: String,
    },

    /// A time field did not parse (expected `HH:MM` or `HH:MM:SS`).
    #[error("{field} must be a time in HH:MM format (got \"{value}\")")]
    InvalidTime {
        /// The offending field.
        field: &'static str,
        /// What the user typed.
        value: String,
    },
}

fn required(field: &'static str, value: &str) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FormError::Missing { field });
    }
    Ok(trimmed.to_string())
}

fn parse_i64(field: &'static str, value: &str) -> Result<i64, FormError> {
    required(field, value)?
        .parse()
        .map_err(|_| FormError::InvalidNumber {
            field,
            value: value.trim().to_string(),
        })
}

fn parse_i32(field: &'static str, value: &str) -> Result<i32, FormError> {
    required(field, value)?
        .parse()
        .map_err(|_| FormError::InvalidNumber {
            field,
            value: value.trim().to_string(),
        })
}

fn parse_f64(field: &'static str, value: &str) -> Result<f64, FormError> {
    required(field, value)?
        .parse()
        .map_err(|_| FormError::InvalidNumber {
            field,
            value: value.trim().to_string(),
        })
}

fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, FormError> {
    let raw = required(field, value)?;
    raw.parse().map_err(|_| FormError::InvalidDate {
        field,
        value: raw,
    })
}

fn parse_time(field: &'static str, value: &str) -> Result<NaiveTime, FormError> {
    let raw = required(field, value)?;
    NaiveTime::parse_from_str(&raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(&raw, "%H:%M"))
        .map_err(|_| FormError::InvalidTime { field, value: raw })
}

fn parse_datetime(field: &'static str, value: &str) -> Result<DateTime<Utc>, FormError> {
    let raw = required(field, value)?;
    // Accept a full timestamp or a bare date at midnight UTC.
    raw.parse::<DateTime<Utc>>()
        .or_else(|_| {
            raw.parse::<NaiveDate>()
                .map(|date| DateTime::from_naive_utc_and_offset(date.and_time(NaiveTime::MIN), Utc))
        })
        .map_err(|_| FormError::InvalidDate { field, value: raw })
}

/// Coffee catalog modal form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoffeeForm {
    /// Category id, as typed.
    pub category_id: String,
    /// Display name.
    pub coffee_name: String,
    /// Free-text description.
    pub description: String,
    /// Short unique code.
    pub code: String,
    /// Hosted image URL, when one was uploaded.
    pub image_url: String,
    /// Active checkbox.
    pub is_active: bool,
}

impl CoffeeForm {
    /// Prefill the edit modal from an existing record.
    #[must_use]
    pub fn from_record(record: &brewdesk_api::CoffeeItem) -> Self {
        Self {
            category_id: record.category_id.to_string(),
            coffee_name: record.coffee_name.clone(),
            description: record.description.clone(),
            code: record.code.clone(),
            image_url: record.image_url.clone().unwrap_or_default(),
            is_active: record.is_active,
        }
    }

    /// Convert into the submission payload.
    ///
    /// # Errors
    ///
    /// Returns [`FormError`] for empty required fields or a non-numeric
    /// category id.
    pub fn into_draft(self) -> Result<CoffeeDraft, FormError> {
        Ok(CoffeeDraft {
            category_id: parse_i64("categoryId", &self.category_id)?,
            coffee_name: required("coffeeName", &self.coffee_name)?,
            description: self.description.trim().to_string(),
            code: required("code", &self.code)?,
            image_url: {
                let trimmed = self.image_url.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            },
            is_active: self.is_active,
        })
    }
}

/// Subscription plan modal form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanForm {
    /// Display name.
    pub plan_name: String,
    /// Free-text description.
    pub description: String,
    /// Price, as typed.
    pub price: String,
    /// Duration in days, as typed.
    pub duration_days: String,
    /// Total cups, as typed.
    pub total_cups: String,
    /// Daily cup limit, as typed.
    pub daily_cup_limit: String,
    /// Active checkbox.
    pub is_active: bool,
}

impl PlanForm {
    /// Convert into the submission payload.
    ///
    /// # Errors
    ///
    /// Returns [`FormError`] for empty required fields or non-numeric
    /// price, duration, or cup counts.
    pub fn into_draft(self) -> Result<PlanDraft, FormError> {
        Ok(PlanDraft {
            plan_name: required("planName", &self.plan_name)?,
            description: self.description.trim().to_string(),
            price: parse_f64("price", &self.price)?,
            duration_days: parse_i32("durationDays", &self.duration_days)?,
            total_cups: parse_i32("totalCups", &self.total_cups)?,
            daily_cup_limit: parse_i32("dailyCupLimit", &self.daily_cup_limit)?,
            is_active: self.is_active,
        })
    }
}

/// Time window modal form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeWindowForm {
    /// Owning plan id, as typed.
    pub plan_id: String,
    /// Window opens, as typed (`HH:MM`).
    pub start_time: String,
    /// Window closes, as typed (`HH:MM`).
    pub end_time: String,
    /// Free-text description.
    pub description: String,
    /// Active checkbox.
    pub is_active: bool,
}

impl TimeWindowForm {
    /// Convert into the submission payload.
    ///
    /// # Errors
    ///
    /// Returns [`FormError`] for a non-numeric plan id or unparseable
    /// times.
    pub fn into_draft(self) -> Result<TimeWindowDraft, FormError> {
        Ok(TimeWindowDraft {
            plan_id: parse_i64("planId", &self.plan_id)?,
            start_time: parse_time("startTime", &self.start_time)?,
            end_time: parse_time("endTime", &self.end_time)?,
            description: self.description.trim().to_string(),
            is_active: self.is_active,
        })
    }
}

/// Daily cup tracking modal form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CupTrackingForm {
    /// Owning subscription id, as typed.
    pub subscription_id: String,
    /// Tracked day, as typed (`YYYY-MM-DD`).
    pub date: String,
    /// Cups taken, as typed.
    pub cups_taken: String,
}

impl CupTrackingForm {
    /// Convert into the submission payload.
    ///
    /// # Errors
    ///
    /// Returns [`FormError`] for non-numeric ids/counts or an unparseable
    /// date.
    pub fn into_draft(self) -> Result<CupTrackingDraft, FormError> {
        Ok(CupTrackingDraft {
            subscription_id: parse_i64("subscriptionId", &self.subscription_id)?,
            date: parse_date("date", &self.date)?,
            cups_taken: parse_i32("cupsTaken", &self.cups_taken)?,
        })
    }
}

/// Plan/coffee link modal form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanCoffeeOptionForm {
    /// Plan id, as typed.
    pub plan_id: String,
    /// Coffee id, as typed.
    pub coffee_id: String,
}

impl PlanCoffeeOptionForm {
    /// Convert into the submission payload.
    ///
    /// # Errors
    ///
    /// Returns [`FormError`] when either id is empty or non-numeric.
    pub fn into_draft(self) -> Result<PlanCoffeeOptionDraft, FormError> {
        Ok(PlanCoffeeOptionDraft {
            plan_id: parse_i64("planId", &self.plan_id)?,
            coffee_id: parse_i64("coffeeId", &self.coffee_id)?,
        })
    }
}

/// Subscription edit modal form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubscriptionForm {
    /// Start date, as typed.
    pub start_date: String,
    /// End date, as typed.
    pub end_date: String,
    /// Status label.
    pub status: String,
    /// Active checkbox.
    pub is_active: bool,
}

impl SubscriptionForm {
    /// Convert into the submission payload.
    ///
    /// # Errors
    ///
    /// Returns [`FormError`] for unparseable dates.
    pub fn into_draft(self) -> Result<SubscriptionDraft, FormError> {
        Ok(SubscriptionDraft {
            start_date: parse_datetime("startDate", &self.start_date)?,
            end_date: parse_datetime("endDate", &self.end_date)?,
            status: self.status.trim().to_string(),
            is_active: self.is_active,
        })
    }
}

/// New user modal form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserForm {
    /// Login name.
    pub user_name: String,
    /// Display name.
    pub full_name: String,
    /// Email address.
    pub email: String,
    /// Initial password.
    pub password: String,
    /// Phone number, optional.
    pub phone_number: String,
    /// Role id, as typed.
    pub role_id: String,
}

impl UserForm {
    /// Convert into the submission payload.
    ///
    /// # Errors
    ///
    /// Returns [`FormError`] for empty required fields or a non-numeric
    /// role id.
    pub fn into_draft(self) -> Result<UserDraft, FormError> {
        Ok(UserDraft {
            user_name: required("userName", &self.user_name)?,
            full_name: required("fullName", &self.full_name)?,
            email: required("email", &self.email)?,
            password: required("password", &self.password)?,
            phone_number: {
                let trimmed = self.phone_number.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            },
            role_id: parse_i64("roleId", &self.role_id)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coffee_form_parses_the_numeric_category() {
        let form = CoffeeForm {
            category_id: "2".to_string(),
            coffee_name: "Latte".to_string(),
            description: String::new(),
            code: "CF010".to_string(),
            image_url: String::new(),
            is_active: true,
        };

        let draft = form.into_draft().unwrap();
        assert_eq!(draft.category_id, 2);
        assert_eq!(draft.image_url, None);
    }

    #[test]
    fn non_numeric_input_fails_loudly_instead_of_defaulting() {
        let form = CoffeeForm {
            category_id: "premium".to_string(),
            coffee_name: "Latte".to_string(),
            code: "CF010".to_string(),
            ..CoffeeForm::default()
        };

        let error = form.into_draft().unwrap_err();
        assert_eq!(
            error,
            FormError::InvalidNumber {
                field: "categoryId",
                value: "premium".to_string()
            }
        );
    }

    #[test]
    fn empty_required_fields_are_rejected() {
        let form = PlanForm {
            plan_name: "   ".to_string(),
            ..PlanForm::default()
        };

        assert_eq!(
            form.into_draft().unwrap_err(),
            FormError::Missing { field: "planName" }
        );
    }

    #[test]
    fn time_windows_accept_both_time_formats() {
        let base = TimeWindowForm {
            plan_id: "4".to_string(),
            start_time: "08:00".to_string(),
            end_time: "10:30:00".to_string(),
            description: String::new(),
            is_active: true,
        };

        let draft = base.into_draft().unwrap();
        assert_eq!(draft.start_time.to_string(), "08:00:00");
        assert_eq!(draft.end_time.to_string(), "10:30:00");
    }

    #[test]
    fn cup_tracking_rejects_a_malformed_date() {
        let form = CupTrackingForm {
            subscription_id: "11".to_string(),
            date: "July 1st".to_string(),
            cups_taken: "2".to_string(),
        };

        assert!(matches!(
            form.into_draft().unwrap_err(),
            FormError::InvalidDate { field: "date", .. }
        ));
    }

    #[test]
    fn subscription_dates_accept_bare_dates() {
        let form = SubscriptionForm {
            start_date: "2025-07-01".to_string(),
            end_date: "2025-07-31T23:59:59Z".to_string(),
            status: "Active".to_string(),
            is_active: true,
        };

        let draft = form.into_draft().unwrap();
        assert_eq!(draft.start_date.to_rfc3339(), "2025-07-01T00:00:00+00:00");
    }

    #[test]
    fn round_trip_from_record_prefills_the_edit_modal() {
        let record = brewdesk_api::CoffeeItem {
            id: 7,
            category_id: 3,
            coffee_name: "Cold Brew".to_string(),
            description: "Slow steeped".to_string(),
            code: "CF020".to_string(),
            image_url: Some("https://cdn.example.com/cb.png".to_string()),
            is_active: false,
        };

        let form = CoffeeForm::from_record(&record);
        assert_eq!(form.category_id, "3");
        let draft = form.into_draft().unwrap();
        assert_eq!(draft.code, "CF020");
        assert!(!draft.is_active);
    }
}
