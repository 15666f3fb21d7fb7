//! Values computed from form fields on demand
//!
//! Nothing here is stored back into `FormState`; age and employment
//! length are derived fresh wherever they are displayed or compared.

use chrono::{Datelike, NaiveDate};

/// Age in completed years on `today`, from an ISO `YYYY-MM-DD` date of
/// birth. `None` when the field does not parse as a date.
pub fn age_on(date_of_birth: &str, today: NaiveDate) -> Option<u32> {
    let dob = NaiveDate::parse_from_str(date_of_birth.trim(), "%Y-%m-%d").ok()?;
    if dob > today {
        return None;
    }
    let mut years = today.year() - dob.year();
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        years -= 1;
    }
    u32::try_from(years).ok()
}

/// Age in completed years as of today
pub fn age(date_of_birth: &str) -> Option<u32> {
    age_on(date_of_birth, chrono::Local::now().date_naive())
}

/// Employment length in fractional years from a years + months pair
pub fn employment_years(years: u32, months: u32) -> f64 {
    f64::from(years) + f64::from(months) / 12.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn age_counts_completed_years() {
        let today = date(2026, 8, 5);
        assert_eq!(age_on("1990-08-05", today), Some(36));
        assert_eq!(age_on("1990-08-06", today), Some(35));
        assert_eq!(age_on("1990-12-31", today), Some(35));
    }

    #[test]
    fn age_rejects_garbage_and_future_dates() {
        let today = date(2026, 8, 5);
        assert_eq!(age_on("", today), None);
        assert_eq!(age_on("05/08/1990", today), None);
        assert_eq!(age_on("2030-01-01", today), None);
    }

    #[test]
    fn employment_years_from_pair() {
        assert_eq!(employment_years(5, 0), 5.0);
        assert_eq!(employment_years(0, 6), 0.5);
        assert_eq!(employment_years(2, 3), 2.25);
    }
}
