//! Assembly of composite date answers into display strings.
//!
//! Date questions store their answer as five numeric components
//! `[day, month, year, hour, minute]`. Rendering follows GOV.UK style:
//! no leading zero on the day, full month name, 12-hour clock with
//! lower-case am/pm (`10 December 2022, 12:01am`).

use chrono::NaiveDate;

const DISPLAY_FORMAT: &str = "%-d %B %Y, %I:%M%P";

/// Builds the display string from day/month/year/hour/minute components.
///
/// Returns `None` when the components are missing, incomplete, or do not
/// form a real calendar date; callers render that as an empty field.
pub fn assemble_date_time(components: &[String]) -> Option<String> {
    let [day, month, year, hour, minute] = components else {
        return None;
    };

    let date = NaiveDate::from_ymd_opt(
        year.trim().parse().ok()?,
        month.trim().parse().ok()?,
        day.trim().parse().ok()?,
    )?;
    let timestamp = date.and_hms_opt(hour.trim().parse().ok()?, minute.trim().parse().ok()?, 0)?;

    Some(timestamp.format(DISPLAY_FORMAT).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn components(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn midnight_minute_renders_as_twelve_am() {
        let rendered = assemble_date_time(&components(&["10", "12", "2022", "0", "1"]));
        assert_eq!(rendered.as_deref(), Some("10 December 2022, 12:01am"));
    }

    #[test]
    fn late_evening_renders_as_pm() {
        let rendered = assemble_date_time(&components(&["10", "12", "2023", "23", "59"]));
        assert_eq!(rendered.as_deref(), Some("10 December 2023, 11:59pm"));
    }

    #[test]
    fn single_digit_day_has_no_leading_zero() {
        let rendered = assemble_date_time(&components(&["1", "3", "2024", "9", "30"]));
        assert_eq!(rendered.as_deref(), Some("1 March 2024, 09:30am"));
    }

    #[test]
    fn empty_components_yield_none() {
        assert_eq!(assemble_date_time(&[]), None);
    }

    #[test]
    fn wrong_arity_yields_none() {
        assert_eq!(assemble_date_time(&components(&["10", "12", "2022"])), None);
    }

    #[test]
    fn non_numeric_component_yields_none() {
        let rendered = assemble_date_time(&components(&["10", "December", "2022", "0", "1"]));
        assert_eq!(rendered, None);
    }

    #[test]
    fn impossible_date_yields_none() {
        let rendered = assemble_date_time(&components(&["31", "2", "2022", "0", "0"]));
        assert_eq!(rendered, None);
    }
}
