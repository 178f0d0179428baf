//! Natural-language date resolution
//!
//! Resolves relative words, weekday mentions, month-day expressions, and
//! explicit formats with chrono; anything else falls through to the
//! fuzzydate library. The clock is injectable so weekday math is
//! deterministic under test.

use application::error::ApplicationError;
use application::ports::{DatePreference, DateResolverPort};
use async_trait::async_trait;
use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use tracing::debug;

use crate::lexicon;

type Clock = fn() -> NaiveDate;

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Date resolver over chrono with a fuzzydate fallback
#[derive(Clone)]
pub struct ChronoDateResolver {
    clock: Clock,
}

impl std::fmt::Debug for ChronoDateResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChronoDateResolver").finish_non_exhaustive()
    }
}

impl Default for ChronoDateResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ChronoDateResolver {
    /// Create a resolver using the local calendar date as "today"
    #[must_use]
    pub fn new() -> Self {
        Self { clock: local_today }
    }

    /// Create a resolver with an injected clock (tests)
    #[must_use]
    pub const fn with_clock(clock: Clock) -> Self {
        Self { clock }
    }

    fn resolve_text(&self, text: &str, preference: DatePreference) -> Option<NaiveDate> {
        let input = text.trim().to_lowercase();
        if input.is_empty() {
            return None;
        }
        let today = (self.clock)();

        if let Some(date) = parse_relative(&input, today) {
            debug!(input = %input, date = %date, "Resolved relative date");
            return Some(date);
        }

        if let Some(date) = parse_weekday(&input, today, preference) {
            debug!(input = %input, date = %date, "Resolved weekday");
            return Some(date);
        }

        if let Some(date) = parse_explicit_format(&input) {
            debug!(input = %input, date = %date, "Resolved explicit format");
            return Some(date);
        }

        if let Some(date) = parse_month_day(&input, today, preference) {
            debug!(input = %input, date = %date, "Resolved month-day expression");
            return Some(date);
        }

        match fuzzydate::parse(&input) {
            Ok(datetime) => {
                let date = datetime.date();
                debug!(input = %input, date = %date, "Resolved with fuzzydate");
                Some(date)
            },
            Err(_) => {
                debug!(input = %input, "No date recognized");
                None
            },
        }
    }
}

#[async_trait]
impl DateResolverPort for ChronoDateResolver {
    async fn resolve(
        &self,
        text: &str,
        preference: DatePreference,
    ) -> Result<Option<NaiveDate>, ApplicationError> {
        Ok(self.resolve_text(text, preference))
    }
}

/// Relative-day expressions
fn parse_relative(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    match input {
        "today" | "tonight" => Some(today),
        "tomorrow" => Some(today + Duration::days(1)),
        "yesterday" => Some(today - Duration::days(1)),
        _ if input.contains("day after tomorrow") => Some(today + Duration::days(2)),
        _ => None,
    }
}

/// Weekday mentions like "friday", "next monday", "last tuesday"
fn parse_weekday(input: &str, today: NaiveDate, preference: DatePreference) -> Option<NaiveDate> {
    let (index, _) = lexicon::WEEKDAYS
        .iter()
        .enumerate()
        .find(|(_, name)| input.contains(*name))?;
    let target = match index {
        0 => Weekday::Mon,
        1 => Weekday::Tue,
        2 => Weekday::Wed,
        3 => Weekday::Thu,
        4 => Weekday::Fri,
        5 => Weekday::Sat,
        _ => Weekday::Sun,
    };

    if input.contains("last") {
        return Some(previous_weekday(today, target, true));
    }
    if input.contains("next") {
        return Some(next_weekday(today, target, true));
    }
    match preference {
        DatePreference::Future => Some(next_weekday(today, target, false)),
        DatePreference::Past => Some(previous_weekday(today, target, false)),
    }
}

/// Next occurrence of a weekday; today counts unless forced strictly ahead
fn next_weekday(from: NaiveDate, target: Weekday, force_ahead: bool) -> NaiveDate {
    let delta = i64::from(target.num_days_from_monday())
        - i64::from(from.weekday().num_days_from_monday());
    let mut days = delta.rem_euclid(7);
    if days == 0 && force_ahead {
        days = 7;
    }
    from + Duration::days(days)
}

/// Previous occurrence of a weekday; today counts unless forced strictly back
fn previous_weekday(from: NaiveDate, target: Weekday, force_back: bool) -> NaiveDate {
    let delta = i64::from(from.weekday().num_days_from_monday())
        - i64::from(target.num_days_from_monday());
    let mut days = delta.rem_euclid(7);
    if days == 0 && force_back {
        days = 7;
    }
    from - Duration::days(days)
}

/// Explicit formats: ISO, US, and dotted European
fn parse_explicit_format(input: &str) -> Option<NaiveDate> {
    for format in ["%Y-%m-%d", "%m/%d/%Y", "%d.%m.%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(input, format) {
            return Some(date);
        }
    }
    None
}

/// Month-name expressions: "january 15", "15th january 2026", bare "march"
///
/// Without an explicit year the date is shifted one year in the
/// preferred direction when it falls on the wrong side of today.
fn parse_month_day(input: &str, today: NaiveDate, preference: DatePreference) -> Option<NaiveDate> {
    let words: Vec<&str> = input.split_whitespace().collect();
    let (month_index, month) = words.iter().enumerate().find_map(|(i, w)| {
        lexicon::MONTHS
            .iter()
            .position(|m| m == w)
            .map(|p| (i, u32::try_from(p).unwrap_or(0) + 1))
    })?;

    let day = words
        .get(month_index + 1)
        .and_then(|w| lexicon::parse_day_of_month(w))
        .or_else(|| {
            month_index
                .checked_sub(1)
                .and_then(|i| lexicon::parse_day_of_month(words[i]))
        })
        .unwrap_or(1);

    let explicit_year = words
        .iter()
        .find_map(|w| (w.len() == 4).then(|| w.parse::<i32>().ok()).flatten());

    if let Some(year) = explicit_year {
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    let candidate = NaiveDate::from_ymd_opt(today.year(), month, day)?;
    let adjusted = match preference {
        DatePreference::Future if candidate < today => {
            NaiveDate::from_ymd_opt(today.year() + 1, month, day)?
        },
        DatePreference::Past if candidate > today => {
            NaiveDate::from_ymd_opt(today.year() - 1, month, day)?
        },
        _ => candidate,
    };
    Some(adjusted)
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2025-06-04 is a Wednesday
    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 4).unwrap()
    }

    fn resolver() -> ChronoDateResolver {
        ChronoDateResolver::with_clock(fixed_today)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    async fn resolve(text: &str) -> Option<NaiveDate> {
        resolver().resolve(text, DatePreference::Future).await.unwrap()
    }

    #[tokio::test]
    async fn resolves_today_tomorrow_yesterday() {
        assert_eq!(resolve("today").await, Some(date(2025, 6, 4)));
        assert_eq!(resolve("tomorrow").await, Some(date(2025, 6, 5)));
        assert_eq!(resolve("yesterday").await, Some(date(2025, 6, 3)));
    }

    #[tokio::test]
    async fn bare_weekday_prefers_future() {
        // Wednesday -> upcoming Friday
        assert_eq!(resolve("friday").await, Some(date(2025, 6, 6)));
        // Monday already passed this week -> next Monday
        assert_eq!(resolve("monday").await, Some(date(2025, 6, 9)));
    }

    #[tokio::test]
    async fn same_weekday_counts_as_today_under_future() {
        assert_eq!(resolve("wednesday").await, Some(fixed_today()));
    }

    #[tokio::test]
    async fn next_weekday_is_strictly_ahead() {
        assert_eq!(resolve("next wednesday").await, Some(date(2025, 6, 11)));
    }

    #[tokio::test]
    async fn last_weekday_is_strictly_back() {
        assert_eq!(resolve("last friday").await, Some(date(2025, 5, 30)));
    }

    #[tokio::test]
    async fn bare_weekday_prefers_past_when_configured() {
        let resolved = resolver()
            .resolve("friday", DatePreference::Past)
            .await
            .unwrap();
        assert_eq!(resolved, Some(date(2025, 5, 30)));
    }

    #[tokio::test]
    async fn resolves_explicit_formats() {
        assert_eq!(resolve("2025-01-15").await, Some(date(2025, 1, 15)));
        assert_eq!(resolve("01/15/2025").await, Some(date(2025, 1, 15)));
        assert_eq!(resolve("15.01.2025").await, Some(date(2025, 1, 15)));
    }

    #[tokio::test]
    async fn month_day_without_year_moves_forward() {
        // January already passed relative to June: future preference rolls over
        assert_eq!(resolve("january 15").await, Some(date(2026, 1, 15)));
        // September is still ahead
        assert_eq!(resolve("september 3rd").await, Some(date(2025, 9, 3)));
    }

    #[tokio::test]
    async fn month_day_with_year_is_taken_literally() {
        assert_eq!(resolve("january 15 2024").await, Some(date(2024, 1, 15)));
    }

    #[tokio::test]
    async fn month_day_prefers_past_when_configured() {
        let resolved = resolver()
            .resolve("september 3", DatePreference::Past)
            .await
            .unwrap();
        assert_eq!(resolved, Some(date(2024, 9, 3)));
    }

    #[tokio::test]
    async fn day_before_month_is_accepted() {
        assert_eq!(resolve("15th january").await, Some(date(2026, 1, 15)));
    }

    #[tokio::test]
    async fn empty_text_is_not_a_date() {
        assert_eq!(resolve("").await, None);
        assert_eq!(resolve("   ").await, None);
    }

    #[tokio::test]
    async fn prose_is_not_a_date() {
        assert_eq!(resolve("best pizza place").await, None);
    }

    #[test]
    fn weekday_math_wraps_the_week() {
        let wednesday = fixed_today();
        assert_eq!(
            next_weekday(wednesday, Weekday::Tue, false),
            date(2025, 6, 10)
        );
        assert_eq!(
            previous_weekday(wednesday, Weekday::Thu, false),
            date(2025, 5, 29)
        );
    }
}
