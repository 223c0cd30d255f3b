//! Mapping vocabulary items to audio tokens.

use crate::audio::manifest::AudioManifest;
use crate::types::{Category, Item};

/// Short silence inserted between the weekday and the date.
pub const PAUSE_TOKEN: &str = "pause_120";

/// Normalize a raw weekday number to 1-7.
///
/// Raw numbers are zero-based (0 is Monday) except that 7 is passed
/// through unchanged.
pub fn normalize_weekday(raw: u32) -> Option<u32> {
    match raw {
        0 => Some(1),
        1..=6 => Some(raw + 1),
        7 => Some(7),
        _ => None,
    }
}

/// Digit runs in an identifier, in order.
fn id_numbers(id: &str) -> Vec<u32> {
    id.split(|c: char| !c.is_ascii_digit())
        .filter(|run| !run.is_empty())
        .filter_map(|run| run.parse().ok())
        .collect()
}

/// An explicit weekday field is already 1-7 (Monday is 1); a raw 0 still
/// means Monday.
fn explicit_weekday(w: u32) -> Option<u32> {
    match w {
        0 => Some(1),
        1..=7 => Some(w),
        _ => None,
    }
}

fn month_in_range(m: u32) -> Option<u32> {
    (1..=12).contains(&m).then_some(m)
}

fn day_in_range(d: u32) -> Option<u32> {
    (1..=31).contains(&d).then_some(d)
}

/// Numbers needed to voice an item. Explicit fields win over the id.
#[derive(Debug, Default, PartialEq, Eq)]
struct DateParts {
    weekday: Option<u32>,
    month: Option<u32>,
    day: Option<u32>,
}

impl DateParts {
    fn resolve(item: &Item) -> Self {
        let nums = id_numbers(&item.id);
        let from_end = |offset: usize| nums.len().checked_sub(offset).map(|i| nums[i]);

        // Position of each number among the trailing digit runs of the id.
        let (weekday_pos, month_pos, day_pos) = match item.category {
            Category::Weekdays => (Some(1), None, None),
            Category::Months => (None, Some(1), None),
            Category::DayOfMonth => (None, None, Some(1)),
            Category::Dates => (None, Some(2), Some(1)),
            Category::FullDate => (Some(3), Some(2), Some(1)),
        };

        let weekday = item
            .weekday
            .and_then(explicit_weekday)
            .or_else(|| weekday_pos.and_then(from_end).and_then(normalize_weekday));
        let month = item
            .month
            .and_then(month_in_range)
            .or_else(|| month_pos.and_then(from_end).and_then(month_in_range));
        let day = item
            .day
            .and_then(day_in_range)
            .or_else(|| day_pos.and_then(from_end).and_then(day_in_range));

        Self { weekday, month, day }
    }
}

/// Ordered audio tokens for an item, or an empty list when a required number
/// cannot be resolved.
pub fn audio_tokens(item: &Item, manifest: &AudioManifest) -> Vec<String> {
    let parts = DateParts::resolve(item);

    let tokens = match item.category {
        Category::Months => parts.month.map(|m| vec![format!("month_{m}")]),
        Category::Weekdays => parts.weekday.map(|w| vec![format!("weekday_{w}")]),
        Category::DayOfMonth => parts.day.map(|d| vec![format!("day_{d}")]),
        Category::Dates => match (parts.month, parts.day) {
            (Some(m), Some(d)) => Some(vec![format!("month_{m}"), format!("day_{d}")]),
            _ => None,
        },
        Category::FullDate => match (parts.weekday, parts.month, parts.day) {
            (Some(w), Some(m), Some(d)) => {
                let mut tokens = vec![format!("weekday_{w}")];
                if manifest.contains(PAUSE_TOKEN) {
                    tokens.push(PAUSE_TOKEN.to_string());
                }
                tokens.push(format!("month_{m}"));
                tokens.push(format!("day_{d}"));
                Some(tokens)
            }
            _ => None,
        },
    };

    tokens.unwrap_or_default()
}

/// Whether any clip of the item has a recording.
pub fn audio_available(item: &Item, manifest: &AudioManifest) -> bool {
    audio_tokens(item, manifest)
        .iter()
        .any(|token| manifest.contains(token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::item;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;

    fn manifest(tokens: &[&str]) -> AudioManifest {
        AudioManifest::new(
            tokens
                .iter()
                .map(|t| (t.to_string(), format!("{t}.wav")))
                .collect::<BTreeMap<_, _>>(),
        )
    }

    #[test]
    fn test_normalize_weekday() {
        assert_eq!(normalize_weekday(0), Some(1));
        assert_eq!(normalize_weekday(3), Some(4));
        assert_eq!(normalize_weekday(6), Some(7));
        assert_eq!(normalize_weekday(7), Some(7));
        assert_eq!(normalize_weekday(8), None);
    }

    #[test]
    fn test_id_numbers() {
        assert_eq!(id_numbers("full_date_2_11_07"), vec![2, 11, 7]);
        assert_eq!(id_numbers("months"), Vec::<u32>::new());
    }

    #[test]
    fn test_single_token_categories_from_fields() {
        let m = manifest(&[]);
        let mut april = item("a", Category::Months, "April", "しがつ", "四月", true);
        april.month = Some(4);
        assert_eq!(audio_tokens(&april, &m), vec!["month_4"]);

        let mut seventh = item("b", Category::DayOfMonth, "7th", "なのか", "七日", true);
        seventh.day = Some(7);
        assert_eq!(audio_tokens(&seventh, &m), vec!["day_7"]);

        let mut sunday = item("c", Category::Weekdays, "Sunday", "にちようび", "日曜日", false);
        sunday.weekday = Some(7);
        assert_eq!(audio_tokens(&sunday, &m), vec!["weekday_7"]);
    }

    #[test]
    fn test_explicit_weekday_zero_is_monday() {
        let m = manifest(&[]);
        let mut monday = item("monday", Category::Weekdays, "Monday", "げつようび", "月曜日", false);
        monday.weekday = Some(0);
        assert_eq!(audio_tokens(&monday, &m), vec!["weekday_1"]);

        monday.weekday = Some(8);
        assert!(audio_tokens(&monday, &m).is_empty());
    }

    #[test]
    fn test_audio_available() {
        let mut april = item("a", Category::Months, "April", "しがつ", "四月", true);
        april.month = Some(4);
        assert!(audio_available(&april, &manifest(&["month_4"])));
        assert!(!audio_available(&april, &manifest(&["month_5"])));
        assert!(!audio_available(&april, &AudioManifest::failed()));

        let unresolved = item("april", Category::Months, "April", "しがつ", "四月", true);
        assert!(!audio_available(&unresolved, &manifest(&["month_4"])));
    }

    #[test]
    fn test_weekday_from_id_is_normalized() {
        let m = manifest(&[]);
        let monday = item("weekday_0", Category::Weekdays, "Monday", "げつようび", "月曜日", false);
        assert_eq!(audio_tokens(&monday, &m), vec!["weekday_1"]);
        let thursday = item("weekday_3", Category::Weekdays, "Thursday", "もくようび", "木曜日", false);
        assert_eq!(audio_tokens(&thursday, &m), vec!["weekday_4"]);
        let sunday = item("weekday_7", Category::Weekdays, "Sunday", "にちようび", "日曜日", false);
        assert_eq!(audio_tokens(&sunday, &m), vec!["weekday_7"]);
    }

    #[test]
    fn test_dates_from_id() {
        let m = manifest(&[]);
        let it = item("date_11_7", Category::Dates, "November 7th", "じゅういちがつなのか", "十一月七日", true);
        assert_eq!(audio_tokens(&it, &m), vec!["month_11", "day_7"]);
    }

    #[test]
    fn test_full_date_with_pause() {
        let m = manifest(&[PAUSE_TOKEN, "weekday_2", "month_11", "day_7"]);
        let mut it = item("fd", Category::FullDate, "Tuesday, November 7th", "", "", false);
        it.weekday = Some(2);
        it.month = Some(11);
        it.day = Some(7);
        assert_eq!(audio_tokens(&it, &m), vec!["weekday_2", "pause_120", "month_11", "day_7"]);
    }

    #[test]
    fn test_full_date_without_pause() {
        let m = manifest(&["weekday_2", "month_11", "day_7"]);
        let mut it = item("fd", Category::FullDate, "Tuesday, November 7th", "", "", false);
        it.weekday = Some(2);
        it.month = Some(11);
        it.day = Some(7);
        assert_eq!(audio_tokens(&it, &m), vec!["weekday_2", "month_11", "day_7"]);
    }

    #[test]
    fn test_unresolved_numbers_give_no_tokens() {
        let m = manifest(&[PAUSE_TOKEN]);
        let no_numbers = item("april", Category::Months, "April", "しがつ", "四月", true);
        assert!(audio_tokens(&no_numbers, &m).is_empty());

        let missing_day = item("date_11", Category::Dates, "November", "", "", false);
        // A single digit run is taken as the day, leaving the month unresolved.
        assert!(audio_tokens(&missing_day, &m).is_empty());

        let mut out_of_range = item("x", Category::Months, "?", "", "", false);
        out_of_range.month = Some(13);
        assert!(audio_tokens(&out_of_range, &m).is_empty());
    }

    #[test]
    fn test_explicit_field_out_of_range_falls_back_to_id() {
        let m = manifest(&[]);
        let mut it = item("month_12", Category::Months, "December", "じゅうにがつ", "十二月", false);
        it.month = Some(0);
        assert_eq!(audio_tokens(&it, &m), vec!["month_12"]);
    }
}
