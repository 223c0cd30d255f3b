//! Canonical kana readings for every spoken token.
//!
//! The first reading of each entry is the one sent to speech synthesis; the
//! rest are alternatives a recording may be named after.

pub const TOKEN_READINGS: &[(&str, &[&str])] = &[
    ("month_1", &["いちがつ"]),
    ("month_2", &["にがつ"]),
    ("month_3", &["さんがつ"]),
    ("month_4", &["よんがつ", "しがつ"]),
    ("month_5", &["ごがつ"]),
    ("month_6", &["ろくがつ"]),
    ("month_7", &["しちがつ"]),
    ("month_8", &["はちがつ"]),
    ("month_9", &["くがつ"]),
    ("month_10", &["じゅうがつ"]),
    ("month_11", &["じゅういちがつ"]),
    ("month_12", &["じゅうにがつ"]),
    ("weekday_1", &["げつようび"]),
    ("weekday_2", &["かようび"]),
    ("weekday_3", &["すいようび"]),
    ("weekday_4", &["もくようび"]),
    ("weekday_5", &["きんようび"]),
    ("weekday_6", &["どようび"]),
    ("weekday_7", &["にちようび"]),
    ("day_1", &["ついたち"]),
    ("day_2", &["ふつか"]),
    ("day_3", &["みっか"]),
    ("day_4", &["よっか"]),
    ("day_5", &["いつか"]),
    ("day_6", &["むいか"]),
    ("day_7", &["なのか"]),
    ("day_8", &["ようか"]),
    ("day_9", &["ここのか"]),
    ("day_10", &["とおか"]),
    ("day_11", &["じゅういちにち"]),
    ("day_12", &["じゅうににち"]),
    ("day_13", &["じゅうさんにち"]),
    ("day_14", &["じゅうよっか"]),
    ("day_15", &["じゅうごにち"]),
    ("day_16", &["じゅうろくにち"]),
    ("day_17", &["じゅうしちにち"]),
    ("day_18", &["じゅうはちにち"]),
    ("day_19", &["じゅうくにち"]),
    ("day_20", &["はつか"]),
    ("day_21", &["にじゅういちにち"]),
    ("day_22", &["にじゅうににち"]),
    ("day_23", &["にじゅうさんにち"]),
    ("day_24", &["にじゅうよっか"]),
    ("day_25", &["にじゅうごにち"]),
    ("day_26", &["にじゅうろくにち"]),
    ("day_27", &["にじゅうしちにち"]),
    ("day_28", &["にじゅうはちにち"]),
    ("day_29", &["にじゅうくにち"]),
    ("day_30", &["さんじゅうにち"]),
    ("day_31", &["さんじゅういちにち"]),
];

/// Synthesis reading for a token.
pub fn reading(token: &str) -> Option<&'static str> {
    TOKEN_READINGS
        .iter()
        .find(|(t, _)| *t == token)
        .and_then(|(_, readings)| readings.first().copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_every_number() {
        assert_eq!(TOKEN_READINGS.len(), 12 + 7 + 31);
        assert_eq!(reading("day_20"), Some("はつか"));
        assert_eq!(reading("month_4"), Some("よんがつ"));
        assert_eq!(reading("pause_120"), None);
    }
}
