//! Test fixtures and factory functions for creating test data.

use std::collections::BTreeMap;

use serde_json::{json, Value};

use date_quiz_core::AudioManifest;

/// Stand-in for a recorded clip.
pub const CLIP_BYTES: &[u8] = b"RIFF\0\0\0\0WAVE";

/// (id, category, english, kana, kanji, irregular, weekday, month, day)
type Row = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    bool,
    Option<u32>,
    Option<u32>,
    Option<u32>,
);

const ROWS: &[Row] = &[
    ("month_1", "months", "January", "いちがつ", "一月", false, None, Some(1), None),
    ("month_4", "months", "April", "しがつ", "四月", true, None, Some(4), None),
    ("weekday_2", "weekdays", "Tuesday", "かようび", "火曜日", false, Some(2), None, None),
    ("day_1", "day_of_month", "1st", "ついたち", "一日", true, None, None, Some(1)),
    ("day_11", "day_of_month", "11th", "じゅういちにち", "十一日", false, None, None, Some(11)),
    ("date_4_20", "dates", "April 20", "しがつはつか", "四月二十日", true, None, Some(4), Some(20)),
    (
        "full_2_11_7",
        "full_date",
        "Tuesday, November 7",
        "かようび、じゅういちがつなのか",
        "火曜日、十一月七日",
        true,
        Some(2),
        Some(11),
        Some(7),
    ),
];

/// Vocabulary dataset in the on-disk shape.
pub fn sample_dataset() -> Value {
    let items: Vec<Value> = ROWS
        .iter()
        .map(|(id, category, en, kana, kanji, irregular, weekday, month, day)| {
            let mut item = json!({
                "id": id,
                "category": category,
                "en": en,
                "jp_kana": kana,
                "jp_kanji": kanji,
                "irregular": irregular,
            });
            for (key, value) in [("weekday", weekday), ("month", month), ("day", day)] {
                if let Some(v) = value {
                    item[key] = json!(v);
                }
            }
            item
        })
        .collect();
    json!({ "items": items })
}

/// English gloss for a kana prompt.
pub fn english_for(kana: &str) -> &'static str {
    ROWS.iter()
        .find(|row| row.3 == kana)
        .map(|row| row.2)
        .expect("unknown prompt")
}

/// Kana reading for an English prompt.
pub fn kana_for(english: &str) -> &'static str {
    ROWS.iter()
        .find(|row| row.2 == english)
        .map(|row| row.3)
        .expect("unknown prompt")
}

/// Manifest covering every token the sample items need.
pub fn sample_manifest() -> AudioManifest {
    manifest(&[
        "month_1",
        "month_4",
        "month_11",
        "weekday_2",
        "day_1",
        "day_7",
        "day_11",
        "day_20",
        "pause_120",
    ])
}

/// Manifest mapping each token to `base/{token}.wav`.
pub fn manifest(tokens: &[&str]) -> AudioManifest {
    AudioManifest::new(
        tokens
            .iter()
            .map(|t| (t.to_string(), format!("base/{t}.wav")))
            .collect::<BTreeMap<_, _>>(),
    )
}

/// Settings update request body.
pub fn settings_request(
    category: &str,
    question_mode: &str,
    answer_mode: &str,
    questions: u32,
) -> Value {
    json!({
        "category": category,
        "questionMode": question_mode,
        "answerMode": answer_mode,
        "questionsPerQuiz": questions,
    })
}
