//! Keyword-line field extraction for the overview and additional sections.
//!
//! Each section carries a fixed table of `(keyword, field slot)` pairs. A
//! body line that contains a keyword assigns the remainder of that line —
//! everything after the first keyword occurrence, untrimmed — to the field.
//! The scan runs over every line for every keyword with no early exit, so
//! when several lines match the same keyword the last one wins, and one line
//! can populate several fields.

use super::model::{AdditionalInfo, OverviewInfo};

/// Mutable accessor into one field of the target struct.
type Slot<T> = fn(&mut T) -> &mut String;

pub(crate) const OVERVIEW_KEYWORDS: [(&str, Slot<OverviewInfo>); 4] = [
    ("移動手段", |o| &mut o.transportation),
    ("宿泊先", |o| &mut o.accommodation),
    ("予算", |o| &mut o.budget),
    ("持ち物", |o| &mut o.items),
];

pub(crate) const ADDITIONAL_KEYWORDS: [(&str, Slot<AdditionalInfo>); 3] = [
    ("グルメスポット", |a| &mut a.food),
    ("気候", |a| &mut a.climate),
    ("注意点", |a| &mut a.notes),
];

/// Scan `lines` against a keyword table, writing matches into `target`.
///
/// Unmatched keywords leave their field untouched (empty by default), which
/// is a normal outcome, not an error.
pub(crate) fn apply_keyword_table<T>(lines: &[&str], table: &[(&str, Slot<T>)], target: &mut T) {
    for line in lines {
        for (keyword, slot) in table {
            if let Some(pos) = line.find(keyword) {
                *slot(target) = line[pos + keyword.len()..].to_string();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overview_of(lines: &[&str]) -> OverviewInfo {
        let mut out = OverviewInfo::default();
        apply_keyword_table(lines, &OVERVIEW_KEYWORDS, &mut out);
        out
    }

    #[test]
    fn value_is_exact_untrimmed_remainder() {
        let out = overview_of(&["1. 移動手段: 飛行機  "]);
        assert_eq!(out.transportation, ": 飛行機  ");
    }

    #[test]
    fn all_four_overview_fields_extract() {
        let out = overview_of(&[
            "1. 移動手段: 飛行機",
            "2. 宿泊先のエリア: 市内中心部",
            "3. 予算目安: 約15万円",
            "4. 持ち物アドバイス: 雨具",
        ]);
        assert_eq!(out.transportation, ": 飛行機");
        assert_eq!(out.accommodation, "のエリア: 市内中心部");
        assert_eq!(out.budget, "目安: 約15万円");
        assert_eq!(out.items, "アドバイス: 雨具");
    }

    #[test]
    fn last_matching_line_wins() {
        let out = overview_of(&["移動手段: バス", "移動手段: 飛行機"]);
        assert_eq!(out.transportation, ": 飛行機");
    }

    #[test]
    fn remainder_runs_past_a_second_keyword_occurrence() {
        // Remainder is the whole rest of the line, even when the keyword
        // appears again inside it.
        let out = overview_of(&["移動手段: 現地の移動手段は電車"]);
        assert_eq!(out.transportation, ": 現地の移動手段は電車");
    }

    #[test]
    fn unmatched_keywords_stay_empty() {
        let out = overview_of(&["これはどのキーワードにも一致しない行"]);
        assert_eq!(out, OverviewInfo::default());
    }

    #[test]
    fn one_line_can_fill_multiple_fields() {
        let out = overview_of(&["予算と持ち物: 各自確認"]);
        assert_eq!(out.budget, "と持ち物: 各自確認");
        assert_eq!(out.items, ": 各自確認");
    }

    #[test]
    fn additional_fields_extract() {
        let mut out = AdditionalInfo::default();
        apply_keyword_table(
            &[
                "1. おすすめグルメスポット: 屋台街",
                "2. 気候や服装のアドバイス: 温暖",
                "3. 現地での注意点: スリに注意",
            ],
            &ADDITIONAL_KEYWORDS,
            &mut out,
        );
        assert_eq!(out.food, ": 屋台街");
        assert_eq!(out.climate, "や服装のアドバイス: 温暖");
        assert_eq!(out.notes, ": スリに注意");
    }
}
