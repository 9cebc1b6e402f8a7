//! Integration tests for response parsing and day grouping.
//!
//! These run against realistic raw response text through the public API
//! only — no LLM, no I/O — and pin down the parsing contract end to end.

use tripsmith::{
    group_by_day, parse_plan, parse_plan_with_warnings, sanitize_response, ParseWarning,
    ParsedPlan, ScheduleEntry,
};

/// A well-formed two-day response in the prompted format.
const FULL_PLAN: &str = "\
# 概要
1. 移動手段（出発地から目的地まで）: 成田からバンコクまで直行便
2. 宿泊先のエリア: スクンビット周辺
3. 予算目安: 約15万円
4. 持ち物アドバイス: 軽装と雨具

# 詳細日程
| 日付 | 時間 | 行動 | 詳細 | 移動手段 |
|------|------|------|------|----------|
| 1日目 | 08:00 | 出発 | 成田空港から出発 | 飛行機 |
| 1日目 | 14:00 | チェックイン | ホテルに到着 | タクシー |
| 1日目 | 19:00 | 夕食 | ナイトマーケット | 徒歩 |
| 2日目 | 09:00 | 観光 | 王宮と寺院巡り | 電車 |
| 2日目 | 12:00 | 昼食 | 屋台街 | - |

# 補足情報
1. おすすめグルメスポット: カオサン通りの屋台
2. 気候や服装のアドバイス: 温暖なので軽装で
3. 現地での注意点: スリに注意
";

/// The same plan with a budget block appended the way the requestor merges
/// the second completion.
fn plan_with_budget_block() -> String {
    format!(
        "{FULL_PLAN}\n# 予算最適化プラン\n\n# 予算内訳\n1. 交通費\n  - 航空券: 6万円\n2. 宿泊費\n  - ホテル: 4万円\n\n# 最適化提案\n朝食付きプランがお得です\n\n# 総評\n予算内で実現可能です\n"
    )
}

#[test]
fn full_plan_parses_every_section() {
    let (plan, warnings) = parse_plan_with_warnings(FULL_PLAN);
    assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");

    assert_eq!(
        plan.overview.transportation,
        "（出発地から目的地まで）: 成田からバンコクまで直行便"
    );
    assert_eq!(plan.overview.accommodation, "のエリア: スクンビット周辺");
    assert_eq!(plan.overview.budget, "目安: 約15万円");
    assert_eq!(plan.overview.items, "アドバイス: 軽装と雨具");

    assert_eq!(plan.schedule.len(), 5);
    assert_eq!(
        plan.schedule[0],
        ScheduleEntry {
            day: "1日目".into(),
            time: "08:00".into(),
            action: "出発".into(),
            detail: "成田空港から出発".into(),
            transport: "飛行機".into(),
        }
    );
    assert_eq!(plan.schedule[4].transport, "-");

    assert_eq!(plan.additional.food, ": カオサン通りの屋台");
    assert_eq!(plan.additional.climate, "や服装のアドバイス: 温暖なので軽装で");
    assert_eq!(plan.additional.notes, ": スリに注意");
}

#[test]
fn budget_block_neither_crashes_nor_changes_the_parse() {
    let merged = plan_with_budget_block();
    let (plan, warnings) = parse_plan_with_warnings(&merged);
    assert!(warnings.is_empty());
    assert_eq!(plan, parse_plan(FULL_PLAN));
}

#[test]
fn grouping_two_days_reproduces_schedule_order_and_count() {
    let plan = parse_plan(FULL_PLAN);
    let days = group_by_day(&plan, 2);
    assert_eq!(days.len(), 2);
    assert_eq!(days[0].slots.len(), 3);
    assert_eq!(days[1].slots.len(), 2);

    let times: Vec<&str> = days
        .iter()
        .flat_map(|d| d.slots.iter().map(|s| s.time.as_str()))
        .collect();
    let source_times: Vec<&str> = plan.schedule.iter().map(|e| e.time.as_str()).collect();
    assert_eq!(times, source_times);
}

#[test]
fn unlabelled_text_parses_to_the_default_plan() {
    let plan = parse_plan("ここに旅行プランはありません。\nただの文章です。");
    assert_eq!(plan, ParsedPlan::default());
    assert!(plan.is_empty());
}

#[test]
fn parsing_is_pure_and_repeatable() {
    let merged = plan_with_budget_block();
    let first = parse_plan_with_warnings(&merged);
    let second = parse_plan_with_warnings(&merged);
    assert_eq!(first, second);
}

#[test]
fn fenced_crlf_response_parses_after_sanitising() {
    let wrapped = format!("```markdown\n{}\n```", FULL_PLAN.replace('\n', "\r\n"));
    let clean = sanitize_response(&wrapped);
    let plan = parse_plan(&clean);
    assert_eq!(plan.schedule.len(), 5);
    assert_eq!(plan.overview.budget, "目安: 約15万円");
}

#[test]
fn empty_day_cell_rows_are_dropped_with_a_warning() {
    let text = "# 詳細日程\n| 日付 | 時間 | 行動 | 詳細 | 移動手段 |\n|--|--|--|--|--|\n||08:00|出発|空港へ|電車|\n|1日目|10:00|観光|旧市街|徒歩|";
    let (plan, warnings) = parse_plan_with_warnings(text);
    assert_eq!(plan.schedule.len(), 1);
    assert_eq!(plan.schedule[0].time, "10:00");
    assert!(matches!(warnings[0], ParseWarning::EmptyDay { .. }));
}

#[test]
fn schedule_with_no_data_rows_is_empty_not_an_error() {
    let text = "# 詳細日程\n| 日付 | 時間 | 行動 | 詳細 | 移動手段 |\n|------|------|------|------|----------|";
    let (plan, warnings) = parse_plan_with_warnings(text);
    assert!(plan.schedule.is_empty());
    assert!(warnings.is_empty());
}

// Day-less rows attach to every day with labelled rows; this mirrors the
// rendering layer the format was built for.
#[test]
fn day_less_rows_duplicate_into_matched_days() {
    let text = "# 詳細日程\n| 日付 | 時間 | 行動 | 詳細 | 移動手段 |\n|--|--|--|--|--|\n| 1日目 | 08:00 | 出発 | 空港へ | 電車 |\n| 2日目 | 09:00 | 観光 | 旧市街 | 徒歩 |";
    let mut plan = parse_plan(text);
    // A row whose day cell survived as an empty string can only enter the
    // schedule through older data paths; model it directly.
    plan.schedule.push(ScheduleEntry {
        day: String::new(),
        time: "21:00".into(),
        action: "自由時間".into(),
        detail: String::new(),
        transport: String::new(),
    });

    let days = group_by_day(&plan, 3);
    assert_eq!(days[0].slots.len(), 2);
    assert_eq!(days[1].slots.len(), 2);
    assert!(days[2].slots.is_empty());
}

#[test]
fn json_round_trip_preserves_the_plan() {
    let plan = parse_plan(FULL_PLAN);
    let json = serde_json::to_string(&plan).unwrap();
    let back: ParsedPlan = serde_json::from_str(&json).unwrap();
    assert_eq!(plan, back);
}
