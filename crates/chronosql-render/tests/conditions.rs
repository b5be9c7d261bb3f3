//! Dispatcher and date-range condition tests
//!
//! Exercises the full render path end to end: mode priority, default
//! column selection, half-open window bounds, range normalization, and the
//! outer wrapping contract.

use chrono::NaiveDate;
use chronosql_model::{DateRange, OutputType, Period, PeriodType, TimeField, TimeQuery};
use chronosql_render::{enrollment_renderer, event_renderer};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn range(start: (i32, u32, u32), end: (i32, u32, u32)) -> DateRange {
    DateRange::new(date(start.0, start.1, start.2), date(end.0, end.1, end.2))
}

fn january() -> TimeQuery {
    TimeQuery::new().with_start_end(date(2020, 1, 1), date(2020, 1, 31))
}

#[test]
fn test_empty_query_renders_empty_string() {
    assert_eq!(event_renderer().render(&TimeQuery::new()), "");
    assert_eq!(enrollment_renderer().render(&TimeQuery::new()), "");
}

#[test]
fn test_start_end_uses_default_event_column() {
    assert_eq!(
        event_renderer().render(&january()),
        "((executiondate >= '2020-01-01' and executiondate < '2020-02-01')) "
    );
}

#[test]
fn test_enrollment_output_switches_default_column() {
    let query = january().with_output_type(OutputType::Enrollment);
    assert_eq!(
        event_renderer().render(&query),
        "((enrollmentdate >= '2020-01-01' and enrollmentdate < '2020-02-01')) "
    );
}

#[test]
fn test_enrollment_family_default_ignores_output_type() {
    let query = january().with_output_type(OutputType::Event);
    assert_eq!(
        enrollment_renderer().render(&query),
        "((enrollmentdate >= '2020-01-01' and enrollmentdate < '2020-02-01')) "
    );
}

#[rstest]
#[case("SCHEDULED_DATE", "duedate")]
#[case("LAST_UPDATED", "lastupdated")]
#[case("COMPLETED_DATE", "completeddate")]
#[case("CREATED", "created")]
fn test_declared_field_selects_its_column(#[case] name: &str, #[case] column: &str) {
    let query = january().with_time_field(name);
    let sql = event_renderer().render(&query);
    assert_eq!(
        sql,
        format!("(({} >= '2020-01-01' and {} < '2020-02-01')) ", column, column)
    );
}

#[rstest]
#[case("NOT_A_FIELD")]
#[case("scheduled_date")]
#[case("")]
fn test_unknown_field_name_falls_back_to_default(#[case] name: &str) {
    let query = january().with_time_field(name);
    assert_eq!(
        event_renderer().render(&query),
        "((executiondate >= '2020-01-01' and executiondate < '2020-02-01')) "
    );
}

#[test]
fn test_disallowed_field_falls_back_silently() {
    // EVENT_DATE parses but is outside the enrollment family's allowed set.
    let query = january().with_time_field("EVENT_DATE");
    assert_eq!(
        enrollment_renderer().render(&query),
        "((enrollmentdate >= '2020-01-01' and enrollmentdate < '2020-02-01')) "
    );
}

#[test]
fn test_half_open_bound_spans_year_end() {
    let query = TimeQuery::new().with_start_end(date(2019, 12, 1), date(2019, 12, 31));
    assert_eq!(
        event_renderer().render(&query),
        "((executiondate >= '2019-12-01' and executiondate < '2020-01-01')) "
    );
}

#[test]
fn test_half_open_bound_handles_leap_day() {
    let query = TimeQuery::new().with_start_end(date(2020, 2, 1), date(2020, 2, 28));
    assert_eq!(
        event_renderer().render(&query),
        "((executiondate >= '2020-02-01' and executiondate < '2020-02-29')) "
    );
}

#[test]
fn test_start_date_alone_is_not_a_window() {
    let mut query = TimeQuery::new();
    query.start_date = Some(date(2020, 1, 1));
    assert_eq!(event_renderer().render(&query), "");
}

#[test]
fn test_continuous_ranges_collapse_to_one_condition() {
    let query = TimeQuery::new().with_date_ranges(
        TimeField::EnrollmentDate,
        vec![
            range((2020, 1, 1), (2020, 1, 10)),
            range((2020, 1, 11), (2020, 1, 20)),
        ],
    );
    assert_eq!(
        event_renderer().render(&query),
        "((enrollmentdate >= '2020-01-01' and enrollmentdate < '2020-01-21')) "
    );
}

#[test]
fn test_gapped_ranges_stay_separate() {
    let query = TimeQuery::new().with_date_ranges(
        TimeField::EventDate,
        vec![
            range((2020, 1, 1), (2020, 1, 10)),
            range((2020, 1, 15), (2020, 1, 20)),
        ],
    );
    assert_eq!(
        event_renderer().render(&query),
        "((executiondate >= '2020-01-01' and executiondate < '2020-01-11') or \
         (executiondate >= '2020-01-15' and executiondate < '2020-01-21')) "
    );
}

#[test]
fn test_two_fields_are_or_joined_and_wrapped_once() {
    let query = TimeQuery::new()
        .with_date_ranges(
            TimeField::EventDate,
            vec![range((2020, 1, 1), (2020, 1, 31))],
        )
        .with_date_ranges(
            TimeField::ScheduledDate,
            vec![range((2020, 2, 1), (2020, 2, 29))],
        );
    assert_eq!(
        event_renderer().render(&query),
        "((executiondate >= '2020-01-01' and executiondate < '2020-02-01') or \
         (duedate >= '2020-02-01' and duedate < '2020-03-01')) "
    );
}

#[test]
fn test_bare_window_renders_before_field_ranges() {
    let query = january().with_date_ranges(
        TimeField::LastUpdated,
        vec![range((2020, 3, 1), (2020, 3, 31))],
    );
    assert_eq!(
        event_renderer().render(&query),
        "((executiondate >= '2020-01-01' and executiondate < '2020-02-01') or \
         (lastupdated >= '2020-03-01' and lastupdated < '2020-04-01')) "
    );
}

#[test]
fn test_boundary_override_wins_over_everything() {
    let boundary = "ax.\"executiondate\" >= '2019-07-01' and ax.\"enrollmentdate\" < '2020-07-01'";
    let query = january()
        .with_boundary_sql(boundary)
        .with_periods(vec![Period::new(PeriodType::Monthly, "202001")]);
    assert_eq!(
        event_renderer().render(&query),
        format!("({}) ", boundary)
    );
}

#[test]
fn test_ranges_win_over_periods() {
    let query = january().with_periods(vec![Period::new(PeriodType::Monthly, "202001")]);
    let sql = event_renderer().render(&query);
    assert!(!sql.contains(" in ("));
    assert_eq!(
        sql,
        "((executiondate >= '2020-01-01' and executiondate < '2020-02-01')) "
    );
}

#[test]
fn test_periods_render_when_nothing_else_present() {
    let query = TimeQuery::new().with_periods(vec![
        Period::new(PeriodType::Monthly, "202001"),
        Period::new(PeriodType::Monthly, "202002"),
    ]);
    assert_eq!(
        event_renderer().render(&query),
        "(\"ax\".\"monthly\" in ('202001','202002')) "
    );
}

#[test]
fn test_mixed_period_types_through_dispatcher() {
    let query = TimeQuery::new().with_periods(vec![
        Period::new(PeriodType::Monthly, "202001"),
        Period::new(PeriodType::Monthly, "202002"),
        Period::new(PeriodType::Daily, "20200115"),
    ]);
    assert_eq!(
        event_renderer().render(&query),
        "(((\"ax\".\"monthly\" in ('202001','202002') or \"ax\".\"daily\" in ('20200115')))) "
    );
}

#[test]
fn test_non_empty_output_ends_with_single_trailing_space() {
    let sql = event_renderer().render(&january());
    assert!(sql.ends_with(") "));
    assert!(!sql.ends_with("  "));
}

#[test]
fn test_rendering_is_deterministic() {
    let query = january()
        .with_time_field("SCHEDULED_DATE")
        .with_date_ranges(
            TimeField::EnrollmentDate,
            vec![
                range((2020, 2, 1), (2020, 2, 10)),
                range((2020, 2, 20), (2020, 2, 25)),
            ],
        )
        .with_periods(vec![Period::new(PeriodType::Yearly, "2020")]);
    let renderer = event_renderer();
    assert_eq!(renderer.render(&query), renderer.render(&query));
}
