// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    card_prefix = { "CARD: Enable PSCI on Juno", "Enable PSCI on Juno" },
    blueprint_prefix = { "BLUEPRINT: Port driver", "Port driver" },
    backport = { "Qualcomm backport feature for 4.1", "Qualcomm backport for 4.1" },
    presentation = { "Prepare presentation for Connect", "Presentation for Connect" },
    relationship = { "EAS and its relationship to cpuidle", "EAS and cpuidle" },
    u_boot = { "Boot time for u-boot/linux for HiKey", "Boot time for HiKey" },
    ltp = {
        "Execute initial test plan ltp-ddt test cases to LAVA for BBB",
        "LTP-DDT: Initial LAVA integration (using BBB)"
    },
    zte = { "ZTE power management review", "Power management review" },
    lsk = { "Fix found in 3.18 LSK to the mainline", "Fix to mainline" },
    replaces_every_occurrence = { "CARD: a CARD: b", "a  b" },
    untouched = { "  Plain summary  ", "Plain summary" },
    empty = { "", "" },
)]
fn clean_summary_with_default_table(input: &str, expected: &str) {
    assert_eq!(clean_summary(input, &default_rewrites()), expected);
}

#[test]
fn default_table_values_never_reintroduce_a_key() {
    for (_, to) in DEFAULT_SUMMARY_REWRITES {
        for (from, _) in DEFAULT_SUMMARY_REWRITES {
            assert!(
                !to.contains(from),
                "replacement '{to}' reintroduces key '{from}'"
            );
        }
    }
}

#[test]
fn clean_summary_is_idempotent_for_table_keys() {
    let rewrites = default_rewrites();
    for (from, _) in DEFAULT_SUMMARY_REWRITES {
        let input = format!("  {from} tail ");
        let once = clean_summary(&input, &rewrites);
        assert_eq!(clean_summary(&once, &rewrites), once);
    }
}

#[test]
fn clean_summary_applies_rewrites_in_order() {
    let rewrites = vec![
        SummaryRewrite("a".into(), "b".into()),
        SummaryRewrite("b".into(), "c".into()),
    ];
    assert_eq!(clean_summary("a", &rewrites), "c");
}

#[test]
fn clean_summary_ignores_empty_keys() {
    let rewrites = vec![SummaryRewrite(String::new(), "x".into())];
    assert_eq!(clean_summary("abc", &rewrites), "abc");
}

#[parameterized(
    single = { "one paragraph", &["one paragraph"] },
    two = { "first\n\nsecond", &["first", "second"] },
    line_breaks_collapse = { "a\nb\nc\n\nd", &["a b c", "d"] },
    crlf = { "a\r\nb\r\n\r\nc", &["a b", "c"] },
    surrounding_blank = { "\n\nbody\n\n", &["body"] },
    indented_lines = { "  a  \n   b", &["a b"] },
    empty = { "", &[] },
)]
fn split_paragraphs_cases(input: &str, expected: &[&str]) {
    assert_eq!(split_paragraphs(input), expected);
}

#[test]
fn split_worklog_progress_then_plans() {
    let text = split_worklog("Progress\nDid A\n\nPlans\nDo B\n\nDo C");
    assert_eq!(text.progress, vec!["Did A"]);
    assert_eq!(text.plans, vec!["Do B", "Do C"]);
}

#[test]
fn split_worklog_without_headers_is_all_progress() {
    let text = split_worklog("Did A\n\nDid B");
    assert_eq!(text.progress, vec!["Did A", "Did B"]);
    assert!(text.plans.is_empty());
}

#[parameterized(
    textile_h3 = { "h3. Progress\nDid A\n\nh3. Plans\nDo B" },
    markdown = { "## Progress\nDid A\n\n## Plans\nDo B" },
    lowercase = { "progress\nDid A\n\nplan\nDo B" },
    header_only_blocks = { "Progress\n\nDid A\n\nPlans\n\nDo B" },
)]
fn split_worklog_header_styles(input: &str) {
    let text = split_worklog(input);
    assert_eq!(text.progress, vec!["Did A"]);
    assert_eq!(text.plans, vec!["Do B"]);
}

#[test]
fn split_worklog_progress_header_does_not_leave_plans() {
    let text = split_worklog("Plans\nDo B\n\nProgress\nDid A");
    assert!(text.progress.is_empty());
    assert_eq!(text.plans, vec!["Do B", "Did A"]);
}

#[test]
fn split_worklog_collapses_lines_and_crlf() {
    let text = split_worklog("Progress\r\nline one\r\nline two\r\n\r\nPlans\r\nnext");
    assert_eq!(text.progress, vec!["line one line two"]);
    assert_eq!(text.plans, vec!["next"]);
}

#[test]
fn split_worklog_empty() {
    assert_eq!(split_worklog(""), WorkLogText::default());
}
