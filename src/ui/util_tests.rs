#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use super::util::*;

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate_short_string() {
    assert_eq!(truncate("hello", 10), "hello");
}

#[test]
fn test_truncate_long_string() {
    assert_eq!(truncate("hello world", 5), "hell…");
}

#[test]
fn test_truncate_zero_max() {
    assert_eq!(truncate("hello", 0), "");
}

#[test]
fn test_truncate_counts_chars_not_bytes() {
    assert_eq!(truncate("日本語テスト", 4), "日本語…");
}

#[test]
fn test_truncate_one_char() {
    assert_eq!(truncate("hello", 1), "…");
}

#[test]
fn test_truncate_mixed_unicode() {
    assert_eq!(truncate("café résumé", 5), "café…");
}

// ── format_amount ──────────────────────────────────────────

#[test]
fn test_format_amount_basic() {
    assert_eq!(format_amount(dec!(1234.56)), "$1,234.56");
}

#[test]
fn test_format_amount_zero() {
    assert_eq!(format_amount(dec!(0)), "$0.00");
}

#[test]
fn test_format_amount_negative() {
    assert_eq!(format_amount(dec!(-42.50)), "-$42.50");
}

#[test]
fn test_format_amount_large() {
    assert_eq!(format_amount(dec!(1234567.89)), "$1,234,567.89");
}

#[test]
fn test_format_amount_pads_cents() {
    assert_eq!(format_amount(dec!(1.5)), "$1.50");
}

#[test]
fn test_format_amount_group_boundaries() {
    assert_eq!(format_amount(dec!(100)), "$100.00");
    assert_eq!(format_amount(dec!(1000)), "$1,000.00");
    assert_eq!(format_amount(dec!(100000)), "$100,000.00");
}

// ── format_long_date ───────────────────────────────────────

#[test]
fn test_format_long_date() {
    let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
    assert_eq!(format_long_date(date), "Monday, October 19, 2026");
}

#[test]
fn test_format_long_date_single_digit_day() {
    let date = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
    assert_eq!(format_long_date(date), "Friday, August 1, 2025");
}

// ── scrolling ──────────────────────────────────────────────

#[test]
fn test_scroll_down_moves_window_at_page_edge() {
    let (mut index, mut scroll) = (2, 0);
    scroll_down(&mut index, &mut scroll, 10, 3);
    assert_eq!((index, scroll), (3, 1));
}

#[test]
fn test_scroll_down_stops_at_last_row() {
    let (mut index, mut scroll) = (4, 2);
    scroll_down(&mut index, &mut scroll, 5, 3);
    assert_eq!((index, scroll), (4, 2));
}

#[test]
fn test_scroll_up_pulls_window_back() {
    let (mut index, mut scroll) = (3, 3);
    scroll_up(&mut index, &mut scroll);
    assert_eq!((index, scroll), (2, 2));
}

#[test]
fn test_scroll_to_bottom_and_top() {
    let (mut index, mut scroll) = (0, 0);
    scroll_to_bottom(&mut index, &mut scroll, 10, 4);
    assert_eq!((index, scroll), (9, 6));
    scroll_to_top(&mut index, &mut scroll);
    assert_eq!((index, scroll), (0, 0));
}

#[test]
fn test_scroll_to_bottom_empty_list() {
    let (mut index, mut scroll) = (0, 0);
    scroll_to_bottom(&mut index, &mut scroll, 0, 4);
    assert_eq!((index, scroll), (0, 0));
}

#[test]
fn test_scroll_into_view() {
    let mut scroll = 0;
    scroll_into_view(7, &mut scroll, 3);
    assert_eq!(scroll, 5);
    scroll_into_view(6, &mut scroll, 3);
    assert_eq!(scroll, 5);
    scroll_into_view(2, &mut scroll, 3);
    assert_eq!(scroll, 2);
}
