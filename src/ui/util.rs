use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Dollar amount with thousands separators and cents, e.g. `-$1,234.50`.
pub(crate) fn format_amount(val: Decimal) -> String {
    let rounded = format!("{:.2}", val.abs());
    let (whole, cents) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if val < Decimal::ZERO { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}

/// e.g. `2026-10-19` → `"Monday, October 19, 2026"`
pub(crate) fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// At most `max` characters; longer text ends in "…".
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if s.char_indices().nth(max).is_none() {
        return s.to_string();
    }
    match max.checked_sub(1) {
        Some(keep) => {
            let cut = s.char_indices().nth(keep).map_or(s.len(), |(i, _)| i);
            format!("{}…", &s[..cut])
        }
        None => String::new(),
    }
}

// Cursor helpers: `index` is the selected row, `scroll` the first visible
// row, `page` the number of visible rows.

pub(crate) fn scroll_down(index: &mut usize, scroll: &mut usize, len: usize, page: usize) {
    if *index + 1 >= len {
        return;
    }
    *index += 1;
    let last_visible = *scroll + page.max(1) - 1;
    if *index > last_visible {
        *scroll += *index - last_visible;
    }
}

pub(crate) fn scroll_up(index: &mut usize, scroll: &mut usize) {
    *index = index.saturating_sub(1);
    *scroll = (*scroll).min(*index);
}

/// Shift `scroll` the least amount that puts `index` on screen.
pub(crate) fn scroll_into_view(index: usize, scroll: &mut usize, page: usize) {
    let page = page.max(1);
    if index < *scroll {
        *scroll = index;
    } else if index >= *scroll + page {
        *scroll = index + 1 - page;
    }
}

pub(crate) fn scroll_to_top(index: &mut usize, scroll: &mut usize) {
    *index = 0;
    *scroll = 0;
}

pub(crate) fn scroll_to_bottom(index: &mut usize, scroll: &mut usize, len: usize, page: usize) {
    let Some(last) = len.checked_sub(1) else {
        return;
    };
    *index = last;
    *scroll = len.saturating_sub(page.max(1));
}
