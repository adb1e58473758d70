//! Indian-locale display formatting.
//!
//! Amounts group digits the Indian way (two-digit groups after the first
//! three: 12,34,567) and compact to lakh (10^5) and crore (10^7) units.
//! All functions are pure; none of them accept a non-finite value — the
//! metric layer hands those over as `None` and they render as "--".

use chrono::{DateTime, Utc};

pub const LAKH: f64 = 100_000.0;
pub const CRORE: f64 = 10_000_000.0;

/// `₹` plus Indian digit grouping, rounded to whole rupees.
pub fn format_currency(amount: f64) -> String {
    format!("₹{}", format_number(amount))
}

/// Indian digit grouping without the currency symbol.
pub fn format_number(amount: f64) -> String {
    let rounded = amount.round();
    let grouped = group_indian(&format!("{:.0}", rounded.abs()));
    if rounded < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Compact rupee rendering: crores to 1 decimal, lakhs to 1 decimal,
/// thousands to 0 decimals, otherwise the grouped raw amount.
pub fn format_compact_currency(amount: f64) -> String {
    if amount >= CRORE {
        format!("₹{:.1}Cr", amount / CRORE)
    } else if amount >= LAKH {
        format!("₹{:.1}L", amount / LAKH)
    } else if amount >= 1_000.0 {
        format!("₹{:.0}K", amount / 1_000.0)
    } else {
        format_currency(amount)
    }
}

pub fn format_percentage(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}%")
}

/// DD/MM/YYYY, as dates are written in India.
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Summary-card runway rendering: one decimal place.
pub fn format_runway_card(runway: Option<f64>) -> String {
    match runway {
        Some(months) => format!("{months:.1} months"),
        None => "--".into(),
    }
}

/// Scenario-list runway rendering: floored whole months.
pub fn format_runway_list(runway: Option<f64>) -> String {
    match runway {
        Some(months) => format!("{}mo", months.floor() as i64),
        None => "--".into(),
    }
}

/// Percentage rendering for an optional metric.
pub fn format_margin(margin: Option<f64>) -> String {
    match margin {
        Some(value) => format_percentage(value, 1),
        None => "--".into(),
    }
}

/// Indian business terminology used on reports and insight prompts.
pub mod terms {
    pub const REVENUE: &str = "Monthly Turnover";
    pub const EXPENSES: &str = "Monthly Expenses";
    pub const PROFIT: &str = "Monthly Profit";
    pub const PROFIT_MARGIN: &str = "Profit Margin";
    pub const RUNWAY: &str = "Cash Runway";
    pub const BURN_RATE: &str = "Monthly Burn Rate";
    pub const CASH_ON_HAND: &str = "Cash in Hand";
    pub const GROWTH_RATE: &str = "Growth Rate";
}

/// Insert Indian-style separators into a plain digit string:
/// the last three digits form one group, the rest split into pairs.
fn group_indian(digits: &str) -> String {
    let len = digits.len();
    if len <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(len - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}
