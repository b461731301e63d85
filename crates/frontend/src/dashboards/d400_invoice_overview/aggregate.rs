//! Aggregations behind the dashboard charts.

use crate::shared::chart::ChartSeries;
use crate::shared::date_utils::parse_date;
use contracts::domain::a001_invoice::Invoice;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Count occurrences, keeping the order in which keys were first seen
fn count_by<'a, F>(invoices: &'a [Invoice], key: F) -> Vec<(&'a str, usize)>
where
    F: Fn(&'a Invoice) -> &'a str,
{
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for invoice in invoices {
        let k = key(invoice);
        match positions.get(k) {
            Some(&pos) => counts[pos].1 += 1,
            None => {
                positions.insert(k, counts.len());
                counts.push((k, 1));
            }
        }
    }
    counts
}

fn into_series(counts: Vec<(&str, usize)>) -> ChartSeries {
    let (labels, values) = counts
        .into_iter()
        .map(|(label, count)| (label.to_string(), count))
        .unzip();
    ChartSeries { labels, values }
}

/// Upper bound on bars in the top-sellers chart, whatever the config says
pub const TOP_SELLERS_MAX: usize = 10;

/// Sellers ranked by invoice count, descending, at most `limit` of them
/// (and never more than [`TOP_SELLERS_MAX`]).
///
/// Equal counts keep first-seen order.
pub fn top_sellers(invoices: &[Invoice], limit: usize) -> ChartSeries {
    let mut counts = count_by(invoices, |i| i.name.as_str());
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(limit.min(TOP_SELLERS_MAX));
    into_series(counts)
}

/// Invoices per date, ascending by calendar date.
///
/// Dates that do not parse go last, ordered by label.
pub fn invoices_over_time(invoices: &[Invoice]) -> ChartSeries {
    let mut counts = count_by(invoices, |i| i.date.as_str());
    counts.sort_by(|a, b| match (parse_date(a.0), parse_date(b.0)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.0.cmp(b.0),
    });
    into_series(counts)
}
