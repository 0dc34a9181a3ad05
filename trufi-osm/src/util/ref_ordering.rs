//! ordering of routes by their `ref` code, used for the diagnostic log and
//! the trip planner route list. refs that parse as integers come first in
//! numeric order; all others follow in plain string order. a missing ref
//! compares as the empty string.
use std::cmp::Ordering;

pub fn compare_refs(a: Option<&str>, b: Option<&str>) -> Ordering {
    let a = a.unwrap_or_default();
    let b = b.unwrap_or_default();
    match (parse_numeric(a), parse_numeric(b)) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

fn parse_numeric(reference: &str) -> Option<i64> {
    reference.trim().parse::<i64>().ok()
}
