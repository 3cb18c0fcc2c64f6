//! Timeline View
//!
//! Sorted and year-grouped projections of the collection, recomputed on
//! every render. Nothing here mutates the collection.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::date::parse_milestone_date;
use crate::milestone::Milestone;

/// Milestones of one calendar year, ascending by date
#[derive(Debug, Clone, PartialEq)]
pub struct YearGroup {
    pub year: i32,
    pub milestones: Vec<Milestone>,
}

fn compare_dates(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Dated milestones in ascending date order.
///
/// Milestones without a date are left out. Unparsable dates keep their
/// relative order after every valid one.
pub fn sorted_milestones(milestones: &[Milestone]) -> Vec<&Milestone> {
    let mut dated: Vec<(Option<NaiveDate>, &Milestone)> = milestones
        .iter()
        .filter(|m| !m.date.is_empty())
        .map(|m| (parse_milestone_date(&m.date), m))
        .collect();

    dated.sort_by(|a, b| compare_dates(a.0, b.0));
    dated.into_iter().map(|(_, m)| m).collect()
}

/// Year buckets, most recent year first.
///
/// Milestones whose year cannot be determined are dropped from the view.
pub fn group_by_year(milestones: &[Milestone]) -> Vec<YearGroup> {
    let mut years: BTreeMap<i32, Vec<Milestone>> = BTreeMap::new();
    for milestone in sorted_milestones(milestones) {
        let Some(date) = parse_milestone_date(&milestone.date) else {
            log::debug!(target: "view", "Skipping milestone {:?} with date {:?}", milestone.id, milestone.date);
            continue;
        };
        years.entry(date.year()).or_default().push(milestone.clone());
    }

    years
        .into_iter()
        .rev()
        .map(|(year, milestones)| YearGroup { year, milestones })
        .collect()
}
