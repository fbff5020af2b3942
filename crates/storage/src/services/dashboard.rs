use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::dto::common::Limit;
use crate::dto::dashboard::{CategoryShare, DashboardStats, SchoolStanding};
use crate::error::Result;
use crate::models::{Candidate, Category, Program};
use crate::store::ScoreStore;

pub const DASHBOARD_TOP_SCHOOLS: usize = 5;
pub const DASHBOARD_UPCOMING_PROGRAMS: usize = 4;
pub const NEW_CANDIDATE_WINDOW_DAYS: i64 = 7;

/// Group candidates by school, summing their totals.
///
/// Sorted by summed points descending, then school name ascending.
pub fn school_standings(candidates: &[Candidate], limit: Limit) -> Vec<SchoolStanding> {
    let mut schools: BTreeMap<&str, (i64, i64)> = BTreeMap::new();
    for candidate in candidates {
        let entry = schools.entry(candidate.school.as_str()).or_default();
        entry.0 += candidate.total_points;
        entry.1 += 1;
    }

    let mut standings: Vec<SchoolStanding> = schools
        .into_iter()
        .map(|(school, (total_points, candidate_count))| SchoolStanding {
            school: school.to_string(),
            total_points,
            candidate_count,
        })
        .collect();

    // BTreeMap iteration already yields names ascending; the stable sort keeps it for ties.
    standings.sort_by(|a, b| b.total_points.cmp(&a.total_points));
    limit.apply(standings)
}

/// Share of candidates per category, largest first
pub fn category_shares(candidates: &[Candidate], categories: &[Category]) -> Vec<CategoryShare> {
    let total = candidates.len() as i64;
    if total == 0 {
        return Vec::new();
    }

    let names: HashMap<Uuid, &str> = categories
        .iter()
        .map(|c| (c.category_id, c.name.as_str()))
        .collect();

    let mut counts: BTreeMap<String, i64> = BTreeMap::new();
    for candidate in candidates {
        let name = names
            .get(&candidate.category_id)
            .map(|n| n.to_string())
            .unwrap_or_else(|| candidate.category_id.to_string());
        *counts.entry(name).or_default() += 1;
    }

    let mut shares: Vec<CategoryShare> = counts
        .into_iter()
        .map(|(category, count)| CategoryShare {
            category,
            count,
            percentage: percentage_of(count, total),
        })
        .collect();

    shares.sort_by(|a, b| b.count.cmp(&a.count));
    shares
}

/// `round(part / whole * 100)` with halves rounded up, in integer arithmetic
fn percentage_of(part: i64, whole: i64) -> i64 {
    (200 * part + whole) / (2 * whole)
}

pub async fn top_schools(store: &dyn ScoreStore, limit: Limit) -> Result<Vec<SchoolStanding>> {
    let candidates = store.list_candidates().await?;
    Ok(school_standings(&candidates, limit))
}

pub async fn category_distribution(store: &dyn ScoreStore) -> Result<Vec<CategoryShare>> {
    let categories = store.list_categories().await?;
    let candidates = store.list_candidates().await?;
    Ok(category_shares(&candidates, &categories))
}

/// Admin dashboard counters; `now` anchors the new-registration window
pub async fn dashboard_stats(store: &dyn ScoreStore, now: DateTime<Utc>) -> Result<DashboardStats> {
    let categories = store.list_categories().await?;
    let programs = store.list_programs().await?;
    let candidates = store.list_candidates().await?;

    let window_start = now - Duration::days(NEW_CANDIDATE_WINDOW_DAYS);
    let new_candidates = candidates
        .iter()
        .filter(|c| c.created_at >= window_start)
        .count();

    let schools: HashSet<&str> = candidates.iter().map(|c| c.school.as_str()).collect();

    Ok(DashboardStats {
        total_candidates: candidates.len() as i64,
        new_candidates: new_candidates as i64,
        total_programs: programs.len() as i64,
        completed_programs: programs.iter().filter(|p| p.is_completed()).count() as i64,
        total_schools: schools.len() as i64,
        top_schools: school_standings(&candidates, Limit::at_most(DASHBOARD_TOP_SCHOOLS)),
        category_distribution: category_shares(&candidates, &categories),
        upcoming_programs: upcoming_programs(programs),
    })
}

fn upcoming_programs(programs: Vec<Program>) -> Vec<Program> {
    // `list_programs` is already ordered by date with undated programs last.
    programs
        .into_iter()
        .filter(Program::is_upcoming)
        .take(DASHBOARD_UPCOMING_PROGRAMS)
        .collect()
}
