use std::collections::HashMap;

use uuid::Uuid;

use crate::dto::common::Limit;
use crate::dto::ranking::{CategoryStanding, RankingEntry, Scoreboard};
use crate::error::Result;
use crate::models::Candidate;
use crate::store::ScoreStore;

pub const SCOREBOARD_OVERALL_SIZE: usize = 20;
pub const SCOREBOARD_CATEGORY_SIZE: usize = 10;

/// Order candidates by total points, highest first; ties go to the earlier
/// registration. Ranks are 1-based positions and are never shared.
pub fn rank_candidates(mut candidates: Vec<Candidate>, limit: Limit) -> Vec<RankingEntry> {
    candidates.sort_by(|a, b| {
        b.total_points
            .cmp(&a.total_points)
            .then_with(|| a.registration_seq.cmp(&b.registration_seq))
    });

    limit
        .apply(candidates)
        .iter()
        .enumerate()
        .map(|(position, candidate)| RankingEntry {
            rank: position as i64 + 1,
            candidate: candidate.into(),
            total_points: candidate.total_points,
        })
        .collect()
}

/// Overall standings across every category
pub async fn rank_overall(store: &dyn ScoreStore, limit: Limit) -> Result<Vec<RankingEntry>> {
    let candidates = store.list_candidates().await?;
    Ok(rank_candidates(candidates, limit))
}

/// Standings within one category, ranked by overall totals
pub async fn rank_by_category(
    store: &dyn ScoreStore,
    category_id: Uuid,
    limit: Limit,
) -> Result<Vec<RankingEntry>> {
    store.get_category(category_id).await?;

    let candidates = store
        .list_candidates()
        .await?
        .into_iter()
        .filter(|c| c.category_id == category_id)
        .collect();

    Ok(rank_candidates(candidates, limit))
}

/// Overall leaders and per-category leaders taken from a single snapshot
pub async fn scoreboard(store: &dyn ScoreStore) -> Result<Scoreboard> {
    let categories = store.list_categories().await?;
    let candidates = store.list_candidates().await?;

    let mut by_category: HashMap<Uuid, Vec<Candidate>> = HashMap::new();
    for candidate in &candidates {
        by_category
            .entry(candidate.category_id)
            .or_default()
            .push(candidate.clone());
    }

    let overall = rank_candidates(candidates, Limit::at_most(SCOREBOARD_OVERALL_SIZE));

    let categories = categories
        .into_iter()
        .map(|category| {
            let members = by_category
                .remove(&category.category_id)
                .unwrap_or_default();
            CategoryStanding {
                entries: rank_candidates(members, Limit::at_most(SCOREBOARD_CATEGORY_SIZE)),
                category,
            }
        })
        .collect();

    Ok(Scoreboard {
        overall,
        categories,
    })
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::error::StorageError;
    use crate::store::testing::{award, seeded_store};

    fn candidate(seq: i64, points: i64) -> Candidate {
        Candidate {
            candidate_id: Uuid::from_u128(seq as u128),
            candidate_code: format!("C{}", 1000 + seq),
            registration_seq: seq,
            name: format!("Candidate {seq}"),
            school: "Greenwood".to_string(),
            category_id: Uuid::nil(),
            participation_type: "individual".to_string(),
            program_ids: Vec::new(),
            total_points: points,
            created_at: Utc::now(),
            deleted_at: None,
        }
    }

    fn codes(entries: &[RankingEntry]) -> Vec<&str> {
        entries
            .iter()
            .map(|e| e.candidate.candidate_code.as_str())
            .collect()
    }

    #[test]
    fn test_orders_by_points_descending() {
        let ranked = rank_candidates(
            vec![candidate(1, 10), candidate(2, 30), candidate(3, 20)],
            Limit::UNBOUNDED,
        );

        assert_eq!(codes(&ranked), vec!["C1002", "C1003", "C1001"]);
        assert_eq!(
            ranked.iter().map(|e| e.rank).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_ties_go_to_earlier_registration_with_distinct_ranks() {
        let ranked = rank_candidates(
            vec![candidate(3, 25), candidate(1, 25), candidate(2, 25)],
            Limit::UNBOUNDED,
        );

        assert_eq!(codes(&ranked), vec!["C1001", "C1002", "C1003"]);
        assert_eq!(
            ranked.iter().map(|e| e.rank).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_limit_bounds_result() {
        let ranked = rank_candidates(
            vec![candidate(1, 5), candidate(2, 4), candidate(3, 3)],
            Limit::at_most(2),
        );
        assert_eq!(codes(&ranked), vec!["C1001", "C1002"]);
    }

    #[test]
    fn test_ranking_is_independent_of_input_order() {
        let forward = vec![candidate(1, 7), candidate(2, 7), candidate(3, 9), candidate(4, -2)];
        let mut reversed = forward.clone();
        reversed.reverse();

        assert_eq!(
            rank_candidates(forward, Limit::UNBOUNDED),
            rank_candidates(reversed, Limit::UNBOUNDED)
        );
    }

    #[tokio::test]
    async fn test_single_leader_after_two_awards() {
        let (store, fixture) = seeded_store().await;
        let a = fixture.register(&store, "A", "Greenwood").await;
        let b = fixture.register(&store, "B", "Riverside").await;
        store.record_award(&award(&a, fixture.program_id, 10)).await.unwrap();
        store.record_award(&award(&a, fixture.second_program_id, 15)).await.unwrap();
        store.record_award(&award(&b, fixture.program_id, 20)).await.unwrap();

        let top = rank_overall(&store, Limit::at_most(1)).await.unwrap();

        assert_eq!(top.len(), 1);
        assert_eq!(top[0].candidate.candidate_id, a.candidate_id);
        assert_eq!(top[0].total_points, 25);
    }

    #[tokio::test]
    async fn test_tied_candidates_rank_in_registration_order() {
        let (store, fixture) = seeded_store().await;
        let a = fixture.register(&store, "A", "Greenwood").await;
        let b = fixture.register(&store, "B", "Greenwood").await;
        // B reaches 25 first; registration order still decides.
        store.record_award(&award(&b, fixture.program_id, 25)).await.unwrap();
        store.record_award(&award(&a, fixture.program_id, 25)).await.unwrap();

        let top = rank_overall(&store, Limit::at_most(2)).await.unwrap();
        let ids: Vec<Uuid> = top.iter().map(|e| e.candidate.candidate_id).collect();

        assert_eq!(ids, vec![a.candidate_id, b.candidate_id]);
    }

    #[tokio::test]
    async fn test_repeated_ranking_is_identical() {
        let (store, fixture) = seeded_store().await;
        for (name, points) in [("A", 5), ("B", 5), ("C", 9), ("D", 0), ("E", 5)] {
            let c = fixture.register(&store, name, "Greenwood").await;
            store.record_award(&award(&c, fixture.program_id, points)).await.unwrap();
        }

        let first = rank_overall(&store, Limit::UNBOUNDED).await.unwrap();
        let second = rank_overall(&store, Limit::UNBOUNDED).await.unwrap();

        assert_eq!(
            serde_json::to_vec(&first).unwrap(),
            serde_json::to_vec(&second).unwrap()
        );
    }

    #[tokio::test]
    async fn test_category_ranking_filters_members_and_uses_overall_totals() {
        let (store, fixture) = seeded_store().await;
        let junior = fixture.register(&store, "Junior", "Greenwood").await;
        let senior = fixture
            .register_in(&store, "Senior", "Greenwood", fixture.second_category_id)
            .await;
        store.record_award(&award(&junior, fixture.program_id, 3)).await.unwrap();
        store.record_award(&award(&senior, fixture.program_id, 40)).await.unwrap();

        let seniors = rank_by_category(&store, fixture.second_category_id, Limit::UNBOUNDED)
            .await
            .unwrap();

        assert_eq!(seniors.len(), 1);
        assert_eq!(seniors[0].candidate.candidate_id, senior.candidate_id);
        assert_eq!(seniors[0].total_points, 40);
        assert_eq!(seniors[0].rank, 1);
    }

    #[tokio::test]
    async fn test_unknown_category_is_not_found() {
        let (store, _) = seeded_store().await;

        let err = rank_by_category(&store, Uuid::new_v4(), Limit::UNBOUNDED)
            .await
            .unwrap_err();

        assert!(matches!(err, StorageError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_removed_candidates_leave_the_rankings() {
        let (store, fixture) = seeded_store().await;
        let a = fixture.register(&store, "A", "Greenwood").await;
        let b = fixture.register(&store, "B", "Greenwood").await;
        store.record_award(&award(&a, fixture.program_id, 50)).await.unwrap();
        store.remove_candidate(a.candidate_id).await.unwrap();

        let ranked = rank_overall(&store, Limit::UNBOUNDED).await.unwrap();

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].candidate.candidate_id, b.candidate_id);
    }

    #[tokio::test]
    async fn test_scoreboard_has_every_category() {
        let (store, fixture) = seeded_store().await;
        for i in 0..25 {
            let c = fixture.register(&store, &format!("J{i}"), "Greenwood").await;
            store.record_award(&award(&c, fixture.program_id, i)).await.unwrap();
        }

        let board = scoreboard(&store).await.unwrap();

        assert_eq!(board.overall.len(), SCOREBOARD_OVERALL_SIZE);
        assert_eq!(board.overall[0].total_points, 24);
        let names: Vec<&str> = board
            .categories
            .iter()
            .map(|s| s.category.name.as_str())
            .collect();
        assert_eq!(names, vec!["Junior", "Senior"]);
        assert_eq!(board.categories[0].entries.len(), SCOREBOARD_CATEGORY_SIZE);
        assert!(board.categories[1].entries.is_empty());
    }
}
