use uuid::Uuid;

use crate::dto::candidate::{CandidateDetailResponse, CandidateTotalResponse};
use crate::dto::common::{PaginatedResponse, PaginationParams};
use crate::error::Result;
use crate::models::Candidate;
use crate::store::ScoreStore;

/// Candidate profile with enrolled programs and ledger history
pub async fn candidate_detail(
    store: &dyn ScoreStore,
    candidate_id: Uuid,
) -> Result<CandidateDetailResponse> {
    let candidate = store.get_candidate(candidate_id).await?;

    let mut programs = Vec::with_capacity(candidate.program_ids.len());
    for program_id in &candidate.program_ids {
        programs.push(store.get_program(*program_id).await?);
    }

    let awards = store.ledger_for(candidate_id).await?;

    Ok(CandidateDetailResponse {
        candidate,
        programs,
        awards,
    })
}

pub async fn candidate_total(
    store: &dyn ScoreStore,
    candidate_id: Uuid,
) -> Result<CandidateTotalResponse> {
    let total_points = store.total_of(candidate_id).await?;

    Ok(CandidateTotalResponse {
        candidate_id,
        total_points,
    })
}

/// One page of active candidates ordered by name, ties by registration order
pub async fn list_candidates(
    store: &dyn ScoreStore,
    pagination: &PaginationParams,
) -> Result<PaginatedResponse<Candidate>> {
    let mut candidates = store.list_candidates().await?;
    candidates.sort_by(|a, b| {
        a.name
            .cmp(&b.name)
            .then_with(|| a.registration_seq.cmp(&b.registration_seq))
    });

    let total_items = candidates.len() as i64;
    let page = candidates
        .into_iter()
        .skip(pagination.offset())
        .take(pagination.limit())
        .collect();

    Ok(PaginatedResponse::new(
        page,
        pagination.page,
        pagination.page_size,
        total_items,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use crate::store::testing::{award, seeded_store};

    #[tokio::test]
    async fn test_detail_includes_programs_and_awards() {
        let (store, fixture) = seeded_store().await;
        let a = fixture.register(&store, "A", "Greenwood").await;
        store.record_award(&award(&a, fixture.program_id, 9)).await.unwrap();

        let detail = candidate_detail(&store, a.candidate_id).await.unwrap();

        assert_eq!(detail.candidate.total_points, 9);
        assert_eq!(detail.programs.len(), 1);
        assert_eq!(detail.programs[0].program_id, fixture.program_id);
        assert_eq!(detail.awards.len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_candidate_detail_is_not_found() {
        let (store, _) = seeded_store().await;

        let err = candidate_detail(&store, Uuid::new_v4()).await.unwrap_err();

        assert!(matches!(err, StorageError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_listing_pages_by_name() {
        let (store, fixture) = seeded_store().await;
        for name in ["Meera", "Arjun", "Zoya", "Farhan", "Arjun"] {
            fixture.register(&store, name, "Greenwood").await;
        }
        let removed = fixture.register(&store, "Bina", "Riverside").await;
        store.remove_candidate(removed.candidate_id).await.unwrap();

        let first = list_candidates(
            &store,
            &PaginationParams {
                page: 1,
                page_size: 2,
            },
        )
        .await
        .unwrap();
        let names: Vec<&str> = first.data.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Arjun", "Arjun"]);
        assert!(first.data[0].registration_seq < first.data[1].registration_seq);
        assert_eq!(first.pagination.total_items, 5);
        assert_eq!(first.pagination.total_pages, 3);

        let last = list_candidates(
            &store,
            &PaginationParams {
                page: 3,
                page_size: 2,
            },
        )
        .await
        .unwrap();
        let names: Vec<&str> = last.data.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Zoya"]);
    }
}
