use crate::dto::integrity::{IntegrityReport, RebuildReport, TotalDrift};
use crate::error::{Result, StorageError};
use crate::store::ScoreStore;

fn log_drift(drift: &[TotalDrift]) {
    for entry in drift {
        tracing::error!(
            candidate_id = %entry.candidate_id,
            stored_total = entry.stored_total,
            ledger_total = entry.ledger_total,
            "Candidate total drifted from the award ledger"
        );
    }
}

/// Compare every stored total against its ledger sum without changing anything.
///
/// Drift is logged at error level; repairing it is left to [`rebuild`].
pub async fn verify_totals(store: &dyn ScoreStore) -> Result<IntegrityReport> {
    let drift = store.verify().await?;
    log_drift(&drift);

    Ok(IntegrityReport {
        consistent: drift.is_empty(),
        drift,
    })
}

/// Fails with [`StorageError::Consistency`] when any total has drifted
pub async fn ensure_consistent(store: &dyn ScoreStore) -> Result<()> {
    let drift = store.verify().await?;

    if drift.is_empty() {
        Ok(())
    } else {
        Err(StorageError::Consistency(drift))
    }
}

/// Verify totals and rebuild them from the ledger if any have drifted.
///
/// Returns the rebuild report when a repair ran.
pub async fn check_and_repair(store: &dyn ScoreStore) -> Result<Option<RebuildReport>> {
    match ensure_consistent(store).await {
        Ok(()) => {
            tracing::debug!("Candidate totals match the award ledger");
            Ok(None)
        }
        Err(StorageError::Consistency(drift)) => {
            log_drift(&drift);

            let report = rebuild(store).await?;
            Ok(Some(report))
        }
        Err(e) => Err(e),
    }
}

/// Recompute every candidate total from the ledger
pub async fn rebuild(store: &dyn ScoreStore) -> Result<RebuildReport> {
    let report = store.rebuild().await?;

    tracing::info!(
        candidates_scanned = report.candidates_scanned,
        corrected = report.corrected.len(),
        "Rebuilt candidate totals from the award ledger"
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::testing::{award, seeded_store};

    #[tokio::test]
    async fn test_consistent_store_needs_no_repair() {
        let (store, fixture) = seeded_store().await;
        let a = fixture.register(&store, "A", "Greenwood").await;
        store.record_award(&award(&a, fixture.program_id, 3)).await.unwrap();

        assert!(verify_totals(&store).await.unwrap().consistent);
        assert!(check_and_repair(&store).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_drift_is_reported_then_repaired() {
        let (store, fixture) = seeded_store().await;
        let a = fixture.register(&store, "A", "Greenwood").await;
        store.record_award(&award(&a, fixture.program_id, 3)).await.unwrap();
        store.overwrite_total(a.candidate_id, 30).unwrap();

        let err = ensure_consistent(&store).await.unwrap_err();
        assert!(matches!(err, StorageError::Consistency(ref d) if d.len() == 1));

        let report = check_and_repair(&store).await.unwrap().unwrap();
        assert_eq!(report.corrected[0].stored_total, 30);
        assert_eq!(report.corrected[0].ledger_total, 3);
        assert_eq!(store.total_of(a.candidate_id).await.unwrap(), 3);
        assert!(ensure_consistent(&store).await.is_ok());
    }

    #[tokio::test]
    async fn test_verify_reports_drift_without_repairing() {
        let (store, fixture) = seeded_store().await;
        let a = fixture.register(&store, "A", "Greenwood").await;
        store.record_award(&award(&a, fixture.program_id, 6)).await.unwrap();
        store.overwrite_total(a.candidate_id, 60).unwrap();

        let report = verify_totals(&store).await.unwrap();

        assert!(!report.consistent);
        assert_eq!(report.drift.len(), 1);
        assert_eq!(report.drift[0].ledger_total, 6);
        assert_eq!(store.total_of(a.candidate_id).await.unwrap(), 60);

        rebuild(&store).await.unwrap();
        assert!(verify_totals(&store).await.unwrap().consistent);
    }
}
