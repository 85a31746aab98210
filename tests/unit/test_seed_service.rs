#[cfg(test)]
mod tests {
    use fleet_management_api::services::seed_fleet;
    use fleet_management_api::storage::{FleetStore, MemoryStore};

    #[tokio::test]
    async fn test_seed_populates_sample_fleet() {
        let store = MemoryStore::new();
        let summary = seed_fleet(&store).await.unwrap();

        assert_eq!(summary.inserted, 10);
        assert_eq!(summary.skipped, 0);
        assert_eq!(store.vessels().find_all().await.unwrap().len(), 3);
        assert_eq!(store.crew().find_all().await.unwrap().len(), 3);
        assert_eq!(store.voyages().find_all().await.unwrap().len(), 2);
        assert_eq!(store.maintenance().find_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_seed_references_point_at_seeded_vessels() {
        let store = MemoryStore::new();
        seed_fleet(&store).await.unwrap();

        let explorer = store
            .vessels()
            .find_by_business_id("V001")
            .await
            .unwrap()
            .expect("V001 should be seeded");

        let transatlantic = store
            .voyages()
            .find_by_business_id("VOY001")
            .await
            .unwrap()
            .expect("VOY001 should be seeded");
        assert_eq!(transatlantic.vessel, explorer.id);
        // The in-progress voyage carries historical track points.
        assert_eq!(transatlantic.route.len(), 2);
        assert!(transatlantic.route[0].timestamp <= transatlantic.route[1].timestamp);
        assert_eq!(transatlantic.crew.len(), 2);

        let roster = store.crew_by_vessel(explorer.id).await.unwrap();
        assert_eq!(roster.len(), 2);
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let store = MemoryStore::new();
        let first = seed_fleet(&store).await.unwrap();
        let explorer_id = store
            .vessels()
            .find_by_business_id("V001")
            .await
            .unwrap()
            .unwrap()
            .id;

        let second = seed_fleet(&store).await.unwrap();
        assert_eq!(second.inserted, 0);
        assert_eq!(second.skipped, first.inserted + first.skipped);

        // Existing records keep their storage ids across runs.
        let explorer = store.vessels().find_by_business_id("V001").await.unwrap().unwrap();
        assert_eq!(explorer.id, explorer_id);
        assert_eq!(store.vessels().find_all().await.unwrap().len(), 3);
    }
}
