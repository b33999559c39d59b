//! Bulk inventory source update tests

#[cfg(test)]
mod tests {
    use crate::common::{InMemoryLauncher, SourceFactory};
    use actix_web::body::to_bytes;
    use inventory_ops::{
        Actor, ResourceKey, SourceKind, SourceUpdateDispatcher, StaticAccessController,
        outcomes_response,
    };
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_mixed_inventory_reports_every_source_in_order() {
        let launcher = Arc::new(InMemoryLauncher::starting_at(100));
        let access = StaticAccessController::new().grant(5, ResourceKey::Project(20));
        let dispatcher = SourceUpdateDispatcher::new(Arc::new(access), launcher.clone());

        let inventory = SourceFactory::inventory(vec![
            SourceFactory::cloud(1, SourceKind::Ec2, true),
            SourceFactory::cloud(2, SourceKind::Gce, false),
            SourceFactory::project_driven(3, 20, "playbooks"),
            SourceFactory::project_driven(4, 21, "secret-playbooks"),
        ]);

        let outcomes = dispatcher
            .dispatch_updates(&inventory, &Actor::new(5, "operator"))
            .await;

        assert_eq!(outcomes.len(), 4);
        assert_eq!(
            launcher.launched(),
            vec![("inventory_source", 1), ("project", 20)]
        );

        let response = outcomes_response(&outcomes);
        assert_eq!(response.status().as_u16(), 202);
        let body: serde_json::Value =
            serde_json::from_slice(&to_bytes(response.into_body()).await.unwrap()).unwrap();
        assert_eq!(
            body,
            json!([
                {"status": "started", "inventory_update": 100, "inventory_source": 1},
                {"status": "Could not start because 'can_update' returned False", "inventory_source": 2},
                {"status": "started", "inventory_update": 101, "inventory_source": 3},
                {"status": "You do not have permission to update project 'secret-playbooks'", "inventory_source": 4}
            ])
        );
    }

    #[tokio::test]
    async fn test_superuser_may_update_any_project() {
        let launcher = Arc::new(InMemoryLauncher::starting_at(1));
        let dispatcher =
            SourceUpdateDispatcher::new(Arc::new(StaticAccessController::new()), launcher.clone());

        let inventory = SourceFactory::inventory(vec![
            SourceFactory::project_driven(1, 30, "a"),
            SourceFactory::project_driven(2, 31, "b"),
        ]);

        let outcomes = dispatcher
            .dispatch_updates(&inventory, &Actor::superuser(1, "admin"))
            .await;

        assert!(outcomes.iter().all(|o| o.is_started()));
        assert_eq!(launcher.launched(), vec![("project", 30), ("project", 31)]);
    }

    #[tokio::test]
    async fn test_scheduler_failure_does_not_abort_batch() {
        let launcher = Arc::new(InMemoryLauncher::starting_at(1).with_busy_source(1));
        let dispatcher =
            SourceUpdateDispatcher::new(Arc::new(StaticAccessController::new()), launcher);

        let inventory = SourceFactory::inventory(vec![
            SourceFactory::cloud(1, SourceKind::Vmware, true),
            SourceFactory::cloud(2, SourceKind::Openstack, true),
        ]);

        let outcomes = dispatcher
            .dispatch_updates(&inventory, &Actor::new(1, "operator"))
            .await;

        assert_eq!(outcomes[0].update_id(), None);
        assert!(outcomes[0].status_text().starts_with("Failed to start update:"));
        assert_eq!(outcomes[1].update_id(), Some(1));
    }
}
