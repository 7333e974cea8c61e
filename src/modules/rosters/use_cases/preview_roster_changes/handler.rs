use crate::modules::rosters::adapters::outbound::roster_store::RosterStore;
use crate::modules::rosters::core::diff::{Change, diff};
use crate::modules::rosters::core::roster::{RosterAssignment, supersede_by_date};
use crate::modules::rosters::core::week::week_start_of;
use crate::modules::rosters::use_cases::errors::ApplicationError;
use crate::modules::rosters::use_cases::save_roster::command::AssignmentInput;
use crate::shared::core::actor::Actor;
use chrono::NaiveDate;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewRosterChanges {
    pub week_start: NaiveDate,
    pub assignments: Vec<AssignmentInput>,
    pub actor: Option<Actor>,
}

/// Diffs a proposed assignment list against the stored roster. Never writes.
pub struct PreviewRosterChangesHandler<TStore>
where
    TStore: RosterStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> PreviewRosterChangesHandler<TStore>
where
    TStore: RosterStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        query: PreviewRosterChanges,
    ) -> Result<Vec<Change>, ApplicationError> {
        let actor = query.actor.ok_or(ApplicationError::Unauthenticated)?;
        let week_start = week_start_of(query.week_start);

        let stored = self
            .store
            .load_roster(&actor.organization_id, week_start)
            .await?
            .map(|r| r.assignments)
            .unwrap_or_default();
        let proposed = supersede_by_date(
            query
                .assignments
                .into_iter()
                .map(|a| RosterAssignment::new(a.date, a.driver_id.trim()))
                .collect(),
        );

        Ok(diff(&stored, &proposed))
    }
}

#[cfg(test)]
mod preview_roster_changes_handler_tests {
    use super::*;
    use crate::modules::rosters::adapters::outbound::roster_store::WriteScope;
    use crate::modules::rosters::adapters::outbound::roster_store_in_memory::InMemoryRosterStore;
    use crate::modules::rosters::core::roster::Roster;
    use crate::tests::fixtures::day;
    use rstest::{fixture, rstest};

    #[fixture]
    async fn store() -> Arc<InMemoryRosterStore> {
        let store = InMemoryRosterStore::new();
        let mut roster = Roster::draft("r-1", day("2025-01-06"));
        roster.assignments = vec![
            RosterAssignment::new(day("2025-01-06"), "d1"),
            RosterAssignment::new(day("2025-01-07"), "d2"),
        ];
        let scope = WriteScope {
            organization_id: "org-1".into(),
            actor_id: "u-1".into(),
            at: 1,
        };
        store.save_roster(&scope, roster).await.unwrap();
        Arc::new(store)
    }

    fn query(assignments: &[(&str, &str)]) -> PreviewRosterChanges {
        PreviewRosterChanges {
            week_start: day("2025-01-06"),
            assignments: assignments
                .iter()
                .map(|(date, driver)| AssignmentInput {
                    date: day(date),
                    driver_id: driver.to_string(),
                })
                .collect(),
            actor: Some(Actor::new("u-1", "org-1")),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_nothing_for_an_unchanged_list(
        #[future] store: Arc<InMemoryRosterStore>,
    ) {
        let handler = PreviewRosterChangesHandler::new(store.await);
        let changes = handler
            .handle(query(&[("2025-01-07", "d2"), ("2025-01-06", "d1")]))
            .await
            .unwrap();
        assert!(changes.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_reassigned_added_and_removed_dates(
        #[future] store: Arc<InMemoryRosterStore>,
    ) {
        let store = store.await;
        let handler = PreviewRosterChangesHandler::new(store.clone());
        let changes = handler
            .handle(query(&[("2025-01-06", "d3"), ("2025-01-09", "d2")]))
            .await
            .unwrap();

        assert_eq!(
            changes,
            vec![
                Change {
                    date: day("2025-01-06"),
                    previous_driver_id: Some("d1".into()),
                    new_driver_id: Some("d3".into()),
                },
                Change {
                    date: day("2025-01-07"),
                    previous_driver_id: Some("d2".into()),
                    new_driver_id: None,
                },
                Change {
                    date: day("2025-01-09"),
                    previous_driver_id: None,
                    new_driver_id: Some("d2".into()),
                },
            ]
        );
        assert_eq!(store.save_count(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_diff_against_an_empty_roster_for_an_unsaved_week() {
        let handler = PreviewRosterChangesHandler::new(Arc::new(InMemoryRosterStore::new()));
        let proposal = query(&[("2025-01-06", "d1")]);
        let changes = handler.handle(proposal).await.unwrap();
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].previous_driver_id, None);
    }
}
