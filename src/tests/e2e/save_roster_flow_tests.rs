use crate::modules::rosters::adapters::outbound::roster_store::RosterStore;
use crate::modules::rosters::adapters::outbound::roster_store_in_memory::InMemoryRosterStore;
use crate::modules::rosters::core::roster::{Roster, RosterStatus};
use crate::modules::rosters::use_cases::load_roster_for_week::handler::LoadRosterForWeek;
use crate::modules::rosters::use_cases::preview_roster_changes::handler::PreviewRosterChanges;
use crate::modules::rosters::use_cases::save_roster::command::AssignmentInput;
use crate::shared::core::actor::Actor;
use crate::tests::fixtures::commands::save_roster::{
    FIXED_ORGANIZATION_ID, FIXED_REQUESTED_AT, FIXED_USER_ID, SaveRosterBuilder,
};
use crate::tests::fixtures::day;
use crate::tests::fixtures::drivers::fleet;
use crate::tests::fixtures::state::{TestApp, make_test_app, make_test_app_with};

async fn stored(app: &TestApp) -> Roster {
    app.store
        .load_roster(FIXED_ORGANIZATION_ID, day("2025-01-06"))
        .await
        .unwrap()
        .unwrap()
}

#[tokio::test]
async fn retrying_a_save_only_notifies_the_dates_that_were_missed() {
    let mut store = InMemoryRosterStore::new();
    store.fail_on_save(2);
    let app = make_test_app_with(store, fleet());
    let handler = &app.state.save_handler;

    let first = handler
        .handle(
            SaveRosterBuilder::new()
                .assign("2025-01-06", "d1")
                .assign("2025-01-07", "d3")
                .build(),
        )
        .await
        .unwrap();
    assert_eq!(first.notifications.unwrap().sent, 0);
    for assignment in stored(&app).await.assignments {
        assert_eq!(assignment.notified_at, None);
    }
    assert_eq!(app.mailer.recipients().await.len(), 2);

    let retry = handler
        .handle(
            SaveRosterBuilder::new()
                .assign("2025-01-06", "d1")
                .assign("2025-01-07", "d3")
                .requested_at(FIXED_REQUESTED_AT + 60_000)
                .build(),
        )
        .await
        .unwrap();
    let notifications = retry.notifications.unwrap();
    assert_eq!((notifications.total_drivers, notifications.sent), (2, 2));
    assert_eq!(retry.roster.assignments.len(), 2);
    for assignment in &retry.roster.assignments {
        assert!(assignment.is_notified());
    }

    let again = handler
        .handle(
            SaveRosterBuilder::new()
                .assign("2025-01-06", "d1")
                .assign("2025-01-07", "d3")
                .requested_at(FIXED_REQUESTED_AT + 120_000)
                .build(),
        )
        .await
        .unwrap();
    let notifications = again.notifications.unwrap();
    assert_eq!((notifications.total_drivers, notifications.sent), (0, 0));
    assert_eq!(app.mailer.recipients().await.len(), 4);
    assert_eq!(
        again.roster.assignments[0].notified_at,
        Some(FIXED_REQUESTED_AT + 60_000)
    );
}

#[tokio::test]
async fn a_driver_whose_send_failed_is_notified_on_the_next_save() {
    let app = make_test_app();
    let handler = &app.state.save_handler;
    app.mailer.reject_recipient("d1@example.test").await;

    let first = handler
        .handle(
            SaveRosterBuilder::new()
                .assign("2025-01-06", "d1")
                .assign("2025-01-07", "d3")
                .build(),
        )
        .await
        .unwrap();
    let notifications = first.notifications.unwrap();
    assert_eq!((notifications.sent, notifications.failed), (1, 1));
    assert_eq!(app.mailer.recipients().await, vec!["d3@example.test"]);

    app.mailer.accept_recipient("d1@example.test").await;
    let retried_at = FIXED_REQUESTED_AT + 60_000;
    let retry = handler
        .handle(
            SaveRosterBuilder::new()
                .assign("2025-01-06", "d1")
                .assign("2025-01-07", "d3")
                .requested_at(retried_at)
                .build(),
        )
        .await
        .unwrap();
    let notifications = retry.notifications.unwrap();
    assert_eq!((notifications.total_drivers, notifications.sent), (1, 1));

    let recipients = app.mailer.recipients().await;
    assert_eq!(recipients, vec!["d3@example.test", "d1@example.test"]);
    let sent = app.mailer.sent.lock().await;
    assert!(sent[1].html.contains("Monday, January 6"));
    assert!(!sent[1].html.contains("Tuesday, January 7"));

    let roster = stored(&app).await;
    let stamps: Vec<_> = roster.assignments.iter().map(|a| a.notified_at).collect();
    assert_eq!(stamps, vec![Some(retried_at), Some(FIXED_REQUESTED_AT)]);
}

#[tokio::test]
async fn the_version_grows_by_one_per_save_regardless_of_notifications() {
    let app = make_test_app();
    let handler = &app.state.save_handler;
    let statuses = [
        RosterStatus::Draft,
        RosterStatus::Published,
        RosterStatus::Modified,
        RosterStatus::Modified,
    ];

    for (i, status) in statuses.into_iter().enumerate() {
        let outcome = handler
            .handle(
                SaveRosterBuilder::new()
                    .status(status)
                    .assign("2025-01-06", if i % 2 == 0 { "d1" } else { "d3" })
                    .requested_at(FIXED_REQUESTED_AT + i as i64)
                    .build(),
            )
            .await
            .unwrap();
        assert_eq!(outcome.roster.version, i as i64 + 1);
        assert_eq!(stored(&app).await.version, i as i64 + 1);
    }
}

#[tokio::test]
async fn one_unreachable_driver_does_not_block_the_others() {
    let app = make_test_app();
    let outcome = app
        .state
        .save_handler
        .handle(
            SaveRosterBuilder::new()
                .assign("2025-01-06", "d1")
                .assign("2025-01-07", "d2")
                .assign("2025-01-08", "ghost")
                .assign("2025-01-09", "d3")
                .build(),
        )
        .await
        .unwrap();

    let notifications = outcome.notifications.unwrap();
    assert_eq!(notifications.total_drivers, 4);
    assert_eq!((notifications.sent, notifications.failed), (2, 0));
    let notified: Vec<_> = outcome
        .roster
        .assignments
        .iter()
        .filter(|a| a.is_notified())
        .map(|a| a.driver_id.as_str())
        .collect();
    assert_eq!(notified, vec!["d1", "d3"]);
}

#[tokio::test]
async fn a_modified_roster_tells_only_the_new_driver_what_changed() {
    let app = make_test_app();
    let handler = &app.state.save_handler;
    handler
        .handle(SaveRosterBuilder::new().assign("2025-01-06", "d1").build())
        .await
        .unwrap();

    let preview = app
        .state
        .preview_handler
        .handle(PreviewRosterChanges {
            week_start: day("2025-01-06"),
            assignments: vec![AssignmentInput {
                date: day("2025-01-06"),
                driver_id: "d3".into(),
            }],
            actor: Some(Actor::new(FIXED_USER_ID, FIXED_ORGANIZATION_ID)),
        })
        .await
        .unwrap();
    assert_eq!(preview.len(), 1);

    let outcome = handler
        .handle(
            SaveRosterBuilder::new()
                .status(RosterStatus::Modified)
                .assign("2025-01-06", "d3")
                .build(),
        )
        .await
        .unwrap();

    assert_eq!(outcome.roster.version, 2);
    assert_eq!(outcome.roster.published_by.as_deref(), Some(FIXED_USER_ID));
    let sent = app.mailer.sent.lock().await;
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[1].to, "d3@example.test");
    assert!(sent[1].subject.contains("your schedule changed"));

    let loaded = app
        .state
        .load_handler
        .handle(LoadRosterForWeek {
            week_start: day("2025-01-06"),
            actor: Some(Actor::new(FIXED_USER_ID, FIXED_ORGANIZATION_ID)),
        })
        .await
        .unwrap();
    assert_eq!(loaded.roster, outcome.roster);
    let reassigned = &loaded.roster.assignments[0];
    assert_eq!(reassigned.previous_driver_id.as_deref(), Some("d1"));
}
