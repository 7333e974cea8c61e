use crate::modules::rosters::adapters::outbound::driver_directory_in_memory::InMemoryDriverDirectory;
use crate::modules::rosters::adapters::outbound::email_driver_notifier::EmailDriverNotifier;
use crate::modules::rosters::adapters::outbound::roster_store_in_memory::InMemoryRosterStore;
use crate::shared::infrastructure::mailer::in_memory::InMemoryMailer;
use crate::shell::state::AppState;
use crate::tests::fixtures::drivers::fleet;
use std::sync::Arc;
use std::time::Duration;

pub struct TestApp {
    pub state: AppState,
    pub store: Arc<InMemoryRosterStore>,
    pub mailer: Arc<InMemoryMailer>,
}

pub fn make_test_app() -> TestApp {
    make_test_app_with(InMemoryRosterStore::new(), fleet())
}

pub fn make_offline_store_app() -> TestApp {
    let mut store = InMemoryRosterStore::new();
    store.toggle_offline();
    make_test_app_with(store, fleet())
}

pub fn make_test_app_with(
    store: InMemoryRosterStore,
    directory: InMemoryDriverDirectory,
) -> TestApp {
    let store = Arc::new(store);
    let mailer = Arc::new(InMemoryMailer::new());
    let notifier = EmailDriverNotifier::new(mailer.clone(), "roster@example.test", "Roster");
    let state = AppState::new(
        store.clone(),
        Arc::new(directory),
        notifier,
        Duration::from_secs(1),
    );
    TestApp {
        state,
        store,
        mailer,
    }
}
