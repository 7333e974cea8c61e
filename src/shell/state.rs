use crate::modules::rosters::adapters::outbound::driver_directory::DriverDirectory;
use crate::modules::rosters::adapters::outbound::driver_directory_in_memory::InMemoryDriverDirectory;
use crate::modules::rosters::adapters::outbound::email_driver_notifier::EmailDriverNotifier;
use crate::modules::rosters::adapters::outbound::roster_store_in_memory::InMemoryRosterStore;
use crate::modules::rosters::use_cases::load_roster_for_week::handler::LoadRosterForWeekHandler;
use crate::modules::rosters::use_cases::preview_roster_changes::handler::PreviewRosterChangesHandler;
use crate::modules::rosters::use_cases::save_roster::dispatcher::NotificationDispatcher;
use crate::modules::rosters::use_cases::save_roster::handler::SaveRosterHandler;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct AppState {
    pub drivers: Arc<dyn DriverDirectory + Send + Sync>,
    pub save_handler:
        Arc<SaveRosterHandler<InMemoryRosterStore, InMemoryDriverDirectory, EmailDriverNotifier>>,
    pub load_handler: Arc<LoadRosterForWeekHandler<InMemoryRosterStore, InMemoryDriverDirectory>>,
    pub preview_handler: Arc<PreviewRosterChangesHandler<InMemoryRosterStore>>,
}

impl AppState {
    pub fn new(
        store: Arc<InMemoryRosterStore>,
        directory: Arc<InMemoryDriverDirectory>,
        notifier: EmailDriverNotifier,
        send_timeout: Duration,
    ) -> Self {
        let dispatcher = Arc::new(NotificationDispatcher::new(Arc::new(notifier), send_timeout));
        let save_handler = SaveRosterHandler::new(store.clone(), directory.clone(), dispatcher);
        Self {
            drivers: directory.clone(),
            save_handler: Arc::new(save_handler),
            load_handler: Arc::new(LoadRosterForWeekHandler::new(store.clone(), directory)),
            preview_handler: Arc::new(PreviewRosterChangesHandler::new(store)),
        }
    }
}
