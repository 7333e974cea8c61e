pub mod shared {
    pub mod core {
        pub mod actor;
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod mailer;
    }
}

pub mod modules {
    pub mod rosters {
        pub mod core {
            pub mod diff;
            pub mod driver;
            pub mod notification_outcome;
            pub mod roster;
            pub mod week;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod save_roster {
                pub mod command;
                pub mod compose;
                pub mod composition;
                pub mod dispatcher;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod load_roster_for_week {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod preview_roster_changes {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_active_drivers {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql_types;
            }
            pub mod mappers {
                pub mod driver_row;
                pub mod roster_row;
            }
            pub mod outbound {
                pub mod driver_directory;
                pub mod driver_directory_in_memory;
                pub mod driver_notifier;
                pub mod email_driver_notifier;
                pub mod email_templates;
                pub mod roster_store;
                pub mod roster_store_in_memory;
            }
        }
    }
}

pub mod shell;
