use crate::modules::rosters::adapters::outbound::driver_notifier::{
    DriverNotifier, NotificationError, NotificationReceipt, NotificationRequest,
};
use crate::modules::rosters::adapters::outbound::email_templates::{
    ScheduleEmail, render_schedule_email,
};
use crate::shared::infrastructure::mailer::{Mailer, OutgoingEmail};
use async_trait::async_trait;
use std::sync::Arc;

/// Sends schedule notifications as templated HTML email.
pub struct EmailDriverNotifier {
    mailer: Arc<dyn Mailer>,
    from: String,
    app_name: String,
}

impl EmailDriverNotifier {
    pub fn new(
        mailer: Arc<dyn Mailer>,
        from: impl Into<String>,
        app_name: impl Into<String>,
    ) -> Self {
        Self {
            mailer,
            from: from.into(),
            app_name: app_name.into(),
        }
    }
}

#[async_trait]
impl DriverNotifier for EmailDriverNotifier {
    async fn send_notification(
        &self,
        request: NotificationRequest,
    ) -> Result<NotificationReceipt, NotificationError> {
        let rendered = render_schedule_email(&ScheduleEmail {
            app_name: &self.app_name,
            driver_name: &request.name,
            dates: &request.dates,
            week_start: request.week_start,
            is_change: request.is_change,
        });

        let notification_id = self
            .mailer
            .send(OutgoingEmail {
                from: self.from.clone(),
                to: request.email,
                subject: rendered.subject,
                html: rendered.html,
            })
            .await?;

        Ok(NotificationReceipt { notification_id })
    }
}
