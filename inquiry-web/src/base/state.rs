use inquiry::notify::{Notification, NotificationQueue};
use inquiry::InquiryConfig;
use log::error;
use uuid::Uuid;

use crate::vars::load_config;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    Unknown,
    Checking,
    Authenticated,
    Anonymous,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated)
    }
}

#[derive(Clone, Debug)]
pub struct GlobalState {
    pub config: Option<InquiryConfig>,
    pub session: Session,
    pub notifications: NotificationQueue,
}

impl GlobalState {
    fn new() -> Self {
        let config = match load_config() {
            Ok(config) => Some(config),
            Err(err) => {
                error!("Inquiry configuration unavailable: {}", err);
                None
            }
        };
        Self::with_config(config)
    }

    pub fn with_config(config: Option<InquiryConfig>) -> Self {
        Self {
            config,
            session: Session::Unknown,
            notifications: NotificationQueue::new(),
        }
    }

    pub fn notify(&mut self, notification: Notification) -> Uuid {
        self.notifications.push(notification)
    }

    pub fn dismiss(&mut self, id: Uuid) {
        self.notifications.dismiss(id);
    }
}

impl Default for GlobalState {
    fn default() -> Self {
        Self::new()
    }
}
