//! Notification texts.

use crate::health::state::LinkStatus;

pub fn started(device: &str, status: LinkStatus) -> String {
    format!("{device} monitoring service has started.\nInitial status is {status}.")
}

pub fn status_changed(device: &str, status: LinkStatus) -> String {
    format!("Current {device} status is {status}")
}

pub fn terminating(device: &str, signal: impl std::fmt::Display) -> String {
    format!("☠ {device} monitor service terminating on signal '{signal}' ☠")
}
