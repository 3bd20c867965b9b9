//! Venue Delete Trigger
//!
//! Browser-side handler for the "delete venue" button: one click sends
//! `DELETE /venues/{id}`, then the page either goes home or alerts.

pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod models;
pub mod page;
pub mod trigger;

pub use commands::{venue_path, FetchVenueApi, VenueApi};
pub use config::TriggerConfig;
pub use error::DeleteError;
pub use models::{DeletionResult, VenueId, VenueReply};
pub use page::{BrowserPage, Page};
pub use trigger::{
    mount, AlertReason, ClickEvent, ClickListener, ClickOutcome, ClickTask, DeleteTrigger,
    TriggerElement,
};
