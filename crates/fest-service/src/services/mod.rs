//! Business logic services
//!
//! This module contains the service layer implementations that handle
//! validation, preconditions, and orchestration of domain operations.

pub mod context;
pub mod error;
pub mod inbox;
pub mod ledger;
pub mod messaging;
pub mod rsvp;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use inbox::{build_inbox, InboxService, InboxSources};
pub use ledger::LedgerService;
pub use messaging::MessagingService;
pub use rsvp::RsvpService;
