//! # fest-service
//!
//! Application layer: the inbox aggregator, the JENbucks ledger, direct
//! messaging, and RSVP toggling, expressed as services over the store ports
//! defined in `fest-core`. Services borrow a [`services::ServiceContext`]
//! and hold no state of their own; everything they report is recomputed
//! from the current snapshots.

pub mod dto;
pub mod services;

pub use services::{
    InboxService, LedgerService, MessagingService, RsvpService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult,
};
