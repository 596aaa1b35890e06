pub mod roster_service;

pub use roster_service::{RosterError, RosterResult, RosterService};
