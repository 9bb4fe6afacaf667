//! Personnel registration and profile views.

pub mod service;
pub mod view;

pub use service::{PersonnelService, RegisterPersonnel};
pub use view::{LeaveSummary, PersonnelProfile, leave_url};
