//! Port traits. API boundaries for the hexagon.
//!
//! - Inbound: Called by the tool transport into the application
//! - Outbound: Called by application into infrastructure

pub mod inbound;
pub mod outbound;
pub mod task_tracker;

pub use inbound::InputPort;
pub use outbound::ProjectNamePort;
pub use task_tracker::TaskTrackerPort;
