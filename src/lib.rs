// Ambient concerns
pub mod config;
pub mod error;
pub mod metrics;
pub mod telemetry;

// Collaborator seams
pub mod delivery;
pub mod template;

// Render pipeline
pub mod notification;
