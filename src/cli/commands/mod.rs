pub mod dashboard;
pub mod expenses;
pub mod goals;
pub mod mirror_sync;
pub mod onboarding;
pub mod report;
pub mod settings;
pub mod statistics;
