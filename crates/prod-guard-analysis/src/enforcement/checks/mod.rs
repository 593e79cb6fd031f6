//! Policy checks: five independent verification units.

pub mod artifact;
pub mod cors;
pub mod load;
pub mod network;
pub mod orchestrator;
pub mod rate_limit;
pub mod security;
pub mod types;

pub use cors::CorsCheck;
pub use load::LoadCheck;
pub use network::NetworkCheck;
pub use orchestrator::CheckOrchestrator;
pub use rate_limit::RateLimitCheck;
pub use security::SecurityCheck;
pub use types::*;
