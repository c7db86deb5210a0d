pub mod directory;
pub mod metrics;
pub mod seats;
pub mod teams;

pub use directory::DirectoryClient;
pub use metrics::MetricsClient;
pub use seats::SeatsClient;
pub use teams::TeamsClient;
