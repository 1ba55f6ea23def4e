pub mod aggregate;

pub use aggregate::{Incident, IncidentId, IncidentStatus};
