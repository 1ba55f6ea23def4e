pub mod list;

pub use list::IncidentsList;
