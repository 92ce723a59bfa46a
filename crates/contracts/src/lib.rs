//! DTOs shared between the dashboard backend and any presentation client.

pub mod dashboards;
pub mod shared;
