// Pipelines — end-to-end workflows composed from the other modules.

pub mod extract;
pub mod notify;
