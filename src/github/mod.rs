// GitHub — the host side: the triggering event payload and workflow commands.

pub mod event;
pub mod workflow;
