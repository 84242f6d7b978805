// asana-backlink: comment on Asana tasks linked from GitHub
//
// This is the library root. The binary in main.rs wires these together:
// github resolves the event, references finds new task links, pipeline
// drives the comments through an asana::traits::TaskCommenter.

pub mod asana;
pub mod config;
pub mod github;
pub mod output;
pub mod pipeline;
pub mod references;
