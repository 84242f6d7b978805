// Asana — the remote task tracker we post back-reference comments to.
//
// The TaskCommenter trait is what the pipeline talks to. AsanaClient is the
// live implementation; DryRunCommenter only logs.

pub mod client;
pub mod traits;
