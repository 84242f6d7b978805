use std::env;
use std::path::PathBuf;

use anyhow::Result;

/// Central configuration loaded from environment variables.
///
/// GitHub Actions passes step inputs as `INPUT_<NAME>` variables (name
/// upper-cased, hyphens kept), so `asana-pat` arrives as `INPUT_ASANA-PAT`.
/// Plain variables are accepted as a fallback for local runs, and a .env file
/// is loaded automatically at startup via dotenvy.
pub struct Config {
    /// Asana personal access token, surrounding whitespace stripped
    pub asana_pat: String,
    /// Overrides the default "{login} referenced in: " comment prefix.
    /// Kept verbatim so a trailing space separates it from the URL.
    pub comment_prefix: Option<String>,
    /// Asana REST API base URL (defaults to https://app.asana.com/api/1.0)
    pub asana_api_url: String,
    /// Path to the webhook payload written by the runner
    pub event_path: Option<PathBuf>,
    /// True when running inside a GitHub Actions runner
    pub github_actions: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Nothing is required at load time — call the `require_*` methods
    /// before the operations that need them.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the configuration from any variable source.
    ///
    /// `lookup` returns the raw value of a variable, or None when unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            asana_pat: action_input(&lookup, "asana-pat", "ASANA_PAT")
                .map(|pat| pat.trim().to_string())
                .unwrap_or_default(),
            comment_prefix: action_input(&lookup, "comment-prefix", "ASANA_COMMENT_PREFIX"),
            asana_api_url: non_empty(&lookup, "ASANA_API_URL")
                .unwrap_or_else(|| crate::asana::client::DEFAULT_ASANA_API_URL.to_string()),
            event_path: non_empty(&lookup, "GITHUB_EVENT_PATH").map(PathBuf::from),
            github_actions: lookup("GITHUB_ACTIONS").is_some_and(|v| v == "true"),
        })
    }

    /// Check that the Asana token is configured.
    /// Call this before building an AsanaClient.
    pub fn require_asana(&self) -> Result<()> {
        if self.asana_pat.is_empty() {
            anyhow::bail!(
                "Asana personal access token (asana-pat) not specified.\n\
                 Pass it as the `asana-pat` input or set ASANA_PAT."
            );
        }
        Ok(())
    }

    /// Check what a `notify` run needs. Dry runs never talk to Asana, so
    /// they go ahead without a token.
    pub fn require_notify(&self, dry_run: bool) -> Result<()> {
        if dry_run {
            return Ok(());
        }
        self.require_asana()
    }

    /// Resolve the event payload path, preferring an explicit override.
    pub fn require_event_path(&self, override_path: Option<PathBuf>) -> Result<PathBuf> {
        override_path
            .or_else(|| self.event_path.clone())
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "GITHUB_EVENT_PATH not set. Run inside GitHub Actions or pass --event-path."
                )
            })
    }
}

/// True when the GITHUB_ACTIONS marker variable is set by the runner.
pub fn running_in_actions() -> bool {
    env::var("GITHUB_ACTIONS").is_ok_and(|v| v == "true")
}

/// Variable name GitHub uses for a step input: `asana-pat` -> `INPUT_ASANA-PAT`.
pub fn input_var_name(name: &str) -> String {
    format!("INPUT_{}", name.to_uppercase().replace(' ', "_"))
}

/// Read a step input, falling back to a plain env var. Empty values count as unset.
fn action_input(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    fallback: &str,
) -> Option<String> {
    non_empty(lookup, &input_var_name(name)).or_else(|| non_empty(lookup, fallback))
}

fn non_empty(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    lookup(name).filter(|v| !v.trim().is_empty())
}
