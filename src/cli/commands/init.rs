//! `clinic init`: write a starter `clinic.toml`

use crate::cli::{EXIT_CONFIG, EXIT_OK};
use clap::Args;
use std::fs;
use std::path::Path;

const MINIMAL: &str = r#"# Clinic adapter configuration
# Leave backend.base_url unset to work against built-in mock data.

[application]
log_level = "info"

[backend]
# base_url = "https://emr.example.org/api"
# csrf_header = "X-CSRF-Token"
# csrf_token = "${CLINIC_CSRF_TOKEN}"
timeout_seconds = 30

[mock]
simulate_latency = true
"#;

const ANNOTATED: &str = r#"# Clinic adapter configuration
#
# Every section and key is optional. Values can reference environment
# variables with ${VAR_NAME}, and CLINIC_<SECTION>_<KEY> variables override
# the file (e.g. CLINIC_BACKEND_BASE_URL).

[application]
# trace, debug, info, warn or error; RUST_LOG takes precedence
log_level = "info"

# --- EMR backend ------------------------------------------------------------
[backend]
# Base URL of the EMR REST API. Unset or empty selects mock mode.
# base_url = "https://emr.example.org/api"

# Anti-forgery header; sent only when a non-empty token is also configured
# csrf_header = "X-CSRF-Token"
# csrf_token = "${CLINIC_CSRF_TOKEN}"

# Seconds, 1 to 300
timeout_seconds = 30

# Keep session cookies and send them with every request
send_credentials = true

# --- Fixtures (used while base_url is unset) --------------------------------
[mock]
# Sleep before returning fixture data so loading states are visible
simulate_latency = true

# Milliseconds, 0 to 10000
read_delay_ms = 300
status_update_delay_ms = 200
note_save_delay_ms = 250
inbox_ack_delay_ms = 150
message_send_delay_ms = 200
report_run_delay_ms = 400

# --- Log file -----------------------------------------------------------------
[logging]
# JSON lines next to the console output
local_enabled = false
local_path = "./logs"
# daily, hourly or never
local_rotation = "daily"
"#;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// File to create
    #[arg(short, long, default_value = "clinic.toml")]
    pub output: String,

    /// Include every option with explanatory comments
    #[arg(long)]
    pub with_examples: bool,

    /// Replace the file if it already exists
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    fn template(&self) -> &'static str {
        if self.with_examples {
            ANNOTATED
        } else {
            MINIMAL
        }
    }

    pub async fn execute(&self) -> anyhow::Result<i32> {
        let target = Path::new(&self.output);
        if target.exists() && !self.force {
            eprintln!("❌ {} already exists (pass --force to replace it)", target.display());
            return Ok(EXIT_CONFIG);
        }

        fs::write(target, self.template())?;
        tracing::info!(output = %target.display(), annotated = self.with_examples, "Configuration written");

        println!("✅ Wrote {}", target.display());
        println!();
        println!("  clinic patients search            # mock data until base_url is set");
        println!("  clinic -c {} validate-config", target.display());
        Ok(EXIT_OK)
    }
}
