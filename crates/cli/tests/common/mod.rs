//! Shared test utilities for envget integration tests.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - Variables under test use the `ENVGET_TEST_` prefix and are set per command,
//!   never on the test process itself.

use assert_cmd::Command;

/// Returns a hermetic `envget` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `ENVGET_OUTPUT` and `RUST_LOG` are cleared so output and stderr are predictable.
/// - Any `ENVGET_TEST_*` variable leaking from the host is cleared.
pub fn envget_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("envget");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");
    cmd.env_remove("ENVGET_OUTPUT");
    cmd.env_remove("RUST_LOG");

    for (key, _) in std::env::vars() {
        if key.starts_with("ENVGET_TEST_") {
            cmd.env_remove(&key);
        }
    }

    cmd
}
