//! Platform commands.

use super::{print_json, selected_platforms};
use buzzcast::{BuzzcastConfig, BuzzcastResult, CredentialCheck, PlatformInfo, RunStatus, build_publisher};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CredentialReport {
    platforms: PlatformInfo,
    credential_checks: BTreeMap<String, CredentialCheck>,
}

/// Test credentials for the selected platforms.
pub async fn check_credentials(
    config: BuzzcastConfig,
    platforms: Vec<String>,
) -> BuzzcastResult<RunStatus> {
    let selected = selected_platforms(&config, &platforms);
    let publisher = build_publisher(&config, &selected, config.publish.dry_run)?;
    let checks = publisher.test_credentials().await;

    let passed = checks.values().filter(|c| c.success).count();
    let status = if passed > 0 && passed == checks.len() {
        RunStatus::Success
    } else if passed > 0 {
        RunStatus::Partial
    } else {
        RunStatus::AllFailed
    };

    print_json("credential report", &CredentialReport {
        platforms: publisher.platform_info(),
        credential_checks: checks,
    })?;
    Ok(status)
}

/// Validate `text` against the selected platforms.
///
/// Validation never needs credentials, so posters are built in dry-run mode.
pub fn validate_text(
    config: BuzzcastConfig,
    text: &str,
    platforms: Vec<String>,
) -> BuzzcastResult<RunStatus> {
    let selected = selected_platforms(&config, &platforms);
    let publisher = build_publisher(&config, &selected, true)?;
    let validation = publisher.validate_post(text);
    print_json("validation", &validation)?;

    Ok(if validation.is_valid {
        RunStatus::Success
    } else {
        RunStatus::ValidationFailed
    })
}
