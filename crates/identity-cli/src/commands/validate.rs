//! Profile validation.

use identity_core::profile::fixture;
use identity_core::{load_profile, parse_profile};

use super::common::CliResult;
use crate::GlobalArgs;

pub fn run(global: &GlobalArgs) -> CliResult {
    let profile = match &global.profile {
        Some(path) => load_profile(path)?,
        // fixtures are checked the same way a loaded file is
        None => parse_profile(&serde_json::to_string(&fixture(&global.fixture)?)?)?,
    };

    if global.json {
        println!(
            "{}",
            serde_json::json!({ "valid": true, "id": profile.id, "paid": profile.is_paid })
        );
    } else {
        println!("ok: profile {} ({}) is valid", profile.id, profile.name);
    }
    Ok(())
}
