//! Seeding result dumps.
//!
//! A result is saved as pretty-printed JSON at `<dumps dir>/<scenario>.json`
//! so a load run can pick up the users a seeding run created.

use std::fs;
use std::path::{Path, PathBuf};

use super::result::SeedsResult;
use crate::error::ClientError;

/// Path of the dump file of `scenario`.
pub fn dump_path(scenario: &str, dumps_dir: &Path) -> PathBuf {
    dumps_dir.join(format!("{scenario}.json"))
}

/// Write `result` to the scenario's dump file, creating `dumps_dir` if needed.
///
/// Returns the path written.
pub fn save_seeds_result(
    result: &SeedsResult,
    scenario: &str,
    dumps_dir: &Path,
) -> Result<PathBuf, ClientError> {
    fs::create_dir_all(dumps_dir)?;

    let path = dump_path(scenario, dumps_dir);
    fs::write(&path, serde_json::to_string_pretty(result)?)?;

    tracing::info!(scenario, path = %path.display(), users = result.users.len(), "Seeds saved");
    Ok(path)
}

/// Read the scenario's dump file.
///
/// # Errors
///
/// `ClientError::Io` if the file does not exist (the scenario was never seeded),
/// `ClientError::Decode` if it is not a seeds result.
pub fn load_seeds_result(scenario: &str, dumps_dir: &Path) -> Result<SeedsResult, ClientError> {
    let path = dump_path(scenario, dumps_dir);
    let contents = fs::read_to_string(&path)?;
    let result: SeedsResult = serde_json::from_str(&contents)?;

    tracing::info!(scenario, path = %path.display(), users = result.users.len(), "Seeds loaded");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seeds::result::{SeedAccountResult, SeedOperationResult, SeedUserResult};

    #[test]
    fn saved_result_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let dumps_dir = dir.path().join("dumps");
        let mut account = SeedAccountResult::new("account-1");
        account.purchase_operations.push(SeedOperationResult {
            operation_id: "operation-1".to_string(),
        });
        let result = SeedsResult {
            users: vec![SeedUserResult {
                user_id: "user-1".to_string(),
                deposit_accounts: Vec::new(),
                savings_accounts: Vec::new(),
                debit_card_accounts: Vec::new(),
                credit_card_accounts: vec![account],
            }],
        };

        let path = save_seeds_result(&result, "existing_user_get_operations", &dumps_dir).unwrap();

        assert_eq!(path, dumps_dir.join("existing_user_get_operations.json"));
        let loaded = load_seeds_result("existing_user_get_operations", &dumps_dir).unwrap();
        assert_eq!(loaded, result);
    }

    #[test]
    fn missing_dump_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();

        let err = load_seeds_result("never_seeded", dir.path()).unwrap_err();
        assert!(matches!(err, ClientError::Io(_)));
    }
}
