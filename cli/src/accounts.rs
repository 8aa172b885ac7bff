//! Loading the exported source-chain account list.

use anyhow::Context;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use consolidate_types::Account;

/// Read a JSON array of accounts, keeping file order.
pub fn load_accounts(path: &Path) -> anyhow::Result<Vec<Account>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let accounts: Vec<Account> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing accounts from {}", path.display()))?;
    tracing::debug!(count = accounts.len(), path = %path.display(), "loaded accounts");
    Ok(accounts)
}
