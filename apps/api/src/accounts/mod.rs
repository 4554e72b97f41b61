// Accounts: the in-memory directory, role navigation, job seeker profiles,
// and admin user management.
// The acting account is passed explicitly on every request (`account_id`) and
// resolved here; nothing reads ambient session state.

pub mod directory;
pub mod handlers;
pub mod navigation;
pub mod profile;

use serde::Deserialize;
use tracing::warn;

use crate::errors::AppError;
use crate::models::account::{Account, Role};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AccountQuery {
    pub account_id: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct OptionalAccountQuery {
    pub account_id: Option<String>,
}

/// Looks up the acting account. Unknown ids are 401, inactive accounts 403.
pub async fn resolve_actor(state: &AppState, account_id: &str) -> Result<Account, AppError> {
    let account = state
        .accounts
        .get(account_id)
        .await
        .ok_or(AppError::Unauthorized)?;
    if !account.is_active() {
        warn!(account_id, "rejected request from inactive account");
        return Err(AppError::Forbidden(format!(
            "Account {account_id} is inactive"
        )));
    }
    Ok(account)
}

/// Fails with 403 unless the account holds one of `roles`.
pub fn require_role(account: &Account, roles: &[Role]) -> Result<(), AppError> {
    if account.has_any_role(roles) {
        return Ok(());
    }
    warn!(
        account_id = %account.id,
        role = account.role.as_str(),
        "rejected request for role"
    );
    Err(AppError::Forbidden(format!(
        "User {} with role '{}' is not authorized for this action",
        account.id,
        account.role.as_str()
    )))
}
