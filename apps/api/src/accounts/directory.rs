//! In-memory account directory.
//!
//! Accounts are seeded from an embedded fixture. A write lock is held for the
//! whole read-modify-write of every mutation, so a toggle on one account is
//! atomic with respect to other requests.

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Deserialize;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::accounts::profile::{self, ProfileUpdate};
use crate::errors::AppError;
use crate::models::account::{Account, AccountStatus, Role};
use crate::saved::index::{self, ToggleOutcome};

const EMBEDDED_ACCOUNTS: &str = include_str!("../../fixtures/accounts.json");

#[derive(Debug, Error, PartialEq)]
pub enum DirectoryError {
    #[error("account {0} not found")]
    NotFound(String),

    #[error("email '{0}' is already registered")]
    DuplicateEmail(String),

    #[error("{0}")]
    InvalidField(String),
}

impl From<DirectoryError> for AppError {
    fn from(err: DirectoryError) -> Self {
        match err {
            DirectoryError::NotFound(_) => AppError::NotFound(err.to_string()),
            DirectoryError::DuplicateEmail(_) => AppError::Conflict(err.to_string()),
            DirectoryError::InvalidField(msg) => AppError::Validation(msg),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewAccount {
    pub email: String,
    pub name: String,
    pub role: Role,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AccountUpdate {
    pub email: Option<String>,
    pub name: Option<String>,
    pub role: Option<Role>,
    pub status: Option<AccountStatus>,
}

/// Admin user-list filter. `role` and `status` accept `all`; `q` matches name
/// or email case-insensitively.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AccountFilter {
    pub q: Option<String>,
    pub role: Option<String>,
    pub status: Option<String>,
}

impl AccountFilter {
    pub fn matches(&self, account: &Account) -> bool {
        if let Some(q) = self.q.as_deref().filter(|q| !q.is_empty()) {
            let q = q.to_lowercase();
            if !account.name.to_lowercase().contains(&q)
                && !account.email.to_lowercase().contains(&q)
            {
                return false;
            }
        }
        if let Some(role) = facet(&self.role) {
            if account.role.as_str() != role {
                return false;
            }
        }
        if let Some(status) = facet(&self.status) {
            if account.status.as_str() != status {
                return false;
            }
        }
        true
    }
}

fn facet(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("all"))
}

/// Keeps directory order.
pub fn filter_accounts(accounts: Vec<Account>, filter: &AccountFilter) -> Vec<Account> {
    accounts.into_iter().filter(|a| filter.matches(a)).collect()
}

#[derive(Debug, Default)]
pub struct AccountDirectory {
    accounts: RwLock<Vec<Account>>,
}

impl AccountDirectory {
    pub fn new(accounts: Vec<Account>) -> Self {
        let accounts = accounts.into_iter().map(enforce_saved_invariant).collect();
        Self {
            accounts: RwLock::new(accounts),
        }
    }

    pub fn from_fixture() -> Result<Self> {
        let accounts: Vec<Account> =
            serde_json::from_str(EMBEDDED_ACCOUNTS).context("account fixture is not valid JSON")?;
        info!("Seeded {} accounts from fixture", accounts.len());
        Ok(Self::new(accounts))
    }

    pub async fn get(&self, id: &str) -> Option<Account> {
        self.accounts.read().await.iter().find(|a| a.id == id).cloned()
    }

    pub async fn list(&self) -> Vec<Account> {
        self.accounts.read().await.clone()
    }

    pub async fn create(&self, new: NewAccount) -> Result<Account, DirectoryError> {
        let email = required("email", &new.email)?;
        let name = required("name", &new.name)?;

        let mut accounts = self.accounts.write().await;
        ensure_unique_email(&accounts, &email, None)?;

        let account = Account {
            id: Uuid::new_v4().to_string(),
            email,
            name,
            role: new.role,
            status: AccountStatus::Active,
            created_at: Utc::now().date_naive(),
            saved_candidates: Default::default(),
            profile: None,
        };
        accounts.push(account.clone());
        info!(account_id = %account.id, role = account.role.as_str(), "account created");
        Ok(account)
    }

    pub async fn update(&self, id: &str, update: AccountUpdate) -> Result<Account, DirectoryError> {
        let email = update.email.as_deref().map(|e| required("email", e)).transpose()?;
        let name = update.name.as_deref().map(|n| required("name", n)).transpose()?;

        let mut accounts = self.accounts.write().await;
        if let Some(email) = &email {
            ensure_unique_email(&accounts, email, Some(id))?;
        }
        let account = find_mut(&mut accounts, id)?;

        if let Some(email) = email {
            account.email = email;
        }
        if let Some(name) = name {
            account.name = name;
        }
        if let Some(role) = update.role {
            account.role = role;
        }
        if let Some(status) = update.status {
            account.status = status;
        }
        *account = enforce_saved_invariant(account.clone());
        info!(account_id = %id, "account updated");
        Ok(account.clone())
    }

    pub async fn delete(&self, id: &str) -> Result<(), DirectoryError> {
        let mut accounts = self.accounts.write().await;
        let before = accounts.len();
        accounts.retain(|a| a.id != id);
        if accounts.len() == before {
            return Err(DirectoryError::NotFound(id.to_string()));
        }
        info!(account_id = %id, "account deleted");
        Ok(())
    }

    pub async fn toggle_status(&self, id: &str) -> Result<Account, DirectoryError> {
        let mut accounts = self.accounts.write().await;
        let account = find_mut(&mut accounts, id)?;
        account.status = account.status.flipped();
        info!(account_id = %id, status = ?account.status, "account status toggled");
        Ok(account.clone())
    }

    /// Merges a profile edit into the account's profile, creating it on first save.
    pub async fn update_profile(
        &self,
        id: &str,
        update: ProfileUpdate,
    ) -> Result<Account, DirectoryError> {
        let mut accounts = self.accounts.write().await;
        let account = find_mut(&mut accounts, id)?;
        let current = account.profile.clone().unwrap_or_default();
        account.profile = Some(profile::apply_update(current, update)?);
        info!(account_id = %id, "profile updated");
        Ok(account.clone())
    }

    /// Applies the saved-set toggle to one account and stores the result.
    pub async fn toggle_saved(
        &self,
        id: &str,
        candidate_id: &str,
    ) -> Result<ToggleOutcome, DirectoryError> {
        let mut accounts = self.accounts.write().await;
        let account = find_mut(&mut accounts, id)?;
        let (updated, outcome) = index::toggle(account.clone(), candidate_id);
        *account = updated;
        info!(account_id = %id, candidate_id, ?outcome, "saved candidate toggled");
        Ok(outcome)
    }
}

fn find_mut<'a>(accounts: &'a mut [Account], id: &str) -> Result<&'a mut Account, DirectoryError> {
    accounts
        .iter_mut()
        .find(|a| a.id == id)
        .ok_or_else(|| DirectoryError::NotFound(id.to_string()))
}

fn required(field: &str, value: &str) -> Result<String, DirectoryError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DirectoryError::InvalidField(format!("{field} cannot be empty")));
    }
    Ok(trimmed.to_string())
}

fn ensure_unique_email(
    accounts: &[Account],
    email: &str,
    except_id: Option<&str>,
) -> Result<(), DirectoryError> {
    let taken = accounts
        .iter()
        .any(|a| a.email.eq_ignore_ascii_case(email) && Some(a.id.as_str()) != except_id);
    if taken {
        return Err(DirectoryError::DuplicateEmail(email.to_string()));
    }
    Ok(())
}

/// Only employers may hold saved candidates.
fn enforce_saved_invariant(mut account: Account) -> Account {
    if !account.is_employer() {
        account.saved_candidates.clear();
    }
    account
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_account(email: &str, role: Role) -> NewAccount {
        NewAccount {
            email: email.to_string(),
            name: "New Person".to_string(),
            role,
        }
    }

    #[tokio::test]
    async fn test_fixture_seeds_five_accounts() {
        let dir = AccountDirectory::from_fixture().unwrap();
        let accounts = dir.list().await;
        assert_eq!(accounts.len(), 5);
        let employer = dir.get("2").await.unwrap();
        assert_eq!(employer.role, Role::Employer);
        assert_eq!(employer.saved_candidates.len(), 3);
        assert_eq!(dir.get("5").await.unwrap().status, AccountStatus::Inactive);
    }

    #[tokio::test]
    async fn test_new_clears_saved_for_non_employers() {
        let mut seed: Vec<Account> =
            serde_json::from_str(EMBEDDED_ACCOUNTS).unwrap();
        seed[0].saved_candidates.insert("2".to_string());
        let dir = AccountDirectory::new(seed);
        assert!(dir.get("1").await.unwrap().saved_candidates.is_empty());
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_active_status() {
        let dir = AccountDirectory::from_fixture().unwrap();
        let created = dir.create(new_account("  new@example.com ", Role::JobSeeker)).await.unwrap();
        assert_eq!(created.email, "new@example.com");
        assert_eq!(created.status, AccountStatus::Active);
        assert!(!created.id.is_empty());
        assert_eq!(dir.list().await.len(), 6);
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_and_blank_email() {
        let dir = AccountDirectory::from_fixture().unwrap();
        assert_eq!(
            dir.create(new_account("JANE@example.com", Role::JobSeeker)).await.unwrap_err(),
            DirectoryError::DuplicateEmail("JANE@example.com".to_string())
        );
        assert!(matches!(
            dir.create(new_account("   ", Role::JobSeeker)).await.unwrap_err(),
            DirectoryError::InvalidField(_)
        ));
    }

    #[tokio::test]
    async fn test_update_role_away_from_employer_clears_saved() {
        let dir = AccountDirectory::from_fixture().unwrap();
        let updated = dir
            .update(
                "2",
                AccountUpdate {
                    role: Some(Role::Admin),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.role, Role::Admin);
        assert!(updated.saved_candidates.is_empty());
    }

    #[tokio::test]
    async fn test_update_keeps_own_email() {
        let dir = AccountDirectory::from_fixture().unwrap();
        let updated = dir
            .update(
                "4",
                AccountUpdate {
                    email: Some("jane@example.com".to_string()),
                    name: Some("Jane Doe".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "Jane Doe");
    }

    #[tokio::test]
    async fn test_update_missing_account() {
        let dir = AccountDirectory::from_fixture().unwrap();
        assert_eq!(
            dir.update("nope", AccountUpdate::default()).await.unwrap_err(),
            DirectoryError::NotFound("nope".to_string())
        );
    }

    #[tokio::test]
    async fn test_delete() {
        let dir = AccountDirectory::from_fixture().unwrap();
        dir.delete("4").await.unwrap();
        assert!(dir.get("4").await.is_none());
        assert!(dir.delete("4").await.is_err());
    }

    #[tokio::test]
    async fn test_toggle_status_twice_restores() {
        let dir = AccountDirectory::from_fixture().unwrap();
        assert_eq!(dir.toggle_status("1").await.unwrap().status, AccountStatus::Inactive);
        assert_eq!(dir.toggle_status("1").await.unwrap().status, AccountStatus::Active);
    }

    #[tokio::test]
    async fn test_toggle_saved_persists() {
        let dir = AccountDirectory::from_fixture().unwrap();
        assert_eq!(dir.toggle_saved("2", "1").await.unwrap(), ToggleOutcome::Removed);
        assert!(!dir.get("2").await.unwrap().saved_candidates.contains("1"));
        assert_eq!(dir.toggle_saved("2", "1").await.unwrap(), ToggleOutcome::Saved);
        assert!(dir.get("2").await.unwrap().saved_candidates.contains("1"));
    }

    #[tokio::test]
    async fn test_toggle_saved_for_jobseeker_ignored() {
        let dir = AccountDirectory::from_fixture().unwrap();
        assert_eq!(dir.toggle_saved("1", "2").await.unwrap(), ToggleOutcome::Ignored);
        assert!(dir.get("1").await.unwrap().saved_candidates.is_empty());
    }

    fn filter(q: Option<&str>, role: Option<&str>, status: Option<&str>) -> AccountFilter {
        AccountFilter {
            q: q.map(str::to_string),
            role: role.map(str::to_string),
            status: status.map(str::to_string),
        }
    }

    fn ids(accounts: &[Account]) -> Vec<&str> {
        accounts.iter().map(|a| a.id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_filter_accounts() {
        let dir = AccountDirectory::from_fixture().unwrap();
        let all = dir.list().await;

        assert_eq!(filter_accounts(all.clone(), &AccountFilter::default()).len(), 5);
        assert_eq!(ids(&filter_accounts(all.clone(), &filter(Some("EXAMPLE.com"), None, None))), vec!["1", "4", "5"]);
        assert_eq!(ids(&filter_accounts(all.clone(), &filter(Some("sarah"), None, None))), vec!["2"]);
        assert_eq!(ids(&filter_accounts(all.clone(), &filter(None, Some("employer"), None))), vec!["2", "5"]);
        assert_eq!(
            ids(&filter_accounts(all.clone(), &filter(None, Some("employer"), Some("active")))),
            vec!["2"]
        );
        assert_eq!(
            filter_accounts(all.clone(), &filter(Some(""), Some("all"), Some("All"))).len(),
            5
        );
        assert!(filter_accounts(all, &filter(None, Some("manager"), None)).is_empty());
    }

    #[tokio::test]
    async fn test_fixture_profile_seeded_for_john() {
        let dir = AccountDirectory::from_fixture().unwrap();
        let profile = dir.get("1").await.unwrap().profile.unwrap();
        assert_eq!(profile.job_role.as_deref(), Some("Frontend Developer"));
        assert_eq!(profile.experience.len(), 2);
        assert!(dir.get("4").await.unwrap().profile.is_none());
    }

    #[tokio::test]
    async fn test_update_profile_creates_then_merges() {
        let dir = AccountDirectory::from_fixture().unwrap();
        let jane = dir
            .update_profile(
                "4",
                ProfileUpdate {
                    title: Some("Data Analyst".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        let profile = jane.profile.unwrap();
        assert_eq!(profile.title, "Data Analyst");
        assert!(profile.visibility);

        let jane = dir
            .update_profile(
                "4",
                ProfileUpdate {
                    visibility: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        let profile = jane.profile.unwrap();
        assert_eq!(profile.title, "Data Analyst");
        assert!(!profile.visibility);
    }

    #[tokio::test]
    async fn test_update_profile_rejects_inconsistent_role_and_keeps_old() {
        let dir = AccountDirectory::from_fixture().unwrap();
        let err = dir
            .update_profile(
                "1",
                ProfileUpdate {
                    job_role: Some("Recruiter".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DirectoryError::InvalidField(_)));
        let profile = dir.get("1").await.unwrap().profile.unwrap();
        assert_eq!(profile.job_role.as_deref(), Some("Frontend Developer"));
    }

    #[test]
    fn test_directory_error_maps_to_app_error() {
        assert!(matches!(
            AppError::from(DirectoryError::DuplicateEmail("a".into())),
            AppError::Conflict(_)
        ));
        assert!(matches!(
            AppError::from(DirectoryError::NotFound("a".into())),
            AppError::NotFound(_)
        ));
    }
}
