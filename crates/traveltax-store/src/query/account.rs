//! Account repository for registered users.

use std::future::Future;

use crate::model::{Account, NewAccount};
use crate::{StoreConnection, StoreError, StoreResult, TRACING_TARGET_QUERY};

/// Repository for account operations.
pub trait AccountRepository {
    /// Creates a new account.
    ///
    /// Fails with [`StoreError::Conflict`] if the username is already taken.
    fn create_account(
        &mut self,
        new_account: NewAccount,
    ) -> impl Future<Output = StoreResult<Account>> + Send;

    /// Finds an account by its username.
    fn find_account_by_username(
        &mut self,
        username: &str,
    ) -> impl Future<Output = StoreResult<Option<Account>>> + Send;

    /// Finds an account by its identifier.
    fn find_account_by_id(
        &mut self,
        account_id: i64,
    ) -> impl Future<Output = StoreResult<Option<Account>>> + Send;

    /// Checks whether a username is already registered.
    fn username_exists(&mut self, username: &str)
    -> impl Future<Output = StoreResult<bool>> + Send;

    /// Removes an account, returning it if it existed.
    ///
    /// Tokens issued for the removed username stop resolving immediately.
    fn delete_account(
        &mut self,
        username: &str,
    ) -> impl Future<Output = StoreResult<Option<Account>>> + Send;
}

impl AccountRepository for StoreConnection {
    async fn create_account(&mut self, new_account: NewAccount) -> StoreResult<Account> {
        if new_account.username.is_empty() {
            return Err(StoreError::validation("username must not be empty"));
        }

        let mut tables = self.write().await;
        if tables
            .accounts
            .iter()
            .any(|a| a.username == new_account.username)
        {
            tracing::debug!(
                target: TRACING_TARGET_QUERY,
                username = %new_account.username,
                "Rejected duplicate username"
            );
            return Err(StoreError::conflict("account", new_account.username));
        }

        let id = tables.next_account_id();
        let account = new_account.into_account(id);
        tables.accounts.push(account.clone());

        tracing::debug!(target: TRACING_TARGET_QUERY, account_id = id, "Created account");
        Ok(account)
    }

    async fn find_account_by_username(&mut self, username: &str) -> StoreResult<Option<Account>> {
        let tables = self.read().await;
        Ok(tables
            .accounts
            .iter()
            .find(|a| a.username == username)
            .cloned())
    }

    async fn find_account_by_id(&mut self, account_id: i64) -> StoreResult<Option<Account>> {
        let tables = self.read().await;
        Ok(tables.accounts.iter().find(|a| a.id == account_id).cloned())
    }

    async fn username_exists(&mut self, username: &str) -> StoreResult<bool> {
        let tables = self.read().await;
        Ok(tables.accounts.iter().any(|a| a.username == username))
    }

    async fn delete_account(&mut self, username: &str) -> StoreResult<Option<Account>> {
        let mut tables = self.write().await;
        let position = tables.accounts.iter().position(|a| a.username == username);
        let removed = position.map(|index| tables.accounts.remove(index));

        if let Some(account) = &removed {
            tracing::info!(target: TRACING_TARGET_QUERY, account_id = account.id, "Deleted account");
        }

        Ok(removed)
    }
}
