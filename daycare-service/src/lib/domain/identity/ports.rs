use async_trait::async_trait;

use crate::domain::identity::errors::AccountError;
use crate::domain::identity::errors::CredentialStoreError;
use crate::domain::identity::models::CredentialRecord;

/// External lookup of login accounts and their granted roles.
///
/// The request filter treats `lookup` as its only suspension point; no
/// lock may be held across a call.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Resolve an account by its subject (username).
    ///
    /// # Returns
    /// The stored record, or `None` for an unknown identity
    ///
    /// # Errors
    /// * `Database` - Lookup failed
    async fn lookup(&self, subject: &str) -> Result<Option<CredentialRecord>, CredentialStoreError>;

    /// Persist a new login account. The password is already hashed.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `Store` - Persistence failed
    async fn create(&self, record: CredentialRecord) -> Result<CredentialRecord, AccountError>;
}
