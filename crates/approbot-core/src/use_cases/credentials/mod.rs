mod list_delegated_credentials;
mod register_delegated_credential;
mod remove_delegated_credential;

pub use list_delegated_credentials::ListDelegatedCredentials;
pub use register_delegated_credential::RegisterDelegatedCredential;
pub use remove_delegated_credential::RemoveDelegatedCredential;
