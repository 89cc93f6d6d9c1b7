/// Session/account backend used by the "Account" settings section
#[cfg_attr(test, mockall::automock)]
pub trait AccountService: Send + Sync {
    /// Sign out the current account
    fn logout(&self) -> anyhow::Result<()>;

    /// Drop every locally stored account, history and cache entry
    fn clear_all_data(&self) -> anyhow::Result<()>;

    /// Number of logged in accounts; gates the drawer's account entries
    fn account_count(&self) -> usize;
}
