//! Sign-in and sign-out flows.

use tracing::info;

use lumina_store::{Identity, SlotStore, StoreError};

use crate::app::App;
use crate::error::{AppError, Result};

impl<S: SlotStore> App<S> {
    /// Sign in with an email from the directory.
    ///
    /// An unknown email fails with [`AppError::UnknownEmail`] and leaves any
    /// existing session in place; screens show this inline.
    pub fn login(&self, email: &str) -> Result<Identity> {
        match self.records().login(email) {
            Ok(user) => {
                info!(user = %user.id, "signed in");
                Ok(user)
            }
            Err(StoreError::NotFound) => Err(AppError::UnknownEmail),
            Err(e) => Err(e.into()),
        }
    }

    /// Sign out, clearing the session and the liked set.
    pub fn logout(&self) -> Result<()> {
        self.records().logout()?;
        info!("signed out");
        Ok(())
    }

    /// The signed-in identity, if any.
    pub fn current_user(&self) -> Result<Option<Identity>> {
        Ok(self.records().current_session()?)
    }

    /// The signed-in identity, or [`AppError::SignedOut`].
    pub(crate) fn require_user(&self) -> Result<Identity> {
        self.current_user()?.ok_or(AppError::SignedOut)
    }
}
