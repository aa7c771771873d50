use super::flow::AuthApi;
use crate::storage::{KeyValueStore, SessionStore};

/// Returns the persisted token if the service still accepts it.
///
/// Only an explicit 401 revokes the token; when the service cannot be reached
/// the stored token is kept and the next authenticated call decides.
pub async fn restore_session<A, S>(api: &A, session: &SessionStore<S>) -> Option<String>
where
    A: AuthApi + ?Sized,
    S: KeyValueStore,
{
    let token = session.token()?;
    match api.validate_token(&token).await {
        Ok(_) => Some(token),
        Err(err) if err.is_unauthorized() => {
            log::info!("stored session token was rejected, signing out");
            session.clear_token();
            None
        }
        Err(err) => {
            log::warn!("could not verify stored session: {err}");
            Some(token)
        }
    }
}

/// Ends the session remotely, then forgets the token whatever the service said.
pub async fn logout<A, S>(api: &A, session: &SessionStore<S>)
where
    A: AuthApi + ?Sized,
    S: KeyValueStore,
{
    if let Some(token) = session.token()
        && let Err(err) = api.logout(&token).await
    {
        log::warn!("logout request failed: {err}");
    }
    session.clear_token();
}
