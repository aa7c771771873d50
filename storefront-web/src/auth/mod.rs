//! Sign-in / sign-up form state and the request flow behind it.

pub mod flow;
pub mod form;
pub mod guard;
pub mod session;

pub use flow::{AuthApi, AuthRequest, FollowUp, ToastMessages, apply_outcome, submit};
pub use form::{AuthAction, AuthField, AuthFormState, AuthMode};
pub use guard::SubmitGuard;
pub use session::{logout, restore_session};

#[cfg(test)]
mod fake;
#[cfg(test)]
mod flow_test;
