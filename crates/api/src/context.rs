use assettrack_core::UserId;

/// Authenticated identity for a request.
///
/// Inserted by the auth middleware; present on all protected routes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AuthContext {
    user_id: UserId,
}

impl AuthContext {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }
}
