//! Authenticated Principal
//!
//! The resolved identity of the requesting user. The auth middleware
//! inserts this into request extensions; downstream domain crates consume
//! it without knowing how authentication happened.

use crate::id::UserId;

/// The owner identity attached to an authenticated request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principal {
    pub user_id: UserId,
}

impl Principal {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::Id;

    #[test]
    fn test_principal_carries_user_id() {
        let user_id: UserId = Id::new();
        let principal = Principal::new(user_id);
        assert_eq!(principal.user_id, user_id);
    }
}
