use crate::error::{Error, Result};
use crate::middleware::auth::AuthUser;
use crate::models::role::RoleName;

const ERROR_MESSAGE: &str = "You do not have permission to access this resource";

/// The authorization key of a protected resource: either the user it belongs
/// to or the studio it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceOwner {
    User(i64),
    Studio(i64),
}

/// Role/ownership gate. Admins pass everything; studio owners pass for their
/// own studios; plain users pass for their own records. Anything else is a
/// terminal 403.
pub fn check_permission(user: &AuthUser, owner: ResourceOwner) -> Result<()> {
    match RoleName::parse(&user.role) {
        Some(RoleName::Admin) => Ok(()),
        Some(RoleName::StudioOwner) => match owner {
            ResourceOwner::Studio(studio_id) if user.studio_ids.contains(&studio_id) => Ok(()),
            _ => Err(Error::Forbidden(ERROR_MESSAGE.to_string())),
        },
        Some(RoleName::User) => match owner {
            ResourceOwner::User(user_id) if user.id == user_id => Ok(()),
            _ => Err(Error::Forbidden(ERROR_MESSAGE.to_string())),
        },
        None => Err(Error::Forbidden(ERROR_MESSAGE.to_string())),
    }
}

/// Coarse role gate for routes that are not tied to a single resource, e.g.
/// listing all users.
pub fn require_role(user: &AuthUser, allowed: &[RoleName]) -> Result<()> {
    match RoleName::parse(&user.role) {
        Some(role) if allowed.contains(&role) => Ok(()),
        _ => Err(Error::Forbidden(ERROR_MESSAGE.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn principal(id: i64, role: &str, studio_ids: Vec<i64>) -> AuthUser {
        AuthUser {
            id,
            name: "Test".into(),
            email: "test@example.com".into(),
            language: "en".into(),
            role: role.into(),
            studio_ids,
        }
    }

    #[test]
    fn admin_passes_everything() {
        let admin = principal(1, "admin", vec![]);
        assert!(check_permission(&admin, ResourceOwner::User(99)).is_ok());
        assert!(check_permission(&admin, ResourceOwner::Studio(99)).is_ok());
    }

    #[test]
    fn user_passes_only_own_records() {
        let user = principal(5, "user", vec![]);
        assert!(check_permission(&user, ResourceOwner::User(5)).is_ok());
        assert!(check_permission(&user, ResourceOwner::User(6)).is_err());
        assert!(check_permission(&user, ResourceOwner::Studio(5)).is_err());
    }

    #[test]
    fn studio_owner_scoped_to_own_studios() {
        let owner = principal(2, "studio_owner", vec![10, 11]);
        assert!(check_permission(&owner, ResourceOwner::Studio(10)).is_ok());
        assert!(check_permission(&owner, ResourceOwner::Studio(12)).is_err());
        // Studio owners do not get user-keyed resources, not even their own.
        assert!(check_permission(&owner, ResourceOwner::User(2)).is_err());
    }

    #[test]
    fn unknown_role_is_denied() {
        let nobody = principal(3, "superuser", vec![1]);
        assert!(check_permission(&nobody, ResourceOwner::User(3)).is_err());
        assert!(check_permission(&nobody, ResourceOwner::Studio(1)).is_err());
    }

    #[test]
    fn role_gate() {
        let admin = principal(1, "admin", vec![]);
        let user = principal(2, "user", vec![]);
        assert!(require_role(&admin, &[RoleName::Admin]).is_ok());
        assert!(require_role(&user, &[RoleName::Admin]).is_err());
        assert!(require_role(&user, &[RoleName::Admin, RoleName::User]).is_ok());
    }
}
