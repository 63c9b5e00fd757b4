use crate::GovernanceError;
use alloy_primitives::Address;

/// The single admin identity authorizing privileged mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Authority {
    /// The current admin.
    admin: Address,
}

impl Authority {
    /// Returns a new authority held by the provided admin.
    pub const fn new(admin: Address) -> Self {
        Self { admin }
    }

    /// Fails with [`GovernanceError::NotAdmin`] unless the caller is the admin.
    pub fn require_admin(&self, caller: Address) -> Result<(), GovernanceError> {
        if caller != self.admin {
            return Err(GovernanceError::NotAdmin(caller));
        }
        Ok(())
    }

    /// Replaces the admin.
    ///
    /// The new admin is unconstrained: it may equal the current one and does not
    /// need to be a registered signer.
    pub fn set_admin(&mut self, new_admin: Address) {
        self.admin = new_admin;
    }

    /// Returns the current admin.
    pub const fn admin(&self) -> Address {
        self.admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    const ADMIN: Address = address!("00000000000000000000000000000000000000aa");
    const OTHER: Address = address!("00000000000000000000000000000000000000bb");

    #[test]
    fn test_should_gate_on_admin() {
        let authority = Authority::new(ADMIN);
        authority.require_admin(ADMIN).unwrap();
        assert_eq!(authority.require_admin(OTHER).unwrap_err(), GovernanceError::NotAdmin(OTHER));
    }

    #[test]
    fn test_should_replace_admin() {
        let mut authority = Authority::new(ADMIN);
        authority.set_admin(OTHER);
        assert_eq!(authority.admin(), OTHER);
        assert!(authority.require_admin(ADMIN).is_err());
        authority.require_admin(OTHER).unwrap();
    }
}
