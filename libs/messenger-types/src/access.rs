use soroban_sdk::contracttype;

/// Capabilities held by accounts of the messenger.
///
/// The two roles are checked independently: holding `Admin` does not
/// imply `FeeSetter` and vice versa.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Role {
    /// Roles, admission, pause, default fee, treasury and rescue
    Admin,
    /// Per-domain fee overrides
    FeeSetter,
}
