// ============================================================================
// ACCESS SPECIFICATIONS
// ============================================================================
//
// KEY INVARIANTS:
// 1. While paused, fund-moving entry points are rejected
// 2. Only admitted domains accept outbound transfers
//
// ============================================================================

// ============================================================================
// FORMAL VERIFICATION RULES (Certora Sunbeam)
// ============================================================================

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_satisfy};

/// RULE: the pause flag alone decides the pause gate
#[cfg(feature = "certora")]
#[rule]
pub fn pause_gate_follows_flag(env: soroban_sdk::Env, paused: bool) {
    crate::storage::set_paused(&env, paused);
    let gate = crate::access::ensure_not_paused(&env);
    cvlr_assert!(gate.is_err() == paused);
}

/// RULE: a disallowed domain is rejected
#[cfg(feature = "certora")]
#[rule]
pub fn disallowed_domain_rejected(env: soroban_sdk::Env, domain: u32) {
    crate::storage::set_domain_allowed(&env, domain, false);
    cvlr_assert!(crate::domains::ensure_allowed(&env, domain).is_err());
}

/// RULE: admission is reachable
#[cfg(feature = "certora")]
#[rule]
pub fn allowed_domain_reachable(env: soroban_sdk::Env, domain: u32) {
    crate::storage::set_domain_allowed(&env, domain, true);
    cvlr_satisfy!(crate::domains::ensure_allowed(&env, domain).is_ok());
}

// ============================================================================
// TESTS (run with cargo test)
// ============================================================================
