// ============================================================================
// TRANSFER SPECIFICATIONS
// ============================================================================
//
// KEY INVARIANTS:
// 1. Trace ids advance by exactly one per dispatch
// 2. Tips grow by exactly the retained fee
// 3. Swap results never overdraw the offered input
//
// ============================================================================

// ============================================================================
// FORMAL VERIFICATION RULES (Certora Sunbeam)
// ============================================================================

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_assume};

/// RULE: next_trace_id returns the successor and persists it
#[cfg(feature = "certora")]
#[rule]
pub fn trace_id_advances_by_one(env: soroban_sdk::Env) {
    use super::model;

    model::snapshot(&env);
    cvlr_assume!(model::trace_id_before() < u64::MAX);

    let next = crate::storage::next_trace_id(&env);
    cvlr_assert!(crate::invariants::trace_id_advanced(model::trace_id_before(), next));
    cvlr_assert!(crate::storage::get_trace_id(&env) == next);
}

/// RULE: accruing a fee adds exactly that fee to the tips
#[cfg(feature = "certora")]
#[rule]
pub fn tips_accrue_exactly(env: soroban_sdk::Env, fee: i128) {
    use super::model;

    model::snapshot(&env);
    cvlr_assume!(fee >= 0);
    cvlr_assume!(model::tips_before() >= 0);
    cvlr_assume!(model::tips_before() <= i128::MAX - fee);

    crate::storage::set_tips(&env, model::tips_before() + fee);
    cvlr_assert!(crate::invariants::tips_accrue_fee(
        model::tips_before(),
        crate::storage::get_tips(&env),
        fee
    ));
}

/// RULE: an accepted exact-input delta never pays more than offered
#[cfg(feature = "certora")]
#[rule]
pub fn exact_input_never_overdraws(amount_in: i128, paid: i128, received: i128) {
    cvlr_assume!(crate::invariants::exact_input_delta_valid(amount_in, paid, received));
    cvlr_assert!(paid <= amount_in);
    cvlr_assert!(amount_in - paid >= 0);
}

// ============================================================================
// TESTS (run with cargo test)
// ============================================================================
