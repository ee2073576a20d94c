// ============================================================================
// INVARIANTS MODULE - For Formal Verification
// ============================================================================
//
// Pure predicates over the messenger's accounting. They are checked inline
// where the contract moves value and reused by the Certora rules.
//
// INVARIANT CATEGORIES:
//
// 1. FEE INVARIANTS
//    - Fees are never negative
//    - A transfer always bridges a positive net amount
//
// 2. SWAP INVARIANTS
//    - The engine never takes more than offered
//    - Slippage bounds are honoured
//
// 3. CONSERVATION INVARIANTS
//    - Tips only grow by retained fees and shrink by withdrawals
//    - Inbound payloads never spend tips
//
// 4. SEQUENCING INVARIANTS
//    - Trace ids strictly increase
//
// ============================================================================

// ============================================================================
// FEE INVARIANTS
// ============================================================================

/// Invariant: configured fees are non-negative
///
/// Property:
///   fee >= 0
pub fn fee_valid(fee: i128) -> bool {
    fee >= 0
}

/// Invariant: the fee leaves a positive amount to bridge
///
/// Property:
///   fee >= 0 && amount > fee
///
/// An amount exactly equal to the fee is rejected.
pub fn fee_leaves_net_amount(amount: i128, fee: i128) -> bool {
    fee_valid(fee) && amount > fee
}

/// Invariant: fee and net amount add up to the gross amount
///
/// Property:
///   fee + net_amount == amount && net_amount > 0
pub fn fee_split_consistent(amount: i128, fee: i128, net_amount: i128) -> bool {
    net_amount > 0 && fee.checked_add(net_amount) == Some(amount)
}

// ============================================================================
// SWAP INVARIANTS
// ============================================================================

/// Invariant: an exact-input swap result is sane
///
/// Property:
///   0 <= paid <= amount_in && received >= 0
///
/// The engine may fill less than offered (price limit reached) but never more.
pub fn exact_input_delta_valid(amount_in: i128, paid: i128, received: i128) -> bool {
    paid >= 0 && paid <= amount_in && received >= 0
}

/// Invariant: output meets the caller's minimum
///
/// Property:
///   amount_out >= amount_out_minimum
pub fn slippage_respected(amount_out: i128, amount_out_minimum: i128) -> bool {
    amount_out >= amount_out_minimum
}

/// Invariant: unfilled input is fully returned
///
/// Property:
///   paid + refunded == amount_in
pub fn input_accounted(amount_in: i128, paid: i128, refunded: i128) -> bool {
    paid.checked_add(refunded) == Some(amount_in)
}

// ============================================================================
// CONSERVATION INVARIANTS
// ============================================================================

/// Invariant: tips grow exactly by the retained fee
///
/// Property:
///   tips_after == tips_before + fee
pub fn tips_accrue_fee(tips_before: i128, tips_after: i128, fee: i128) -> bool {
    tips_before.checked_add(fee) == Some(tips_after)
}

/// Invariant: tips are backed by the settlement balance
///
/// Property:
///   0 <= tips <= settlement_balance
///
/// Only holds while no rescue has pulled settlement tokens out.
pub fn tips_backed(tips: i128, settlement_balance: i128) -> bool {
    tips >= 0 && tips <= settlement_balance
}

/// Invariant: an inbound payload is funded without touching tips
///
/// Property:
///   settlement_balance - tips >= amount
pub fn payload_funded(settlement_balance: i128, tips: i128, amount: i128) -> bool {
    settlement_balance - tips >= amount
}

// ============================================================================
// SEQUENCING INVARIANTS
// ============================================================================

/// Invariant: trace ids strictly increase
///
/// Property:
///   new_trace_id == old_trace_id + 1
pub fn trace_id_advanced(old_trace_id: u64, new_trace_id: u64) -> bool {
    old_trace_id.checked_add(1) == Some(new_trace_id)
}

// ============================================================================
// TESTS
// ============================================================================
