// ============================================================================
// CERTORA SUNBEAM FORMAL VERIFICATION SPECIFICATIONS
// ============================================================================
//
// Formal verification rules for the swap messenger: fee resolution, domain
// admission, pause gating and the accounting of outbound transfers.
//
// STRUCTURE:
//
// - model.rs          : Ghost state and storage snapshots
// - fee_specs.rs      : Fee resolution and fee/net split
// - transfer_specs.rs : Outbound preconditions, tips and trace ids
// - access_specs.rs   : Pause and admission gating
//
// USAGE:
// - Unit tests: cargo test -p swap-messenger
// - Certora build: cargo build --features certora -p swap-messenger
// - Verification: certoraSorobanProver swap_messenger.conf
//
// ============================================================================

// Ghost state and model initialization
#[cfg(feature = "certora")]
pub mod model;

// Spec modules
pub mod access_specs;
pub mod fee_specs;
pub mod transfer_specs;
