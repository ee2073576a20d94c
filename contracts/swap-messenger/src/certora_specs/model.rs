// ============================================================================
// GHOST STATE AND MODEL INITIALIZATION
// ============================================================================

/// Ghost copy of the tips recorded before the rule body runs
static mut GHOST_TIPS_BEFORE: i128 = 0;

/// Ghost copy of the trace counter recorded before the rule body runs
static mut GHOST_TRACE_ID_BEFORE: u64 = 0;

/// Skolem variable for a destination domain
static mut SKOLEM_DOMAIN: u32 = 0;

pub fn tips_before() -> i128 {
    unsafe { GHOST_TIPS_BEFORE }
}

pub fn trace_id_before() -> u64 {
    unsafe { GHOST_TRACE_ID_BEFORE }
}

pub fn skolem_domain() -> u32 {
    unsafe { SKOLEM_DOMAIN }
}

/// Initialize ghost state with nondeterministic values
pub fn init() {
    use cvlr::nondet::nondet;

    unsafe {
        GHOST_TIPS_BEFORE = nondet();
        GHOST_TRACE_ID_BEFORE = nondet();
        SKOLEM_DOMAIN = nondet();
    }
}

/// Record the current storage values as the "before" state
pub fn snapshot(env: &soroban_sdk::Env) {
    unsafe {
        GHOST_TIPS_BEFORE = crate::storage::get_tips(env);
        GHOST_TRACE_ID_BEFORE = crate::storage::get_trace_id(env);
    }
}
