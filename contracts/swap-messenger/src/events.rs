use messenger_types::Role;
use soroban_sdk::{Address, BytesN, Env, String, Symbol};

pub fn role_granted(env: &Env, role: Role, account: &Address) {
    env.events()
        .publish((Symbol::new(env, "role_granted"), role), account.clone());
}

pub fn role_revoked(env: &Env, role: Role, account: &Address) {
    env.events()
        .publish((Symbol::new(env, "role_revoked"), role), account.clone());
}

pub fn paused(env: &Env, by: &Address) {
    env.events().publish((Symbol::new(env, "paused"),), by.clone());
}

pub fn unpaused(env: &Env, by: &Address) {
    env.events().publish((Symbol::new(env, "unpaused"),), by.clone());
}

pub fn default_fee_set(env: &Env, fee: i128) {
    env.events()
        .publish((Symbol::new(env, "default_fee_set"),), fee);
}

pub fn domain_fee_set(env: &Env, domain: u32, fee: i128) {
    env.events()
        .publish((Symbol::new(env, "domain_fee_set"), domain), fee);
}

pub fn domain_allowed(env: &Env, domain: u32) {
    env.events()
        .publish((Symbol::new(env, "domain_allowed"),), domain);
}

pub fn domain_disallowed(env: &Env, domain: u32) {
    env.events()
        .publish((Symbol::new(env, "domain_disallowed"),), domain);
}

pub fn remote_set(env: &Env, domain: u32, address: &String, mint_recipient: &BytesN<32>) {
    env.events().publish(
        (Symbol::new(env, "remote_set"), domain),
        (address.clone(), mint_recipient.clone()),
    );
}

pub fn transfer_issued(
    env: &Env,
    nonce: u64,
    net_amount: i128,
    destination_domain: u32,
    mint_recipient: &BytesN<32>,
    token: &Address,
) {
    env.events().publish(
        (Symbol::new(env, "transfer_issued"), nonce),
        (
            net_amount,
            destination_domain,
            mint_recipient.clone(),
            token.clone(),
        ),
    );
}

pub fn transfer_pending(
    env: &Env,
    trace_id: u64,
    payload_hash: &BytesN<32>,
    amount: i128,
    destination_domain: u32,
    recipient: &Address,
) {
    env.events().publish(
        (Symbol::new(env, "transfer_pending"), trace_id),
        (
            payload_hash.clone(),
            amount,
            destination_domain,
            recipient.clone(),
        ),
    );
}

pub fn remote_succeeded(
    env: &Env,
    trace_id: u64,
    amount_in: i128,
    amount_out: i128,
    recipient: &Address,
) {
    env.events().publish(
        (Symbol::new(env, "remote_succeeded"), trace_id),
        (amount_in, amount_out, recipient.clone()),
    );
}

pub fn remote_refunded(env: &Env, trace_id: u64, amount: i128, recipient: &Address) {
    env.events().publish(
        (Symbol::new(env, "remote_refunded"), trace_id),
        (amount, recipient.clone()),
    );
}

pub fn tips_withdrawn(env: &Env, to: &Address, amount: i128) {
    env.events()
        .publish((Symbol::new(env, "tips_withdrawn"),), (to.clone(), amount));
}

pub fn rescued(env: &Env, token: &Address, to: &Address, amount: i128) {
    env.events().publish(
        (Symbol::new(env, "rescued"), token.clone()),
        (to.clone(), amount),
    );
}
