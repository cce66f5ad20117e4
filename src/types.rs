multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Pool Status — lifecycle states
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug)]
pub enum PoolStatus {
    /// Bets are accepted, subject to the betting window and per-team
    /// eligibility. The proceeds ledger is untouched.
    Open,
    /// A winning team has been declared and the proceeds ledger written.
    /// Terminal state — only withdrawals remain.
    Resolved,
}

// ============================================================
// Team — one roster entry with its stake aggregates
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Team<M: ManagedTypeApi> {
    pub name: ManagedBuffer<M>,
    /// Toggled by the administrator. Blocks future bets only;
    /// stakes already placed are unaffected.
    pub defeated: bool,
    pub total_staked: BigUint<M>,
    /// Sum of time-weighted stakes on this team, the denominator
    /// for pro-rata payouts if it wins.
    pub total_weight: BigUint<M>,
}
