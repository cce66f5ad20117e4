#![no_std]

multiversx_sc::imports!();

pub mod teams_bet_proxy;
pub mod types;

use types::{PoolStatus, Team};

// ============================================================
// Constants
// ============================================================

/// Basis points denominator
const BPS_DENOMINATOR: u64 = 10_000;

/// Maximum early-bet bonus: a bet at the opening instant weighs
/// exactly twice a deadline bet of the same size (10000 bps = +100%)
const EARLY_BET_BONUS_BPS: u64 = 10_000;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait TeamsBet {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// Fixes the roster, the betting window and the administrator for the
    /// lifetime of the pool. Team ids are the zero-based roster indices,
    /// assigned in argument order.
    #[init]
    fn init(&self, deadline: u64, team_names: MultiValueEncoded<ManagedBuffer>) {
        let now = self.blockchain().get_block_timestamp();
        require!(deadline > now, "deadline must be after deployment");

        for name in team_names {
            self.teams().push(&Team {
                name,
                defeated: false,
                total_staked: BigUint::zero(),
                total_weight: BigUint::zero(),
            });
        }
        require!(!self.teams().is_empty(), "team roster must not be empty");

        self.administrator().set(self.blockchain().get_caller());
        self.betting_start().set(now);
        self.betting_deadline().set(deadline);
        self.status().set(PoolStatus::Open);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: bet
    // Pure accumulation — payout math happens only at resolution.
    // ========================================================

    #[endpoint(bet)]
    #[payable("EGLD")]
    fn bet(&self, team_id: usize) {
        let caller = self.blockchain().get_caller();
        let payment = self.call_value().egld_value().clone_value();

        require!(
            self.status().get() == PoolStatus::Open,
            "betting is closed"
        );
        self.require_valid_team(team_id);

        let now = self.blockchain().get_block_timestamp();
        require!(
            now >= self.betting_start().get() && now <= self.betting_deadline().get(),
            "bet out of time range"
        );

        let mut team = self.teams().get(team_id + 1);
        require!(!team.defeated, "team has been defeated");
        require!(payment > 0u64, "bet amount must be greater than zero");

        let weight = self.bet_weight(&payment, now);

        team.total_staked += &payment;
        team.total_weight += &weight;
        self.teams().set(team_id + 1, &team);

        self.user_stake(&caller, team_id).update(|s| *s += &payment);
        self.user_weight(&caller, team_id).update(|w| *w += &weight);
        self.bettors().insert(caller.clone());

        self.new_bet_event(&caller, team_id, &payment);
    }

    // ========================================================
    // ENDPOINT: markDefeatedTeam
    // Toggles future eligibility only — never touches placed stakes.
    // ========================================================

    #[endpoint(markDefeatedTeam)]
    fn mark_defeated_team(&self, team_id: usize, defeated: bool) {
        self.require_administrator();
        require!(
            self.status().get() == PoolStatus::Open,
            "pool already resolved"
        );
        self.require_valid_team(team_id);

        let mut team = self.teams().get(team_id + 1);
        team.defeated = defeated;
        self.teams().set(team_id + 1, &team);

        self.team_defeated_event(team_id, defeated);
    }

    // ========================================================
    // ENDPOINT: setWinner
    // One-way Open → Resolved transition. Writes the entire
    // proceeds ledger atomically.
    // ========================================================

    #[endpoint(setWinner)]
    fn set_winner(&self, team_id: usize) {
        self.require_administrator();
        require!(
            self.status().get() == PoolStatus::Open,
            "winner already set"
        );
        self.require_valid_team(team_id);

        let balance = self.pool_balance();
        let admin = self.administrator().get();
        let total_weight = self.teams().get(team_id + 1).total_weight;

        if total_weight == 0u64 {
            // Nobody backed the winner: the whole pool accrues to the
            // administrator.
            self.proceeds(&admin).set(&balance);
        } else {
            let mut allocated = BigUint::zero();
            for bettor in self.bettors().iter() {
                let weight = self.user_weight(&bettor, team_id).get();
                if weight == 0u64 {
                    continue;
                }
                let payout = &balance * &weight / &total_weight;
                allocated += &payout;
                self.proceeds(&bettor).update(|p| *p += &payout);
            }
            if allocated > balance {
                sc_panic!("payout distribution exceeds pool balance");
            }
            // Rounding dust is assigned to the administrator, never lost.
            let remainder = &balance - &allocated;
            if remainder > 0u64 {
                self.proceeds(&admin).update(|p| *p += &remainder);
            }
        }

        self.winning_team().set(team_id);
        self.status().set(PoolStatus::Resolved);

        let now = self.blockchain().get_block_timestamp();
        self.winner_set_event(team_id, &balance, now);
    }

    // ========================================================
    // ENDPOINT: withdraw
    // Pays each address at most once.
    // ========================================================

    #[endpoint(withdraw)]
    fn withdraw(&self) {
        require!(
            self.status().get() == PoolStatus::Resolved,
            "something went wrong"
        );

        let caller = self.blockchain().get_caller();
        let owed = self.proceeds(&caller).get();
        require!(owed > 0u64, "nothing to withdraw");

        // Zero the ledger entry before transferring. A failed transfer
        // aborts the whole call and restores the entry.
        self.proceeds(&caller).clear();
        self.send().direct_egld(&caller, &owed);

        let now = self.blockchain().get_block_timestamp();
        self.withdraw_earnings_event(&caller, &owed, now);
    }

    // ========================================================
    // INTERNAL: access and bounds checks
    // ========================================================

    fn require_administrator(&self) {
        require!(
            self.blockchain().get_caller() == self.administrator().get(),
            "caller is not the administrator"
        );
    }

    fn require_valid_team(&self, team_id: usize) {
        require!(team_id < self.teams().len(), "invalid team id");
    }

    fn pool_balance(&self) -> BigUint {
        self.blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0)
    }

    // ========================================================
    // INTERNAL: time-decay weighting policy
    // Kept behind one pure function so the curve can be swapped
    // without touching ledger or state-machine code.
    // ========================================================

    /// Payout weight of `amount` staked at `now` within the betting window.
    /// Linear early-bet bonus in basis points:
    ///   weight = amount * (10000 + bonus_bps) / 10000
    /// where bonus_bps decays from EARLY_BET_BONUS_BPS at window start
    /// to zero at the deadline. Equal-time bets weigh proportionally
    /// to their size.
    fn bet_weight(&self, amount: &BigUint, now: u64) -> BigUint {
        let start = self.betting_start().get();
        let deadline = self.betting_deadline().get();
        // init guarantees deadline > start
        let window = deadline - start;
        let remaining = deadline - now;
        let bonus_bps = EARLY_BET_BONUS_BPS * remaining / window;
        amount * (BPS_DENOMINATOR + bonus_bps) / BPS_DENOMINATOR
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getTeamList)]
    fn get_team_list(&self) -> MultiValueEncoded<ManagedBuffer> {
        let mut result = MultiValueEncoded::new();
        for team in self.teams().iter() {
            result.push(team.name);
        }
        result
    }

    #[view(getTeam)]
    fn get_team(&self, team_id: usize) -> Team<Self::Api> {
        self.require_valid_team(team_id);
        self.teams().get(team_id + 1)
    }

    #[view(getAmountBettedToTeam)]
    fn get_amount_betted_to_team(&self, team_id: usize) -> BigUint {
        self.require_valid_team(team_id);
        self.teams().get(team_id + 1).total_staked
    }

    #[view(getUserStake)]
    fn get_user_stake(&self, user: &ManagedAddress, team_id: usize) -> BigUint {
        self.require_valid_team(team_id);
        self.user_stake(user, team_id).get()
    }

    #[view(getUserProceeds)]
    fn get_user_proceeds(&self, user: &ManagedAddress) -> BigUint {
        self.proceeds(user).get()
    }

    #[view(getWinningTeam)]
    fn get_winning_team(&self) -> OptionalValue<usize> {
        if self.status().get() == PoolStatus::Resolved {
            OptionalValue::Some(self.winning_team().get())
        } else {
            OptionalValue::None
        }
    }

    #[view(getBettingWindow)]
    fn get_betting_window(&self) -> MultiValue2<u64, u64> {
        (self.betting_start().get(), self.betting_deadline().get()).into()
    }

    #[view(getPoolStatus)]
    fn get_pool_status(&self) -> PoolStatus {
        self.status().get()
    }

    #[view(getAdministrator)]
    fn get_administrator(&self) -> ManagedAddress {
        self.administrator().get()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("newBet")]
    fn new_bet_event(
        &self,
        #[indexed] bettor: &ManagedAddress,
        #[indexed] team_id: usize,
        amount: &BigUint,
    );

    #[event("teamDefeatedToggled")]
    fn team_defeated_event(&self, #[indexed] team_id: usize, defeated: bool);

    #[event("winnerSet")]
    fn winner_set_event(
        &self,
        #[indexed] team_id: usize,
        #[indexed] pool_balance: &BigUint,
        timestamp: u64,
    );

    #[event("withdrawEarnings")]
    fn withdraw_earnings_event(
        &self,
        #[indexed] recipient: &ManagedAddress,
        #[indexed] amount: &BigUint,
        timestamp: u64,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Configuration ──

    #[storage_mapper("administrator")]
    fn administrator(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("bettingStart")]
    fn betting_start(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("bettingDeadline")]
    fn betting_deadline(&self) -> SingleValueMapper<u64>;

    // ── Pool state ──

    #[storage_mapper("status")]
    fn status(&self) -> SingleValueMapper<PoolStatus>;

    #[storage_mapper("teams")]
    fn teams(&self) -> VecMapper<Team<Self::Api>>;

    #[storage_mapper("winningTeam")]
    fn winning_team(&self) -> SingleValueMapper<usize>;

    // ── Per-user ledgers ──

    #[storage_mapper("userStake")]
    fn user_stake(&self, user: &ManagedAddress, team_id: usize) -> SingleValueMapper<BigUint>;

    #[storage_mapper("userWeight")]
    fn user_weight(&self, user: &ManagedAddress, team_id: usize) -> SingleValueMapper<BigUint>;

    #[storage_mapper("bettors")]
    fn bettors(&self) -> UnorderedSetMapper<ManagedAddress>;

    /// Written exactly once, at resolution; drained only by withdraw.
    #[storage_mapper("proceeds")]
    fn proceeds(&self, user: &ManagedAddress) -> SingleValueMapper<BigUint>;
}
