use multiversx_sc::proxy_imports::*;

use crate::types::{PoolStatus, Team};

pub struct TeamsBetProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for TeamsBetProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = TeamsBetProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        TeamsBetProxyMethods { wrapped_tx: tx }
    }
}

pub struct TeamsBetProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> TeamsBetProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<MultiValueEncoded<Env::Api, ManagedBuffer<Env::Api>>>,
    >(
        self,
        deadline: Arg0,
        team_names: Arg1,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&deadline)
            .argument(&team_names)
            .original_result()
    }
}

impl<Env, From, To, Gas> TeamsBetProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn upgrade(self) -> TxTypedUpgrade<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_upgrade()
            .original_result()
    }
}

impl<Env, From, To, Gas> TeamsBetProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn bet<Arg0: ProxyArg<usize>>(
        self,
        team_id: Arg0,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("bet")
            .argument(&team_id)
            .original_result()
    }

    pub fn mark_defeated_team<Arg0: ProxyArg<usize>, Arg1: ProxyArg<bool>>(
        self,
        team_id: Arg0,
        defeated: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("markDefeatedTeam")
            .argument(&team_id)
            .argument(&defeated)
            .original_result()
    }

    pub fn set_winner<Arg0: ProxyArg<usize>>(
        self,
        team_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setWinner")
            .argument(&team_id)
            .original_result()
    }

    pub fn withdraw(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("withdraw")
            .original_result()
    }

    pub fn get_team_list(
        self,
    ) -> TxTypedCall<
        Env,
        From,
        To,
        NotPayable,
        Gas,
        MultiValueEncoded<Env::Api, ManagedBuffer<Env::Api>>,
    > {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTeamList")
            .original_result()
    }

    pub fn get_team<Arg0: ProxyArg<usize>>(
        self,
        team_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Team<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTeam")
            .argument(&team_id)
            .original_result()
    }

    pub fn get_amount_betted_to_team<Arg0: ProxyArg<usize>>(
        self,
        team_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getAmountBettedToTeam")
            .argument(&team_id)
            .original_result()
    }

    pub fn get_user_stake<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<usize>,
    >(
        self,
        user: Arg0,
        team_id: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getUserStake")
            .argument(&user)
            .argument(&team_id)
            .original_result()
    }

    pub fn get_user_proceeds<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        user: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getUserProceeds")
            .argument(&user)
            .original_result()
    }

    pub fn get_winning_team(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, OptionalValue<usize>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getWinningTeam")
            .original_result()
    }

    pub fn get_betting_window(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValue2<u64, u64>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getBettingWindow")
            .original_result()
    }

    pub fn get_pool_status(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, PoolStatus> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getPoolStatus")
            .original_result()
    }

    pub fn get_administrator(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getAdministrator")
            .original_result()
    }
}
