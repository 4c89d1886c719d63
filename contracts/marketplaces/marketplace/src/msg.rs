use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Coin};

#[cw_serde]
pub struct InstantiateMsg {
    pub price: Coin,
}

#[cw_serde]
pub enum ExecuteMsg {
    Purchase { token_id: u64 },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Coin)]
    Price {},
    #[returns(bool)]
    Available { token_id: u64 },
    #[returns(Option<Addr>)]
    Owner { token_id: u64 },
}
