use cosmwasm_schema::cw_serde;
use cosmwasm_std::Coin;

#[cw_serde]
pub struct InstantiateMsg {
    // Token uri is base_uri followed by the token id
    pub base_uri: String,
    pub whitelist_address: String,
    pub max_supply: u32,
    pub mint_price: Coin,
}

#[cw_serde]
pub enum ExecuteMsg {
    // Admin only, opens the presale for `duration` seconds starting now
    StartPresale { duration: u64 },
    PresaleMint {},
    Mint {},
    SetPaused { paused: bool },
    Withdraw {},
    TransferNft { recipient: String, token_id: u32 },
}
