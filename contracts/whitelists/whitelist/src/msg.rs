use cosmwasm_schema::cw_serde;

#[cw_serde]
pub struct InstantiateMsg {
    pub max_registered: u32,
}

#[cw_serde]
pub enum ExecuteMsg {
    // Sender registers itself
    Register {},
}
