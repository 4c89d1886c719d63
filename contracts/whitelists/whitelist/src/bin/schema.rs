use cosmwasm_schema::write_api;

use cheesecake_whitelist::msg::{ExecuteMsg, InstantiateMsg};
use whitelist_types::WhitelistQueryMsgs;

fn main() {
    write_api! {
        instantiate: InstantiateMsg,
        execute: ExecuteMsg,
        query: WhitelistQueryMsgs,
    }
}
