use cosmwasm_schema::write_api;

use cheesecake_minter::msg::{ExecuteMsg, InstantiateMsg};
use minter_types::QueryMsg;

fn main() {
    write_api! {
        instantiate: InstantiateMsg,
        execute: ExecuteMsg,
        query: QueryMsg,
    }
}
