use cosmwasm_std::{coin, Uint128};
use cw_multi_test::Executor;

use cheesecake_minter::error::ContractError as MinterContractError;
use cheesecake_minter::msg::ExecuteMsg as MinterExecuteMsg;
use minter_types::{OwnerOfResponse, QueryMsg as MinterQueryMsg, SalePhase, SaleWindow};

use crate::helpers::mock_messages::minter_mock_messages::{return_mint_price, MINT_PRICE};
use crate::helpers::setup::{setup, DENOM};
use crate::helpers::utils::{
    advance_time, create_collection, query_denom_balance, register, start_presale,
};

#[test]
fn test_presale_minting() {
    let res = setup();
    let admin = res.test_accounts.admin;
    let creator = res.test_accounts.creator;
    let collector = res.test_accounts.collector;
    let mut app = res.app;

    let (whitelist_address, minter_address) = create_collection(
        &mut app,
        res.whitelist_code_id,
        res.minter_code_id,
        &admin,
        10,
        20,
    );
    register(&mut app, &whitelist_address, &creator);

    // Presale has not been started
    let error = app
        .execute_contract(
            creator.clone(),
            minter_address.clone(),
            &MinterExecuteMsg::PresaleMint {},
            &[return_mint_price()],
        )
        .unwrap_err();
    let error = error.source().unwrap();
    let error = error.downcast_ref::<MinterContractError>().unwrap();
    assert_eq!(error, &MinterContractError::PresaleNotRunning {});

    start_presale(&mut app, &minter_address, &admin, 300);

    let window: Option<SaleWindow> = app
        .wrap()
        .query_wasm_smart(&minter_address, &MinterQueryMsg::SaleWindow {})
        .unwrap();
    let window = window.unwrap();
    assert_eq!(window.start_time, app.block_info().time);
    assert_eq!(window.duration, 300);

    let phase: SalePhase = app
        .wrap()
        .query_wasm_smart(&minter_address, &MinterQueryMsg::Phase {})
        .unwrap();
    assert_eq!(phase, SalePhase::Presale);

    // Collector is not registered
    let error = app
        .execute_contract(
            collector.clone(),
            minter_address.clone(),
            &MinterExecuteMsg::PresaleMint {},
            &[return_mint_price()],
        )
        .unwrap_err();
    let error = error.source().unwrap();
    let error = error.downcast_ref::<MinterContractError>().unwrap();
    assert_eq!(error, &MinterContractError::NotWhitelisted {});

    // Underpaid
    let error = app
        .execute_contract(
            creator.clone(),
            minter_address.clone(),
            &MinterExecuteMsg::PresaleMint {},
            &[coin(MINT_PRICE - 1, DENOM)],
        )
        .unwrap_err();
    let error = error.source().unwrap();
    let error = error.downcast_ref::<MinterContractError>().unwrap();
    assert_eq!(
        error,
        &MinterContractError::InsufficientPayment {
            expected: Uint128::new(MINT_PRICE),
            sent: Uint128::new(MINT_PRICE - 1),
        }
    );

    // Public mint is closed during presale
    let error = app
        .execute_contract(
            creator.clone(),
            minter_address.clone(),
            &MinterExecuteMsg::Mint {},
            &[return_mint_price()],
        )
        .unwrap_err();
    let error = error.source().unwrap();
    let error = error.downcast_ref::<MinterContractError>().unwrap();
    assert_eq!(error, &MinterContractError::PresaleNotEnded {});

    let res = app
        .execute_contract(
            creator.clone(),
            minter_address.clone(),
            &MinterExecuteMsg::PresaleMint {},
            &[return_mint_price()],
        )
        .unwrap();
    let token_id = res
        .events
        .iter()
        .find(|e| e.ty == "wasm")
        .unwrap()
        .attributes
        .iter()
        .find(|a| a.key == "token_id")
        .unwrap()
        .value
        .clone();
    assert_eq!(token_id, "1");

    let owner: OwnerOfResponse = app
        .wrap()
        .query_wasm_smart(&minter_address, &MinterQueryMsg::OwnerOf { token_id: 1 })
        .unwrap();
    assert_eq!(owner.owner, creator);

    // One second before the end is still presale
    advance_time(&mut app, 299);
    app.execute_contract(
        creator.clone(),
        minter_address.clone(),
        &MinterExecuteMsg::PresaleMint {},
        &[return_mint_price()],
    )
    .unwrap();

    // The end instant belongs to the public sale
    advance_time(&mut app, 1);
    let error = app
        .execute_contract(
            creator.clone(),
            minter_address.clone(),
            &MinterExecuteMsg::PresaleMint {},
            &[return_mint_price()],
        )
        .unwrap_err();
    let error = error.source().unwrap();
    let error = error.downcast_ref::<MinterContractError>().unwrap();
    assert_eq!(error, &MinterContractError::PresaleNotRunning {});

    let minted_count: u32 = app
        .wrap()
        .query_wasm_smart(&minter_address, &MinterQueryMsg::MintedCount {})
        .unwrap();
    assert_eq!(minted_count, 2);
}

#[test]
fn test_presale_supply_exhausted() {
    let res = setup();
    let admin = res.test_accounts.admin;
    let creator = res.test_accounts.creator;
    let collector = res.test_accounts.collector;
    let mut app = res.app;

    let (whitelist_address, minter_address) = create_collection(
        &mut app,
        res.whitelist_code_id,
        res.minter_code_id,
        &admin,
        10,
        2,
    );
    register(&mut app, &whitelist_address, &creator);
    register(&mut app, &whitelist_address, &collector);
    register(&mut app, &whitelist_address, &admin);
    start_presale(&mut app, &minter_address, &admin, 60);

    for minter in [&creator, &collector] {
        app.execute_contract(
            minter.clone(),
            minter_address.clone(),
            &MinterExecuteMsg::PresaleMint {},
            &[return_mint_price()],
        )
        .unwrap();
    }

    let admin_balance_before = query_denom_balance(&app, &admin, DENOM);
    let error = app
        .execute_contract(
            admin.clone(),
            minter_address.clone(),
            &MinterExecuteMsg::PresaleMint {},
            &[return_mint_price()],
        )
        .unwrap_err();
    let error = error.source().unwrap();
    let error = error.downcast_ref::<MinterContractError>().unwrap();
    assert_eq!(error, &MinterContractError::SupplyExhausted {});

    // Payment of the rejected mint is returned
    assert_eq!(
        query_denom_balance(&app, &admin, DENOM),
        admin_balance_before
    );
    assert_eq!(
        query_denom_balance(&app, &minter_address, DENOM),
        MINT_PRICE * 2
    );

    let minted_count: u32 = app
        .wrap()
        .query_wasm_smart(&minter_address, &MinterQueryMsg::MintedCount {})
        .unwrap();
    assert_eq!(minted_count, 2);

    // Failed mint leaves the admin without tokens
    let balance: u32 = app
        .wrap()
        .query_wasm_smart(
            &minter_address,
            &MinterQueryMsg::Balance {
                owner: admin.to_string(),
            },
        )
        .unwrap();
    assert_eq!(balance, 0);
}
