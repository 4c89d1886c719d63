use cw_multi_test::Executor;

use cheesecake_minter::error::ContractError as MinterContractError;
use cheesecake_minter::msg::ExecuteMsg as MinterExecuteMsg;
use minter_types::QueryMsg as MinterQueryMsg;
use pauser::PauseError;

use crate::helpers::mock_messages::minter_mock_messages::return_mint_price;
use crate::helpers::setup::setup;
use crate::helpers::utils::{advance_time, create_collection, register, start_presale};

#[test]
fn test_pause_minter() {
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
    start_presale(&mut app, &minter_address, &admin, 60);

    // Only the admin can pause
    let error = app
        .execute_contract(
            creator.clone(),
            minter_address.clone(),
            &MinterExecuteMsg::SetPaused { paused: true },
            &[],
        )
        .unwrap_err();
    let error = error.source().unwrap();
    let error = error.downcast_ref::<MinterContractError>().unwrap();
    assert_eq!(error, &MinterContractError::Unauthorized {});

    app.execute_contract(
        admin.clone(),
        minter_address.clone(),
        &MinterExecuteMsg::SetPaused { paused: true },
        &[],
    )
    .unwrap();

    let is_paused: bool = app
        .wrap()
        .query_wasm_smart(&minter_address, &MinterQueryMsg::IsPaused {})
        .unwrap();
    assert!(is_paused);

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
    assert_eq!(error, &MinterContractError::Pause(PauseError::Paused {}));

    app.execute_contract(
        admin.clone(),
        minter_address.clone(),
        &MinterExecuteMsg::SetPaused { paused: false },
        &[],
    )
    .unwrap();
    app.execute_contract(
        creator.clone(),
        minter_address.clone(),
        &MinterExecuteMsg::PresaleMint {},
        &[return_mint_price()],
    )
    .unwrap();

    // Pause is checked before the sale phase
    app.execute_contract(
        admin.clone(),
        minter_address.clone(),
        &MinterExecuteMsg::SetPaused { paused: true },
        &[],
    )
    .unwrap();
    advance_time(&mut app, 60);
    let error = app
        .execute_contract(
            collector.clone(),
            minter_address.clone(),
            &MinterExecuteMsg::Mint {},
            &[return_mint_price()],
        )
        .unwrap_err();
    let error = error.source().unwrap();
    let error = error.downcast_ref::<MinterContractError>().unwrap();
    assert_eq!(error, &MinterContractError::Pause(PauseError::Paused {}));

    // Transfers are still allowed while paused
    app.execute_contract(
        creator.clone(),
        minter_address.clone(),
        &MinterExecuteMsg::TransferNft {
            recipient: collector.to_string(),
            token_id: 1,
        },
        &[],
    )
    .unwrap();

    app.execute_contract(
        admin.clone(),
        minter_address.clone(),
        &MinterExecuteMsg::SetPaused { paused: false },
        &[],
    )
    .unwrap();
    app.execute_contract(
        collector.clone(),
        minter_address.clone(),
        &MinterExecuteMsg::Mint {},
        &[return_mint_price()],
    )
    .unwrap();

    let balance: u32 = app
        .wrap()
        .query_wasm_smart(
            &minter_address,
            &MinterQueryMsg::Balance {
                owner: collector.to_string(),
            },
        )
        .unwrap();
    assert_eq!(balance, 2);
}
