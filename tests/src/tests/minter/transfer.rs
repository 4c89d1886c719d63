use cw_multi_test::Executor;

use cheesecake_minter::error::ContractError as MinterContractError;
use cheesecake_minter::msg::ExecuteMsg as MinterExecuteMsg;
use minter_types::{OwnerOfResponse, QueryMsg as MinterQueryMsg, TokensResponse};

use crate::helpers::mock_messages::minter_mock_messages::return_mint_price;
use crate::helpers::setup::setup;
use crate::helpers::utils::{create_collection, register, start_presale};

#[test]
fn test_transfer_nft() {
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
    for _ in 0..2 {
        app.execute_contract(
            creator.clone(),
            minter_address.clone(),
            &MinterExecuteMsg::PresaleMint {},
            &[return_mint_price()],
        )
        .unwrap();
    }

    let error = app
        .execute_contract(
            creator.clone(),
            minter_address.clone(),
            &MinterExecuteMsg::TransferNft {
                recipient: collector.to_string(),
                token_id: 5,
            },
            &[],
        )
        .unwrap_err();
    let error = error.source().unwrap();
    let error = error.downcast_ref::<MinterContractError>().unwrap();
    assert_eq!(error, &MinterContractError::TokenNotFound { token_id: 5 });

    let error = app
        .execute_contract(
            collector.clone(),
            minter_address.clone(),
            &MinterExecuteMsg::TransferNft {
                recipient: collector.to_string(),
                token_id: 1,
            },
            &[],
        )
        .unwrap_err();
    let error = error.source().unwrap();
    let error = error.downcast_ref::<MinterContractError>().unwrap();
    assert_eq!(error, &MinterContractError::NotTokenOwner {});

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

    let owner: OwnerOfResponse = app
        .wrap()
        .query_wasm_smart(&minter_address, &MinterQueryMsg::OwnerOf { token_id: 1 })
        .unwrap();
    assert_eq!(owner.owner, collector);

    let tokens: TokensResponse = app
        .wrap()
        .query_wasm_smart(
            &minter_address,
            &MinterQueryMsg::Tokens {
                owner: creator.to_string(),
                start_after: None,
                limit: None,
            },
        )
        .unwrap();
    assert_eq!(tokens.tokens, vec![2]);

    let tokens: TokensResponse = app
        .wrap()
        .query_wasm_smart(
            &minter_address,
            &MinterQueryMsg::Tokens {
                owner: collector.to_string(),
                start_after: None,
                limit: None,
            },
        )
        .unwrap();
    assert_eq!(tokens.tokens, vec![1]);
}
