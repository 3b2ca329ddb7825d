#![allow(clippy::unwrap_used)]

use acoin_common::{Network, ParamsError, init, params, select_params, select_params_from_flags};

// The selection is process-wide, so every transition lives in one test.
#[test]
fn test_process_wide_selection() {
    let selector = init().unwrap();
    assert_eq!(params().network(), Network::Main);
    assert_eq!(selector.active_network(), Network::Main);

    assert!(matches!(
        select_params_from_flags(true, true),
        Err(ParamsError::ConflictingNetworks)
    ));
    assert_eq!(params().network(), Network::Main);

    assert_eq!(select_params_from_flags(true, false).unwrap(), Network::Testnet);
    assert_eq!(params().data_dir(), "testnet3");
    assert!(std::ptr::eq(params(), params()));

    select_params(Network::Regtest);
    assert_eq!(params().network(), Network::Regtest);
    assert!(!params().require_rpc_auth());

    assert!(select_params_from_flags(true, true).is_err());
    assert_eq!(params().network(), Network::Regtest);

    assert_eq!(select_params_from_flags(false, false).unwrap(), Network::Main);
    assert_eq!(
        params().genesis_hash().to_string(),
        "000005d3cd0ad1bc6b7fb092620fc19bb6a251e0905559ecfa26ca6f413ea39d"
    );

    assert!(std::ptr::eq(init().unwrap(), selector));
}
