//! JSON fixtures captured from a mainnet-style endpoint.

/// A single event log as returned by `eth_getLogs`.
pub(crate) const LOG: &str = r#"{
    "address": "0xd10e3be2bc8f959bc8c41cf65f60de721cf89adf",
    "topics": ["0x78e4fc71ff7e525b3b4660a76336a2046232fd9bba9c65abb22fa3d07d6e7066"],
    "data": "0x0000000000000000000000000000000000000000000000000000000000000000",
    "blockNumber": "0x7f2cd",
    "blockHash": "0x3757b6efd7f82e3a832f0ec229b2fa36e622033ae7bad76b95763055a69374f7",
    "transactionIndex": "0x1",
    "transactionHash": "0xecd8a21609fa852c08249f6c767b7097481da34b9f8d2aae70067918955b4e69",
    "logIndex": "0x6",
    "removed": false
}"#;

/// Bloom filter carried by [`RECEIPT`].
pub(crate) const LOGS_BLOOM: &str = "0x00000000000000000000000000000000000000000000000000000000000020000000000000000000000000040000000000000000000000000000000000000000000000000000000000000001000000000000000000000000000000000000000000000200000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000040000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000100000000000000000000000000000000000000000000000000000000000000000000000000000";

/// A receipt as returned by `eth_getTransactionReceipt`, embedding [`LOG`].
pub(crate) const RECEIPT: &str = r#"{
    "blockHash": "0x3757b6efd7f82e3a832f0ec229b2fa36e622033ae7bad76b95763055a69374f7",
    "blockNumber": "0x7f2cd",
    "contractAddress": null,
    "cumulativeGasUsed": "0x13356",
    "gasUsed": "0x6384",
    "logs": [{
        "address": "0xd10e3be2bc8f959bc8c41cf65f60de721cf89adf",
        "topics": ["0x78e4fc71ff7e525b3b4660a76336a2046232fd9bba9c65abb22fa3d07d6e7066"],
        "data": "0x0000000000000000000000000000000000000000000000000000000000000000",
        "blockNumber": "0x7f2cd",
        "blockHash": "0x3757b6efd7f82e3a832f0ec229b2fa36e622033ae7bad76b95763055a69374f7",
        "transactionIndex": "0x1",
        "transactionHash": "0xecd8a21609fa852c08249f6c767b7097481da34b9f8d2aae70067918955b4e69",
        "logIndex": "0x6",
        "removed": false
    }],
    "logsBloom": "0x00000000000000000000000000000000000000000000000000000000000020000000000000000000000000040000000000000000000000000000000000000000000000000000000000000001000000000000000000000000000000000000000000000200000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000040000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000100000000000000000000000000000000000000000000000000000000000000000000000000000",
    "root": "0xe367ea197d629892e7b25ea246fba93cd8ae053d468cc5997a816cc85d660321",
    "transactionHash": "0xecd8a21609fa852c08249f6c767b7097481da34b9f8d2aae70067918955b4e69",
    "transactionIndex": "0x1"
}"#;

/// A mined transaction as returned by `eth_getTransactionByHash`.
pub(crate) const TRANSACTION: &str = r#"{
    "hash": "0xc6ef2fc5426d6ad6fd9e2a26abeab0aa2411b7ab17f30a99d3cb96aed1d1055b",
    "nonce": "0x15",
    "blockHash": "0xbeab0aa2411b7ab17f30a99d3cb96aed1d1055bc6ef2fc5426d6ad6fd9e2a26a",
    "blockNumber": "0x15df",
    "transactionIndex": "0x41",
    "from": "0x407d73d8a49eeb85d32cf465507dd71d507100c1",
    "to": "0x853f43d8a49eeb85d32cf465507dd71d507100c1",
    "value": "0x51248487c7466b7062d",
    "gas": "0xc350",
    "gasPrice": "0x4a817c800",
    "input": "0x68656c6c6f21"
}"#;
