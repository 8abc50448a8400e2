use {
    alloy_primitives::U256,
    clap::Parser,
    seaport_decoder::{
        domain::{pipeline, seaport::Schema},
        infra::cli::Args,
    },
    serde_json::json,
    std::io::Write,
};

const SIGNATURE: &str = "matchOrders(((address,address,(uint8,address,uint256,uint256,uint256)[],\
(uint8,address,uint256,uint256,uint256,address)[],uint8,uint256,uint256,bytes32,uint256,bytes32,\
uint256),bytes)[],((uint256,uint256)[],(uint256,uint256)[])[])";

const SELLER: &str = "0x6a3c4a5e4f3d1b7b3e1b4c1f1e2b1a0d9c8b7a61";
const BUYER: &str = "0x9b1f7a2c3d4e5f60718293a4b5c6d7e8f9012345";
const COLLECTION: &str = "0xbc4ca0eda7647a8ab7c2061c2e118a18a936f13d";
const WETH: &str = "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2";
const ZERO: &str = "0x0000000000000000000000000000000000000000";
const ZERO_HASH: &str = "0x0000000000000000000000000000000000000000000000000000000000000000";
const CONDUIT_KEY: &str = "0x0000007b02230091a7ed01230072f7006a004d60a8d4e71d599b8104250f0000";

/// A listing of an NFT matched with an offer for it in WETH, as printed by
/// `cast 4byte-decode`.
fn decoder_output() -> String {
    let listing = format!(
        "(({SELLER}, {ZERO}, [(2, {COLLECTION}, 8520, 1, 1)], \
         [(1, {WETH}, 0, 975000000000000000, 975000000000000000, {SELLER}), \
         (1, {WETH}, 0, 25000000000000000, 25000000000000000, {BUYER})], \
         0, 1700000000, 1702592000, {ZERO_HASH}, 24446860302761739304752683030156737591518664810215442929812345678901234567890, \
         {CONDUIT_KEY}, 2), 0x)"
    );
    let offer = format!(
        "(({BUYER}, {ZERO}, [(1, {WETH}, 0, 1000000000000000000, 1000000000000000000)], \
         [(2, {COLLECTION}, 8520, 1, 1, {BUYER})], \
         0, 1700000100, 1700086500, {ZERO_HASH}, 42, {CONDUIT_KEY}, 1), \
         0x3f2b8e4c6d1a9f0e7b5c3a2d4e6f8091a2b3c4d5e6f708192a3b4c5d6e7f80911b)"
    );
    let fulfillments = "[([(0, 0)], [(1, 0)]), ([(1, 0)], [(0, 0)]), ([(1, 0)], [(0, 1)])]";
    format!("{SIGNATURE}\n[{listing}, {offer}]\n{fulfillments}\n")
}

#[test]
fn decodes_listing_matched_with_offer() {
    let decoded = pipeline::decode_arguments(&decoder_output(), &Schema::default()).unwrap();

    assert_eq!(decoded.orders.len(), 2);
    let listing = &decoded.orders[0].parameters;
    assert_eq!(listing.offerer, SELLER);
    assert_eq!(listing.offer[0].item_type.name, "ERC721");
    assert_eq!(listing.offer[0].identifier_or_criteria, U256::from(8520));
    assert_eq!(listing.consideration.len(), 2);
    assert_eq!(listing.consideration[1].recipient, BUYER);
    assert_eq!(
        listing.consideration[0].start_amount,
        U256::from(975_000_000_000_000_000_u64)
    );
    assert_eq!(listing.order_type.name, "FULL_OPEN");
    assert_eq!(
        listing.salt.to_string(),
        "24446860302761739304752683030156737591518664810215442929812345678901234567890"
    );
    assert_eq!(decoded.orders[0].signature, "0x");

    let offer = &decoded.orders[1].parameters;
    assert_eq!(offer.offer[0].item_type.name, "ERC20");
    assert_eq!(offer.consideration[0].item_type.name, "ERC721");
    assert_eq!(offer.total_original_consideration_items, U256::from(1));

    assert_eq!(decoded.fulfillments.len(), 3);
    let last = &decoded.fulfillments[2];
    assert_eq!(last.offer_components[0].order_index, U256::from(1));
    assert_eq!(last.consideration_components[0].item_index, U256::from(1));
}

#[test]
fn prints_json_for_decoded_file() {
    observe::tracing::initialize_reentrant(&observe::Config::new("seaport_decoder=debug", false));
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(decoder_output().as_bytes()).unwrap();
    let path = file.path().to_str().unwrap();
    let args = Args::parse_from(["seaport-decoder", "--decoded", path, "--format", "json"]);

    let mut out = Vec::new();
    seaport_decoder::run(&args, &mut out).unwrap();

    let printed: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(printed["orders"].as_array().unwrap().len(), 2);
    assert_eq!(
        printed["orders"][1]["parameters"]["offer"][0],
        json!({
            "itemType": "ERC20",
            "token": WETH,
            "identifierOrCriteria": "0",
            "startAmount": "1000000000000000000",
            "endAmount": "1000000000000000000",
        })
    );
    assert_eq!(printed["orders"][1]["parameters"]["salt"], "42");
    assert_eq!(
        printed["fulfillments"][0],
        json!({
            "offerComponents": [{ "orderIndex": "0", "itemIndex": "0" }],
            "considerationComponents": [{ "orderIndex": "1", "itemIndex": "0" }],
        })
    );
}

#[test]
fn malformed_decoded_file_fails() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"matchOrders(...)\n[((0x01, 0x02)]\n[]\n").unwrap();
    let path = file.path().to_str().unwrap();
    let args = Args::parse_from(["seaport-decoder", "--decoded", path]);

    let err = seaport_decoder::run(&args, &mut Vec::new()).unwrap_err();
    let err = err.downcast::<pipeline::Error>().unwrap();
    assert!(matches!(
        err,
        pipeline::Error::Parse {
            argument: pipeline::Argument::Orders,
            ..
        }
    ));
}
