//! Builds a sample metadata document and prints its JSON.

use bigdecimal::BigDecimal;
use nft_meta::{encode_metadata, Attribute, MetaDataBuilder};
use num_bigint::BigInt;

fn main() {
    let metadata = MetaDataBuilder::new()
        .name("deep-sea-000042")
        .description("A deep sea dweller")
        .image("ipfs://bafybeigdyrzt5example/42.png")
        .external_link("https://example.com/deep-sea/42")
        .attribute(Attribute::string("Base", "Starfish"))
        .attribute(Attribute::uint64("Level", 5))
        .attribute(Attribute::typed_int64("Aqua Power", 40, "boost_number"))
        .attribute(Attribute::big_int("Max Supply", BigInt::from(10).pow(24)))
        .attribute(Attribute::decimal(
            "Stamina",
            BigDecimal::from(14) / BigDecimal::from(10),
        ))
        .build();

    match encode_metadata(&metadata) {
        Ok(bytes) => println!("{}", String::from_utf8_lossy(&bytes)),
        Err(err) => eprintln!("encode failed: {err}"),
    }
}
