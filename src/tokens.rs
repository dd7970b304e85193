//! Static directory of popular Tea Assam tokens.
//!
//! Display only; entries are not checked against chain state.

use alloy::primitives::{address, Address};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenInfo {
    pub address: Address,
    pub name: &'static str,
}

const fn token(address: Address, name: &'static str) -> TokenInfo {
    TokenInfo { address, name }
}

pub const POPULAR_TOKENS: &[TokenInfo] = &[
    token(address!("f990e015F8DAEf9F7d51B6d57c6E105D9bd5f3be"), "butt"),
    token(address!("dD777582C445f234d3E2C6c3B3a9dd1dDf3558F1"), "Fresh Tea"),
    token(address!("623769444c1BA04c55A4690bDD2955cD4f089bb7"), "Blurtopian"),
    token(address!("1B54e5BBb545245f4c468929D64dAbb479aE055e"), "CLW"),
    token(address!("cC431866D471096a2cD4A24790128202B8Ee0E86"), "ANIME"),
    token(address!("15B7e0AF94F36aB8dBFd8ED6fd56edc0a3a73683"), "winner tea"),
    token(address!("81fB2b0D74F4B0148Ea08d0Eb65b99f187A393E3"), "TRUMP BIG TOKEN"),
    token(address!("2F3754Cb1F05fE6701C76603B1c69830347F5B3A"), "YERIM"),
    token(address!("7987954bb6aC6b79819b08bFC268917AD38E12c6"), "Teaalien"),
    token(address!("03C5273a766efC2DFb5205342B742d5E5f02d755"), "Manchester United"),
    token(address!("90f7C3F1043D595B88849Ca45b81763636Ac9dB9"), "RS"),
    token(address!("42c6698Ae5537E7a7760d313244d75f09D45D7A2"), "Lemon Tea"),
    token(address!("7f9FA637886eAb2C67c05d3087C6de92343af807"), "tea ea"),
    token(address!("c998F150999acaC9CdC311CC739c869FEBC01A65"), "Assam Tea"),
    token(address!("d8681C1F60Ba30982292CD22982Aa2A9f30adf2c"), "Airdrop Intelligent Testnet"),
    token(address!("19dab75B9D703f5a7e176CD08d5A29676aaB94fc"), "MeowTea Token"),
    token(address!("50dCB6e1f907632Fb145459faCE86E358c1Cfb0B"), "Assam AI Alliance"),
    token(address!("B6FD54D9102422f8D167C82803f875CD914d08bB"), "Gula"),
    token(address!("C4341CB2C976306AE9169efb3d8301ea287a3128"), "BITCOIN"),
    token(address!("9faE22428bBA5De88730e9C7Ccab79c8d1Ac34E5"), "Tea USD"),
];

/// Look up a listed token by name, ignoring case and surrounding whitespace.
pub fn find_by_name(name: &str) -> Option<&'static TokenInfo> {
    let name = name.trim();
    POPULAR_TOKENS
        .iter()
        .find(|token| token.name.eq_ignore_ascii_case(name))
}

pub fn find_by_address(address: Address) -> Option<&'static TokenInfo> {
    POPULAR_TOKENS.iter().find(|token| token.address == address)
}
