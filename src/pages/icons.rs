//! The currency icon catalog.
//!
//! The web catalog enumerates every export of `@finery/ccy-icons`; here the
//! set is a fixed table of glyph, code, and display name.

use super::{Demo, DemoCard};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyIcon {
    pub code: &'static str,
    pub glyph: &'static str,
    pub name: &'static str,
}

pub const ALL: &[CurrencyIcon] = &[
    CurrencyIcon { code: "BTC", glyph: "\u{20bf}", name: "Bitcoin" },
    CurrencyIcon { code: "ETH", glyph: "\u{39e}", name: "Ethereum" },
    CurrencyIcon { code: "LTC", glyph: "\u{141}", name: "Litecoin" },
    CurrencyIcon { code: "XRP", glyph: "\u{2715}", name: "Ripple" },
    CurrencyIcon { code: "ADA", glyph: "\u{20b3}", name: "Cardano" },
    CurrencyIcon { code: "SOL", glyph: "\u{25ce}", name: "Solana" },
    CurrencyIcon { code: "DOT", glyph: "\u{25cf}", name: "Polkadot" },
    CurrencyIcon { code: "DOGE", glyph: "\u{110}", name: "Dogecoin" },
    CurrencyIcon { code: "USD", glyph: "$", name: "US Dollar" },
    CurrencyIcon { code: "EUR", glyph: "\u{20ac}", name: "Euro" },
    CurrencyIcon { code: "GBP", glyph: "\u{a3}", name: "Pound Sterling" },
    CurrencyIcon { code: "JPY", glyph: "\u{a5}", name: "Japanese Yen" },
];

pub const CARDS: &[DemoCard] = &[
    DemoCard { title: "BTC", snippet: "<BtcIcon />", demo: Demo::Icon(&ALL[0]) },
    DemoCard { title: "ETH", snippet: "<EthIcon />", demo: Demo::Icon(&ALL[1]) },
    DemoCard { title: "LTC", snippet: "<LtcIcon />", demo: Demo::Icon(&ALL[2]) },
    DemoCard { title: "XRP", snippet: "<XrpIcon />", demo: Demo::Icon(&ALL[3]) },
    DemoCard { title: "ADA", snippet: "<AdaIcon />", demo: Demo::Icon(&ALL[4]) },
    DemoCard { title: "SOL", snippet: "<SolIcon />", demo: Demo::Icon(&ALL[5]) },
    DemoCard { title: "DOT", snippet: "<DotIcon />", demo: Demo::Icon(&ALL[6]) },
    DemoCard { title: "DOGE", snippet: "<DogeIcon />", demo: Demo::Icon(&ALL[7]) },
    DemoCard { title: "USD", snippet: "<UsdIcon />", demo: Demo::Icon(&ALL[8]) },
    DemoCard { title: "EUR", snippet: "<EurIcon />", demo: Demo::Icon(&ALL[9]) },
    DemoCard { title: "GBP", snippet: "<GbpIcon />", demo: Demo::Icon(&ALL[10]) },
    DemoCard { title: "JPY", snippet: "<JpyIcon />", demo: Demo::Icon(&ALL[11]) },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_card_per_icon() {
        assert_eq!(CARDS.len(), ALL.len());
        for (card, icon) in CARDS.iter().zip(ALL) {
            assert_eq!(card.title, icon.code);
        }
    }
}
