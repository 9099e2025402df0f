//! Currency rate representation.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::parse_rate;

/// The four quotes the bank publishes for each currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RateKind {
    /// Forex buying rate (non-physical transfers).
    ForexBuying,
    /// Forex selling rate (non-physical transfers).
    ForexSelling,
    /// Banknote buying rate (physical notes).
    BanknoteBuying,
    /// Banknote selling rate (physical notes).
    BanknoteSelling,
}

impl RateKind {
    /// Returns all rate kinds in publication order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::ForexBuying,
            Self::ForexSelling,
            Self::BanknoteBuying,
            Self::BanknoteSelling,
        ]
    }

    /// Returns the snake_case field name used in output formats.
    #[must_use]
    pub const fn field_name(&self) -> &'static str {
        match self {
            Self::ForexBuying => "forex_buying",
            Self::ForexSelling => "forex_selling",
            Self::BanknoteBuying => "banknote_buying",
            Self::BanknoteSelling => "banknote_selling",
        }
    }
}

impl std::fmt::Display for RateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.field_name())
    }
}

/// A single currency entry of a rate sheet.
///
/// Rates are kept exactly as the bank published them. The decimal accessors
/// ([`forex_buying`](Self::forex_buying) and friends) parse the stored text on
/// every call, so they can never disagree with it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Currency {
    #[serde(rename = "@CurrencyCode", default)]
    code: String,
    #[serde(rename = "Unit", default)]
    unit: u32,
    #[serde(rename = "Isim", default)]
    local_name: Option<String>,
    #[serde(rename = "CurrencyName", default)]
    display_name: Option<String>,
    #[serde(rename = "ForexBuying", default)]
    forex_buying: Option<String>,
    #[serde(rename = "ForexSelling", default)]
    forex_selling: Option<String>,
    #[serde(rename = "BanknoteBuying", default)]
    banknote_buying: Option<String>,
    #[serde(rename = "BanknoteSelling", default)]
    banknote_selling: Option<String>,
}

impl Currency {
    /// Creates a currency with the given code and unit and no names or rates.
    #[must_use]
    pub fn new(code: impl Into<String>, unit: u32) -> Self {
        Self {
            code: code.into(),
            unit,
            ..Self::default()
        }
    }

    /// Sets the local (Turkish) and display (English) names.
    #[must_use]
    pub fn with_names(
        mut self,
        local_name: Option<impl Into<String>>,
        display_name: Option<impl Into<String>>,
    ) -> Self {
        self.local_name = local_name.map(Into::into);
        self.display_name = display_name.map(Into::into);
        self
    }

    /// Sets the raw text of one rate field.
    #[must_use]
    pub fn with_rate(mut self, kind: RateKind, raw: Option<impl Into<String>>) -> Self {
        let raw = raw.map(Into::into);
        match kind {
            RateKind::ForexBuying => self.forex_buying = raw,
            RateKind::ForexSelling => self.forex_selling = raw,
            RateKind::BanknoteBuying => self.banknote_buying = raw,
            RateKind::BanknoteSelling => self.banknote_selling = raw,
        }
        self
    }

    /// Returns the currency code (e.g. `USD`).
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the quotation unit the rates are priced against (e.g. 100 for JPY).
    #[must_use]
    pub const fn unit(&self) -> u32 {
        self.unit
    }

    /// Returns the Turkish name (e.g. `ABD DOLARI`).
    #[must_use]
    pub fn local_name(&self) -> Option<&str> {
        self.local_name.as_deref()
    }

    /// Returns the English name (e.g. `US DOLLAR`).
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// Returns the raw text of a rate field as received.
    #[must_use]
    pub fn raw_rate(&self, kind: RateKind) -> Option<&str> {
        match kind {
            RateKind::ForexBuying => self.forex_buying.as_deref(),
            RateKind::ForexSelling => self.forex_selling.as_deref(),
            RateKind::BanknoteBuying => self.banknote_buying.as_deref(),
            RateKind::BanknoteSelling => self.banknote_selling.as_deref(),
        }
    }

    /// Returns a rate field as a decimal, zero when blank or malformed.
    #[must_use]
    pub fn rate(&self, kind: RateKind) -> Decimal {
        parse_rate(self.raw_rate(kind))
    }

    /// Forex buying rate.
    #[must_use]
    pub fn forex_buying(&self) -> Decimal {
        self.rate(RateKind::ForexBuying)
    }

    /// Forex selling rate.
    #[must_use]
    pub fn forex_selling(&self) -> Decimal {
        self.rate(RateKind::ForexSelling)
    }

    /// Banknote buying rate.
    #[must_use]
    pub fn banknote_buying(&self) -> Decimal {
        self.rate(RateKind::BanknoteBuying)
    }

    /// Banknote selling rate.
    #[must_use]
    pub fn banknote_selling(&self) -> Decimal {
        self.rate(RateKind::BanknoteSelling)
    }

    /// Returns a rate normalized to a single unit of the currency.
    ///
    /// A unit of zero (missing in the document) is treated as one.
    #[must_use]
    pub fn per_unit(&self, kind: RateKind) -> Decimal {
        let rate = self.rate(kind);
        match self.unit {
            0 | 1 => rate,
            unit => rate / Decimal::from(unit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn usd() -> Currency {
        Currency::new("USD", 1)
            .with_names(Some("ABD DOLARI"), Some("US DOLLAR"))
            .with_rate(RateKind::ForexBuying, Some("27.1234"))
            .with_rate(RateKind::ForexSelling, Some("27.1723"))
            .with_rate(RateKind::BanknoteBuying, None::<String>)
            .with_rate(RateKind::BanknoteSelling, Some(""))
    }

    #[test]
    fn test_accessors() {
        let c = usd();
        assert_eq!(c.code(), "USD");
        assert_eq!(c.unit(), 1);
        assert_eq!(c.local_name(), Some("ABD DOLARI"));
        assert_eq!(c.display_name(), Some("US DOLLAR"));
        assert_eq!(c.raw_rate(RateKind::ForexBuying), Some("27.1234"));
    }

    #[test]
    fn test_decimal_views() {
        let c = usd();
        assert_eq!(c.forex_buying(), dec!(27.1234));
        assert_eq!(c.forex_selling(), dec!(27.1723));
        assert_eq!(c.banknote_buying(), Decimal::ZERO);
        assert_eq!(c.banknote_selling(), Decimal::ZERO);
    }

    #[test]
    fn test_decimal_view_follows_raw_text() {
        let c = usd().with_rate(RateKind::ForexBuying, Some("30.0001"));
        assert_eq!(c.forex_buying(), dec!(30.0001));
    }

    #[test]
    fn test_per_unit() {
        let jpy = Currency::new("JPY", 100).with_rate(RateKind::ForexBuying, Some("21.6789"));
        assert_eq!(jpy.per_unit(RateKind::ForexBuying), dec!(0.216789));

        let unknown = Currency::new("XXX", 0).with_rate(RateKind::ForexBuying, Some("2.5"));
        assert_eq!(unknown.per_unit(RateKind::ForexBuying), dec!(2.5));
    }

    #[test]
    fn test_rate_kind_names() {
        let names: Vec<_> = RateKind::all().iter().map(RateKind::field_name).collect();
        assert_eq!(
            names,
            ["forex_buying", "forex_selling", "banknote_buying", "banknote_selling"]
        );
    }

    #[test]
    fn test_deserialize_currency_element() {
        let xml = r#"<Currency CrossOrder="0" Kod="USD" CurrencyCode="USD">
            <Unit>1</Unit>
            <Isim>ABD DOLARI</Isim>
            <CurrencyName>US DOLLAR</CurrencyName>
            <ForexBuying>27.1234</ForexBuying>
            <ForexSelling>27.1723</ForexSelling>
            <BanknoteBuying>27.1044</BanknoteBuying>
            <BanknoteSelling>27.2131</BanknoteSelling>
            <CrossRateUSD/>
            <CrossRateOther/>
        </Currency>"#;

        let c: Currency = quick_xml::de::from_str(xml).unwrap();
        assert_eq!(c.code(), "USD");
        assert_eq!(c.unit(), 1);
        assert_eq!(c.display_name(), Some("US DOLLAR"));
        assert_eq!(c.banknote_selling(), dec!(27.2131));
    }

    #[test]
    fn test_deserialize_missing_rates() {
        let xml = r#"<Currency CurrencyCode="XDR">
            <Unit>1</Unit>
            <Isim>OZEL CEKME HAKKI (SDR)</Isim>
            <CurrencyName>SPECIAL DRAWING RIGHT (SDR)</CurrencyName>
            <ForexBuying>36.1234</ForexBuying>
            <ForexSelling/>
        </Currency>"#;

        let c: Currency = quick_xml::de::from_str(xml).unwrap();
        assert_eq!(c.forex_buying(), dec!(36.1234));
        assert_eq!(c.forex_selling(), Decimal::ZERO);
        assert_eq!(c.raw_rate(RateKind::BanknoteBuying), None);
        assert_eq!(c.banknote_buying(), Decimal::ZERO);
    }
}
