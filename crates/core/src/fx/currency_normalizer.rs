use log::warn;
use rust_decimal::Decimal;

/// Normalizes reported balances into the base reporting currency.
///
/// The upstream report carries at most two denominations: the base currency
/// (labeled "real"/"BRL", or not labeled at all) and US dollars. Dollar
/// balances are converted with one fixed rate fixed per analysis run; there
/// is no rate history here. The rate is supplied by the caller's
/// configuration, never hard-coded.
#[derive(Debug, Clone)]
pub struct CurrencyNormalizer {
    base_currency: String,
    usd_rate: Decimal,
}

impl CurrencyNormalizer {
    pub fn new(base_currency: impl Into<String>, usd_rate: Decimal) -> Self {
        Self {
            base_currency: base_currency.into(),
            usd_rate,
        }
    }

    pub fn base_currency(&self) -> &str {
        &self.base_currency
    }

    /// Converts an amount labeled with the given source-currency text into
    /// the base currency.
    ///
    /// Labels are free text from the upstream source ("real", "usd", "BRL",
    /// portfolio suffixes). An unrecognized label is treated as already in
    /// the base currency, with a warning; aborting the whole snapshot over
    /// one noisy label would lose the rest of the report.
    pub fn normalize(&self, amount: Decimal, currency_label: &str) -> Decimal {
        let label = currency_label.trim().to_lowercase();
        match label.as_str() {
            "" | "real" | "reais" | "brl" | "r$" => amount,
            "usd" | "dolar" | "dólar" | "us$" => amount * self.usd_rate,
            other => {
                warn!(
                    "Unrecognized currency label '{}', assuming {}",
                    other, self.base_currency
                );
                amount
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn normalizer() -> CurrencyNormalizer {
        CurrencyNormalizer::new("BRL", dec!(5.85))
    }

    #[test]
    fn test_base_currency_passes_through() {
        assert_eq!(normalizer().normalize(dec!(100), "real"), dec!(100));
        assert_eq!(normalizer().normalize(dec!(100), "BRL"), dec!(100));
        assert_eq!(normalizer().normalize(dec!(100), ""), dec!(100));
    }

    #[test]
    fn test_usd_is_converted_with_the_fixed_rate() {
        assert_eq!(normalizer().normalize(dec!(100), "usd"), dec!(585));
        assert_eq!(normalizer().normalize(dec!(100), "USD"), dec!(585));
    }

    #[test]
    fn test_unknown_label_is_assumed_base() {
        assert_eq!(normalizer().normalize(dec!(100), "euro"), dec!(100));
    }
}
