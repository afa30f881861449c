//! FX module - normalization of reported balances into the base currency.

mod currency_normalizer;

pub use currency_normalizer::CurrencyNormalizer;
