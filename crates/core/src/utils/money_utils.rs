use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;

lazy_static! {
    /// Everything that is not a digit, sign, or pt-BR separator.
    static ref NOISE: Regex = Regex::new(r"[^0-9.,\-]").unwrap();
    /// Dot groups of three digits, i.e. pt-BR thousands separators.
    static ref THOUSANDS: Regex = Regex::new(r"^-?\d{1,3}(\.\d{3})+$").unwrap();
}

/// Parses a monetary value as reported upstream.
///
/// Upstream formatting is inconsistent: currency symbols ("R$ 1.234,56"),
/// thousands dots, decimal commas, bare decimals ("18757.83"), and
/// placeholder text ("Não disponível") all occur in the same column.
/// Returns `None` when no numeric value can be recovered; callers decide
/// whether that is noise (zero contribution) or a contract violation.
///
/// # Arguments
/// * `raw` - The cell text exactly as the upstream source sent it
pub fn parse_monetary(raw: &str) -> Option<Decimal> {
    let stripped = NOISE.replace_all(raw.trim(), "");
    if stripped.is_empty() || stripped == "-" {
        return None;
    }

    let normalized = match (stripped.contains(','), stripped.contains('.')) {
        // pt-BR full form: dots are grouping, the comma is the decimal mark
        (true, true) => stripped.replace('.', "").replace(',', "."),
        (true, false) => stripped.replace(',', "."),
        // Dots only: grouping if they come in groups of three, decimal otherwise
        (false, true) if THOUSANDS.is_match(&stripped) => stripped.replace('.', ""),
        _ => stripped.into_owned(),
    };

    Decimal::from_str(&normalized).ok()
}
