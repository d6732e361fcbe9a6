//! Price-to-earnings multiple valuation.

/// Computes EPS × reference P/E.
///
/// Negative earnings give a negative value, which summaries drop.
#[must_use]
pub fn pe_multiple(eps: f64, reference_pe: f64) -> f64 {
    eps * reference_pe
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pe_multiple() {
        assert_eq!(pe_multiple(2.5, 20.0), 50.0);
        assert_eq!(pe_multiple(-1.0, 20.0), -20.0);
    }
}
