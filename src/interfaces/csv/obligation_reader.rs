use crate::domain::obligation::Obligation;
use crate::error::{PaymentError, Result};
use std::io::Read;

/// Reads obligations from a CSV source.
///
/// This reader wraps `csv::Reader` and provides an iterator over `Result<Obligation>`.
/// It handles whitespace trimming and flexible record lengths automatically.
pub struct ObligationReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> ObligationReader<R> {
    /// Creates a new `ObligationReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes obligations.
    pub fn obligations(self) -> impl Iterator<Item = Result<Obligation>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PaymentError::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::money::{Money, Rate};
    use rust_decimal_macros::dec;

    #[test]
    fn test_reader_valid_stream() {
        let data = "id, min_due, total_due, rate\n1, 938, 18750, 24.99\n2, 2250, 45000, 22.99";
        let reader = ObligationReader::new(data.as_bytes());
        let results: Vec<Result<Obligation>> = reader.obligations().collect();

        assert_eq!(results.len(), 2);
        let first = results[0].as_ref().unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(first.min_due, Money::new(dec!(938)));
        assert_eq!(first.rate, Rate::new(dec!(24.99)));
    }

    #[test]
    fn test_reader_malformed_line() {
        let data = "id, min_due, total_due, rate\n1, not_a_number, 18750, 24.99";
        let reader = ObligationReader::new(data.as_bytes());
        let results: Vec<Result<Obligation>> = reader.obligations().collect();

        assert!(results[0].is_err());
    }

    #[test]
    fn test_reader_preserves_input_order() {
        let data = "id, min_due, total_due, rate\n4, 1380, 27600, 19.99\n1, 938, 18750, 24.99";
        let reader = ObligationReader::new(data.as_bytes());
        let ids: Vec<u32> = reader
            .obligations()
            .map(|result| result.unwrap().id)
            .collect();

        assert_eq!(ids, vec![4, 1]);
    }
}
