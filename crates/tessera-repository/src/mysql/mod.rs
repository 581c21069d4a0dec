//! MySQL repository implementations.

mod advertisement_repository;
mod insurance_repository;
mod user_repository;

pub use advertisement_repository::MySqlAdvertisementRepository;
pub use insurance_repository::MySqlInsuranceRepository;
pub use user_repository::MySqlUserRepository;

use tessera_core::{TesseraError, TesseraResult};

/// Converts `LAST_INSERT_ID()` into the `INT` id column type.
fn inserted_id(last_insert_id: u64) -> TesseraResult<i32> {
    i32::try_from(last_insert_id).map_err(|_| {
        TesseraError::Internal(format!("Generated id {last_insert_id} does not fit INT"))
    })
}

/// Converts a `COUNT(*)` result into an unsigned count.
fn row_count(count: i64) -> u64 {
    u64::try_from(count).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inserted_id_in_range() {
        assert_eq!(inserted_id(1).unwrap(), 1);
        assert_eq!(inserted_id(i32::MAX as u64).unwrap(), i32::MAX);
    }

    #[test]
    fn test_inserted_id_overflow() {
        let err = inserted_id(u64::from(u32::MAX)).unwrap_err();
        assert!(matches!(err, TesseraError::Internal(_)));
    }

    #[test]
    fn test_row_count() {
        assert_eq!(row_count(3), 3);
        assert_eq!(row_count(-1), 0);
    }
}
