// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use adsales::{CoreError, StoreError};
use adsales_domain::DomainError;

use crate::{AdImportError, ApiError, translate_core_error};

#[test]
fn test_domain_errors_map_to_fields() {
    let err: ApiError = DomainError::InvalidVolume(0).into();
    assert_eq!(
        err,
        ApiError::InvalidInput {
            field: String::from("volume"),
            message: String::from("Invalid volume number 0: volumes run from 1 to 2147483647"),
        }
    );

    let err: ApiError = DomainError::InvalidCalendarConfig {
        field: "fallback_volume",
        reason: String::from("must be at least 1"),
    }
    .into();
    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "fallback_volume"));
}

#[test]
fn test_store_failure_is_internal() {
    let err: ApiError = translate_core_error(CoreError::Store(StoreError(String::from("disk full"))));
    assert_eq!(
        err,
        ApiError::Internal {
            message: String::from("Override store failure: disk full"),
        }
    );
    assert_eq!(
        err.to_string(),
        "Internal error: Override store failure: disk full"
    );
}

#[test]
fn test_import_errors_map_by_kind() {
    let utf8: AdImportError = String::from_utf8(vec![0xff]).unwrap_err().into();
    assert!(matches!(ApiError::from(utf8), ApiError::Internal { .. }));

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(false)
        .from_reader("a,b\nc\n".as_bytes());
    let csv_err: csv::Error = reader.records().find_map(Result::err).unwrap();
    let err: ApiError = AdImportError::from(csv_err).into();
    assert!(matches!(err, ApiError::InvalidCsvFormat { .. }));
}
