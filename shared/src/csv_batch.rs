//! Turns an uploaded base64 CSV payload into a batch of tagged records.

use crate::core::{IdGenerator, Record};
use crate::error::HandlerError;
use base64::{
    alphabet,
    engine::{GeneralPurpose, GeneralPurposeConfig},
    Engine,
};
use csv::{ReaderBuilder, StringRecord};
use std::collections::BTreeMap;

// Standard alphabet with padding, tolerating non-zero bits after the last
// full byte as most encoders in the wild do.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// Decodes a base64 request body into UTF-8 text.
///
/// ASCII whitespace inside the encoded body is ignored so line-wrapped
/// payloads decode the same as single-line ones.
pub fn decode_payload(body: &[u8]) -> Result<String, HandlerError> {
    let compact: Vec<u8> = body
        .iter()
        .copied()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();

    let bytes = PAYLOAD_ENGINE
        .decode(compact)
        .map_err(|e| HandlerError::Decode(format!("Invalid base64 payload: {}", e)))?;

    String::from_utf8(bytes)
        .map_err(|e| HandlerError::Decode(format!("Payload is not valid UTF-8: {}", e)))
}

/// Parses CSV text into records, one per non-empty data row.
///
/// The first non-empty line is the header. Row cells are matched to header
/// names by position: missing trailing cells are left out of the record and
/// surplus cells are dropped.
pub fn parse_records<I: IdGenerator>(
    text: &str,
    id_generator: &I,
) -> Result<Vec<Record>, HandlerError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.trim().as_bytes());

    let mut rows = reader.records();
    let header = loop {
        match rows.next() {
            Some(row) => {
                let row = row.map_err(csv_error)?;
                if !is_blank(&row) {
                    break row;
                }
            }
            None => {
                return Err(HandlerError::Decode(
                    "CSV payload has no header row".to_string(),
                ))
            }
        }
    };

    let mut records = vec![];
    for row in rows {
        let row = row.map_err(csv_error)?;
        if is_blank(&row) {
            continue;
        }
        let fields: BTreeMap<String, String> = header
            .iter()
            .zip(row.iter())
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        records.push(Record::new(id_generator.generate_id(), fields));
    }

    Ok(records)
}

fn is_blank(row: &StringRecord) -> bool {
    row.is_empty() || (row.len() == 1 && row[0].is_empty())
}

fn csv_error(e: csv::Error) -> HandlerError {
    HandlerError::Decode(format!("Malformed CSV: {}", e))
}
