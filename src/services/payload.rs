//! Parser for the `start,stop,hints,pause` response body

use super::ParseError;
use crate::state::TimerState;

/// Field names in wire order
const FIELDS: [&str; 4] = ["start", "stop", "hints", "pause"];

/// Parse a response body. Fields are trimmed and anything after the fourth is ignored.
pub fn parse_payload(body: &str) -> Result<TimerState, ParseError> {
    let mut parts = body.split(',');
    let mut values = [0i64; 4];

    for (position, (&field, slot)) in FIELDS.iter().zip(values.iter_mut()).enumerate() {
        let raw = parts
            .next()
            .ok_or(ParseError::MissingField { field, position })?
            .trim();

        if raw.is_empty() {
            return Err(ParseError::MissingField { field, position });
        }

        *slot = raw.parse().map_err(|_| ParseError::InvalidField {
            field,
            value: raw.to_string(),
        })?;
    }

    let [start, stop, hints, pause] = values;
    Ok(TimerState::new(start, stop, hints, pause))
}
