use time::OffsetDateTime;

pub const TRANSACTION_ID_PREFIX: &str = "TXN";

/// Builds a transaction id from the Unix time of `instant` in milliseconds.
///
/// Two payments built within the same millisecond share an id.
pub fn transaction_id_at(instant: OffsetDateTime) -> String {
	let millis = instant.unix_timestamp_nanos() / 1_000_000;
	format!("{TRANSACTION_ID_PREFIX}{millis}")
}
