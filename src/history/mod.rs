pub mod codec;
pub mod store;

pub use codec::{decode_record, encode_record};
pub use store::{HistoryEntry, HistoryLog};
