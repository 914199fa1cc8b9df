pub mod errors;
pub mod events;
pub mod helpers;
pub mod storage_fields;
pub mod structs;
pub mod traits;
