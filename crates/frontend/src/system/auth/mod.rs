//! Session token handling. Sign-in happens outside this console; the API
//! enforces authorization.

pub mod storage;
