//! 字节单位换算（二进制前缀）。
//!
//! ```rust,no_run
//! use private_fetch::bytes_unit::{kibi_bytes, mebi_bytes};
//!
//! assert_eq!(kibi_bytes(42), 42 * 1024);
//! assert_eq!(mebi_bytes(1), 1024 * 1024);
//! ```

pub const fn bytes(n: u64) -> u64 {
    n
}

pub const fn kibi_bytes(n: u64) -> u64 {
    n * 1024
}

pub const fn mebi_bytes(n: u64) -> u64 {
    n * kibi_bytes(1024)
}
