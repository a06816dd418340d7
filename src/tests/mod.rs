#![cfg(test)]

mod search;

/// Lets `RUST_LOG=debug cargo test` show solver statistics and propagation
/// traces.
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
