/// Intercept messages using the `log` crate and print them to STDERR. The level defaults to
/// `info`, and can be overridden with `RUST_LOG`.
pub fn setup() {
    use env_logger::{Builder, Env};
    Builder::from_env(Env::default().default_filter_or("info")).init();
}
