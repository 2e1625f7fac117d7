/// Initializes structured logging for the household model.
///
/// The model logs through `tracing`:
/// - **`info`**: marriages, family formation, children added
/// - **`warn`**: currency conversions that fell back to the sentinel
/// - **`debug`**: rejected assignments, raises, individual conversions
///
/// # Environment Variables
///
/// Set `RUST_LOG` to control log verbosity:
/// - `RUST_LOG=info` - Household events only
/// - `RUST_LOG=debug` - Also show rejected assignments and arithmetic
/// - `RUST_LOG=household_model=debug` - Debug only for this crate
///
/// Safe to call more than once; later calls leave the first subscriber in place.
///
/// # Example
///
/// ```ignore
/// setup_tracing();
/// let family = Family::new(ted, charlotte);
/// ```
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .with_test_writer()
        .try_init();
}
