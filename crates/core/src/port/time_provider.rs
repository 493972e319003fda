// Clock Port

/// Source of the epoch-millisecond timestamps stamped into `created_at`
/// and `updated_at` on channel records. Injected as a port so tests can
/// pin the clock instead of racing the wall time.
pub trait TimeProvider: Send + Sync {
    fn now_millis(&self) -> i64;
}

/// Wall clock (production)
pub struct SystemTimeProvider;

impl TimeProvider for SystemTimeProvider {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}
