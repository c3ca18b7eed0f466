//! Identity source trait and the host implementation

/// Source of the current process identifier
///
/// Implementations must be cheap, non-blocking and return the same value for
/// every call made from one process.
pub trait PidReader {
    /// Identifier of the calling process
    fn pid(&self) -> i64;
}

/// Reads the id of the real host process
#[derive(Debug, Clone, Copy, Default)]
pub struct HostPidReader;

impl PidReader for HostPidReader {
    fn pid(&self) -> i64 {
        i64::from(std::process::id())
    }
}

impl<F> PidReader for F
where
    F: Fn() -> i64,
{
    fn pid(&self) -> i64 {
        self()
    }
}
