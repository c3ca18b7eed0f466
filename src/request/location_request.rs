//! The location request descriptor

use crate::core::constants::*;
use crate::core::types::Priority;
use crate::identity::{HostPidReader, PidReader};
use crate::request::error::{RequestError, RequestResult};
use std::hash::{Hash, Hasher};
use tracing::{debug, warn};

/// How a client wants location updates delivered
///
/// Mutators work in place and return the request so calls can be chained:
///
/// ```
/// use location_request::{LocationRequest, Priority};
///
/// let mut request = LocationRequest::create();
/// request
///     .set_interval(5_000)
///     .set_smallest_displacement(10.0)
///     .set_priority(Priority::HighAccuracy)
///     .unwrap();
/// assert_eq!(request.fastest_interval(), 5_000);
/// ```
///
/// Setting the interval below the fastest interval lowers the fastest
/// interval with it. Setting the fastest interval never touches the interval,
/// so `fastest_interval > interval` remains reachable.
///
/// The creator pid is fixed at construction. Requests cannot be deserialized
/// from arbitrary data; store a [`RequestProfile`](crate::RequestProfile)
/// instead, or go through the binary codec.
///
/// ```compile_fail
/// use location_request::LocationRequest;
///
/// let json = r#"{"interval":1,"fastest_interval":99,"smallest_displacement":-1.0,"priority":7,"pid":123}"#;
/// let _request: LocationRequest = serde_json::from_str(json).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct LocationRequest {
    interval: i64,
    fastest_interval: i64,
    smallest_displacement: f32,
    priority: i32,
    pid: i64,
}

impl LocationRequest {
    /// Request with default settings owned by the current host process
    pub fn create() -> Self {
        Self::create_with(&HostPidReader)
    }

    /// Request with default settings owned by the process `reader` reports
    pub fn create_with<R: PidReader + ?Sized>(reader: &R) -> Self {
        let pid = reader.pid();
        debug!(pid, "captured creator pid for location request");
        Self::with_pid(pid)
    }

    /// Copy `source` through the public mutators
    ///
    /// The interval invariant is re-applied while copying and the priority is
    /// re-validated, so a request decoded with an unknown priority cannot be
    /// copied this way. Use `clone()` for a verbatim copy.
    pub fn copy(source: &LocationRequest) -> RequestResult<Self> {
        let mut request = Self::with_pid(source.pid);
        request
            .set_interval(source.interval())
            .set_fastest_interval(source.fastest_interval())
            .set_smallest_displacement(source.smallest_displacement())
            .set_priority(source.priority())?;
        Ok(request)
    }

    /// Build directly from raw field values without validation
    pub(crate) fn from_raw_parts(
        interval: i64,
        fastest_interval: i64,
        smallest_displacement: f32,
        priority: i32,
        pid: i64,
    ) -> Self {
        Self {
            interval,
            fastest_interval,
            smallest_displacement,
            priority,
            pid,
        }
    }

    fn with_pid(pid: i64) -> Self {
        Self::from_raw_parts(
            DEFAULT_INTERVAL_IN_MS,
            DEFAULT_FASTEST_INTERVAL_IN_MS,
            DEFAULT_SMALLEST_DISPLACEMENT_IN_METERS,
            PRIORITY_BALANCED_POWER_ACCURACY,
            pid,
        )
    }

    /// Requested interval between updates (milliseconds)
    pub fn interval(&self) -> i64 {
        self.interval
    }

    pub fn set_interval(&mut self, millis: i64) -> &mut Self {
        self.interval = millis;
        if self.interval < self.fastest_interval {
            self.fastest_interval = self.interval;
        }
        self
    }

    /// Fastest rate at which updates triggered by others are accepted (milliseconds)
    pub fn fastest_interval(&self) -> i64 {
        self.fastest_interval
    }

    pub fn set_fastest_interval(&mut self, millis: i64) -> &mut Self {
        self.fastest_interval = millis;
        self
    }

    /// Minimum movement before a new update is reported (meters)
    pub fn smallest_displacement(&self) -> f32 {
        self.smallest_displacement
    }

    pub fn set_smallest_displacement(&mut self, meters: f32) -> &mut Self {
        self.smallest_displacement = meters;
        self
    }

    /// Raw priority value; may lie outside [`Priority`] after decoding
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// The priority as a named level, if it is one
    pub fn priority_level(&self) -> Option<Priority> {
        Priority::from_value(self.priority)
    }

    /// Set the priority, rejecting anything but the four named levels
    pub fn set_priority<P: Into<i32>>(&mut self, priority: P) -> RequestResult<&mut Self> {
        let priority = priority.into();
        if Priority::from_value(priority).is_none() {
            warn!(priority, "rejected location request priority");
            return Err(RequestError::invalid_priority(priority));
        }

        self.priority = priority;
        Ok(self)
    }

    /// Id of the process that created this request
    pub fn creator_pid(&self) -> i64 {
        self.pid
    }

    pub fn with_interval(mut self, millis: i64) -> Self {
        self.set_interval(millis);
        self
    }

    pub fn with_fastest_interval(mut self, millis: i64) -> Self {
        self.set_fastest_interval(millis);
        self
    }

    pub fn with_smallest_displacement(mut self, meters: f32) -> Self {
        self.set_smallest_displacement(meters);
        self
    }

    pub fn with_priority<P: Into<i32>>(mut self, priority: P) -> RequestResult<Self> {
        self.set_priority(priority)?;
        Ok(self)
    }

    /// Bit-exact 32-bit hash, stable across processes and versions
    pub fn hash_code(&self) -> i32 {
        let displacement = if self.smallest_displacement == 0.0 {
            0
        } else {
            float_to_int_bits(self.smallest_displacement)
        };

        let mut result = fold_to_32(self.interval);
        result = result.wrapping_mul(31).wrapping_add(fold_to_32(self.fastest_interval));
        result = result.wrapping_mul(31).wrapping_add(displacement);
        result = result.wrapping_mul(31).wrapping_add(self.priority);
        result = result.wrapping_mul(31).wrapping_add(self.pid as i32);
        result
    }
}

/// High and low halves of a 64-bit value folded together
fn fold_to_32(value: i64) -> i32 {
    (value ^ ((value as u64) >> 32) as i64) as i32
}

/// Bit pattern of a float with every NaN collapsed to the canonical one
fn float_to_int_bits(value: f32) -> i32 {
    if value.is_nan() {
        0x7fc0_0000
    } else {
        value.to_bits() as i32
    }
}

impl PartialEq for LocationRequest {
    fn eq(&self, other: &Self) -> bool {
        self.pid == other.pid
            && self.interval == other.interval
            && self.fastest_interval == other.fastest_interval
            && float_to_int_bits(self.smallest_displacement)
                == float_to_int_bits(other.smallest_displacement)
            && self.priority == other.priority
    }
}

impl Eq for LocationRequest {}

impl Hash for LocationRequest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::{CountingPidReader, FixedPidReader};
    use std::collections::HashSet;

    fn request(pid: i64) -> LocationRequest {
        LocationRequest::create_with(&FixedPidReader::new(pid))
    }

    #[test]
    fn test_defaults() {
        let request = LocationRequest::create();
        assert_eq!(request.interval(), 3_600_000);
        assert_eq!(request.fastest_interval(), 600_000);
        assert_eq!(request.smallest_displacement(), 0.0);
        assert_eq!(request.priority(), PRIORITY_BALANCED_POWER_ACCURACY);
        assert_eq!(request.priority_level(), Some(Priority::BalancedPowerAccuracy));
        assert_eq!(request.creator_pid(), std::process::id() as i64);
    }

    #[test]
    fn test_create_with_reads_pid_once() {
        let reader = CountingPidReader::new(1234);
        let request = LocationRequest::create_with(&reader);
        assert_eq!(request.creator_pid(), 1234);
        assert_eq!(reader.read_count(), 1);
    }

    #[test]
    fn test_create_with_closure() {
        let request = LocationRequest::create_with(&|| 99i64);
        assert_eq!(request.creator_pid(), 99);
    }

    #[test]
    fn test_interval_lowers_fastest_interval() {
        let mut request = request(1);
        request.set_interval(100);
        assert_eq!(request.interval(), 100);
        assert_eq!(request.fastest_interval(), 100);
    }

    #[test]
    fn test_interval_above_fastest_keeps_fastest() {
        let mut request = request(1);
        request.set_interval(10_000_000);
        assert_eq!(request.interval(), 10_000_000);
        assert_eq!(request.fastest_interval(), 600_000);

        request.set_interval(600_000);
        assert_eq!(request.fastest_interval(), 600_000);
    }

    #[test]
    fn test_fastest_interval_never_raises_interval() {
        let mut request = request(1);
        request.set_fastest_interval(999_999_999);
        assert_eq!(request.interval(), 3_600_000);
        assert_eq!(request.fastest_interval(), 999_999_999);
        assert!(request.fastest_interval() > request.interval());
    }

    #[test]
    fn test_fastest_after_interval_is_not_corrected() {
        let mut request = request(1);
        request.set_interval(1_000).set_fastest_interval(5_000);
        assert_eq!(request.interval(), 1_000);
        assert_eq!(request.fastest_interval(), 5_000);
    }

    #[test]
    fn test_displacement_is_unchecked() {
        let mut request = request(1);
        request.set_smallest_displacement(-25.5);
        assert_eq!(request.smallest_displacement(), -25.5);
    }

    #[test]
    fn test_invalid_priority_is_rejected() {
        let mut request = request(1);
        let result = request.set_priority(5);
        assert_eq!(result.err(), Some(RequestError::invalid_priority(5)));
        assert_eq!(request.priority(), PRIORITY_BALANCED_POWER_ACCURACY);

        assert!(request.set_priority(101).is_err());
        assert!(request.set_priority(-100).is_err());
        assert_eq!(request.priority(), PRIORITY_BALANCED_POWER_ACCURACY);
    }

    #[test]
    fn test_valid_priorities_are_accepted() {
        let mut request = request(1);
        request.set_priority(100).unwrap();
        assert_eq!(request.priority(), 100);

        for priority in Priority::ALL {
            request.set_priority(priority).unwrap();
            assert_eq!(request.priority_level(), Some(priority));
        }
    }

    #[test]
    fn test_invalid_priority_error_message() {
        let error = RequestError::invalid_priority(5);
        assert_eq!(error.to_string(), "Invalid priority: 5");
    }

    #[test]
    fn test_builder_style_chain() {
        let request = request(7)
            .with_interval(2_000)
            .with_smallest_displacement(3.5)
            .with_priority(Priority::LowPower)
            .unwrap();

        assert_eq!(request.interval(), 2_000);
        assert_eq!(request.fastest_interval(), 2_000);
        assert_eq!(request.smallest_displacement(), 3.5);
        assert_eq!(request.priority_level(), Some(Priority::LowPower));
        assert!(LocationRequest::create().with_priority(0).is_err());
    }

    #[test]
    fn test_equal_requests_hash_equally() {
        let mut a = request(42);
        let mut b = request(42);
        a.set_interval(1_000).set_smallest_displacement(2.5);
        b.set_interval(1_000).set_smallest_displacement(2.5);
        a.set_priority(Priority::NoPower).unwrap();
        b.set_priority(Priority::NoPower).unwrap();

        assert_eq!(a, b);
        assert_eq!(a.hash_code(), b.hash_code());
    }

    #[test]
    fn test_pid_participates_in_equality() {
        let a = request(1);
        let b = request(2);
        assert_ne!(a, b);
    }

    #[test]
    fn test_each_field_participates_in_equality() {
        let base = request(1);

        let mut other = base.clone();
        other.set_interval(1);
        assert_ne!(base, other);

        let mut other = base.clone();
        other.set_fastest_interval(1);
        assert_ne!(base, other);

        let mut other = base.clone();
        other.set_smallest_displacement(1.0);
        assert_ne!(base, other);

        let mut other = base.clone();
        other.set_priority(Priority::HighAccuracy).unwrap();
        assert_ne!(base, other);
    }

    #[test]
    fn test_signed_zero_displacement() {
        let positive = request(1).with_smallest_displacement(0.0);
        let negative = request(1).with_smallest_displacement(-0.0);

        assert_ne!(positive, negative);
        // -0.0 == +0.0 numerically, so both contribute zero to the hash
        assert_eq!(positive.hash_code(), negative.hash_code());
    }

    #[test]
    fn test_nan_displacement_is_reflexive() {
        let a = request(1).with_smallest_displacement(f32::NAN);
        let b = request(1).with_smallest_displacement(f32::from_bits(0x7fc0_0001));
        assert_eq!(a, a.clone());
        assert_eq!(a, b);
        assert_eq!(a.hash_code(), b.hash_code());
    }

    #[test]
    fn test_hash_code_of_defaults() {
        // values below 2^32 fold to themselves
        let mut expected: i32 = 3_600_000;
        expected = expected.wrapping_mul(31).wrapping_add(600_000);
        expected = expected.wrapping_mul(31);
        expected = expected.wrapping_mul(31).wrapping_add(102);
        expected = expected.wrapping_mul(31).wrapping_add(77);
        assert_eq!(request(77).hash_code(), expected);
    }

    #[test]
    fn test_hash_code_folds_wide_values() {
        let mut request = request(0);
        request.set_interval(-1).set_fastest_interval(0x1_0000_0001);
        request.set_smallest_displacement(1.0);

        let mut expected: i32 = 0; // fold(-1) = -1 ^ 0xffffffff = 0
        expected = expected.wrapping_mul(31).wrapping_add(0); // 0x1_0000_0001 folds to 0
        expected = expected.wrapping_mul(31).wrapping_add(0x3f80_0000);
        expected = expected.wrapping_mul(31).wrapping_add(102);
        expected = expected.wrapping_mul(31).wrapping_add(0);
        assert_eq!(request.hash_code(), expected);
    }

    #[test]
    fn test_hash_code_truncates_pid() {
        let low = request(5);
        let high = request(5 + (1i64 << 32));
        assert_ne!(low, high);
        assert_eq!(low.hash_code(), high.hash_code());
    }

    #[test]
    fn test_hash_set_deduplicates_per_process() {
        let mut set = HashSet::new();
        set.insert(request(10));
        set.insert(request(10));
        set.insert(request(11));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_copy_is_equal_and_independent() {
        let mut original = request(55);
        original
            .set_interval(20_000)
            .set_fastest_interval(90_000)
            .set_smallest_displacement(12.0)
            .set_priority(Priority::HighAccuracy)
            .unwrap();

        let mut copy = LocationRequest::copy(&original).unwrap();
        assert_eq!(copy, original);
        assert_eq!(copy.creator_pid(), 55);

        copy.set_interval(1).set_smallest_displacement(0.5);
        assert_eq!(original.interval(), 20_000);
        assert_eq!(original.fastest_interval(), 90_000);
        assert_eq!(original.smallest_displacement(), 12.0);
    }

    #[test]
    fn test_copy_rejects_unknown_priority() {
        let source = LocationRequest::from_raw_parts(1, 2, 0.0, 7, 3);
        assert_eq!(
            LocationRequest::copy(&source).err(),
            Some(RequestError::invalid_priority(7))
        );
        assert_eq!(source.clone(), source);
    }
}
