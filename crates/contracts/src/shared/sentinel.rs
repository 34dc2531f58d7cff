//! "Unset" sentinels for optional query parameters.
//!
//! The backend treats the mere presence of a filter parameter as a filter, so
//! a value equal to its sentinel must be dropped from the query string rather
//! than serialized literally.

/// Numeric sentinel: "no filter" / "fetch everything".
pub const UNSET: i64 = -1;

/// String sentinel used by status-style dropdown filters.
pub const ALL: &str = "all";

/// Textual form of `UNSET` for id-like string parameters.
pub const UNSET_STR: &str = "-1";

pub trait Sentinel {
    fn is_unset(&self) -> bool;
}

impl Sentinel for str {
    fn is_unset(&self) -> bool {
        self.is_empty() || self == ALL || self == UNSET_STR
    }
}

impl Sentinel for String {
    fn is_unset(&self) -> bool {
        self.as_str().is_unset()
    }
}

impl Sentinel for i64 {
    fn is_unset(&self) -> bool {
        *self == UNSET
    }
}

impl Sentinel for i32 {
    fn is_unset(&self) -> bool {
        i64::from(*self) == UNSET
    }
}

impl Sentinel for bool {
    fn is_unset(&self) -> bool {
        false
    }
}

impl<T: Sentinel + ?Sized> Sentinel for &T {
    fn is_unset(&self) -> bool {
        (**self).is_unset()
    }
}

impl<T: Sentinel> Sentinel for Option<T> {
    fn is_unset(&self) -> bool {
        self.as_ref().map(|v| v.is_unset()).unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_sentinels() {
        assert!("".is_unset());
        assert!("all".is_unset());
        assert!("-1".is_unset());
        assert!(!"active".is_unset());
        assert!(!"All".is_unset());
    }

    #[test]
    fn test_numeric_sentinel() {
        assert!((-1i64).is_unset());
        assert!(!0i64.is_unset());
        assert!(!42i64.is_unset());
    }

    #[test]
    fn test_option_sentinel() {
        assert!(None::<String>.is_unset());
        assert!(Some(String::from("all")).is_unset());
        assert!(!Some(String::from("42")).is_unset());
    }
}
