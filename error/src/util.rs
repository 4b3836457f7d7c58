use crate::Error;

/// Asserts that both sides convert into the same `Error`, checking the kind before the message.
///
/// Lets a test compare an error from one category against the top-level `Error` or against
/// another category without spelling out the conversion.
pub fn assert_error_eq<L, R>(left: L, right: R)
where
    L: Into<Error>,
    R: Into<Error>,
{
    let left: Error = left.into();
    let right: Error = right.into();
    assert_eq!(left.kind(), right.kind(), "{left} vs {right}");
    assert_eq!(left.to_string(), right.to_string());
}
