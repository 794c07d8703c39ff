//! Attaching and reading classes

use crate::Class;
use std::error::Error;
use xerrors::BoxError;

/// When [`wrap_as_with`] is allowed to attach a new class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Restriction {
    /// Always attach
    #[default]
    Unrestricted,

    /// Attach only if the error has no class yet
    OnlyUnknown,

    /// Attach only if the new class is strictly more severe than the current one
    OnlyMoreSevere,
}

/// Options for [`wrap_as_with`].
///
/// # Example
///
/// ```rust
/// use xerrors_class::{wrap_as, wrap_as_with, Class, WrapOptions};
///
/// let err = wrap_as(std::fmt::Error, Class::Persistent);
/// let err = wrap_as_with(err, Class::Transient, WrapOptions::new().only_more_severe());
/// assert_eq!(Class::of(&*err), Class::Persistent);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WrapOptions {
    restriction: Restriction,
}

impl WrapOptions {
    /// Unrestricted options
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach unconditionally
    pub fn unrestricted(mut self) -> Self {
        self.restriction = Restriction::Unrestricted;
        self
    }

    /// Leave already classified errors alone
    pub fn only_unknown(mut self) -> Self {
        self.restriction = Restriction::OnlyUnknown;
        self
    }

    /// Only ever escalate severity
    pub fn only_more_severe(mut self) -> Self {
        self.restriction = Restriction::OnlyMoreSevere;
        self
    }

    /// Get the configured restriction
    pub fn restriction(&self) -> Restriction {
        self.restriction
    }

    fn permits(&self, current: Class, class: Class) -> bool {
        match self.restriction {
            Restriction::Unrestricted => true,
            Restriction::OnlyUnknown => current == Class::Unknown,
            Restriction::OnlyMoreSevere => class > current,
        }
    }
}

impl Class {
    /// The nearest class attached to `err`, or [`Class::Unknown`] if none is.
    pub fn of(err: &(dyn Error + 'static)) -> Class {
        xerrors::extract::<Class>(err)
            .copied()
            .unwrap_or(Class::Unknown)
    }
}

/// Classify `err` unconditionally.
pub fn wrap_as<E: Into<BoxError>>(err: E, class: Class) -> BoxError {
    wrap_as_with(err, class, WrapOptions::default())
}

/// Classify `err` if `opts` permit it, otherwise return it unchanged.
pub fn wrap_as_with<E: Into<BoxError>>(err: E, class: Class, opts: WrapOptions) -> BoxError {
    let err = err.into();
    if opts.permits(Class::of(&*err), class) {
        xerrors::extend(class, err)
    } else {
        err
    }
}

/// The class of a possibly absent error.
///
/// Returns [`Class::Nil`] for `None` and [`Class::Unknown`] for an error
/// that carries no class.
pub fn get_class(err: Option<&(dyn Error + 'static)>) -> Class {
    match err {
        Some(err) => Class::of(err),
        None => Class::Nil,
    }
}

/// Classification methods for the error side of a `Result`.
///
/// `Ok` values pass through untouched.
pub trait ClassifyExt<V> {
    /// Classify the error unconditionally
    fn classify(self, class: Class) -> Result<V, BoxError>;

    /// Classify the error if `opts` permit it
    fn classify_with(self, class: Class, opts: WrapOptions) -> Result<V, BoxError>;
}

impl<V, E: Into<BoxError>> ClassifyExt<V> for Result<V, E> {
    fn classify(self, class: Class) -> Result<V, BoxError> {
        self.map_err(|err| wrap_as(err, class))
    }

    fn classify_with(self, class: Class, opts: WrapOptions) -> Result<V, BoxError> {
        self.map_err(|err| wrap_as_with(err, class, opts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug, PartialEq)]
    struct Plain(&'static str);

    impl fmt::Display for Plain {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    impl Error for Plain {}

    fn classified(class: Class) -> BoxError {
        wrap_as(Plain("err"), class)
    }

    #[test]
    fn test_wrap_as() {
        let err = wrap_as(Plain("something failed"), Class::Transient);
        assert_eq!(err.to_string(), "something failed");
        assert_eq!(Class::of(&*err), Class::Transient);
        assert!(xerrors::is(&*err, &Plain("something failed")));
    }

    #[test]
    fn test_only_unknown() {
        let cases = [
            (Box::new(Plain("plain")) as BoxError, Class::Transient, Class::Transient),
            (classified(Class::Persistent), Class::Transient, Class::Persistent),
            (classified(Class::Transient), Class::Panic, Class::Transient),
        ];
        for (err, class, want) in cases {
            let got = wrap_as_with(err, class, WrapOptions::new().only_unknown());
            assert_eq!(Class::of(&*got), want);
        }
    }

    #[test]
    fn test_only_more_severe() {
        let cases = [
            (Box::new(Plain("plain")) as BoxError, Class::Transient, Class::Transient),
            (classified(Class::Transient), Class::Persistent, Class::Persistent),
            (classified(Class::Transient), Class::Transient, Class::Transient),
            (classified(Class::Persistent), Class::Transient, Class::Persistent),
        ];
        for (err, class, want) in cases {
            let got = wrap_as_with(err, class, WrapOptions::new().only_more_severe());
            assert_eq!(Class::of(&*got), want);
        }
    }

    #[test]
    fn test_restricted_returns_same_layer() {
        let err = classified(Class::Persistent);
        let before = xerrors::chain(&*err).count();
        let err = wrap_as_with(err, Class::Transient, WrapOptions::new().only_more_severe());
        assert_eq!(xerrors::chain(&*err).count(), before);
    }

    #[test]
    fn test_unrestricted_downgrades() {
        let err = classified(Class::Transient);
        let err = wrap_as_with(err, Class::Persistent, WrapOptions::new().unrestricted());
        assert_eq!(Class::of(&*err), Class::Persistent);

        let err = wrap_as(err, Class::Transient);
        assert_eq!(Class::of(&*err), Class::Transient);
    }

    #[test]
    fn test_escalation() {
        let err = wrap_as(Plain("disk"), Class::Transient);
        let err = wrap_as_with(err, Class::Persistent, WrapOptions::new().only_more_severe());
        assert_eq!(Class::of(&*err), Class::Persistent);

        let err = wrap_as_with(err, Class::Transient, WrapOptions::new().only_more_severe());
        assert_eq!(Class::of(&*err), Class::Persistent);
    }

    #[test]
    fn test_get_class() {
        assert_eq!(get_class(None), Class::Nil);
        assert_eq!(get_class(Some(&Plain("plain"))), Class::Unknown);

        for class in [Class::Transient, Class::Persistent, Class::Panic] {
            let err = classified(class);
            assert_eq!(get_class(Some(&*err)), class);
        }

        let nested = wrap_as(classified(Class::Transient), Class::Persistent);
        assert_eq!(get_class(Some(&*nested)), Class::Persistent);
    }

    #[test]
    fn test_classify_ext() {
        let ok: Result<u8, Plain> = Ok(1);
        assert_eq!(ok.classify(Class::Panic).unwrap(), 1);

        let res: Result<u8, Plain> = Err(Plain("boom"));
        let err = res.classify(Class::Panic).unwrap_err();
        assert_eq!(Class::of(&*err), Class::Panic);

        let res: Result<u8, BoxError> = Err(classified(Class::Persistent));
        let err = res
            .classify_with(Class::Transient, WrapOptions::new().only_unknown())
            .unwrap_err();
        assert_eq!(Class::of(&*err), Class::Persistent);
    }

    #[test]
    fn test_options_restriction() {
        assert_eq!(WrapOptions::new().restriction(), Restriction::Unrestricted);
        assert_eq!(
            WrapOptions::new().only_unknown().restriction(),
            Restriction::OnlyUnknown
        );
        assert_eq!(
            WrapOptions::new().only_unknown().unrestricted().restriction(),
            Restriction::Unrestricted
        );
    }
}
