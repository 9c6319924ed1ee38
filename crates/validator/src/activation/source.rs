//! Text sources

use std::borrow::Cow;

/// Accessor for a field's current text.
///
/// The host owns the text; the validator only reads it when asked to
/// validate.
pub trait TextSource {
    /// Returns the current text.
    fn text(&self) -> Cow<'_, str>;
}

impl TextSource for String {
    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl TextSource for str {
    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl<T: TextSource + ?Sized> TextSource for &T {
    fn text(&self) -> Cow<'_, str> {
        (**self).text()
    }
}

impl<T: TextSource + ?Sized> TextSource for Box<T> {
    fn text(&self) -> Cow<'_, str> {
        (**self).text()
    }
}

/// A [`TextSource`] backed by a closure. Created by [`from_fn`].
#[derive(Debug, Clone, Copy)]
pub struct FromFn<F>(F);

/// Wraps a closure returning the current text.
///
/// # Examples
///
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use fieldguard_validator::activation::{TextSource, from_fn};
///
/// let buffer = Rc::new(RefCell::new(String::from("K1A")));
/// let source = from_fn({
///     let buffer = Rc::clone(&buffer);
///     move || buffer.borrow().clone()
/// });
///
/// buffer.borrow_mut().push_str(" 0B1");
/// assert_eq!(source.text(), "K1A 0B1");
/// ```
pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: Fn() -> String,
{
    FromFn(f)
}

impl<F> TextSource for FromFn<F>
where
    F: Fn() -> String,
{
    fn text(&self) -> Cow<'_, str> {
        Cow::Owned((self.0)())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_borrows() {
        let text = String::from("12345");
        assert!(matches!(text.text(), Cow::Borrowed("12345")));
    }

    #[test]
    fn test_str_ref() {
        let source: &str = "K1A 0B1";
        assert_eq!(source.text(), "K1A 0B1");
    }

    #[test]
    fn test_closure() {
        let source = from_fn(|| "123".repeat(2));
        assert_eq!(source.text(), "123123");
    }
}
