/// Shared interface of the theme name, theme path and theme file validators.
///
/// ```
/// use trackhue::theme::validation::ThemeNameValidator;
/// use trackhue::validation::Validator;
///
/// assert!(ThemeNameValidator.validate("dark classic").is_ok());
/// assert!(ThemeNameValidator.validate("").is_err());
/// ```
pub trait Validator<T: ?Sized> {
    type Error;

    fn validate(&self, input: &T) -> Result<(), Self::Error>;
}
