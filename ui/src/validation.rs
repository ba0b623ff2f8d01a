/// Core validation trait that all validators must implement.
///
/// This trait provides a consistent interface for validating data across
/// the application.
///
/// # Type Parameters
///
/// * `T` - The type of data being validated (can be unsized like `str` or `Path`)
///
/// # Examples
///
/// ```
/// use parkui::validation::Validator;
///
/// struct NotEmpty;
/// impl Validator<str> for NotEmpty {
///     type Error = String;
///
///     fn validate(&self, input: &str) -> Result<(), Self::Error> {
///         if input.is_empty() {
///             Err("Input cannot be empty".to_string())
///         } else {
///             Ok(())
///         }
///     }
/// }
/// ```
pub trait Validator<T: ?Sized> {
    type Error;

    /// Validate the input and return Ok(()) if valid, or Err with validation error
    fn validate(&self, input: &T) -> Result<(), Self::Error>;
}
