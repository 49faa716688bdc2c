//! User input abstraction layer
//!
//! Prompts go through [`UserInput`] so the confirmation logic can be driven
//! by scripted answers in tests and by `dialoguer` on a terminal.

use std::io;

/// Trait for interactive prompts
///
/// # Examples
///
/// ```no_run
/// use tagmeta::ui::input::{DialoguerInput, UserInput};
///
/// let input = DialoguerInput::new();
/// let items = vec!["Yes".to_string(), "No".to_string()];
/// if let Some(0) = input.prompt_select("Continue?", &items, Some(1)).unwrap() {
///     println!("Continuing...");
/// }
/// ```
pub trait UserInput {
    /// Prompt user to select from a list
    ///
    /// # Returns
    ///
    /// * `Ok(Some(usize))` - Index of selected item
    /// * `Ok(None)` - User cancelled (ESC)
    /// * `Err(_)` - Input operation failed
    fn prompt_select(
        &self,
        prompt: &str,
        items: &[String],
        default: Option<usize>,
    ) -> Result<Option<usize>>;
}

impl<T: UserInput + ?Sized> UserInput for &T {
    fn prompt_select(
        &self,
        prompt: &str,
        items: &[String],
        default: Option<usize>,
    ) -> Result<Option<usize>> {
        (**self).prompt_select(prompt, items, default)
    }
}

/// Result type for user input operations
pub type Result<T> = std::result::Result<T, InputError>;

/// Errors that can occur during user input
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// IO error during input
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Answer outside the offered choices
    #[error("Invalid input: {0}")]
    Invalid(String),
}

/// Terminal prompts using dialoguer
pub struct DialoguerInput {
    theme: dialoguer::theme::ColorfulTheme,
}

impl DialoguerInput {
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: dialoguer::theme::ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerInput {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInput for DialoguerInput {
    fn prompt_select(
        &self,
        prompt: &str,
        items: &[String],
        default: Option<usize>,
    ) -> Result<Option<usize>> {
        use dialoguer::Select;

        let mut select = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items);

        if let Some(def) = default {
            select = select.default(def);
        }

        select
            .interact_opt()
            .map_err(|e| InputError::Io(io::Error::other(e)))
    }
}
