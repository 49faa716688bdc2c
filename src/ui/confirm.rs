//! Confirmation surface for side-effecting operations
//!
//! Every action that changes the filesystem asks a [`ShouldProcess`] first.
//! Which implementation answers is decided once per invocation from the
//! command-line flags, see [`ConfirmMode`].

use std::fmt;
use std::io::{self, Write};
use std::path::Path;

use super::input::{DialoguerInput, InputError, UserInput};

/// Decides whether an operation on a target may proceed
pub trait ShouldProcess {
    /// Ask whether `operation` may be performed on `target`.
    ///
    /// # Errors
    /// Returns `InputError` if the answer cannot be obtained.
    fn should_process(&mut self, target: &Path, operation: &str) -> Result<bool, InputError>;
}

impl<T: ShouldProcess + ?Sized> ShouldProcess for Box<T> {
    fn should_process(&mut self, target: &Path, operation: &str) -> Result<bool, InputError> {
        (**self).should_process(target, operation)
    }
}

impl<T: ShouldProcess + ?Sized> ShouldProcess for &mut T {
    fn should_process(&mut self, target: &Path, operation: &str) -> Result<bool, InputError> {
        (**self).should_process(target, operation)
    }
}

/// Proceeds without asking
#[derive(Debug, Default, Clone, Copy)]
pub struct AutoApprove;

impl ShouldProcess for AutoApprove {
    fn should_process(&mut self, _target: &Path, _operation: &str) -> Result<bool, InputError> {
        Ok(true)
    }
}

/// Describes what would happen and never proceeds
#[derive(Debug)]
pub struct WhatIf<W> {
    out: W,
}

impl<W: Write> WhatIf<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> ShouldProcess for WhatIf<W> {
    fn should_process(&mut self, target: &Path, operation: &str) -> Result<bool, InputError> {
        writeln!(
            self.out,
            "What if: Performing the operation \"{operation}\" on target \"{}\".",
            target.display()
        )?;
        Ok(false)
    }
}

/// Remembered "to All" answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Standing {
    Ask,
    YesToAll,
    NoToAll,
}

const CHOICES: [&str; 4] = ["Yes", "Yes to All", "No", "No to All"];

/// Asks the user for each target until a "to All" answer is given
#[derive(Debug)]
pub struct PromptConfirm<I> {
    input: I,
    standing: Standing,
}

impl<I: UserInput> PromptConfirm<I> {
    pub const fn new(input: I) -> Self {
        Self {
            input,
            standing: Standing::Ask,
        }
    }
}

impl<I: UserInput> ShouldProcess for PromptConfirm<I> {
    fn should_process(&mut self, target: &Path, operation: &str) -> Result<bool, InputError> {
        match self.standing {
            Standing::YesToAll => return Ok(true),
            Standing::NoToAll => return Ok(false),
            Standing::Ask => {}
        }

        let prompt = format!(
            "Are you sure you want to perform this action?\nPerforming the operation \"{operation}\" on target \"{}\".",
            target.display()
        );
        let items: Vec<String> = CHOICES.iter().map(ToString::to_string).collect();

        // Esc counts as "No"
        let answer = match self.input.prompt_select(&prompt, &items, Some(0))? {
            Some(0) => true,
            Some(1) => {
                self.standing = Standing::YesToAll;
                true
            }
            Some(3) => {
                self.standing = Standing::NoToAll;
                false
            }
            Some(_) | None => false,
        };
        Ok(answer)
    }
}

/// How the confirmation surface answers for one invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmMode {
    #[default]
    Auto,
    WhatIf,
    Prompt,
}

impl ConfirmMode {
    /// Pick the mode from command-line flags; `yes` wins over everything
    #[must_use]
    pub const fn from_flags(what_if: bool, confirm: bool, yes: bool) -> Self {
        if yes {
            Self::Auto
        } else if what_if {
            Self::WhatIf
        } else if confirm {
            Self::Prompt
        } else {
            Self::Auto
        }
    }

    /// Confirmation surface talking to the terminal
    #[must_use]
    pub fn into_surface(self) -> Box<dyn ShouldProcess> {
        match self {
            Self::Auto => Box::new(AutoApprove),
            Self::WhatIf => Box::new(WhatIf::new(io::stdout())),
            Self::Prompt => Box::new(PromptConfirm::new(DialoguerInput::new())),
        }
    }
}

impl fmt::Display for ConfirmMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Auto => "auto",
            Self::WhatIf => "what-if",
            Self::Prompt => "prompt",
        };
        f.write_str(name)
    }
}
