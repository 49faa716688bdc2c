//! Interactive surface: prompts and operation confirmation

pub mod confirm;
pub mod input;
pub mod mock;

pub use confirm::{AutoApprove, ConfirmMode, PromptConfirm, ShouldProcess, WhatIf};
pub use input::{DialoguerInput, InputError, UserInput};
pub use mock::ScriptedInput;
