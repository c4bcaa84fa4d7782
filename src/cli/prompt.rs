use inquire::InquireError;

/// Outcome of an interactive confirmation. Interruption (Ctrl-C during the
/// prompt) is its own case so callers can cancel the pending operation
/// before anything touches disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
    Interrupted,
}

pub fn confirm_action(
    message: &str,
    yes: bool,
    non_interactive: bool,
) -> anyhow::Result<Confirmation> {
    if yes {
        return Ok(Confirmation::Confirmed);
    }
    if non_interactive {
        anyhow::bail!("--yes is required for destructive operations in non-interactive mode");
    }
    match inquire::Confirm::new(message).with_default(false).prompt() {
        Ok(true) => Ok(Confirmation::Confirmed),
        Ok(false) => Ok(Confirmation::Declined),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
            Ok(Confirmation::Interrupted)
        }
        Err(e) => Err(e.into()),
    }
}

/// Use the flag value when given, prompt otherwise; non-interactive mode
/// requires the flag.
pub fn required_or_prompt(
    value: Option<String>,
    message: &str,
    flag: &str,
    non_interactive: bool,
) -> anyhow::Result<String> {
    if let Some(v) = value {
        return Ok(v);
    }
    if non_interactive {
        anyhow::bail!("{flag} is required in non-interactive mode");
    }
    Ok(inquire::Text::new(message).prompt()?)
}
