use cityweather_core::CityQuery;
use inquire::{InquireError, Password, PasswordDisplayMode, Text};

/// Ask for a city. `None` when the user cancels the prompt.
pub fn prompt_city() -> anyhow::Result<Option<CityQuery>> {
    let answer = Text::new("City:")
        .with_help_message("Esc to quit")
        .prompt();

    cancellable(answer).map(|raw| raw.map(CityQuery::from))
}

/// Ask for the OpenWeatherMap API key with masked input.
pub fn prompt_api_key() -> anyhow::Result<Option<String>> {
    let answer = Password::new("OpenWeatherMap API key:")
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .prompt();

    cancellable(answer)
}

fn cancellable<T>(answer: Result<T, InquireError>) -> anyhow::Result<Option<T>> {
    match answer {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(err) => Err(err.into()),
    }
}
