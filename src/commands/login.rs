use crate::{
    api::{HrClient, Session},
    libs::{config::Config, messages::Message},
    msg_bail_anyhow, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Password};

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Login (email); defaults to the configured one
    #[arg(short, long)]
    login: Option<String>,
}

pub async fn cmd(login_args: LoginArgs) -> Result<()> {
    let config = Config::read()?.api_config()?;
    let login = match login_args.login {
        Some(login) => login,
        None if !config.login.is_empty() => config.login.clone(),
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptApiLogin.to_string())
            .interact_text()?,
    };
    let password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptPassword.to_string())
        .interact()?;

    let client = HrClient::new(&config);
    match client.login(&login, &password).await {
        Ok(token) => {
            client.write_token(&token)?;
            msg_success!(Message::LoginSuccessful(login));
            Ok(())
        }
        Err(e) => msg_bail_anyhow!(Message::LoginFailed(e.to_string())),
    }
}
