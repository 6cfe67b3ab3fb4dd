use api_types::auth::RegisterRequest;
use clap::Args;
use client::ApiClient;

use crate::{
    error::Result,
    prompt,
    session::{Session, SessionStore},
};

use super::require_session;

#[derive(Args, Debug)]
pub struct LoginArgs {
    #[arg(long)]
    email: String,
}

#[derive(Args, Debug)]
pub struct RegisterArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
}

pub async fn login(args: LoginArgs, api: &ApiClient, sessions: &SessionStore) -> Result<()> {
    let password = prompt::password("Password: ")?;
    let auth = api.login(&args.email, &password).await?;

    sessions.save(&Session {
        token: auth.token,
        user_id: auth.user.id,
        user_name: auth.user.name.clone(),
        user_email: auth.user.email.clone(),
    })?;

    println!("logged in as {} <{}>", auth.user.name, auth.user.email);
    Ok(())
}

pub async fn register(args: RegisterArgs, api: &ApiClient) -> Result<()> {
    let password = prompt::password_twice()?;
    let user = api
        .register(&RegisterRequest {
            name: args.name,
            email: args.email,
            password: password.clone(),
            password_confirmation: password,
        })
        .await?;

    println!("registered {} <{}>; run `arto login` next", user.name, user.email);
    Ok(())
}

pub fn logout(sessions: &SessionStore) -> Result<()> {
    sessions.clear()?;
    println!("logged out");
    Ok(())
}

pub fn whoami(sessions: &SessionStore) -> Result<()> {
    let session = require_session(sessions)?;
    println!(
        "{} <{}> (user id {})",
        session.user_name, session.user_email, session.user_id
    );
    Ok(())
}
