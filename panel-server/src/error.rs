use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] panel_config::ConfigError),

    #[error("API client error: {0}")]
    Client(#[from] panel_client::ClientError),

    #[error("Template error: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
