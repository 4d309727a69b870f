use thiserror::Error;

/// Failures talking to the geocoding and analysis services.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{service} request failed: {source}")]
    Transport {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{service} returned HTTP {status}{}", message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Status {
        service: &'static str,
        status: u16,
        message: Option<String>,
    },

    #[error("failed to decode {service} response: {source}")]
    Decode {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("no location found for '{0}'")]
    NotFound(String),

    #[error("no historical data: {0}")]
    NoHistoricalData(String),
}

impl ServiceError {
    /// Single line shown in the error panel.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport { source, .. } if source.is_timeout() => {
                "The weather service took too long to answer. Please try again.".to_string()
            }
            Self::Transport { service, .. } => {
                format!("Could not reach the {service} service. Check your connection.")
            }
            Self::Status {
                message: Some(message),
                ..
            } => message.clone(),
            Self::Status {
                service, status, ..
            } => format!("The {service} service answered with HTTP {status}."),
            Self::Decode { service, .. } => {
                format!("The {service} service sent a response we could not read.")
            }
            Self::NotFound(query) => format!("Could not find a place called '{query}'."),
            Self::NoHistoricalData(message) => message.clone(),
        }
    }
}
