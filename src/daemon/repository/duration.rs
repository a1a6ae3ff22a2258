use std::sync::Arc;

use snafu::prelude::*;

use crate::config::Configuration;
use crate::domain::entity::PeriodDuration;
use crate::domain::repository::duration::{DurationRepository, GetDurationError, InvalidSnafu};

/// A [`DurationRepository`] implementation which reads configuration files.
pub struct DurationConfiguration {
    config: Arc<Configuration>,
}

impl DurationConfiguration {
    /// Creates a new [`DurationConfiguration`].
    pub fn new(config: Arc<Configuration>) -> Self {
        Self { config }
    }
}

#[async_trait::async_trait]
impl DurationRepository for DurationConfiguration {
    async fn work_duration(&self) -> Result<PeriodDuration, GetDurationError> {
        PeriodDuration::try_new(self.config.duration.work).context(InvalidSnafu)
    }

    async fn rest_duration(&self) -> Result<PeriodDuration, GetDurationError> {
        PeriodDuration::try_new(self.config.duration.rest).context(InvalidSnafu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::time::Duration;

    use crate::config::DurationContent;

    #[tokio::test]
    async fn duration_configuration_get() {
        let config = Configuration {
            duration: DurationContent { work: 50, rest: 0 },
            ..Default::default()
        };
        let repository = DurationConfiguration::new(Arc::new(config));

        assert_eq!(
            repository.work_duration().await.unwrap().inner(),
            Duration::from_secs(50)
        );
        assert!(matches!(
            repository.rest_duration().await,
            Err(GetDurationError::Invalid { .. })
        ));
    }
}
