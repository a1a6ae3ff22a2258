use std::error::Error as StdError;

use snafu::prelude::*;

use crate::domain::entity::duration::{PeriodDuration, TryNewPeriodDurationError};

/// An abstract interface for accessing configured period lengths.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait DurationRepository: Send + Sync + 'static {
    /// Get the length of the [`Work`] period.
    ///
    /// [`Work`]: crate::domain::entity::Period::Work
    ///
    /// # Errors
    ///
    /// This function will return an error if failed to get the duration.
    async fn work_duration(&self) -> Result<PeriodDuration, GetDurationError>;

    /// Get the length of the [`Rest`] period.
    ///
    /// [`Rest`]: crate::domain::entity::Period::Rest
    ///
    /// # Errors
    ///
    /// This function will return an error if failed to get the duration.
    async fn rest_duration(&self) -> Result<PeriodDuration, GetDurationError>;
}

/// An error type of accessing the repository of [`PeriodDuration`]s.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub))]
pub enum GetDurationError {
    #[snafu(display("Could not create an invalid duration"))]
    #[non_exhaustive]
    Invalid { source: TryNewPeriodDurationError },
    #[snafu(whatever, display("Load duration failed: {message}"))]
    #[non_exhaustive]
    Unknown {
        message: String,
        #[snafu(source(from(Box<dyn StdError + Send + Sync>, Some)))]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn duration_repository_get() {
        let mut mock = MockDurationRepository::new();
        mock.expect_work_duration()
            .returning(|| Ok(PeriodDuration::try_new(1500).unwrap()));
        mock.expect_rest_duration()
            .returning(|| PeriodDuration::try_new(0).context(InvalidSnafu));

        assert_eq!(
            mock.work_duration().await.unwrap(),
            PeriodDuration::try_new(1500).unwrap()
        );
        assert!(matches!(
            mock.rest_duration().await,
            Err(GetDurationError::Invalid { .. })
        ));
    }
}
