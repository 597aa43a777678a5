/// Internal error type. Operations never return this directly; it is
/// stringified into the error list of the relevant outcome.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Driver(#[from] sqlx::Error),

    #[error("not connected")]
    NotConnected,
}
