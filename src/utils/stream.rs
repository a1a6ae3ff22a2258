use tokio::io::{AsyncRead, AsyncWrite};

/// Abstract form of types that are capable of async IO and can be moved
/// across tasks.
pub trait Stream: AsyncRead + AsyncWrite + Unpin + Send {}

impl<T> Stream for T where T: AsyncRead + AsyncWrite + Unpin + Send {}
