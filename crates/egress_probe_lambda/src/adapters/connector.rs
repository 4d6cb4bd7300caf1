use std::future::Future;
use std::io;
use std::time::Duration;

use egress_probe_core::contract::ProbeTarget;
use tokio::net::TcpStream;

pub trait ReachabilityProbe {
    fn check(&self, target: &ProbeTarget) -> Result<(), String>;
}

/// Opens a single TCP connection to the target and closes it again.
///
/// The connect timeout bounds the whole attempt, name resolution included.
///
/// # Panics
///
/// Panics when `check` is called outside a multi-threaded Tokio runtime, since
/// it bridges onto the ambient runtime with `block_in_place`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TcpReachabilityProbe;

impl ReachabilityProbe for TcpReachabilityProbe {
    fn check(&self, target: &ProbeTarget) -> Result<(), String> {
        let address = (target.host.clone(), target.port);
        let connect_timeout = target.connect_timeout;

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(connect_within(
                connect_timeout,
                TcpStream::connect(address),
            ))
        })
    }
}

async fn connect_within<F>(connect_timeout: Duration, connect: F) -> Result<(), String>
where
    F: Future<Output = io::Result<TcpStream>>,
{
    match tokio::time::timeout(connect_timeout, connect).await {
        Ok(Ok(stream)) => {
            drop(stream);
            Ok(())
        }
        Ok(Err(error)) => Err(format!("connection failed: {error}")),
        Err(_) => Err(format!(
            "connection timed out after {} ms",
            connect_timeout.as_millis()
        )),
    }
}

#[cfg(test)]
mod tests {
    use std::net::TcpListener;
    use std::time::Instant;

    use super::*;

    fn local_target(port: u16) -> ProbeTarget {
        ProbeTarget::new("127.0.0.1", port, Duration::from_millis(500))
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn connects_to_listening_port() {
        let listener = TcpListener::bind("127.0.0.1:0").expect("listener should bind");
        let port = listener.local_addr().expect("listener address").port();

        let result = TcpReachabilityProbe.check(&local_target(port));

        assert_eq!(result, Ok(()));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn reports_refused_port() {
        let listener = TcpListener::bind("127.0.0.1:0").expect("listener should bind");
        let port = listener.local_addr().expect("listener address").port();
        drop(listener);

        let error = TcpReachabilityProbe
            .check(&local_target(port))
            .expect_err("closed port should be unreachable");

        assert!(error.starts_with("connection failed"));
    }

    #[tokio::test]
    async fn stalled_connect_times_out() {
        let started_at = Instant::now();

        let error = connect_within(
            Duration::from_millis(50),
            std::future::pending::<io::Result<TcpStream>>(),
        )
        .await
        .expect_err("a connect that never resolves should time out");

        assert_eq!(error, "connection timed out after 50 ms");
        assert!(started_at.elapsed() >= Duration::from_millis(50));
    }

    #[tokio::test]
    async fn connect_error_is_reported_before_timeout() {
        let error = connect_within(Duration::from_secs(3), async {
            Err::<TcpStream, _>(io::Error::from(io::ErrorKind::ConnectionRefused))
        })
        .await
        .expect_err("a refused connect should fail");

        assert!(error.starts_with("connection failed"));
    }

    #[tokio::test]
    #[should_panic]
    async fn check_requires_multi_threaded_runtime() {
        let listener = TcpListener::bind("127.0.0.1:0").expect("listener should bind");
        let port = listener.local_addr().expect("listener address").port();

        let _ = TcpReachabilityProbe.check(&local_target(port));
    }
}
