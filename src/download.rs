//! Download release artifacts.
//!
//! Redirects are handled by hand: a 301/302 from the release server is
//! followed exactly once (GitHub sends release downloads to its object
//! storage), and a redirect from the second hop is an error.

use std::path::Path;
use std::time::Duration;

use futures_util::StreamExt;
use reqwest::{Client, Response, StatusCode};
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use crate::error::{InstallError, Result};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("envsafe-installer/", env!("CARGO_PKG_VERSION"));

/// Build the HTTP client used for release downloads. Automatic redirects are
/// disabled; [`download_to_file`] follows at most one.
pub fn build_client() -> Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .connect_timeout(CONNECT_TIMEOUT)
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .map_err(|e| InstallError::Client(e.to_string()))
}

/// Download `url` into `dest`, returning the number of bytes written.
///
/// `dest` is only created once a 200 response is in hand. If the body stream
/// fails part way, the partial file is removed before the error is returned.
pub async fn download_to_file(client: &Client, url: &str, dest: &Path) -> Result<u64> {
    let mut response = get(client, url).await?;

    if is_followable_redirect(response.status()) {
        let location = redirect_target(&response)?;
        debug!(from = url, to = %location, "following redirect");
        response = get(client, location.as_str()).await?;

        if response.status().is_redirection() {
            return Err(InstallError::RedirectLimit {
                url: response.url().to_string(),
            });
        }
    }

    match response.status() {
        StatusCode::OK => stream_to_file(response, dest).await,
        StatusCode::NOT_FOUND => Err(InstallError::NotFound {
            url: response.url().to_string(),
        }),
        status => Err(InstallError::HttpStatus {
            status: status.as_u16(),
            url: response.url().to_string(),
        }),
    }
}

fn is_followable_redirect(status: StatusCode) -> bool {
    status == StatusCode::MOVED_PERMANENTLY || status == StatusCode::FOUND
}

async fn get(client: &Client, url: &str) -> Result<Response> {
    client
        .get(url)
        .send()
        .await
        .map_err(|e| InstallError::Network {
            url: url.to_string(),
            reason: e.to_string(),
        })
}

/// Resolve the `Location` header against the URL that produced it.
fn redirect_target(response: &Response) -> Result<reqwest::Url> {
    let missing = || InstallError::MissingLocation {
        url: response.url().to_string(),
    };

    let location = response
        .headers()
        .get(reqwest::header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(missing)?;

    response.url().join(location).map_err(|_| missing())
}

async fn stream_to_file(response: Response, dest: &Path) -> Result<u64> {
    let url = response.url().to_string();
    let file = tokio::fs::File::create(dest)
        .await
        .map_err(|e| InstallError::io(dest, e))?;

    match write_body(response, file, dest, &url).await {
        Ok(written) => Ok(written),
        Err(e) => {
            discard_partial(dest).await;
            Err(e)
        }
    }
}

async fn write_body(
    response: Response,
    mut file: tokio::fs::File,
    dest: &Path,
    url: &str,
) -> Result<u64> {
    let mut stream = response.bytes_stream();
    let mut written: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| InstallError::Network {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        file.write_all(&chunk)
            .await
            .map_err(|e| InstallError::io(dest, e))?;
        written += chunk.len() as u64;
    }

    file.flush().await.map_err(|e| InstallError::io(dest, e))?;
    file.sync_all().await.map_err(|e| InstallError::io(dest, e))?;
    debug!(bytes = written, path = %dest.display(), "download complete");
    Ok(written)
}

/// Best effort: a failure to delete is logged and otherwise ignored.
async fn discard_partial(dest: &Path) {
    if let Err(e) = tokio::fs::remove_file(dest).await {
        if e.kind() != std::io::ErrorKind::NotFound {
            warn!(path = %dest.display(), error = %e, "failed to remove partial download");
        }
    }
}
