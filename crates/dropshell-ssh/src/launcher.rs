//! Foreground interactive shell over SSH

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use dropshell_core::prelude::*;
use dropshell_core::signals::ShutdownSignals;
use russh::client::{self, Handle};
use russh::keys::{PrivateKey, PrivateKeyWithHashAlg};
use russh::{Channel, ChannelMsg, Disconnect};

use crate::handler::{ClientHandler, HostKeyPolicy};
use crate::outcome::{classify_end, RemoteExit, SessionEnd, SessionOutcome};
use crate::terminal::{self, RawModeGuard, ResizeEvents};

/// Run one interactive shell on `address` and report how it ended
#[trait_variant::make(SessionLauncher: Send)]
pub trait LocalSessionLauncher {
    async fn launch(&self, address: &str) -> Result<SessionOutcome>;
}

/// Connection settings for [`SshLauncher`]
#[derive(Debug, Clone)]
pub struct SshConfig {
    pub user: String,
    pub port: u16,
    pub key_path: PathBuf,
    pub term: String,
    pub host_key_policy: HostKeyPolicy,
}

impl Default for SshConfig {
    fn default() -> Self {
        let key_path = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".ssh")
            .join("id_rsa");
        Self {
            user: "root".to_string(),
            port: 22,
            key_path,
            term: "xterm".to_string(),
            host_key_policy: HostKeyPolicy::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SshLauncher {
    config: SshConfig,
}

impl SshLauncher {
    pub fn new(config: SshConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SshConfig {
        &self.config
    }

    fn load_key(&self) -> Result<PrivateKey> {
        russh::keys::load_secret_key(&self.config.key_path, None)
            .map_err(|e| Error::key_load(&self.config.key_path, e.to_string()))
    }

    async fn connect(&self, host: &str, key: PrivateKey) -> Result<Handle<ClientHandler>> {
        let target = format!("{host}:{}", self.config.port);
        let handler = ClientHandler::new(host, self.config.port, self.config.host_key_policy);
        let config = Arc::new(client::Config::default());

        info!("Connecting to {target} as {}", self.config.user);
        let mut handle = client::connect(config, (host, self.config.port), handler)
            .await
            .map_err(|e| Error::connect(&target, e.to_string()))?;

        let authenticated = authenticate(&mut handle, &self.config.user, key)
            .await
            .map_err(|e| Error::connect(&target, e.to_string()));

        match authenticated {
            Ok(true) => Ok(handle),
            Ok(false) => {
                disconnect(&handle).await;
                Err(Error::AuthRejected {
                    user: self.config.user.clone(),
                    address: target,
                })
            }
            Err(e) => {
                disconnect(&handle).await;
                Err(e)
            }
        }
    }

    async fn run_shell(&self, handle: &Handle<ClientHandler>) -> Result<SessionOutcome> {
        let mut channel = handle
            .channel_open_session()
            .await
            .map_err(|e| Error::session_channel(e.to_string()))?;

        let result = self.drive_channel(&mut channel).await;

        if let Err(e) = channel.close().await {
            debug!("Channel close after session: {e}");
        }
        result
    }

    async fn drive_channel(&self, channel: &mut Channel<client::Msg>) -> Result<SessionOutcome> {
        let (cols, rows) = terminal::size()?;
        debug!("Requesting {} PTY {cols}x{rows}", self.config.term);

        channel
            .request_pty(true, &self.config.term, cols, rows, 0, 0, &[])
            .await
            .map_err(|e| Error::pty(e.to_string()))?;
        wait_for_reply(channel).await.map_err(Error::pty)?;

        channel
            .request_shell(true)
            .await
            .map_err(|e| Error::shell(e.to_string()))?;
        wait_for_reply(channel).await.map_err(Error::shell)?;

        let _raw = RawModeGuard::enable()?;
        let end = pump(channel).await?;
        classify_end(end)
    }
}

impl SessionLauncher for SshLauncher {
    async fn launch(&self, address: &str) -> Result<SessionOutcome> {
        let host = address.trim();
        if host.is_empty() {
            return Err(Error::connect(address, "no address to connect to"));
        }

        let key = self.load_key()?;
        let handle = self.connect(host, key).await?;

        let result = self.run_shell(&handle).await;
        disconnect(&handle).await;

        match &result {
            Ok(outcome) => info!("Session on {host} ended: {outcome:?}"),
            Err(e) => warn!("Session on {host} failed: {e}"),
        }
        result
    }
}

async fn authenticate(
    handle: &mut Handle<ClientHandler>,
    user: &str,
    key: PrivateKey,
) -> std::result::Result<bool, russh::Error> {
    let hash_alg = handle.best_supported_rsa_hash().await?.flatten();
    let result = handle
        .authenticate_publickey(user, PrivateKeyWithHashAlg::new(Arc::new(key), hash_alg))
        .await?;
    Ok(result.success())
}

async fn disconnect(handle: &Handle<ClientHandler>) {
    if let Err(e) = handle
        .disconnect(Disconnect::ByApplication, "", "English")
        .await
    {
        debug!("Disconnect: {e}");
    }
}

/// Wait for the server to accept or refuse the last want-reply request
async fn wait_for_reply(channel: &mut Channel<client::Msg>) -> std::result::Result<(), String> {
    loop {
        let msg = channel.wait().await;
        match request_reply(msg.as_ref()) {
            Some(reply) => return reply.map_err(str::to_string),
            None => {
                if let Some(ChannelMsg::Data { ref data }) = msg {
                    write_all(&mut std::io::stdout(), data).map_err(|e| e.to_string())?;
                }
            }
        }
    }
}

/// The answer to a channel request, or `None` while it is still outstanding
fn request_reply(msg: Option<&ChannelMsg>) -> Option<std::result::Result<(), &'static str>> {
    match msg {
        Some(ChannelMsg::Success) => Some(Ok(())),
        Some(ChannelMsg::Failure) => Some(Err("refused by server")),
        Some(ChannelMsg::Close) | None => Some(Err("channel closed before the server replied")),
        Some(_) => None,
    }
}

/// Wait for a termination signal, or forever if none can be observed
async fn next_shutdown(signals: &mut Option<ShutdownSignals>) -> &'static str {
    match signals {
        Some(signals) => signals.recv().await,
        None => std::future::pending().await,
    }
}

/// Shuttle bytes between the local terminal and the channel until it closes
/// or this process is asked to stop
async fn pump(channel: &mut Channel<client::Msg>) -> Result<SessionEnd> {
    let mut stdin = terminal::spawn_stdin_pump();
    let mut resize = ResizeEvents::new();
    let mut shutdown = ShutdownSignals::register()
        .map_err(|e| warn!("Session will not observe termination signals: {e}"))
        .ok();
    let mut stdin_open = true;
    let mut exit = None;

    loop {
        tokio::select! {
            msg = channel.wait() => match msg {
                Some(ChannelMsg::Data { ref data }) => {
                    write_all(&mut std::io::stdout(), data)?;
                }
                Some(ChannelMsg::ExtendedData { ref data, ext }) => {
                    if ext == 1 {
                        write_all(&mut std::io::stderr(), data)?;
                    } else {
                        write_all(&mut std::io::stdout(), data)?;
                    }
                }
                Some(ChannelMsg::ExitStatus { exit_status }) => {
                    debug!("Remote exit status {exit_status}");
                    exit = Some(RemoteExit::Status(exit_status));
                }
                Some(ChannelMsg::ExitSignal { signal_name, .. }) => {
                    debug!("Remote exit signal {signal_name:?}");
                    exit = Some(RemoteExit::Signal(format!("{signal_name:?}")));
                }
                Some(ChannelMsg::Eof) => debug!("Remote EOF"),
                Some(ChannelMsg::Close) | None => break,
                Some(_) => {}
            },

            input = stdin.recv(), if stdin_open => match input {
                Some(bytes) => {
                    channel
                        .data(&bytes[..])
                        .await
                        .map_err(|e| Error::session_io(format!("failed to send input: {e}")))?;
                }
                None => {
                    stdin_open = false;
                    if let Err(e) = channel.eof().await {
                        debug!("Sending EOF: {e}");
                    }
                }
            },

            name = next_shutdown(&mut shutdown) => {
                warn!("{name} received, ending session");
                return Ok(SessionEnd::LocalSignal(name));
            }

            _ = resize.recv() => {
                if let Ok((cols, rows)) = terminal::size() {
                    match channel.window_change(cols, rows, 0, 0).await {
                        Ok(()) => debug!("Window resized to {cols}x{rows}"),
                        Err(e) => warn!("Failed to send window change: {e}"),
                    }
                }
            }
        }
    }

    Ok(SessionEnd::Closed(exit))
}

fn write_all(out: &mut impl Write, data: &[u8]) -> Result<()> {
    out.write_all(data)
        .and_then(|()| out.flush())
        .map_err(|e| Error::session_io(e.to_string()))
}
