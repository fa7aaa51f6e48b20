use std::io::Write;

use anyhow::{Context, Result};
use remotefs_fetch::{ClientSettings, FetchOptions, Io, RemoteFilesystem, ReqwestClient};

use super::app::{GetArg, GlobalArgs};

pub fn get<I: Io>(arg: &GetArg, global: &GlobalArgs, io: I) -> Result<()> {
    let fs = RemoteFilesystem::<ReqwestClient, I>::with_settings(
        io,
        client_settings(global),
        FetchOptions::default().progress(!global.no_progress),
    )?;
    let origin = arg.origin();
    let url = arg.url.as_str();
    tracing::debug!(url, origin = %origin, output = ?arg.output, "get");

    match &arg.output {
        Some(path) => fs.copy(&origin, url, path)?,
        None => {
            let contents = fs.get_contents(&origin, url)?;
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&contents).context("failed to write to stdout")?;
            stdout.flush().context("failed to write to stdout")?;
        }
    }
    Ok(())
}

fn client_settings(global: &GlobalArgs) -> ClientSettings {
    let settings = ClientSettings::default()
        .connect_timeout(global.connect_timeout())
        .timeout(global.timeout());
    match &global.proxy {
        Some(proxy) => settings.proxy(proxy.clone()),
        None => settings,
    }
}
