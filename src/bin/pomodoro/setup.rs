use std::path::PathBuf;
use std::sync::Arc;

use pomodoro::client::app::connector::{Connector, UnixConnector};
use pomodoro::client::outbound::{GetService, SwitchService};
use pomodoro::client::Client;
use pomodoro::config;
use pomodoro::domain::client::ApplicationCore;
use snafu::{prelude::*, Whatever};

use crate::cli::Arguments;

const APP_NAME: &str = "pomodoro";

pub fn bootstrap(args: &Arguments) -> Result<Client, Whatever> {
    let socket = socket(args)?;
    let core = core(socket);
    Ok(Client::new(core))
}

fn socket(args: &Arguments) -> Result<PathBuf, Whatever> {
    // An explicit socket makes the configuration file irrelevant.
    if let Some(path) = &args.socket {
        return Ok(path.clone());
    }

    let res = match &args.config {
        Some(path) => config::load_with_path(path),
        None => config::load_with_xdg(APP_NAME),
    };
    let configuration = res.whatever_context("Could not load configuration")?;

    Ok(config::socket_path(None, &configuration))
}

fn core(socket: PathBuf) -> Arc<ApplicationCore> {
    let connector: Arc<dyn Connector> = Arc::new(UnixConnector::new(socket));

    let get_port = Arc::new(GetService::new(Arc::clone(&connector)));
    let switch_port = Arc::new(SwitchService::new(connector));

    Arc::new(ApplicationCore::setup(get_port, switch_port))
}
