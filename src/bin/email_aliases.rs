use lambda_runtime::{Error, service_fn};
use mailproxy::api::alias_handler;
use mailproxy::clients::addy::AddyClient;
use mailproxy::core::config::AddyConfig;

#[tokio::main]
async fn main() -> Result<(), Error> {
    mailproxy::setup_logging();

    let config = AddyConfig::from_env().map_err(Error::from)?;
    let client = AddyClient::new(&config);
    let client = &client;

    lambda_runtime::run(service_fn(move |event| alias_handler::handler(client, event))).await
}
