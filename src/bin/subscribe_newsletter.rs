use lambda_runtime::{Error, service_fn};
use mailproxy::api::newsletter_handler;
use mailproxy::clients::auchan::AuchanClient;
use mailproxy::core::config::AuchanConfig;

#[tokio::main]
async fn main() -> Result<(), Error> {
    mailproxy::setup_logging();

    let config = AuchanConfig::from_env().map_err(Error::from)?;
    let client = AuchanClient::new(&config);
    let client = &client;

    lambda_runtime::run(service_fn(move |event| {
        newsletter_handler::handler(client, event)
    }))
    .await
}
