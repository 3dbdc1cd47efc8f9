use anyhow::Context;
use stacks_http::ApiClient;
use stacks_kernel::settings::Settings;

fn main() -> anyhow::Result<()> {
    let settings = Settings::load().with_context(|| "failed to load stacks settings")?;
    stacks_telemetry::init(&settings.telemetry)?;

    tracing::info!(
        env = ?settings.environment,
        backend = %settings.backend.base_url,
        "stacks-app bootstrap starting"
    );

    let api = ApiClient::new(&settings.backend)
        .with_context(|| "failed to construct backend client")?;

    tracing::info!(
        backend = %api.base_url(),
        routes = stacks_app::routes::ROUTES.len(),
        "stacks-app bootstrap complete"
    );
    Ok(())
}
