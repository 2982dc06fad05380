use std::sync::Arc;

use spb_core::config::Config;
use spb_edge::EdgeClient;

#[tokio::main]
async fn main() -> Result<(), spb_core::Error> {
    spb_core::logging::init("spb")?;

    let cfg = Arc::new(Config::load()?);

    let planner = Arc::new(EdgeClient::new(
        cfg.edge_function_url.clone(),
        cfg.supabase_jwt.clone(),
        cfg.request_timeout,
    ));

    spb_telegram::router::run_polling(cfg, planner)
        .await
        .map_err(|e| spb_core::Error::External(format!("telegram bot failed: {e}")))?;

    Ok(())
}
