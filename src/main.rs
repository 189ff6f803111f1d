use actix_web::web::Data;
use actix_web::{App, HttpServer, middleware::Logger};
use std::sync::Arc;

use rusty_golf_stats::app::configure;
use rusty_golf_stats::args;
use rusty_golf_stats::controller::backend::{BackendClient, GolfApi};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = args::args_checks()?;
    let client = BackendClient::from_args(&args)?;
    log::info!(
        "Serving on {}:{} against backend {}",
        args.bind,
        args.port,
        client.base_url()
    );

    let api: Arc<dyn GolfApi> = Arc::new(client);
    let bind = (args.bind.clone(), args.port);
    let args_for_web = args.clone();

    HttpServer::new(move || {
        let static_dir = args_for_web.static_dir.clone();
        App::new()
            .wrap(Logger::default())
            .app_data(Data::from(api.clone()))
            .app_data(Data::new(args_for_web.clone()))
            .configure(|cfg| configure(cfg, &static_dir))
    })
    .bind(bind)?
    .run()
    .await?;
    Ok(())
}
