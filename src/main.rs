use actix_web::{middleware::Logger, web, App, HttpServer};
use pdf_quiz_server::{
    app_state::AppState,
    config::Config,
    handlers,
    middleware::{cors_policy, RequestIdMiddleware},
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    if let Err(err) = config.validate() {
        log::error!("{}", err);
        return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, err.to_string()));
    }

    let bind_addr = (config.web_server_host.clone(), config.web_server_port);
    log::info!(
        "Using model '{}' at {} (timeout {}s)",
        config.ai_model,
        config.ai_api_base,
        config.ai_timeout_secs
    );

    let state = AppState::new(config);

    log::info!("starting HTTP server on {}:{}", bind_addr.0, bind_addr.1);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(RequestIdMiddleware)
            .wrap(Logger::new(r#"%a "%r" %s %b %{x-request-id}o %Ts"#))
            .wrap(cors_policy(&state.config))
            .configure(handlers::configure)
    })
    .bind(bind_addr)?
    .run()
    .await
}
