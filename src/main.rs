use actix_web::{App, HttpServer, middleware::Logger, web};
use chrono::Local;
use env_logger::{Env, Target};
use std::io::Write; // for env_logger custom formatter

use talentscout_backend::{
    config::Config,
    database::{create_pool, run_migrations},
    external::{AnthropicClient, TalentPoolClient},
    handlers,
    middlewares::{AuthMiddleware, create_cors},
    services::*,
    swagger::swagger_config,
    utils::JwtService,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let ts = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");
            let level = record.level().as_str().to_ascii_lowercase();
            let msg_json = serde_json::to_string(&format!("{}", record.args()))
                .unwrap_or_else(|_| "\"<invalid utf8>\"".to_string());
            writeln!(
                buf,
                "{{\"timestamp\":\"{}\",\"level\":\"{}\",\"message\":{},\"target\":\"{}\"}}",
                ts,
                level,
                msg_json,
                record.target(),
            )
        })
        .target(Target::Stdout)
        .init();

    let config = Config::from_toml().expect("Failed to load configuration file");

    let pool = create_pool(&config.database)
        .await
        .expect("Failed to create database connection pool");

    run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    let jwt_service = JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expires_in,
        config.jwt.refresh_token_expires_in,
    );

    let anthropic_client = AnthropicClient::new(config.anthropic.clone());
    let talent_pool_client = TalentPoolClient::new(config.talent_pool.clone());

    let credit_service = CreditService::new(pool.clone());
    let auth_service = AuthService::new(pool.clone(), jwt_service.clone(), credit_service.clone());
    let user_service = UserService::new(pool.clone());
    let record_service = RecordService::new(pool.clone());
    let record_template_service = RecordTemplateService::new(pool.clone());
    let tag_service = TagService::new(pool.clone());
    let point_transaction_service = PointTransactionService::new(pool.clone());
    let talent_query_service = TalentQueryService::new(
        pool.clone(),
        anthropic_client,
        talent_pool_client,
        credit_service.clone(),
    );

    log::info!(
        "Starting HTTP server at {}:{}",
        config.server.host,
        config.server.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(create_cors())
            .wrap(AuthMiddleware::new(jwt_service.clone()))
            .app_data(web::Data::new(auth_service.clone()))
            .app_data(web::Data::new(user_service.clone()))
            .app_data(web::Data::new(credit_service.clone()))
            .app_data(web::Data::new(record_service.clone()))
            .app_data(web::Data::new(record_template_service.clone()))
            .app_data(web::Data::new(tag_service.clone()))
            .app_data(web::Data::new(point_transaction_service.clone()))
            .app_data(web::Data::new(talent_query_service.clone()))
            .configure(swagger_config)
            .service(
                web::scope("/api/v1")
                    .configure(handlers::auth_config)
                    .configure(handlers::user_config)
                    .configure(handlers::credit_config)
                    .configure(handlers::record_config)
                    .configure(handlers::record_template_config)
                    .configure(handlers::tag_config)
                    .configure(handlers::point_transaction_config)
                    .configure(handlers::talent_query_config),
            )
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await
}
