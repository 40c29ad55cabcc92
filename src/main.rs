// This file is part of the product OnDot Web.
// SPDX-FileCopyrightText: 2025-2026 OnDot Team
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use actix_web::rt::System;
use actix_web::{App, HttpServer, middleware::Logger, web};
use log::{LevelFilter, info};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use ondot_web::app_state::AppState;
use ondot_web::bootstrap::{self, BootstrapResult};
use ondot_web::builtin;
use ondot_web::config::ValidatedConfig;
use ondot_web::page;
use ondot_web::seo;
use ondot_web::util::ReleaseTracker;

fn main() {
    let exit_code = run();
    std::process::exit(exit_code);
}

fn run() -> i32 {
    let parsed_args = match parse_args() {
        Ok(args) => args,
        Err(error) => {
            eprintln!("❌ Invalid command line arguments: {}", error);
            eprintln!("❌ Use -C <root> to set the runtime directory.");
            return 1;
        }
    };

    if parsed_args.show_help {
        print!("{}", help_text());
        return 0;
    }

    let bootstrap = match bootstrap::bootstrap_runtime(&parsed_args.runtime_root) {
        Ok(result) => result,
        Err(error) => {
            eprintln!("❌ Bootstrap error: {}", error);
            eprintln!("❌ Application cannot start with invalid configuration.");
            return 1;
        }
    };

    if bootstrap.created_config {
        eprintln!("[bootstrap] created config.yaml with default contents");
    }

    if let Err(error) = init_logging(&bootstrap.validated_config) {
        eprintln!("❌ Failed to initialize logger: {}", error);
        return 1;
    }

    let result = System::new().block_on(run_server(bootstrap));
    match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("❌ Server failed to start: {}", error);
            1
        }
    }
}

fn init_logging(config: &ValidatedConfig) -> Result<(), log::SetLoggerError> {
    let log_level = match config.logging.level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    };

    // Configure logging with a stable format
    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f UTC"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()
}

async fn run_server(bootstrap: BootstrapResult) -> std::io::Result<()> {
    let validated_config = Arc::new(bootstrap.validated_config);
    info!("Runtime root: {}", bootstrap.root.display());
    info!(
        "✅ Configuration loaded for site '{}'",
        validated_config.site.name
    );

    let release_tracker = Arc::new(ReleaseTracker::new());
    info!(
        "✅ Release tracker initialized with release {}",
        release_tracker.current_hex()
    );

    let app_state = Arc::new(AppState::new());
    info!("✅ Template engine initialized");

    let host = validated_config.server.host.clone();
    let port = validated_config.server.port;
    let workers = validated_config.server.workers;

    let factory = {
        let config_for_app = validated_config.clone();
        let release_tracker_for_app = release_tracker.clone();
        let app_state_for_app = app_state.clone();

        move || {
            App::new()
                .wrap(Logger::default())
                .app_data(web::Data::from(config_for_app.clone()))
                .app_data(web::Data::from(release_tracker_for_app.clone()))
                .app_data(web::Data::from(app_state_for_app.clone()))
                .configure(builtin::configure)
                .route("/robots.txt", web::get().to(seo::robots_txt))
                .route("/sitemap.xml", web::get().to(seo::sitemap_xml))
                .route("/", web::get().to(page::handlers::index))
                .default_service(web::to(page::handlers::not_found))
        }
    };

    let mut server = HttpServer::new(factory);
    if workers > 0 {
        server = server.workers(workers);
    }

    info!("🚀 Listening on http://{}:{}", host, port);
    server.bind((host.as_str(), port))?.run().await
}

struct ParsedArgs {
    runtime_root: PathBuf,
    show_help: bool,
}

fn parse_args() -> Result<ParsedArgs, String> {
    let mut runtime_root = PathBuf::from(".");
    let mut show_help = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-C" => {
                let value = args
                    .next()
                    .ok_or_else(|| "-C requires a directory argument".to_string())?;
                runtime_root = PathBuf::from(value);
            }
            "-h" | "--help" => {
                show_help = true;
            }
            other => {
                return Err(format!("unknown argument '{}'", other));
            }
        }
    }

    Ok(ParsedArgs {
        runtime_root,
        show_help,
    })
}

fn help_text() -> String {
    [
        "ondot-web — serves the OnDot team introduction page",
        "",
        "Usage: ondot-web [-C <root>]",
        "",
        "  -C <root>   runtime directory holding config.yaml (default: .)",
        "  -h, --help  show this help",
        "",
    ]
    .join("\n")
}
