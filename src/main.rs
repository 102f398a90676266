use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info, warn};

use wm_policy::config::Config;
use wm_policy::services::tools::WindowManagerTools;
use wm_policy::services::{create_event_source, create_policy, EventDispatcher, InMemoryTools};

#[derive(Parser, Debug)]
#[command(name = "wm-policy")]
#[command(about = "Политика ввода оконного менеджера поверх рабочего стола в памяти")]
struct Args {
    /// Путь к файлу конфигурации
    #[arg(short, long, default_value = "wm-policy.toml")]
    config: String,

    /// Проиграть встроенный сценарий вместо чтения событий из stdin
    #[arg(long)]
    dry_run: bool,

    /// Уровень логирования (по умолчанию из конфигурации)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Загрузка конфигурации
    let config = Arc::new(Config::load(&args.config)?);

    // Инициализация системы логирования
    let filter = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.effective_filter());
    init_tracing(&filter, &config.logging.format)?;

    info!("Запуск wm-policy v{}", env!("CARGO_PKG_VERSION"));
    info!("Конфигурация загружена из: {}", args.config);

    if args.dry_run {
        warn!("Режим сухого запуска - события из встроенного сценария");
    }

    // Хост, политика, диспетчер и источник событий
    let tools = Arc::new(InMemoryTools::from_config(&config.desktop));
    let policy = create_policy(&config.policy, tools.clone());
    let dispatcher = EventDispatcher::new(policy);
    info!("Политика '{}' подключена", dispatcher.policy_name());

    let source = create_event_source(config.clone(), dispatcher, args.dry_run)?;
    let mut source_handle = tokio::spawn(async move { source.run().await });

    tokio::select! {
        result = &mut source_handle => {
            match result {
                Ok(Ok(())) => info!("Источник событий завершил работу"),
                Ok(Err(e)) => error!("Ошибка в источнике событий: {}", e),
                Err(e) => error!("Задача источника событий упала: {}", e),
            }
        }
        result = signal::ctrl_c() => {
            match result {
                Ok(()) => info!("Получен сигнал завершения (Ctrl+C)"),
                Err(err) => error!("Ошибка при ожидании сигнала завершения: {}", err),
            }
            source_handle.abort();
        }
    }

    info!("Итоговое расположение окон:");
    let active = tools.active_window();
    for window in tools.windows() {
        let marker = if Some(window.id) == active { "*" } else { " " };
        info!(
            "{} {} \"{}\" ({}) {}",
            marker,
            window.id,
            window.title,
            window.app,
            window.rectangle()
        );
    }

    info!("wm-policy завершил работу");
    Ok(())
}

fn init_tracing(level: &str, format: &str) -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))?;

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        "full" => registry.with(tracing_subscriber::fmt::layer()).init(),
        _ => registry
            .with(tracing_subscriber::fmt::layer().compact())
            .init(),
    }

    Ok(())
}
