use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;
use crate::enums::commands::{Commands, ParamsCommand};
use crate::enums::dispatch_outcome::DispatchOutcome;
use crate::enums::value_format::ValueFormat;
use crate::config::toml_file_store::TomlFileStore;
use crate::errors::{LockSnitchError, LockSnitchResult};
use crate::services::lock_event_watcher::LockEventWatcher;
use crate::services::parameter_store::ParameterStore;
use crate::services::settings_validation_tester::SettingsValidationTester;
use crate::services::webhook_dispatcher::WebhookDispatcher;
use crate::services::webhook_url_builder::WebhookUrlBuilder;
use crate::system::session_monitor;
use crate::traits::config_store::ConfigStore;
use crate::traits::webhook_sender::WebhookSender;

pub struct CommandRunner {
    start_time: Option<Instant>,
    parameters: ParameterStore,
    sender: Arc<dyn WebhookSender>,
    config_path: PathBuf,
}

impl CommandRunner {
    pub fn new(config_path: Option<PathBuf>) -> LockSnitchResult<Self> {
        let store = match config_path {
            Some(path) => TomlFileStore::new(path),
            None => TomlFileStore::open_default()?,
        };
        let config_path = store.path().to_path_buf();

        Ok(Self::with_parts(Arc::new(store), Arc::new(WebhookDispatcher::new()), config_path))
    }

    pub fn with_parts(store: Arc<dyn ConfigStore>, sender: Arc<dyn WebhookSender>, config_path: PathBuf) -> Self {
        Self {
            start_time: None,
            parameters: ParameterStore::new(store),
            sender,
            config_path,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> LockSnitchResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Run => self.watch_command().await,
            Commands::Init => self.init_command(),
            Commands::Show => self.show_command(),
            Commands::Set { key, value } => self.set_command(&key, &value),
            Commands::Params { action } => self.params_command(action),
            Commands::Preview => self.preview_command(),
            Commands::Test { base_url, param_name, format } => self.test_command(base_url, param_name, format).await,
        };

        if let Some(start) = self.start_time {
            log::debug!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    async fn watch_command(&self) -> LockSnitchResult<()> {
        log::info!("🚀 Starting lock-snitch...");
        self.parameters.register_defaults()?;
        log::info!("📋 Settings file: {}", self.config_path.display());

        let mut watcher = LockEventWatcher::new(self.parameters.clone(), Arc::clone(&self.sender));
        let mut source = session_monitor::platform_source()?;
        watcher.subscribe_to(source.as_mut())?;

        tokio::spawn(watcher.run());

        log::info!("👀 Watching for screen lock changes. Press Ctrl+C to stop.");
        tokio::task::block_in_place(session_monitor::run_platform_loop)
    }

    fn init_command(&self) -> LockSnitchResult<()> {
        log::info!("🚀 Initializing lock-snitch configuration...");

        self.parameters.register_defaults()?;
        if self.parameters.load_parameters().ok().flatten().is_none() {
            self.parameters.save_parameters(&self.parameters.parameters()?)?;
        }

        log::info!("✅ Settings written to: {}", self.config_path.display());
        log::info!("🔧 Run 'lock-snitch set webhookBaseURL <url>' to point it at your webhook.");
        Ok(())
    }

    fn show_command(&self) -> LockSnitchResult<()> {
        let config = self.parameters.webhook_config()?;

        log::info!("📋 Settings file: {}", self.config_path.display());
        log::info!("{}", "=".repeat(50));
        log::info!("   Enabled:        {}", if config.enabled { "✅" } else { "❌" });
        log::info!("   Base URL:       {}", config.base_url);
        log::info!("   Parameter name: {}", config.status_param_name);
        log::info!("   Value format:   {}", config.status_format);
        log::info!("   Parameters:     {}", config.parameters.len());
        log::info!(
            "   Preview:        {}",
            WebhookUrlBuilder::preview(&config.base_url, &config.parameters, &config.status_param_name, config.status_format)
        );
        Ok(())
    }

    fn set_command(&self, key: &str, value: &str) -> LockSnitchResult<()> {
        self.parameters.set_from_str(key, value)?;
        log::info!("✅ {} = {}", key, value);
        Ok(())
    }

    fn params_command(&self, action: ParamsCommand) -> LockSnitchResult<()> {
        match action {
            ParamsCommand::List => {
                let parameters = self.parameters.parameters()?;
                if parameters.is_empty() {
                    log::info!("⚠️ No additional parameters configured.");
                    return Ok(());
                }

                for (i, parameter) in parameters.iter().enumerate() {
                    let note = if parameter.is_sendable() { "" } else { "  (not sent: empty key)" };
                    log::info!("{}. {}={}{}", i + 1, parameter.key, parameter.value, note);
                    log::info!("   id: {}", parameter.id);
                }
                Ok(())
            }
            ParamsCommand::Add { key, value } => {
                let parameter = self.parameters.add_parameter(&key, &value)?;
                log::info!("✅ Added {}={} (id: {})", parameter.key, parameter.value, parameter.id);
                Ok(())
            }
            ParamsCommand::Remove { id } => {
                let parsed = Uuid::parse_str(&id)
                    .map_err(|_| LockSnitchError::validation_error("id", &id, "UUID", Some("Run 'lock-snitch params list' to see ids")))?;

                if !self.parameters.remove_parameter(parsed)? {
                    return Err(LockSnitchError::validation_error("id", &id, "existing parameter", Some("Run 'lock-snitch params list' to see ids")));
                }

                log::info!("🗑️ Removed parameter {}", id);
                Ok(())
            }
        }
    }

    fn preview_command(&self) -> LockSnitchResult<()> {
        let config = self.parameters.webhook_config()?;
        println!(
            "{}",
            WebhookUrlBuilder::preview(&config.base_url, &config.parameters, &config.status_param_name, config.status_format)
        );
        Ok(())
    }

    async fn test_command(
        &self,
        base_url: Option<String>,
        param_name: Option<String>,
        format: Option<ValueFormat>,
    ) -> LockSnitchResult<()> {
        let base_url = match base_url {
            Some(base_url) => base_url,
            None => self.parameters.base_url()?,
        };
        let param_name = match param_name {
            Some(param_name) => param_name,
            None => self.parameters.status_param_name()?,
        };
        let format = match format {
            Some(format) => format,
            None => self.parameters.status_format()?,
        };
        let parameters = self.parameters.parameters()?;

        let tester = SettingsValidationTester::new(Arc::clone(&self.sender));
        match tester.test(&base_url, &parameters, &param_name, format).await? {
            DispatchOutcome::Success(status) => {
                log::info!("✅ {}", DispatchOutcome::Success(status));
                Ok(())
            }
            DispatchOutcome::Failure(reason) => match reason.parse::<u16>() {
                Ok(status_code) => Err(LockSnitchError::HttpError { url: Some(base_url), status_code }),
                Err(_) => Err(LockSnitchError::TransportFailure { url: Some(base_url), reason }),
            },
        }
    }
}
